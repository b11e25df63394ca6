//! Market capitalization and ownership.

use tenor_core::{TenorError, TenorResult};

/// Market capitalization: shares outstanding times price.
#[must_use]
pub fn market_cap(shares_outstanding: f64, price: f64) -> f64 {
    shares_outstanding * price
}

/// Fraction of the company a holding represents.
///
/// # Errors
///
/// Shares outstanding must be positive.
pub fn ownership_fraction(shares_owned: f64, shares_outstanding: f64) -> TenorResult<f64> {
    if shares_outstanding <= 0.0 {
        return Err(TenorError::invalid_input(
            "shares_outstanding must be positive",
        ));
    }
    Ok(shares_owned / shares_outstanding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_market_cap() {
        assert_relative_eq!(market_cap(1e6, 42.0), 42e6, epsilon = 1e-6);
    }

    #[test]
    fn test_ownership_fraction() {
        assert_relative_eq!(
            ownership_fraction(250_000.0, 1e6).unwrap(),
            0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_non_positive_shares_rejected() {
        assert!(ownership_fraction(100.0, 0.0).is_err());
        assert!(ownership_fraction(100.0, -5.0).is_err());
    }
}
