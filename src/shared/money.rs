use rust_decimal::Decimal;

/// Columns holding money are `NUMERIC(12, 2)`.
pub const MONEY_SCALE: u32 = 2;
const MONEY_INTEGER_DIGITS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("must have at most 2 decimal places")]
    TooPrecise,

    #[error("must be less than 10000000000")]
    TooLarge,
}

/// Accepts only amounts the store can hold without rounding or overflow.
pub fn check_money(amount: Decimal) -> Result<Decimal, MoneyError> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(MoneyError::TooPrecise);
    }

    let limit = Decimal::from(10i64.pow(MONEY_INTEGER_DIGITS));
    if amount.abs() >= limit {
        return Err(MoneyError::TooLarge);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_two_decimal_places_are_accepted() {
        assert_eq!(check_money(dec("10.01")), Ok(dec("10.01")));
        assert_eq!(check_money(dec("0")), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        assert!(check_money(dec("10.500")).is_ok());
    }

    #[test]
    fn test_third_decimal_place_is_rejected() {
        assert_eq!(check_money(dec("10.005")), Err(MoneyError::TooPrecise));
    }

    #[test]
    fn test_magnitude_edge() {
        assert!(check_money(dec("9999999999.99")).is_ok());
        assert_eq!(check_money(dec("10000000000")), Err(MoneyError::TooLarge));
    }
}
