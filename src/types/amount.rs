//! Monetary amount rules shared by every ledger operation
//!
//! Amounts are `Decimal` values with at most two fractional digits. Textual
//! input goes through [`parse_amount`], which validates the representation
//! itself, so `"10.555"` is rejected instead of being rounded into a valid
//! amount. Typed input goes through [`validate_amount`], which rejects any
//! value carrying a non-zero third fractional digit.

use crate::types::error::LedgerError;
use rust_decimal::Decimal;

/// Lowest balance an account may hold
pub const MIN_BALANCE: Decimal = Decimal::ZERO;

/// Highest balance an account may hold (999999.99)
pub const MAX_BALANCE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Smallest single deposit (0.01)
pub const MIN_DEPOSIT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest single deposit (10000.00)
pub const MAX_DEPOSIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

const MAX_FRACTION_DIGITS: u32 = 2;

/// Parse a user-supplied amount string
///
/// Accepts `digits` or `digits.d` / `digits.dd`, optionally surrounded by
/// whitespace and `$` symbols. Signs, exponents, thousands separators and a
/// third fractional digit are all rejected.
///
/// # Errors
///
/// Returns `LedgerError::InvalidAmount` if the input is empty or malformed.
pub fn parse_amount(input: &str, operation: &str) -> Result<Decimal, LedgerError> {
    let cleaned = input.trim().replace('$', "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(LedgerError::invalid_amount(
            operation,
            input.trim(),
            "amount cannot be empty",
        ));
    }

    let (units, fraction) = match cleaned.split_once('.') {
        Some((units, fraction)) => (units, Some(fraction)),
        None => (cleaned, None),
    };

    let digits_only = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !digits_only(units) {
        return Err(LedgerError::invalid_amount(
            operation,
            cleaned,
            "use a format like 100.50",
        ));
    }

    if let Some(fraction) = fraction {
        if !digits_only(fraction) {
            return Err(LedgerError::invalid_amount(
                operation,
                cleaned,
                "use a format like 100.50",
            ));
        }
        if fraction.len() > MAX_FRACTION_DIGITS as usize {
            return Err(LedgerError::invalid_amount(
                operation,
                cleaned,
                "at most 2 decimal places are allowed",
            ));
        }
    }

    // from_str would round past 28 significant digits
    Decimal::from_str_exact(cleaned)
        .map_err(|_| LedgerError::invalid_amount(operation, cleaned, "amount is too large"))
}

/// Validate a typed amount: non-negative with at most two decimal places
///
/// # Errors
///
/// Returns `LedgerError::InvalidAmount` naming the broken rule.
pub fn validate_amount(amount: Decimal, operation: &str) -> Result<(), LedgerError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::invalid_amount(
            operation,
            amount,
            "amount cannot be negative",
        ));
    }

    if amount.round_dp(MAX_FRACTION_DIGITS) != amount {
        return Err(LedgerError::invalid_amount(
            operation,
            amount,
            "at most 2 decimal places are allowed",
        ));
    }

    Ok(())
}

/// Check that a single deposit lies within `[MIN_DEPOSIT, MAX_DEPOSIT]`
pub fn check_deposit_range(amount: Decimal) -> Result<(), LedgerError> {
    if amount < MIN_DEPOSIT || amount > MAX_DEPOSIT {
        return Err(LedgerError::invalid_amount(
            "Deposit",
            amount,
            &format!("must be between ${MIN_DEPOSIT:.2} and ${MAX_DEPOSIT:.2}"),
        ));
    }
    Ok(())
}

/// Check that a resulting balance lies within `[MIN_BALANCE, MAX_BALANCE]`
pub fn check_balance_limit(balance: Decimal) -> Result<(), LedgerError> {
    if balance < MIN_BALANCE {
        return Err(LedgerError::balance_limit_exceeded(balance, MIN_BALANCE));
    }
    if balance > MAX_BALANCE {
        return Err(LedgerError::balance_limit_exceeded(balance, MAX_BALANCE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole("100", Decimal::new(100, 0))]
    #[case::one_decimal("12.5", Decimal::new(125, 1))]
    #[case::two_decimals("403.34", Decimal::new(40334, 2))]
    #[case::dollar_prefix("$50.00", Decimal::new(5000, 2))]
    #[case::surrounding_whitespace("  7.01 ", Decimal::new(701, 2))]
    #[case::zero("0", Decimal::ZERO)]
    fn test_parse_amount_valid(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input, "Deposit").unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_symbol("$")]
    #[case::three_decimals("10.555")]
    #[case::negative("-5")]
    #[case::plus_sign("+5")]
    #[case::trailing_dot("5.")]
    #[case::leading_dot(".50")]
    #[case::exponent("1e3")]
    #[case::letters("abc")]
    #[case::thousands_separator("1,000")]
    #[case::two_dots("1.2.3")]
    #[case::overflow("99999999999999999999999999999999")]
    #[case::precision_loss("1234567890123456789012345678.99")]
    fn test_parse_amount_rejected(#[case] input: &str) {
        assert!(matches!(
            parse_amount(input, "Deposit"),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_amount_reports_operation() {
        let err = parse_amount("10.555", "Withdrawal").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Withdrawal amount '10.555' is invalid: at most 2 decimal places are allowed"
        );
    }

    #[test]
    fn test_parse_amount_long_input_quotes_text() {
        let err = parse_amount("1234567890123456789012345678.99", "Transfer").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Transfer amount '1234567890123456789012345678.99' is invalid: amount is too large"
        );
    }

    #[rstest]
    #[case::zero(Decimal::ZERO, true)]
    #[case::cents(Decimal::new(1, 2), true)]
    #[case::trailing_zeros(Decimal::new(105000, 4), true)]
    #[case::third_decimal(Decimal::new(100555, 3), false)]
    #[case::negative(Decimal::new(-1, 2), false)]
    fn test_validate_amount(#[case] amount: Decimal, #[case] valid: bool) {
        assert_eq!(validate_amount(amount, "Transfer").is_ok(), valid);
    }

    #[rstest]
    #[case::below_min(Decimal::ZERO, false)]
    #[case::min(MIN_DEPOSIT, true)]
    #[case::max(MAX_DEPOSIT, true)]
    #[case::above_max(Decimal::new(1_000_001, 2), false)]
    fn test_check_deposit_range(#[case] amount: Decimal, #[case] valid: bool) {
        assert_eq!(check_deposit_range(amount).is_ok(), valid);
    }

    #[rstest]
    #[case::floor(MIN_BALANCE, true)]
    #[case::ceiling(MAX_BALANCE, true)]
    #[case::below_floor(Decimal::new(-1, 2), false)]
    #[case::above_ceiling(Decimal::new(100_000_000, 2), false)]
    fn test_check_balance_limit(#[case] balance: Decimal, #[case] valid: bool) {
        assert_eq!(check_balance_limit(balance).is_ok(), valid);
    }

    #[test]
    fn test_limit_constants() {
        assert_eq!(MAX_BALANCE.to_string(), "999999.99");
        assert_eq!(MIN_DEPOSIT.to_string(), "0.01");
        assert_eq!(MAX_DEPOSIT.to_string(), "10000.00");
    }
}
