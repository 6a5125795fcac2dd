use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is not a number")]
    NotANumber,
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("too many decimal places, maximum is {0}")]
    TooManyDecimals(u8),
    #[error("amount is too large")]
    Overflow,
}

/// Permissive validation used at submission time: the trimmed text must read
/// as a finite decimal strictly greater than zero.
pub fn is_valid_amount(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map(|value| value.is_finite() && value > 0.0)
        .unwrap_or(false)
}

/// Exact conversion from a decimal string to integer base units.
///
/// The integer and fractional parts are parsed separately so values like
/// "0.1" convert without floating point rounding. Scientific notation is
/// rejected, as is a fractional part longer than `decimals` digits.
pub fn parse_coin(text: &str, decimals: u8) -> Result<u128, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AmountError::NotANumber);
    }

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::NotANumber);
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(AmountError::NotANumber);
    }
    if frac_part.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals(decimals));
    }

    let scale = 10u128.pow(decimals as u32);
    let integer: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| AmountError::Overflow)?
    };
    let fraction: u128 = if frac_part.is_empty() {
        0
    } else {
        let parsed: u128 = frac_part.parse().map_err(|_| AmountError::Overflow)?;
        parsed * 10u128.pow((decimals as usize - frac_part.len()) as u32)
    };

    let value = integer
        .checked_mul(scale)
        .and_then(|value| value.checked_add(fraction))
        .ok_or(AmountError::Overflow)?;
    if value == 0 {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

/// Format an integer base-unit value back to a decimal string, with
/// trailing zeros of the fractional part removed.
pub fn format_coin(value: u128, decimals: u8) -> String {
    let scale = 10u128.pow(decimals as u32);
    let integer = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return integer.to_string();
    }
    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", integer, fraction.trim_end_matches('0'))
}

/// Keep the text preceding any parenthesized detail suffix, dropping the
/// verbose provider-specific remainder of the message.
pub fn truncate_provider_error(message: &str) -> &str {
    match message.split_once('(') {
        Some((head, _)) => head.trim_end(),
        None => message,
    }
}
