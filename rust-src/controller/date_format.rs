//! Date and amount normalization.

use crate::error::Error;


/// Separators tried in order; the first one that splits the input wins.
const DATE_SEPARATORS: [char; 3] = ['-', '.', '/'];


/// Split a date string into its year, month and day tokens.
fn split_date(date: &str) -> Vec<&str> {
    for separator in DATE_SEPARATORS {
        let parts: Vec<&str> = date.split(separator).collect();
        if parts.len() > 1 {
            return parts;
        }
    }

    vec![date]
}


/// Check if `number` lies between `a` and `b` inclusively.
fn is_number_between(number: i32, a: i32, b: i32) -> bool {
    (a..=b).contains(&number)
}


/// Validate a loosely formatted date and render it canonically.
///
/// Accepts `year-month[-day]` with `-`, `.` or `/` as separator and returns
/// `YYYY-MM` or `YYYY-MM-DD` with month and day zero-padded. Days are only
/// checked against 1..=31, not against the length of the month. Dates with
/// more than three components are rejected rather than truncated to
/// `YYYY-MM`.
pub fn format_date(date: &str) -> Result<String, Error> {
    let mut numbers = Vec::with_capacity(3);

    for token in split_date(date) {
        let number = token.parse::<i32>().map_err(|source| {
            tracing::error!(token, "date component should be integer");
            Error::InvalidDateComponent {
                token: token.to_string(),
                source,
            }
        })?;
        numbers.push(number);
    }

    let (year, month, day) = match numbers[..] {
        [year, month] => (year, month, None),
        [year, month, day] => (year, month, Some(day)),
        [_] => return Err(Error::IncompleteDate(date.to_string())),
        _ => return Err(Error::TooManyDateComponents(date.to_string())),
    };

    if !is_number_between(month, 1, 12) {
        return Err(Error::MonthOutOfRange(month));
    }

    match day {
        Some(day) if !is_number_between(day, 1, 31) => Err(Error::DayOutOfRange(day)),
        Some(day) => Ok(format!("{year}-{month:02}-{day:02}")),
        None => Ok(format!("{year}-{month:02}")),
    }
}


/// Parse an amount and render it with two fractional digits.
pub fn format_amount(amount: &str) -> Result<String, Error> {
    let value = amount.parse::<f64>().map_err(|source| Error::InvalidAmount {
        amount: amount.to_string(),
        source: Some(source),
    })?;

    // "NaN" and "inf" parse as floats but are not amounts
    if !value.is_finite() {
        return Err(Error::InvalidAmount {
            amount: amount.to_string(),
            source: None,
        });
    }

    Ok(format!("{value:.2}"))
}
