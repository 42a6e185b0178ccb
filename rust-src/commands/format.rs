//! Number formatting shared by the report commands.


/// Format currency with 2 decimal places and thousands separators.
pub fn format_currency(n: f64) -> String {
    let formatted = format!("{:.2}", n.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    // Skip the sign for amounts that round to zero
    let sign = if n < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{result}.{decimal_part}")
}


/// Share of `part` in `total` as a percentage, 0 when `total` is not positive.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
