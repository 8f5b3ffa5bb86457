//! Deterministic currency rendering.

/// Renders an amount as `$1,234.56`: two decimal places, comma thousands
/// separators, rounded half-up (away from zero). The rounding rule is
/// fixed here rather than delegated to a locale so the same input always
/// renders the same string on every platform.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
