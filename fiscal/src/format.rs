//! Display formatting for base-currency amounts and exchange rates.
//!
//! Output follows Romanian conventions: `.` groups thousands and `,` separates
//! decimals.

use crate::config::BASE_CURRENCY;
use crate::used_rates::UsedRate;

/// Formats an amount as whole units of the base currency (e.g. "4.050 RON").
pub fn format_as_base_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!(
        "{}{} {}",
        sign,
        group_thousands(&rounded.unsigned_abs().to_string()),
        BASE_CURRENCY.code()
    )
}

/// Formats a used rate as an equation (e.g. "1 EUR = 4,9764 RON").
pub fn format_exchange_rate(rate: &UsedRate) -> String {
    let value = format!("{:.4}", rate.value).replace('.', ",");
    format!(
        "1 {} = {} {}",
        rate.currency.code(),
        value,
        BASE_CURRENCY.code()
    )
}

/// Inserts `.` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(".")
        .chars()
        .rev()
        .collect()
}
