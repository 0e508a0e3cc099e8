//! Currency and number formatting for the platform's pt-BR presentation.

use serde::{Deserialize, Serialize};

/// Currency prefix shared by every screen.
pub const CURRENCY_PREFIX: &str = "R$";

/// Rendered when an amount is absent.
pub const ZERO_AMOUNT: &str = "R$ 0,00";

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats a monetary amount with the `R$` prefix and exactly two
/// fraction digits; an absent amount renders as the zero string.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!(
            "{}{}",
            CURRENCY_PREFIX,
            format_number(&LocaleConfig::default(), value, 2)
        ),
        None => ZERO_AMOUNT.to_string(),
    }
}

/// Compact thousands form used by the dashboard KPI cards.
pub fn format_thousands(amount: f64) -> String {
    format!("{} {:.1}k", CURRENCY_PREFIX, amount / 1000.0)
}

/// Percentage with two fraction digits.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
