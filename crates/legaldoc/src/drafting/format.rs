//! Formatting conventions shared by every template.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed currency suffix for every monetary amount.
pub const CURRENCY: &str = "EUR";

/// Markup line-break marker used for multi-line narrative fields.
pub const LINE_BREAK: &str = "<br>";

/// Blank rendered in place of a date the user has not supplied yet.
pub const DATE_PLACEHOLDER: &str = "__.__.____.";

/// Blank rendered in place of a missing free-text value.
pub const TEXT_PLACEHOLDER: &str = "____________________";

pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `1234.5` -> `1234.50 EUR`. Used by the cost ledger and the interest calculator.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2} {CURRENCY}", round_cents(amount))
}

/// `1234.5` -> `1,234.50 EUR`. Used for amounts quoted inside document text.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction} {CURRENCY}")
}

/// `dd.mm.yyyy.` with the trailing period.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y.").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

/// Converts user line breaks to markup breaks. Applying it twice is a no-op.
pub fn line_breaks(text: &str) -> String {
    text.replace("\r\n", LINE_BREAK).replace('\n', LINE_BREAK)
}

/// Returns the trimmed value, or the blank placeholder when nothing was entered.
pub fn or_blank(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        TEXT_PLACEHOLDER
    } else {
        trimmed
    }
}

pub fn roman(mut value: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (weight, numeral) in NUMERALS {
        while value >= weight {
            out.push_str(numeral);
            value -= weight;
        }
    }
    out
}

/// Croatian plural for "month": 1 mjesec, 2-4 mjeseca, otherwise mjeseci.
pub fn months_phrase(count: u8) -> String {
    let word = match (count % 10, count % 100) {
        (1, n) if n != 11 => "mjesec",
        (2..=4, n) if !(12..=14).contains(&n) => "mjeseca",
        _ => "mjeseci",
    };
    format!("{count} {word}")
}
