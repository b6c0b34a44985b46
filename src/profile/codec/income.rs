//! Income ranges
//!
//! Income is displayed as a range ("$30,000-$40,000", "Less than $20,000", "More than
//! $1,000,000") and submitted as a bucket number. Parsing a range yields a
//! representative amount nudged 100 into the range so it never sits on a bucket edge.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Upper bounds of the income buckets, ascending.
pub const INCOME_LEVELS: [i64; 12] = [
    20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 100_000, 150_000, 250_000, 500_000,
    1_000_000,
];

const COMMA_NUMBER: &str = r"([0-9]{1,3}(?:,[0-9]{3})*)";

fn matcher(template: &str) -> Regex {
    RegexBuilder::new(&template.replace("{n}", COMMA_NUMBER))
        .case_insensitive(true)
        .build()
        .unwrap()
}

static RANGE: Lazy<Regex> = Lazy::new(|| matcher(r"^\$?{n}\s*-\s*\$?{n}"));
static LESS_THAN: Lazy<Regex> = Lazy::new(|| matcher(r"^less than \$?{n}"));
static MORE_THAN: Lazy<Regex> = Lazy::new(|| matcher(r"^more than \$?{n}"));
static AMOUNT: Lazy<Regex> = Lazy::new(|| matcher(r"^\$?(?:{n}|([0-9]+))$"));

/// Digits too large for an `i64` saturate.
fn amount(digits: &str) -> i64 {
    digits.replace(',', "").parse().unwrap_or(i64::MAX)
}

/// Representative amount for income text: a displayed range or a plain amount such as
/// `45000` or `$45,000`. `None` when the text is neither.
pub fn income_amount(text: &str) -> Option<i64> {
    let text = text.trim();

    if let Some(caps) = AMOUNT.captures(text) {
        return caps.get(1).or_else(|| caps.get(2)).map(|m| amount(m.as_str()));
    }
    if let Some(caps) = RANGE.captures(text) {
        let (low, high) = (amount(&caps[1]), amount(&caps[2]));
        let (low, high) = (low.min(high), low.max(high));
        return Some((low + (high - low) / 2).saturating_add(100));
    }
    if let Some(caps) = LESS_THAN.captures(text) {
        return Some(amount(&caps[1]).saturating_sub(100));
    }
    if let Some(caps) = MORE_THAN.captures(text) {
        return Some(amount(&caps[1]).saturating_add(100));
    }
    None
}

/// Representative amount for a displayed income; 0 when absent or unrecognized.
pub fn parse_income(raw: Option<&str>) -> i64 {
    raw.and_then(income_amount).unwrap_or(0)
}

/// 1-based index of the first level strictly above `value`; `levels + 1` past the top.
pub fn income_bucket(value: i64) -> i64 {
    INCOME_LEVELS
        .iter()
        .position(|&level| value < level)
        .unwrap_or(INCOME_LEVELS.len()) as i64
        + 1
}

/// Wire code submitted for an income amount.
pub fn income_code(value: i64) -> i64 {
    income_bucket(value) + 1
}
