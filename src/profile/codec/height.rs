//! Height strings
//!
//! Accepts the forms people type and the forms the pages display:
//! `5'6"`, `5' 6”`, `5′6″`, `6'`, `168cm`, `168 cm`, `1.68m`.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

const CM_PER_INCH: f64 = 2.54;

static FEET_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\d+)\s*['’′]\s*(?:(\d+(?:\.\d+)?)\s*(?:"|”|″|'')?)?"#).unwrap()
});
static CENTIMETERS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(\d+(?:\.\d+)?)\s*cm\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});
static METERS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(\d+(?:\.\d+)?)\s*m\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Height in centimeters, or `None` if the string is not a recognizable height.
pub fn parse_height(text: &str) -> Option<f64> {
    let text = text.trim();

    if let Some(caps) = FEET_INCHES.captures(text) {
        let feet: f64 = caps[1].parse().ok()?;
        let inches: f64 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0.0,
        };
        return Some((feet * 12.0 + inches) * CM_PER_INCH);
    }
    if let Some(caps) = CENTIMETERS.captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = METERS.captures(text) {
        return caps[1].parse::<f64>().ok().map(|m| m * 100.0);
    }
    None
}

/// Height rounded to whole centimeters.
pub fn height_centimeters(text: &str) -> Option<i64> {
    parse_height(text).map(|cm| cm.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(text, expected,
        case("5'6\"", 168),
        case("5' 6\"", 168),
        case("5\u{2019} 6\u{201d}", 168),
        case("5\u{2032}6\u{2033}", 168),
        case("6'", 183),
        case("168cm", 168),
        case("168 cm", 168),
        case("1.68m", 168),
        case("5' 6\" (1.68m)", 168),
    )]
    fn test_height_centimeters(text: &str, expected: i64) {
        assert_eq!(height_centimeters(text), Some(expected));
    }

    #[rstest(text, case("tall"), case(""), case("about six feet"))]
    fn test_unrecognized_height(text: &str) {
        assert_eq!(parse_height(text), None);
    }
}
