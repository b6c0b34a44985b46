//! Integration tests for section segmentation
//!
//! Runs the three built-in section layouts over text shaped like real profile pages:
//! - every layout field is always present, unassigned ones empty
//! - list values are joined in input order
//! - strict sections fail on unknown tokens, misc drops them

use profile_details::profile::config::SegmentationConfig;
use profile_details::profile::error::DetailsError;
use profile_details::profile::segmentation::{FailurePolicy, Fields, Layouts, Section, LAYOUTS};
use rstest::rstest;

fn render(fields: &Fields) -> String {
    fields
        .iter()
        .map(|(field, value)| format!("{}: {}", field, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_basics_full_line() {
    let fields = LAYOUTS
        .segment(Section::Basics, "Straight, Woman, Single, 5' 6\", Athletic")
        .unwrap();

    insta::assert_snapshot!(render(&fields), @r#"
    bodytype: Athletic
    gender: Woman
    height: 5' 6"
    orientation: Straight
    status: Single
    "#);
}

#[rstest(text, field, expected,
    case("Gay, Man", "orientation", "Gay"),
    case("Gay, Man", "status", ""),
    case("Bisexual, Pansexual, Woman", "orientation", "Bisexual, Pansexual"),
    case("Straight, Man, Woman", "gender", "Man, Woman"),
    case("Man, 6' 1\"", "height", "6' 1\""),
    case("Married, 180cm, Average", "height", "180cm"),
    case("Married, 180cm, Average", "bodytype", "Average"),
    case("Single, Used up", "bodytype", "Used up"),
)]
fn test_basics_partial_lines(text: &str, field: &str, expected: &str) {
    let fields = LAYOUTS.segment(Section::Basics, text).unwrap();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[field], expected);
}

#[test]
fn test_basics_rejects_unknown_token() {
    let err = LAYOUTS
        .segment(Section::Basics, "Straight, Woman, Wizard")
        .unwrap_err();
    assert_eq!(err, DetailsError::segmentation("basics", "Wizard"));
    assert_eq!(
        err.to_string(),
        "parsing error in basics section: \"Wizard\" not recognized"
    );
}

#[test]
fn test_basics_height_needs_digits() {
    assert!(LAYOUTS.segment(Section::Basics, "Straight, Tall").is_err());
}

#[test]
fn test_background_full_line() {
    let fields = LAYOUTS
        .segment(
            Section::Background,
            "Asian, White, Speaks English (fluently) and Spanish (okay), \
             Graduated from college, Agnosticism",
        )
        .unwrap();

    insta::assert_snapshot!(render(&fields), @r"
    education: Graduated from college
    ethnicities: Asian, White
    languages: English (fluently), Spanish (okay)
    religion: Agnosticism
    ");
}

#[rstest(text, field, expected,
    case("Speaks some French", "languages", "some French"),
    case("Black, Working on masters program", "education", "Working on masters program"),
    case("Dropped out of high school", "education", "Dropped out of high school"),
    case("Hispanic / Latin, Catholicism", "religion", "Catholicism"),
    case("Speaks English (fluently), Atheism", "education", ""),
)]
fn test_background_partial_lines(text: &str, field: &str, expected: &str) {
    let fields = LAYOUTS.segment(Section::Background, text).unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[field], expected);
}

#[test]
fn test_misc_full_line() {
    let fields = LAYOUTS
        .segment(
            Section::Misc,
            "Doesn't smoke, Drinks socially, Never does drugs, Mostly vegetarian, \
             Has a kid, Likes dogs and likes cats, Aquarius",
        )
        .unwrap();

    insta::assert_snapshot!(render(&fields), @r"
    children: Has a kid
    diet: Mostly vegetarian
    drinking: Drinks socially
    drugs: Never does drugs
    pets: Likes dogs and likes cats
    sign: Aquarius
    smoking: Doesn't smoke
    ");
}

#[test]
fn test_misc_drops_unknown_tokens() {
    let report = LAYOUTS
        .segment_with_report(Section::Misc, "Smokes sometimes, Loves long walks, Leo")
        .unwrap();
    assert_eq!(report.dropped, vec!["Loves long walks".to_string()]);
    assert_eq!(report.fields["smoking"], "Smokes sometimes");
    assert_eq!(report.fields["sign"], "Leo");
    assert_eq!(report.fields["diet"], "");
}

#[test]
fn test_policies_come_from_config() {
    let layouts = Layouts::from_config(&SegmentationConfig {
        basics: FailurePolicy::Lenient,
        background: FailurePolicy::Strict,
        misc: FailurePolicy::Strict,
    });

    let fields = layouts
        .segment(Section::Basics, "Straight, Wizard, Single")
        .unwrap();
    assert_eq!(fields["status"], "Single");
    assert!(layouts.segment(Section::Misc, "Loves long walks").is_err());
}

#[rstest(section => [Section::Basics, Section::Background, Section::Misc])]
fn test_empty_text_gives_empty_fields(section: Section) {
    let fields = LAYOUTS.segment(section, "").unwrap();
    assert!(!fields.is_empty());
    assert!(fields.values().all(String::is_empty));
}

#[test]
fn test_later_token_never_fills_earlier_field() {
    // "Single" would be a status, but body type has already been seen.
    let err = LAYOUTS
        .segment(Section::Basics, "Athletic, Single")
        .unwrap_err();
    assert_eq!(err, DetailsError::segmentation("basics", "Single"));
}
