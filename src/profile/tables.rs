//! Attribute Tables
//!
//! The option lists and codes the remote profile editor uses. Every table is built once,
//! on first use, and shared read-only afterwards.
//!
//! Indexed tables list options in the order the remote drop-down numbers them (1..n,
//! with 0 meaning "not specified"). Options are regex patterns searched within the
//! value, so a few need a guard: `(^|\s)likes cats` keeps "dislikes cats" from ranking
//! as "likes cats".

use crate::profile::matching::{Code, FuzzyMap, IndexedMap, ValueMap};
use once_cell::sync::Lazy;

fn indexed(options: &[&str]) -> IndexedMap {
    IndexedMap::new(options).expect("static option patterns compile")
}

// Basics

pub static ORIENTATION: Lazy<ValueMap> = Lazy::new(|| {
    ValueMap::new([
        ("straight", 1),
        ("gay", 2),
        ("bisexual", 3),
        ("asexual", 4),
        ("demisexual", 5),
        ("heteroflexible", 6),
        ("homoflexible", 7),
        ("lesbian", 8),
        ("pansexual", 9),
        ("queer", 10),
        ("questioning", 11),
        ("sapiosexual", 12),
    ])
});

pub static GENDER: Lazy<FuzzyMap> = Lazy::new(|| {
    FuzzyMap::from_patterns([
        ("^man$", 1),
        ("^woman$", 2),
        ("^agender$", 3),
        ("^androgynous$", 4),
        ("^bigender$", 5),
        ("^cis ?man$", 6),
        ("^cis ?woman$", 7),
        ("^genderfluid$", 8),
        ("^genderqueer$", 9),
        ("^gender nonconforming$", 10),
        ("^hijra$", 11),
        ("^intersex$", 12),
        ("^non-?binary$", 13),
        ("^other$", 14),
        ("^pangender$", 15),
        ("^transfeminine$", 16),
        ("^transgender$", 17),
        ("^transmasculine$", 18),
        ("^transsexual$", 19),
        ("^trans ?man$", 20),
        ("^trans ?woman$", 21),
        ("^two spirit$", 22),
    ])
    .expect("static gender patterns compile")
});

pub static STATUS: Lazy<ValueMap> = Lazy::new(|| {
    ValueMap::with_aliases([
        (&["single"][..], 1),
        (&["seeing someone"][..], 2),
        (&["married"][..], 3),
        (&["in an open relationship", "open relationship"][..], 4),
    ])
});

/// Heights are free text; the basics layout recognizes them by their digits.
pub static HEIGHT: Lazy<IndexedMap> = Lazy::new(|| indexed(&[]));

pub static BODYTYPE: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "rather not say",
        "thin",
        "overweight",
        "skinny",
        "average",
        "fit",
        "athletic",
        "jacked",
        "a little extra",
        "curvy",
        "full figured",
        "used up",
    ])
});

// Background

/// Code sent for an empty ethnicity selection.
pub const ETHNICITY_UNSPECIFIED: Code = 10;

pub static ETHNICITIES: Lazy<ValueMap> = Lazy::new(|| {
    ValueMap::with_aliases([
        (&["asian"][..], 1),
        (&["middle eastern"][..], 2),
        (&["black"][..], 3),
        (&["native american"][..], 4),
        (&["indian"][..], 5),
        (&["pacific islander"][..], 6),
        (&["hispanic / latin", "hispanic/latin", "hispanic", "latin"][..], 7),
        (&["white"][..], 8),
        (&["other"][..], 9),
    ])
});

const LANGUAGE_NAMES: &[(&[&str], Code)] = &[
    (&["english"], 1),
    (&["afrikaans"], 2),
    (&["albanian"], 3),
    (&["arabic"], 4),
    (&["armenian"], 5),
    (&["basque"], 6),
    (&["belarusan", "belarusian"], 7),
    (&["bengali"], 8),
    (&["breton"], 9),
    (&["bulgarian"], 10),
    (&["catalan"], 11),
    (&["cebuano"], 12),
    (&["chechen"], 13),
    (&["chinese", "mandarin"], 14),
    (&["cantonese"], 15),
    (&["croatian"], 16),
    (&["czech"], 17),
    (&["danish"], 18),
    (&["dutch"], 19),
    (&["esperanto"], 20),
    (&["estonian"], 21),
    (&["finnish"], 22),
    (&["french"], 23),
    (&["frisian"], 24),
    (&["georgian"], 25),
    (&["german"], 26),
    (&["greek"], 27),
    (&["gujarati"], 28),
    (&["ancient greek"], 29),
    (&["hawaiian"], 30),
    (&["hebrew"], 31),
    (&["hindi"], 32),
    (&["hungarian"], 33),
    (&["icelandic"], 34),
    (&["ilongo"], 35),
    (&["indonesian"], 36),
    (&["irish"], 37),
    (&["italian"], 38),
    (&["japanese"], 39),
    (&["khmer"], 40),
    (&["korean"], 41),
    (&["latin"], 42),
    (&["latvian"], 43),
    (&["lithuanian"], 44),
    (&["malay"], 45),
    (&["maori"], 46),
    (&["mongolian"], 47),
    (&["norwegian"], 48),
    (&["occitan"], 49),
    (&["persian", "farsi"], 50),
    (&["polish"], 51),
    (&["portuguese"], 52),
    (&["romanian"], 53),
    (&["rotuman"], 54),
    (&["russian"], 55),
    (&["sanskrit"], 56),
    (&["sardinian"], 57),
    (&["serbian"], 58),
    (&["sign language"], 59),
    (&["slovak"], 60),
    (&["slovenian"], 61),
    (&["spanish"], 62),
    (&["swahili"], 63),
    (&["swedish"], 64),
    (&["tagalog"], 65),
    (&["tamil"], 66),
    (&["thai"], 67),
    (&["tibetan"], 68),
    (&["turkish"], 69),
    (&["ukrainian"], 70),
    (&["urdu"], 71),
    (&["vietnamese"], 72),
    (&["welsh"], 73),
    (&["yiddish"], 74),
    (&["c++"], 75),
    (&["lisp"], 76),
    (&["other"], 77),
];

/// Recognizes a language at the start of a background token ("english (okay)").
pub static LANGUAGE_MATCHER: Lazy<FuzzyMap> = Lazy::new(|| {
    FuzzyMap::from_aliases(LANGUAGE_NAMES.iter().copied())
        .expect("static language patterns compile")
});

/// Exact language names to the codes of the `cont_lang_{n}` fields.
pub static LANGUAGE_CODES: Lazy<ValueMap> =
    Lazy::new(|| ValueMap::with_aliases(LANGUAGE_NAMES.iter().copied()));

pub static LANGUAGE_LEVEL: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["fluently", "okay", "poorly"]));

pub static EDUCATION_LEVEL: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "high school",
        "two[- ]year college",
        "college|university",
        "masters? program",
        "law school",
        "med(ical)? school",
        r"ph\.? ?d program",
        "space camp",
    ])
});

pub static EDUCATION_STATUS: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["graduated", "working on", "dropped out"]));

pub static RELIGION: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "agnosticism",
        "atheism",
        "christianity",
        "judaism",
        "catholicism",
        "islam",
        "hinduism",
        "buddhism",
        "sikh",
        "other",
    ])
});

/// "not very serious" contains "very serious", so the negated option is tried first.
pub static SERIOUSNESS: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "very serious",
        "somewhat serious",
        "not (too|very) serious",
        "laughing",
    ])
    .prefer(3)
});

// Misc section categories. The layout only needs to know which category a token
// belongs to, so these rank by topic rather than by answer.

pub static SMOKES_TOPIC: Lazy<IndexedMap> = Lazy::new(|| indexed(&["smok"]));
pub static DRINKS_TOPIC: Lazy<IndexedMap> = Lazy::new(|| indexed(&["drink"]));
pub static DRUGS_TOPIC: Lazy<IndexedMap> = Lazy::new(|| indexed(&["drugs"]));
pub static KIDS_TOPIC: Lazy<IndexedMap> = Lazy::new(|| indexed(&["kid"]));
pub static PETS_TOPIC: Lazy<IndexedMap> = Lazy::new(|| indexed(&["dogs", "cats"]));

// Misc answers

pub static SMOKES: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&["yes", "sometimes", "when drinking", "trying to quit", "no"])
});

pub static DRINKS: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "very often",
        "often",
        "socially",
        "rarely",
        "desperately",
        "not at all",
    ])
});

pub static DRUGS: Lazy<IndexedMap> = Lazy::new(|| indexed(&["never", "sometimes", "often"]));

pub static DIET: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "anything|omnivore",
        "vegetarian",
        "vegan",
        "kosher",
        "halal",
        "other",
    ])
});

pub static STRICTNESS: Lazy<IndexedMap> = Lazy::new(|| indexed(&["mostly", "strictly"]));

pub static HAS_KIDS: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["has a kid", "has kids", "doesn.?t have kids"]));

pub static WANTS_KIDS: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["might want", "wants", "doesn.?t want"]));

pub static CATS: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["(has|owns) cats", r"(^|\s)likes cats", "dislikes cats"]));

pub static DOGS: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["(has|owns) dogs", r"(^|\s)likes dogs", "dislikes dogs"]));

pub static SIGN: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "aquarius",
        "pisces",
        "aries",
        "taurus",
        "gemini",
        "cancer",
        "leo",
        "virgo",
        "libra",
        "scorpio",
        "sagittarius",
        "capricorn",
    ])
});

pub static IMPORTANCE: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&["doesn.?t matter", "matters a lot", "fun to think about"])
});

pub static MONOGAMY: Lazy<IndexedMap> =
    Lazy::new(|| indexed(&["(^|[^-])monogamous", "non-monogamous"]));

pub static JOB: Lazy<IndexedMap> = Lazy::new(|| {
    indexed(&[
        "student",
        "art|music|writing",
        "banking|finance",
        "clerical|administrative",
        "computer|hardware|software",
        "construction|craftsmanship",
        "education|academia",
        "entertainment|media",
        "management|executive",
        "hospitality|travel",
        "law|legal",
        "medicine|health",
        "military",
        "political|government",
        "sales|marketing",
        "science|tech|engineering",
        "transportation",
        "unemployed",
        "other",
        "rather not say",
        "retired",
    ])
});
