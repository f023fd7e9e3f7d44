//! Part-number grammars
//!
//! Each matcher is a pure function over the trimmed scan text that either
//! recognises its grammar and returns a part number, or returns `None`.
//! [`PART_NUMBER_RULES`] fixes the order in which the extractor tries them.

use std::sync::LazyLock;

use motolens_models::RuleKind;
use regex::Regex;
use serde_json::{Map, Value};

pub type Matcher = fn(&str) -> Option<String>;

/// A grammar in the extraction cascade.
pub struct PartNumberRule {
    pub kind: RuleKind,
    pub matcher: Matcher,
}

/// Cascade order; the first matcher to return `Some` wins.
pub const PART_NUMBER_RULES: &[PartNumberRule] = &[
    PartNumberRule { kind: RuleKind::StructuredObject, matcher: structured_object },
    PartNumberRule { kind: RuleKind::Gs1ApplicationIdentifier, matcher: gs1_additional_id },
    PartNumberRule { kind: RuleKind::LabeledKeyValue, matcher: labeled_token },
    PartNumberRule { kind: RuleKind::DelimitedToken, matcher: delimited_token },
    PartNumberRule { kind: RuleKind::OemPattern, matcher: oem_pattern },
    PartNumberRule { kind: RuleKind::PlainAlphanumeric, matcher: plain_alphanumeric },
    PartNumberRule { kind: RuleKind::EanUpc, matcher: ean_upc },
    PartNumberRule { kind: RuleKind::Segment, matcher: segment },
];

pub const PART_NUMBER_KEYS: &[&str] = &["partNumber", "part_number", "pn", "part", "oem", "oemNumber"];

/// GS1 application identifier for additional product identification.
pub const AI_ADDITIONAL_ID: &str = "240";

const DELIMITERS: &[char] = &['|', ';', ','];

static GS1_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{2,4})\)([^()]*)").expect("valid GS1 pattern"));

static PART_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:\b(?:PARTNO|PART|PN|OEM|ARTICLE))(?:\s*[:=]\s*|\s+)([A-Z0-9-]+)")
        .expect("valid part label pattern")
});

static OEM_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{2,}[-.][A-Za-z0-9.-]{3,18}$").expect("valid OEM pattern")
});

/// Parse a `{`-prefixed payload as a JSON object. Anything that is not a
/// well-formed object is simply not this grammar.
pub fn parse_object(input: &str) -> Option<Map<String, Value>> {
    if !input.starts_with('{') {
        return None;
    }

    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!(error = %e, "Scan looked like an object but did not parse");
            None
        }
    }
}

/// First non-empty string or number under any of `keys`, in key order.
pub fn field_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Value of the first non-empty `(ai)` field in a bracketed GS1 sequence.
pub fn gs1_field(input: &str, ai: &str) -> Option<String> {
    GS1_FIELD
        .captures_iter(input)
        .filter(|caps| &caps[1] == ai)
        .map(|caps| caps[2].trim().to_string())
        .find(|value| !value.is_empty())
}

pub fn has_part_label(input: &str) -> bool {
    PART_LABEL.is_match(input)
}

/// Guard shared by the labeled and delimited rules: a bare number or a short
/// code is more likely a date or quantity than a part number.
fn looks_like_part_number(token: &str) -> bool {
    token.len() >= 5 && token.chars().any(|c| c.is_ascii_alphabetic())
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn structured_object(input: &str) -> Option<String> {
    let object = parse_object(input)?;
    field_text(&object, PART_NUMBER_KEYS)
}

fn gs1_additional_id(input: &str) -> Option<String> {
    gs1_field(input, AI_ADDITIONAL_ID)
}

fn labeled_token(input: &str) -> Option<String> {
    PART_LABEL
        .captures_iter(input)
        .map(|caps| caps[1].to_string())
        .find(|token| looks_like_part_number(token))
}

fn delimited_token(input: &str) -> Option<String> {
    // A labeled payload whose labeled token failed the guard is not
    // reinterpreted as free-form tokens.
    if has_part_label(input) {
        return None;
    }
    if !input.contains(|c: char| DELIMITERS.contains(&c) || c.is_whitespace()) {
        return None;
    }

    input
        .split(|c: char| DELIMITERS.contains(&c) || c.is_whitespace())
        .filter(|token| (5..=20).contains(&token.len()))
        .find(|token| token.chars().all(is_token_char) && looks_like_part_number(token))
        .map(str::to_string)
}

/// The whole token must fit the grammar; an over-long run is never cut
/// down to a prefix.
fn oem_pattern(input: &str) -> Option<String> {
    input
        .split(|c: char| !(is_token_char(c) || c == '.'))
        .map(|token| token.trim_matches(['-', '.']))
        .find(|token| OEM_CODE.is_match(token))
        .map(str::to_string)
}

fn plain_alphanumeric(input: &str) -> Option<String> {
    let accepted = (8..=20).contains(&input.len())
        && input.chars().all(|c| c.is_ascii_alphanumeric())
        && input.chars().any(|c| c.is_ascii_alphabetic())
        && input.chars().any(|c| c.is_ascii_digit());

    accepted.then(|| input.to_string())
}

fn ean_upc(input: &str) -> Option<String> {
    let accepted = (8..=14).contains(&input.len()) && input.chars().all(|c| c.is_ascii_digit());
    accepted.then(|| input.to_string())
}

fn segment(input: &str) -> Option<String> {
    input
        .split(|c: char| !is_token_char(c))
        .find(|segment| segment.len() >= 5)
        .map(str::to_string)
}
