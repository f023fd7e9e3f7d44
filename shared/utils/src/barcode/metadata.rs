//! Auxiliary field extraction
//!
//! Pulls manufacturer, lot, serial and production date out of the same
//! payload the part number came from. Structured-object fields win, then
//! GS1 application identifiers, then labeled tokens in delimited text.

use std::sync::LazyLock;

use motolens_models::PartMetadata;
use regex::Regex;

use super::normalize_scan;
use super::rules::{field_text, gs1_field, parse_object};

const MANUFACTURER_KEYS: &[&str] = &["manufacturer", "mfr", "brand"];
const LOT_KEYS: &[&str] = &["lot", "batch"];
const SERIAL_KEYS: &[&str] = &["serial", "serialNumber"];
const DATE_KEYS: &[&str] = &["date", "manufacturingDate"];

const AI_LOT: &str = "10";
const AI_PRODUCTION_DATE: &str = "11";
const AI_SERIAL: &str = "21";

static MANUFACTURER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:\b(?:MANUFACTURER|MFR|BRAND))(?:\s*[:=]\s*|\s+)([A-Za-z0-9&-]+)")
        .expect("valid manufacturer label pattern")
});

static LOT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:\b(?:LOT|BATCH))(?:\s*[:=]\s*|\s+)([A-Za-z0-9-]+)")
        .expect("valid lot label pattern")
});

static SERIAL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:\b(?:SERIAL|SN))(?:\s*[:=]\s*|\s+)([A-Za-z0-9-]+)")
        .expect("valid serial label pattern")
});

/// A payload that parses as an object is read through its keys only; the
/// text scanners never see JSON punctuation.
pub fn extract_metadata(raw: &str) -> PartMetadata {
    let input = normalize_scan(raw);

    if let Some(object) = parse_object(input) {
        return PartMetadata {
            manufacturer: field_text(&object, MANUFACTURER_KEYS),
            lot: field_text(&object, LOT_KEYS),
            serial: field_text(&object, SERIAL_KEYS),
            date: field_text(&object, DATE_KEYS),
        };
    }

    PartMetadata {
        manufacturer: labeled_value(&MANUFACTURER_LABEL, input),
        lot: gs1_field(input, AI_LOT).or_else(|| labeled_value(&LOT_LABEL, input)),
        serial: gs1_field(input, AI_SERIAL).or_else(|| labeled_value(&SERIAL_LABEL, input)),
        date: gs1_date(input),
    }
}

fn labeled_value(label: &Regex, input: &str) -> Option<String> {
    label.captures(input).map(|caps| caps[1].to_string())
}

/// AI(11) is only accepted as exactly six digits (`YYMMDD`).
fn gs1_date(input: &str) -> Option<String> {
    gs1_field(input, AI_PRODUCTION_DATE)
        .filter(|date| date.len() == 6 && date.chars().all(|c| c.is_ascii_digit()))
}
