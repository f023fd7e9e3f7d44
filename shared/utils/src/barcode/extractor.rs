//! Part Number Extractor
//!
//! Runs the ordered grammar cascade over a scan and assembles the result.

use motolens_models::{BarcodeExtractionResult, RuleKind};

use super::metadata::extract_metadata;
use super::normalize_scan;
use super::rules::PART_NUMBER_RULES;

/// Extract the part number, the rule that produced it and the metadata.
/// Never fails; unrecognised input comes back unchanged as
/// [`RuleKind::Fallback`].
pub fn extract(raw: &str) -> BarcodeExtractionResult {
    let (part_number, matched_rule) = match_part_number(raw);

    BarcodeExtractionResult {
        part_number,
        matched_rule,
        metadata: extract_metadata(raw),
    }
}

pub fn extract_part_number(raw: &str) -> String {
    match_part_number(raw).0
}

/// Part number together with the rule that produced it.
pub fn match_part_number(raw: &str) -> (String, RuleKind) {
    let input = normalize_scan(raw);

    for rule in PART_NUMBER_RULES {
        if let Some(part_number) = (rule.matcher)(input) {
            crate::log_debug!("Barcode matched rule {}: {}", rule.kind, part_number);
            return (part_number, rule.kind);
        }
    }

    crate::log_debug!("Barcode matched no grammar, returning input unchanged");
    (input.to_string(), RuleKind::Fallback)
}
