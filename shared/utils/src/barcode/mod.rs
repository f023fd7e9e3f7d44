//! Barcode Processing Module
//!
//! Turns a scanned spare-part barcode payload into a canonical part number
//! plus auxiliary metadata. Recognises JSON objects, GS1-128 application
//! identifier sequences, labeled and delimited text, OEM codes and EAN/UPC
//! digit strings.

pub mod extractor;
pub mod metadata;
pub mod rules;

pub use extractor::{extract, extract_part_number, match_part_number};
pub use metadata::extract_metadata;

/// Strip surrounding whitespace and the byte-order mark some scanners emit.
pub fn normalize_scan(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
