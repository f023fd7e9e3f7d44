//! Barcode extraction models.
//!
//! Defines the part-number result, the grammar that produced it and the
//! auxiliary metadata pulled from the same payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The grammar that produced a part number, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    StructuredObject,
    Gs1ApplicationIdentifier,
    LabeledKeyValue,
    DelimitedToken,
    OemPattern,
    PlainAlphanumeric,
    EanUpc,
    Segment,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StructuredObject => "structured_object",
            Self::Gs1ApplicationIdentifier => "gs1_application_identifier",
            Self::LabeledKeyValue => "labeled_key_value",
            Self::DelimitedToken => "delimited_token",
            Self::OemPattern => "oem_pattern",
            Self::PlainAlphanumeric => "plain_alphanumeric",
            Self::EanUpc => "ean_upc",
            Self::Segment => "segment",
            Self::Fallback => "fallback",
        }
    }

    /// How far a caller should trust a part number produced by this rule.
    pub fn confidence(&self) -> Confidence {
        match self {
            Self::StructuredObject | Self::Gs1ApplicationIdentifier => Confidence::High,
            Self::LabeledKeyValue
            | Self::OemPattern
            | Self::PlainAlphanumeric
            | Self::EanUpc => Confidence::Medium,
            Self::DelimitedToken | Self::Segment | Self::Fallback => Confidence::Low,
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auxiliary fields found alongside the part number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartMetadata {
    pub manufacturer: Option<String>,
    pub lot: Option<String>,
    pub serial: Option<String>,
    /// Raw date text; GS1 AI(11) dates are `YYMMDD`
    pub date: Option<String>,
}

impl PartMetadata {
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_none()
            && self.lot.is_none()
            && self.serial.is_none()
            && self.date.is_none()
    }

    /// Interpret `date` as a calendar date. Accepts `YYMMDD` and ISO
    /// `YYYY-MM-DD`; anything else, or an impossible date, yields `None`.
    pub fn production_date(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?.trim();
        if date.len() == 6 && date.chars().all(|c| c.is_ascii_digit()) {
            return NaiveDate::parse_from_str(date, "%y%m%d").ok();
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeExtractionResult {
    pub part_number: String,
    pub matched_rule: RuleKind,
    pub metadata: PartMetadata,
}

impl BarcodeExtractionResult {
    /// Low-confidence results are lookup hints, not identifiers.
    pub fn is_low_confidence(&self) -> bool {
        self.matched_rule.confidence() == Confidence::Low
    }
}
