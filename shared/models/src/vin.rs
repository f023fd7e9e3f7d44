//! VIN validation models.
//!
//! Results produced by the VIN validator and the manufacturer lookup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard failures of VIN validation. The `Display` text is the message shown
/// to the user next to the input field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VinErrorKind {
    #[error("VIN is required")]
    Missing,

    #[error("VIN must be exactly 17 characters (got {actual})")]
    WrongLength { actual: usize },

    #[error("VIN cannot contain the letters I, O or Q")]
    ForbiddenCharacter,

    #[error("VIN may only contain letters A-Z (except I, O, Q) and digits 0-9")]
    InvalidCharset,
}

impl VinErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "VIN_MISSING",
            Self::WrongLength { .. } => "VIN_WRONG_LENGTH",
            Self::ForbiddenCharacter => "VIN_FORBIDDEN_CHARACTER",
            Self::InvalidCharset => "VIN_INVALID_CHARSET",
        }
    }
}

/// Outcome of a single `validate` call.
///
/// A checksum mismatch leaves `valid` set; only `checksum_valid` drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub normalized_vin: Option<String>,
    pub error: Option<VinErrorKind>,
    pub message: Option<String>,
    pub checksum_valid: bool,
}

impl ValidationResult {
    pub fn success(normalized_vin: String, checksum_valid: bool) -> Self {
        Self {
            valid: true,
            normalized_vin: Some(normalized_vin),
            error: None,
            message: None,
            checksum_valid,
        }
    }

    pub fn failure(error: VinErrorKind) -> Self {
        Self {
            valid: false,
            normalized_vin: None,
            message: Some(error.to_string()),
            error: Some(error),
            checksum_valid: false,
        }
    }
}

/// WMI lookup outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerMatch {
    pub is_match: bool,
    pub manufacturer: Option<String>,
}

impl ManufacturerMatch {
    pub fn found(manufacturer: impl Into<String>) -> Self {
        Self {
            is_match: true,
            manufacturer: Some(manufacturer.into()),
        }
    }

    pub fn none() -> Self {
        Self {
            is_match: false,
            manufacturer: None,
        }
    }
}

/// The three logical zones of a normalized 17-character VIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinSections {
    /// World Manufacturer Identifier, positions 1-3
    pub wmi: String,
    /// Vehicle Descriptor Section, positions 4-9 (check digit included)
    pub vds: String,
    /// Vehicle Indicator Section, positions 10-17
    pub vis: String,
}

impl VinSections {
    /// Split a normalized VIN. Returns `None` unless the input is exactly
    /// 17 ASCII characters.
    pub fn split(vin: &str) -> Option<Self> {
        if vin.len() != 17 || !vin.is_ascii() {
            return None;
        }

        Some(Self {
            wmi: vin[..3].to_string(),
            vds: vin[3..9].to_string(),
            vis: vin[9..].to_string(),
        })
    }

    pub fn check_digit(&self) -> char {
        // vds is six ASCII characters by construction
        self.vds.chars().last().unwrap_or('0')
    }

    /// Position 10, the model-year code.
    pub fn model_year_code(&self) -> char {
        self.vis.chars().next().unwrap_or('0')
    }
}
