//! Request payloads accepted by the gateway.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VinValidationRequest {
    /// Raw field contents; the engine reports an empty VIN itself
    #[validate(length(max = 64, message = "VIN input must be at most 64 characters"))]
    pub vin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BarcodeExtractionRequest {
    #[validate(length(
        min = 1,
        max = 4096,
        message = "Barcode payload must be between 1 and 4096 characters"
    ))]
    pub raw: String,
}
