//! VIN Handlers
//!
//! Validation and as-you-type manufacturer lookup for the VIN entry field.

use axum::{
    extract::{Path, State},
    response::Json,
};
use motolens_models::{ManufacturerMatch, ValidationResult, VinSections, VinValidationRequest};
use motolens_utils::{validate_input_length, validate_model, vin};
use serde::Serialize;

use crate::{middleware::ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct VinValidationResponse {
    #[serde(flatten)]
    pub result: ValidationResult,
    pub sections: Option<VinSections>,
    pub manufacturer: ManufacturerMatch,
}

#[derive(Debug, Serialize)]
pub struct ManufacturerResponse {
    pub wmi: String,
    #[serde(flatten)]
    pub manufacturer: ManufacturerMatch,
}

/// Validate a VIN
///
/// POST /api/v1/vin/validate
///
/// Always answers 200 for a well-formed request; a rejected VIN is reported
/// in the body with its error kind and message.
pub async fn validate_vin(
    State(state): State<AppState>,
    Json(request): Json<VinValidationRequest>,
) -> Result<Json<VinValidationResponse>, ApiError> {
    validate_model(&request)?;
    validate_input_length("vin", &request.vin, state.config.scanner.max_input_length)?;

    let result = vin::validate(&request.vin);

    let outcome = match (&result.error, result.checksum_valid) {
        (Some(error), _) => error.code(),
        (None, true) => "VALID",
        (None, false) => "CHECKSUM_MISMATCH",
    };
    state.metrics.record_vin(outcome);

    let sections = result.normalized_vin.as_deref().and_then(VinSections::split);
    let manufacturer = vin::identify_manufacturer(&request.vin);

    Ok(Json(VinValidationResponse {
        result,
        sections,
        manufacturer,
    }))
}

/// Resolve the manufacturer for a full or partial VIN
///
/// GET /api/v1/vin/{vin}/manufacturer
pub async fn vin_manufacturer(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<ManufacturerResponse>, ApiError> {
    validate_input_length("vin", &vin, state.config.scanner.max_input_length)?;

    Ok(Json(ManufacturerResponse {
        wmi: vin::extract_wmi(&vin),
        manufacturer: vin::identify_manufacturer(&vin),
    }))
}
