//! Barcode Handler
//!
//! Part-number extraction for the part-scan field.

use axum::{extract::State, response::Json};
use chrono::NaiveDate;
use motolens_models::{BarcodeExtractionRequest, BarcodeExtractionResult, Confidence};
use motolens_utils::{barcode, validate_input_length, validate_model};
use serde::Serialize;

use crate::{middleware::ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct BarcodeExtractionResponse {
    #[serde(flatten)]
    pub result: BarcodeExtractionResult,
    pub confidence: Confidence,
    pub production_date: Option<NaiveDate>,
}

/// Extract a part number from a scanned payload
///
/// POST /api/v1/barcode/extract
pub async fn extract_barcode(
    State(state): State<AppState>,
    Json(request): Json<BarcodeExtractionRequest>,
) -> Result<Json<BarcodeExtractionResponse>, ApiError> {
    validate_model(&request)?;
    validate_input_length("raw", &request.raw, state.config.scanner.max_input_length)?;

    let result = barcode::extract(&request.raw);
    state.metrics.record_barcode(result.matched_rule.as_str());

    if result.is_low_confidence() {
        tracing::info!(
            rule = %result.matched_rule,
            part_number = %result.part_number,
            "Low-confidence part number extraction"
        );
    }

    Ok(Json(BarcodeExtractionResponse {
        confidence: result.matched_rule.confidence(),
        production_date: result.metadata.production_date(),
        result,
    }))
}
