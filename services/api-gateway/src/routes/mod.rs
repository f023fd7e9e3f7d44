use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/vin/validate", post(validate_vin))
        .route("/vin/:vin/manufacturer", get(vin_manufacturer))
        .route("/barcode/extract", post(extract_barcode))
}
