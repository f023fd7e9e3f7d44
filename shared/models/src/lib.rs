//! # MotoLens Identifier Models
//!
//! Result and request types shared by the identifier engine and the
//! services that expose it.
//!
//! ## Key Models
//!
//! - **ValidationResult**: Outcome of validating a typed or scanned VIN
//! - **VinErrorKind**: The hard failures a VIN can produce
//! - **ManufacturerMatch**: WMI lookup outcome, usable on partial input
//! - **BarcodeExtractionResult**: Canonical part number plus the grammar that produced it
//! - **PartMetadata**: Auxiliary manufacturer, lot, serial and date fields
//!
//! All models serialize with serde. Request payloads carry `validator`
//! rules that the gateway checks before handing the text to the engine.

pub mod vin;
pub mod barcode;
pub mod request;

pub use vin::*;
pub use barcode::*;
pub use request::*;
