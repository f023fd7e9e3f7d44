//! VIN Processing Module
//!
//! Validation, check-digit computation and manufacturer identification for
//! Vehicle Identification Numbers.

pub mod validator;
pub mod wmi;

pub use validator::{compute_check_digit, extract_wmi, identify_manufacturer, validate, VIN_LENGTH};
