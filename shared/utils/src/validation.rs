use crate::error::{MotoLensError, MotoLensResult};
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> MotoLensResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(MotoLensError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, &*error.code) {
                (Some(message), _) => message.to_string(),
                (None, "length") => format!("Length validation failed for field '{}'", field),
                (None, "required") => format!("Field '{}' is required", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }

    // field_errors is a HashMap; sort for a stable message
    messages.sort();
    messages.join(", ")
}

/// Reject raw scanner text longer than the configured limit. Length is
/// measured in characters, not bytes.
pub fn validate_input_length(field: &str, value: &str, max_length: usize) -> MotoLensResult<()> {
    let length = value.chars().count();
    if length > max_length {
        return Err(MotoLensError::validation(
            field,
            format!(
                "Input of {} characters exceeds maximum allowed length {}",
                length, max_length
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use motolens_models::{BarcodeExtractionRequest, VinValidationRequest};

    #[test]
    fn test_validate_model_uses_field_message() {
        let request = BarcodeExtractionRequest { raw: String::new() };
        let error = validate_model(&request).unwrap_err();

        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert!(error
            .to_string()
            .contains("Barcode payload must be between 1 and 4096 characters"));
    }

    #[test]
    fn test_validate_model_accepts_valid_request() {
        let request = VinValidationRequest {
            vin: "WBADT63452CK12345".to_string(),
        };
        assert!(validate_model(&request).is_ok());
    }

    #[test]
    fn test_validate_input_length() {
        assert!(validate_input_length("raw", "abc", 3).is_ok());
        assert!(validate_input_length("raw", "abcd", 3).is_err());
        // multi-byte characters count once
        assert!(validate_input_length("raw", "äöü", 3).is_ok());
    }
}
