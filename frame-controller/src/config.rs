//! Loading and validating [`FrameOptions`]

use frame_types::FrameOptions;

use crate::error::FrameError;

/// Parse options from a JSON document. Missing fields take their defaults.
pub fn load_options(json: &str) -> Result<FrameOptions, FrameError> {
    let options: FrameOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}

/// Reject values that would poison the geometry math.
///
/// Sizes below the minimum are not an error; the controller raises them
/// to the floor when it mounts.
pub fn validate_options(options: &FrameOptions) -> Result<(), FrameError> {
    let numbers = [
        ("initial_position.x", options.initial_position.x),
        ("initial_position.y", options.initial_position.y),
        ("initial_size.width", options.initial_size.width),
        ("initial_size.height", options.initial_size.height),
        ("min_width", options.min_width),
        ("min_height", options.min_height),
        ("maximize_margin", options.maximize_margin),
        ("reserved_bottom", options.reserved_bottom),
    ];

    if let Some((name, value)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
        return Err(FrameError::InvalidOption(format!(
            "{name} must be finite, got {value}"
        )));
    }

    if options.min_width <= 0.0 || options.min_height <= 0.0 {
        return Err(FrameError::InvalidOption(format!(
            "minimum size must be positive, got {}x{}",
            options.min_width, options.min_height
        )));
    }

    if options.maximize_margin < 0.0 || options.reserved_bottom < 0.0 {
        return Err(FrameError::InvalidOption(
            "maximize margin and reserved strip cannot be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_from_partial_json() {
        let options = load_options(r#"{"title": "Graphs", "min_width": 320}"#).unwrap();
        assert_eq!(options.title, "Graphs");
        assert_eq!(options.min_width, 320.0);
        assert!(options.draggable);
    }

    #[test]
    fn test_load_options_rejects_bad_json() {
        let err = load_options("{ not json").unwrap_err();
        assert!(matches!(err, FrameError::Serialization(_)));
    }

    #[test]
    fn test_validate_rejects_non_finite_and_non_positive() {
        let mut options = FrameOptions::default();
        options.initial_size.width = f64::NAN;
        let err = validate_options(&options).unwrap_err();
        assert!(err.to_string().contains("initial_size.width"));

        let mut options = FrameOptions::default();
        options.min_height = 0.0;
        assert!(matches!(
            validate_options(&options),
            Err(FrameError::InvalidOption(_))
        ));

        let mut options = FrameOptions::default();
        options.reserved_bottom = -1.0;
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn test_small_initial_size_is_accepted() {
        let mut options = FrameOptions::default();
        options.initial_size.width = 10.0;
        assert!(validate_options(&options).is_ok());
    }
}
