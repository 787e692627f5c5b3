//! Error type shared by every generator stage

use std::path::PathBuf;

/// Errors raised while building or writing drawings
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Unknown piece variant: {kind}/{color}/{face}")]
    UnknownPieceVariant {
        kind: String,
        color: String,
        face: String,
    },

    #[error("Failed to write {}: {source}", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

/// Result alias for generator operations
pub type Result<T> = std::result::Result<T, DrawError>;

/// Reject non-positive and non-finite lengths
pub fn check_length(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DrawError::InvalidDimension(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length() {
        assert_eq!(check_length("cell_size", 40.0).unwrap(), 40.0);
        assert!(matches!(
            check_length("cell_size", 0.0),
            Err(DrawError::InvalidDimension(_))
        ));
        assert!(check_length("cell_size", -1.0).is_err());
        assert!(check_length("cell_size", f64::NAN).is_err());
        assert!(check_length("cell_size", f64::INFINITY).is_err());
    }
}
