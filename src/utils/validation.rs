use crate::utils::error::{DiceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A report extension is a bare suffix: `rpt`, not `.rpt` or `out/rpt`.
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    if extension.trim().is_empty() {
        return Err(DiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension cannot be empty or whitespace-only".to_string(),
        });
    }

    if extension.contains(['.', '/', '\\', '\0']) {
        return Err(DiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must not contain '.', path separators or null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("report.output_dir", "./reports").is_ok());
        assert!(validate_path("report.output_dir", "").is_err());
        assert!(validate_path("report.output_dir", "bad\0dir").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("report.extension", "rpt").is_ok());
        assert!(validate_extension("report.extension", "").is_err());
        assert!(validate_extension("report.extension", "  ").is_err());
        assert!(validate_extension("report.extension", ".rpt").is_err());
        assert!(validate_extension("report.extension", "out/rpt").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("input.max_open_attempts", 3u32, 1, 10).is_ok());
        assert!(validate_range("input.max_open_attempts", 0u32, 1, 10).is_err());
        assert!(validate_range("input.max_open_attempts", 11u32, 1, 10).is_err());
    }
}
