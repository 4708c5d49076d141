use regex::Regex;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is empty")]
    Empty,
    #[error("label too long (max 63 characters)")]
    TooLong,
    #[error("label contains invalid characters (only a-z, A-Z, 0-9, '_' and '-' allowed)")]
    InvalidCharacters,
    #[error("label must not start or end with '-'")]
    LeadingOrTrailingHyphen,
}

lazy_static::lazy_static! {
    /// Hostname characters plus '_' for service labels such as `_sip`
    static ref LABEL_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::Empty);
    }
    if label.len() > 63 {
        return Err(ValidationError::TooLong);
    }
    if !LABEL_RE.is_match(label) {
        return Err(ValidationError::InvalidCharacters);
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::LeadingOrTrailingHyphen);
    }

    Ok(())
}

/// Validate every label of `input` and return it with exactly one trailing dot.
pub fn normalize_fqdn(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    for label in trimmed.split('.') {
        validate_label(label)?;
    }
    Ok(format!("{}.", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fqdn_gets_single_trailing_dot() {
        assert_eq!(normalize_fqdn("example.org").unwrap(), "example.org.");
        assert_eq!(normalize_fqdn(" example.org.. ").unwrap(), "example.org.");
        assert_eq!(normalize_fqdn("_sip._tcp.example.org").unwrap(), "_sip._tcp.example.org.");
    }

    #[test]
    fn bad_names_are_rejected() {
        assert_eq!(normalize_fqdn("."), Err(ValidationError::Empty));
        assert_eq!(normalize_fqdn("a..b"), Err(ValidationError::Empty));
        assert_eq!(normalize_fqdn("-a.org"), Err(ValidationError::LeadingOrTrailingHyphen));
        assert_eq!(normalize_fqdn("a b.org"), Err(ValidationError::InvalidCharacters));
        assert_eq!(
            validate_label(&"a".repeat(64)),
            Err(ValidationError::TooLong)
        );
    }
}
