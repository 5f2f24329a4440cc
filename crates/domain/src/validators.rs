use crate::errors::DomainError;

/// Maximum length of a domain name in presentation form (RFC 1035, minus the
/// trailing dot).
const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Basic syntactic validation of a domain name before wire encoding.
///
/// Accepts a trailing dot. Underscores are allowed (service labels like
/// `_dmarc` are common in real query streams); anything outside
/// `[A-Za-z0-9_-]` is rejected.
pub fn validate_domain_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name is empty".to_string(),
        ));
    }

    let name = name.strip_suffix('.').unwrap_or(name);

    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "domain name exceeds {MAX_NAME_LEN} characters: {name}"
        )));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{name}'"
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{label}' exceeds {MAX_LABEL_LEN} characters"
            )));
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "illegal character in label '{label}'"
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{label}' starts or ends with a hyphen"
            )));
        }
    }

    Ok(())
}
