use crate::errors::DomainError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Normalize a user-supplied domain name for resolution: trim
/// whitespace and a trailing dot, lowercase, strip one leading "www."
/// label so `www.example.com` and `example.com` resolve to the same
/// record, then check basic host-name syntax.
pub fn normalize_domain(input: &str) -> Result<String, DomainError> {
    let trimmed = input.trim().trim_end_matches('.').to_ascii_lowercase();
    let name = trimmed.strip_prefix("www.").unwrap_or(&trimmed);

    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(input.to_string()));
    }
    for label in name.split('.') {
        let valid = !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !label.starts_with('-')
            && !label.ends_with('-');
        if !valid {
            return Err(DomainError::InvalidDomainName(input.to_string()));
        }
    }
    Ok(name.to_string())
}
