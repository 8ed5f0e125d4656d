//! Field validation shared by the resource modules.

use lazy_static::lazy_static;
use loghive_core::{Error, Result};
use regex::Regex;
use url::Url;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("is a valid regex");
}

/// Check that `value` is an absolute http/https URL
pub(crate) fn validate_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !url.has_host() {
        return Err(Error::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be an absolute URL".to_string(),
        });
    }
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must begin with http or https".to_string(),
        });
    }
    Ok(())
}

/// Check that `value` looks like a deliverable email address
pub(crate) fn validate_email(field: &str, value: &str) -> Result<()> {
    if value.len() > 254 || !EMAIL_RE.is_match(value) {
        return Err(Error::InvalidEmail {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check that a retention setting is not negative
pub(crate) fn validate_non_negative(field: &str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(Error::OutOfRange {
            field: field.to_string(),
            value,
            min: 0.0,
        });
    }
    Ok(())
}
