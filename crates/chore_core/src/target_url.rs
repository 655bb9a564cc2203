use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("invalid url format: {url} ({reason})")]
    Malformed { url: String, reason: String },
    #[error("unsupported url scheme {scheme}: {url}")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("url has no host: {url}")]
    MissingHost { url: String },
}

/// Parses a scrape target. Requires an `http`/`https` scheme and a host.
///
/// Schemeless input is rejected rather than defaulted to https.
pub fn validate_target_url(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| UrlError::Malformed {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(UrlError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: other.to_string(),
            })
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost {
            url: raw.to_string(),
        });
    }

    Ok(parsed)
}
