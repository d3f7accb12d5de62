use reqwest::StatusCode;
use thiserror::Error;

use crate::location::LocationError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the core crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse response JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid city token '{0}': expected \"<lat>-<lon>\"")]
    InvalidToken(String),

    #[error("gave up after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Keeps error messages readable when an API hands back a large body.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // The cut must land on a char boundary; a multibyte body would
    // otherwise panic the slice.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_kept_verbatim() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_body_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn multibyte_body_truncated_on_char_boundary() {
        // 100 euro signs are 300 bytes; byte 200 falls inside one of them.
        let body = "€".repeat(100);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        let kept = truncated.trim_end_matches("...");
        assert_eq!(kept.len(), 198);
        assert!(kept.chars().all(|c| c == '€'));
    }

    #[test]
    fn invalid_token_mentions_expected_shape() {
        let err = Error::InvalidToken("invalid".to_string());
        assert!(err.to_string().contains("<lat>-<lon>"));
    }
}
