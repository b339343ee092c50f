//! Gemini integration: prompt building, the fetch abstraction, and error
//! classification.
pub mod client;

pub use client::GeminiClient;

use thiserror::Error;

/// Failure of a single documentation fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Error reported by the Gemini service itself (non-2xx response body)
    #[error("{0}")]
    Api(String),
    /// Transport-level failure (connect, TLS, body decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Issues one text-generation request and returns the completion text.
pub trait DocFetcher {
    fn fetch(&self, api_key: &str, prompt: &str) -> Result<String, FetchError>;
}

/// Build the natural-language prompt for a library/function pair, optionally
/// enriched with a version context from the local manifest.
pub fn build_prompt(library: &str, func: &str, version_context: Option<&str>) -> String {
    let version = version_context
        .map(|ctx| format!(" {ctx}"))
        .unwrap_or_default();
    format!(
        "Explain the usage of the '{func}' function in the '{library}' library{version}. \
         Provide a function signature and a concise code example."
    )
}

/// Whether a fetch failure means the stored API key was rejected.
///
/// Substring match on the service's error message, kept in one place because
/// the message shape is owned by Google and may change.
pub fn is_invalid_key_error(err: &FetchError) -> bool {
    let msg = err.to_string();
    msg.contains("API_KEY_INVALID") || msg.contains("API key")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_library_and_function() {
        let prompt = build_prompt("react", "useState", None);
        assert!(prompt.contains("'useState'"));
        assert!(prompt.contains("'react'"));
        assert!(!prompt.contains("version"));
    }

    #[test]
    fn prompt_includes_version_context_when_present() {
        let prompt = build_prompt("react", "useState", Some("version ^18.2.0"));
        assert!(prompt.contains("'react' library version ^18.2.0."));
    }

    #[test]
    fn rejected_key_messages_are_classified_invalid() {
        let err = FetchError::Api("API key not valid. Please pass a valid API key.".into());
        assert!(is_invalid_key_error(&err));

        let err = FetchError::Api("400 INVALID_ARGUMENT: API_KEY_INVALID".into());
        assert!(is_invalid_key_error(&err));
    }

    #[test]
    fn other_failures_are_not_classified_invalid() {
        let err = FetchError::Api("Resource has been exhausted (e.g. check quota).".into());
        assert!(!is_invalid_key_error(&err));
    }
}
