use thiserror::Error;

pub const BLANK_CITY_MESSAGE: &str = "Please enter a city name.";
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Outcome of a failed lookup, as shown to the user.
///
/// `Display` is the exact text the UI renders. Transport causes are never
/// carried here; they are logged when the lookup resolves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Blank or whitespace-only city text. No request was made.
    #[error("{}", BLANK_CITY_MESSAGE)]
    Validation,

    /// The endpoint answered but reported a failure in its payload.
    #[error("{message}")]
    Upstream { message: String },

    /// Network failure, timeout or an unusable response body.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Transport,
}

impl LookupError {
    /// Build an upstream error from the payload's optional `message`,
    /// falling back when it is absent or empty.
    pub fn upstream(message: Option<&str>) -> Self {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => CITY_NOT_FOUND_MESSAGE.to_string(),
        };
        LookupError::Upstream { message }
    }
}

/// Anything that prevented a usable payload from reaching the controller.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to weather endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather endpoint returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather payload is missing required field `{0}`")]
    MalformedPayload(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_uses_payload_message_verbatim() {
        let err = LookupError::upstream(Some("city not found"));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn upstream_falls_back_when_message_missing_or_empty() {
        assert_eq!(LookupError::upstream(None).to_string(), CITY_NOT_FOUND_MESSAGE);
        assert_eq!(LookupError::upstream(Some("")).to_string(), CITY_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(LookupError::Validation.to_string(), "Please enter a city name.");
        assert_eq!(
            LookupError::Transport.to_string(),
            "Something went wrong. Please try again."
        );
    }
}
