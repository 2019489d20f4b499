use thiserror::Error;

/// Generic notice for anything that goes wrong between the browser and the
/// prediction service.
pub const SERVER_UNAVAILABLE: &str = "Server tidak merespons";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Tinggi dan berat wajib diisi")]
    MissingBodyMeasurements,
    #[error("Pilih gambar terlebih dahulu")]
    NoImageSelected,
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text for the alert dialog. Transport and decode details only go to the
    /// log.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) | ClientError::Decode(_) => SERVER_UNAVAILABLE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the request never left the browser.
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::MissingBodyMeasurements | ClientError::NoImageSelected)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failures_collapse_to_generic_notice() {
        let err = ClientError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), SERVER_UNAVAILABLE);
        assert_eq!(err.to_string(), "Network error: TypeError: Failed to fetch");
        assert!(!err.is_local());
    }

    #[test]
    fn input_errors_show_their_own_text() {
        assert_eq!(
            ClientError::MissingBodyMeasurements.user_message(),
            "Tinggi dan berat wajib diisi"
        );
        assert!(ClientError::NoImageSelected.is_local());
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
