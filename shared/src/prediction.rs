use crate::chart::{PieSlice, pie_slices};
use crate::error::ClientError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const YES_LABEL: &str = "Kanker";
pub const NO_LABEL: &str = "Tidak Kanker";
pub const YES_COLOR: &str = "#bf2828";
pub const NO_COLOR: &str = "#13ad37";

/// Wrapper every prediction endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Decision {
    #[display(fmt = "KANKER")]
    Yes,
    #[display(fmt = "TIDAK KANKER")]
    No,
}

/// Posterior probabilities, already on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    pub no: f64,
    pub yes: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionData {
    pub decision: Decision,
    pub posterior: Posterior,
}

/// What the survey screen shows. The default is the empty state: no decision
/// and a zero posterior.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictionResult {
    pub decision: Option<Decision>,
    pub posterior: Posterior,
}

impl PredictionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Maps a decoded response body. Anything other than a successful,
    /// well-formed answer resets to the empty state.
    pub fn from_value(body: Value) -> Self {
        match serde_json::from_value::<Envelope<PredictionData>>(body) {
            Ok(Envelope {
                success: true,
                data: Some(data),
            }) => Self {
                decision: Some(data.decision),
                posterior: data.posterior,
            },
            Ok(_) => Self::empty(),
            Err(err) => {
                log::warn!("Unexpected prediction response shape: {}", err);
                Self::empty()
            }
        }
    }

    /// Maps a raw response body. Only text that is not JSON at all is an
    /// error.
    pub fn from_body(body: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    pub fn is_empty(&self) -> bool {
        self.decision.is_none()
    }

    /// Two slices, yes first: red "Kanker" and green "Tidak Kanker".
    pub fn chart(&self) -> Vec<PieSlice> {
        pie_slices(&[
            (YES_LABEL, self.posterior.yes, YES_COLOR),
            (NO_LABEL, self.posterior.no, NO_COLOR),
        ])
    }
}
