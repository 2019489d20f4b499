//! Request/response contract between the form screens and the prediction
//! services. Nothing in here touches the browser, so it builds and tests
//! natively.

pub mod chart;
pub mod choices;
pub mod diagnosis;
pub mod error;
pub mod prediction;
pub mod survey;

pub use chart::{PieSlice, SliceShape};
pub use choices::{AgeCategory, Binary, Choice, Diabetic, GenHealth, Race, Sex};
pub use diagnosis::{Candidate, DiagnosisResult};
pub use error::ClientError;
pub use prediction::{Decision, Posterior, PredictionResult};
pub use survey::{
    ChoiceField, FORM_LAYOUT, NumericField, SurveyField, SurveyInput, SurveyPayload,
};
