use crate::error::ClientError;
use crate::prediction::Envelope;
use crate::survey::round2;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Multipart field the image endpoint reads the upload from.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub disease: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosisData {
    #[serde(default)]
    pub top_diagnosis: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient_candidates")]
    pub top3: Vec<Candidate>,
}

// Anything but a list becomes empty; list entries that don't parse are dropped.
fn lenient_candidates<'de, D>(deserializer: D) -> Result<Vec<Candidate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// What the image screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosisResult {
    pub top_diagnosis: Option<String>,
    /// Percentage, already rounded to two decimals.
    pub confidence: Option<f64>,
    /// Sorted by probability, highest first.
    pub top3: Vec<Candidate>,
}

impl DiagnosisResult {
    pub fn from_data(data: DiagnosisData) -> Self {
        let mut top3 = data.top3;
        rank_candidates(&mut top3);
        Self {
            top_diagnosis: data.top_diagnosis,
            confidence: data.confidence.map(round2),
            top3,
        }
    }

    /// Maps a raw response body. Text that is not JSON is an error; a
    /// well-formed `success: false` (or any other non-success shape) clears
    /// the result.
    pub fn from_body(body: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(match serde_json::from_value::<Envelope<DiagnosisData>>(value) {
            Ok(Envelope {
                success: true,
                data: Some(data),
            }) => Self::from_data(data),
            Ok(_) => Self::default(),
            Err(err) => {
                log::warn!("Unexpected diagnosis response shape: {}", err);
                Self::default()
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.top_diagnosis.is_none() && self.top3.is_empty()
    }

    pub fn confidence_text(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.2}", c))
    }
}

/// Stable descending sort by probability.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
}

/// Accepts picker/drop/paste files by MIME type.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Gate in front of the image upload: nothing is sent without a file.
pub fn require_image<F>(selected: Option<F>) -> Result<F, ClientError> {
    selected.ok_or(ClientError::NoImageSelected)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MELANOMA: &str = r#"{
        "success": true,
        "data": {
            "top_diagnosis": "Melanoma",
            "confidence": 87.456,
            "top3": [
                { "disease": "A", "probability": 10 },
                { "disease": "B", "probability": 87.456 },
                { "disease": "C", "probability": 2 }
            ]
        }
    }"#;

    #[test]
    fn success_rounds_confidence_and_reranks() {
        let result = DiagnosisResult::from_body(MELANOMA).unwrap();
        assert_eq!(result.top_diagnosis.as_deref(), Some("Melanoma"));
        assert_eq!(result.confidence, Some(87.46));
        assert_eq!(result.confidence_text().as_deref(), Some("87.46"));
        let order: Vec<_> = result.top3.iter().map(|c| c.disease.as_str()).collect();
        assert_eq!(order, ["B", "A", "C"]);
    }

    #[test]
    fn missing_or_non_list_top3_becomes_empty() {
        for top3 in ["", r#", "top3": null"#, r#", "top3": "oops""#, r#", "top3": {"disease": "A"}"#] {
            let body = format!(
                r#"{{"success": true, "data": {{"top_diagnosis": "Nevus", "confidence": 50{top3}}}}}"#
            );
            let result = DiagnosisResult::from_body(&body).unwrap();
            assert!(result.top3.is_empty(), "top3 fragment {top3:?}");
            assert_eq!(result.top_diagnosis.as_deref(), Some("Nevus"));
        }
    }

    #[test]
    fn malformed_list_entries_are_dropped() {
        let body = r#"{"success": true, "data": {"top_diagnosis": "X", "confidence": 1,
            "top3": [{"disease": "A", "probability": 3}, 7, {"disease": "B"}, {"disease": "C", "probability": 9}]}}"#;
        let result = DiagnosisResult::from_body(body).unwrap();
        let order: Vec<_> = result.top3.iter().map(|c| c.disease.as_str()).collect();
        assert_eq!(order, ["C", "A"]);
    }

    #[test]
    fn ties_keep_backend_order() {
        let mut candidates = vec![
            Candidate {
                disease: "first".into(),
                probability: 5.0,
            },
            Candidate {
                disease: "second".into(),
                probability: 5.0,
            },
            Candidate {
                disease: "top".into(),
                probability: 6.0,
            },
        ];
        rank_candidates(&mut candidates);
        let order: Vec<_> = candidates.iter().map(|c| c.disease.as_str()).collect();
        assert_eq!(order, ["top", "first", "second"]);
    }

    #[test]
    fn failure_flag_clears_result() {
        let result = DiagnosisResult::from_body(r#"{"success": false}"#).unwrap();
        assert!(result.is_empty());
        assert_eq!(result, DiagnosisResult::default());
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(matches!(
            DiagnosisResult::from_body("<html>502</html>"),
            Err(ClientError::Decode(_))
        ));
    }

    #[test]
    fn upload_requires_a_file() {
        assert_eq!(require_image::<&str>(None), Err(ClientError::NoImageSelected));
        assert_eq!(require_image(Some("skin.png")), Ok("skin.png"));
    }

    #[test]
    fn only_image_mime_types_are_accepted() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }
}
