// Prediction service addresses. Override at build time with
// `SURVEY_API_URL=... trunk build` / `IMAGE_API_URL=...`.

const DEFAULT_SURVEY_API: &str = "http://localhost:9000/predict";
const DEFAULT_IMAGE_API: &str = "http://localhost:8000/predict";

pub fn survey_api() -> &'static str {
    option_env!("SURVEY_API_URL").unwrap_or(DEFAULT_SURVEY_API)
}

pub fn image_api() -> &'static str {
    option_env!("IMAGE_API_URL").unwrap_or(DEFAULT_IMAGE_API)
}
