use crate::config;
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::diagnosis::IMAGE_FIELD;
use shared::{ClientError, DiagnosisResult, PredictionResult, SurveyPayload};
use wasm_bindgen::JsValue;

fn transport(err: gloo_net::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

fn browser(err: JsValue) -> ClientError {
    ClientError::Transport(format!("{:?}", err))
}

// Status codes are not checked: the body decides the outcome.
async fn read_body(response: Response) -> Result<String, ClientError> {
    if !response.ok() {
        log::warn!(
            "Prediction service answered {} {}",
            response.status(),
            response.status_text()
        );
    }
    response.text().await.map_err(transport)
}

/// One JSON POST of the survey payload.
pub async fn submit_survey(payload: SurveyPayload) -> Result<PredictionResult, ClientError> {
    let url = config::survey_api();
    log::info!("Submitting survey to {} (BMI {})", url, payload.bmi);

    let response = Request::post(url)
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    let body = read_body(response).await?;
    PredictionResult::from_body(&body)
}

/// One multipart POST with the file under `image`. The browser picks the
/// content type and boundary.
pub async fn submit_image(file: GlooFile) -> Result<DiagnosisResult, ClientError> {
    let url = config::image_api();
    log::info!("Uploading {} ({} bytes) to {}", file.name(), file.size(), url);

    let form_data = web_sys::FormData::new().map_err(browser)?;
    form_data
        .append_with_blob(IMAGE_FIELD, file.as_ref())
        .map_err(browser)?;

    let response = Request::post(url)
        .body(form_data)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    let body = read_body(response).await?;
    DiagnosisResult::from_body(&body)
}
