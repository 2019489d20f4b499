use super::image_diagnosis::{ImageDiagnosis, Msg, SelectedImage};
use super::utils::{alert, first_image_file, log_client_error};
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::diagnosis::require_image;
use shared::{ClientError, DiagnosisResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut ImageDiagnosis, file: GlooFile) -> bool {
    log::info!("Selected {} ({})", file.name(), file.raw_mime_type());
    let preview_url = ObjectUrl::from(file.clone());
    model.selected = Some(SelectedImage { file, preview_url });
    model.error = None;
    true
}

pub fn handle_clear_file(model: &mut ImageDiagnosis) -> bool {
    model.selected = None;
    model.error = None;
    true
}

pub fn handle_submit(model: &mut ImageDiagnosis, ctx: &Context<ImageDiagnosis>) -> bool {
    let selected = model.selected.as_ref().map(|image| image.file.clone());
    match require_image(selected) {
        Ok(file) => {
            model.in_flight += 1;
            model.error = None;
            send_diagnosis_request(ctx, file);
        }
        Err(err) => {
            log_client_error("Image not submitted", &err);
            alert(&err.user_message());
        }
    }
    true
}

// A failed call keeps whatever result was already on screen.
pub fn handle_resolved(
    model: &mut ImageDiagnosis,
    outcome: Result<DiagnosisResult, ClientError>,
) -> bool {
    model.in_flight = model.in_flight.saturating_sub(1);
    match outcome {
        Ok(result) => {
            log::info!(
                "Diagnosis received: {:?} ({} candidates)",
                result.top_diagnosis,
                result.top3.len()
            );
            model.result = result;
        }
        Err(err) => {
            log_client_error("Image prediction failed", &err);
            alert(&err.user_message());
        }
    }
    true
}

pub fn handle_drop(model: &mut ImageDiagnosis, ctx: &Context<ImageDiagnosis>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, &file_list);
        }
    }

    true
}

pub fn handle_paste(ctx: &Context<ImageDiagnosis>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                process_file_list(ctx, &file_list);
                return true;
            }
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<ImageDiagnosis>, file_list: &FileList) {
    match first_image_file(file_list) {
        Some(file) => ctx.link().send_message(Msg::FileChosen(file)),
        None => ctx
            .link()
            .send_message(Msg::SetError(Some("Tidak ada file gambar yang valid.".into()))),
    }
}

pub fn send_diagnosis_request(ctx: &Context<ImageDiagnosis>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            link.send_message(Msg::Resolved(api::submit_image(file).await));
        }
    });
}
