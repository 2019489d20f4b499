use gloo_file::File as GlooFile;
use shared::ClientError;
use shared::diagnosis::is_image_mime;
use web_sys::FileList;
use yew::prelude::*;

/// Blocking browser alert. Falls back to the log when there is no window.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
        None => log::warn!("Alert without window: {}", message),
    }
}

/// Input the user can fix is a warning; anything from the network is an error.
pub fn log_client_error(context: &str, err: &ClientError) {
    if err.is_local() {
        log::warn!("{}: {}", context, err);
    } else {
        log::error!("{}: {}", context, err);
    }
}

/// First image in the list; non-image files are skipped with a warning.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| {
            let accepted = is_image_mime(&file.type_());
            if !accepted {
                log::warn!("Skipping non-image file: {}", file.name());
            }
            accepted
        })
        .map(GlooFile::from)
}

pub fn render_error_message(error: Option<&String>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
