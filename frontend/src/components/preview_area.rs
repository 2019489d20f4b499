use super::image_diagnosis::{ImageDiagnosis, Msg};
use yew::prelude::*;

pub fn render_preview_area(model: &ImageDiagnosis, ctx: &Context<ImageDiagnosis>) -> Html {
    let link = ctx.link();

    html! {
        <div id="preview-container">
            { render_selected_image_preview(model) }
            <div class="button-container">
                <button
                    id="clear-btn"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    onclick={link.callback(|_| Msg::ClearFile)}
                    disabled={model.selected.is_none()}
                >
                    <i class="fa-solid fa-trash"></i>{" Hapus"}
                </button>
                // Never disabled: a second click sends a second request.
                <button class="analyze-btn" onclick={link.callback(|_| Msg::Submit)}>
                    { render_analyze_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_selected_image_preview(model: &ImageDiagnosis) -> Html {
    match &model.selected {
        Some(image) => html! {
            <img id="actual-image-preview"
                src={image.preview_url.to_string()}
                alt={image.file.name()} />
        },
        None => html! {
            <div class="select-preview">
                <p>{"Belum ada gambar dipilih"}</p>
            </div>
        },
    }
}

fn render_analyze_button_content(model: &ImageDiagnosis) -> Html {
    if model.in_flight > 0 {
        return html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Menganalisis..."}</> };
    }

    let display_name = model
        .selected
        .as_ref()
        .map(|image| {
            let filename = image.file.name();
            if filename.chars().count() > 20 {
                format!("{}...", filename.chars().take(17).collect::<String>())
            } else {
                filename
            }
        })
        .unwrap_or_else(|| "Gambar".to_string());

    html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" Analisis \"{}\"", display_name) }</> }
}
