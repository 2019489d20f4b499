use super::image_diagnosis::{ImageDiagnosis, Msg};
use super::utils::first_image_file;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &ImageDiagnosis, ctx: &Context<ImageDiagnosis>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let chosen = input.files().as_ref().and_then(first_image_file);

        input.set_value("");

        match chosen {
            Some(file) => Msg::FileChosen(file),
            None => Msg::SetError(Some("Tidak ada file gambar yang valid.".into())),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_: MouseEvent| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <button id="upload-button" class="analyze-btn" onclick={trigger_file_input.clone()}>
                <i class="fa-solid fa-upload"></i> {" Pilih Gambar"}
            </button>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={trigger_file_input}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Seret & lepas gambar di sini, tempel, atau klik"}</p>
                    <p class="file-types">{"Format: JPG, PNG, WEBP, GIF"}</p>
                </div>
            </div>
        </>
    }
}
