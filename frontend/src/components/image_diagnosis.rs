use super::handlers;
use super::preview_area::render_preview_area;
use super::results::render_results;
use super::upload_section::render_upload_section;
use super::utils::render_error_message;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClientError, DiagnosisResult};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub struct SelectedImage {
    pub file: GlooFile,
    // Revoked when dropped.
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    // File operations
    FileChosen(GlooFile),
    ClearFile,

    // Analysis operations
    Submit,
    Resolved(Result<DiagnosisResult, ClientError>),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

pub struct ImageDiagnosis {
    pub selected: Option<SelectedImage>,
    pub result: DiagnosisResult,
    pub error: Option<String>,
    pub is_dragging: bool,
    pub in_flight: usize,
    _paste_listener: Option<EventListener>,
}

impl Component for ImageDiagnosis {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let paste_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        Self {
            selected: None,
            result: DiagnosisResult::default(),
            error: None,
            is_dragging: false,
            in_flight: 0,
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::ClearFile => handlers::handle_clear_file(self),

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Resolved(outcome) => handlers::handle_resolved(self, outcome),

            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="image-screen">
                <div class="upload-section">
                    { render_upload_section(self, ctx) }
                    { render_preview_area(self, ctx) }
                </div>
                { render_error_message(self.error.as_ref()) }
                { render_results(self) }
            </section>
        }
    }
}
