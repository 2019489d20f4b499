mod api;
mod components;
mod config;

use components::header::render_header;
use components::image_diagnosis::ImageDiagnosis;
use components::survey_form::SurveyForm;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Survey,
    Image,
}

impl Screen {
    fn title(self) -> &'static str {
        match self {
            Screen::Survey => "Kuesioner Kesehatan",
            Screen::Image => "Unggah Gambar Kulit",
        }
    }
}

enum Msg {
    Show(Screen),
}

// Switching screens unmounts the other one, so its inputs and results are
// discarded.
struct Model {
    screen: Screen,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::Survey,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(screen) if screen != self.screen => {
                log::info!("Switching to {}", screen.title());
                self.screen = screen;
                true
            }
            Msg::Show(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                { self.render_screen_tabs(ctx) }

                <main class="main-content">
                {
                    match self.screen {
                        Screen::Survey => html! { <SurveyForm /> },
                        Screen::Image => html! { <ImageDiagnosis /> },
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"Bayes Decision Theory | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

impl Model {
    fn render_screen_tabs(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab = |screen: Screen| {
            html! {
                <button
                    class={classes!("tab-btn", (self.screen == screen).then_some("active"))}
                    onclick={link.callback(move |_| Msg::Show(screen))}
                >
                    { screen.title() }
                </button>
            }
        };

        html! {
            <nav class="screen-tabs">
                { tab(Screen::Survey) }
                { tab(Screen::Image) }
            </nav>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
