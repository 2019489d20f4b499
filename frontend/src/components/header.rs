use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Bayes Decision Theory"}</h1>
            <p class="subtitle">{"Deteksi Penyakit Kulit (Kanker)"}</p>
        </header>
    }
}
