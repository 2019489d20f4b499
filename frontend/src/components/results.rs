use super::image_diagnosis::ImageDiagnosis;
use yew::prelude::*;

pub fn render_results(model: &ImageDiagnosis) -> Html {
    let result = &model.result;
    if result.is_empty() {
        return html! {};
    }

    let confidence = result.confidence.unwrap_or_default();

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2>
                    <i class="fa-solid fa-stethoscope"></i>
                    { format!(" {}", result.top_diagnosis.as_deref().unwrap_or("Tidak diketahui")) }
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"Keyakinan:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", confidence.clamp(0.0, 100.0))}></div>
                    </div>
                    <div class="meter-value">
                        { result.confidence_text().map(|c| format!("{}%", c)).unwrap_or_else(|| "-".into()) }
                    </div>
                </div>
            </div>
            <div class="detailed-results">
                <h3>{"3 Diagnosis Teratas"}</h3>
                <ol class="result-bars">
                    { for result.top3.iter().map(|candidate| html! {
                        <li class="result-item">
                            <div class="result-label">{ &candidate.disease }</div>
                            <div class="result-bar-container">
                                <div class="result-bar" style={format!("width: {}%", candidate.probability.clamp(0.0, 100.0))}></div>
                            </div>
                            <div class="result-value">{ format!("{:.2}%", candidate.probability) }</div>
                        </li>
                    })}
                </ol>
            </div>
        </div>
    }
}
