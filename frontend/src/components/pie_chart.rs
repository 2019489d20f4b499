use shared::chart::{CHART_RADIUS, CHART_SIZE};
use shared::{PieSlice, PredictionResult, SliceShape};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub result: PredictionResult,
}

fn render_slice(slice: &PieSlice) -> Html {
    let tooltip = format!("{} {}%", slice.label, slice.value);
    match &slice.shape {
        SliceShape::Full => {
            let center = (CHART_SIZE / 2.0).to_string();
            html! {
                <circle cx={center.clone()} cy={center} r={CHART_RADIUS.to_string()} fill={slice.color}>
                    <title>{ tooltip }</title>
                </circle>
            }
        }
        SliceShape::Wedge(path) => html! {
            <path d={path.clone()} fill={slice.color} stroke="#ffffff" stroke-width="1">
                <title>{ tooltip }</title>
            </path>
        },
    }
}

fn render_label(slice: &PieSlice) -> Html {
    html! {
        <text
            x={format!("{:.2}", slice.label_x)}
            y={format!("{:.2}", slice.label_y)}
            text-anchor="middle"
            dominant-baseline="middle"
            font-size="13"
            font-weight="600"
            fill="#222222"
        >
            { slice.label }
        </text>
    }
}

/// Posterior pie for a survey result. Renders nothing until a decision is in.
#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let Some(decision) = props.result.decision else {
        return html! {};
    };
    let slices = props.result.chart();

    html! {
        <div class="results-container pie-card">
            <div class="result-header">
                <h2>{"Hasil Analisis Bayesian Decision Theory"}</h2>
                <p class="result-description">
                    {"Analisis: "}<span class="decision">{ decision.to_string() }</span>
                </p>
            </div>
            <svg
                class="pie-chart"
                viewBox={format!("0 0 {0} {0}", CHART_SIZE)}
                role="img"
                aria-label="Probabilitas Posterior"
            >
                { for slices.iter().map(render_slice) }
                { for slices.iter().map(render_label) }
            </svg>
        </div>
    }
}
