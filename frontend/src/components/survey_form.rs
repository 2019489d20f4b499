use super::fields::{render_choice_field, render_numeric_field};
use super::pie_chart::PieChart;
use super::utils::{alert, log_client_error};
use crate::api;
use shared::survey::format_number;
use shared::{
    ChoiceField, ClientError, FORM_LAYOUT, NumericField, PredictionResult, SurveyField,
    SurveyInput,
};
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum Msg {
    Choose(ChoiceField, String),
    Type(NumericField, String),
    Blur(NumericField),
    Submit,
    Resolved(Result<PredictionResult, ClientError>),
}

pub struct SurveyForm {
    input: SurveyInput,
    // Text as typed, so partial numbers like "16." survive re-renders.
    drafts: HashMap<NumericField, String>,
    result: PredictionResult,
    in_flight: usize,
}

impl Component for SurveyForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input: SurveyInput::default(),
            drafts: HashMap::new(),
            result: PredictionResult::empty(),
            in_flight: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Choose(field, value) => {
                self.input.set_choice(field, &value);
                true
            }
            Msg::Type(field, raw) => {
                self.input.set_numeric_text(field, &raw);
                self.drafts.insert(field, raw);
                true
            }
            Msg::Blur(field) => {
                let clamped = self.input.clamp_on_blur(field);
                self.drafts.insert(field, format_number(clamped));
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::Resolved(outcome) => self.handle_resolved(outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="survey-screen">
                <div class="survey-grid">
                    { for FORM_LAYOUT.iter().map(|field| self.render_field(ctx, *field)) }
                </div>
                <button class="analyze-btn" onclick={ctx.link().callback(|_| Msg::Submit)}>
                    { self.render_submit_content() }
                </button>
                <PieChart result={self.result} />
            </section>
        }
    }
}

impl SurveyForm {
    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        self.result = PredictionResult::empty();

        match self.input.to_payload() {
            Ok(payload) => {
                self.in_flight += 1;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Resolved(api::submit_survey(payload).await));
                });
            }
            Err(err) => {
                log_client_error("Survey not submitted", &err);
                alert(&err.user_message());
            }
        }
        true
    }

    // Last response to arrive wins.
    fn handle_resolved(&mut self, outcome: Result<PredictionResult, ClientError>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(result) => {
                if result.is_empty() {
                    log::warn!("Prediction service returned no result");
                } else {
                    log::info!("Prediction received: {:?}", result.decision);
                }
                self.result = result;
            }
            Err(err) => log_client_error("Survey prediction failed", &err),
        }
        true
    }

    fn render_field(&self, ctx: &Context<Self>, field: SurveyField) -> Html {
        let link = ctx.link();
        match field {
            SurveyField::Choice(choice) => render_choice_field(
                choice,
                self.input.choice(choice),
                link.callback(move |value| Msg::Choose(choice, value)),
            ),
            SurveyField::Numeric(numeric) => {
                let text = self
                    .drafts
                    .get(&numeric)
                    .cloned()
                    .unwrap_or_else(|| format_number(self.input.numeric(numeric)));
                render_numeric_field(
                    numeric,
                    text,
                    link.callback(move |raw| Msg::Type(numeric, raw)),
                    link.callback(move |_| Msg::Blur(numeric)),
                )
            }
        }
    }

    fn render_submit_content(&self) -> Html {
        if self.in_flight > 0 {
            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Memproses..."}</> }
        } else {
            html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Prediksi"}</> }
        }
    }
}
