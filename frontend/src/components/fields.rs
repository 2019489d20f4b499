use shared::{ChoiceField, NumericField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn render_info_hover(info: &'static str) -> Html {
    html! {
        <span class="info-hover" tabindex="0">
            <i class="fa-solid fa-circle-info"></i>
            <span class="info-tooltip">
                <h4>{"Informasi"}</h4>
                <p>{ info }</p>
            </span>
        </span>
    }
}

fn render_label(id: &'static str, text: &'static str, hint: Option<&'static str>) -> Html {
    html! {
        <label for={id} class="field-label">
            { text }
            <span class="required">{"*"}</span>
            { hint.map(render_info_hover).unwrap_or_default() }
        </label>
    }
}

/// A `<select>` limited to the field's option set. `onchange` receives the
/// raw option value.
pub fn render_choice_field(
    field: ChoiceField,
    selected: Option<&'static str>,
    onchange: Callback<String>,
) -> Html {
    let handle_change = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        onchange.emit(select.value());
    });

    html! {
        <div class="form-field">
            { render_label(field.id(), field.label(), field.hint()) }
            <select id={field.id()} class="field-select" onchange={handle_change}>
                <option value="" disabled=true hidden=true selected={selected.is_none()}>
                    { field.placeholder() }
                </option>
                { for field.options().into_iter().map(|(value, label)| html! {
                    <option value={value} selected={selected == Some(value)}>{ label }</option>
                })}
            </select>
        </div>
    }
}

/// A number box that reports raw text on every keystroke and a separate
/// blur event for clamping.
pub fn render_numeric_field(
    field: NumericField,
    text: String,
    oninput: Callback<String>,
    onblur: Callback<()>,
) -> Html {
    let handle_input = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        oninput.emit(input.value());
    });
    let (min, max) = field.range();

    html! {
        <div class="form-field">
            { render_label(field.id(), field.label(), Some(field.hint())) }
            <input
                type="number"
                id={field.id()}
                class="field-input"
                placeholder={field.label()}
                min={min.to_string()}
                max={max.to_string()}
                value={text}
                oninput={handle_input}
                onblur={onblur.reform(|_: FocusEvent| ())}
            />
        </div>
    }
}
