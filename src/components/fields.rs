use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::{format_input_keep_caret, NumericCaretFormatter};

/// Input handler that mirrors the field's text into `state`.
pub fn bind_text(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_checked(state: &UseStateHandle<bool>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.checked());
    })
}

#[derive(Properties, PartialEq)]
pub struct NumericFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

/// Text input that regroups digits on every keystroke without moving the
/// caret off the digit being typed.
#[function_component(NumericField)]
pub fn numeric_field(props: &NumericFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            format_input_keep_caret(&input, &NumericCaretFormatter::default());
            on_change.emit(input.value());
        })
    };

    html! {
        <label class="field" for={props.id.clone()}>
            <span class="field__label">{ props.label.clone() }</span>
            <span class="field__control">
                <input
                    id={props.id.clone()}
                    type="text"
                    inputmode="numeric"
                    autocomplete="off"
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
                if let Some(suffix) = &props.suffix {
                    <span class="field__suffix">{ suffix.clone() }</span>
                }
            </span>
        </label>
    }
}
