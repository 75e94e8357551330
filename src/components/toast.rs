use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    // bumped per toast so repeating the same text restarts the timer
    pub seq: u32,
    pub text: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_hide: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_hide = props.on_hide.clone();
        use_effect_with_deps(
            move |message: &Option<ToastMessage>| {
                let timeout = message.as_ref().map(|_| {
                    Timeout::new(TOAST_DURATION_MS, move || on_hide.emit(()))
                });
                // dropping the pending Timeout cancels it
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    html! {
        <div class="toast" role="status" aria-live="polite" hidden={props.message.is_none()}>
            <span class="toast__text">
                { props.message.as_ref().map(|m| m.text.clone()).unwrap_or_default() }
            </span>
        </div>
    }
}
