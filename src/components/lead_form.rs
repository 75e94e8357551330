use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::fields::{bind_checked, bind_text, NumericField};
use crate::format::to_amount;
use crate::recommend::Track;
use crate::submit::{outcome_toast, FormState, LeadRequest, Transport, LEAD_SUCCESS_TOAST};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub lead_type: Track,
    /// Explicit selection on the segmented control.
    pub on_select_type: Callback<Track>,
    /// Fired after a successful submission has cleared the form.
    pub on_submitted: Callback<()>,
    pub on_toast: Callback<String>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let company = use_state(String::new);
    let name = use_state(String::new);
    let contact = use_state(String::new);
    let monthly_ad_cost = use_state(String::new);
    let agree = use_state(|| false);
    let state = use_state(FormState::default);

    let onsubmit = {
        let company = company.clone();
        let name = name.clone();
        let contact = contact.clone();
        let monthly_ad_cost = monthly_ad_cost.clone();
        let agree = agree.clone();
        let state = state.clone();
        let lead_type = props.lead_type;
        let on_toast = props.on_toast.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.loading {
                return;
            }

            let mut next = *state;
            if let Err(err) = next.begin(*agree) {
                on_toast.emit(err.to_string());
                return;
            }
            state.set(next);

            let request = LeadRequest {
                company: company.trim().to_string(),
                name: name.trim().to_string(),
                contact: contact.trim().to_string(),
                monthly_ad_cost: to_amount(&monthly_ad_cost),
                lead_type,
            };
            log::info!("submitting lead for {} ({})", request.company, request.lead_type);

            let company = company.clone();
            let name = name.clone();
            let contact = contact.clone();
            let monthly_ad_cost = monthly_ad_cost.clone();
            let agree = agree.clone();
            let state = state.clone();
            let on_toast = on_toast.clone();
            let on_submitted = on_submitted.clone();
            spawn_local(async move {
                let result = Transport::for_leads().send(&request).await;
                if let Err(err) = &result {
                    log::error!("lead submission failed: {}", err);
                }

                let mut done = next;
                done.finish(&result);
                state.set(done);
                on_toast.emit(outcome_toast(&result, LEAD_SUCCESS_TOAST));

                if result.is_ok() {
                    company.set(String::new());
                    name.set(String::new());
                    contact.set(String::new());
                    monthly_ad_cost.set(String::new());
                    agree.set(false);
                    on_submitted.emit(());
                }
            });
        })
    };

    let segment = |track: Track, label: &'static str| {
        let on_select_type = props.on_select_type.clone();
        let active = props.lead_type == track;
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("seg__btn", active.then(|| "is-active"))}
                aria-selected={if active { "true" } else { "false" }}
                onclick={Callback::from(move |_: MouseEvent| on_select_type.emit(track))}
            >
                { label }
            </button>
        }
    };

    let on_again = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.reset();
            state.set(next);
        })
    };

    html! {
        <section id="form" class="section lead">
            <h2 class="section__title">{"무료 진단 신청"}</h2>

            if state.succeeded {
                <div class="success-panel" role="status">
                    <p>{"신청이 접수됐어요. 영업일 기준 1일 안에 연락드릴게요."}</p>
                    <button type="button" class="btn btn--ghost" onclick={on_again}>{"다시 작성하기"}</button>
                </div>
            }

            <form id="leadForm" class="form" {onsubmit} novalidate={true}>
                <div class="seg" role="tablist" aria-label="상담 유형">
                    { segment(Track::Agency, "대행 상담") }
                    { segment(Track::Solution, "솔루션 데모") }
                </div>
                <input id="type" type="hidden" name="type" value={props.lead_type.as_str()} />

                <label class="field" for="company">
                    <span class="field__label">{"회사명"}</span>
                    <input id="company" type="text" required={true} value={(*company).clone()} oninput={bind_text(&company)} />
                </label>
                <label class="field" for="name">
                    <span class="field__label">{"담당자"}</span>
                    <input id="name" type="text" required={true} value={(*name).clone()} oninput={bind_text(&name)} />
                </label>
                <label class="field" for="contact">
                    <span class="field__label">{"연락처"}</span>
                    <input id="contact" type="tel" required={true} value={(*contact).clone()} oninput={bind_text(&contact)} />
                </label>
                <NumericField
                    id="monthlyAdCost"
                    label="월 광고비"
                    placeholder="예: 10,000,000"
                    suffix={Some(AttrValue::from("원"))}
                    value={(*monthly_ad_cost).clone()}
                    on_change={{ let monthly_ad_cost = monthly_ad_cost.clone(); Callback::from(move |v: String| monthly_ad_cost.set(v)) }}
                />

                <label class="check">
                    <input id="agree" type="checkbox" checked={*agree} onchange={bind_checked(&agree)} />
                    <span>{"개인정보 수집·이용에 동의합니다."}</span>
                </label>

                <button
                    type="submit"
                    class={classes!("btn", "btn--primary", state.loading.then(|| "is-loading"))}
                    disabled={state.loading}
                >
                    {"신청하기"}
                </button>
            </form>
        </section>
    }
}
