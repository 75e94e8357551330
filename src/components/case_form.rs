use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::fields::{bind_checked, bind_text};
use crate::submit::{outcome_toast, CaseRequest, FormState, Transport, CASE_SUCCESS_TOAST};

#[derive(Properties, PartialEq)]
pub struct CaseFormProps {
    pub on_toast: Callback<String>,
}

/// Request form for the emailed case-study report.
#[function_component(CaseForm)]
pub fn case_form(props: &CaseFormProps) -> Html {
    let company = use_state(String::new);
    let email = use_state(String::new);
    let industry = use_state(String::new);
    let agree = use_state(|| false);
    let state = use_state(FormState::default);

    let onsubmit = {
        let company = company.clone();
        let email = email.clone();
        let industry = industry.clone();
        let agree = agree.clone();
        let state = state.clone();
        let on_toast = props.on_toast.clone();
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

            let request = CaseRequest {
                company: company.trim().to_string(),
                email: email.trim().to_string(),
                industry: industry.trim().to_string(),
            };

            let company = company.clone();
            let email = email.clone();
            let industry = industry.clone();
            let agree = agree.clone();
            let state = state.clone();
            let on_toast = on_toast.clone();
            spawn_local(async move {
                let result = Transport::for_case_requests().send(&request).await;
                if let Err(err) = &result {
                    log::error!("case request failed: {}", err);
                }

                let mut done = next;
                done.finish(&result);
                state.set(done);
                on_toast.emit(outcome_toast(&result, CASE_SUCCESS_TOAST));

                if result.is_ok() {
                    company.set(String::new());
                    email.set(String::new());
                    industry.set(String::new());
                    agree.set(false);
                }
            });
        })
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
        <section id="case" class="section case">
            <h2 class="section__title">{"업종별 성과 사례 받기"}</h2>
            <p class="section__lead">{"비슷한 규모의 광고주가 CPA를 어떻게 낮췄는지 리포트로 보내드려요."}</p>

            if state.succeeded {
                <div class="success-panel" role="status">
                    <p>{"리포트 요청이 접수됐어요. 메일함을 확인해주세요."}</p>
                    <button type="button" class="btn btn--ghost" onclick={on_again}>{"다시 작성하기"}</button>
                </div>
            }

            <form id="caseForm" class="form" {onsubmit} novalidate={true}>
                <label class="field" for="caseCompany">
                    <span class="field__label">{"회사명"}</span>
                    <input id="caseCompany" type="text" value={(*company).clone()} oninput={bind_text(&company)} />
                </label>
                <label class="field" for="caseEmail">
                    <span class="field__label">{"이메일"}</span>
                    <input id="caseEmail" type="email" value={(*email).clone()} oninput={bind_text(&email)} />
                </label>
                <label class="field" for="caseIndustry">
                    <span class="field__label">{"업종"}</span>
                    <input id="caseIndustry" type="text" value={(*industry).clone()} oninput={bind_text(&industry)} />
                </label>

                <label class="check">
                    <input id="caseAgree" type="checkbox" checked={*agree} onchange={bind_checked(&agree)} />
                    <span>{"개인정보 수집·이용에 동의합니다."}</span>
                </label>

                <button
                    type="submit"
                    class={classes!("btn", "btn--primary", state.loading.then(|| "is-loading"))}
                    disabled={state.loading}
                >
                    {"리포트 받기"}
                </button>
            </form>
        </section>
    }
}
