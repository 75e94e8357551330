use chrono::Datelike;
use yew::prelude::*;

use crate::components::calculator::Calculator;
use crate::components::case_form::CaseForm;
use crate::components::faq::Faq;
use crate::components::lead_form::LeadForm;
use crate::components::tabs::{DashboardTabs, PipelineTabs};
use crate::recommend::Track;
use crate::scroll::ScrollTarget;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub lead_type: Track,
    pub on_select_type: Callback<Track>,
    pub on_lead_submitted: Callback<()>,
    pub on_toast: Callback<String>,
    pub on_navigate: Callback<ScrollTarget>,
}

fn cta(on_navigate: &Callback<ScrollTarget>, target: ScrollTarget) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(target);
    })
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <main class="landing-page">
            <header class="hero">
                <div class="hero__content">
                    <h1>{"광고비는 그대로, 계약 CPA는 낮게"}</h1>
                    <p class="hero__subtitle">
                        {"매체 운영부터 계약 추적까지, 지금 구조에 맞는 방법을 추천해 드려요."}
                    </p>
                    <div class="hero__cta-group">
                        <a href="#form" class="btn btn--primary"
                            onclick={cta(&props.on_navigate, ScrollTarget::LeadForm(Track::Agency))}>
                            {"대행 상담 신청"}
                        </a>
                        <a href="#form" class="btn btn--ghost"
                            onclick={cta(&props.on_navigate, ScrollTarget::LeadForm(Track::Solution))}>
                            {"솔루션 데모 보기"}
                        </a>
                    </div>
                </div>
            </header>

            <section id="how" class="section how">
                <h2 class="section__title">{"계약까지 이어지는 파이프라인"}</h2>
                <PipelineTabs />
            </section>

            <section class="section product">
                <h2 class="section__title">{"대시보드 미리보기"}</h2>
                <DashboardTabs />
            </section>

            <section id="calc" class="section calc-section">
                <h2 class="section__title">{"우리 회사 계약 CPA 계산하기"}</h2>
                <Calculator on_toast={props.on_toast.clone()} on_navigate={props.on_navigate.clone()} />
            </section>

            <LeadForm
                lead_type={props.lead_type}
                on_select_type={props.on_select_type.clone()}
                on_submitted={props.on_lead_submitted.clone()}
                on_toast={props.on_toast.clone()}
            />

            <CaseForm on_toast={props.on_toast.clone()} />

            <Faq />

            <div class="sticky-cta">
                <span>{"월 광고비 대비 계약이 아쉽다면"}</span>
                <a href="#form" class="btn btn--primary"
                    onclick={cta(&props.on_navigate, ScrollTarget::LeadForm(props.lead_type))}>
                    { props.lead_type.cta_label() }
                </a>
                <a href="#case" class="btn btn--ghost"
                    onclick={cta(&props.on_navigate, ScrollTarget::CaseForm)}>
                    {"사례 받기"}
                </a>
            </div>

            <footer class="footer">
                <p>{"© "}<span id="year">{ year }</span>{" CPA Lab. All rights reserved."}</p>
            </footer>
        </main>
    }
}
