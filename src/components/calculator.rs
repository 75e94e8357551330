use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::fields::NumericField;
use crate::format::{group_digits, to_amount, DEFAULT_SEPARATOR};
use crate::recommend::{Complexity, Recommendation, RecommendationEngine, Track};
use crate::scroll::{focus_without_scroll, ScrollTarget};

const IDLE_TEXT: &str = "값을 입력하면 계약 CPA가 표시됩니다.";
const INVALID_TEXT: &str = "월 광고비와 월 계약 수를 입력해주세요.";

#[derive(Clone, PartialEq)]
enum CalcResult {
    Idle,
    Invalid,
    Recommended(Recommendation),
}

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub on_toast: Callback<String>,
    pub on_navigate: Callback<ScrollTarget>,
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let ad_cost = use_state(String::new);
    let contracts = use_state(String::new);
    let complexity = use_state(|| None::<Complexity>);
    let result = use_state(|| CalcResult::Idle);
    let threshold = group_digits(RecommendationEngine::default().threshold(), DEFAULT_SEPARATOR);

    let onsubmit = {
        let ad_cost = ad_cost.clone();
        let contracts = contracts.clone();
        let complexity = complexity.clone();
        let result = result.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let engine = RecommendationEngine::default();
            match engine.recommend(to_amount(&ad_cost), to_amount(&contracts), *complexity) {
                Ok(rec) => {
                    log::info!("calculated cpa {} -> {}", rec.cpa, rec.track);
                    result.set(CalcResult::Recommended(rec));
                }
                Err(err) => {
                    result.set(CalcResult::Invalid);
                    on_toast.emit(err.to_string());
                }
            }
        })
    };

    let on_reset = {
        let ad_cost = ad_cost.clone();
        let contracts = contracts.clone();
        let complexity = complexity.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            ad_cost.set(String::new());
            contracts.set(String::new());
            complexity.set(None);
            result.set(CalcResult::Idle);
            focus_without_scroll("#adCost");
        })
    };

    let on_complexity = {
        let complexity = complexity.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            complexity.set(Some(if input.checked() { Complexity::Yes } else { Complexity::No }));
        })
    };

    let (result_text, recommended_track) = match &*result {
        CalcResult::Idle => (IDLE_TEXT.to_string(), None),
        CalcResult::Invalid => (INVALID_TEXT.to_string(), None),
        CalcResult::Recommended(rec) => (rec.message.clone(), Some(rec.track)),
    };

    let on_primary = {
        let on_navigate = props.on_navigate.clone();
        let track = recommended_track.unwrap_or(Track::Agency);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(ScrollTarget::LeadForm(track));
        })
    };

    html! {
        <form id="calcForm" class="calc" onsubmit={onsubmit} novalidate={true}>
            <div class="calc__fields">
                <NumericField
                    id="adCost"
                    label="월 광고비"
                    placeholder="예: 5,000,000"
                    suffix={Some(AttrValue::from("원"))}
                    value={(*ad_cost).clone()}
                    on_change={{ let ad_cost = ad_cost.clone(); Callback::from(move |v: String| ad_cost.set(v)) }}
                />
                <NumericField
                    id="contracts"
                    label="월 계약 수"
                    placeholder="예: 12"
                    suffix={Some(AttrValue::from("건"))}
                    value={(*contracts).clone()}
                    on_change={{ let contracts = contracts.clone(); Callback::from(move |v: String| contracts.set(v)) }}
                />
                <label class="check">
                    <input
                        id="complexity"
                        type="checkbox"
                        checked={*complexity == Some(Complexity::Yes)}
                        onchange={on_complexity}
                    />
                    <span>{"채널·상품 구성이 복잡한 편이에요"}</span>
                </label>
            </div>

            <div class="calc__buttons">
                <button type="submit" class="btn btn--primary">{"계산하기"}</button>
                <button id="calcReset" type="button" class="btn btn--ghost" onclick={on_reset}>{"초기화"}</button>
            </div>

            <p id="result" class="calc__result" aria-live="polite">{ result_text }</p>

            <ul id="calcTips" class="calc__tips" hidden={recommended_track.is_some()}>
                <li>{"광고비는 부가세 제외 금액 기준으로 입력하세요."}</li>
                <li>{"계약 수는 같은 기간에 실제 체결된 건수입니다."}</li>
                <li>{ format!("계약 CPA가 ₩ {} 이상이면 솔루션 데모를 추천해요.", threshold) }</li>
            </ul>

            <div id="calcActions" class="calc__actions" hidden={recommended_track.is_none()}>
                <button
                    id="calcPrimary"
                    type="button"
                    class="btn btn--primary"
                    onclick={on_primary}
                >
                    { recommended_track.map(Track::cta_label).unwrap_or("상담하러가기") }
                </button>
            </div>
        </form>
    }
}
