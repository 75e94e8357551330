use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq__item", props.open.then(|| "open"))}>
            <button class="faq__question" aria-expanded={if props.open { "true" } else { "false" }} onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq__answer" hidden={!props.open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

const ENTRIES: &[(&str, &str)] = &[
    (
        "대행과 솔루션은 어떻게 다른가요?",
        "대행은 저희 팀이 매체 운영과 리포팅을 맡아 최적화하는 방식이고, 솔루션은 내부 팀이 직접 쓰는 자동화 도구입니다.",
    ),
    (
        "계약 CPA는 어떻게 계산하나요?",
        "한 달 광고비를 같은 달 실제 계약 수로 나눈 값입니다. 계산기는 원 단위로 반올림해서 보여드려요.",
    ),
    (
        "무료 진단에는 무엇이 포함되나요?",
        "현재 매체 구성과 전환 경로를 살펴보고 개선 우선순위 3가지를 정리해 드립니다.",
    ),
    (
        "최소 광고비 조건이 있나요?",
        "월 광고비 규모와 관계없이 신청하실 수 있어요. 규모에 맞춰 대행 또는 솔루션을 안내해 드립니다.",
    ),
];

/// Only one answer is open at a time; opening another closes the previous.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section faq">
            <h2 class="section__title">{"자주 묻는 질문"}</h2>
            {
                for ENTRIES.iter().enumerate().map(|(idx, (question, answer))| {
                    let is_open = *open == Some(idx);
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(if is_open { None } else { Some(idx) }))
                    };
                    html! {
                        <FaqItem question={*question} open={is_open} {on_toggle}>
                            <p>{ *answer }</p>
                        </FaqItem>
                    }
                })
            }
        </section>
    }
}
