use yew::prelude::*;

const PIPELINE_STEPS: &[(&str, &str)] = &[
    ("유입", "매체별 광고 클릭과 방문을 한 화면에서 모읍니다."),
    ("리드", "폼·전화·채팅 문의를 캠페인 단위로 연결합니다."),
    ("상담", "영업팀 상담 결과를 리드에 바로 기록합니다."),
    ("계약", "계약까지 이어진 광고비만 따로 떼어 CPA를 계산합니다."),
];

/// Pipeline stages, exactly one selected.
#[function_component(PipelineTabs)]
pub fn pipeline_tabs() -> Html {
    let active = use_state(|| 0usize);

    html! {
        <div class="pipe" role="tablist">
            {
                for PIPELINE_STEPS.iter().enumerate().map(|(idx, (label, detail))| {
                    let selected = *active == idx;
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(idx))
                    };
                    html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("pipe__item", selected.then(|| "is-active"))}
                            aria-selected={if selected { "true" } else { "false" }}
                            {onclick}
                        >
                            <strong>{ *label }</strong>
                            <span>{ *detail }</span>
                        </button>
                    }
                })
            }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Overview,
    Channels,
    Alerts,
}

impl DashboardTab {
    const ALL: [DashboardTab; 3] = [DashboardTab::Overview, DashboardTab::Channels, DashboardTab::Alerts];

    fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "요약",
            DashboardTab::Channels => "매체별",
            DashboardTab::Alerts => "알림",
        }
    }

    fn id(self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Channels => "channels",
            DashboardTab::Alerts => "alerts",
        }
    }

    fn body(self) -> Html {
        match self {
            DashboardTab::Overview => html! {
                <p>{"이번 달 광고비, 계약 수, 계약 CPA 추이를 하루 단위로 확인하세요."}</p>
            },
            DashboardTab::Channels => html! {
                <p>{"검색·SNS·디스플레이 매체별로 계약까지 이어진 비용을 비교합니다."}</p>
            },
            DashboardTab::Alerts => html! {
                <p>{"CPA가 목표치를 넘으면 담당자에게 바로 알려드려요."}</p>
            },
        }
    }
}

/// Product preview tabs; only the active panel is rendered visible.
#[function_component(DashboardTabs)]
pub fn dashboard_tabs() -> Html {
    let active = use_state(|| DashboardTab::ALL[0]);

    html! {
        <div id="product" class="tabs">
            <div class="tabs__list" role="tablist">
                {
                    for DashboardTab::ALL.iter().map(|&tab| {
                        let selected = *active == tab;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(tab))
                        };
                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("tabs__btn", selected.then(|| "is-active"))}
                                id={format!("tab-{}", tab.id())}
                                aria-selected={if selected { "true" } else { "false" }}
                                {onclick}
                            >
                                { tab.label() }
                            </button>
                        }
                    })
                }
            </div>
            {
                for DashboardTab::ALL.iter().map(|&tab| html! {
                    <div
                        class="tabs__panel"
                        role="tabpanel"
                        aria-labelledby={format!("tab-{}", tab.id())}
                        hidden={*active != tab}
                    >
                        { tab.body() }
                    </div>
                })
            }
        </div>
    }
}
