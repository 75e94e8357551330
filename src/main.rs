use std::cell::RefCell;
use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod format;
mod preference;
mod recommend;
mod scroll;
mod submit;
mod components {
    pub mod calculator;
    pub mod case_form;
    pub mod faq;
    pub mod fields;
    pub mod lead_form;
    pub mod tabs;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::toast::{Toast, ToastMessage};
use pages::landing::Landing;
use preference::{load_lead_type, save_lead_type, BrowserStorage};
use recommend::Track;
use scroll::{scroll_to, ScrollTarget};

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

fn visible_focusables(root: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| el.offset_parent().is_some())
        .collect()
}

fn set_body_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force("is-locked", locked);
    }
}

fn active_element() -> Option<HtmlElement> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lead_type: Track,
    pub on_navigate: Callback<ScrollTarget>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { lead_type, on_navigate } = props;
    let menu_open = use_state(|| false);
    let menu_ref = use_node_ref();
    let last_focused: Rc<RefCell<Option<HtmlElement>>> = use_mut_ref(|| None);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::HEADER_ELEVATE_AFTER;

    {
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                set_body_locked(*open);
                if *open {
                    if let Some(first) = menu_ref
                        .cast::<Element>()
                        .and_then(|menu| visible_focusables(&menu).into_iter().next())
                    {
                        let _ = first.focus();
                    }
                }
                || ()
            },
            *menu_open,
        );
    }

    let close_menu = {
        let menu_open = menu_open.clone();
        let last_focused = last_focused.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
            if let Some(el) = last_focused.borrow_mut().take() {
                let _ = el.focus();
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *menu_open {
                close_menu.emit(());
            } else {
                *last_focused.borrow_mut() = active_element();
                menu_open.set(true);
            }
        })
    };

    {
        let menu_ref = menu_ref.clone();
        let close_menu = close_menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let Some(menu) = menu_ref.cast::<Element>() else { return };
            if !menu.class_list().contains("is-open") {
                return;
            }
            match e.key().as_str() {
                "Escape" => close_menu.emit(()),
                "Tab" => {
                    let focusables = visible_focusables(&menu);
                    let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
                        return;
                    };
                    let active = active_element();
                    if e.shift_key() && active.as_ref() == Some(first) {
                        e.prevent_default();
                        let _ = last.focus();
                    } else if !e.shift_key() && active.as_ref() == Some(last) {
                        e.prevent_default();
                        let _ = first.focus();
                    }
                }
                _ => {}
            }
        });
    }

    let link = |label: &'static str, href: &'static str, target: ScrollTarget| {
        let on_navigate = on_navigate.clone();
        let close_menu = close_menu.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(());
            on_navigate.emit(target);
        });
        html! {
            <a class="nav__link" href={href} {onclick}>{ label }</a>
        }
    };

    html! {
        <nav class={classes!("header", is_scrolled.then(|| "is-scrolled"))}>
            <div class="nav__content">
                <a class="nav__logo" href="#">{"CPA Lab"}</a>

                <button
                    class="burger-menu"
                    aria-label="메뉴"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div ref={menu_ref} class={classes!("nav__menu", (*menu_open).then(|| "is-open"))}>
                    { link("서비스 흐름", "#how", ScrollTarget::Section("how")) }
                    { link("CPA 계산기", "#calc", ScrollTarget::Section("calc")) }
                    { link("성과 사례", "#case", ScrollTarget::CaseForm) }
                    { link("FAQ", "#faq", ScrollTarget::Section("faq")) }
                    { link("상담 신청", "#form", ScrollTarget::LeadForm(*lead_type)) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let lead_type = use_state(|| load_lead_type(&BrowserStorage));
    let toast = use_state(|| None::<ToastMessage>);
    let toast_seq = use_mut_ref(|| 0u32);

    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |text: String| {
            let mut seq = toast_seq.borrow_mut();
            *seq = seq.wrapping_add(1);
            toast.set(Some(ToastMessage { seq: *seq, text }));
        })
    };

    let hide_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let select_lead_type = {
        let lead_type = lead_type.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |track: Track| {
            info!("lead type selected: {}", track);
            lead_type.set(track);
            save_lead_type(&BrowserStorage, track);
            show_toast.emit(track.selected_toast().to_string());
        })
    };

    // a sent lead goes back to the default track without touching the saved preference
    let lead_submitted = {
        let lead_type = lead_type.clone();
        Callback::from(move |_: ()| lead_type.set(Track::Agency))
    };

    let navigate = {
        let lead_type = lead_type.clone();
        Callback::from(move |target: ScrollTarget| {
            if let ScrollTarget::LeadForm(track) = target {
                lead_type.set(track);
            }
            scroll_to(target);
        })
    };

    html! {
        <>
            <Nav lead_type={*lead_type} on_navigate={navigate.clone()} />
            <Landing
                lead_type={*lead_type}
                on_select_type={select_lead_type}
                on_lead_submitted={lead_submitted}
                on_toast={show_toast}
                on_navigate={navigate}
            />
            <Toast message={(*toast).clone()} on_hide={hide_toast} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
