use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, FocusOptions, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::{SCROLL_FOCUS_DELAY_MS, SCROLL_HEADER_GAP};
use crate::recommend::Track;

/// Where a call-to-action sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Section(&'static str),
    /// Lead form, preset to the given track.
    LeadForm(Track),
    CaseForm,
}

impl ScrollTarget {
    pub fn section_id(self) -> &'static str {
        match self {
            ScrollTarget::Section(id) => id,
            ScrollTarget::LeadForm(_) => "form",
            ScrollTarget::CaseForm => "case",
        }
    }

    pub fn focus_selector(self) -> Option<&'static str> {
        match self {
            ScrollTarget::Section(_) => None,
            ScrollTarget::LeadForm(_) => Some("#company"),
            ScrollTarget::CaseForm => Some("#caseCompany"),
        }
    }
}

/// Document offset to scroll to so a section starts just below the sticky
/// header.
pub fn target_scroll_top(scroll_y: f64, element_top: f64, header_height: f64) -> f64 {
    let offset = header_height.ceil() + SCROLL_HEADER_GAP;
    (scroll_y + element_top - offset).max(0.0)
}

fn header_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".header").ok().flatten())
        .map(|header| header.get_bounding_client_rect().height())
        .unwrap_or(0.0)
}

/// Smooth-scrolls to the element with `id`. When `focus_selector` is given,
/// that element receives focus once the scroll has had time to settle.
pub fn scroll_to_section(id: &str, focus_selector: Option<&'static str>) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(section) = document.get_element_by_id(id) else {
        log::debug!("scroll target #{} not found", id);
        return;
    };

    let top = target_scroll_top(
        window.scroll_y().unwrap_or(0.0),
        section.get_bounding_client_rect().top(),
        header_height(),
    );

    let mut options = ScrollToOptions::new();
    options.top(top).behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    if let Some(selector) = focus_selector {
        Timeout::new(SCROLL_FOCUS_DELAY_MS, move || focus_without_scroll(selector)).forget();
    }
}

pub fn scroll_to(target: ScrollTarget) {
    scroll_to_section(target.section_id(), target.focus_selector());
}

pub fn focus_without_scroll(selector: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(el) = target {
        let mut options = FocusOptions::new();
        options.prevent_scroll(true);
        let _ = el.focus_with_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_room_for_header() {
        assert_eq!(target_scroll_top(1000.0, 400.0, 64.0), 1324.0);
    }

    #[test]
    fn rounds_header_height_up() {
        assert_eq!(target_scroll_top(0.0, 500.0, 63.2), 424.0);
    }

    #[test]
    fn form_targets_focus_first_field() {
        let lead = ScrollTarget::LeadForm(Track::Solution);
        assert_eq!(lead.section_id(), "form");
        assert_eq!(lead.focus_selector(), Some("#company"));
        assert_eq!(ScrollTarget::CaseForm.focus_selector(), Some("#caseCompany"));
        assert_eq!(ScrollTarget::Section("faq").focus_selector(), None);
    }

    #[test]
    fn never_scrolls_above_the_page() {
        assert_eq!(target_scroll_top(0.0, 20.0, 64.0), 0.0);
    }
}
