use crate::recommend::ComplexityPolicy;
use crate::submit::TransportMode;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Contract CPA (KRW) at which the calculator recommends the solution demo.
pub const CPA_RECOMMEND_THRESHOLD: u64 = 300_000;

pub const LEAD_TYPE_STORAGE_KEY: &str = "lead_type_preference";

pub const LEAD_FORM_DELAY_MS: u32 = 900;
pub const CASE_FORM_DELAY_MS: u32 = 700;

pub const TOAST_DURATION_MS: u32 = 2200;

// extra gap kept between the sticky header and a scrolled-to section
pub const SCROLL_HEADER_GAP: f64 = 12.0;
pub const SCROLL_FOCUS_DELAY_MS: u32 = 520;
pub const HEADER_ELEVATE_AFTER: f64 = 6.0;

/// Build with `--features cost-only-recommendation` to let only the CPA pick
/// the track.
pub fn recommendation_policy() -> ComplexityPolicy {
    if cfg!(feature = "cost-only-recommendation") {
        ComplexityPolicy::Ignore
    } else {
        ComplexityPolicy::Override
    }
}

/// Forms only simulate a submission unless built with `--features http-transport`.
pub fn transport_mode() -> TransportMode {
    if cfg!(feature = "http-transport") {
        TransportMode::Http
    } else {
        TransportMode::Simulated
    }
}

pub fn leads_endpoint() -> String {
    format!("{}/api/leads", get_backend_url())
}

pub fn case_requests_endpoint() -> String {
    format!("{}/api/case-requests", get_backend_url())
}
