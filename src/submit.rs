use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::recommend::{Track, ValidationError};

pub const FAILURE_TOAST: &str = "오류가 발생했어요. 잠시 후 다시 시도해주세요.";
pub const LEAD_SUCCESS_TOAST: &str = "신청이 접수됐어요. 곧 연락드릴게요!";
pub const CASE_SUCCESS_TOAST: &str = "사례 리포트를 이메일로 보내드릴게요.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRequest {
    pub company: String,
    pub name: String,
    pub contact: String,
    pub monthly_ad_cost: u64,
    pub lead_type: Track,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRequest {
    pub company: String,
    pub email: String,
    pub industry: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Simulated,
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Waits `delay_ms` and reports success.
    Simulated { delay_ms: u32 },
    /// JSON POST to `endpoint`.
    Http { endpoint: String },
}

impl Transport {
    pub fn new(mode: TransportMode, delay_ms: u32, endpoint: impl FnOnce() -> String) -> Self {
        match mode {
            TransportMode::Simulated => Transport::Simulated { delay_ms },
            TransportMode::Http => Transport::Http { endpoint: endpoint() },
        }
    }

    pub fn for_leads() -> Self {
        Self::new(config::transport_mode(), config::LEAD_FORM_DELAY_MS, config::leads_endpoint)
    }

    pub fn for_case_requests() -> Self {
        Self::new(
            config::transport_mode(),
            config::CASE_FORM_DELAY_MS,
            config::case_requests_endpoint,
        )
    }

    pub async fn send<T: Serialize>(&self, payload: &T) -> Result<(), TransportError> {
        match self {
            Transport::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            Transport::Http { endpoint } => {
                let response = Request::post(endpoint)
                    .header("Content-Type", "application/json")
                    .json(payload)?
                    .send()
                    .await?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(TransportError::Status(response.status()))
                }
            }
        }
    }
}

/// Submission state of one form.
///
/// `loading` is set by [`FormState::begin`] and cleared by every call to
/// [`FormState::finish`], whatever the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub loading: bool,
    pub succeeded: bool,
}

impl FormState {
    pub fn begin(&mut self, agreed: bool) -> Result<(), ValidationError> {
        if !agreed {
            return Err(ValidationError::ConsentRequired);
        }
        self.loading = true;
        self.succeeded = false;
        Ok(())
    }

    pub fn finish(&mut self, result: &Result<(), TransportError>) {
        self.loading = false;
        self.succeeded = result.is_ok();
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

pub fn outcome_toast(result: &Result<(), TransportError>, success: &str) -> String {
    match result {
        Ok(()) => success.to_string(),
        Err(_) => FAILURE_TOAST.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_consent_blocks_submit() {
        let mut state = FormState::default();
        assert_eq!(state.begin(false), Err(ValidationError::ConsentRequired));
        assert!(!state.loading);
        assert_eq!(
            ValidationError::ConsentRequired.to_string(),
            "개인정보 처리 동의가 필요해요."
        );
    }

    #[test]
    fn success_clears_loading_and_shows_panel() {
        let mut state = FormState::default();
        state.begin(true).unwrap();
        assert!(state.loading);

        let result = Ok(());
        state.finish(&result);
        assert_eq!(state, FormState { loading: false, succeeded: true });
        assert_eq!(outcome_toast(&result, LEAD_SUCCESS_TOAST), LEAD_SUCCESS_TOAST);
    }

    #[test]
    fn failure_clears_loading_without_panel() {
        let mut state = FormState::default();
        state.begin(true).unwrap();

        let result = Err(TransportError::Status(503));
        state.finish(&result);
        assert_eq!(state, FormState { loading: false, succeeded: false });
        assert_eq!(outcome_toast(&result, CASE_SUCCESS_TOAST), FAILURE_TOAST);
    }

    #[test]
    fn resubmitting_hides_previous_success() {
        let mut state = FormState { loading: false, succeeded: true };
        state.begin(true).unwrap();
        assert!(!state.succeeded);

        state.finish(&Ok(()));
        state.reset();
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn form_transports_follow_configured_mode() {
        match config::transport_mode() {
            TransportMode::Simulated => {
                assert_eq!(Transport::for_leads(), Transport::Simulated { delay_ms: 900 });
                assert_eq!(Transport::for_case_requests(), Transport::Simulated { delay_ms: 700 });
            }
            TransportMode::Http => {
                assert_eq!(
                    Transport::for_leads(),
                    Transport::Http { endpoint: config::leads_endpoint() }
                );
                assert_eq!(
                    Transport::for_case_requests(),
                    Transport::Http { endpoint: config::case_requests_endpoint() }
                );
            }
        }
    }

    #[test]
    fn http_mode_posts_to_backend_endpoints() {
        let leads = Transport::new(TransportMode::Http, 900, config::leads_endpoint);
        let Transport::Http { endpoint } = leads else {
            panic!("expected http transport, got {leads:?}");
        };
        assert_eq!(endpoint, format!("{}/api/leads", config::get_backend_url()));

        let cases = Transport::new(TransportMode::Http, 700, config::case_requests_endpoint);
        assert_eq!(
            cases,
            Transport::Http { endpoint: format!("{}/api/case-requests", config::get_backend_url()) }
        );
    }

    #[test]
    fn simulated_mode_never_builds_an_endpoint() {
        let transport = Transport::new(TransportMode::Simulated, 700, || {
            panic!("endpoint must not be resolved for simulated sends")
        });
        assert_eq!(transport, Transport::Simulated { delay_ms: 700 });
    }

    #[test]
    fn lead_payload_shape() {
        let lead = LeadRequest {
            company: "에이컴퍼니".into(),
            name: "김담당".into(),
            contact: "010-0000-0000".into(),
            monthly_ad_cost: 12_000_000,
            lead_type: Track::Solution,
        };
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["lead_type"], "solution");
        assert_eq!(value["monthly_ad_cost"], 12_000_000);
    }
}
