use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::format::{group_digits, DEFAULT_SEPARATOR};

/// Consultation path offered to a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Managed-service optimization.
    #[default]
    Agency,
    /// Self-serve platform demo.
    Solution,
}

impl Track {
    pub fn as_str(self) -> &'static str {
        match self {
            Track::Agency => "agency",
            Track::Solution => "solution",
        }
    }

    pub fn cta_label(self) -> &'static str {
        match self {
            Track::Agency => "대행 상담하러가기",
            Track::Solution => "솔루션 상담하러가기",
        }
    }

    pub fn selected_toast(self) -> &'static str {
        match self {
            Track::Agency => "대행 상담으로 설정했어요.",
            Track::Solution => "솔루션 데모로 설정했어요.",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown track: {0}")]
pub struct UnknownTrack(pub String);

impl FromStr for Track {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agency" => Ok(Track::Agency),
            "solution" => Ok(Track::Solution),
            other => Err(UnknownTrack(other.to_string())),
        }
    }
}

/// Visitor's own answer to "is your operation complex?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Yes,
    No,
}

/// How a declared complexity feeds into the track decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexityPolicy {
    /// `Complexity::Yes` always lands on the solution track.
    #[default]
    Override,
    /// Only the CPA decides.
    Ignore,
}

/// Input errors. The display text is what the visitor sees in the toast.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("값을 입력해주세요.")]
    MissingInput,
    #[error("개인정보 처리 동의가 필요해요.")]
    ConsentRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub cpa: u64,
    pub track: Track,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationEngine {
    threshold: u64,
    policy: ComplexityPolicy,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(config::CPA_RECOMMEND_THRESHOLD, config::recommendation_policy())
    }
}

impl RecommendationEngine {
    pub fn new(threshold: u64, policy: ComplexityPolicy) -> Self {
        Self { threshold, policy }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Zero stands for an empty field, so either amount being zero is
    /// reported as missing input.
    pub fn recommend(
        &self,
        ad_cost: u64,
        contracts: u64,
        complexity: Option<Complexity>,
    ) -> Result<Recommendation, ValidationError> {
        if ad_cost == 0 || contracts == 0 {
            return Err(ValidationError::MissingInput);
        }

        let cpa = rounded_div(ad_cost, contracts);
        let over_threshold = cpa >= self.threshold;
        let forced = self.policy == ComplexityPolicy::Override && complexity == Some(Complexity::Yes);

        let track = if over_threshold || forced {
            Track::Solution
        } else {
            Track::Agency
        };

        let advice = if forced && !over_threshold {
            "운영 구조가 복잡하다고 하셨어요. 솔루션 데모로 자동화 가능한 구간을 먼저 확인해보세요."
        } else if track == Track::Solution {
            "현재 값이 높아 보입니다. 솔루션 데모로 구조 개선 포인트를 빠르게 확인해보세요."
        } else {
            "현재 값 기준으로 대행 최적화 여지가 있습니다. 무료 진단으로 개선 우선순위를 받아보세요."
        };

        let message = format!(
            "계약 CPA는 ₩ {} 입니다. {}",
            group_digits(cpa, DEFAULT_SEPARATOR),
            advice
        );

        Ok(Recommendation { cpa, track, message })
    }
}

// round half away from zero; both operands are positive
fn rounded_div(numerator: u64, denominator: u64) -> u64 {
    let n = numerator as u128;
    let d = denominator as u128;
    ((n + d / 2) / d) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(300_000, ComplexityPolicy::Override)
    }

    #[test]
    fn cpa_rounds_half_up() {
        assert_eq!(rounded_div(5, 2), 3);
        assert_eq!(rounded_div(3, 2), 2);
        assert_eq!(rounded_div(7, 3), 2);
        assert_eq!(rounded_div(8, 3), 3);
        assert_eq!(rounded_div(u64::MAX, 1), u64::MAX);
    }

    #[test]
    fn threshold_is_inclusive() {
        for contracts in [1, 3, 10, 250] {
            let at = engine().recommend(300_000 * contracts, contracts, None).unwrap();
            assert_eq!(at.track, Track::Solution, "contracts={contracts}");

            let below = engine()
                .recommend(300_000 * contracts - 1, contracts, Some(Complexity::No))
                .unwrap();
            assert_eq!(below.track, Track::Agency, "contracts={contracts}");
        }
    }

    #[test]
    fn reference_example() {
        let rec = engine().recommend(3_000_000, 10, None).unwrap();
        assert_eq!(rec.cpa, 300_000);
        assert_eq!(rec.track, Track::Solution);
        assert!(rec.message.starts_with("계약 CPA는 ₩ 300,000 입니다."));
    }

    #[test]
    fn agency_message_for_low_cpa() {
        let rec = engine().recommend(1_500_000, 10, None).unwrap();
        assert_eq!(rec.cpa, 150_000);
        assert_eq!(rec.track, Track::Agency);
        assert!(rec.message.contains("대행 최적화"));
    }

    #[test]
    fn complexity_forces_solution() {
        let rec = engine().recommend(1, 1_000_000, Some(Complexity::Yes)).unwrap();
        assert_eq!(rec.cpa, 0);
        assert_eq!(rec.track, Track::Solution);
        assert!(rec.message.contains("복잡"));
    }

    #[test]
    fn ignore_policy_drops_complexity() {
        let engine = RecommendationEngine::new(300_000, ComplexityPolicy::Ignore);
        let rec = engine.recommend(1, 1_000_000, Some(Complexity::Yes)).unwrap();
        assert_eq!(rec.track, Track::Agency);
    }

    #[test]
    fn zero_amounts_are_missing_input() {
        assert_eq!(engine().recommend(0, 5, None), Err(ValidationError::MissingInput));
        assert_eq!(engine().recommend(100, 0, None), Err(ValidationError::MissingInput));
        assert_eq!(
            engine().recommend(0, 0, Some(Complexity::Yes)),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn track_round_trips_through_text() {
        assert_eq!("agency".parse::<Track>(), Ok(Track::Agency));
        assert_eq!("solution".parse::<Track>(), Ok(Track::Solution));
        assert!("Agency".parse::<Track>().is_err());
        assert_eq!(serde_json::to_string(&Track::Solution).unwrap(), "\"solution\"");
    }

    #[test]
    fn default_engine_follows_config() {
        let engine = RecommendationEngine::default();
        assert_eq!(engine.threshold(), config::CPA_RECOMMEND_THRESHOLD);

        let rec = engine.recommend(1, 1_000_000, Some(Complexity::Yes)).unwrap();
        let expected = match config::recommendation_policy() {
            ComplexityPolicy::Override => Track::Solution,
            ComplexityPolicy::Ignore => Track::Agency,
        };
        assert_eq!(rec.track, expected);
    }
}
