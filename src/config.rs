// src/config.rs

use serde::{Deserialize, Serialize};

/// Module-wide knobs. Embedders can deserialize a partial JSON blob;
/// missing fields take the defaults below. Nothing here is persisted by
/// the crate itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ModuleConfig {
    /// When true, unknown element symbols surface as explicit errors.
    /// When false, lookups keep the legacy behavior of substituting
    /// Hydrogen (logged, never silent).
    pub strict_lookup: bool,

    /// Delay between a correct configuration check and the section-complete
    /// signal.
    pub completion_delay_ms: u64,

    /// Delay between submitting a quiz answer and advancing to the next
    /// question, and between passing the quiz and the section-complete
    /// signal.
    pub quiz_advance_delay_ms: u64,

    /// Correct answers (out of five) needed to pass the quiz.
    pub quiz_pass_score: u32,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            strict_lookup: true,
            completion_delay_ms: 1500,
            quiz_advance_delay_ms: 2000,
            quiz_pass_score: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ModuleConfig::default();
        assert!(cfg.strict_lookup);
        assert_eq!(cfg.completion_delay_ms, 1500);
        assert_eq!(cfg.quiz_advance_delay_ms, 2000);
        assert_eq!(cfg.quiz_pass_score, 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: ModuleConfig = serde_json::from_str(r#"{"quiz_pass_score": 4}"#).unwrap();
        assert_eq!(cfg.quiz_pass_score, 4);
        assert_eq!(cfg.completion_delay_ms, 1500);
        assert!(cfg.strict_lookup);
    }
}
