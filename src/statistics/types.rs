//----------------------------------------
// statistics mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Outcome of a one-sided z-test of distribution 2 against distribution 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub z_score: f64,
    /// Survival probability of `z_score` under the standard normal.
    pub p_value: f64,
    /// Cumulative probability up to `z_score`; display only.
    pub confidence: f64,
}

impl TestResult {
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }

    pub fn verdict(&self, alpha: f64) -> Verdict {
        if self.is_significant(alpha) {
            Verdict::Significant
        } else {
            Verdict::NotSignificant
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Significant,
    NotSignificant,
}
