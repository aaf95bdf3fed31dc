//! Tunable parameters for the reference matching engine

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Fuzzy matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum quality a candidate needs to appear in the ranking
    pub pass_threshold: f64,
    /// Minimum Jaro-Winkler similarity for two words to count as the same word
    pub token_similarity: f64,
    /// Weight of candidate author words the query did not mention
    pub author_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 0.5,
            token_similarity: 0.88,
            author_weight: 0.5,
        }
    }
}

impl MatchConfig {
    /// Check that every parameter is in range.
    ///
    /// Thresholds must lie in `(0, 1]`, the author weight in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_threshold("pass_threshold", self.pass_threshold)?;
        check_threshold("token_similarity", self.token_similarity)?;
        if !(0.0..=1.0).contains(&self.author_weight) {
            return Err(CoreError::InvalidConfig(format!(
                "author_weight must be within [0, 1], got {}",
                self.author_weight
            )));
        }
        Ok(())
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig(format!(
            "{} must be within (0, 1], got {}",
            name, value
        )))
    }
}
