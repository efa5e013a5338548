//! Session Config - comparison direction, success criterion and trial bound

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which end of the value scale counts as "better".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonDirection {
    /// Lower is better (reaction times, sprint and agility times).
    Minimize,
    /// Higher is better (force, jump height, distance).
    Maximize,
}

impl ComparisonDirection {
    /// Whether `candidate` is strictly better than `incumbent`.
    ///
    /// Strictness keeps the earliest record on ties.
    #[must_use]
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }

    /// The opposite direction (used to select the worst record).
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Minimize => Self::Maximize,
            Self::Maximize => Self::Minimize,
        }
    }
}

/// Comparison applied against a success threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdDirection {
    /// Success when `value < threshold`.
    LessThan,
    /// Success when `value > threshold`.
    GreaterThan,
}

/// Pass/fail rule for individual trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessCriterion {
    threshold: f64,
    direction: ThresholdDirection,
}

impl SuccessCriterion {
    /// Create a criterion; both parts are required together.
    #[must_use]
    pub const fn new(threshold: f64, direction: ThresholdDirection) -> Self {
        Self {
            threshold,
            direction,
        }
    }

    /// Threshold value.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Threshold comparison.
    #[must_use]
    pub const fn direction(&self) -> ThresholdDirection {
        self.direction
    }

    /// Whether `value` satisfies the criterion.
    #[must_use]
    pub fn is_met(&self, value: f64) -> bool {
        match self.direction {
            ThresholdDirection::LessThan => value < self.threshold,
            ThresholdDirection::GreaterThan => value > self.threshold,
        }
    }
}

/// Configuration fixed at session creation.
///
/// ## JSON form
///
/// ```rust
/// use fitness_trials::session::{ComparisonDirection, SessionConfig};
///
/// let config = SessionConfig::from_json(
///     r#"{
///         "direction": "minimize",
///         "success": { "threshold": 1000.0, "direction": "less_than" },
///         "max_trials": 10,
///         "unit": "ms"
///     }"#,
/// )?;
/// assert_eq!(config.direction(), ComparisonDirection::Minimize);
/// assert_eq!(config.max_trials(), Some(10));
/// # Ok::<(), fitness_trials::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    direction: ComparisonDirection,
    #[serde(default)]
    success: Option<SuccessCriterion>,
    #[serde(default)]
    max_trials: Option<usize>,
    #[serde(default)]
    unit: Option<String>,
}

impl SessionConfig {
    /// Create a config with only a comparison direction.
    #[must_use]
    pub const fn new(direction: ComparisonDirection) -> Self {
        Self {
            direction,
            success: None,
            max_trials: None,
            unit: None,
        }
    }

    pub(crate) const fn from_parts(
        direction: ComparisonDirection,
        success: Option<SuccessCriterion>,
        max_trials: Option<usize>,
        unit: Option<String>,
    ) -> Self {
        Self {
            direction,
            success,
            max_trials,
            unit,
        }
    }

    /// Create a builder for a config with optional fields.
    #[must_use]
    pub const fn builder(direction: ComparisonDirection) -> SessionConfigBuilder {
        SessionConfigBuilder::new(direction)
    }

    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed documents and
    /// [`Error::InvalidInput`] for documents that fail [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Comparison direction for best/worst.
    #[must_use]
    pub const fn direction(&self) -> ComparisonDirection {
        self.direction
    }

    /// Success criterion, if configured.
    #[must_use]
    pub const fn success(&self) -> Option<&SuccessCriterion> {
        self.success.as_ref()
    }

    /// Maximum number of trials, if bounded.
    #[must_use]
    pub const fn max_trials(&self) -> Option<usize> {
        self.max_trials
    }

    /// Unit label for values, if set.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Check the config for values no session could use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the success threshold is not finite
    /// or `max_trials` is zero.
    pub fn validate(&self) -> Result<()> {
        if let Some(success) = &self.success {
            if !success.threshold().is_finite() {
                return Err(Error::InvalidInput(format!(
                    "success threshold must be finite, got {}",
                    success.threshold()
                )));
            }
        }
        if self.max_trials == Some(0) {
            return Err(Error::InvalidInput(
                "max_trials must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for `SessionConfig`.
#[derive(Debug)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Create a new builder with the required direction.
    #[must_use]
    pub const fn new(direction: ComparisonDirection) -> Self {
        Self {
            config: SessionConfig::new(direction),
        }
    }

    /// Set the success criterion.
    #[must_use]
    pub fn success(mut self, threshold: f64, direction: ThresholdDirection) -> Self {
        self.config.success = Some(SuccessCriterion::new(threshold, direction));
        self
    }

    /// Bound the session to at most `max_trials` trials.
    #[must_use]
    pub fn max_trials(mut self, max_trials: usize) -> Self {
        self.config.max_trials = Some(max_trials);
        self
    }

    /// Set the unit label.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.config.unit = Some(unit.into());
        self
    }

    /// Validate and build the `SessionConfig`.
    ///
    /// # Errors
    ///
    /// See [`SessionConfig::validate`].
    pub fn build(self) -> Result<SessionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
