//! Evolution loop configuration.

/// Parameters controlling [`Engine::evolve`](super::Engine::evolve).
///
/// # Defaults
///
/// ```
/// use evofront::evo::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.prune_interval, 100);
/// assert_eq!(config.time_limit_ms, 300_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evofront::evo::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_time_limit_secs(30)
///     .with_prune_interval(50)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Every `prune_interval`-th iteration (including iteration 0) the
    /// population is collapsed to its non-dominated frontier. Pruning also
    /// always runs once more after the loop exits.
    pub prune_interval: usize,

    /// Wall-clock budget in milliseconds.
    ///
    /// The deadline is polled at the top of each iteration; an iteration
    /// in progress when the budget is crossed completes normally. A zero
    /// budget skips the loop entirely and performs only the final pruning.
    pub time_limit_ms: u64,

    /// Random seed for reproducible agent selection and sampling.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            prune_interval: 100,
            time_limit_ms: 300_000,
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the pruning interval.
    pub fn with_prune_interval(mut self, interval: usize) -> Self {
        self.prune_interval = interval;
        self
    }

    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the wall-clock budget in seconds — the engine's natural
    /// invocation surface.
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_ms = secs * 1000;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.prune_interval == 0 {
            return Err("prune_interval must be at least 1".into());
        }
        Ok(())
    }
}
