//! Generation options and their loading from config files / environment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "config-rs")]
use crate::error::MockError;

/// Default limit on embedded / array sub-schema nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What to produce for a field no generator covers (`Mixed` and unknown
/// types without a name heuristic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// A short random text sample.
    #[default]
    Sample,
    /// An explicit `null`.
    Null,
}

/// Options for one generation call.
///
/// All fields have defaults, so partial config sources are fine.
///
/// # Example
/// ```
/// use docmock_fake::{FallbackPolicy, MockOptions};
///
/// let opts = MockOptions::default().required_only(true).seed(7);
/// assert!(opts.required_only);
/// assert_eq!(opts.fallback, FallbackPolicy::Sample);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockOptions {
    /// Only generate fields declared `required`, in every sub-schema.
    pub required_only: bool,
    pub fallback: FallbackPolicy,
    pub max_depth: usize,
    /// Seed for reproducible output; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Instant that default dates count back from; `None` reads the clock
    /// once per generated document. Pin it together with `seed` when dates
    /// must be reproducible too.
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            required_only: false,
            fallback: FallbackPolicy::Sample,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
            reference_time: None,
        }
    }
}

impl MockOptions {
    pub fn required_only(mut self, yes: bool) -> Self {
        self.required_only = yes;
        self
    }

    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn reference_time(mut self, at: DateTime<Utc>) -> Self {
        self.reference_time = Some(at);
        self
    }
}

#[cfg(feature = "config-rs")]
impl MockOptions {
    /// Prefix of environment variables read by [`MockOptions::load`] and
    /// [`MockOptions::from_env`] (`DOCMOCK_REQUIRED_ONLY=true`, ...).
    pub const ENV_PREFIX: &'static str = "DOCMOCK";

    /// Deserialize options from a built [`config::Config`].
    pub fn from_config(config: &config::Config) -> Result<Self, MockError> {
        config
            .clone()
            .try_deserialize()
            .map_err(|e| MockError::Config(e.to_string()))
    }

    /// Load options from a TOML / JSON / YAML file, overridden by
    /// `DOCMOCK_*` environment variables.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, MockError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX))
            .build()
            .map_err(|e| MockError::Config(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Load options from `DOCMOCK_*` environment variables only.
    pub fn from_env() -> Result<Self, MockError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX))
            .build()
            .map_err(|e| MockError::Config(e.to_string()))?;
        Self::from_config(&config)
    }
}
