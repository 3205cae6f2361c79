//! Execution settings for tour construction.

use serde::{Deserialize, Serialize};

/// Controls how the per-start constructions are executed.
///
/// The result never depends on these settings; only the scheduling does.
///
/// # Examples
///
/// ```
/// use u_tour::TourConfig;
///
/// let config = TourConfig::default().with_parallel(true).with_num_threads(4);
/// assert!(config.parallel);
/// assert_eq!(config.num_threads, Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Run starting vertices in parallel (requires the `parallel` feature).
    pub parallel: bool,
    /// Worker threads for a dedicated pool; `None` uses the global pool.
    pub num_threads: Option<usize>,
}

impl TourConfig {
    /// Sets parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the number of worker threads. Zero means "use the global pool".
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = (num_threads > 0).then_some(num_threads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        let c = TourConfig::default();
        assert!(!c.parallel);
        assert_eq!(c.num_threads, None);
    }

    #[test]
    fn test_zero_threads_clears() {
        let c = TourConfig::default().with_num_threads(3).with_num_threads(0);
        assert_eq!(c.num_threads, None);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let c: TourConfig = serde_json::from_str(r#"{"parallel": true}"#).expect("valid");
        assert_eq!(c, TourConfig::default().with_parallel(true));
    }
}
