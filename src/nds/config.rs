//! Sort configuration.
//!
//! [`SortConfig`] selects the output shape of [`sort`](super::sort).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a non-dominated sort.
///
/// # Defaults
///
/// ```
/// use u_ndsort::nds::SortConfig;
///
/// let config = SortConfig::default();
/// assert!(!config.indices_only);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_ndsort::nds::SortConfig;
///
/// let config = SortConfig::default().with_indices_only(true);
/// assert_eq!(config, SortConfig::indices());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortConfig {
    /// Return one front index per decision instead of grouped decisions.
    ///
    /// `false` (the default) yields [`SortOutput::Fronts`](super::SortOutput::Fronts);
    /// `true` yields [`SortOutput::Indices`](super::SortOutput::Indices).
    pub indices_only: bool,
}

impl SortConfig {
    /// Sets whether only front indices are returned.
    pub fn with_indices_only(mut self, indices_only: bool) -> Self {
        self.indices_only = indices_only;
        self
    }

    /// Preset returning decisions grouped by front.
    pub fn fronts() -> Self {
        Self::default()
    }

    /// Preset returning the front index of every decision.
    pub fn indices() -> Self {
        Self { indices_only: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!SortConfig::fronts().indices_only);
        assert!(SortConfig::indices().indices_only);
        assert_eq!(
            SortConfig::indices().with_indices_only(false),
            SortConfig::fronts()
        );
    }
}
