use thiserror::Error;

use crate::layout::ChangeFlags;

/// Problems reported by strict configuration checks and config loading.
///
/// Layout never fails on bad configuration; it clamps. These errors are for
/// hosts that would rather reject a configuration up front.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("spacing must not be negative, got {0}")]
    NegativeSpacing(f64),
    #[error("spacing must be finite, got {0}")]
    NonFiniteSpacing(f64),
    #[error("breakpoint {index} is invalid: width {width}, columns {columns}")]
    InvalidBreakpoint {
        index: usize,
        width: f64,
        columns: usize,
    },
    #[cfg(feature = "serde")]
    #[error("failed to parse grid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why the inputs cached by the last measure pass can no longer be used to
/// arrange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesyncError {
    #[error("grid has not been measured")]
    NotMeasured,
    #[error("layout was invalidated after measuring ({0:?})")]
    Invalidated(ChangeFlags),
    #[error("child count changed from {measured} to {current}")]
    ChildCount { measured: usize, current: usize },
    #[error("span of child {index} changed from {measured} to {current}")]
    Span {
        index: usize,
        measured: usize,
        current: usize,
    },
}
