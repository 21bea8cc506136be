//! Host-settable grid configuration.

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::error::ConfigError;

/// Column count used when no breakpoint applies.
pub const DEFAULT_COLUMNS: usize = 12;
/// Gap between adjacent columns and rows.
pub const DEFAULT_SPACING: f64 = 8.0;

/// Configuration of a responsive grid: a default column count, the spacing
/// between cells, and the breakpoints that override the column count by
/// container width.
///
/// Values are stored as given. The accessors clamp them into range, so a
/// configuration is always usable even when [`validate`](GridConfig::validate)
/// would reject it.
///
/// ```rust
/// use floem_grid::GridConfig;
///
/// let config = GridConfig::new()
///     .with_columns(4)
///     .with_spacing(16.0)
///     .with_breakpoint(0.0, 1)
///     .with_breakpoint(600.0, 2)
///     .with_breakpoint(900.0, 4);
/// assert_eq!(config.breakpoints().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    columns: usize,
    spacing: f64,
    breakpoints: BreakpointTable,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            spacing: DEFAULT_SPACING,
            breakpoints: BreakpointTable::new(),
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use floem_grid::GridConfig;
    ///
    /// let config = GridConfig::from_json(
    ///     r#"{ "columns": 6, "breakpoints": [{ "width": 0, "columns": 2 }] }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.column_count(), 6);
    /// assert_eq!(config.spacing(), 8.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_breakpoint(mut self, width: f64, columns: usize) -> Self {
        self.breakpoints.push(Breakpoint::new(width, columns));
        self
    }

    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// The default column count, at least one.
    pub fn column_count(&self) -> usize {
        self.columns.max(1)
    }

    /// The spacing, with negative and non-finite values read as zero.
    pub fn spacing(&self) -> f64 {
        if self.spacing.is_finite() && self.spacing > 0.0 {
            self.spacing
        } else {
            0.0
        }
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// The column count for a container of `width`.
    pub fn resolve_column_count(&self, width: f64) -> usize {
        self.breakpoints
            .resolve_column_count(width, self.column_count())
    }

    /// Checks the stored values without clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if !self.spacing.is_finite() {
            return Err(ConfigError::NonFiniteSpacing(self.spacing));
        }
        if self.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        if let Some((index, bp)) = self
            .breakpoints
            .iter()
            .enumerate()
            .find(|(_, bp)| !bp.is_valid())
        {
            return Err(ConfigError::InvalidBreakpoint {
                index,
                width: bp.width(),
                columns: bp.columns(),
            });
        }
        Ok(())
    }
}
