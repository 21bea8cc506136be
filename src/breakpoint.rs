//! Width-keyed breakpoints that select how many columns a grid uses.
//!
//! Breakpoints follow floor semantics: a breakpoint applies from its width
//! threshold and up. A [`BreakpointTable`] is scanned in order and the last
//! entry whose threshold is at or below the container width wins. When no
//! entry matches, the first entry is used, so a table that should cover
//! every width conventionally starts with a breakpoint at width `0`.

/// A single `(width threshold, column count)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    width: f64,
    columns: usize,
}

impl Breakpoint {
    pub const fn new(width: f64, columns: usize) -> Self {
        Self { width, columns }
    }

    /// The container width from which this breakpoint applies.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The requested column count. May be `0` if constructed that way; the
    /// resolved count is always clamped to at least one.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width >= 0.0 && self.columns >= 1
    }
}

impl From<(f64, usize)> for Breakpoint {
    fn from((width, columns): (f64, usize)) -> Self {
        Self::new(width, columns)
    }
}

/// An ordered list of [`Breakpoint`]s.
///
/// Order matters only for the resolution scan: thresholds do not have to be
/// sorted, and an equal threshold appearing later overrides an earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a table from the common screen-size widths, one column count
    /// per [`ScreenSize`] from `Xs` to `Xxl`.
    ///
    /// ```rust
    /// use floem_grid::BreakpointTable;
    ///
    /// let table = BreakpointTable::screen_sizes([1, 2, 4, 6, 12, 12]);
    /// assert_eq!(table.resolve_column_count(800.0, 12), 4);
    /// ```
    pub fn screen_sizes(columns: [usize; 6]) -> Self {
        ScreenSize::ALL
            .iter()
            .zip(columns)
            .map(|(size, columns)| Breakpoint::new(size.min_width(), columns))
            .collect()
    }

    #[must_use]
    pub fn with(mut self, width: f64, columns: usize) -> Self {
        self.push(Breakpoint::new(width, columns));
        self
    }

    pub fn push(&mut self, breakpoint: Breakpoint) {
        self.entries.push(breakpoint);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.entries.iter()
    }

    /// Returns the breakpoint that applies to `width`, or `None` if the table
    /// is empty.
    ///
    /// The first entry is the starting candidate; every later entry whose
    /// threshold is `<= width` replaces it, without requiring a larger
    /// threshold than the current choice.
    pub fn active(&self, width: f64) -> Option<&Breakpoint> {
        let first = self.entries.first()?;
        Some(self.entries.iter().fold(first, |active, candidate| {
            if width >= candidate.width {
                candidate
            } else {
                active
            }
        }))
    }

    /// Resolves the column count for a container `width`.
    ///
    /// An empty table yields `default_columns`. Either way the result is never
    /// below one.
    pub fn resolve_column_count(&self, width: f64, default_columns: usize) -> usize {
        self.active(width)
            .map_or(default_columns, Breakpoint::columns)
            .max(1)
    }
}

impl FromIterator<Breakpoint> for BreakpointTable {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BreakpointTable {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Named screen-size classes, in pixels.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum ScreenSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ScreenSize {
    pub const ALL: [ScreenSize; 6] = [
        ScreenSize::Xs,
        ScreenSize::Sm,
        ScreenSize::Md,
        ScreenSize::Lg,
        ScreenSize::Xl,
        ScreenSize::Xxl,
    ];

    /// The width from which this class applies.
    pub const fn min_width(self) -> f64 {
        match self {
            ScreenSize::Xs => 0.0,
            ScreenSize::Sm => 576.0,
            ScreenSize::Md => 768.0,
            ScreenSize::Lg => 992.0,
            ScreenSize::Xl => 1200.0,
            ScreenSize::Xxl => 1400.0,
        }
    }

    /// The class a `width` falls into. Widths below zero (and NaN) are `Xs`.
    pub fn from_width(width: f64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|size| width >= size.min_width())
            .unwrap_or(ScreenSize::Xs)
    }
}
