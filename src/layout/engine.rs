use bitflags::bitflags;
use peniko::kurbo::{Point, Rect, Size};
use tracing::{debug, trace, warn};

use super::columns::ColumnMetrics;
use super::pack::{Cell, PackItem, Packing, pack};
use crate::breakpoint::BreakpointTable;
use crate::child::{GridChild, sanitize_desired};
use crate::config::GridConfig;
use crate::error::DesyncError;
use crate::span::effective_span;

bitflags! {
    /// Reasons the next layout pass has to re-measure.
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    #[must_use]
    pub struct ChangeFlags: u8 {
        const CONFIG = 1;
        /// The resolved column count moved to a different breakpoint.
        const COLUMNS = 1 << 1;
        const CHILDREN = 1 << 2;
        const SIZE = 1 << 3;
    }
}

/// Where the engine is in its measure/arrange cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutPhase {
    #[default]
    Idle,
    Measuring,
    Measured,
    Arranging,
    Arranged,
}

/// Per-child record produced by the measure pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutItem {
    /// Position of the child in the slice passed to `measure`.
    pub index: usize,
    pub span: usize,
    /// The size the child asked for, after clamping.
    pub desired: Size,
    pub cell: Cell,
}

/// A responsive column grid.
///
/// Call [`measure`](GridLayout::measure) with the space the host offers, then
/// [`arrange`](GridLayout::arrange) with the size the host settled on. The
/// measure pass caches each child's span and desired height, and arrange packs
/// that cached list again, so both passes always agree on rows and columns.
///
/// ```rust
/// use floem_grid::kurbo::{Rect, Size};
/// use floem_grid::{GridChild, GridConfig, GridLayout};
///
/// struct Tile(f64, Rect);
///
/// impl GridChild for Tile {
///     fn measure(&mut self, constraint: Size) -> Size {
///         Size::new(constraint.width, self.0)
///     }
///     fn arrange(&mut self, rect: Rect) {
///         self.1 = rect;
///     }
/// }
///
/// let mut grid = GridLayout::new(GridConfig::new().with_columns(2).with_spacing(10.0));
/// let mut tiles = vec![Tile(20.0, Rect::ZERO), Tile(30.0, Rect::ZERO), Tile(5.0, Rect::ZERO)];
///
/// let desired = grid.measure(&mut tiles, Size::new(210.0, f64::INFINITY));
/// assert_eq!(desired, Size::new(210.0, 45.0));
///
/// grid.arrange(&mut tiles, desired);
/// assert_eq!(tiles[1].1, Rect::new(110.0, 0.0, 210.0, 30.0));
/// assert_eq!(tiles[2].1, Rect::new(0.0, 40.0, 100.0, 45.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridLayout {
    config: GridConfig,
    phase: LayoutPhase,
    dirty: ChangeFlags,
    active_columns: Option<usize>,
    metrics: Option<ColumnMetrics>,
    items: Vec<LayoutItem>,
    packing: Packing,
    desired: Size,
    placements: Vec<Rect>,
}

impl GridLayout {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// The column count resolved by the last measure pass.
    pub fn active_columns(&self) -> Option<usize> {
        self.active_columns
    }

    /// Column geometry from the last pass. Arrange replaces the measure-time
    /// metrics with ones derived from the final width.
    pub fn column_metrics(&self) -> Option<ColumnMetrics> {
        self.metrics
    }

    pub fn dirty(&self) -> ChangeFlags {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn packing(&self) -> &Packing {
        &self.packing
    }

    pub fn desired_size(&self) -> Size {
        self.desired
    }

    /// Rectangles handed to the children by the last arrange pass.
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }

    /// Marks the layout as needing a fresh measure pass.
    pub fn invalidate(&mut self, flags: ChangeFlags) {
        if flags.is_empty() {
            return;
        }
        self.dirty |= flags;
        self.phase = LayoutPhase::Idle;
    }

    /// Replaces the whole configuration. An identical configuration leaves
    /// the layout untouched.
    pub fn set_config(&mut self, config: GridConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate(ChangeFlags::CONFIG);
        }
    }

    pub fn set_column_count(&mut self, columns: usize) {
        self.set_config(self.config.clone().with_columns(columns));
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.set_config(self.config.clone().with_spacing(spacing));
    }

    pub fn set_breakpoints(&mut self, breakpoints: BreakpointTable) {
        self.set_config(self.config.clone().with_breakpoints(breakpoints));
    }

    /// Tells the grid its container is now `width` wide.
    ///
    /// Raises [`ChangeFlags::COLUMNS`] alongside [`ChangeFlags::SIZE`] when
    /// the new width resolves to a different column count than the last
    /// measure pass used.
    pub fn resize(&mut self, width: f64) {
        let columns = self.config.resolve_column_count(container_extent(width));
        let mut flags = ChangeFlags::SIZE;
        if self.active_columns.is_some_and(|active| active != columns) {
            debug!(previous = ?self.active_columns, columns, width, "grid breakpoint changed");
            flags |= ChangeFlags::COLUMNS;
        }
        self.invalidate(flags);
    }

    /// Measures every child and returns the size the grid wants.
    ///
    /// With a finite `available.width` the grid takes the full width and its
    /// height is the packed rows plus the gaps between them. With an
    /// unbounded width the children are measured unconstrained and the width
    /// is derived from the widest per-column demand.
    pub fn measure<C: GridChild>(&mut self, children: &mut [C], available: Size) -> Size {
        self.phase = LayoutPhase::Measuring;

        let width = container_extent(available.width);
        let height = if available.height.is_nan() {
            f64::INFINITY
        } else {
            available.height.max(0.0)
        };

        let columns = self.config.resolve_column_count(width);
        if self.active_columns.is_some_and(|previous| previous != columns) {
            debug!(previous = ?self.active_columns, columns, width, "grid column count changed");
        }
        self.active_columns = Some(columns);

        let spacing = self.config.spacing();
        let bounded = width
            .is_finite()
            .then(|| ColumnMetrics::new(width, columns, spacing));

        self.items.clear();
        for (index, child) in children.iter_mut().enumerate() {
            let span = effective_span(child.span(), columns);
            let constraint_width = bounded.map_or(f64::INFINITY, |m| m.span_width(span));
            let reported = child.measure(Size::new(constraint_width, height));
            let (desired, clamped) = sanitize_desired(reported);
            if clamped {
                debug!(index, ?reported, "clamped grid child size");
            }
            self.items.push(LayoutItem {
                index,
                span,
                desired,
                cell: Cell {
                    row: 0,
                    column: 0,
                    span,
                },
            });
        }

        let metrics = match bounded {
            Some(metrics) => metrics,
            None => ColumnMetrics::from_column_width(
                widest_column_demand(&self.items, spacing),
                columns,
                spacing,
            ),
        };

        let packing = pack(&self.pack_items(), columns);
        for (item, cell) in self.items.iter_mut().zip(packing.cells()) {
            item.cell = *cell;
        }

        self.desired = Size::new(metrics.total_width(), packing.total_height(spacing));
        debug!(
            children = self.items.len(),
            columns,
            rows = packing.row_count(),
            desired = ?self.desired,
            "measured grid"
        );

        self.packing = packing;
        self.metrics = Some(metrics);
        self.dirty = ChangeFlags::empty();
        self.phase = LayoutPhase::Measured;
        self.desired
    }

    /// Places every child inside `final_size`.
    ///
    /// Column width is recomputed from the final width. Rows come from the
    /// measure pass: if its cached inputs are missing or no longer match the
    /// children, the grid is measured again against `final_size` first.
    pub fn arrange<C: GridChild>(&mut self, children: &mut [C], final_size: Size) {
        if let Err(err) = self.check_arrange_inputs(children) {
            match err {
                DesyncError::NotMeasured | DesyncError::Invalidated(_) => {
                    debug!(%err, "measuring grid before arrange");
                }
                _ => warn!(%err, "grid children changed since measure, re-measuring"),
            }
            self.measure(children, final_size);
        }

        self.phase = LayoutPhase::Arranging;

        let columns = self
            .active_columns
            .unwrap_or_else(|| self.config.column_count());
        let spacing = self.config.spacing();
        let width = container_extent(final_size.width);
        let metrics = if width.is_finite() {
            ColumnMetrics::new(width, columns, spacing)
        } else {
            self.metrics
                .unwrap_or_else(|| ColumnMetrics::new(self.desired.width, columns, spacing))
        };

        let packing = pack(&self.pack_items(), columns);
        debug_assert_eq!(packing, self.packing, "arrange packing diverged from measure");
        let offsets = packing.row_offsets(spacing);

        self.placements.clear();
        for (child, item) in children.iter_mut().zip(&self.items) {
            let cell = packing.cells()[item.index];
            let row = &packing.rows()[cell.row];
            let rect = Rect::from_origin_size(
                Point::new(metrics.column_offset(cell.column), offsets[cell.row]),
                Size::new(metrics.span_width(cell.span), row.height),
            );
            trace!(
                index = item.index,
                row = cell.row,
                column = cell.column,
                ?rect,
                "arranged grid child"
            );
            child.arrange(rect);
            self.placements.push(rect);
        }

        debug!(
            children = self.placements.len(),
            column_width = metrics.column_width(),
            "arranged grid"
        );

        self.packing = packing;
        self.metrics = Some(metrics);
        self.phase = LayoutPhase::Arranged;
    }

    /// Checks that the inputs cached by the last measure still describe
    /// `children`.
    ///
    /// Desired sizes cannot be re-checked without measuring again, so only
    /// the child count and spans are compared.
    pub fn check_arrange_inputs<C: GridChild>(&self, children: &[C]) -> Result<(), DesyncError> {
        let Some(columns) = self.active_columns else {
            return Err(DesyncError::NotMeasured);
        };
        if !matches!(
            self.phase,
            LayoutPhase::Measured | LayoutPhase::Arranging | LayoutPhase::Arranged
        ) {
            return Err(if self.dirty.is_empty() {
                DesyncError::NotMeasured
            } else {
                DesyncError::Invalidated(self.dirty)
            });
        }
        if self.items.len() != children.len() {
            return Err(DesyncError::ChildCount {
                measured: self.items.len(),
                current: children.len(),
            });
        }
        for (item, child) in self.items.iter().zip(children) {
            let current = effective_span(child.span(), columns);
            if current != item.span {
                return Err(DesyncError::Span {
                    index: item.index,
                    measured: item.span,
                    current,
                });
            }
        }
        Ok(())
    }

    fn pack_items(&self) -> Vec<PackItem> {
        self.items
            .iter()
            .map(|item| PackItem::new(item.span, item.desired.height))
            .collect()
    }
}

/// NaN is treated as unbounded, negative widths as zero.
fn container_extent(value: f64) -> f64 {
    if value.is_nan() {
        f64::INFINITY
    } else {
        value.max(0.0)
    }
}

/// The column width needed so that every child gets at least its desired
/// width across its span.
fn widest_column_demand(items: &[LayoutItem], spacing: f64) -> f64 {
    items
        .iter()
        .map(|item| {
            let gaps = spacing * (item.span - 1) as f64;
            ((item.desired.width - gaps) / item.span as f64).max(0.0)
        })
        .fold(0.0, f64::max)
}
