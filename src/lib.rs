//! # Floem Grid
//! A responsive, breakpoint-driven column grid for Floem and any other host
//! that lays out rectangles in two passes.
//!
//! Children are placed left to right in a fixed number of equal columns and
//! wrap to a new row when their span no longer fits. The number of columns is
//! picked from the container width through a table of breakpoints.
//!
//! ## Example: Cards
//! ```rust
//! use floem_grid::kurbo::{Rect, Size};
//! use floem_grid::prelude::*;
//!
//! struct Card {
//!     span: usize,
//!     height: f64,
//!     rect: Rect,
//! }
//!
//! impl GridChild for Card {
//!     fn span(&self) -> usize {
//!         self.span
//!     }
//!     fn measure(&mut self, constraint: Size) -> Size {
//!         Size::new(constraint.width, self.height)
//!     }
//!     fn arrange(&mut self, rect: Rect) {
//!         self.rect = rect;
//!     }
//! }
//!
//! let config = GridConfig::new()
//!     .with_spacing(8.0)
//!     .with_breakpoint(0.0, 1)
//!     .with_breakpoint(600.0, 2)
//!     .with_breakpoint(900.0, 4);
//! let mut grid = GridLayout::new(config);
//!
//! let mut cards: Vec<_> = [(2, 40.0), (1, 60.0), (1, 20.0)]
//!     .into_iter()
//!     .map(|(span, height)| Card { span, height, rect: Rect::ZERO })
//!     .collect();
//!
//! // 650 wide selects the two column breakpoint.
//! let size = grid.measure(&mut cards, Size::new(650.0, f64::INFINITY));
//! grid.arrange(&mut cards, size);
//!
//! assert_eq!(grid.active_columns(), Some(2));
//! assert_eq!(grid.packing().row_count(), 2);
//! assert_eq!(size.height, 40.0 + 8.0 + 60.0);
//! ```
//!
//! ## Two passes
//!
//! [`GridLayout::measure`] resolves the column count, asks every child for its
//! size within the width of its span, and packs the children into rows.
//! [`GridLayout::arrange`] derives the column width from the final width and
//! places every child. Arrange reuses the spans and heights cached by measure,
//! so the two passes cannot disagree about rows. If the children changed in
//! between, arrange measures again first.
//!
//! Nothing in either pass fails. Negative or non-finite child sizes, a zero
//! column count, and negative spacing are all clamped.

pub mod breakpoint;
mod child;
pub mod config;
mod error;
pub mod layout;
mod span;

pub use breakpoint::{Breakpoint, BreakpointTable, ScreenSize};
pub use child::GridChild;
pub use config::GridConfig;
pub use error::{ConfigError, DesyncError};
pub use layout::{ChangeFlags, ColumnMetrics, GridLayout, LayoutPhase};
pub use peniko;
pub use peniko::kurbo;
pub use span::{DEFAULT_SPAN, effective_span};

pub mod prelude {
    pub use crate::layout::{ChangeFlags, GridLayout};
    pub use crate::{Breakpoint, BreakpointTable, GridChild, GridConfig};
}
