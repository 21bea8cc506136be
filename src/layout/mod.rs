//! The grid layout engine.
//!
//! This module provides:
//! - [`GridLayout`] - The measure/arrange state machine
//! - [`pack`] - Greedy row packing shared by both passes
//! - [`ColumnMetrics`] - Column width and offsets derived from a container width

mod columns;
mod engine;
mod pack;

pub use columns::ColumnMetrics;
pub use engine::{ChangeFlags, GridLayout, LayoutItem, LayoutPhase};
pub use pack::{Cell, PackItem, Packing, RowRecord, pack};
