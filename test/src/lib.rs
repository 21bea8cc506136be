//! Testing utilities for floem-grid layouts.
//!
//! This crate provides mock grid children and a small harness that drives a
//! [`GridLayout`] through its measure and arrange passes.
//!
//! # Example
//!
//! ```rust
//! use floem_grid_test::prelude::*;
//!
//! let mut harness = GridHarness::new(
//!     GridConfig::new().with_columns(4).with_spacing(8.0),
//!     vec![TestChild::new(1, 30.0), TestChild::new(3, 50.0)],
//! );
//! harness.layout(424.0);
//!
//! assert_rect_approx(harness.rect(1), Rect::new(108.0, 0.0, 424.0, 50.0));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use floem_grid::kurbo::{Rect, Size};
use floem_grid::{GridChild, GridConfig, GridLayout};

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{CallTracker, GridCall, GridHarness, TestChild, assert_rect_approx};
    pub use floem_grid::kurbo::{Point, Rect, Size};
    pub use floem_grid::prelude::*;
    pub use floem_grid::{DesyncError, LayoutPhase};
}

/// One call a grid made into a child.
#[derive(Clone, Debug, PartialEq)]
pub enum GridCall {
    Measure { child: usize, constraint: Size },
    Arrange { child: usize, rect: Rect },
}

/// Records the calls made into tracked children, in order, across all of
/// them.
#[derive(Clone, Default)]
pub struct CallTracker {
    calls: Rc<RefCell<Vec<GridCall>>>,
}

impl CallTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach this tracker to a child.
    pub fn track(&self, child: TestChild) -> TestChild {
        TestChild {
            tracker: Some(self.clone()),
            ..child
        }
    }

    pub fn calls(&self) -> Vec<GridCall> {
        self.calls.borrow().clone()
    }

    /// Child ids in the order they were measured.
    pub fn measured_order(&self) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GridCall::Measure { child, .. } => Some(*child),
                GridCall::Arrange { .. } => None,
            })
            .collect()
    }

    /// Child ids in the order they were arranged.
    pub fn arranged_order(&self) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GridCall::Arrange { child, .. } => Some(*child),
                GridCall::Measure { .. } => None,
            })
            .collect()
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    fn push(&self, call: GridCall) {
        self.calls.borrow_mut().push(call);
    }
}

/// A child with a fixed desired size that remembers how it was laid out.
#[derive(Clone, Default)]
pub struct TestChild {
    pub id: usize,
    pub span: usize,
    pub desired: Size,
    /// Whether the desired width follows the constraint instead of `desired`.
    pub fill_width: bool,
    pub constraints: Vec<Size>,
    pub rect: Option<Rect>,
    tracker: Option<CallTracker>,
}

impl TestChild {
    /// A child that fills its span and wants `height`.
    pub fn new(span: usize, height: f64) -> Self {
        Self {
            span,
            desired: Size::new(0.0, height),
            fill_width: true,
            ..Default::default()
        }
    }

    /// A child that wants exactly `width` x `height`.
    pub fn sized(span: usize, width: f64, height: f64) -> Self {
        Self {
            span,
            desired: Size::new(width, height),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Children for each `(span, height)`, with ids matching their position.
    pub fn from_shapes(shapes: &[(usize, f64)]) -> Vec<TestChild> {
        shapes
            .iter()
            .enumerate()
            .map(|(id, &(span, height))| TestChild::new(span, height).with_id(id))
            .collect()
    }

    /// The last constraint this child was measured against.
    pub fn last_constraint(&self) -> Option<Size> {
        self.constraints.last().copied()
    }
}

impl GridChild for TestChild {
    fn span(&self) -> usize {
        self.span
    }

    fn measure(&mut self, constraint: Size) -> Size {
        self.constraints.push(constraint);
        if let Some(tracker) = &self.tracker {
            tracker.push(GridCall::Measure {
                child: self.id,
                constraint,
            });
        }
        if self.fill_width && constraint.width.is_finite() {
            Size::new(constraint.width, self.desired.height)
        } else {
            self.desired
        }
    }

    fn arrange(&mut self, rect: Rect) {
        self.rect = Some(rect);
        if let Some(tracker) = &self.tracker {
            tracker.push(GridCall::Arrange {
                child: self.id,
                rect,
            });
        }
    }
}

/// Owns a grid and its children and runs layout passes on them.
pub struct GridHarness {
    pub grid: GridLayout,
    pub children: Vec<TestChild>,
}

impl GridHarness {
    pub fn new(config: GridConfig, children: Vec<TestChild>) -> Self {
        Self {
            grid: GridLayout::new(config),
            children,
        }
    }

    /// Measure with an unbounded height, then arrange at `width` by the
    /// desired height. Returns the desired size.
    pub fn layout(&mut self, width: f64) -> Size {
        let desired = self.measure(Size::new(width, f64::INFINITY));
        self.arrange(Size::new(width, desired.height));
        desired
    }

    pub fn measure(&mut self, available: Size) -> Size {
        self.grid.measure(&mut self.children, available)
    }

    pub fn arrange(&mut self, final_size: Size) {
        self.grid.arrange(&mut self.children, final_size);
    }

    /// The rect child `index` was last arranged at, or `Rect::ZERO` if it was
    /// never arranged.
    pub fn rect(&self, index: usize) -> Rect {
        self.children[index].rect.unwrap_or(Rect::ZERO)
    }

    pub fn rects(&self) -> Vec<Rect> {
        (0..self.children.len()).map(|i| self.rect(i)).collect()
    }

    /// Row index of every child from the last pass.
    pub fn rows(&self) -> Vec<usize> {
        self.grid.packing().cells().iter().map(|c| c.row).collect()
    }

    /// Column index of every child from the last pass.
    pub fn columns(&self) -> Vec<usize> {
        self.grid.packing().cells().iter().map(|c| c.column).collect()
    }

    pub fn row_heights(&self) -> Vec<f64> {
        self.grid.packing().rows().iter().map(|r| r.height).collect()
    }
}

/// Asserts two rects match within a tenth of a pixel on every edge.
#[track_caller]
pub fn assert_rect_approx(actual: Rect, expected: Rect) {
    let close = (actual.x0 - expected.x0).abs() < 0.1
        && (actual.y0 - expected.y0).abs() < 0.1
        && (actual.x1 - expected.x1).abs() < 0.1
        && (actual.y1 - expected.y1).abs() < 0.1;
    assert!(close, "Rect should be {expected:?}, got {actual:?}");
}
