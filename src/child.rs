//! The capability a grid child needs: report a span, measure, arrange.

use peniko::kurbo::{Rect, Size};

use crate::span::DEFAULT_SPAN;

/// A rectangular item that can be placed by a [`GridLayout`](crate::GridLayout).
///
/// Hosts implement this for whatever their child handle is. Only
/// [`measure`](GridChild::measure) and [`arrange`](GridChild::arrange) are
/// required; the span defaults to one column.
///
/// ```rust
/// use floem_grid::GridChild;
/// use floem_grid::kurbo::{Rect, Size};
///
/// struct Card {
///     height: f64,
///     rect: Rect,
/// }
///
/// impl GridChild for Card {
///     fn span(&self) -> usize {
///         2
///     }
///
///     fn measure(&mut self, constraint: Size) -> Size {
///         Size::new(constraint.width, self.height)
///     }
///
///     fn arrange(&mut self, rect: Rect) {
///         self.rect = rect;
///     }
/// }
/// ```
pub trait GridChild {
    /// The number of columns this child asks for.
    fn span(&self) -> usize {
        DEFAULT_SPAN
    }

    /// Returns the size this child wants within `constraint`.
    ///
    /// `constraint.width` is the width of the child's span; either dimension
    /// may be infinite.
    fn measure(&mut self, constraint: Size) -> Size;

    /// Places the child at its final rectangle, relative to the grid origin.
    fn arrange(&mut self, rect: Rect);
}

impl<T: GridChild + ?Sized> GridChild for &mut T {
    fn span(&self) -> usize {
        (**self).span()
    }

    fn measure(&mut self, constraint: Size) -> Size {
        (**self).measure(constraint)
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

impl<T: GridChild + ?Sized> GridChild for Box<T> {
    fn span(&self) -> usize {
        (**self).span()
    }

    fn measure(&mut self, constraint: Size) -> Size {
        (**self).measure(constraint)
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

/// Clamps negative and non-finite extents of a measured size to zero.
///
/// Returns the clamped size and whether anything had to change.
pub(crate) fn sanitize_desired(size: Size) -> (Size, bool) {
    fn extent(value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
    let clamped = Size::new(extent(size.width), extent(size.height));
    let changed = !(size.width.is_finite() && size.width >= 0.0)
        || !(size.height.is_finite() && size.height >= 0.0);
    (clamped, changed)
}
