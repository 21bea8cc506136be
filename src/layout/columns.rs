/// Column geometry derived from a container width.
///
/// The column width is never configured directly: it is whatever remains of
/// the container width after the gaps, split evenly, so that
/// `column_width * columns + spacing * (columns - 1) == container_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnMetrics {
    columns: usize,
    spacing: f64,
    column_width: f64,
}

impl ColumnMetrics {
    pub fn new(container_width: f64, columns: usize, spacing: f64) -> Self {
        let columns = columns.max(1);
        let gaps = spacing * (columns - 1) as f64;
        Self {
            columns,
            spacing,
            column_width: (container_width - gaps) / columns as f64,
        }
    }

    /// Metrics for a known column width, used when the container width is
    /// unbounded and has to be derived from the children instead.
    pub fn from_column_width(column_width: f64, columns: usize, spacing: f64) -> Self {
        Self {
            columns: columns.max(1),
            spacing,
            column_width,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// May be negative when the gaps alone are wider than the container.
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Width of a cell covering `span` columns, including the gaps it spans.
    /// Never negative.
    pub fn span_width(&self, span: usize) -> f64 {
        let span = span.max(1);
        (self.column_width * span as f64 + self.spacing * (span - 1) as f64).max(0.0)
    }

    /// Horizontal offset of the left edge of `column`.
    pub fn column_offset(&self, column: usize) -> f64 {
        column as f64 * (self.column_width + self.spacing)
    }

    /// The container width these metrics account for.
    pub fn total_width(&self) -> f64 {
        self.column_width * self.columns as f64 + self.spacing * (self.columns - 1) as f64
    }
}
