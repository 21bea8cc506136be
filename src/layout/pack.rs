//! Greedy row packing.
//!
//! Items are placed left to right in their original order. An item that does
//! not fit in what is left of the current row starts a new one; items are
//! never reordered to fill gaps.

use std::ops::Range;

use smallvec::SmallVec;
use tracing::trace;

use crate::span::effective_span;

/// The inputs the packer needs from one child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackItem {
    pub span: usize,
    pub height: f64,
}

impl PackItem {
    pub fn new(span: usize, height: f64) -> Self {
        Self { span, height }
    }
}

/// Where an item landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    /// The clamped span the item occupies.
    pub span: usize,
}

/// A closed row: its index, height, and the items it holds.
#[derive(Clone, Debug, PartialEq)]
pub struct RowRecord {
    pub index: usize,
    /// Tallest member height, never negative.
    pub height: f64,
    /// Indices into the packed item sequence. Rows tile it without gaps.
    pub items: Range<usize>,
}

/// The result of [`pack`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packing {
    columns: usize,
    rows: SmallVec<[RowRecord; 4]>,
    cells: Vec<Cell>,
}

impl Packing {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// One cell per packed item, in input order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sum of row heights plus the gaps between rows.
    pub fn total_height(&self, spacing: f64) -> f64 {
        let rows: f64 = self.rows.iter().map(|row| row.height).sum();
        rows + spacing * self.rows.len().saturating_sub(1) as f64
    }

    /// Top edge of every row.
    pub fn row_offsets(&self, spacing: f64) -> SmallVec<[f64; 4]> {
        let mut y = 0.0;
        self.rows
            .iter()
            .map(|row| {
                let top = y;
                y += row.height + spacing;
                top
            })
            .collect()
    }
}

/// Packs `items` into rows of at most `columns` columns.
///
/// Spans are clamped into `1..=columns` first, so an oversized item fills
/// a row of its own. An empty input produces no rows.
pub fn pack(items: &[PackItem], columns: usize) -> Packing {
    let columns = columns.max(1);
    let mut rows = SmallVec::new();
    let mut cells = Vec::with_capacity(items.len());

    let mut row_start = 0;
    let mut column = 0;
    let mut row_height: f64 = 0.0;

    for (index, item) in items.iter().enumerate() {
        let span = effective_span(item.span, columns);
        if column + span > columns {
            close_row(&mut rows, row_start..index, row_height);
            row_start = index;
            column = 0;
            row_height = 0.0;
        }

        cells.push(Cell {
            row: rows.len(),
            column,
            span,
        });
        row_height = row_height.max(item.height);
        column += span;
    }

    if row_start < items.len() {
        close_row(&mut rows, row_start..items.len(), row_height);
    }

    Packing {
        columns,
        rows,
        cells,
    }
}

fn close_row(rows: &mut SmallVec<[RowRecord; 4]>, items: Range<usize>, height: f64) {
    let index = rows.len();
    trace!(row = index, items = ?items, height, "closed grid row");
    rows.push(RowRecord {
        index,
        height: height.max(0.0),
        items,
    });
}
