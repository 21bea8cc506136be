/// Span used for children that do not request one.
pub const DEFAULT_SPAN: usize = 1;

/// Clamps a requested column span into `1..=columns`.
///
/// Invalid spans are absorbed rather than rejected: `0` becomes `1`, and a
/// span wider than the grid is narrowed to the full width.
pub fn effective_span(requested: usize, columns: usize) -> usize {
    requested.max(1).min(columns.max(1))
}
