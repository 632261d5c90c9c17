// Row and grid layout arithmetic. All values are in millimetres with the
// origin at the bottom-left of the page.

use crate::theme::Swatch;

/// A rectangular region addressed by its top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(x: f32, top: f32, width: f32, height: f32) -> Self {
        Frame { x, top, width, height }
    }

    /// Build a frame from its bottom and top edges.
    pub fn spanning(x: f32, bottom: f32, width: f32, top: f32) -> Self {
        Frame { x, top, width, height: top - bottom }
    }

    pub fn bottom(&self) -> f32 {
        self.top - self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top - self.height / 2.0
    }

    /// Shrink every edge by `amount`.
    pub fn inset(&self, amount: f32) -> Frame {
        Frame {
            x: self.x + amount,
            top: self.top - amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }
}

// ============================================================================
// Centered Rows
// ============================================================================

/// One row produced by [`RowLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub index: usize,
    pub top: f32,
    pub bottom: f32,
    pub center: f32,
}

/// A block of equally tall rows, vertically centred inside a frame.
///
/// Rows are never clipped: when the block is taller than the frame the
/// margin goes negative and the rows spill over both edges equally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    box_top: f32,
    box_height: f32,
    row_count: usize,
    row_height: f32,
}

impl RowLayout {
    pub fn centered(box_top: f32, box_height: f32, row_count: usize, row_height: f32) -> Self {
        RowLayout {
            box_top,
            box_height,
            row_count,
            row_height,
        }
    }

    pub fn in_frame(frame: &Frame, row_count: usize, row_height: f32) -> Self {
        Self::centered(frame.top, frame.height, row_count, row_height)
    }

    /// Space left above (and below) the block of rows.
    pub fn margin(&self) -> f32 {
        (self.box_height - self.row_count as f32 * self.row_height) / 2.0
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn row(&self, index: usize) -> Row {
        let top = self.box_top - self.margin() - index as f32 * self.row_height;
        Row {
            index,
            top,
            bottom: top - self.row_height,
            center: top - self.row_height / 2.0,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.row_count).map(move |i| self.row(i))
    }
}

/// How many rows of `row_height` fit in `available` after reserving `padding`.
pub fn rows_that_fit(available: f32, row_height: f32, padding: f32) -> usize {
    if row_height <= 0.0 {
        return 0;
    }
    let fit = ((available - padding) / row_height).floor();
    if fit > 0.0 {
        fit as usize
    } else {
        0
    }
}

// ============================================================================
// Row Decoration
// ============================================================================

/// The decoration painted on each row of a grouped list.
#[derive(Debug, Clone, Copy)]
pub enum RowKind<'a> {
    /// A plain rule near the bottom of the row, starting `indent` in.
    Separator { indent: f32 },
    /// A square checkbox followed by a rule.
    Checkbox { color: Swatch },
    /// A filled dot followed by a rule.
    Bulleted { color: Swatch },
    /// A right-aligned label in a gutter followed by a rule. Rows past the
    /// end of `labels` are left unlabeled.
    Labeled { labels: &'a [String] },
}

// ============================================================================
// Grids
// ============================================================================

/// Start offsets of `count` equal divisions of `length`.
pub fn split(start: f32, length: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let step = length / count as f32;
    (0..count).map(|i| start + i as f32 * step).collect()
}

/// Dot positions of a note grid: rows from the top of `frame` downwards,
/// columns from its left edge, `spacing` apart, bounds inclusive.
pub fn dot_grid(frame: &Frame, spacing: f32) -> Vec<(f32, f32)> {
    let mut dots = Vec::new();
    if spacing <= 0.0 || frame.height < 0.0 || frame.width < 0.0 {
        return dots;
    }
    // Step by index so float error never drops the last row or column
    let rows = ((frame.height + 1e-3) / spacing).floor() as usize + 1;
    let cols = ((frame.width + 1e-3) / spacing).floor() as usize + 1;
    for r in 0..rows {
        let y = frame.top - r as f32 * spacing;
        for c in 0..cols {
            dots.push((frame.x + c as f32 * spacing, y));
        }
    }
    dots
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_rows_are_centered_in_box() {
        let layout = RowLayout::centered(100.0, 60.0, 5, 8.0);
        assert!((layout.margin() - 10.0).abs() < EPS);

        let first = layout.row(0);
        let last = layout.row(4);
        assert!((first.top - 90.0).abs() < EPS);
        assert!((last.bottom - 50.0).abs() < EPS);

        let block_mid = (first.top + last.bottom) / 2.0;
        assert!((block_mid - (100.0 - 30.0)).abs() < EPS);
    }

    #[test]
    fn test_rows_are_contiguous() {
        let layout = RowLayout::centered(140.0, 55.0, 6, 8.0);
        let rows: Vec<Row> = layout.rows().collect();
        assert_eq!(rows.len(), 6);
        for pair in rows.windows(2) {
            assert!((pair[0].bottom - pair[1].top).abs() < EPS);
        }
        let total: f32 = rows.iter().map(|r| r.top - r.bottom).sum();
        assert!((total - 48.0).abs() < EPS);
    }

    #[test]
    fn test_row_center_is_halfway() {
        let layout = RowLayout::centered(50.0, 20.0, 2, 9.0);
        for row in layout.rows() {
            assert!((row.center - (row.top + row.bottom) / 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_overflowing_rows_spill_both_edges() {
        let layout = RowLayout::centered(100.0, 20.0, 4, 10.0);
        assert!((layout.margin() + 10.0).abs() < EPS);
        assert!((layout.row(0).top - 110.0).abs() < EPS);
        assert!((layout.row(3).bottom - 70.0).abs() < EPS);
    }

    #[test]
    fn test_empty_layout() {
        let layout = RowLayout::centered(100.0, 20.0, 0, 10.0);
        assert!(layout.is_empty());
        assert_eq!(layout.rows().count(), 0);
    }

    #[test]
    fn test_rows_that_fit() {
        assert_eq!(rows_that_fit(55.0, 9.0, 4.0), 5);
        assert_eq!(rows_that_fit(60.0, 8.0, 4.0), 7);
        assert_eq!(rows_that_fit(3.0, 8.0, 4.0), 0);
        assert_eq!(rows_that_fit(30.0, 0.0, 0.0), 0);
    }

    #[test]
    fn test_split_divides_evenly() {
        let starts = split(10.0, 70.0, 7);
        assert_eq!(starts.len(), 7);
        assert!((starts[0] - 10.0).abs() < EPS);
        assert!((starts[6] - 70.0).abs() < EPS);
        assert!(split(0.0, 10.0, 0).is_empty());
    }

    #[test]
    fn test_dot_grid_includes_both_edges() {
        let frame = Frame::new(0.0, 10.0, 10.0, 10.0);
        let dots = dot_grid(&frame, 5.0);
        assert_eq!(dots.len(), 9);
        assert!(dots.contains(&(0.0, 10.0)));
        assert!(dots.contains(&(10.0, 0.0)));
    }

    #[test]
    fn test_frame_edges() {
        let frame = Frame::spanning(5.0, 15.0, 100.0, 115.0);
        assert!((frame.height - 100.0).abs() < EPS);
        assert!((frame.bottom() - 15.0).abs() < EPS);
        assert!((frame.right() - 105.0).abs() < EPS);
        let inner = frame.inset(5.0);
        assert!((inner.top - 110.0).abs() < EPS);
        assert!((inner.width - 90.0).abs() < EPS);
    }
}
