//! Table model - a row-major cell grid with merge geometry
//!
//! Cells live in a flat row-major array. Each slot is either a *primary*
//! cell owning content and a span, or a *covered* cell holding the grid
//! position of the primary that absorbed it. The invariant maintained by
//! [`Table::merge`] is that primary spans exactly tile the grid: no gaps,
//! no overlaps, and no cell merged twice.

use crate::container::{BlockContainer, ContainerPolicy};
use crate::error::{DocModelError, Result};
use crate::paragraph::{Alignment, Paragraph};
use crate::reftable::ColorRef;
use crate::units::{Direction, Margins};
use serde::{Deserialize, Serialize};

// =============================================================================
// Borders
// =============================================================================

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    #[default]
    Single,
    Dotted,
    Dashed,
    Double,
    Thick,
}

/// A border line with style and width in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub style: BorderStyle,
    pub width: f32,
}

impl Border {
    pub fn new(style: BorderStyle, width: f32) -> Self {
        Self { style, width }
    }
}

/// Optional per-edge border overrides for a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBorders {
    pub top: Option<Border>,
    pub right: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
}

impl CellBorders {
    /// The override for one edge, if any.
    pub fn get(&self, direction: Direction) -> Option<Border> {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }
}

// =============================================================================
// Cells
// =============================================================================

/// A content-owning cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    content: BlockContainer,
    row_span: usize,
    col_span: usize,
    /// Explicit background, overriding the table's row coloring
    pub background: Option<ColorRef>,
    /// Per-edge border overrides
    pub borders: CellBorders,
    /// Text alignment for cell content
    pub alignment: Option<Alignment>,
}

impl TableCell {
    fn new() -> Self {
        Self {
            content: BlockContainer::new(ContainerPolicy::table_cell()),
            row_span: 1,
            col_span: 1,
            background: None,
            borders: CellBorders::default(),
            alignment: None,
        }
    }

    pub fn container(&self) -> &BlockContainer {
        &self.content
    }

    pub fn container_mut(&mut self) -> &mut BlockContainer {
        &mut self.content
    }

    /// Convenience shortcut into the cell content.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.add_paragraph()
    }

    /// Rows this cell spans (1 unless merged).
    pub fn row_span(&self) -> usize {
        self.row_span
    }

    /// Columns this cell spans (1 unless merged).
    pub fn col_span(&self) -> usize {
        self.col_span
    }
}

/// A grid slot: either a content-owning primary or a covered back-reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Cell {
    Primary(TableCell),
    Covered {
        primary_row: usize,
        primary_col: usize,
    },
}

// =============================================================================
// Table
// =============================================================================

/// An R x C table with merge geometry and row/column styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    width: f32,
    font_size: f32,
    col_widths: Vec<Option<f32>>,
    row_heights: Vec<Option<f32>>,
    /// Cell padding per edge in points
    pub margins: Margins,
    inner_border: Option<Border>,
    outer_border: Option<Border>,
    /// Background for row 0
    pub header_background: Option<ColorRef>,
    /// Background for odd body rows
    pub row_background: Option<ColorRef>,
    /// Background for even body rows
    pub row_alt_background: Option<ColorRef>,
}

impl Table {
    /// Built only through [`BlockContainer::add_table`].
    pub(crate) fn new(rows: usize, cols: usize, width: f32, font_size: f32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(DocModelError::InvalidDimensions(format!(
                "table dimensions must be positive, got {rows}x{cols}"
            )));
        }
        if width <= 0.0 || font_size <= 0.0 {
            return Err(DocModelError::InvalidDimensions(format!(
                "table width and font size must be positive, got {width} and {font_size}"
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| Cell::Primary(TableCell::new())).collect(),
            width,
            font_size,
            col_widths: vec![None; cols],
            row_heights: vec![None; rows],
            margins: Margins::uniform(3.0),
            inner_border: None,
            outer_border: None,
            header_background: None,
            row_background: None,
            row_alt_background: None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Total table width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(DocModelError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn slot(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    fn slot_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    /// The primary cell at `(row, col)`.
    ///
    /// Fails with `CellCovered` when the slot was absorbed by a merge;
    /// content belongs to the anchor cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<&TableCell> {
        self.check_bounds(row, col)?;
        match self.slot(row, col) {
            Cell::Primary(cell) => Ok(cell),
            Cell::Covered {
                primary_row,
                primary_col,
            } => Err(DocModelError::CellCovered {
                row,
                col,
                primary_row: *primary_row,
                primary_col: *primary_col,
            }),
        }
    }

    /// Mutable access to the primary cell at `(row, col)`.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut TableCell> {
        self.check_bounds(row, col)?;
        match self.slot(row, col) {
            Cell::Primary(_) => match self.slot_mut(row, col) {
                Cell::Primary(cell) => Ok(cell),
                Cell::Covered { .. } => unreachable!("slot kind checked above"),
            },
            Cell::Covered {
                primary_row,
                primary_col,
            } => Err(DocModelError::CellCovered {
                row,
                col,
                primary_row: *primary_row,
                primary_col: *primary_col,
            }),
        }
    }

    /// Whether the slot at `(row, col)` was absorbed by a merge.
    pub fn is_covered(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(matches!(self.slot(row, col), Cell::Covered { .. }))
    }

    /// Grid position of the primary governing `(row, col)`.
    pub fn primary_position(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        self.check_bounds(row, col)?;
        match self.slot(row, col) {
            Cell::Primary(_) => Ok((row, col)),
            Cell::Covered {
                primary_row,
                primary_col,
            } => Ok((*primary_row, *primary_col)),
        }
    }

    /// Merge the `row_span` x `col_span` rectangle anchored at `(row, col)`.
    ///
    /// Every target must be an unmerged 1x1 primary; the whole merge is
    /// rejected (grid unchanged) otherwise. The anchor keeps its content,
    /// the other targets become covered cells referencing it.
    pub fn merge(&mut self, row: usize, col: usize, row_span: usize, col_span: usize) -> Result<()> {
        if row_span == 0 || col_span == 0 {
            return Err(DocModelError::InvalidDimensions(format!(
                "merge spans must be positive, got {row_span}x{col_span}"
            )));
        }
        if row + row_span > self.rows || col + col_span > self.cols {
            return Err(DocModelError::MergeOutOfBounds {
                row,
                col,
                row_span,
                col_span,
                rows: self.rows,
                cols: self.cols,
            });
        }

        // Validate the full rectangle before mutating anything
        for r in row..row + row_span {
            for c in col..col + col_span {
                match self.slot(r, c) {
                    Cell::Covered { .. } => {
                        return Err(DocModelError::CellAlreadyCovered { row: r, col: c });
                    }
                    Cell::Primary(cell) if cell.row_span != 1 || cell.col_span != 1 => {
                        return Err(DocModelError::CellAlreadyMerged { row: r, col: c });
                    }
                    Cell::Primary(_) => {}
                }
            }
        }

        if row_span == 1 && col_span == 1 {
            return Ok(());
        }

        for r in row..row + row_span {
            for c in col..col + col_span {
                if r == row && c == col {
                    continue;
                }
                *self.slot_mut(r, c) = Cell::Covered {
                    primary_row: row,
                    primary_col: col,
                };
            }
        }
        if let Cell::Primary(anchor) = self.slot_mut(row, col) {
            anchor.row_span = row_span;
            anchor.col_span = col_span;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Fix the width of one column in points.
    pub fn set_col_width(&mut self, col: usize, width: f32) -> Result<()> {
        if col >= self.cols {
            return Err(DocModelError::InvalidDimensions(format!(
                "column index {col} out of bounds ({} columns)",
                self.cols
            )));
        }
        if width <= 0.0 {
            return Err(DocModelError::InvalidDimensions(format!(
                "column width must be positive, got {width}"
            )));
        }
        self.col_widths[col] = Some(width);
        Ok(())
    }

    /// Fix the height of one row in points.
    pub fn set_row_height(&mut self, row: usize, height: f32) -> Result<()> {
        if row >= self.rows {
            return Err(DocModelError::InvalidDimensions(format!(
                "row index {row} out of bounds ({} rows)",
                self.rows
            )));
        }
        if height <= 0.0 {
            return Err(DocModelError::InvalidDimensions(format!(
                "row height must be positive, got {height}"
            )));
        }
        self.row_heights[row] = Some(height);
        Ok(())
    }

    /// Explicitly configured height of a row, if any.
    pub fn explicit_row_height(&self, row: usize) -> Option<f32> {
        self.row_heights.get(row).copied().flatten()
    }

    /// Effective height of a row in points.
    pub fn row_height(&self, row: usize) -> f32 {
        self.row_heights
            .get(row)
            .copied()
            .flatten()
            .unwrap_or(self.font_size * 2.0)
    }

    /// Effective width of every column in points.
    ///
    /// Explicitly configured columns keep their width; the remaining table
    /// width is split equally among the unconfigured ones.
    pub fn column_widths(&self) -> Vec<f32> {
        let configured: f32 = self.col_widths.iter().flatten().sum();
        let unconfigured = self.col_widths.iter().filter(|w| w.is_none()).count();
        let share = if unconfigured > 0 {
            ((self.width - configured) / unconfigured as f32).max(0.0)
        } else {
            0.0
        };
        self.col_widths
            .iter()
            .map(|w| w.unwrap_or(share))
            .collect()
    }

    /// Cumulative right edge of every column, in points from the table left.
    pub fn column_right_edges(&self) -> Vec<f32> {
        let mut edge = 0.0;
        self.column_widths()
            .iter()
            .map(|w| {
                edge += w;
                edge
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Styling resolution
    // -------------------------------------------------------------------------

    /// Set the border drawn between interior cells.
    pub fn set_inner_border(&mut self, style: BorderStyle, width: f32) {
        self.inner_border = Some(Border::new(style, width));
    }

    /// Set the border drawn around the table outline.
    pub fn set_outer_border(&mut self, style: BorderStyle, width: f32) {
        self.outer_border = Some(Border::new(style, width));
    }

    pub fn inner_border(&self) -> Option<Border> {
        self.inner_border
    }

    pub fn outer_border(&self) -> Option<Border> {
        self.outer_border
    }

    /// Resolve the background of the grid position `(row, col)`.
    ///
    /// Precedence: explicit override on the governing primary cell, then the
    /// header color for row 0, then the alternating color on even body rows,
    /// then the row color.
    pub fn resolved_background(&self, row: usize, col: usize) -> Result<Option<ColorRef>> {
        let (primary_row, primary_col) = self.primary_position(row, col)?;
        if let Cell::Primary(cell) = self.slot(primary_row, primary_col) {
            if cell.background.is_some() {
                return Ok(cell.background);
            }
        }
        if row == 0 && self.header_background.is_some() {
            return Ok(self.header_background);
        }
        if row % 2 == 0 && self.row_alt_background.is_some() {
            return Ok(self.row_alt_background);
        }
        Ok(self.row_background)
    }

    /// Resolve one edge border of the grid position `(row, col)`.
    ///
    /// Precedence: cell-level override, then the outer border on table-edge
    /// sides, then the inner border.
    pub fn resolved_border(&self, row: usize, col: usize, edge: Direction) -> Result<Option<Border>> {
        let (primary_row, primary_col) = self.primary_position(row, col)?;
        if let Cell::Primary(cell) = self.slot(primary_row, primary_col) {
            if let Some(border) = cell.borders.get(edge) {
                return Ok(Some(border));
            }
        }
        let on_outline = match edge {
            Direction::Top => row == 0,
            Direction::Bottom => row == self.rows - 1,
            Direction::Left => col == 0,
            Direction::Right => col == self.cols - 1,
        };
        if on_outline {
            if self.outer_border.is_some() {
                return Ok(self.outer_border);
            }
        } else if self.inner_border.is_some() {
            return Ok(self.inner_border);
        }
        Ok(None)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(rows: usize, cols: usize) -> Table {
        Table::new(rows, cols, 400.0, 12.0).unwrap()
    }

    #[test]
    fn test_construction_rejects_degenerate_grids() {
        assert!(Table::new(0, 3, 400.0, 12.0).is_err());
        assert!(Table::new(3, 0, 400.0, 12.0).is_err());
        assert!(Table::new(2, 2, 0.0, 12.0).is_err());
        assert!(Table::new(2, 2, 400.0, -1.0).is_err());
    }

    #[test]
    fn test_vertical_merge_geometry() {
        // merge rows 0-1 of column 0
        let mut table = table(2, 2);
        table.merge(0, 0, 2, 1).unwrap();

        let anchor = table.cell(0, 0).unwrap();
        assert_eq!(anchor.row_span(), 2);
        assert_eq!(anchor.col_span(), 1);
        assert!(table.is_covered(1, 0).unwrap());
        assert_eq!(table.primary_position(1, 0).unwrap(), (0, 0));
        assert!(!table.is_covered(1, 1).unwrap());
    }

    #[test]
    fn test_covered_cell_rejects_content_access() {
        let mut table = table(2, 2);
        table.merge(0, 0, 1, 2).unwrap();
        let err = table.cell_mut(0, 1).unwrap_err();
        assert_eq!(
            err,
            DocModelError::CellCovered {
                row: 0,
                col: 1,
                primary_row: 0,
                primary_col: 0,
            }
        );
    }

    #[test]
    fn test_merge_rejects_covered_target_and_leaves_grid_unchanged() {
        let mut table = table(4, 4);
        table.merge(1, 0, 3, 2).unwrap();

        let err = table.merge(2, 1, 1, 2).unwrap_err();
        assert_eq!(err, DocModelError::CellAlreadyCovered { row: 2, col: 1 });
        // (2, 2) was a valid target of the failed merge and must be untouched
        assert!(!table.is_covered(2, 2).unwrap());
        assert_eq!(table.cell(1, 0).unwrap().row_span(), 3);
    }

    #[test]
    fn test_merge_rejects_anchor_of_earlier_merge() {
        let mut table = table(4, 4);
        table.merge(0, 0, 2, 2).unwrap();
        let err = table.merge(0, 0, 2, 3).unwrap_err();
        assert_eq!(err, DocModelError::CellAlreadyMerged { row: 0, col: 0 });
    }

    #[test]
    fn test_merge_out_of_bounds() {
        let mut table = table(3, 3);
        assert!(matches!(
            table.merge(2, 2, 2, 1),
            Err(DocModelError::MergeOutOfBounds { .. })
        ));
        assert!(matches!(
            table.merge(0, 0, 0, 1),
            Err(DocModelError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_column_width_distribution() {
        let mut table = Table::new(2, 4, 400.0, 12.0).unwrap();
        let widths = table.column_widths();
        assert_eq!(widths, vec![100.0; 4]);

        table.set_col_width(0, 160.0).unwrap();
        let widths = table.column_widths();
        assert_eq!(widths[0], 160.0);
        assert_eq!(widths[1], 80.0);
        assert_eq!(widths[3], 80.0);

        let edges = table.column_right_edges();
        assert_eq!(edges, vec![160.0, 240.0, 320.0, 400.0]);
    }

    #[test]
    fn test_background_resolution_order() {
        let mut table = table(4, 2);
        table.header_background = Some(ColorRef(1));
        table.row_background = Some(ColorRef(2));
        table.row_alt_background = Some(ColorRef(3));
        table.cell_mut(2, 1).unwrap().background = Some(ColorRef(4));

        assert_eq!(table.resolved_background(0, 0).unwrap(), Some(ColorRef(1)));
        assert_eq!(table.resolved_background(1, 0).unwrap(), Some(ColorRef(2)));
        assert_eq!(table.resolved_background(2, 0).unwrap(), Some(ColorRef(3)));
        assert_eq!(table.resolved_background(3, 0).unwrap(), Some(ColorRef(2)));
        // Explicit cell override beats the alternating color
        assert_eq!(table.resolved_background(2, 1).unwrap(), Some(ColorRef(4)));
    }

    #[test]
    fn test_border_resolution() {
        let mut table = table(3, 3);
        table.set_outer_border(BorderStyle::Single, 2.0);
        table.set_inner_border(BorderStyle::Dotted, 1.0);
        table.cell_mut(1, 1).unwrap().borders.top =
            Some(Border::new(BorderStyle::Double, 3.0));

        let top_left = table.resolved_border(0, 0, Direction::Top).unwrap().unwrap();
        assert_eq!(top_left.style, BorderStyle::Single);
        let interior = table.resolved_border(1, 1, Direction::Bottom).unwrap().unwrap();
        assert_eq!(interior.style, BorderStyle::Dotted);
        let overridden = table.resolved_border(1, 1, Direction::Top).unwrap().unwrap();
        assert_eq!(overridden.style, BorderStyle::Double);
    }

    #[test]
    fn test_row_height_defaults_from_font_size() {
        let mut table = Table::new(2, 2, 400.0, 12.0).unwrap();
        assert_eq!(table.row_height(0), 24.0);
        assert_eq!(table.explicit_row_height(0), None);
        table.set_row_height(0, 40.0).unwrap();
        assert_eq!(table.row_height(0), 40.0);
        assert_eq!(table.explicit_row_height(0), Some(40.0));
        assert_eq!(table.row_height(1), 24.0);
    }

    proptest! {
        #[test]
        fn prop_merges_preserve_tiling(
            merges in proptest::collection::vec(
                (0usize..6, 0usize..6, 1usize..4, 1usize..4),
                0..12,
            )
        ) {
            let mut table = Table::new(6, 6, 600.0, 12.0).unwrap();
            for (row, col, row_span, col_span) in merges {
                // Failures must leave the grid unchanged; successes extend it
                let _ = table.merge(row, col, row_span, col_span);
            }

            // Every slot belongs to exactly one primary span
            let mut owners = vec![0u32; 36];
            for r in 0..6 {
                for c in 0..6 {
                    if table.is_covered(r, c).unwrap() {
                        continue;
                    }
                    let cell = table.cell(r, c).unwrap();
                    for rr in r..r + cell.row_span() {
                        for cc in c..c + cell.col_span() {
                            owners[rr * 6 + cc] += 1;
                        }
                    }
                }
            }
            for (slot, count) in owners.iter().enumerate() {
                prop_assert_eq!(*count, 1, "slot {} owned {} times", slot, count);
            }

            // Covered slots point back inside their primary's span
            for r in 0..6 {
                for c in 0..6 {
                    let (pr, pc) = table.primary_position(r, c).unwrap();
                    let anchor = table.cell(pr, pc).unwrap();
                    prop_assert!(r >= pr && r < pr + anchor.row_span());
                    prop_assert!(c >= pc && c < pc + anchor.col_span());
                }
            }
        }
    }
}
