//! Greedy flow layout for tag chips.
//!
//! Items are packed left to right and wrap onto a new row once the next item
//! would run past the container's right edge. Row height is the tallest item
//! on the row and rows are separated by the same spacing used between items.
//! The pass is stateless: the same input always produces the same offsets.

use serde::{Deserialize, Serialize};

/// Width and height of an item, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left offset of an item inside the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One wrapped row of the arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Index of the first item on the row
    pub start: usize,
    /// One past the last item on the row
    pub end: usize,
}

/// Result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    /// One offset per input item, in input order
    pub offsets: Vec<Point>,
    /// Rows in top-to-bottom order
    pub rows: Vec<Row>,
    /// Bounding size of everything placed
    pub size: Size,
}

impl Arrangement {
    /// Row index for the item at `index`.
    #[must_use]
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| (row.start..row.end).contains(&index))
    }
}

/// Layout parameters for a flow container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLayout {
    pub container_width: f64,
    pub spacing: f64,
}

impl FlowLayout {
    #[must_use]
    pub const fn new(container_width: f64, spacing: f64) -> Self {
        Self {
            container_width,
            spacing,
        }
    }

    /// Place every item and report rows and bounding size.
    ///
    /// An item wider than the container gets a row to itself at `x = 0`.
    #[must_use]
    pub fn arrange(&self, sizes: &[Size]) -> Arrangement {
        let mut offsets = Vec::with_capacity(sizes.len());
        let mut rows = Vec::new();
        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut row_height = 0.0_f64;
        let mut row_start = 0;
        let mut max_right = 0.0_f64;

        for (index, size) in sizes.iter().enumerate() {
            if x > 0.0 && x + size.width > self.container_width {
                rows.push(Row {
                    start: row_start,
                    end: index,
                });
                row_start = index;
                x = 0.0;
                y += row_height + self.spacing;
                row_height = 0.0;
            }

            offsets.push(Point::new(x, y));
            max_right = max_right.max(x + size.width);
            row_height = row_height.max(size.height);
            x += size.width + self.spacing;
        }

        if !sizes.is_empty() {
            rows.push(Row {
                start: row_start,
                end: sizes.len(),
            });
        }

        let height = if sizes.is_empty() { 0.0 } else { y + row_height };
        Arrangement {
            offsets,
            rows,
            size: Size::new(max_right, height),
        }
    }
}

/// Offsets for `sizes` packed into `container_width`.
#[must_use]
pub fn flow_layout(container_width: f64, sizes: &[Size], spacing: f64) -> Vec<Point> {
    FlowLayout::new(container_width, spacing)
        .arrange(sizes)
        .offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sizes(widths: &[f64], height: f64) -> Vec<Size> {
        widths.iter().map(|&width| Size::new(width, height)).collect()
    }

    #[test]
    fn empty_input_has_no_offsets() {
        let arrangement = FlowLayout::new(120.0, 8.0).arrange(&[]);
        assert!(arrangement.offsets.is_empty());
        assert!(arrangement.rows.is_empty());
        assert_eq!(arrangement.size, Size::default());
    }

    #[test]
    fn third_item_wraps_to_second_row() {
        let offsets = flow_layout(120.0, &sizes(&[50.0, 50.0, 50.0], 30.0), 8.0);
        assert_eq!(
            offsets,
            vec![
                Point::new(0.0, 0.0),
                Point::new(58.0, 0.0),
                Point::new(0.0, 38.0),
            ]
        );
    }

    #[test]
    fn row_height_is_tallest_item() {
        let items = vec![
            Size::new(40.0, 20.0),
            Size::new(40.0, 44.0),
            Size::new(40.0, 10.0),
        ];
        let arrangement = FlowLayout::new(90.0, 4.0).arrange(&items);
        assert_eq!(arrangement.offsets[2], Point::new(0.0, 48.0));
        assert_eq!(arrangement.size, Size::new(84.0, 58.0));
        assert_eq!(arrangement.row_of(1), Some(0));
        assert_eq!(arrangement.row_of(2), Some(1));
    }

    #[test]
    fn oversized_item_sits_alone() {
        let offsets = flow_layout(100.0, &sizes(&[30.0, 250.0, 30.0], 20.0), 8.0);
        assert_eq!(
            offsets,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 28.0),
                Point::new(0.0, 56.0),
            ]
        );
    }

    #[test]
    fn oversized_first_item_does_not_wrap_first() {
        let arrangement = FlowLayout::new(50.0, 8.0).arrange(&sizes(&[80.0], 20.0));
        assert_eq!(arrangement.offsets, vec![Point::new(0.0, 0.0)]);
        assert_eq!(arrangement.rows, vec![Row { start: 0, end: 1 }]);
    }

    #[test]
    fn item_exactly_filling_row_stays() {
        let offsets = flow_layout(108.0, &sizes(&[50.0, 50.0], 20.0), 8.0);
        assert_eq!(offsets[1], Point::new(58.0, 0.0));
    }

    #[test]
    fn layout_is_deterministic() {
        let items = sizes(&[70.0, 20.0, 90.0, 15.0, 60.0], 32.0);
        let layout = FlowLayout::new(160.0, 8.0);
        assert_eq!(layout.arrange(&items), layout.arrange(&items));
    }
}
