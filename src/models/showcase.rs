//! Fixed 3D layout for the product showcase.
//!
//! Items sit on rows of [`ROW_WIDTH`](showcase::ROW_WIDTH) slots, centered on
//! the origin, each row pushed further back than the one before. The
//! selected item spins a full turn and grows; everything else rests at a
//! slight angle facing the center.

use crate::config::showcase;

/// Position and pose of one showcase slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Resting rotation around the vertical axis, in degrees.
    pub yaw: f64,
}

impl Placement {
    /// CSS `transform` for this slot.
    pub fn transform(&self, selected: bool) -> String {
        let (yaw, scale) = if selected {
            (showcase::SELECTED_YAW, showcase::SELECTED_SCALE)
        } else {
            (self.yaw, 1.0)
        };
        format!(
            "translate3d({:.0}px, {:.0}px, {:.0}px) rotateY({:.0}deg) scale({})",
            self.x, self.y, self.z, yaw, scale
        )
    }
}

/// Placements for `count` items, in item order.
pub fn layout(count: usize) -> Vec<Placement> {
    let row_width = showcase::ROW_WIDTH;

    (0..count)
        .map(|i| {
            let row = i / row_width;
            let col = i % row_width;
            let in_row = (count - row * row_width).min(row_width);

            // Center a partial last row too.
            let offset = col as f64 - (in_row as f64 - 1.0) / 2.0;
            let yaw = if offset == 0.0 {
                0.0
            } else {
                -offset.signum() * showcase::REST_YAW
            };

            Placement {
                x: offset * showcase::SLOT_SPACING,
                y: row as f64 * showcase::ROW_HEIGHT,
                // Adding 0.0 turns the front row's -0.0 into 0.0 for CSS output.
                z: row as f64 * showcase::ROW_DEPTH + 0.0,
                yaw,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout() {
        assert!(layout(0).is_empty());
    }

    #[test]
    fn test_full_row_is_centered() {
        let slots = layout(3);
        assert_eq!(slots[0].x, -showcase::SLOT_SPACING);
        assert_eq!(slots[1].x, 0.0);
        assert_eq!(slots[2].x, showcase::SLOT_SPACING);
        assert!(slots.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_items_face_the_center() {
        let slots = layout(3);
        assert!(slots[0].yaw > 0.0);
        assert_eq!(slots[1].yaw, 0.0);
        assert!(slots[2].yaw < 0.0);
    }

    #[test]
    fn test_partial_second_row_is_centered_and_deeper() {
        let slots = layout(5);
        assert_eq!(slots[3].x, -showcase::SLOT_SPACING / 2.0);
        assert_eq!(slots[4].x, showcase::SLOT_SPACING / 2.0);
        assert_eq!(slots[3].z, showcase::ROW_DEPTH);
        assert_eq!(slots[3].y, showcase::ROW_HEIGHT);
    }

    #[test]
    fn test_positions_are_distinct_and_stable() {
        let slots = layout(7);
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!((a.x, a.y, a.z) != (b.x, b.y, b.z));
            }
        }
        assert_eq!(slots, layout(7));
    }

    #[test]
    fn test_transform_selected() {
        let slot = layout(1)[0];
        assert_eq!(
            slot.transform(false),
            "translate3d(0px, 0px, 0px) rotateY(0deg) scale(1)"
        );
        assert_eq!(
            slot.transform(true),
            "translate3d(0px, 0px, 0px) rotateY(360deg) scale(1.25)"
        );
    }
}
