use serde::{Deserialize, Serialize};

use crate::core::types::{Dimension, ReferencePoint};

/// Geometry of a rendered data mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkShape {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

impl MarkShape {
    /// Pixel coordinate of the reference point along `dimension`.
    ///
    /// A circle always answers with its center: it has no top-left anchor, so
    /// [`ReferencePoint::TopLeft`] and [`ReferencePoint::Center`] agree.
    #[must_use]
    pub fn reference_coordinate(self, dimension: Dimension, reference: ReferencePoint) -> f64 {
        match (self, dimension) {
            (Self::Circle { cx, .. }, Dimension::Horizontal) => cx,
            (Self::Circle { cy, .. }, Dimension::Vertical) => cy,
            (Self::Rect { x, width, .. }, Dimension::Horizontal) => {
                rect_coordinate(x, width, reference)
            }
            (Self::Rect { y, height, .. }, Dimension::Vertical) => {
                rect_coordinate(y, height, reference)
            }
        }
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            self.reference_coordinate(Dimension::Horizontal, ReferencePoint::Center),
            self.reference_coordinate(Dimension::Vertical, ReferencePoint::Center),
        )
    }

    #[must_use]
    pub fn top_left(self) -> (f64, f64) {
        (
            self.reference_coordinate(Dimension::Horizontal, ReferencePoint::TopLeft),
            self.reference_coordinate(Dimension::Vertical, ReferencePoint::TopLeft),
        )
    }
}

fn rect_coordinate(anchor: f64, extent: f64, reference: ReferencePoint) -> f64 {
    match reference {
        ReferencePoint::TopLeft => anchor,
        ReferencePoint::Center => anchor + extent / 2.0,
    }
}
