//! Rubber-band selection rectangle.

use floorkit_core::MachineId;

use crate::viewport::Point;

/// A marquee anchored at the pointer-down position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    origin: Point,
    corner: Point,
}

impl Marquee {
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            corner: origin,
        }
    }

    /// Moves the corner opposite the origin.
    pub fn update(&mut self, corner: Point) {
        self.corner = corner;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn corner(&self) -> Point {
        self.corner
    }

    /// Normalized `(min, max)` corners.
    pub fn bounds(&self) -> (Point, Point) {
        (
            Point::new(self.origin.x.min(self.corner.x), self.origin.y.min(self.corner.y)),
            Point::new(self.origin.x.max(self.corner.x), self.origin.y.max(self.corner.y)),
        )
    }

    /// Closed-interval containment on both axes.
    pub fn contains(&self, point: Point) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Ids of the candidates whose centre lies inside the rectangle.
    pub fn select(&self, candidates: impl IntoIterator<Item = (MachineId, Point)>) -> Vec<MachineId> {
        candidates
            .into_iter()
            .filter(|(_, center)| self.contains(*center))
            .map(|(id, _)| id)
            .collect()
    }
}
