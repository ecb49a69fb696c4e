use tower_core::{Point, StoryGeometry, normalize_angle};

/// Circular story around a fixed center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
}

impl RingGeometry {
    pub const fn new(center: Point) -> Self {
        Self { center }
    }
}

impl StoryGeometry for RingGeometry {
    fn distance_from_center(&self, point: Point) -> f64 {
        self.center.distance_to(point)
    }

    fn angle_from_center(&self, point: Point) -> f64 {
        normalize_angle(self.center.heading_to(point))
    }

    fn position_from_center(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.center.x + angle.cos() * distance,
            self.center.y + angle.sin() * distance,
        )
    }
}
