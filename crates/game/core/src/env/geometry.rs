use std::f64::consts::TAU;

/// Cartesian point in story space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Angle of the vector from `self` to `other`.
    pub fn heading_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Polar/cartesian conversion around a story's center.
pub trait StoryGeometry {
    fn distance_from_center(&self, point: Point) -> f64;

    /// Angle in `[0, 2π)`.
    fn angle_from_center(&self, point: Point) -> f64;

    fn position_from_center(&self, angle: f64, distance: f64) -> Point;
}

/// Normalizes an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}
