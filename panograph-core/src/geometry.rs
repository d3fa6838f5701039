//! Planar and spherical helpers used to weight and orient candidate edges.
//!
//! All functions are pure and assume finite inputs.

use std::f64::consts::PI;

/// A point in the plane.
///
/// Panorama locations are projected as `x = longitude`, `y = latitude`, both
/// in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2 {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Projects the coordinate onto the plane as `(longitude, latitude)`.
    #[must_use]
    pub const fn to_planar(self) -> Point2 {
        Point2::new(self.longitude, self.latitude)
    }
}

/// Euclidean distance between two points.
///
/// # Examples
/// ```
/// use panograph_core::{Point2, distance};
///
/// assert_eq!(distance(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)), 5.0);
/// ```
#[must_use]
pub fn distance(p1: Point2, p2: Point2) -> f64 {
    let delta_x = p2.x - p1.x;
    let delta_y = p2.y - p1.y;
    (delta_x * delta_x + delta_y * delta_y).sqrt()
}

/// Initial bearing in degrees from `from` toward `to`.
///
/// Uses the spherical bearing terms with `atan2(y, x)` argument order. A
/// negative angle is corrected by adding 180°, not 360°, so results lie in
/// `[0, 180]` and do not always read as a compass heading; callers relying
/// on compass semantics must account for this.
///
/// # Examples
/// ```
/// use panograph_core::{GeoCoordinate, bearing};
///
/// let origin = GeoCoordinate::new(0.0, 0.0);
/// let north = GeoCoordinate::new(1.0, 0.0);
/// assert!((bearing(origin, north) - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn bearing(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let lat1 = degrees_to_radians(from.latitude);
    let lat2 = degrees_to_radians(to.latitude);
    let delta_lambda = degrees_to_radians(to.longitude - from.longitude);

    let x = lat2.cos() * delta_lambda.sin();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lambda.cos();

    let mut angle = y.atan2(x);
    if angle < 0.0 {
        angle += PI;
    }
    angle * 180.0 / PI
}

/// Converts degrees to radians as `d × π / 180`.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Restricts `value` to `[lo, hi]` as `min(max(value, lo), hi)`.
///
/// Unlike [`f64::clamp`] this never panics; when `lo > hi` the result is `hi`.
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// # Examples
/// ```
/// use panograph_core::wrap_degrees;
///
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// assert_eq!(wrap_degrees(720.0), 0.0);
/// ```
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Returns `true` when `point` lies strictly inside the box spanned by `min`
/// and `max`.
#[must_use]
pub fn bounds_contain(point: Point2, min: Point2, max: Point2) -> bool {
    min.x < point.x && point.x < max.x && min.y < point.y && point.y < max.y
}
