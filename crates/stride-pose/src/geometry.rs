//! Planar geometry over normalized landmark coordinates.

use stride_models::Point2D;

/// Angle in degrees at vertex `b`, formed by the rays `b -> a` and `b -> c`.
///
/// Computed from the absolute difference of the two atan2 bearings and
/// reflected into `[0, 180]`. Defined for all finite inputs; coincident
/// points degenerate to a zero bearing rather than an error.
pub fn angle(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut degrees = radians.to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

/// Euclidean distance between two points.
pub fn distance(p: Point2D, q: Point2D) -> f64 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}
