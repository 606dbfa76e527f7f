// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Stick-figure geometry.
//!
//! Pure functions over keypoints: head position, screen-relative side
//! assignment, and the outline of a tapered stick.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::pose::{Keypoint, Point};

/// Average position of the reliable face landmarks.
///
/// Only keypoints whose name is in `face_names` and whose confidence is strictly
/// above `threshold` take part. Returns `None` when no landmark qualifies.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn face_center<S: AsRef<str>>(keypoints: &[Keypoint], face_names: &[S], threshold: f32) -> Option<Point> {
    let (sum_x, sum_y, count) = keypoints
        .iter()
        .filter(|kp| {
            kp.name
                .as_deref()
                .is_some_and(|name| face_names.iter().any(|f| f.as_ref() == name))
        })
        .filter(|kp| kp.is_reliable(threshold))
        .fold((0.0f32, 0.0f32, 0usize), |(sx, sy, n), kp| (sx + kp.x, sy + kp.y, n + 1));

    (count > 0).then(|| Point::new(sum_x / count as f32, sum_y / count as f32))
}

/// Order a pair of keypoints as `(left, right)` on screen.
///
/// The point with the strictly smaller x is left. On a tie the second argument
/// is taken as left. Semantic names are ignored: model labels are camera-relative
/// while the pictogram is drawn as a mirrored self-view.
#[must_use]
pub fn split_left_right<'a>(first: &'a Keypoint, second: &'a Keypoint) -> (&'a Keypoint, &'a Keypoint) {
    if first.x < second.x {
        (first, second)
    } else {
        (second, first)
    }
}

/// Corners of the trapezoid joining a circle of radius `r1` at `p1` to a circle
/// of radius `r2` at `p2`, in drawing order.
///
/// With `θ` the direction from `p1` to `p2` rotated by 90°, the corners are
/// `p1 + r1·θ`, `p2 + r2·θ`, `p2 + r2·(θ+π)`, `p1 + r1·(θ+π)`.
#[must_use]
pub fn stick_outline(p1: Point, r1: f32, p2: Point, r2: f32) -> [Point; 4] {
    let theta = (p2.y - p1.y).atan2(p2.x - p1.x) + FRAC_PI_2;
    let opposite = theta + PI;

    [
        p1.offset(theta, r1),
        p2.offset(theta, r2),
        p2.offset(opposite, r2),
        p1.offset(opposite, r1),
    ]
}

/// Radii of the root, middle and end joints of a limb.
///
/// Each joint level shrinks the previous radius by `falloff`, starting from
/// `base * falloff` at the root.
#[must_use]
pub fn joint_radii(base: f32, falloff: f32) -> [f32; 3] {
    let root = base * falloff;
    let mid = root * falloff;
    [root, mid, mid * falloff]
}
