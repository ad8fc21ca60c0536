pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Default inset applied to both ends of an arrow so the head and tail sit
/// outside the node markers instead of at their centers.
pub const ARROW_INSET: f64 = 0.8;

/// Shrinks the segment `from -> to` by `inset` from each end.
///
/// Coincident endpoints are returned unchanged: there is no direction to
/// inset along, and the caller still places the annotation at that point.
pub fn trim_segment(from: Point, to: Point, inset: f64) -> (Point, Point) {
    let dir: Vector = to - from;
    let len = dir.length();
    if len == 0.0 {
        return (from, to);
    }
    let unit = dir / len;
    (from + unit * inset, to - unit * inset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn trim_shortens_by_inset_from_each_end() {
        let (a, b) = trim_segment(point(0.0, 0.0), point(0.0, 10.0), ARROW_INSET);
        assert!(approx((b - a).length(), 10.0 - 2.0 * ARROW_INSET));
        assert!(approx(a.y, 0.8) && approx(b.y, 9.2));
        assert!(approx(a.x, 0.0) && approx(b.x, 0.0));
    }

    #[test]
    fn trim_keeps_direction_collinear() {
        let from = point(-4.0, 4.0);
        let to = point(-1.0, 2.0);
        let (a, b) = trim_segment(from, to, ARROW_INSET);
        let orig = to - from;
        let trimmed = b - a;
        // Cross product of collinear vectors is zero.
        assert!(approx(orig.x * trimmed.y - orig.y * trimmed.x, 0.0));
        assert!(approx(trimmed.length(), orig.length() - 1.6));
    }

    #[test]
    fn trim_of_coincident_points_is_identity() {
        let p = point(0.0, 10.0);
        let (a, b) = trim_segment(p, p, ARROW_INSET);
        assert_eq!(a, p);
        assert_eq!(b, p);
    }
}
