//! 2D vector maths.
//!
//! [`Vec2`] is `glam`'s; this module only adds the few helpers the tracer
//! needs on top of it.

pub use glam::{vec2, Vec2};

/// Unit vector pointing at `angle` radians, counter-clockwise from +x.
#[inline]
pub fn from_angle(angle: f32) -> Vec2 {
    vec2(angle.cos(), angle.sin())
}

/// Direction of `v`, or `None` when it has no usable direction
/// (zero length, NaN or infinite components).
#[inline]
pub fn direction(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Unit normal of the segment direction `d`, rotated clockwise: `(dy, -dx) / |d|`.
#[inline]
pub fn normal(d: Vec2) -> Vec2 {
    vec2(d.y, -d.x).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = vec2(3.0, 4.0);
        let b = vec2(1.0, -2.0);
        assert_eq!(a + b, vec2(4.0, 2.0));
        assert_eq!(a - b, vec2(2.0, 6.0));
        assert_eq!(a * 2.0, vec2(6.0, 8.0));
        assert_eq!(a / 2.0, vec2(1.5, 2.0));
        assert_eq!(-a, vec2(-3.0, -4.0));
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.distance(Vec2::ZERO), 5.0);
    }

    #[test]
    fn angles() {
        let up = from_angle(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_has_no_direction() {
        assert!(direction(Vec2::ZERO).is_none());
        assert!(direction(vec2(f32::NAN, 1.0)).is_none());
        assert_eq!(direction(vec2(0.0, 2.0)), Some(vec2(0.0, 1.0)));
    }

    #[test]
    fn segment_normal() {
        assert_eq!(normal(vec2(100.0, 0.0)), vec2(0.0, -1.0));
        assert_eq!(normal(vec2(0.0, 3.0)), vec2(1.0, 0.0));
    }
}
