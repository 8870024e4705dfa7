use crate::error::{Error, Result};
use crate::field::{Distance, Field};
use crate::vector::{vec2, Vec2};

/// A plate's field is scaled down by its length in units of this many pixels.
const PLATE_LENGTH_UNIT: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointCharge {
    pub position: Vec2,
    pub charge: f32,
}

impl PointCharge {
    #[inline]
    pub fn new(position: Vec2, charge: f32) -> Self {
        Self { position, charge }
    }

    /// Force on a probe of charge `probe` at `pos`.
    ///
    /// Inverse-square and repulsive for like signs. Undefined (NaN) at the
    /// charge's own position.
    pub fn force(&self, pos: Vec2, probe: f32) -> Vec2 {
        let v = self.position - pos;
        let dist = v.length();
        let t = v.normalize() / (dist * dist);
        -(t * (probe * self.charge))
    }

    #[inline]
    pub fn captures(&self, pos: Vec2, radius: f32) -> bool {
        pos.distance(self.position) <= radius
    }
}

impl Field<Distance> for PointCharge {
    fn at(&self, pos: Vec2) -> Distance {
        Distance(pos.distance(self.position))
    }
}

/// A straight segment from `a` to `b` carrying `charge` spread uniformly
/// along its length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plate {
    a: Vec2,
    b: Vec2,
    pub charge: f32,
}

impl Plate {
    pub fn new(a: Vec2, b: Vec2, charge: f32) -> Result<Self> {
        if a == b {
            return Err(Error::DegeneratePlate { x: a.x, y: a.y });
        }
        Ok(Self { a, b, charge })
    }

    #[inline]
    pub fn a(&self) -> Vec2 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Vec2 {
        self.b
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) / 2.0
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.b - self.a).length()
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.a += offset;
        self.b += offset;
    }

    /// Point at parameter `t` along the plate, `0` at `a` and `1` at `b`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.a + (self.b - self.a) * t
    }

    /// Parameter of the foot of the perpendicular from `pos` onto the
    /// plate's line. Inside the plate when in `[0, 1]`.
    pub fn project(&self, pos: Vec2) -> f32 {
        let d = self.b - self.a;
        let length = d.length();
        ((pos.x - self.a.x) * d.x + (pos.y - self.a.y) * d.y) / (length * length)
    }

    /// True when the foot of the perpendicular from `pos` falls on the
    /// plate and `pos` is within `radius` of it.
    pub fn captures(&self, pos: Vec2, radius: f32) -> bool {
        let u = self.project(pos);
        if !(0.0..=1.0).contains(&u) {
            return false;
        }
        let d = self.point_at(u) - pos;
        d.length_squared() <= radius * radius
    }

    /// Force on a probe of charge `probe` at `pos`, from the closed form
    /// field of a finite uniformly charged segment.
    ///
    /// `None` when the closed form breaks down: on the plate itself and
    /// anywhere on the infinite line through it, where the cross term
    /// `ax * by - ay * bx` vanishes.
    pub fn force(&self, pos: Vec2, probe: f32) -> Option<Vec2> {
        let ax = self.a.x - pos.x;
        let ay = self.a.y - pos.y;
        let bx = self.b.x - self.a.x;
        let by = self.b.y - self.a.y;

        let c = ax * by - ay * bx;
        let t1 = ((by * by + ay * by + bx * bx + ax * bx) / c).atan();
        let t0 = ((ay * by + ax * bx) / c).atan();
        let l1 = (by * by + 2.0 * ay * by + bx * bx + 2.0 * ax * bx + ay * ay + ax * ax).ln();
        let l0 = (ay * ay + ax * ax).ln();
        let den = (2.0 * by * by + 2.0 * bx * bx) * (t1 / c - t0 / c);

        let v = vec2(
            (2.0 * by * t1 + bx * l1 - 2.0 * by * t0 - l0 * bx) / den,
            (-2.0 * bx * t1 + by * l1 + 2.0 * bx * t0 - l0 * by) / den,
        );

        let dist = v.length();
        let length = (bx * bx + by * by).sqrt() / PLATE_LENGTH_UNIT;
        let t = v.normalize() / (dist * dist);
        let f = -(t * (probe * self.charge / length));

        f.is_finite().then(|| f)
    }
}

impl Field<Distance> for Plate {
    /// Distance to the closest point of the segment.
    fn at(&self, pos: Vec2) -> Distance {
        let u = self.project(pos).clamp(0.0, 1.0);
        Distance(pos.distance(self.point_at(u)))
    }
}
