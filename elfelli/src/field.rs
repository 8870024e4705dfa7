use crate::charge::{Plate, PointCharge};
use crate::vector::Vec2;

pub trait Field<T> {
    fn at(&self, pos: Vec2) -> T;
}

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Distance(pub f32);

/// Force on a unit positive probe charge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Force(pub Vec2);

impl<'a> Field<Distance> for &'a [PointCharge] {
    fn at(&self, pos: Vec2) -> Distance {
        let mut d = Distance(f32::INFINITY);
        for c in *self {
            d = Distance(c.at(pos).0.min(d.0));
        }
        d
    }
}

impl<'a> Field<Distance> for &'a [Plate] {
    fn at(&self, pos: Vec2) -> Distance {
        let mut d = Distance(f32::INFINITY);
        for p in *self {
            d = Distance(p.at(pos).0.min(d.0));
        }
        d
    }
}

impl<'a> Field<Force> for &'a [PointCharge] {
    fn at(&self, pos: Vec2) -> Force {
        let mut f = Vec2::ZERO;
        for c in *self {
            f += c.force(pos, 1.0);
        }
        Force(f)
    }
}

impl<'a> Field<Force> for &'a [Plate] {
    /// Terms whose closed form breaks down at `pos` are left out.
    fn at(&self, pos: Vec2) -> Force {
        let mut f = Vec2::ZERO;
        for (i, p) in self.iter().enumerate() {
            match p.force(pos, 1.0) {
                Some(x) => f += x,
                None => log::trace!("dropping plate {} term at ({}, {})", i, pos.x, pos.y),
            }
        }
        Force(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    #[test]
    fn nearest_distance() {
        let charges = [
            PointCharge::new(vec2(0.0, 0.0), 1.0),
            PointCharge::new(vec2(10.0, 0.0), -1.0),
        ];
        let d: Distance = charges.as_slice().at(vec2(7.0, 0.0));
        assert_eq!(d, Distance(3.0));

        let none: &[PointCharge] = &[];
        let d: Distance = none.at(vec2(1.0, 1.0));
        assert_eq!(d, Distance(f32::INFINITY));
    }

    #[test]
    fn forces_superpose() {
        let charges = [
            PointCharge::new(vec2(-10.0, 0.0), 1.0),
            PointCharge::new(vec2(10.0, 0.0), 1.0),
        ];
        let f: Force = charges.as_slice().at(vec2(0.0, 0.0));
        assert_eq!(f, Force(Vec2::ZERO));

        let f: Force = charges.as_slice().at(vec2(0.0, 10.0));
        assert_eq!(f.0.x, 0.0);
        assert!(f.0.y > 0.0);
    }

    #[test]
    fn plate_terms_off_the_line_only() {
        let plates = [
            Plate::new(vec2(0.0, 0.0), vec2(100.0, 0.0), 1.0).unwrap(),
            Plate::new(vec2(0.0, 50.0), vec2(100.0, 50.0), 1.0).unwrap(),
        ];
        // on the first plate's line, only the second one contributes
        let f: Force = plates.as_slice().at(vec2(150.0, 0.0));
        let g = plates[1].force(vec2(150.0, 0.0), 1.0).unwrap();
        assert_eq!(f, Force(g));
    }
}
