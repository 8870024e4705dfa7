use crate::charge::{Plate, PointCharge};
use crate::error::Result;
use crate::field::{Distance, Field, Force};
use crate::vector::Vec2;

/// Most point charges a scene holds. Further additions are rejected.
pub const MAX_POINT_CHARGES: usize = 1024;

/// Identifies an object in a [`Scene`] by kind and position within that kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Point(usize),
    Plate(usize),
}

impl ObjectId {
    /// Flat numbering used by older front ends: point charges keep their
    /// index, plates are numbered from [`MAX_POINT_CHARGES`] upwards.
    pub fn to_legacy_index(self) -> usize {
        match self {
            ObjectId::Point(i) => i,
            ObjectId::Plate(i) => MAX_POINT_CHARGES + i,
        }
    }

    pub fn from_legacy_index(n: usize) -> Self {
        if n < MAX_POINT_CHARGES {
            ObjectId::Point(n)
        } else {
            ObjectId::Plate(n - MAX_POINT_CHARGES)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Object<'s> {
    Point(&'s PointCharge),
    Plate(&'s Plate),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Removed {
    Point(PointCharge),
    Plate(Plate),
}

/// The charges that make up a field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    charges: Vec<PointCharge>,
    plates: Vec<Plate>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty() && self.plates.is_empty()
    }

    /// Adds a point charge, or returns `None` if the scene already holds
    /// [`MAX_POINT_CHARGES`] of them.
    pub fn add_charge(&mut self, position: Vec2, charge: f32) -> Option<ObjectId> {
        if self.charges.len() >= MAX_POINT_CHARGES {
            log::warn!(
                "scene is full, ignoring point charge at ({}, {})",
                position.x,
                position.y
            );
            return None;
        }
        self.charges.push(PointCharge::new(position, charge));
        Some(ObjectId::Point(self.charges.len() - 1))
    }

    pub fn add_plate(&mut self, a: Vec2, b: Vec2, charge: f32) -> Result<ObjectId> {
        self.plates.push(Plate::new(a, b, charge)?);
        Ok(ObjectId::Plate(self.plates.len() - 1))
    }

    pub fn get(&self, id: ObjectId) -> Option<Object<'_>> {
        match id {
            ObjectId::Point(i) => self.charges.get(i).map(Object::Point),
            ObjectId::Plate(i) => self.plates.get(i).map(Object::Plate),
        }
    }

    /// Removes an object. Objects of the same kind after it move down by one.
    pub fn remove(&mut self, id: ObjectId) -> Option<Removed> {
        match id {
            ObjectId::Point(i) if i < self.charges.len() => {
                Some(Removed::Point(self.charges.remove(i)))
            }
            ObjectId::Plate(i) if i < self.plates.len() => {
                Some(Removed::Plate(self.plates.remove(i)))
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.charges.clear();
        self.plates.clear();
    }

    /// Moves a point charge to `position`, or a plate so that its midpoint
    /// lands on `position`. Returns false for an unknown id.
    pub fn move_to(&mut self, id: ObjectId, position: Vec2) -> bool {
        match id {
            ObjectId::Point(i) => match self.charges.get_mut(i) {
                Some(c) => {
                    c.position = position;
                    true
                }
                None => false,
            },
            ObjectId::Plate(i) => match self.plates.get_mut(i) {
                Some(p) => {
                    let offset = position - p.midpoint();
                    p.translate(offset);
                    true
                }
                None => false,
            },
        }
    }

    pub fn set_charge(&mut self, id: ObjectId, charge: f32) -> bool {
        let found = match id {
            ObjectId::Point(i) => self.charges.get_mut(i).map(|c| c.charge = charge),
            ObjectId::Plate(i) => self.plates.get_mut(i).map(|p| p.charge = charge),
        };
        found.is_some()
    }

    /// The object under `position`: the most recently added point charge
    /// within `radius`, otherwise the most recently added plate within
    /// `radius` of its segment.
    pub fn object_at(&self, position: Vec2, radius: f32) -> Option<ObjectId> {
        let point = self
            .charges
            .iter()
            .rposition(|c| c.at(position).0 < radius)
            .map(ObjectId::Point);
        point.or_else(|| {
            self.plates
                .iter()
                .rposition(|p| p.at(position).0 < radius)
                .map(ObjectId::Plate)
        })
    }

    /// Net force on a probe of charge `probe` at `position`: the scene's
    /// [`Force`] field scaled by the probe.
    ///
    /// Undefined (NaN) exactly on a point charge. Plate terms whose closed
    /// form breaks down on the plate's line are left out.
    pub fn force_at(&self, position: Vec2, probe: f32) -> Vec2 {
        let f: Force = self.at(position);
        f.0 * probe
    }
}

impl Field<Force> for Scene {
    fn at(&self, pos: Vec2) -> Force {
        let c: Force = self.charges.as_slice().at(pos);
        let p: Force = self.plates.as_slice().at(pos);
        Force(c.0 + p.0)
    }
}

impl Field<Distance> for Scene {
    /// Distance to the nearest point charge or plate.
    fn at(&self, pos: Vec2) -> Distance {
        let c: Distance = self.charges.as_slice().at(pos);
        let p: Distance = self.plates.as_slice().at(pos);
        Distance(c.0.min(p.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;
    use approx::assert_relative_eq;

    #[test]
    fn point_charges_are_capped() {
        let mut scene = Scene::new();
        for i in 0..MAX_POINT_CHARGES {
            assert_eq!(
                scene.add_charge(vec2(i as f32, 0.0), 1.0),
                Some(ObjectId::Point(i))
            );
        }
        assert_eq!(scene.add_charge(vec2(0.0, 5.0), 1.0), None);
        assert_eq!(scene.charges().len(), MAX_POINT_CHARGES);
        // plates are not limited by the point charge cap
        assert!(scene.add_plate(vec2(0.0, 0.0), vec2(1.0, 0.0), 1.0).is_ok());
    }

    #[test]
    fn legacy_indices() {
        assert_eq!(ObjectId::Point(3).to_legacy_index(), 3);
        assert_eq!(ObjectId::Plate(2).to_legacy_index(), 1026);
        assert_eq!(ObjectId::from_legacy_index(1023), ObjectId::Point(1023));
        assert_eq!(ObjectId::from_legacy_index(1024), ObjectId::Plate(0));
    }

    #[test]
    fn remove_shifts_later_objects() {
        let mut scene = Scene::new();
        scene.add_charge(vec2(0.0, 0.0), 1.0);
        scene.add_charge(vec2(1.0, 0.0), 2.0);
        scene.add_charge(vec2(2.0, 0.0), 3.0);

        let removed = scene.remove(ObjectId::Point(1));
        assert_eq!(
            removed,
            Some(Removed::Point(PointCharge::new(vec2(1.0, 0.0), 2.0)))
        );
        match scene.get(ObjectId::Point(1)) {
            Some(Object::Point(c)) => assert_eq!(c.charge, 3.0),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(scene.remove(ObjectId::Point(2)), None);
        assert_eq!(scene.remove(ObjectId::Plate(0)), None);
    }

    #[test]
    fn picking_prefers_latest_point_charge() {
        let mut scene = Scene::new();
        scene
            .add_plate(vec2(-50.0, 0.0), vec2(50.0, 0.0), 1.0)
            .unwrap();
        scene.add_charge(vec2(0.0, 0.0), 1.0);
        scene.add_charge(vec2(4.0, 0.0), -1.0);

        assert_eq!(scene.object_at(vec2(2.0, 0.0), 10.0), Some(ObjectId::Point(1)));
        assert_eq!(scene.object_at(vec2(-30.0, 3.0), 10.0), Some(ObjectId::Plate(0)));
        assert_eq!(scene.object_at(vec2(0.0, 40.0), 10.0), None);
    }

    #[test]
    fn moving_objects() {
        let mut scene = Scene::new();
        let c = scene.add_charge(vec2(0.0, 0.0), 1.0).unwrap();
        let p = scene.add_plate(vec2(0.0, 0.0), vec2(10.0, 0.0), 1.0).unwrap();

        assert!(scene.move_to(c, vec2(5.0, 5.0)));
        assert!(scene.move_to(p, vec2(0.0, 20.0)));
        assert!(!scene.move_to(ObjectId::Point(7), vec2(0.0, 0.0)));

        assert_eq!(scene.charges()[0].position, vec2(5.0, 5.0));
        assert_eq!(scene.plates()[0].a(), vec2(-5.0, 20.0));
        assert_eq!(scene.plates()[0].b(), vec2(5.0, 20.0));

        assert!(scene.set_charge(p, -3.0));
        assert_eq!(scene.plates()[0].charge, -3.0);
    }

    #[test]
    fn zero_charge_has_no_field() {
        let mut scene = Scene::new();
        scene.add_charge(vec2(0.0, 0.0), 0.0);
        assert_eq!(scene.force_at(vec2(10.0, 3.0), 1.0), Vec2::ZERO);
    }

    #[test]
    fn opposite_charges_field_is_parallel_to_axis() {
        let mut scene = Scene::new();
        scene.add_charge(vec2(-50.0, 0.0), 3.0);
        scene.add_charge(vec2(50.0, 0.0), -3.0);

        for y in [-80.0, -10.0, 25.0, 120.0] {
            let f = scene.force_at(vec2(0.0, y), 1.0);
            assert!(f.x > 0.0);
            assert_relative_eq!(f.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn probe_scales_the_field() {
        let mut scene = Scene::new();
        scene.add_charge(vec2(0.0, 0.0), 2.0);
        scene.add_plate(vec2(-50.0, 30.0), vec2(50.0, 30.0), -1.0).unwrap();

        let pos = vec2(20.0, -15.0);
        let unit: Force = scene.at(pos);
        assert_eq!(scene.force_at(pos, 1.0), unit.0);
        assert_eq!(scene.force_at(pos, -3.0), unit.0 * -3.0);
    }

    #[test]
    fn plate_line_is_skipped_not_poisoning() {
        let mut scene = Scene::new();
        scene.add_plate(vec2(0.0, 0.0), vec2(100.0, 0.0), 1.0).unwrap();
        scene.add_charge(vec2(200.0, 50.0), 1.0);
        let f = scene.force_at(vec2(150.0, 0.0), 1.0);
        assert!(f.is_finite());
        assert!(f != Vec2::ZERO);
    }
}
