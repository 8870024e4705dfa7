use crate::config::TraceConfig;
use crate::scene::{ObjectId, Scene};
use crate::vector::{self, Vec2};

/// Why a line stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Left the escape radius after the grace distance.
    Escaped,
    /// Hit the hard step cap.
    Runaway,
    /// Came within the capture radius of a charge or plate.
    Absorbed(ObjectId),
    /// The field had no direction where the particle stood.
    Stalled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop(Termination),
}

impl Step {
    #[inline]
    pub fn is_continue(&self) -> bool {
        matches!(self, Step::Continue)
    }
}

/// A massless test particle following the field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TracerParticle {
    pub position: Vec2,
    /// Probe charge. Only its sign matters for the direction of travel.
    pub charge: f32,
    pub steps: u32,
}

impl TracerParticle {
    pub fn new(position: Vec2, charge: f32) -> Self {
        Self {
            position,
            charge,
            steps: 0,
        }
    }
}

/// Moves particles through the field of a scene in fixed length steps.
#[derive(Copy, Clone, Debug)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a TraceConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a TraceConfig) -> Self {
        Self { scene, config }
    }

    /// Advances `p` by one step along the field and checks whether its line
    /// ends there. The particle has already moved when `Stop` is returned,
    /// except for [`Termination::Stalled`].
    pub fn step(&self, p: &mut TracerParticle) -> Step {
        let f = self.scene.force_at(p.position, p.charge);
        let dir = match vector::direction(f) {
            Some(dir) => dir,
            None => return Step::Stop(Termination::Stalled),
        };

        p.position += dir * self.config.step_length;
        p.steps += 1;

        match self.check(p) {
            Some(t) => Step::Stop(t),
            None => Step::Continue,
        }
    }

    fn check(&self, p: &TracerParticle) -> Option<Termination> {
        let c = self.config;

        if p.steps > c.escape_steps() {
            if p.position.length() > c.escape_radius {
                return Some(Termination::Escaped);
            }
            if p.steps > c.max_steps {
                return Some(Termination::Runaway);
            }
        }

        if let Some(i) = self
            .scene
            .charges()
            .iter()
            .position(|charge| charge.captures(p.position, c.charge_capture_radius))
        {
            return Some(Termination::Absorbed(ObjectId::Point(i)));
        }

        self.scene
            .plates()
            .iter()
            .position(|plate| plate.captures(p.position, c.plate_capture_radius))
            .map(|i| Termination::Absorbed(ObjectId::Plate(i)))
    }
}
