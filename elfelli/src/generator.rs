use std::f32::consts::TAU;

use crate::config::TraceConfig;
use crate::scene::{ObjectId, Scene};
use crate::tracer::{Step, Termination, Tracer, TracerParticle};
use crate::vector::{self, Vec2};

/// Where a field line starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Seed {
    pub source: ObjectId,
    /// Point on the source the line is drawn from.
    pub origin: Vec2,
    /// First traced position, a small offset away from the source.
    pub start: Vec2,
    /// Probe charge carried by the tracer particle.
    pub charge: f32,
}

/// One traced line, ready to be stroked as a polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldLine {
    pub source: ObjectId,
    pub termination: Termination,
    points: Vec<Vec2>,
}

impl FieldLine {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as interleaved `x, y` floats, e.g. for a vertex buffer.
    pub fn as_vertices(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}

/// Most seeds laid out around one point charge or along one plate.
pub const MAX_SEEDS_PER_OBJECT: usize = 1024;

/// Number of evenly spaced seeds for `density * |charge|`, and the spacing
/// parameter they are laid out by.
fn seed_count(density: f32, charge: f32) -> (usize, f32) {
    let n = density * charge.abs();
    if n.is_nan() || n <= 0.0 {
        return (0, n);
    }
    let max = MAX_SEEDS_PER_OBJECT as f32;
    if n > max {
        log::warn!(
            "charge {} asks for {} lines, drawing {}",
            charge,
            n,
            MAX_SEEDS_PER_OBJECT
        );
        return (MAX_SEEDS_PER_OBJECT, max);
    }
    (n.ceil() as usize, n)
}

/// Seeds for every line of `scene`: point charges first, then plates, each in
/// increasing angle or position along the plate.
pub fn seeds(scene: &Scene, config: &TraceConfig) -> Vec<Seed> {
    let mut out = Vec::new();

    for (i, c) in scene.charges().iter().enumerate() {
        if c.charge == 0.0 {
            continue;
        }
        let (count, n) = seed_count(config.lines_per_charge, c.charge);
        for k in 0..count {
            let angle = k as f32 * (TAU / n);
            out.push(Seed {
                source: ObjectId::Point(i),
                origin: c.position,
                start: c.position + vector::from_angle(angle) * config.seed_offset,
                charge: c.charge.signum(),
            });
        }
    }

    for (i, p) in scene.plates().iter().enumerate() {
        if p.charge == 0.0 {
            continue;
        }
        let (count, n) = seed_count(config.lines_per_plate_charge, p.charge);
        let normal = vector::normal(p.b() - p.a());
        for k in 0..count {
            let origin = p.point_at(k as f32 / n);
            for side in [-1.0, 1.0] {
                out.push(Seed {
                    source: ObjectId::Plate(i),
                    origin,
                    start: origin + normal * (side * config.plate_seed_offset),
                    charge: p.charge,
                });
            }
        }
    }

    out
}

/// Follows one seed until its line ends.
pub fn trace_line(scene: &Scene, seed: &Seed, config: &TraceConfig) -> FieldLine {
    let tracer = Tracer::new(scene, config);
    let mut p = TracerParticle::new(seed.start, seed.charge);
    let mut points = vec![seed.origin, seed.start];

    let termination = loop {
        match tracer.step(&mut p) {
            Step::Continue => points.push(p.position),
            Step::Stop(t) => break t,
        }
    };
    if termination != Termination::Stalled {
        points.push(p.position);
    }

    FieldLine {
        source: seed.source,
        termination,
        points,
    }
}

/// Traces every field line of `scene`.
pub fn trace_all(scene: &Scene, config: &TraceConfig) -> Vec<FieldLine> {
    let lines: Vec<FieldLine> = seeds(scene, config)
        .iter()
        .map(|seed| trace_line(scene, seed, config))
        .collect();
    log::debug!(
        "traced {} lines, {} points",
        lines.len(),
        lines.iter().map(FieldLine::len).sum::<usize>()
    );
    lines
}

/// A scene together with the config it is traced with.
pub struct Generator<'a> {
    scene: &'a Scene,
    config: TraceConfig,
}

impl<'a> Generator<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self::with_config(scene, TraceConfig::default())
    }

    pub fn with_config(scene: &'a Scene, config: TraceConfig) -> Self {
        Self { scene, config }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn seeds(&self) -> Vec<Seed> {
        seeds(self.scene, &self.config)
    }

    pub fn trace_all(&self) -> Vec<FieldLine> {
        trace_all(self.scene, &self.config)
    }
}
