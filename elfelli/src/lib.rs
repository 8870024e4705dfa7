//! Electric field lines of point charges and charged plates in 2D.
//!
//! A [`Scene`] holds the charges, [`trace_all`] turns it into a set of
//! [`FieldLine`]s that a renderer can stroke as polylines.

mod charge;
mod config;
mod error;
mod field;
mod generator;
mod scene;
mod tracer;

pub mod vector;
pub mod xml;

pub use charge::{Plate, PointCharge};
pub use config::TraceConfig;
pub use error::{Error, Result};
pub use field::{Distance, Field, Force};
pub use generator::{
    seeds, trace_all, trace_line, FieldLine, Generator, Seed, MAX_SEEDS_PER_OBJECT,
};
pub use scene::{Object, ObjectId, Removed, Scene, MAX_POINT_CHARGES};
pub use tracer::{Step, Termination, Tracer, TracerParticle};
pub use vector::Vec2;
