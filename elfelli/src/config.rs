use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Constants that shape the traced lines.
///
/// Every field has a default, so a TOML file only needs the ones it changes:
///
/// ```toml
/// step_length = 2.5
/// escape_radius = 1000.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Distance a tracer particle moves per step, regardless of field strength.
    pub step_length: f32,
    /// Path length after which particles are checked against `escape_radius`.
    pub escape_grace: f32,
    /// Distance from the origin beyond which a line is considered escaped.
    pub escape_radius: f32,
    /// Hard cap on steps per line.
    pub max_steps: u32,
    /// A line ends when it comes this close to a point charge.
    pub charge_capture_radius: f32,
    /// A line ends when it comes this close to a plate.
    pub plate_capture_radius: f32,
    /// Lines per unit of charge around a point charge.
    pub lines_per_charge: f32,
    /// Seed positions per unit of charge along a plate.
    pub lines_per_plate_charge: f32,
    /// Distance from a point charge to the first traced point.
    pub seed_offset: f32,
    /// Distance from a plate to the first traced point, on either side.
    pub plate_seed_offset: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            step_length: 5.0,
            escape_grace: 2000.0,
            escape_radius: 2000.0,
            max_steps: 10_000,
            charge_capture_radius: 5.0,
            plate_capture_radius: 3.0,
            lines_per_charge: 4.0,
            lines_per_plate_charge: 2.0,
            seed_offset: 12.0,
            plate_seed_offset: 5.0,
        }
    }
}

impl TraceConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks that every value is one tracing terminates with.
    pub fn validate(&self) -> Result<()> {
        fn check(field: &'static str, value: f32, ok: bool, reason: &'static str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(Error::ConfigValue {
                    field,
                    reason,
                    value: value.into(),
                })
            }
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        check(
            "step_length",
            self.step_length,
            positive(self.step_length),
            "must be positive and finite",
        )?;
        check(
            "escape_grace",
            self.escape_grace,
            non_negative(self.escape_grace),
            "must be non-negative and finite",
        )?;
        // an infinite radius only disables escaping, the step cap still ends lines
        check("escape_radius", self.escape_radius, self.escape_radius > 0.0, "must be positive")?;
        check(
            "max_steps",
            self.max_steps as f32,
            self.max_steps < u32::MAX,
            "must be below u32::MAX",
        )?;
        for (field, value) in [
            ("charge_capture_radius", self.charge_capture_radius),
            ("plate_capture_radius", self.plate_capture_radius),
            ("lines_per_charge", self.lines_per_charge),
            ("lines_per_plate_charge", self.lines_per_plate_charge),
            ("seed_offset", self.seed_offset),
            ("plate_seed_offset", self.plate_seed_offset),
        ] {
            check(field, value, non_negative(value), "must be non-negative and finite")?;
        }
        Ok(())
    }

    /// Steps a particle takes before the escape radius and the step cap are
    /// checked. Never more than `max_steps`, so the cap is always reached.
    #[inline]
    pub fn escape_steps(&self) -> u32 {
        let grace = (self.escape_grace / self.step_length) as u32;
        grace.min(self.max_steps)
    }
}
