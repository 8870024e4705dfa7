use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A plate whose endpoints coincide has no direction and no field.
    #[error("plate endpoints must differ, both are at ({x}, {y})")]
    DegeneratePlate { x: f32, y: f32 },

    #[error("xml error on line {line}: {msg}")]
    Xml { line: usize, msg: String },

    /// The document is not an `elfelli-xml-1` scene.
    #[error("unsupported scene version `{0}`")]
    Version(String),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// A config value outside the range tracing can work with.
    #[error("invalid config: `{field}` {reason}, got {value}")]
    ConfigValue {
        field: &'static str,
        reason: &'static str,
        value: f64,
    },

    #[error("could not write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
