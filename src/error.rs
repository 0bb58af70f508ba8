use thiserror::Error;

/// Top-level error type for venue imports.
///
/// Each variant maps onto one failure category of the import pipeline.
/// `MalformedInput` is fatal for the whole run, except for the content of a
/// visible label, which only fails that label. The other categories are
/// isolated to the shape (or label, or color step) that raised them.
#[derive(Debug, Error)]
pub enum VenueError {
    #[error(transparent)]
    MalformedInput(#[from] InputError),

    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error(transparent)]
    InvalidMaterial(#[from] MaterialError),

    #[error(transparent)]
    GeometryOperationFailed(#[from] OperationError),
}

/// Errors raised while reading and validating the input document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported input file {0}: expected a .json file")]
    UnsupportedExtension(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shape {shape}: missing required key `{key}`")]
    MissingKey { shape: usize, key: &'static str },
}

/// Errors related to the input polygons themselves.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has {count} vertices, at least 3 are required")]
    TooFewVertices { count: usize },

    #[error("cannot compute the origin of an empty point sequence")]
    EmptyPointSet,

    #[error("extrusion thickness must be positive and finite, got {0}")]
    InvalidThickness(f64),

    #[error("coordinate is not finite: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon is self-intersecting")]
    SelfIntersecting,
}

/// Errors raised while converting a material record into vertex colors.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("malformed color {0:?}: expected #RRGGBB")]
    MalformedColor(String),

    #[error("opacity {0} is outside [0, 1]")]
    OpacityOutOfRange(f64),
}

/// Errors raised by geometry operations (solidify, boolean, tessellation).
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("solid not found in the kernel store")]
    SolidNotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`VenueError`].
pub type Result<T> = std::result::Result<T, VenueError>;
