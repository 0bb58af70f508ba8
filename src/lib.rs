pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod importer;
pub mod kernel;
pub mod label;
pub mod material;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;
pub mod topology;

pub use config::{ImportOptions, LabelPlacement};
pub use document::Document;
pub use error::{Result, VenueError};
pub use importer::{import_file, ImportReport, Importer, ShapeFailure, Stage};
pub use kernel::{GeometryOps, PrismKernel};
pub use scene::{Scene, SceneObject, SceneSink};
