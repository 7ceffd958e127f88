//! Geteilte Konstanten und Laufzeit-Optionen.

pub mod options;

pub use options::SketchOptions;
pub use options::{MERGE_TOLERANCE, POINT_MARKER_RADIUS};
