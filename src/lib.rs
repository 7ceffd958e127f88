//! Segment-Sketch Library.
//! Interaktives Zeichnen von Liniensegmenten mit Live-Schnittpunktberechnung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppState, DrawTool, DrawToolKind, PointerButton, PointerEvent, SketchState, ToolManager,
};
pub use core::intersect::{SegmentIntersector, SweepLineIntersection};
pub use core::Segment;
pub use shared::SketchOptions;
