//! Core-Domänentypen: Segmente und Schnittpunkt-Berechnung.

pub mod intersect;
pub mod segment;

pub use segment::Segment;
