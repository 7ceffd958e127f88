//! Schnittpunkt-Berechnung für Liniensegmente.
//!
//! Der Store konsumiert die Berechnung ausschließlich über den
//! `SegmentIntersector`-Trait; `SweepLineIntersection` ist die
//! mitgelieferte Sweep-Line-Implementierung. Kreis- und Bogensegmente
//! sind hier bewusst nicht abgebildet.

mod pairwise;
mod sweep;

pub use pairwise::segment_segment_intersection;
pub use sweep::SweepLineIntersection;

use glam::Vec2;

use crate::core::Segment;

/// Schnittstelle des geometrischen Schnittpunkt-Dienstes.
///
/// Die Berechnung ist eine reine Funktion der übergebenen Segmentliste;
/// zwischen Aufrufen bleibt kein Zustand erhalten.
pub trait SegmentIntersector {
    /// Berechnet alle paarweisen Schnittpunkte der übergebenen Segmente.
    ///
    /// Das Ergebnis ist nach (x, y) sortiert; nah beieinanderliegende
    /// Punkte sind innerhalb der Dienst-Toleranz zusammengeführt.
    /// Nicht-endliche Koordinaten führen zu einem Fehler, nie zu einem
    /// stillen leeren Ergebnis.
    fn intersections(&self, segments: &[Segment]) -> anyhow::Result<Vec<Vec2>>;
}
