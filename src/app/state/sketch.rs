//! Zentraler Zeichenflächen-Zustand: Segmente, temporäres Segment, Schnittpunkte.

use anyhow::Result;
use glam::Vec2;

use crate::core::intersect::{SegmentIntersector, SweepLineIntersection};
use crate::core::Segment;

/// Alleiniger Besitzer der Zeichenflächen-Daten.
///
/// Alle Mutationen laufen über diesen Store. Die Schnittpunktliste ist
/// abgeleitete Information: immer eine reine Funktion der aktuell
/// festgeschriebenen Segmentliste, neu berechnet bei jedem Commit. Das
/// temporäre Segment geht nie in die Schnittberechnung ein.
pub struct SketchState {
    /// Festgeschriebene Segmente in Einfüge-Reihenfolge (append-only)
    segments: Vec<Segment>,
    /// Laufende Geste: höchstens ein temporäres Segment
    temp_segment: Option<Segment>,
    /// Abgeleitete Schnittpunkte der festgeschriebenen Segmente
    intersection_points: Vec<Vec2>,
    /// Injizierter Schnittpunkt-Dienst
    intersector: Box<dyn SegmentIntersector>,
}

impl SketchState {
    /// Erstellt einen leeren Store mit der Standard-Sweep-Line-Implementierung.
    pub fn new() -> Self {
        Self::with_intersector(Box::new(SweepLineIntersection::new()))
    }

    /// Erstellt einen leeren Store mit injiziertem Schnittpunkt-Dienst.
    pub fn with_intersector(intersector: Box<dyn SegmentIntersector>) -> Self {
        Self {
            segments: Vec::new(),
            temp_segment: None,
            intersection_points: Vec::new(),
            intersector,
        }
    }

    /// Festgeschriebene Segmente in Einfüge-Reihenfolge.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Temporäres Segment der laufenden Geste, falls vorhanden.
    pub fn temp_segment(&self) -> Option<Segment> {
        self.temp_segment
    }

    /// Aktuelle Schnittpunkte der festgeschriebenen Segmente.
    pub fn intersection_points(&self) -> &[Vec2] {
        &self.intersection_points
    }

    /// Ersetzt das temporäre Segment im Ganzen (keine Validierung).
    pub fn set_temp_segment(&mut self, segment: Option<Segment>) {
        self.temp_segment = segment;
    }

    /// Schreibt das temporäre Segment fest und berechnet die Schnittpunkte neu.
    ///
    /// Ohne temporäres Segment ein gutartiger No-Op. Schlägt die
    /// Schnittberechnung fehl, bleibt auch das temporäre Segment erhalten.
    pub fn commit_temp_segment(&mut self) -> Result<()> {
        let Some(segment) = self.temp_segment else {
            return Ok(());
        };
        self.commit_segment(segment)?;
        self.temp_segment = None;
        Ok(())
    }

    /// Schreibt ein Segment direkt fest und berechnet die Schnittpunkte neu.
    ///
    /// Bei einem Fehler des Schnittpunkt-Dienstes (nicht-endliche
    /// Koordinaten) wird der Commit verworfen; Segmentliste und
    /// Schnittpunkte behalten ihre Werte von vor dem Commit.
    pub fn commit_segment(&mut self, segment: Segment) -> Result<()> {
        let mut candidate = self.segments.clone();
        candidate.push(segment);
        let points = self.intersector.intersections(&candidate)?;

        self.segments = candidate;
        self.intersection_points = points;
        log::debug!(
            "Segment festgeschrieben: {} Segmente, {} Schnittpunkte",
            self.segments.len(),
            self.intersection_points.len()
        );
        Ok(())
    }
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new()
    }
}
