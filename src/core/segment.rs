//! Liniensegment-Datentyp der Zeichenfläche.

use glam::Vec2;

/// Gerades Liniensegment zwischen zwei Punkten (Modell-Koordinaten).
///
/// Reiner Werttyp ohne Identität; ein entartetes Segment (Start == Ende)
/// ist zulässig, liefert aber keine Schnittpunkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt
    pub start: Vec2,
    /// Endpunkt
    pub end: Vec2,
}

impl Segment {
    /// Erstellt ein Segment von `start` nach `end`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Länge des Segments.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Sind alle Koordinaten endlich (keine NaN/Inf)?
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Entartet: Start und Ende fallen innerhalb der Toleranz zusammen.
    pub fn is_degenerate(&self, tolerance: f32) -> bool {
        (self.start.x - self.end.x).abs() <= tolerance
            && (self.start.y - self.end.y).abs() <= tolerance
    }
}
