//! Pointer-Eingabe-Events der Zeichenfläche.
//!
//! Positionen sind bereits vom Rendering-Layer in Modell-Koordinaten
//! transformiert; das Routing übernimmt `handlers::pointer`.

use glam::Vec2;

/// Taste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primärtaste (links): Geste beginnen bzw. festschreiben
    Primary,
    /// Sekundärtaste (rechts): laufende Geste abbrechen
    Secondary,
    /// Alle übrigen Tasten: ohne Wirkung
    Other,
}

/// Diskretes Pointer-Event in Modell-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Taste gedrückt
    Down { button: PointerButton, pos: Vec2 },
    /// Pointer bewegt
    Move { button: PointerButton, pos: Vec2 },
    /// Taste losgelassen
    Up { button: PointerButton, pos: Vec2 },
}
