//! Kreissegment-Tool — Platzhalter, noch nicht implementiert.
//!
//! Auswählbar, aber alle Pointer-Events laufen ins Leere, bis der
//! Schnittpunkt-Dienst Kreisgeometrie beherrscht. Das Tool erzeugt nie
//! ein temporäres Segment.

use glam::Vec2;

use crate::app::events::PointerButton;
use crate::app::state::SketchState;

use super::{DrawTool, DrawToolKind};

/// Kreissegment-Tool (Platzhalter)
pub struct CircleSegmentTool;

impl CircleSegmentTool {
    /// Erstellt das Platzhalter-Tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CircleSegmentTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTool for CircleSegmentTool {
    fn kind(&self) -> DrawToolKind {
        DrawToolKind::CircleSegment
    }

    fn name(&self) -> &str {
        "⚪ Kreissegment"
    }

    fn description(&self) -> &str {
        "Noch nicht implementiert"
    }

    fn status_text(&self) -> &str {
        "Kreissegment ist noch nicht verfügbar"
    }

    fn on_pointer_down(
        &mut self,
        _button: PointerButton,
        _pos: Vec2,
        _sketch: &mut SketchState,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}
