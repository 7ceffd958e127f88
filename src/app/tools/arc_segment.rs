//! Bogensegment-Tool — Platzhalter, noch nicht implementiert.
//!
//! Verhält sich wie das Kreissegment-Tool: auswählbar, Pointer-Events
//! ohne Wirkung, kein temporäres Segment.

use glam::Vec2;

use crate::app::events::PointerButton;
use crate::app::state::SketchState;

use super::{DrawTool, DrawToolKind};

/// Bogensegment-Tool (Platzhalter)
pub struct ArcSegmentTool;

impl ArcSegmentTool {
    /// Erstellt das Platzhalter-Tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArcSegmentTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTool for ArcSegmentTool {
    fn kind(&self) -> DrawToolKind {
        DrawToolKind::ArcSegment
    }

    fn name(&self) -> &str {
        "◠ Bogensegment"
    }

    fn description(&self) -> &str {
        "Noch nicht implementiert"
    }

    fn status_text(&self) -> &str {
        "Bogensegment ist noch nicht verfügbar"
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
