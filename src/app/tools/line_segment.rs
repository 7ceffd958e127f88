//! Liniensegment-Tool: Zwei-Klick-Geste (Startpunkt klicken, Endpunkt klicken).
//!
//! Der erste Primärklick setzt den Startpunkt und ein temporäres Segment,
//! Pointer-Bewegungen ziehen dessen Endpunkt mit, der zweite Primärklick
//! schreibt das Segment fest. Sekundärklick bricht die Geste ab.
//! Pointer-Up hat bewusst keine Wirkung (Klick-Klick-Modell, kein Drag).

use glam::Vec2;

use crate::app::events::PointerButton;
use crate::app::state::SketchState;
use crate::core::Segment;

use super::{DrawTool, DrawToolKind};

/// Liniensegment-Tool
pub struct LineSegmentTool {
    /// Startpunkt der laufenden Geste (`None` = keine Geste)
    start: Option<Vec2>,
}

impl LineSegmentTool {
    /// Erstellt ein neues Liniensegment-Tool.
    pub fn new() -> Self {
        Self { start: None }
    }
}

impl Default for LineSegmentTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTool for LineSegmentTool {
    fn kind(&self) -> DrawToolKind {
        DrawToolKind::LineSegment
    }

    fn name(&self) -> &str {
        "📏 Liniensegment"
    }

    fn description(&self) -> &str {
        "Zeichnet ein gerades Liniensegment zwischen zwei geklickten Punkten"
    }

    fn status_text(&self) -> &str {
        match self.start {
            None => "Startpunkt klicken",
            Some(_) => "Endpunkt klicken — Rechtsklick bricht ab",
        }
    }

    fn on_pointer_down(
        &mut self,
        button: PointerButton,
        pos: Vec2,
        sketch: &mut SketchState,
    ) -> anyhow::Result<()> {
        match button {
            PointerButton::Primary => match self.start {
                None => {
                    self.start = Some(pos);
                    sketch.set_temp_segment(Some(Segment::new(pos, pos)));
                }
                Some(start) => {
                    // Klickposition ist der Endpunkt; bei abgelehntem Commit
                    // bleibt die Geste in der Schwebe (nächster Klick darf
                    // erneut festschreiben)
                    sketch.set_temp_segment(Some(Segment::new(start, pos)));
                    sketch.commit_temp_segment()?;
                    self.start = None;
                }
            },
            PointerButton::Secondary => {
                self.cancel(sketch);
            }
            PointerButton::Other => {}
        }
        Ok(())
    }

    fn on_pointer_move(&mut self, pos: Vec2, sketch: &mut SketchState) -> anyhow::Result<()> {
        if let Some(start) = self.start {
            sketch.set_temp_segment(Some(Segment::new(start, pos)));
        }
        Ok(())
    }

    // on_pointer_up: Standard-No-Op — festgeschrieben wird beim zweiten
    // Pointer-Down, nicht beim Loslassen.

    fn cancel(&mut self, sketch: &mut SketchState) {
        self.start = None;
        sketch.set_temp_segment(None);
    }

    fn is_drawing(&self) -> bool {
        self.start.is_some()
    }
}
