//! DrawTool-Trait — Schnittstelle für alle Zeichen-Tools.

use glam::Vec2;

use crate::app::events::PointerButton;
use crate::app::state::SketchState;

use super::DrawToolKind;

/// Schnittstelle für alle Zeichen-Tools (Linie, Kreis, Bogen).
///
/// Tools übersetzen Pointer-Events in Store-Mutationen; höchstens ein
/// Tool ist gleichzeitig aktiv. Genau eine Geste darf in der Schwebe
/// sein, repräsentiert durch das temporäre Segment des Stores.
pub trait DrawTool {
    /// Tool-Art für Auswahl und Dispatch
    fn kind(&self) -> DrawToolKind;

    /// Anzeigename für Toolbar
    fn name(&self) -> &str;

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Statustext für das Properties-Panel (z.B. "Startpunkt klicken")
    fn status_text(&self) -> &str;

    /// Pointer-Down verarbeiten.
    fn on_pointer_down(
        &mut self,
        button: PointerButton,
        pos: Vec2,
        sketch: &mut SketchState,
    ) -> anyhow::Result<()>;

    /// Pointer-Move verarbeiten. Standard: ohne Wirkung.
    fn on_pointer_move(&mut self, _pos: Vec2, _sketch: &mut SketchState) -> anyhow::Result<()> {
        Ok(())
    }

    /// Pointer-Up verarbeiten. Standard: ohne Wirkung.
    fn on_pointer_up(
        &mut self,
        _button: PointerButton,
        _pos: Vec2,
        _sketch: &mut SketchState,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Bricht eine laufende Geste ab und räumt das temporäre Segment weg.
    /// Wird bei Sekundärklick-Abbrüchen und beim Tool-Wechsel gerufen.
    fn cancel(&mut self, _sketch: &mut SketchState) {}

    /// Ist eine Geste in der Schwebe?
    fn is_drawing(&self) -> bool {
        false
    }
}
