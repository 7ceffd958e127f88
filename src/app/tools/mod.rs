//! Trait-basiertes Zeichen-Tool-System.
//!
//! Jedes Zeichen-Tool implementiert den `DrawTool`-Trait und wird beim
//! `ToolManager` registriert. Der Manager hält das aktive Tool und
//! erzwingt die Abbruch-Semantik beim Tool-Wechsel: eine laufende Geste
//! überlebt den Wechsel nicht.

/// Bogensegment-Tool (Platzhalter).
pub mod arc_segment;
/// Kreissegment-Tool (Platzhalter).
pub mod circle_segment;
/// DrawTool-Trait — Schnittstelle für alle Zeichen-Tools.
mod draw_tool;
/// Liniensegment-Tool mit Zwei-Klick-Geste.
pub mod line_segment;

pub use draw_tool::DrawTool;

use crate::app::state::SketchState;

// ── Typen ────────────────────────────────────────────────────────

/// Art eines Zeichen-Tools — explizite Aufzählung für Auswahl und Dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawToolKind {
    /// Gerades Liniensegment (Zwei-Klick-Geste)
    LineSegment,
    /// Kreissegment (noch nicht implementiert)
    CircleSegment,
    /// Bogensegment (noch nicht implementiert)
    ArcSegment,
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Zeichen-Tools und das aktive Tool.
pub struct ToolManager {
    tools: Vec<Box<dyn DrawTool>>,
    active_index: Option<usize>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen neuen ToolManager mit vorregistrierten Standard-Tools.
    pub fn new() -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        manager.register(Box::new(line_segment::LineSegmentTool::new()));
        manager.register(Box::new(circle_segment::CircleSegmentTool::new()));
        manager.register(Box::new(arc_segment::ArcSegmentTool::new()));
        manager
    }

    /// Registriert ein neues Zeichen-Tool.
    pub fn register(&mut self, tool: Box<dyn DrawTool>) {
        self.tools.push(tool);
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Art und Name aller registrierten Tools zurück.
    pub fn tool_entries(&self) -> Vec<(DrawToolKind, &str)> {
        self.tools
            .iter()
            .map(|tool| (tool.kind(), tool.name()))
            .collect()
    }

    /// Setzt das aktive Zeichen-Tool; `None` deaktiviert.
    ///
    /// Das bisherige Tool wird vor dem Wechsel abgebrochen, damit kein
    /// temporäres Segment die Geste überlebt. Erneutes Auswählen der
    /// bereits aktiven Art ist ein No-Op; eine nicht registrierte Art
    /// lässt den Zustand unverändert.
    pub fn set_active(&mut self, kind: Option<DrawToolKind>, sketch: &mut SketchState) {
        let next = match kind {
            Some(kind) => match self.tools.iter().position(|tool| tool.kind() == kind) {
                Some(index) => Some(index),
                None => return,
            },
            None => None,
        };
        if next == self.active_index {
            return;
        }
        if let Some(old) = self.active_index {
            self.tools[old].cancel(sketch);
        }
        self.active_index = next;
    }

    /// Gibt die Art des aktiven Tools zurück.
    pub fn active_kind(&self) -> Option<DrawToolKind> {
        self.active_index.map(|index| self.tools[index].kind())
    }

    /// Gibt eine Referenz auf das aktive Tool zurück.
    pub fn active_tool(&self) -> Option<&dyn DrawTool> {
        self.active_index.map(|index| self.tools[index].as_ref())
    }

    /// Gibt eine mutable Referenz auf das aktive Tool zurück.
    pub fn active_tool_mut(&mut self) -> Option<&mut dyn DrawTool> {
        let index = self.active_index?;
        Some(self.tools[index].as_mut())
    }

    /// Bricht das aktive Tool ab und deaktiviert es.
    pub fn reset(&mut self, sketch: &mut SketchState) {
        if let Some(index) = self.active_index {
            self.tools[index].cancel(sketch);
        }
        self.active_index = None;
    }
}
