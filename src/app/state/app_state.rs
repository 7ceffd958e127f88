//! Hauptzustand der Anwendung.

use crate::app::tools::ToolManager;
use crate::core::intersect::SweepLineIntersection;
use crate::shared::SketchOptions;

use super::SketchState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichenflächen-Zustand (Segmente, temporäres Segment, Schnittpunkte)
    pub sketch: SketchState,
    /// Zeichen-Tool-Manager (Registrierung, aktives Tool)
    pub tools: ToolManager,
    /// Laufzeit-Optionen (Toleranz, Marker-Radius)
    pub options: SketchOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Tools und -Optionen.
    pub fn new() -> Self {
        Self::with_options(SketchOptions::default())
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen.
    pub fn with_options(options: SketchOptions) -> Self {
        let intersector = SweepLineIntersection::with_tolerance(options.merge_tolerance);
        Self {
            sketch: SketchState::with_intersector(Box::new(intersector)),
            tools: ToolManager::new(),
            options,
        }
    }

    /// Anzahl festgeschriebener Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.sketch.segments().len()
    }

    /// Anzahl aktueller Schnittpunkte (für UI-Anzeige)
    pub fn intersection_count(&self) -> usize {
        self.sketch.intersection_points().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
