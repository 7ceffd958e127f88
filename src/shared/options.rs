//! Zentrale Konfiguration für den Segment-Sketch-Editor.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Toleranz für Punktvergleiche und das Zusammenführen naher Schnittpunkte.
pub const MERGE_TOLERANCE: f32 = 1e-4;

// ── Darstellung ─────────────────────────────────────────────────────

/// Darstellungsradius der Schnittpunkt-Marker (Modell-Einheiten).
pub const POINT_MARKER_RADIUS: f32 = 5.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `segment_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SketchOptions {
    /// Toleranz für das Zusammenführen naher Schnittpunkte
    pub merge_tolerance: f32,
    /// Darstellungsradius der Schnittpunkt-Marker
    pub point_marker_radius: f32,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            merge_tolerance: MERGE_TOLERANCE,
            point_marker_radius: POINT_MARKER_RADIUS,
        }
    }
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("segment_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("segment_sketch.toml")
    }
}
