//! Handler für die Tool-Auswahl (Aktivieren, Deaktivieren, Abbrechen).

use crate::app::tools::DrawToolKind;
use crate::app::AppState;

/// Aktiviert ein Zeichen-Tool.
///
/// Eine laufende Geste des bisherigen Tools wird vor dem Wechsel
/// verworfen (das temporäre Segment überlebt den Wechsel nicht).
pub fn select(state: &mut AppState, kind: DrawToolKind) {
    state.tools.set_active(Some(kind), &mut state.sketch);
    if let Some(tool) = state.tools.active_tool() {
        log::info!("Zeichen-Tool aktiviert: {}", tool.name());
    }
}

/// Deaktiviert das aktive Zeichen-Tool; Pointer-Events sind danach wirkungslos.
pub fn clear(state: &mut AppState) {
    state.tools.set_active(None, &mut state.sketch);
    log::info!("Zeichen-Tool deaktiviert");
}

/// Bricht die laufende Geste des aktiven Tools ab (Escape).
pub fn cancel(state: &mut AppState) {
    if let Some(tool) = state.tools.active_tool_mut() {
        tool.cancel(&mut state.sketch);
    }
}
