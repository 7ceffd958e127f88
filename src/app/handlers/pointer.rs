//! Handler für Pointer-Events der Zeichenfläche.

use crate::app::events::PointerEvent;
use crate::app::AppState;

/// Leitet ein Pointer-Event an das aktive Zeichen-Tool weiter.
///
/// Ohne aktives Tool sind Pointer-Events wirkungslos. Fehler aus dem
/// Schnittpunkt-Dienst (abgelehnter Commit) werden an den Aufrufer
/// durchgereicht, damit die Oberfläche sie anzeigen kann.
pub fn pointer_event(state: &mut AppState, event: PointerEvent) -> anyhow::Result<()> {
    let Some(tool) = state.tools.active_tool_mut() else {
        return Ok(());
    };
    match event {
        PointerEvent::Down { button, pos } => tool.on_pointer_down(button, pos, &mut state.sketch),
        PointerEvent::Move { pos, .. } => tool.on_pointer_move(pos, &mut state.sketch),
        PointerEvent::Up { button, pos } => tool.on_pointer_up(button, pos, &mut state.sketch),
    }
}
