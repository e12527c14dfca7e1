use egui::Response;

use crate::intent::DrawingIntent;

/// Translate the egui drag lifecycle on the canvas into drawing intents.
///
/// egui reports a cancelled drag (pointer lost, window focus change) the same
/// way as an ordinary release, so drag-cancel arrives as a plain `StrokeEnd`.
pub fn drag_intents(response: &Response) -> Vec<DrawingIntent> {
    let mut intents = Vec::new();
    if response.drag_started() {
        intents.push(DrawingIntent::StrokeBegin);
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            intents.push(DrawingIntent::StrokeAppendPoint(pos));
        }
    }
    if response.drag_stopped() {
        intents.push(DrawingIntent::StrokeEnd);
    }
    intents
}
