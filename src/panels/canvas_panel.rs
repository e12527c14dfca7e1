use egui::{Frame, Margin, Sense, Stroke as EguiStroke};

use crate::input;
use crate::renderer;
use crate::state::DrawingStore;
use crate::theme;

/// The drawing surface. Feeds drag gestures into the store, then issues one
/// full redraw: grid, committed strokes in commit order, and the in-progress
/// stroke last so it always stays on top.
pub fn canvas_panel(store: &mut DrawingStore, ctx: &egui::Context) {
    let theme = theme::theme(store.snapshot().is_dark_mode);

    egui::CentralPanel::default()
        .frame(
            Frame::default()
                .fill(theme.window_fill)
                .inner_margin(Margin::same(16.0)),
        )
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
            let rect = response.rect;

            painter.rect_filled(rect, 12.0, theme.canvas_fill);
            painter.rect_stroke(rect, 12.0, EguiStroke::new(1.0, theme.canvas_border));

            for intent in input::drag_intents(&response) {
                store.apply(intent);
            }

            // Read the snapshot after this frame's intents so the stroke under
            // the pointer never lags a frame behind.
            let snapshot = store.snapshot();
            let painter = painter.with_clip_rect(rect);

            renderer::paint_grid(&painter, rect, theme.grid_line);
            for stroke in &snapshot.history {
                renderer::paint_stroke(&painter, stroke.points(), stroke.color(), stroke.brush_size());
            }
            if let Some(current) = &snapshot.current_stroke {
                renderer::paint_stroke(&painter, current.points(), current.color(), current.brush_size());
            }
        });
}
