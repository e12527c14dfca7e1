use egui::{
    Align, Button, Frame, Layout, Margin, Response, RichText, Sense, Slider, Stroke as EguiStroke,
    Ui, vec2,
};

use crate::intent::DrawingIntent;
use crate::state::{DrawingStore, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::theme;

/// The tool card under the canvas: palette, brush size, dark mode, undo and
/// clear. Every control emits an intent; nothing here touches state directly.
pub fn controls_panel(store: &mut DrawingStore, ctx: &egui::Context) {
    let snapshot = store.snapshot();
    let theme = theme::theme(snapshot.is_dark_mode);

    egui::TopBottomPanel::bottom("controls_panel")
        .frame(
            Frame::default()
                .fill(theme.card_fill)
                .inner_margin(Margin::same(16.0)),
        )
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 10.0;

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Scribble Tools")
                        .size(18.0)
                        .strong()
                        .color(theme.text),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let icon = if snapshot.is_dark_mode { "☀" } else { "🌙" };
                    let toggle = Button::new(RichText::new(icon).size(16.0)).fill(theme.accent);
                    if ui.add(toggle).on_hover_text("Toggle dark mode").clicked() {
                        store.apply(DrawingIntent::ToggleDarkMode);
                    }
                });
            });

            ui.label(RichText::new("Colors").strong().color(theme.text));
            ui.horizontal_wrapped(|ui| {
                for color in theme::PALETTE {
                    let selected = snapshot.selected_color == color;
                    if color_swatch(ui, color, selected).clicked() {
                        store.apply(DrawingIntent::SelectColor(color));
                    }
                }
            });

            ui.label(
                RichText::new(format!("Brush Size: {:.0}px", snapshot.brush_size))
                    .strong()
                    .color(theme.text),
            );
            let mut brush_size = snapshot.brush_size;
            let slider = ui.add(
                Slider::new(&mut brush_size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).show_value(false),
            );
            if slider.changed() {
                store.apply(DrawingIntent::SetBrushSize(brush_size));
            }

            ui.horizontal(|ui| {
                let undo = Button::new(RichText::new("Undo").color(theme.text))
                    .fill(theme.surface_fill);
                if ui.add(undo).clicked() {
                    store.apply(DrawingIntent::Undo);
                }
                let clear = Button::new(RichText::new("Clear").color(egui::Color32::WHITE))
                    .fill(theme.danger);
                if ui.add(clear).clicked() {
                    store.apply(DrawingIntent::Clear);
                }
            });
        });
}

fn color_swatch(ui: &mut Ui, color: egui::Color32, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(30.0, 30.0), Sense::click());
    let center = rect.center();
    let radius = if selected { 13.0 } else { 11.0 };
    ui.painter().circle_filled(center, radius, color);
    if selected {
        // Ring in whichever of black/white stands out against the swatch.
        let ring = theme::contrast_color(color);
        ui.painter()
            .circle_stroke(center, radius - 3.0, EguiStroke::new(2.0, ring));
    }
    response
}
