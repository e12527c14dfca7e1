use crate::panels::{canvas_panel, controls_panel};
use crate::state::DrawingStore;
use crate::theme;

/// The single-screen scribble application.
///
/// Owns the drawing store; each frame lays out the controls card and the
/// canvas, both of which talk to the store exclusively through intents.
pub struct ScribbleApp {
    store: DrawingStore,
}

impl ScribbleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut store = DrawingStore::new();

        // Push-based redraw: every published snapshot schedules a repaint, so
        // the canvas reflects the newest state without polling.
        let egui_ctx = cc.egui_ctx.clone();
        store.subscribe(move |_snapshot| egui_ctx.request_repaint());

        Self { store }
    }

    /// The drawing store, for tests and for embedding the app elsewhere.
    pub fn store_mut(&mut self) -> &mut DrawingStore {
        &mut self.store
    }
}

impl eframe::App for ScribbleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.store.snapshot();
        let theme = theme::theme(snapshot.is_dark_mode);

        let mut visuals = if snapshot.is_dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = theme.window_fill;
        ctx.set_visuals(visuals);

        // Panels before the central canvas; egui lays them out in this order.
        controls_panel(&mut self.store, ctx);
        canvas_panel(&mut self.store, ctx);
    }
}
