pub mod canvas_panel;
pub mod controls_panel;

pub use canvas_panel::canvas_panel;
pub use controls_panel::controls_panel;
