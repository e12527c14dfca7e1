use egui::Color32;

/// The stock swatch palette, in the order the controls card shows it.
pub const PALETTE: [Color32; 12] = [
    Color32::BLACK,
    Color32::from_rgb(0xFF, 0x6B, 0x6B), // coral red
    Color32::from_rgb(0x4E, 0xCD, 0xC4), // turquoise
    Color32::from_rgb(0x45, 0xB7, 0xD1), // sky blue
    Color32::from_rgb(0x96, 0xCE, 0xB4), // mint green
    Color32::from_rgb(0xFE, 0xCE, 0x47), // sunny yellow
    Color32::from_rgb(0xAD, 0x6E, 0xFF), // lavender purple
    Color32::from_rgb(0xFF, 0x8A, 0x80), // light pink
    Color32::from_rgb(0x80, 0xCB, 0xC4), // teal
    Color32::from_rgb(0xFF, 0xAB, 0x40), // orange
    Color32::from_rgb(0x9C, 0x27, 0xB0), // deep purple
    Color32::from_rgb(0x79, 0x55, 0x48), // brown
];

/// Chrome colors for one display mode. Stroke data never looks at these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub window_fill: Color32,
    pub card_fill: Color32,
    pub surface_fill: Color32,
    pub text: Color32,
    pub canvas_fill: Color32,
    pub canvas_border: Color32,
    pub grid_line: Color32,
    pub accent: Color32,
    pub danger: Color32,
}

const LIGHT: Theme = Theme {
    window_fill: Color32::from_rgb(0xFA, 0xFA, 0xFA),
    card_fill: Color32::WHITE,
    surface_fill: Color32::from_rgb(0xEE, 0xEE, 0xEE),
    text: Color32::BLACK,
    canvas_fill: Color32::WHITE,
    canvas_border: Color32::from_rgb(0xE0, 0xE0, 0xE0),
    grid_line: Color32::from_rgb(0xF5, 0xF5, 0xF5),
    accent: Color32::from_rgb(0x66, 0x7E, 0xEA),
    danger: Color32::from_rgb(0xFF, 0x6B, 0x6B),
};

const DARK: Theme = Theme {
    window_fill: Color32::from_rgb(0x0F, 0x0F, 0x23),
    card_fill: Color32::from_rgb(0x1E, 0x1E, 0x1E),
    surface_fill: Color32::from_rgb(0x2A, 0x2A, 0x2A),
    text: Color32::WHITE,
    canvas_fill: Color32::from_rgb(0x1E, 0x1E, 0x1E),
    canvas_border: Color32::from_rgb(0x33, 0x33, 0x33),
    grid_line: Color32::from_rgb(0x2A, 0x2A, 0x2A),
    accent: Color32::from_rgb(0x8B, 0x9F, 0xFF),
    danger: Color32::from_rgb(0xFF, 0x6B, 0x6B),
};

pub fn theme(dark_mode: bool) -> Theme {
    if dark_mode { DARK } else { LIGHT }
}

/// Black or white, whichever reads better on top of `color`.
pub fn contrast_color(color: Color32) -> Color32 {
    let luminance =
        0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32;
    if luminance > 128.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_fully_opaque() {
        for color in PALETTE {
            assert_eq!(color.a(), 255);
        }
    }

    #[test]
    fn contrast_flips_between_black_and_white() {
        assert_eq!(contrast_color(Color32::WHITE), Color32::BLACK);
        assert_eq!(contrast_color(Color32::BLACK), Color32::WHITE);
        assert_eq!(contrast_color(PALETTE[5]), Color32::BLACK); // sunny yellow
    }
}
