use egui::{Color32, Stroke};

/// Brand colors for the screen. Built once at startup and handed to
/// whatever draws with them; nothing reads colors from a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandPalette {
    pub primary: Color32,
    pub alert: Color32,
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(0x40, 0xDC, 0xC2),
            alert: Color32::RED,
        }
    }
}

/// Stroke used for route overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub color: Color32,
    pub width: f32,
}

impl RouteStyle {
    pub fn for_palette(palette: &BrandPalette) -> Self {
        Self {
            color: palette.primary,
            width: 3.0,
        }
    }

    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.width, self.color)
    }
}
