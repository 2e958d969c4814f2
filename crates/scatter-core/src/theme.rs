// File: crates/scatter-core/src/theme.rs
// Summary: Colour palettes for the scatter/regression layers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub point: skia::Color,
    pub mean: skia::Color,
    pub regression: skia::Color,
    pub reference: skia::Color,
    pub residual: skia::Color,
    pub square: skia::Color,
    pub preview: skia::Color,
    /// Disc under the pointer covering the pick radius.
    pub cursor: skia::Color,
}

impl Theme {
    /// Classic palette: white paper, magenta points, translucent red error squares.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xe7, 0xed, 0xf2),
            point: skia::Color::from_argb(255, 0xaa, 0x00, 0x66),
            mean: skia::Color::from_argb(255, 0x2b, 0x7b, 0xca),
            regression: skia::Color::from_argb(255, 0x0b, 0x7a, 0x3f),
            reference: skia::Color::from_argb(255, 0xaa, 0x00, 0x66),
            residual: skia::Color::from_argb(230, 180, 20, 30),
            square: skia::Color::from_argb(64, 200, 40, 40),
            preview: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            cursor: skia::Color::from_argb(128, 255, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            point: skia::Color::from_argb(255, 255, 92, 170),
            mean: skia::Color::from_argb(255, 64, 160, 255),
            regression: skia::Color::from_argb(255, 40, 200, 120),
            reference: skia::Color::from_argb(255, 255, 230, 70),
            residual: skia::Color::from_argb(230, 220, 80, 80),
            square: skia::Color::from_argb(80, 220, 80, 80),
            preview: skia::Color::from_argb(255, 200, 200, 210),
            cursor: skia::Color::from_argb(110, 255, 90, 90),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            point: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            mean: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            regression: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            reference: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            residual: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            square: skia::Color::from_argb(120, 0xff, 0x00, 0x00),
            preview: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            cursor: skia::Color::from_argb(140, 0xff, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    log::warn!("unknown theme '{name}', using light");
    Theme::light()
}
