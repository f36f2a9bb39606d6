// File: crates/linechart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

/// Backend-neutral 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

const LIGHT_PALETTE: &[Rgba] = &[Rgba::BLACK];

const DARK_PALETTE: &[Rgba] = &[
    Rgba::rgb(64, 160, 255),
    Rgba::rgb(40, 200, 120),
    Rgba::rgb(255, 180, 60),
    Rgba::rgb(220, 80, 80),
    Rgba::rgb(180, 120, 255),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    /// Stroke colors cycled over series in measure order.
    pub palette: &'static [Rgba],
    pub line_width: f32,
}

impl Theme {
    /// Black one-pixel lines on a transparent surface.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::TRANSPARENT,
            axis_line: Rgba::BLACK,
            axis_label: Rgba::BLACK,
            tick: Rgba::BLACK,
            palette: LIGHT_PALETTE,
            line_width: 1.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            palette: DARK_PALETTE,
            line_width: 2.0,
        }
    }

    /// Stroke for the series at `index`.
    pub fn stroke_for(&self, index: usize) -> Rgba {
        match self.palette.len() {
            0 => self.axis_line,
            n => self.palette[index % n],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
