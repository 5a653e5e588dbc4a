use ratatui::style::Color;

/// Runtime theme for the viewer
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub heading: Color,
    pub active: Color,
    pub hover_bg: Color,
    pub indicator: Color,
    pub link: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            heading: Color::Rgb(0xd8, 0xa6, 0x57),
            active: Color::Rgb(0x89, 0xb4, 0x82),
            hover_bg: Color::Rgb(0x45, 0x40, 0x3d),
            indicator: Color::Rgb(0x89, 0xb4, 0x82),
            link: Color::Rgb(0x7d, 0xae, 0xa3),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}
