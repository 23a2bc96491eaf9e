use ratatui::style::{Color, Modifier, Style};

/// Colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub green: Color,
    pub amber: Color,
    pub red: Color,
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 242, 232),
    surface: Color::Rgb(255, 252, 245),
    border: Color::Rgb(206, 196, 176),
    text: Color::Rgb(40, 36, 30),
    text_dim: Color::Rgb(120, 110, 92),
    accent: Color::Rgb(150, 112, 30),
    green: Color::Rgb(46, 120, 64),
    amber: Color::Rgb(184, 104, 24),
    red: Color::Rgb(170, 50, 40),
};

pub const DARK: Palette = Palette {
    bg: Color::Rgb(18, 16, 14),
    surface: Color::Rgb(28, 25, 20),
    border: Color::Rgb(55, 48, 36),
    text: Color::Rgb(230, 218, 196),
    text_dim: Color::Rgb(130, 118, 96),
    accent: Color::Rgb(196, 160, 68),
    green: Color::Rgb(92, 148, 92),
    amber: Color::Rgb(210, 138, 60),
    red: Color::Rgb(180, 82, 62),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode { &DARK } else { &LIGHT }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn green(&self) -> Style {
        Style::default().fg(self.green)
    }

    pub fn amber(&self) -> Style {
        Style::default().fg(self.amber)
    }

    pub fn red(&self) -> Style {
        Style::default().fg(self.red)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}
