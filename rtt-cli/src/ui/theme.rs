//! Colour theme, chosen once at startup.

use ratatui::style::{Color, Modifier, Style};

/// Every colour the views use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub error: Color,
    pub muted: Color,
    pub border: Color,
    pub time: Color,
    pub leaving: Color,
    pub dep_platform: Color,
    pub arr_platform: Color,
    pub service: Color,
    pub duration: Color,
}

impl Theme {
    /// Bright, saturated colours for dark terminal backgrounds.
    pub const DARK: Theme = Theme {
        title: Color::Indexed(205),
        error: Color::Indexed(196),
        muted: Color::Indexed(241),
        border: Color::Indexed(238),
        time: Color::Indexed(212),
        leaving: Color::Indexed(214),
        dep_platform: Color::Indexed(196),
        arr_platform: Color::Indexed(46),
        service: Color::Indexed(201),
        duration: Color::Indexed(141),
    };

    /// Deeper colours for light terminal backgrounds.
    pub const LIGHT: Theme = Theme {
        title: Color::Indexed(125),
        error: Color::Indexed(160),
        muted: Color::Indexed(244),
        border: Color::Indexed(250),
        time: Color::Indexed(127),
        leaving: Color::Indexed(172),
        dep_platform: Color::Indexed(160),
        arr_platform: Color::Indexed(28),
        service: Color::Indexed(90),
        duration: Color::Indexed(61),
    };

    /// Pick a theme from the terminal background.
    ///
    /// Reads `COLORFGBG` ("fg;bg"), which most terminals export. Without
    /// it the dark theme is used.
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            // 7 is light grey, 9-15 are the bright colours including white.
            Some(7) | Some(9..=15) => Self::LIGHT,
            _ => Self::DARK,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::new().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::new().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
