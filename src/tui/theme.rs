// Theme system for the TUI
//
// Color palettes switchable at runtime with 't'. Every page element pulls its
// colors from here; no render code names a color directly.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Neon,
    Midnight,
    Paper,
}

impl ThemeKind {
    /// All themes in cycle order
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Neon, ThemeKind::Midnight, ThemeKind::Paper]
    }

    /// Next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Neon => "neon",
            ThemeKind::Midnight => "midnight",
            ThemeKind::Paper => "paper",
        }
    }

    /// Look up a theme by config name; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                tracing::debug!(name, "Unknown theme, using default");
                Self::default()
            })
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Neon => Theme::neon(),
            ThemeKind::Midnight => Theme::midnight(),
            ThemeKind::Paper => Theme::paper(),
        }
    }
}

/// Page color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // Base
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Brand gradient stops (cyan → violet → pink in the neon palette)
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Notifications
    pub success: Color,
    pub destructive: Color,

    // Decorative background
    pub particle: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    /// Cyber-neon palette on a near-black background
    pub fn neon() -> Self {
        Self {
            kind: ThemeKind::Neon,
            background: Color::Rgb(0x0a, 0x0a, 0x12),
            foreground: Color::Rgb(0xe6, 0xf1, 0xff),
            muted: Color::Rgb(0x8b, 0x94, 0xa8),
            border: Color::Rgb(0x2a, 0x2f, 0x45),
            border_type: BorderType::Rounded,
            primary: Color::Rgb(0x00, 0xff, 0xff),
            secondary: Color::Rgb(0x8b, 0x5c, 0xf6),
            accent: Color::Rgb(0xff, 0x14, 0x93),
            success: Color::Rgb(0x50, 0xfa, 0x7b),
            destructive: Color::Rgb(0xff, 0x55, 0x55),
            particle: Color::Rgb(0x1f, 0x4e, 0x5f),
        }
    }

    /// Terminal ANSI palette, respects the terminal's own background
    pub fn midnight() -> Self {
        Self {
            kind: ThemeKind::Midnight,
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            accent: Color::LightMagenta,
            success: Color::Green,
            destructive: Color::Red,
            particle: Color::DarkGray,
        }
    }

    /// Light palette
    pub fn paper() -> Self {
        Self {
            kind: ThemeKind::Paper,
            background: Color::Rgb(0xfa, 0xf8, 0xf2),
            foreground: Color::Rgb(0x1f, 0x23, 0x28),
            muted: Color::Rgb(0x6a, 0x73, 0x7d),
            border: Color::Rgb(0xc8, 0xc8, 0xc0),
            border_type: BorderType::Rounded,
            primary: Color::Rgb(0x00, 0x6d, 0x77),
            secondary: Color::Rgb(0x5b, 0x3c, 0xc4),
            accent: Color::Rgb(0xc2, 0x18, 0x5b),
            success: Color::Rgb(0x1a, 0x7f, 0x37),
            destructive: Color::Rgb(0xcf, 0x22, 0x2e),
            particle: Color::Rgb(0xe4, 0xe0, 0xd4),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtle(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Nav item under the active section
    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Keyboard focus (nav cursor, focused form field)
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Gradient stop for item `i` of `n` (used by headings and skill bars)
    pub fn gradient(&self, i: usize, n: usize) -> Color {
        let stops = [self.primary, self.secondary, self.accent];
        if n <= 1 {
            return stops[0];
        }
        stops[(i * (stops.len() - 1) + (n - 1) / 2) / (n - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut kind = ThemeKind::default();
        let mut seen = vec![kind];
        for _ in 1..ThemeKind::all().len() {
            kind = kind.next();
            seen.push(kind);
        }
        assert_eq!(seen, ThemeKind::all());
        assert_eq!(kind.next(), ThemeKind::default());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeKind::from_name("Paper"), ThemeKind::Paper);
        assert_eq!(ThemeKind::from_name(" midnight "), ThemeKind::Midnight);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Neon);
    }

    #[test]
    fn test_gradient_endpoints() {
        let theme = Theme::neon();
        assert_eq!(theme.gradient(0, 5), theme.primary);
        assert_eq!(theme.gradient(4, 5), theme.accent);
        assert_eq!(theme.gradient(0, 1), theme.primary);
    }
}
