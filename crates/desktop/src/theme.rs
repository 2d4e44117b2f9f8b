use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::settings::Appearance;

/// Resolve the iced Theme from the appearance setting.
pub fn resolve_theme(appearance: Appearance) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = if is_dark {
        dark_palette()
    } else {
        light_palette()
    };

    Theme::custom("VidScribe", palette)
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1b, 0x1b, 0x1d),
        text: color!(0xd4, 0xd4, 0xd4),
        primary: color!(0x8b, 0x7c, 0xf6),
        success: color!(0x32, 0xd0, 0x5e),
        warning: color!(0xff, 0xc4, 0x00),
        danger: color!(0xff, 0x4d, 0x42),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf6, 0xf6, 0xf8),
        text: color!(0x1c, 0x1c, 0x1e),
        primary: color!(0x64, 0x50, 0xe8),
        success: color!(0x2f, 0xae, 0x52),
        warning: color!(0xff, 0x95, 0x00),
        danger: color!(0xe5, 0x34, 0x2b),
    }
}

/// Dimmed text color for labels and hints.
pub fn tertiary_color(theme: &Theme) -> Color {
    Color {
        a: 0.55,
        ..theme.extended_palette().background.base.text
    }
}

pub fn warning_color(theme: &Theme) -> Color {
    theme.palette().warning
}

pub fn danger_color(theme: &Theme) -> Color {
    theme.palette().danger
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
