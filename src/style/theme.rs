//! Converts merged class strings into terminal styles.

use super::merge::ParsedClass;
use ratatui::style::palette::tailwind::{self, Palette};
use ratatui::style::{Color, Modifier, Style};

fn palette(name: &str) -> Option<Palette> {
    let palette = match name {
        "slate" => tailwind::SLATE,
        "gray" => tailwind::GRAY,
        "zinc" => tailwind::ZINC,
        "neutral" => tailwind::NEUTRAL,
        "stone" => tailwind::STONE,
        "red" => tailwind::RED,
        "orange" => tailwind::ORANGE,
        "amber" => tailwind::AMBER,
        "yellow" => tailwind::YELLOW,
        "lime" => tailwind::LIME,
        "green" => tailwind::GREEN,
        "emerald" => tailwind::EMERALD,
        "teal" => tailwind::TEAL,
        "cyan" => tailwind::CYAN,
        "sky" => tailwind::SKY,
        "blue" => tailwind::BLUE,
        "indigo" => tailwind::INDIGO,
        "violet" => tailwind::VIOLET,
        "purple" => tailwind::PURPLE,
        "fuchsia" => tailwind::FUCHSIA,
        "pink" => tailwind::PINK,
        "rose" => tailwind::ROSE,
        _ => return None,
    };
    Some(palette)
}

fn shade(palette: Palette, shade: &str) -> Option<Color> {
    let color = match shade {
        "50" => palette.c50,
        "100" => palette.c100,
        "200" => palette.c200,
        "300" => palette.c300,
        "400" => palette.c400,
        "500" => palette.c500,
        "600" => palette.c600,
        "700" => palette.c700,
        "800" => palette.c800,
        "900" => palette.c900,
        "950" => palette.c950,
        _ => return None,
    };
    Some(color)
}

/// Resolves `red-500`, `white` or `[#ff8800]` to a terminal color.
/// An opacity postfix such as `/50` is ignored.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.split('/').next()?;
    match value {
        "black" => Some(tailwind::BLACK),
        "white" => Some(tailwind::WHITE),
        "transparent" | "inherit" | "current" => Some(Color::Reset),
        _ => {
            if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
                return inner.parse::<Color>().ok();
            }
            let (name, level) = value.rsplit_once('-')?;
            shade(palette(name)?, level)
        }
    }
}

fn apply_class(style: Style, base: &str) -> Style {
    match base {
        "font-semibold" | "font-bold" | "font-extrabold" | "font-black" => {
            style.add_modifier(Modifier::BOLD)
        }
        "font-thin" | "font-extralight" | "font-light" | "font-normal" | "font-medium" => {
            style.remove_modifier(Modifier::BOLD)
        }
        "italic" => style.add_modifier(Modifier::ITALIC),
        "not-italic" => style.remove_modifier(Modifier::ITALIC),
        "underline" => style.add_modifier(Modifier::UNDERLINED),
        "line-through" => style.add_modifier(Modifier::CROSSED_OUT),
        "no-underline" => style.remove_modifier(Modifier::UNDERLINED | Modifier::CROSSED_OUT),
        _ => {
            if let Some(color) = base.strip_prefix("text-").and_then(parse_color) {
                style.fg(color)
            } else if let Some(color) = base.strip_prefix("bg-").and_then(parse_color) {
                style.bg(color)
            } else if let Some(opacity) = base
                .strip_prefix("opacity-")
                .and_then(|v| v.parse::<u8>().ok())
            {
                if opacity < 100 {
                    style.add_modifier(Modifier::DIM)
                } else {
                    style.remove_modifier(Modifier::DIM)
                }
            } else {
                style
            }
        }
    }
}

/// Builds a style from a class string, applying classes left to right.
///
/// Classes with variants (`hover:`, `md:`) have no terminal meaning and are
/// skipped, as are utilities that do not map to a color or modifier.
pub fn to_style(classes: &str) -> Style {
    classes.split_whitespace().fold(Style::default(), |style, class| {
        let parsed = ParsedClass::parse(class);
        if parsed.modifiers.is_empty() {
            apply_class(style, parsed.base)
        } else {
            style
        }
    })
}
