//! Startup banner: "TRIVIA TIME" in figlet's standard font with a color gradient.

use crossterm::{ExecutableCommand, QueueableCommand};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Amber (#ffb000).
const AMBER: (u8, u8, u8) = (0xff, 0xb0, 0x00);
/// Magenta (#e0218a).
const MAGENTA: (u8, u8, u8) = (0xe0, 0x21, 0x8a);

/// Left-to-right color ramp between two RGB stops.
#[derive(Debug, Clone, Copy)]
struct Gradient {
    from: (u8, u8, u8),
    to: (u8, u8, u8),
}

impl Gradient {
    /// Color at column `col` of a `width`-column line.
    fn at(self, col: usize, width: usize) -> Color {
        let span = width.saturating_sub(1).max(1) as f64;
        let t = (col as f64 / span).clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::Rgb {
            r: mix(self.from.0, self.to.0),
            g: mix(self.from.1, self.to.1),
            b: mix(self.from.2, self.to.2),
        }
    }
}

fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("Trivia Time").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "TRIVIA TIME".to_string())
}

/// Prints the title with a horizontal gradient, then the tagline and version.
pub fn print_welcome() {
    let mut out = stdout();
    let art = title_art();
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let ramp = Gradient {
        from: AMBER,
        to: MAGENTA,
    };

    for line in art.lines().filter(|l| !l.trim().is_empty()) {
        for (col, ch) in line.chars().enumerate() {
            let _ = out.queue(SetForegroundColor(ramp.at(col, width)));
            let _ = out.queue(Print(ch));
        }
        let _ = out.queue(ResetColor);
        let _ = out.queue(Print("\r\n"));
    }
    let _ = out.flush();

    let _ = out.execute(Print(
        "Enter your name, pick a category and difficulty, then test your knowledge!\r\n",
    ));
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: MAGENTA.0,
        g: MAGENTA.1,
        b: MAGENTA.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let ramp = Gradient {
            from: AMBER,
            to: MAGENTA,
        };
        assert_eq!(
            ramp.at(0, 40),
            Color::Rgb {
                r: AMBER.0,
                g: AMBER.1,
                b: AMBER.2
            }
        );
        assert_eq!(
            ramp.at(39, 40),
            Color::Rgb {
                r: MAGENTA.0,
                g: MAGENTA.1,
                b: MAGENTA.2
            }
        );
    }

    #[test]
    fn test_gradient_single_column() {
        let ramp = Gradient {
            from: AMBER,
            to: MAGENTA,
        };
        assert_eq!(
            ramp.at(0, 1),
            Color::Rgb {
                r: AMBER.0,
                g: AMBER.1,
                b: AMBER.2
            }
        );
    }
}
