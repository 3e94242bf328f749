//! Highlight markup embedded in report text.
//!
//! Reports carry IRC-style control codes: `\x02` toggles bold, `\x03NN`
//! starts a palette color and a bare `\x03` ends it, `\x0f` resets
//! everything. Transports that cannot show them either translate the
//! [`segments`] or [`strip`] the codes.

use std::fmt::Display;

/// Toggles bold text.
pub const BOLD: char = '\u{2}';
/// Starts (with a palette number) or ends (bare) a color run.
pub const COLOR: char = '\u{3}';
/// Clears all formatting.
pub const RESET: char = '\u{f}';

/// Palette index for green.
pub const GREEN: u8 = 3;
/// Palette index for red.
pub const RED: u8 = 4;
/// Palette index for grey.
pub const GREY: u8 = 14;

/// The highlight classes used when rendering dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// A final, counted value.
    Neutral,
    /// A value that triggered another roll.
    Ongoing,
    /// A value below the target.
    Muted,
    /// A botched value.
    Danger,
}

impl Highlight {
    /// The palette color for this class, if any.
    pub fn color(self) -> Option<u8> {
        match self {
            Self::Neutral => None,
            Self::Ongoing => Some(GREEN),
            Self::Muted => Some(GREY),
            Self::Danger => Some(RED),
        }
    }
}

/// Wrap `text` in bold markers.
pub fn bold(text: impl Display) -> String {
    format!("{BOLD}{text}{BOLD}")
}

/// Wrap `text` in the color for `highlight`.
pub fn paint(highlight: Highlight, text: impl Display) -> String {
    match highlight.color() {
        Some(code) => format!("{COLOR}{code:02}{text}{COLOR}"),
        None => text.to_string(),
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The visible text.
    pub text: String,
    /// Whether the run is bold.
    pub bold: bool,
    /// Foreground palette color, if any.
    pub color: Option<u8>,
}

/// Split marked-up text into styled runs.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut bold = false;
    let mut color = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            BOLD | COLOR | RESET => {
                if !current.is_empty() {
                    out.push(Segment {
                        text: std::mem::take(&mut current),
                        bold,
                        color,
                    });
                }
                match c {
                    BOLD => bold = !bold,
                    RESET => {
                        bold = false;
                        color = None;
                    }
                    _ => {
                        color = read_number(&mut chars);
                        // Background colors are accepted and ignored.
                        if chars.peek() == Some(&',') {
                            let mut lookahead = chars.clone();
                            lookahead.next();
                            if lookahead.peek().is_some_and(char::is_ascii_digit) {
                                chars.next();
                                read_number(&mut chars);
                            }
                        }
                    }
                }
            }
            other => current.push(other),
        }
    }

    if !current.is_empty() {
        out.push(Segment {
            text: current,
            bold,
            color,
        });
    }
    out
}

/// Remove all markup, leaving the visible text.
pub fn strip(text: &str) -> String {
    segments(text).into_iter().map(|s| s.text).collect()
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u8> {
    let mut digits = String::new();
    while digits.len() < 2 {
        match chars.peek() {
            Some(d) if d.is_ascii_digit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_wraps() {
        assert_eq!(bold(5), "\u{2}5\u{2}");
    }

    #[test]
    fn paint_uses_two_digit_codes() {
        assert_eq!(paint(Highlight::Ongoing, 10), "\u{3}0310\u{3}");
        assert_eq!(paint(Highlight::Muted, 2), "\u{3}142\u{3}");
        assert_eq!(paint(Highlight::Neutral, 8), "8");
    }

    #[test]
    fn strip_removes_codes() {
        let text = format!("{} and {}", bold("Success"), paint(Highlight::Danger, 1));
        assert_eq!(strip(&text), "Success and 1");
    }

    #[test]
    fn segments_track_style() {
        let text = format!("a{}{}", bold("b"), paint(Highlight::Danger, "c"));
        assert_eq!(
            segments(&text),
            vec![
                Segment {
                    text: "a".into(),
                    bold: false,
                    color: None
                },
                Segment {
                    text: "b".into(),
                    bold: true,
                    color: None
                },
                Segment {
                    text: "c".into(),
                    bold: false,
                    color: Some(RED)
                },
            ]
        );
    }

    #[test]
    fn digits_after_a_color_run_stay_visible() {
        // A two-digit code always precedes the text, so "14" then "2" is grey "2".
        assert_eq!(strip("\u{3}142\u{3}"), "2");
        assert_eq!(strip("\u{3}0310\u{3}"), "10");
    }

    #[test]
    fn background_and_reset() {
        let segs = segments("\u{3}04,01x\u{f}y");
        assert_eq!(segs[0].text, "x");
        assert_eq!(segs[0].color, Some(4));
        assert_eq!(segs[1].text, "y");
        assert_eq!(segs[1].color, None);
    }
}
