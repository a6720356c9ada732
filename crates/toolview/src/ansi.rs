//! Writes rendered lines to a terminal stream.
//!
//! Styled output emits only the attribute and color changes between
//! consecutive spans and resets everything at the end of each line.

use crossterm::queue;
use crossterm::style::{Attribute, Colors, Print, SetAttribute, SetColors};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use std::io::{self, Write};

const TOGGLES: [(Modifier, Attribute, Attribute); 4] = [
    (Modifier::ITALIC, Attribute::Italic, Attribute::NoItalic),
    (Modifier::UNDERLINED, Attribute::Underlined, Attribute::NoUnderline),
    (Modifier::REVERSED, Attribute::Reverse, Attribute::NoReverse),
    (
        Modifier::CROSSED_OUT,
        Attribute::CrossedOut,
        Attribute::NotCrossedOut,
    ),
];

/// Write `lines` to `writer`, one per row. With `styled == false` only the
/// text is written.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[Line<'_>], styled: bool) -> io::Result<()> {
    for line in lines {
        if styled {
            write_styled_line(writer, line)?;
        } else {
            for span in &line.spans {
                queue!(writer, Print(span.content.as_ref()))?;
            }
        }
        queue!(writer, Print("\n"))?;
    }
    writer.flush()
}

fn write_styled_line<W: Write>(writer: &mut W, line: &Line<'_>) -> io::Result<()> {
    let mut current = TerminalState::default();

    for span in &line.spans {
        let next = TerminalState::from_style(line.style.patch(span.style));
        current.transition_to(&next, writer)?;
        current = next;
        queue!(writer, Print(span.content.as_ref()))?;
    }

    if current != TerminalState::default() {
        queue!(writer, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TerminalState {
    fg: Color,
    bg: Color,
    modifier: Modifier,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::empty(),
        }
    }
}

impl TerminalState {
    fn from_style(style: Style) -> Self {
        let mut modifier = style.add_modifier;
        modifier.remove(style.sub_modifier);
        Self {
            fg: style.fg.unwrap_or(Color::Reset),
            bg: style.bg.unwrap_or(Color::Reset),
            modifier,
        }
    }

    fn transition_to<W: Write>(&self, next: &Self, w: &mut W) -> io::Result<()> {
        let removed = self.modifier - next.modifier;
        let added = next.modifier - self.modifier;

        // Bold and dim share a single "off" code.
        let intensity = Modifier::BOLD | Modifier::DIM;
        if removed.intersects(intensity) {
            queue!(w, SetAttribute(Attribute::NormalIntensity))?;
        }
        let restore = if removed.intersects(intensity) {
            next.modifier & intensity
        } else {
            added & intensity
        };
        if restore.contains(Modifier::BOLD) {
            queue!(w, SetAttribute(Attribute::Bold))?;
        }
        if restore.contains(Modifier::DIM) {
            queue!(w, SetAttribute(Attribute::Dim))?;
        }

        for (modifier, on, off) in TOGGLES {
            if removed.contains(modifier) {
                queue!(w, SetAttribute(off))?;
            } else if added.contains(modifier) {
                queue!(w, SetAttribute(on))?;
            }
        }

        if next.fg != self.fg || next.bg != self.bg {
            queue!(w, SetColors(Colors::new(next.fg.into(), next.bg.into())))?;
        }
        Ok(())
    }
}
