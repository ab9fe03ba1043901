//! Line-buffered keyboard input.
//!
//! [`LineEditor`] collects printable characters into a fixed-capacity buffer
//! and turns each key press into a [`LineReaction`] for the caller to act
//! on. The editor itself performs no I/O; echoing and erasing on screen are
//! the caller's job. This runs entirely in interrupt context, so the state
//! is a plain array with no allocation.

use crate::keyboard::KeyPress;

/// Usable characters per line (one cell is reserved for the terminator in
/// the on-screen sense; the buffer itself stores exactly this many bytes).
pub const LINE_CAPACITY: usize = 31;

/// What the editor did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineReaction {
    /// Key had no effect (unmapped control key, full buffer, empty backspace).
    Ignored,
    /// Character was appended; caller should echo it.
    Echo(char),
    /// Last character was removed; caller should emit a visual rub-out.
    Erase,
    /// Line was submitted and parsed; the buffer has been cleared.
    Submit(i32),
    /// The quit key was pressed. Terminal state; caller shuts down.
    Quit,
}

/// Fixed-capacity line editor state machine.
pub struct LineEditor {
    buffer: [u8; LINE_CAPACITY],
    length: usize,
}

impl LineEditor {
    /// Creates an empty editor.
    pub const fn new() -> Self {
        LineEditor {
            buffer: [0; LINE_CAPACITY],
            length: 0,
        }
    }

    /// Feeds one decoded key press through the state machine.
    ///
    /// `q`/`Q` quits regardless of buffer contents. Enter submits the
    /// current line as a permissively parsed decimal and clears the buffer.
    /// Characters past capacity are dropped, never truncated mid-line.
    pub fn handle_key(&mut self, key: KeyPress) -> LineReaction {
        match key {
            KeyPress::Char('q') | KeyPress::Char('Q') => LineReaction::Quit,
            KeyPress::Enter => {
                let value = parse_decimal(&self.buffer[..self.length]);
                self.length = 0;
                LineReaction::Submit(value)
            }
            KeyPress::Backspace => {
                if self.length > 0 {
                    self.length -= 1;
                    LineReaction::Erase
                } else {
                    LineReaction::Ignored
                }
            }
            KeyPress::Char(c) if (' '..='~').contains(&c) => {
                if self.length < LINE_CAPACITY {
                    self.buffer[self.length] = c as u8;
                    self.length += 1;
                    LineReaction::Echo(c)
                } else {
                    LineReaction::Ignored
                }
            }
            _ => LineReaction::Ignored,
        }
    }

    /// Number of characters currently buffered.
    pub fn len(&self) -> usize {
        self.length
    }

    /// True if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The buffered characters.
    pub fn contents(&self) -> &[u8] {
        &self.buffer[..self.length]
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an optionally negative decimal integer, permissively.
///
/// A leading `-` negates; every other non-digit byte is skipped rather than
/// rejected, so `"12x3"` parses as 123 and an empty or all-junk line parses
/// as 0.
fn parse_decimal(bytes: &[u8]) -> i32 {
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i32 = 0;
    for &b in digits {
        if b.is_ascii_digit() {
            value = value.wrapping_mul(10).wrapping_add((b - b'0') as i32);
        }
    }

    if negative {
        -value
    } else {
        value
    }
}
