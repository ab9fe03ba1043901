//! PS/2 scancode set 1 decoding.
//!
//! A single fixed table maps make codes to characters. Decoding is pure and
//! stateless: the same scancode always produces the same key. Break codes
//! (make code with bit 7 set) fall past the end of the table and decode to
//! nothing, as do extended-prefix and modifier codes.

/// A single decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// A printable character (US layout, unshifted).
    Char(char),
    /// The Enter (or keypad Enter) key.
    Enter,
    /// The Backspace key.
    Backspace,
    /// The Tab key.
    Tab,
    /// The Escape key.
    Escape,
}

/// Table sentinel for codes with no mapping (modifiers, unused positions).
const NONE: u8 = 0;

/// Scancode set 1 make codes, indices 0x00..=0x3A.
///
/// Control keys are encoded as their ASCII control bytes and translated to
/// [`KeyPress`] variants in [`decode_scancode`]. Shift, Ctrl, Alt and Caps
/// Lock sit at their real positions but carry the sentinel: modifier state
/// is not modeled.
const SCANCODE_MAP: [u8; 59] = [
    NONE, 0x1b, b'1', b'2', b'3', b'4', b'5', b'6', // 0x00-0x07
    b'7', b'8', b'9', b'0', b'-', b'=', 0x08, 0x09, // 0x08-0x0F
    b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', // 0x10-0x17
    b'o', b'p', b'[', b']', 0x0a, NONE, b'a', b's', // 0x18-0x1F
    b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', // 0x20-0x27
    b'\'', b'`', NONE, b'\\', b'z', b'x', b'c', b'v', // 0x28-0x2F
    b'b', b'n', b'm', b',', b'.', b'/', NONE, b'*', // 0x30-0x37
    NONE, b' ', NONE, // 0x38-0x3A
];

/// Decodes one raw scancode byte into a key press.
///
/// Returns `None` for codes past the table (break codes, extended codes) and
/// for table positions holding the sentinel (modifier keys).
pub fn decode_scancode(scancode: u8) -> Option<KeyPress> {
    let byte = *SCANCODE_MAP.get(scancode as usize)?;
    match byte {
        NONE => None,
        0x0a => Some(KeyPress::Enter),
        0x08 => Some(KeyPress::Backspace),
        0x09 => Some(KeyPress::Tab),
        0x1b => Some(KeyPress::Escape),
        b => Some(KeyPress::Char(b as char)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_letters_and_digits() {
        assert_eq!(decode_scancode(0x10), Some(KeyPress::Char('q')));
        assert_eq!(decode_scancode(0x1e), Some(KeyPress::Char('a')));
        assert_eq!(decode_scancode(0x2c), Some(KeyPress::Char('z')));
        assert_eq!(decode_scancode(0x02), Some(KeyPress::Char('1')));
        assert_eq!(decode_scancode(0x0b), Some(KeyPress::Char('0')));
        assert_eq!(decode_scancode(0x39), Some(KeyPress::Char(' ')));
    }

    #[test]
    fn decodes_control_keys() {
        assert_eq!(decode_scancode(0x1c), Some(KeyPress::Enter));
        assert_eq!(decode_scancode(0x0e), Some(KeyPress::Backspace));
        assert_eq!(decode_scancode(0x0f), Some(KeyPress::Tab));
        assert_eq!(decode_scancode(0x01), Some(KeyPress::Escape));
    }

    #[test]
    fn drops_modifiers() {
        // Left shift, left ctrl, right shift, left alt, caps lock.
        for code in [0x2a, 0x1d, 0x36, 0x38, 0x3a] {
            assert_eq!(decode_scancode(code), None);
        }
    }

    #[test]
    fn drops_out_of_range_codes() {
        // Break codes are make codes with bit 7 set; all land past the table.
        assert_eq!(decode_scancode(0x3b), None);
        assert_eq!(decode_scancode(0x90), None);
        assert_eq!(decode_scancode(0xff), None);
    }

    #[test]
    fn decoding_is_idempotent() {
        for code in 0..=255u8 {
            assert_eq!(decode_scancode(code), decode_scancode(code));
        }
    }
}
