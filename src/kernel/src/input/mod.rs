//! Keyboard input glue.
//!
//! The keyboard interrupt hands every raw scancode to [`handle_scancode`];
//! decoding, line editing, and delivery to the solver all happen here, in
//! interrupt context. That is safe precisely because nothing outside
//! interrupt context touches the editor: the main thread only sleeps once
//! interrupts are enabled. Porting this to a multi-core design would
//! require real synchronization around [`EDITOR`].

use crate::arch::x86_64::{self, interrupts};
use crate::{print, println};
use juuri_common::{decode_scancode, LineEditor, LineReaction};
use spin::Mutex;

/// The single line-input buffer, owned by the keyboard path.
static EDITOR: Mutex<LineEditor> = Mutex::new(LineEditor::new());

/// Consumes one scancode from the keyboard interrupt.
///
/// Unmappable codes (key releases, modifiers) are dropped here; everything
/// else runs through the line editor, whose reaction tells us what to echo
/// and when to hand a finished line to the solver.
pub fn handle_scancode(scancode: u8) {
    let key = match decode_scancode(scancode) {
        Some(key) => key,
        None => return,
    };

    let reaction = EDITOR.lock().handle_key(key);
    match reaction {
        LineReaction::Echo(c) => print!("{}", c),
        LineReaction::Erase => print!("\x08 \x08"),
        LineReaction::Submit(value) => {
            println!();
            crate::solver::submit(value);
        }
        LineReaction::Quit => quit(),
        LineReaction::Ignored => {}
    }
}

/// The quit key: stop admitting interrupts and park the CPU for good.
///
/// Terminal by design; there is nothing to clean up and no state worth
/// returning to.
fn quit() -> ! {
    println!();
    println!("Shutting down...");
    interrupts::disable();
    x86_64::halt_loop()
}
