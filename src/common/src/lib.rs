//! Architecture-independent logic shared by the JuuriOS kernel.
//!
//! Everything in this crate is pure computation over bytes and integers:
//! scancode decoding, the line-input state machine, and the integer
//! quadratic-equation mathematics. No hardware access happens here, which
//! keeps all of it unit-testable on the host.

#![no_std]

pub mod keyboard;
pub mod line;
pub mod quadratic;

pub use keyboard::{decode_scancode, KeyPress};
pub use line::{LineEditor, LineReaction, LINE_CAPACITY};
pub use quadratic::{CoefficientCollector, Coefficients, Roots};
