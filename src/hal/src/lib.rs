//! JuuriOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details.

#![no_std]

/// Trait for single-byte access to a numbered I/O port.
///
/// Implementations differ only in timing: a plain port writes at full bus
/// speed, a "slow" port guarantees a settling delay after each write for
/// devices that cannot keep up. Consumers must accept either interchangeably.
pub trait PortIo {
    /// Writes a single byte to the port.
    fn write(&mut self, value: u8);
    /// Reads a single byte from the port.
    fn read(&mut self) -> u8;
}

/// Trait for a serial port or similar character-based communication channel.
pub trait Serial {
    /// Writes a single byte to the serial port.
    fn write_byte(&mut self, byte: u8);
    /// Reads a single byte from the serial port, if available.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);
}

/// Trait for controlling interrupts.
pub trait InterruptController {
    /// Globally enables interrupts.
    fn enable(&mut self);
    /// Globally disables interrupts.
    fn disable(&mut self);
    /// Signals the end of an interrupt to the controller.
    fn end_of_interrupt(&mut self, vector: u8);
}
