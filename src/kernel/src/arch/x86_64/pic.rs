//! Support for the primary and secondary 8259 Programmable Interrupt
//! Controllers (PICs), programmed directly over their command/data ports.
//!
//! Out of reset the controllers map their sixteen lines over the CPU's
//! reserved trap vectors, so they must be reinitialized with a vector
//! offset before interrupts are enabled. The initialization command words
//! go out one slow write at a time; the chips cannot absorb them at full
//! bus speed.

use super::port::SlowPort8;
use juuri_hal::PortIo;

/// The offset of the first PIC (master).
///
/// IRQs 0..7 are mapped to interrupts 32..39.
pub const PIC_1_OFFSET: u8 = 32;

/// The offset of the second PIC (slave).
///
/// IRQs 8..15 are mapped to interrupts 40..47.
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Command/data port of the primary controller.
const PIC_1_COMMAND_PORT: u16 = 0x20;
const PIC_1_DATA_PORT: u16 = 0x21;

/// Command/data port of the secondary controller.
const PIC_2_COMMAND_PORT: u16 = 0xA0;
const PIC_2_DATA_PORT: u16 = 0xA1;

/// ICW1: begin initialization, ICW4 will follow.
const CMD_INITIALIZE: u8 = 0x11;
/// OCW2: end of interrupt.
const CMD_END_OF_INTERRUPT: u8 = 0x20;
/// ICW3 for the primary: the secondary hangs off IRQ line 2 (bitmask).
const CASCADE_LINE_MASK: u8 = 0x04;
/// ICW3 for the secondary: its cascade identity.
const CASCADE_IDENTITY: u8 = 0x02;
/// ICW4: 8086/8088 mode.
const MODE_8086: u8 = 0x01;
/// OCW1: no line masked.
const UNMASK_ALL: u8 = 0x00;

/// Number of hardware lines across the chained pair.
pub const HARDWARE_LINES: u8 = 16;

/// IRQ lines with real handlers wired to them.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum IrqLine {
    /// Programmable interval timer, line 0.
    Timer = 0,
    /// PS/2 keyboard, line 1.
    Keyboard = 1,
}

impl IrqLine {
    /// Returns the line number.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// The chained pair of 8259 controllers.
///
/// Generic over the port capability so the initialization and
/// acknowledgement protocols can be exercised against recording ports; the
/// kernel instantiates it over [`SlowPort8`].
pub struct ChainedPics<P: PortIo> {
    offset: u8,
    primary_command: P,
    primary_data: P,
    secondary_command: P,
    secondary_data: P,
}

impl ChainedPics<SlowPort8> {
    /// A controller pair at the standard PC port addresses.
    ///
    /// `offset` is the vector at which hardware interrupts begin; it must
    /// leave [`HARDWARE_LINES`] contiguous gate slots free.
    pub const fn new(offset: u8) -> Self {
        ChainedPics {
            offset,
            primary_command: SlowPort8::new(PIC_1_COMMAND_PORT),
            primary_data: SlowPort8::new(PIC_1_DATA_PORT),
            secondary_command: SlowPort8::new(PIC_2_COMMAND_PORT),
            secondary_data: SlowPort8::new(PIC_2_DATA_PORT),
        }
    }
}

impl<P: PortIo> ChainedPics<P> {
    /// A controller pair over caller-supplied ports, in
    /// (primary command, primary data, secondary command, secondary data)
    /// order.
    pub fn with_ports(
        offset: u8,
        primary_command: P,
        primary_data: P,
        secondary_command: P,
        secondary_data: P,
    ) -> Self {
        debug_assert!(offset as usize + HARDWARE_LINES as usize <= 256);
        ChainedPics {
            offset,
            primary_command,
            primary_data,
            secondary_command,
            secondary_data,
        }
    }

    /// The configured vector offset.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Runs the initialization command sequence on both controllers.
    ///
    /// Order matters and each step is a single write: initialize command to
    /// both, vector offsets (the secondary always sits 8 vectors above the
    /// primary), cascade wiring, 8086 mode, then unmask every line.
    pub fn initialize(&mut self) {
        self.primary_command.write(CMD_INITIALIZE);
        self.secondary_command.write(CMD_INITIALIZE);

        self.primary_data.write(self.offset);
        self.secondary_data.write(self.offset + 8);

        self.primary_data.write(CASCADE_LINE_MASK);
        self.secondary_data.write(CASCADE_IDENTITY);

        self.primary_data.write(MODE_8086);
        self.secondary_data.write(MODE_8086);

        self.primary_data.write(UNMASK_ALL);
        self.secondary_data.write(UNMASK_ALL);
    }

    /// True if `vector` belongs to one of the sixteen hardware lines.
    pub fn handles(&self, vector: u8) -> bool {
        (self.offset..self.offset + HARDWARE_LINES).contains(&vector)
    }

    /// Sends end-of-interrupt for a serviced vector.
    ///
    /// The primary controller is always acknowledged; the secondary only
    /// when the interrupt originated on its chain. A missed acknowledgement
    /// silences that line forever, so this must run before the handler
    /// returns. Vectors outside the hardware range are not acknowledged at
    /// all.
    pub fn acknowledge(&mut self, vector: u8) {
        if !self.handles(vector) {
            return;
        }
        self.primary_command.write(CMD_END_OF_INTERRUPT);
        if vector >= self.offset + 8 {
            self.secondary_command.write(CMD_END_OF_INTERRUPT);
        }
    }
}
