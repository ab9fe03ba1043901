//! Interrupt Descriptor Table structures, built field by field.
//!
//! Gate descriptors are composed bit by bit rather than delegated to a
//! library type: a single wrong field here corrupts the CPU's dispatch
//! table, so the layout is spelled out exactly (Intel SDM Vol. 3A, §6.14.1).

use core::mem;
use x86_64::instructions::tables::lidt;
use x86_64::structures::idt::InterruptStackFrame;
use x86_64::structures::DescriptorTablePointer;
use x86_64::VirtAddr;

/// Number of gate slots the CPU consults.
pub const ENTRY_COUNT: usize = 256;

/// Gate-type tag for an interrupt gate (clears IF on entry).
pub const GATE_INTERRUPT: u8 = 0xE;

/// Present flag in the access byte.
const PRESENT: u8 = 0x80;

/// The handler signature the CPU calls through a gate.
pub type HandlerFn = extern "x86-interrupt" fn(InterruptStackFrame);

/// One 16-byte interrupt gate.
///
/// The handler address is split across three fields; the access byte packs
/// the present flag, the 2-bit privilege level, and the gate-type tag. The
/// IST byte stays zero (no stack switching).
#[derive(Debug, Clone, Copy)]
#[repr(C, packed)]
pub struct GateDescriptor {
    offset_low: u16,
    selector: u16,
    ist: u8,
    access: u8,
    offset_mid: u16,
    offset_high: u32,
    reserved: u32,
}

impl GateDescriptor {
    /// A zeroed, non-present gate. The table never exposes these once
    /// setup has run; they exist only as the pre-fill state.
    pub const fn missing() -> Self {
        GateDescriptor {
            offset_low: 0,
            selector: 0,
            ist: 0,
            access: 0,
            offset_mid: 0,
            offset_high: 0,
            reserved: 0,
        }
    }

    /// Composes a present gate for `handler_address`.
    pub fn new(handler_address: u64, selector: u16, privilege_level: u8, gate_type: u8) -> Self {
        GateDescriptor {
            offset_low: (handler_address & 0xFFFF) as u16,
            selector,
            ist: 0,
            access: PRESENT | ((privilege_level & 0x3) << 5) | (gate_type & 0xF),
            offset_mid: ((handler_address >> 16) & 0xFFFF) as u16,
            offset_high: (handler_address >> 32) as u32,
            reserved: 0,
        }
    }

    /// Whether the present flag is set.
    pub fn is_present(&self) -> bool {
        self.access & PRESENT != 0
    }

    /// The 2-bit descriptor privilege level.
    pub fn privilege_level(&self) -> u8 {
        (self.access >> 5) & 0x3
    }

    /// The gate-type tag.
    pub fn gate_type(&self) -> u8 {
        self.access & 0xF
    }

    /// The code-segment selector the gate references.
    pub fn segment_selector(&self) -> u16 {
        self.selector
    }

    /// The handler address reassembled from its three fields.
    pub fn handler_address(&self) -> u64 {
        let low = self.offset_low as u64;
        let mid = self.offset_mid as u64;
        let high = self.offset_high as u64;
        low | (mid << 16) | (high << 32)
    }
}

/// The fixed-size table of gates.
#[repr(transparent)]
pub struct InterruptTable {
    entries: [GateDescriptor; ENTRY_COUNT],
}

impl InterruptTable {
    /// A table of non-present gates.
    pub const fn empty() -> Self {
        InterruptTable {
            entries: [GateDescriptor::missing(); ENTRY_COUNT],
        }
    }

    /// Writes one gate.
    ///
    /// Only valid before the table is live: the CPU may walk a loaded table
    /// concurrently with any later write.
    pub fn install(
        &mut self,
        slot: u8,
        handler: HandlerFn,
        selector: u16,
        privilege_level: u8,
        gate_type: u8,
    ) {
        self.entries[slot as usize] =
            GateDescriptor::new(handler as usize as u64, selector, privilege_level, gate_type);
    }

    /// Points every slot at `handler` as a ring-0 interrupt gate.
    ///
    /// Run first during setup so no slot is ever left as garbage; the real
    /// handlers overwrite their slots afterwards.
    pub fn fill(&mut self, handler: HandlerFn, selector: u16) {
        for slot in 0..ENTRY_COUNT {
            self.entries[slot] =
                GateDescriptor::new(handler as usize as u64, selector, 0, GATE_INTERRUPT);
        }
    }

    /// Returns a copy of one gate.
    pub fn entry(&self, slot: u8) -> GateDescriptor {
        self.entries[slot as usize]
    }

    /// Loads this table into the CPU.
    ///
    /// The pointer record (size, base) is built on the stack and consumed
    /// by the single `lidt`; the CPU keeps its own copy.
    ///
    /// # Safety
    ///
    /// Every slot must hold a valid gate, and the table must stay alive and
    /// in place for as long as it remains loaded. The `'static` bound
    /// covers lifetime but not validity of the gates.
    pub unsafe fn load(&'static self) {
        let pointer = DescriptorTablePointer {
            limit: (mem::size_of::<InterruptTable>() - 1) as u16,
            base: VirtAddr::new(self as *const InterruptTable as u64),
        };
        lidt(&pointer);
    }
}
