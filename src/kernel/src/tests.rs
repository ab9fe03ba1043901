//! Boot-time self checks.
//!
//! The interrupt plumbing cannot be exercised by a host test harness, so
//! its observable contracts are checked once during boot, before interrupts
//! are enabled, with results on the serial port. The controller protocol is
//! driven against recording ports; the gate checks run against a locally
//! built table, not the live one.

use crate::arch::x86_64::idt::{GateDescriptor, InterruptTable, ENTRY_COUNT, GATE_INTERRUPT};
use crate::arch::x86_64::pic::ChainedPics;
use crate::serial_println;
use core::cell::RefCell;
use juuri_hal::PortIo;
use x86_64::structures::idt::InterruptStackFrame;

/// Runs all self checks. Panics (and thus reports over serial) on failure.
pub fn run_all() {
    serial_println!("Running self checks...");

    check_gate_descriptor_bits();
    check_table_fill_and_wiring();
    check_controller_init_sequence();
    check_acknowledge_routing();

    serial_println!("All self checks passed!");
}

/// Which controller port a recorded write went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    PrimaryCommand,
    PrimaryData,
    SecondaryCommand,
    SecondaryData,
}

/// Fixed-capacity record of port writes, in order, across all four ports.
struct WriteLog {
    entries: [(Line, u8); 32],
    len: usize,
}

impl WriteLog {
    const fn new() -> Self {
        WriteLog {
            entries: [(Line::PrimaryCommand, 0); 32],
            len: 0,
        }
    }

    fn push(&mut self, line: Line, value: u8) {
        assert!(self.len < self.entries.len(), "write log overflow");
        self.entries[self.len] = (line, value);
        self.len += 1;
    }

    fn entries(&self) -> &[(Line, u8)] {
        &self.entries[..self.len]
    }
}

/// A port that records writes instead of touching hardware.
struct RecordingPort<'a> {
    line: Line,
    log: &'a RefCell<WriteLog>,
}

impl PortIo for RecordingPort<'_> {
    fn write(&mut self, value: u8) {
        self.log.borrow_mut().push(self.line, value);
    }

    fn read(&mut self) -> u8 {
        0
    }
}

fn recording_pics(offset: u8, log: &RefCell<WriteLog>) -> ChainedPics<RecordingPort<'_>> {
    ChainedPics::with_ports(
        offset,
        RecordingPort { line: Line::PrimaryCommand, log },
        RecordingPort { line: Line::PrimaryData, log },
        RecordingPort { line: Line::SecondaryCommand, log },
        RecordingPort { line: Line::SecondaryData, log },
    )
}

extern "x86-interrupt" fn inert_handler(_stack_frame: InterruptStackFrame) {}
extern "x86-interrupt" fn wired_handler(_stack_frame: InterruptStackFrame) {}

fn check_gate_descriptor_bits() {
    serial_println!("check_gate_descriptor_bits... ");

    let gate = GateDescriptor::new(0x1122_3344_5566_7788, 0x08, 0, GATE_INTERRUPT);
    assert!(gate.is_present());
    assert_eq!(gate.privilege_level(), 0);
    assert_eq!(gate.gate_type(), GATE_INTERRUPT);
    assert_eq!(gate.segment_selector(), 0x08);
    assert_eq!(gate.handler_address(), 0x1122_3344_5566_7788);

    let user_gate = GateDescriptor::new(0xFFFF_FFFF_FFFF_FFFF, 0x10, 3, GATE_INTERRUPT);
    assert_eq!(user_gate.privilege_level(), 3);
    assert_eq!(user_gate.handler_address(), 0xFFFF_FFFF_FFFF_FFFF);

    assert!(!GateDescriptor::missing().is_present());

    serial_println!("[ok]");
}

fn check_table_fill_and_wiring() {
    serial_println!("check_table_fill_and_wiring... ");

    let offset: u8 = 0x20;
    let selector: u16 = 0x08;
    let mut table = InterruptTable::empty();
    table.fill(inert_handler, selector);
    table.install(offset, wired_handler, selector, 0, GATE_INTERRUPT);
    table.install(offset + 1, wired_handler, selector, 0, GATE_INTERRUPT);

    let inert_address = inert_handler as usize as u64;
    let wired_address = wired_handler as usize as u64;

    for slot in 0..ENTRY_COUNT {
        let gate = table.entry(slot as u8);
        assert!(gate.is_present());
        assert_eq!(gate.gate_type(), GATE_INTERRUPT);
        assert_eq!(gate.segment_selector(), selector);
        if slot == offset as usize || slot == offset as usize + 1 {
            assert_eq!(gate.handler_address(), wired_address);
        } else {
            assert_eq!(gate.handler_address(), inert_address);
        }
    }

    serial_println!("[ok]");
}

fn check_controller_init_sequence() {
    serial_println!("check_controller_init_sequence... ");

    for offset in [0x20u8, 0x40] {
        let log = RefCell::new(WriteLog::new());
        recording_pics(offset, &log).initialize();

        let expected = [
            (Line::PrimaryCommand, 0x11),
            (Line::SecondaryCommand, 0x11),
            (Line::PrimaryData, offset),
            (Line::SecondaryData, offset + 8),
            (Line::PrimaryData, 0x04),
            (Line::SecondaryData, 0x02),
            (Line::PrimaryData, 0x01),
            (Line::SecondaryData, 0x01),
            (Line::PrimaryData, 0x00),
            (Line::SecondaryData, 0x00),
        ];
        assert_eq!(log.borrow().entries(), &expected[..]);
    }

    serial_println!("[ok]");
}

fn check_acknowledge_routing() {
    serial_println!("check_acknowledge_routing... ");

    let offset: u8 = 0x20;

    // Primary-chain vector: primary acknowledged, secondary untouched.
    let log = RefCell::new(WriteLog::new());
    let mut pics = recording_pics(offset, &log);
    assert!(pics.handles(offset));
    pics.acknowledge(offset + 3);
    assert_eq!(log.borrow().entries(), &[(Line::PrimaryCommand, 0x20)][..]);

    // Secondary-chain vectors: both acknowledged, primary first.
    for vector in [offset + 8, offset + 15] {
        let log = RefCell::new(WriteLog::new());
        recording_pics(offset, &log).acknowledge(vector);
        assert_eq!(
            log.borrow().entries(),
            &[(Line::PrimaryCommand, 0x20), (Line::SecondaryCommand, 0x20)][..]
        );
    }

    // Out-of-range vectors: no acknowledgement at all.
    for vector in [0x00, 0x13, offset - 1, offset + 16, 0xFF] {
        let log = RefCell::new(WriteLog::new());
        let mut pics = recording_pics(offset, &log);
        assert!(!pics.handles(vector));
        pics.acknowledge(vector);
        assert!(log.borrow().entries().is_empty());
    }

    serial_println!("[ok]");
}
