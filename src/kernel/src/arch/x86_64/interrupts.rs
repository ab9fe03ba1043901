//! Interrupt table management and dispatch for x86_64.
//!
//! [`InterruptManager::activate`] builds the gate table, reprograms the
//! controller pair, and loads the table; [`enable`] then admits interrupts.
//! Every wired gate funnels into [`InterruptManager::handle_interrupt`],
//! which routes the keyboard line to the input layer and acknowledges the
//! controllers.
//!
//! The hardware calls gates as plain function addresses with no way to pass
//! an instance along, so exactly one manager is registered process-wide and
//! the trampolines look it up. Deliberate singleton-by-hardware-constraint,
//! not a convenience.

use super::gdt;
use super::idt::{InterruptTable, ENTRY_COUNT, GATE_INTERRUPT};
use super::pic::{ChainedPics, IrqLine, HARDWARE_LINES};
use super::port::{Port8, SlowPort8};
use spin::Mutex;
use x86_64::structures::idt::InterruptStackFrame;

/// PS/2 keyboard controller data port.
const KEYBOARD_DATA_PORT: u16 = 0x60;

/// The gate table the CPU consults.
///
/// Mutated only during [`InterruptManager::activate`], before interrupts
/// are admitted; from then on the CPU reads it and nobody writes it.
static mut IDT: InterruptTable = InterruptTable::empty();

/// The registered dispatch target.
///
/// Set at the end of `activate`, cleared by [`deactivate`]. Mainline code
/// must not hold this lock with interrupts enabled, or a concurrent
/// interrupt would spin on it forever.
static ACTIVE: Mutex<Option<InterruptManager>> = Mutex::new(None);

/// Owns the controller pair and the routing policy for one vector offset.
pub struct InterruptManager {
    pics: ChainedPics<SlowPort8>,
}

impl InterruptManager {
    /// Full interrupt bring-up at the given vector offset.
    ///
    /// Fills all 256 slots with the inert handler, wires the timer and
    /// keyboard lines at `offset` and `offset + 1`, runs the controller
    /// initialization sequence, loads the table, and registers the manager
    /// as the active dispatch target.
    ///
    /// Must complete before [`enable`] is called. The offset is static
    /// configuration: it has to leave sixteen contiguous slots free, and a
    /// wrong value is a caller bug the hardware gives no way to recover
    /// from.
    pub fn activate(offset: u8) {
        debug_assert!(offset as usize + HARDWARE_LINES as usize <= ENTRY_COUNT);

        let selector = gdt::code_selector().0;

        // SAFETY: single-threaded setup path with interrupts disabled; the
        // CPU cannot be walking the table while it is written.
        let table = unsafe { &mut *core::ptr::addr_of_mut!(IDT) };
        table.fill(ignored_interrupt_handler, selector);
        table.install(
            offset + IrqLine::Timer.as_u8(),
            timer_interrupt_handler,
            selector,
            0,
            GATE_INTERRUPT,
        );
        table.install(
            offset + IrqLine::Keyboard.as_u8(),
            keyboard_interrupt_handler,
            selector,
            0,
            GATE_INTERRUPT,
        );

        let mut pics = ChainedPics::new(offset);
        pics.initialize();

        // SAFETY: every slot was just filled with a valid gate, and the
        // table is a static that stays in place for the kernel's lifetime.
        unsafe { (*core::ptr::addr_of!(IDT)).load() };

        *ACTIVE.lock() = Some(InterruptManager { pics });
    }

    /// Routes one interrupt by vector number.
    ///
    /// Vectors outside the hardware range (software traps, CPU exceptions)
    /// are deliberately ignored; this kernel has no recovery policy for
    /// them and absorbing them beats resetting. In-range vectors are always
    /// acknowledged, with the keyboard serviced first.
    fn handle_interrupt(&mut self, vector: u8) {
        if !self.pics.handles(vector) {
            return;
        }
        if vector == self.pics.offset() + IrqLine::Keyboard.as_u8() {
            self.handle_keyboard();
        }
        self.pics.acknowledge(vector);
    }

    /// Reads one scancode and hands it to the input layer.
    fn handle_keyboard(&mut self) {
        let mut data_port = Port8::new(KEYBOARD_DATA_PORT);
        let scancode = data_port.read();
        crate::input::handle_scancode(scancode);
    }
}

impl Drop for InterruptManager {
    fn drop(&mut self) {
        // A manager that ceases to exist stops admitting interrupts; the
        // table it leaves loaded stays valid but nothing will be routed.
        disable();
    }
}

impl juuri_hal::InterruptController for InterruptManager {
    fn enable(&mut self) {
        enable();
    }

    fn disable(&mut self) {
        disable();
    }

    fn end_of_interrupt(&mut self, vector: u8) {
        self.pics.acknowledge(vector);
    }
}

/// Globally admits interrupts. Call only after [`InterruptManager::activate`].
pub fn enable() {
    x86_64::instructions::interrupts::enable();
}

/// Globally stops admitting interrupts. Safe to call any number of times.
pub fn disable() {
    x86_64::instructions::interrupts::disable();
}

/// Drops the active manager, disabling interrupts on the way out.
pub fn deactivate() {
    disable();
    *ACTIVE.lock() = None;
}

/// Looks up the active manager and dispatches one hardware line.
fn dispatch_line(line: IrqLine) {
    let mut active = ACTIVE.lock();
    if let Some(manager) = active.as_mut() {
        let vector = manager.pics.offset() + line.as_u8();
        manager.handle_interrupt(vector);
    }
}

/// Trampoline for the timer line.
extern "x86-interrupt" fn timer_interrupt_handler(_stack_frame: InterruptStackFrame) {
    dispatch_line(IrqLine::Timer);
}

/// Trampoline for the keyboard line.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    dispatch_line(IrqLine::Keyboard);
}

/// Inert default handler occupying every slot without a real handler.
///
/// Present so an unexpected trap or interrupt lands on a valid gate instead
/// of undefined table contents.
extern "x86-interrupt" fn ignored_interrupt_handler(_stack_frame: InterruptStackFrame) {}
