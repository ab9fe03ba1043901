//! JuuriOS Kernel
//!
//! A minimal interrupt-driven kernel for x86_64: it programs the interrupt
//! descriptor table and the cascaded 8259 controllers by hand, decodes PS/2
//! keyboard input into lines, and runs an interactive quadratic-equation
//! solver on top.
//!
//! # Architecture
//!
//! - `arch`: Platform-specific code (port I/O, GDT, IDT, PIC, dispatch, VGA, serial)
//! - `input`: scancode-to-line glue driven from the keyboard interrupt
//! - `solver`: the coefficient-entry application layer
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![cfg_attr(test, no_main)]
#![feature(abi_x86_interrupt)]
#![feature(custom_test_frameworks)]
#![test_runner(crate::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod input;
pub mod logger;
pub mod solver;
pub mod tests;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to set up essential services. Interrupts
/// are not touched here; the interrupt manager is activated separately once
/// the rest of the kernel is ready for it.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
        arch::x86_64::vga::init();
        arch::x86_64::gdt::init();
    }
    logger::init();
}

#[cfg(test)]
bootloader::entry_point!(test_kernel_main);

/// Entry point for `cargo test` builds of the library.
#[cfg(test)]
fn test_kernel_main(_boot_info: &'static bootloader::BootInfo) -> ! {
    init();
    test_main();
    arch::x86_64::halt_loop()
}

#[cfg(test)]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    testutil::test_panic_handler(info)
}
