//! JuuriOS Kernel Entry Point
//!
//! Brings up the console, the segment table, and the interrupt machinery,
//! then hands the keyboard to the quadratic solver and idles. Everything
//! after `enable()` happens in interrupt context.

#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(juuri_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use juuri_kernel::arch::x86_64::pic::PIC_1_OFFSET;
use juuri_kernel::arch::x86_64::{self, interrupts, vga::Color};
use juuri_kernel::boot::{self, Status};
use juuri_kernel::{println, serial_println};
use log::info;

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    juuri_kernel::init();

    x86_64::vga::clear_screen();
    boot::banner::print_banner();

    boot::log(Status::Ok, "Serial port initialized");
    boot::log(Status::Ok, "GDT loaded");

    interrupts::InterruptManager::activate(PIC_1_OFFSET);
    boot::log(Status::Ok, "Interrupt tables loaded");
    boot::log_detail("256 gates installed, controllers remapped to 0x20");
    info!("interrupt manager active at offset {:#x}", PIC_1_OFFSET);

    #[cfg(test)]
    test_main();

    boot::log(Status::Info, "Running self checks");
    juuri_kernel::tests::run_all();
    boot::log(Status::Ok, "Self checks passed");

    println!();
    juuri_kernel::solver::start();

    // From here on the keyboard interrupt drives everything; the main
    // thread only sleeps between interrupts.
    interrupts::enable();
    loop {
        x86_64::hlt();
    }
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[cfg(not(test))]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    interrupts::disable();

    serial_println!("KERNEL PANIC: {}", info);

    x86_64::vga::set_color(Color::LightRed, Color::Black);
    println!("\n\n!!! KERNEL PANIC !!!");
    x86_64::vga::set_color(Color::White, Color::Black);
    println!("{}", info);

    x86_64::halt_loop()
}

#[cfg(test)]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    juuri_kernel::testutil::test_panic_handler(info)
}
