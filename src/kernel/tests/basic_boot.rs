#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(juuri_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use core::panic::PanicInfo;
use juuri_kernel::testutil::{exit_qemu, QemuExitCode};
use juuri_kernel::{print, println};

#[no_mangle]
pub extern "C" fn _start() -> ! {
    test_main();
    exit_qemu(QemuExitCode::Success);
    loop {}
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    juuri_kernel::testutil::test_panic_handler(info)
}

#[test_case]
fn trivial_assertion() {
    assert_eq!(1, 1);
}

#[test_case]
fn vga_output_does_not_panic() {
    println!("basic boot output");
    // Backspace rub-out must be accepted by the writer too.
    print!("x\x08 \x08");
}
