//! Drives the scancode-to-solver pipeline the way the keyboard interrupt
//! does, minus the hardware: raw set 1 scancodes in, solved roots out.

#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(juuri_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use core::panic::PanicInfo;
use juuri_kernel::testutil::{exit_qemu, QemuExitCode};
use juuri_common::quadratic::{self, Roots};
use juuri_common::{decode_scancode, CoefficientCollector, LineEditor, LineReaction};

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

/// Feeds raw scancodes through decode + line editing, collecting submits.
fn feed(
    editor: &mut LineEditor,
    collector: &mut CoefficientCollector,
    scancodes: &[u8],
) -> Option<(i32, Roots)> {
    let mut solved = None;
    for &code in scancodes {
        let key = match decode_scancode(code) {
            Some(key) => key,
            None => continue,
        };
        if let LineReaction::Submit(value) = editor.handle_key(key) {
            if let Some(co) = collector.push(value) {
                solved = Some((quadratic::discriminant(co), quadratic::solve(co)));
            }
        }
    }
    solved
}

#[test_case]
fn three_lines_solve_the_equation() {
    let mut editor = LineEditor::new();
    let mut collector = CoefficientCollector::new();

    // "1\n", "0\n", "-4\n" in set 1 make codes, with the key releases
    // (break codes) interleaved the way real hardware sends them.
    let scancodes = [
        0x02, 0x82, 0x1c, 0x9c, // 1, Enter
        0x0b, 0x8b, 0x1c, 0x9c, // 0, Enter
        0x0c, 0x8c, 0x05, 0x85, 0x1c, 0x9c, // -, 4, Enter
    ];

    let solved = feed(&mut editor, &mut collector, &scancodes);
    assert_eq!(solved, Some((16, Roots::TwoIntegral { x1: 2, x2: -2 })));
}

#[test_case]
fn backspace_edits_the_line() {
    let mut editor = LineEditor::new();
    let mut collector = CoefficientCollector::new();

    // Type "9", rub it out, type "1": the first coefficient is 1.
    let scancodes = [0x0a, 0x0e, 0x02, 0x1c];
    assert_eq!(feed(&mut editor, &mut collector, &scancodes), None);

    // Finish with "0" and "-144" to reach a solve: x^2 = 144.
    let rest = [
        0x0b, 0x1c, // 0, Enter
        0x0c, 0x02, 0x05, 0x05, 0x1c, // -, 1, 4, 4, Enter
    ];
    let solved = feed(&mut editor, &mut collector, &rest);
    assert_eq!(
        solved,
        Some((576, Roots::TwoIntegral { x1: 12, x2: -12 }))
    );
}

#[test_case]
fn modifier_keys_do_not_disturb_input() {
    let mut editor = LineEditor::new();
    let mut collector = CoefficientCollector::new();

    // Shift and ctrl around "7" must decode to nothing.
    let scancodes = [0x2a, 0x08, 0xaa, 0x1d, 0x1c];
    assert_eq!(feed(&mut editor, &mut collector, &scancodes), None);
    assert_eq!(collector.stage(), 1);
}
