//! Boot banner and branding.

use crate::arch::x86_64::vga::{self, Color};
use crate::println;

/// Print the JuuriOS boot banner.
pub fn print_banner() {
    vga::set_color(Color::Cyan, Color::Black);
    println!("     _                   _  ___  ____  ");
    println!("    | |_   _ _   _ _ __ (_)/ _ \\/ ___| ");
    println!(" _  | | | | | | | | '__|| | | | \\___ \\ ");
    println!("| |_| | |_| | |_| | |   | | |_| |___) |");
    println!(" \\___/ \\__,_|\\__,_|_|   |_|\\___/|____/ ");
    println!();
    vga::set_color(Color::White, Color::Black);
    println!(" JuuriOS v0.1.0");
    println!();
}
