//! Global Descriptor Table setup.
//!
//! One flat ring-0 code segment is all this kernel needs; its selector is
//! what every interrupt gate references.

use lazy_static::lazy_static;
use x86_64::instructions::segmentation::{Segment, CS};
use x86_64::structures::gdt::{Descriptor, GlobalDescriptorTable, SegmentSelector};

struct Selectors {
    code: SegmentSelector,
}

lazy_static! {
    static ref GDT: (GlobalDescriptorTable, Selectors) = {
        let mut gdt = GlobalDescriptorTable::new();
        let code = gdt.add_entry(Descriptor::kernel_code_segment());
        (gdt, Selectors { code })
    };
}

/// Loads the table and reloads the code segment register.
pub fn init() {
    GDT.0.load();
    // SAFETY: the selector indexes the kernel code segment in the table
    // that was just loaded.
    unsafe {
        CS::set_reg(GDT.1.code);
    }
}

/// The kernel code-segment selector referenced by every interrupt gate.
pub fn code_selector() -> SegmentSelector {
    GDT.1.code
}
