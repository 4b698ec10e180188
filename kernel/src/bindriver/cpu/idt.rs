use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame, PageFaultErrorCode};
use crate::bindriver::cpu::pic::{end_of_interrupt, PIC_1_OFFSET};

pub const KEYBOARD_INTERRUPT_ID: u8 = PIC_1_OFFSET + 1;

macro_rules! busy_intr_handler {
    ($name:ident) => {
        extern "x86-interrupt" fn $name(stack_frame: InterruptStackFrame) {
            crate::bindriver::crack_locks();
            error!("Interrupt {}:\n{:?}", stringify!($name), stack_frame);
            hlt_cpu!();
        }
    };
}

macro_rules! busy_intr_handle_errcode {
    ($name:ident) => {
        extern "x86-interrupt" fn $name(stack_frame: InterruptStackFrame, err: u64) {
            crate::bindriver::crack_locks();
            error!("Interrupt {} ({:#018x}):\n{:?}", stringify!($name), err, stack_frame);
            hlt_cpu!();
        }
    };
}

macro_rules! intr {
    ($idt:ident, $name:ident) => {
        $idt.$name.set_handler_fn($name);
    };
}

lazy_static! {
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        intr!(idt, divide_error);
        intr!(idt, non_maskable_interrupt);
        intr!(idt, breakpoint);
        intr!(idt, overflow);
        intr!(idt, bound_range_exceeded);
        intr!(idt, invalid_opcode);
        intr!(idt, device_not_available);
        intr!(idt, double_fault);
        intr!(idt, invalid_tss);
        intr!(idt, segment_not_present);
        intr!(idt, stack_segment_fault);
        intr!(idt, general_protection_fault);
        intr!(idt, page_fault);
        intr!(idt, machine_check);
        idt[KEYBOARD_INTERRUPT_ID].set_handler_fn(keyboard_interrupt);
        idt
    };
}

pub fn init() {
    IDT.load();
}

busy_intr_handler!(divide_error);
busy_intr_handler!(non_maskable_interrupt);
busy_intr_handler!(overflow);
busy_intr_handler!(bound_range_exceeded);
busy_intr_handler!(invalid_opcode);
busy_intr_handler!(device_not_available);
busy_intr_handle_errcode!(invalid_tss);
busy_intr_handle_errcode!(segment_not_present);
busy_intr_handle_errcode!(stack_segment_fault);
busy_intr_handle_errcode!(general_protection_fault);

extern "x86-interrupt" fn breakpoint(stack_frame: InterruptStackFrame) {
    debug!("BREAKPOINT\n{:#?}", stack_frame);
}

extern "x86-interrupt" fn machine_check(stack_frame: InterruptStackFrame) -> ! {
    crate::bindriver::crack_locks();
    error!("Machine Check, Kernel Halting...\n{:?}", stack_frame);
    hlt_cpu!();
}

extern "x86-interrupt" fn double_fault(stack_frame: InterruptStackFrame, error_code: u64) -> ! {
    crate::bindriver::crack_locks();
    error!("Double Fault, Kernel Halting...");
    error!("Error: {:x}", error_code);
    println!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
    println!("\n\nBUSY LOOPING CORE");
    hlt_cpu!();
}

extern "x86-interrupt" fn page_fault(
    stack_frame: InterruptStackFrame,
    error_code: PageFaultErrorCode,
) {
    use x86_64::registers::control::Cr2;
    crate::bindriver::crack_locks();
    error!(
        "Page Fault at {:?} ({:?}):\n{:?}",
        Cr2::read(),
        error_code,
        stack_frame
    );
    hlt_cpu!();
}

extern "x86-interrupt" fn keyboard_interrupt(_stack_frame: InterruptStackFrame) {
    crate::bindriver::keyboard::handle_interrupt();
    end_of_interrupt(KEYBOARD_INTERRUPT_ID);
}
