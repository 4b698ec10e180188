use crate::bindriver::cpu::pic::{PICS, PIC_1_MASK, PIC_2_MASK};

#[test_case]
fn test_only_keyboard_irq_unmasked() {
  let masks = unsafe { PICS.lock().read_masks() };
  assert_eq!(masks, [PIC_1_MASK, PIC_2_MASK]);
  assert_eq!(masks[0] & 0b01, 0b01, "timer IRQ0 must stay masked");
  assert_eq!(masks[0] & 0b10, 0, "keyboard IRQ1 must be open");
}
