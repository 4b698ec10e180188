use pic8259::ChainedPics;

pub const PIC_1_OFFSET: u8 = 32;
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Only IRQ1 (keyboard) is open, everything else stays masked.
pub const PIC_1_MASK: u8 = 0b1111_1101;
pub const PIC_2_MASK: u8 = 0b1111_1111;

pub static PICS: spin::Mutex<ChainedPics> =
  spin::Mutex::new(unsafe {
    ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET)
  });

pub fn init() {
  let mut pics = PICS.lock();
  unsafe {
    pics.initialize();
    pics.write_masks(PIC_1_MASK, PIC_2_MASK);
  }
  debug!("PIC remapped to {}/{}", PIC_1_OFFSET, PIC_2_OFFSET);
}

pub fn end_of_interrupt(id: u8) {
  unsafe { PICS.lock().notify_end_of_interrupt(id) }
}
