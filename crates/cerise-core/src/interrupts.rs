use bitflags::bitflags;

// Interrupt vectors (gbdev.io/pandocs/Interrupts.html)
const VECTOR_VBLANK: u16 = 0x40;
const VECTOR_STAT: u16 = 0x48;
const VECTOR_TIMER: u16 = 0x50;
const VECTOR_SERIAL: u16 = 0x58;
const VECTOR_JOYPAD: u16 = 0x60;

bitflags! {
    /// Interrupt request/enable bits as laid out in the IF and IE
    /// registers (bit 0 is VBlank, bit 4 is Joypad).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Interrupts: u8 {
        const VBLANK = 1 << 0;
        const STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl Interrupts {
    /// The highest-priority set bit, VBlank first.
    pub fn highest_priority(self) -> Option<Interrupts> {
        [
            Interrupts::VBLANK,
            Interrupts::STAT,
            Interrupts::TIMER,
            Interrupts::SERIAL,
            Interrupts::JOYPAD,
        ]
        .into_iter()
        .find(|it| self.contains(*it))
    }

    /// Service vector for a single interrupt bit.
    pub fn vector(self) -> u16 {
        match self.bits() {
            0x01 => VECTOR_VBLANK,
            0x02 => VECTOR_STAT,
            0x04 => VECTOR_TIMER,
            0x08 => VECTOR_SERIAL,
            0x10 => VECTOR_JOYPAD,
            _ => unreachable!("vector() takes a single interrupt bit"),
        }
    }
}
