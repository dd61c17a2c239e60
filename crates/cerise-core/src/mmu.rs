use log::trace;

use crate::{
    cartridge::Cartridge,
    input::{Button, Input},
    interrupts::Interrupts,
    ppu::Ppu,
    timer::Timer,
};

const WRAM_BANK_SIZE: usize = 0x1000;
const OAM_DMA_LEN: u16 = 0xA0;
const HDMA_BLOCK_LEN: u16 = 0x10;

/// CGB VRAM DMA transfer state (HDMA1-HDMA5).
///
/// Created by a write to 0xFF55 with bit 7 set; moves one 0x10-byte
/// block at each H-Blank entry until the length runs out, or until the
/// transfer is cancelled by a bit-7-clear write.
#[derive(Debug)]
struct HdmaState {
    /// 16-bit source pointer (upper 12 bits writable)
    src: u16,
    /// Destination offset into VRAM (masked to 0x1FF0)
    dst: u16,
    /// Remaining bytes, always a multiple of 0x10
    length: u16,
    /// Progress through the programmed range
    position: u16,
    active: bool,
    /// Set by an explicit cancellation (FF55 <- bit 7 clear)
    cancelled: bool,
}

impl HdmaState {
    fn idle() -> Self {
        Self {
            src: 0,
            dst: 0,
            length: 0,
            position: 0,
            active: false,
            cancelled: false,
        }
    }
}

/// Memory map and hardware plumbing: WRAM/HRAM, the cartridge slot,
/// IF/IE, the PPU, timer and joypad, OAM DMA and the CGB VRAM DMA.
pub struct Mmu {
    pub wram: [[u8; WRAM_BANK_SIZE]; 8],
    pub wram_bank: usize,
    pub hram: [u8; 0x7F],
    /// Plain-slot register file for I/O with no dedicated engine
    /// (serial data/control, the APU range, unused slots).
    pub io: [u8; 0x80],
    pub cart: Option<Cartridge>,
    pub boot_rom: Option<Vec<u8>>,
    pub boot_mapped: bool,
    pub if_reg: Interrupts,
    pub ie_reg: u8,
    pub ppu: Ppu,
    pub timer: Timer,
    pub input: Input,
    pub key1: u8,
    hdma: HdmaState,
    cgb_mode: bool,
}

impl Mmu {
    pub fn new(cgb: bool) -> Self {
        Self {
            wram: [[0; WRAM_BANK_SIZE]; 8],
            wram_bank: 1,
            hram: [0; 0x7F],
            io: [0; 0x80],
            cart: None,
            boot_rom: None,
            boot_mapped: false,
            if_reg: Interrupts::empty(),
            ie_reg: 0,
            ppu: Ppu::new(cgb),
            timer: Timer::new(),
            input: Input::new(),
            key1: 0,
            hdma: HdmaState::idle(),
            cgb_mode: cgb,
        }
    }

    pub fn is_cgb(&self) -> bool {
        self.cgb_mode
    }

    pub fn load_cart(&mut self, cart: Cartridge) {
        self.cart = Some(cart);
    }

    pub fn load_boot_rom(&mut self, data: Vec<u8>) {
        self.boot_rom = Some(data);
        self.boot_mapped = true;
    }

    /// Forward a button change to the joypad matrix, letting it raise
    /// the joypad interrupt on a selected falling edge.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.input.set_button(button, pressed, &mut self.if_reg);
    }

    pub fn pending_interrupts(&self) -> Interrupts {
        self.if_reg & Interrupts::from_bits_truncate(self.ie_reg)
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        match addr {
            // Boot ROM overlay: 0x0000-0x00FF, and on CGB also
            // 0x0200-0x08FF while the cartridge header stays visible.
            0x0000..=0x00FF if self.boot_mapped => self
                .boot_rom
                .as_ref()
                .and_then(|b| b.get(addr as usize).copied())
                .unwrap_or(0xFF),
            0x0200..=0x08FF if self.boot_mapped && self.cgb_mode => self
                .boot_rom
                .as_ref()
                .and_then(|b| b.get(addr as usize).copied())
                .unwrap_or(0xFF),
            0x0000..=0x7FFF => self.cart.as_ref().map(|c| c.read(addr)).unwrap_or(0xFF),
            0x8000..=0x9FFF => {
                if self.ppu.vram_accessible() {
                    self.ppu.vram[self.ppu.vram_bank][(addr - 0x8000) as usize]
                } else {
                    0xFF
                }
            }
            0xA000..=0xBFFF => self.cart.as_ref().map(|c| c.read(addr)).unwrap_or(0xFF),
            0xC000..=0xCFFF => self.wram[0][(addr - 0xC000) as usize],
            0xD000..=0xDFFF => self.wram[self.wram_bank][(addr - 0xD000) as usize],
            0xE000..=0xEFFF => self.wram[0][(addr - 0xE000) as usize],
            0xF000..=0xFDFF => self.wram[self.wram_bank][(addr - 0xF000) as usize],
            0xFE00..=0xFE9F => {
                if self.ppu.oam_accessible() {
                    self.ppu.oam[(addr - 0xFE00) as usize]
                } else {
                    0xFF
                }
            }
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00 => self.input.read(),
            0xFF04..=0xFF07 => self.timer.read(addr),
            0xFF0F => self.if_reg.bits() | 0xE0,
            0xFF40..=0xFF45 | 0xFF47..=0xFF4B | 0xFF68..=0xFF6B => self.ppu.read_reg(addr),
            0xFF46 => self.ppu.dma,
            0xFF4D => {
                if self.cgb_mode {
                    (self.key1 & 0x81) | 0x7E
                } else {
                    0xFF
                }
            }
            0xFF4F => {
                if self.cgb_mode {
                    0xFE | self.ppu.vram_bank as u8
                } else {
                    0xFF
                }
            }
            0xFF51..=0xFF54 => self.read_hdma_reg(addr),
            0xFF55 => self.read_hdma5(),
            0xFF70 => {
                if self.cgb_mode {
                    self.wram_bank as u8
                } else {
                    0xFF
                }
            }
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize],
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie_reg,
        }
    }

    pub fn write_byte(&mut self, addr: u16, val: u8) {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => {
                if let Some(cart) = self.cart.as_mut() {
                    cart.write(addr, val);
                }
            }
            0x8000..=0x9FFF => {
                if self.ppu.vram_accessible() {
                    self.ppu.vram[self.ppu.vram_bank][(addr - 0x8000) as usize] = val;
                }
            }
            0xC000..=0xCFFF => self.wram[0][(addr - 0xC000) as usize] = val,
            0xD000..=0xDFFF => self.wram[self.wram_bank][(addr - 0xD000) as usize] = val,
            0xE000..=0xEFFF => self.wram[0][(addr - 0xE000) as usize] = val,
            0xF000..=0xFDFF => self.wram[self.wram_bank][(addr - 0xF000) as usize] = val,
            0xFE00..=0xFE9F => {
                if self.ppu.oam_accessible() {
                    self.ppu.oam[(addr - 0xFE00) as usize] = val;
                }
            }
            0xFEA0..=0xFEFF => {
                trace!("write {val:02X} to prohibited area {addr:04X}");
            }
            0xFF00 => self.input.write(val),
            0xFF04..=0xFF07 => self.timer.write(addr, val, &mut self.if_reg),
            0xFF0F => self.if_reg = Interrupts::from_bits_truncate(val),
            0xFF40 => {
                let lcd_was_on = self.ppu.lcd_enabled();
                self.ppu.write_reg(addr, val);
                if lcd_was_on && !self.ppu.lcd_enabled() {
                    // No further H-Blank slots will arrive to drain an
                    // active transfer.
                    self.complete_active_hdma();
                }
            }
            0xFF41..=0xFF45 | 0xFF47..=0xFF4B | 0xFF68..=0xFF6B => self.ppu.write_reg(addr, val),
            0xFF46 => self.oam_dma(val),
            0xFF4D => {
                if self.cgb_mode {
                    self.key1 = (self.key1 & 0x80) | (val & 0x01);
                }
            }
            0xFF4F => {
                if self.cgb_mode {
                    self.ppu.vram_bank = (val & 0x01) as usize;
                }
            }
            0xFF50 => self.boot_mapped = false,
            0xFF51..=0xFF54 => self.write_hdma_reg(addr, val),
            0xFF55 => self.write_hdma5(val),
            0xFF70 => {
                if self.cgb_mode {
                    let bank = (val & 0x07) as usize;
                    self.wram_bank = if bank == 0 { 1 } else { bank };
                }
            }
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize] = val,
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = val,
            0xFFFF => self.ie_reg = val,
        }
    }

    /// Read for the DMA engines: same decode, but never blocked by the
    /// PPU access windows.
    fn dma_read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => {
                self.cart.as_ref().map(|c| c.read(addr)).unwrap_or(0xFF)
            }
            0x8000..=0x9FFF => self.ppu.vram[self.ppu.vram_bank][(addr - 0x8000) as usize],
            0xC000..=0xCFFF => self.wram[0][(addr - 0xC000) as usize],
            0xD000..=0xDFFF => self.wram[self.wram_bank][(addr - 0xD000) as usize],
            0xE000..=0xEFFF => self.wram[0][(addr - 0xE000) as usize],
            0xF000..=0xFDFF => self.wram[self.wram_bank][(addr - 0xF000) as usize],
            _ => 0xFF,
        }
    }

    /// OAM DMA (0xFF46): a 160-byte copy from `val << 8`, modelled as
    /// instantaneous.
    fn oam_dma(&mut self, val: u8) {
        self.ppu.dma = val;
        let src = (val as u16) << 8;
        for i in 0..OAM_DMA_LEN {
            self.ppu.oam[i as usize] = self.dma_read(src.wrapping_add(i));
        }
    }

    fn read_hdma_reg(&self, addr: u16) -> u8 {
        if !self.cgb_mode {
            return 0xFF;
        }
        match addr {
            0xFF51 => (self.hdma.src >> 8) as u8,
            0xFF52 => (self.hdma.src & 0x00F0) as u8,
            0xFF53 => (self.hdma.dst >> 8) as u8,
            0xFF54 => (self.hdma.dst & 0x00F0) as u8,
            _ => 0xFF,
        }
    }

    fn write_hdma_reg(&mut self, addr: u16, val: u8) {
        if !self.cgb_mode || self.hdma.active {
            return;
        }
        match addr {
            0xFF51 => self.hdma.src = ((val as u16) << 8) | (self.hdma.src & 0x00FF),
            0xFF52 => self.hdma.src = (self.hdma.src & 0xFF00) | (val & 0xF0) as u16,
            0xFF53 => self.hdma.dst = (((val & 0x1F) as u16) << 8) | (self.hdma.dst & 0x00F0),
            0xFF54 => self.hdma.dst = (self.hdma.dst & 0x1F00) | (val & 0xF0) as u16,
            _ => {}
        }
    }

    /// Remaining block count, `(length / 0x10) - 1`: bit 7 clear while
    /// active, set after a cancellation, and 0xFF once no transfer is
    /// pending.
    fn read_hdma5(&self) -> u8 {
        if !self.cgb_mode {
            0xFF
        } else if self.hdma.active {
            ((self.hdma.length / HDMA_BLOCK_LEN) as u8).wrapping_sub(1) & 0x7F
        } else if self.hdma.cancelled {
            0x80 | (((self.hdma.length / HDMA_BLOCK_LEN) as u8).wrapping_sub(1) & 0x7F)
        } else {
            0xFF
        }
    }

    fn write_hdma5(&mut self, val: u8) {
        if !self.cgb_mode {
            return;
        }

        if self.hdma.active && val & 0x80 == 0 {
            // Cancel the ongoing transfer; the remaining length stays
            // readable with bit 7 set.
            self.hdma.active = false;
            self.hdma.cancelled = true;
            return;
        }

        let blocks = (val & 0x7F) as u16 + 1;
        self.hdma.length = blocks * HDMA_BLOCK_LEN;
        self.hdma.position = 0;
        self.hdma.cancelled = false;

        if val & 0x80 == 0 {
            // General DMA: the whole range is copied immediately.
            self.hdma.active = true;
            while self.hdma.active {
                self.hdma_block();
            }
        } else {
            self.hdma.active = true;
            // A transfer started while the PPU already sits in H-Blank
            // (or with the LCD off) moves its first block right away.
            if !self.ppu.lcd_enabled() || self.ppu.in_hblank() {
                self.hdma_block();
            }
        }
    }

    /// Move one 0x10-byte block if an H-Blank transfer is active.
    /// Called by the CPU whenever the PPU enters H-Blank.
    pub fn hdma_hblank_transfer(&mut self) {
        if self.hdma.active {
            self.hdma_block();
        }
    }

    fn hdma_block(&mut self) {
        for i in 0..HDMA_BLOCK_LEN {
            let byte = self.dma_read(self.hdma.src.wrapping_add(self.hdma.position + i));
            let dst = (self.hdma.dst + self.hdma.position + i) as usize & 0x1FFF;
            self.ppu.vram[self.ppu.vram_bank][dst] = byte;
        }

        self.hdma.position += HDMA_BLOCK_LEN;
        self.hdma.length -= HDMA_BLOCK_LEN;
        if self.hdma.length == 0 {
            self.hdma = HdmaState::idle();
        }
    }

    fn complete_active_hdma(&mut self) {
        while self.hdma.active {
            self.hdma_block();
        }
    }
}
