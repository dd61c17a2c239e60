#![allow(dead_code)]

use cerise_core::GameBoy;

pub const HEADER_CHECKSUM_ADDR: usize = 0x014D;

/// Build a blank ROM image with a valid header for the given mapper,
/// ROM-size code and RAM-size code.
pub fn build_rom(cart_type: u8, rom_size_code: u8, ram_size_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000 << rom_size_code];
    rom[0x0134..0x0138].copy_from_slice(b"TEST");
    rom[0x0147] = cart_type;
    rom[0x0148] = rom_size_code;
    rom[0x0149] = ram_size_code;
    fix_header_checksum(&mut rom);
    rom
}

/// A minimal 32 KiB ROM with no mapper.
pub fn plain_rom() -> Vec<u8> {
    build_rom(0x00, 0x00, 0x00)
}

/// Flag the ROM as Game Boy Color capable.
pub fn make_cgb(rom: &mut [u8]) {
    rom[0x0143] = 0x80;
    fix_header_checksum(rom);
}

/// Recompute the header checksum over 0x134..0x14C.
pub fn fix_header_checksum(rom: &mut [u8]) {
    let sum = rom[0x0134..HEADER_CHECKSUM_ADDR]
        .iter()
        .fold(0u8, |sum, b| sum.wrapping_sub(*b).wrapping_sub(1));
    rom[HEADER_CHECKSUM_ADDR] = sum;
}

/// A machine in `Ready` with the given code placed at the entry point
/// (0x0100).
pub fn machine_with_code(code: &[u8]) -> GameBoy {
    let mut rom = plain_rom();
    rom[0x0100..0x0100 + code.len()].copy_from_slice(code);
    let mut gb = GameBoy::new();
    gb.load_rom(rom).expect("test ROM should load");
    gb
}

/// A machine in `Ready` with a plain ROM.
pub fn machine() -> GameBoy {
    machine_with_code(&[])
}

/// A Game Boy Color machine in `Ready`.
pub fn cgb_machine() -> GameBoy {
    let mut rom = plain_rom();
    make_cgb(&mut rom);
    let mut gb = GameBoy::new();
    gb.load_rom(rom).expect("test ROM should load");
    gb
}
