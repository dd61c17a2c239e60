use std::io;

use thiserror::Error;

/// Failures surfaced by the emulation core.
///
/// Errors are never recovered silently: `load_rom` failures leave the
/// machine in `Waiting`, failures during execution move it to `Fatal`
/// until the host resets it.
#[derive(Debug, Error)]
pub enum Error {
    /// The ROM image is truncated or its header checksum does not match.
    #[error("invalid ROM image: {0}")]
    InvalidRom(&'static str),

    /// The cartridge-type code names a mapper this core does not implement.
    #[error("unsupported cartridge type {code:#04X}")]
    UnsupportedMbc { code: u8 },

    /// Execution reached one of the undefined opcode slots.
    #[error("unsupported opcode {opcode:#04X} at {pc:#06X}")]
    UnsupportedOpcode { opcode: u8, pc: u16 },

    /// A battery image does not match the cartridge RAM size.
    #[error("battery image is {actual} bytes, cartridge RAM is {expected}")]
    BadBatteryFile { expected: usize, actual: usize },

    /// A host-facing operation was called in the wrong machine state.
    #[error("{op} is not legal while the machine is {status}")]
    InvalidState { op: &'static str, status: &'static str },

    /// I/O failure while reading or writing a battery image.
    #[error(transparent)]
    Io(#[from] io::Error),
}
