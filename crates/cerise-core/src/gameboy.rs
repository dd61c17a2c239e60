use std::io::{Read, Write};

use log::warn;

use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::Error;
use crate::input::Button;
use crate::mmu::Mmu;
use crate::ppu::{FRAME_HEIGHT, FRAME_WIDTH};

/// Host-visible machine state.
///
/// `Waiting -> Ready` on a successful ROM load, `Ready <-> Running`
/// around `run`/`pause`, back to `Waiting` on reset. Execution errors
/// move the machine to `Fatal`, which only `reset` leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Ready,
    Running,
    Fatal,
}

impl Status {
    fn name(self) -> &'static str {
        match self {
            Status::Waiting => "waiting",
            Status::Ready => "ready",
            Status::Running => "running",
            Status::Fatal => "fatal",
        }
    }
}

/// Host configuration, applied before `run` and carried by the machine
/// rather than living in process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Log every executed instruction at trace level.
    pub debug_instructions: bool,
    /// Compose the background/window layer.
    pub draw_background_layer: bool,
    /// Compose the sprite layer.
    pub draw_sprite_layer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_instructions: false,
            draw_background_layer: true,
            draw_sprite_layer: true,
        }
    }
}

/// High-level facade that wires the CPU and MMU into a single machine
/// and carries the host-facing state machine.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    cgb: bool,
    status: Status,
    config: Config,
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let mut mmu = Mmu::new(false);
        mmu.ppu
            .set_layers(config.draw_background_layer, config.draw_sprite_layer);
        Self {
            cpu: Cpu::new(false),
            mmu,
            cgb: false,
            status: Status::Waiting,
            config,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_cgb(&self) -> bool {
        self.cgb
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.mmu
            .ppu
            .set_layers(config.draw_background_layer, config.draw_sprite_layer);
    }

    /// Accept a ROM image and ready the machine. The hardware mode
    /// (DMG or CGB) follows the cartridge header. A load failure
    /// discards any previous machine state and returns to `Waiting`.
    pub fn load_rom(&mut self, bytes: Vec<u8>) -> Result<(), Error> {
        let cart = match Cartridge::load(bytes) {
            Ok(cart) => cart,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };

        self.cgb = cart.is_cgb();
        self.cpu = Cpu::new(self.cgb);
        self.mmu = Mmu::new(self.cgb);
        self.mmu
            .ppu
            .set_layers(self.config.draw_background_layer, self.config.draw_sprite_layer);
        self.mmu.load_cart(cart);
        self.status = Status::Ready;
        Ok(())
    }

    /// Map a boot ROM over 0x0000 and restart the CPU from a power-on
    /// state so the boot ROM executes first.
    pub fn load_boot_rom(&mut self, data: Vec<u8>) -> Result<(), Error> {
        if self.status != Status::Ready {
            return Err(Error::InvalidState {
                op: "load_boot_rom",
                status: self.status.name(),
            });
        }
        self.cpu = Cpu::power_on();
        self.mmu.load_boot_rom(data);
        Ok(())
    }

    /// Discard all machine state, including the cartridge image, and
    /// return to `Waiting`.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Execute exactly one instruction. Legal only in `Ready`.
    /// Returns the T-cycles consumed.
    pub fn step(&mut self) -> Result<u8, Error> {
        if self.status != Status::Ready {
            return Err(Error::InvalidState {
                op: "step",
                status: self.status.name(),
            });
        }
        self.step_inner()
    }

    /// Execute instructions until at least `target_cycles` T-cycles
    /// have elapsed. Legal from `Ready` (starts running) or `Running`.
    pub fn run(&mut self, target_cycles: u64) -> Result<u64, Error> {
        match self.status {
            Status::Ready | Status::Running => {}
            _ => {
                return Err(Error::InvalidState {
                    op: "run",
                    status: self.status.name(),
                });
            }
        }
        self.status = Status::Running;

        let mut executed = 0u64;
        while executed < target_cycles {
            executed += self.step_inner()? as u64;
        }
        Ok(executed)
    }

    /// Stop a running machine between instructions.
    pub fn pause(&mut self) -> Result<(), Error> {
        if self.status != Status::Running {
            return Err(Error::InvalidState {
                op: "pause",
                status: self.status.name(),
            });
        }
        self.status = Status::Ready;
        Ok(())
    }

    fn step_inner(&mut self) -> Result<u8, Error> {
        match self.cpu.step(&mut self.mmu, &self.config) {
            Ok(cycles) => Ok(cycles),
            Err(e) => {
                warn!("execution fault: {e}");
                self.status = Status::Fatal;
                Err(e)
            }
        }
    }

    pub fn button_down(&mut self, button: Button) {
        self.mmu.set_button(button, true);
    }

    pub fn button_up(&mut self, button: Button) {
        self.mmu.set_button(button, false);
    }

    /// The latest completed frame; never a partially rendered one.
    pub fn framebuffer(&self) -> &[u32; FRAME_WIDTH * FRAME_HEIGHT] {
        self.mmu.ppu.framebuffer()
    }

    /// Register values and clock, formatted for debugging.
    pub fn debug_snapshot(&self) -> String {
        self.cpu.debug_state()
    }

    /// Write the battery-backed cartridge RAM image.
    pub fn save_ram<W: Write>(&self, sink: W) -> Result<(), Error> {
        match &self.mmu.cart {
            Some(cart) => cart.save_ram(sink),
            None => Err(Error::InvalidState {
                op: "save_ram",
                status: self.status.name(),
            }),
        }
    }

    /// Load a battery image into cartridge RAM; its length must match
    /// the size implied by the header's RAM-size code.
    pub fn load_ram<R: Read>(&mut self, source: R) -> Result<(), Error> {
        match &mut self.mmu.cart {
            Some(cart) => cart.load_ram(source),
            None => Err(Error::InvalidState {
                op: "load_ram",
                status: self.status.name(),
            }),
        }
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
