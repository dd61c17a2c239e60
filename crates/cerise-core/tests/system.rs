mod common;

use cerise_core::{Button, Error, GameBoy, Status};

#[test]
fn fresh_machine_is_waiting() {
    let gb = GameBoy::new();
    assert_eq!(gb.status(), Status::Waiting);
}

#[test]
fn step_before_loading_is_invalid_state() {
    let mut gb = GameBoy::new();
    match gb.step() {
        Err(Error::InvalidState { op: "step", .. }) => {}
        other => panic!("expected InvalidState, got {other:?}"),
    }
}

#[test]
fn pause_when_not_running_is_invalid_state() {
    let mut gb = common::machine();
    match gb.pause() {
        Err(Error::InvalidState { op: "pause", .. }) => {}
        other => panic!("expected InvalidState, got {other:?}"),
    }
}

#[test]
fn load_run_pause_reset_state_walk() {
    let mut gb = GameBoy::new();
    gb.load_rom(common::plain_rom()).expect("load");
    assert_eq!(gb.status(), Status::Ready);

    gb.run(100).expect("run");
    assert_eq!(gb.status(), Status::Running);

    gb.pause().expect("pause");
    assert_eq!(gb.status(), Status::Ready);

    // Paused machines may single-step and resume.
    gb.step().expect("step");
    gb.run(100).expect("resume");

    gb.reset();
    assert_eq!(gb.status(), Status::Waiting);
}

#[test]
fn failed_load_returns_to_waiting() {
    let mut gb = GameBoy::new();
    gb.load_rom(common::plain_rom()).expect("load");

    let mut bad = common::plain_rom();
    bad[common::HEADER_CHECKSUM_ADDR] ^= 0xFF;
    assert!(gb.load_rom(bad).is_err());
    assert_eq!(gb.status(), Status::Waiting);
}

#[test]
fn run_meets_the_cycle_budget() {
    let mut gb = common::machine();
    let executed = gb.run(10_000).expect("run");
    assert!(executed >= 10_000);
    assert_eq!(gb.cpu.cycles, executed);
}

#[test]
fn post_load_state_matches_the_documented_reset() {
    let mut gb = common::machine();
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
    assert_eq!(gb.cpu.regs.af(), 0x01B0);
    assert_eq!(gb.cpu.regs.bc(), 0x0013);
    assert_eq!(gb.cpu.regs.de(), 0x00D8);
    assert_eq!(gb.cpu.regs.hl(), 0x014D);
    assert_eq!(gb.mmu.read_byte(0xFF04), 0); // DIV
    assert!(!gb.cpu.ime);
    assert_eq!(gb.cpu.cycles, 0);
}

#[test]
fn cgb_cartridge_boots_with_cgb_accumulator() {
    let gb = common::cgb_machine();
    assert!(gb.is_cgb());
    assert_eq!(gb.cpu.regs.a, 0x11);
}

#[test]
fn undefined_opcode_is_fatal_until_reset() {
    let mut gb = common::machine_with_code(&[0xD3]);
    match gb.run(100) {
        Err(Error::UnsupportedOpcode { opcode: 0xD3, pc }) => {
            assert_eq!(pc, 0x0100);
        }
        other => panic!("expected UnsupportedOpcode, got {other:?}"),
    }
    assert_eq!(gb.status(), Status::Fatal);

    // Fatal rejects everything but reset.
    assert!(matches!(gb.step(), Err(Error::InvalidState { .. })));
    assert!(matches!(gb.run(1), Err(Error::InvalidState { .. })));
    assert!(matches!(gb.pause(), Err(Error::InvalidState { .. })));

    gb.reset();
    assert_eq!(gb.status(), Status::Waiting);
}

#[test]
fn reset_discards_the_cartridge() {
    let mut gb = common::machine();
    gb.reset();
    assert!(gb.mmu.cart.is_none());
    // All memory is back to zero.
    assert_eq!(gb.cpu.cycles, 0);
    assert_eq!(gb.mmu.read_byte(0xC000), 0);
}

#[test]
fn buttons_reach_the_joypad_register() {
    let mut gb = common::machine();
    gb.mmu.write_byte(0xFF00, 0x10); // select action nibble
    gb.button_down(Button::Start);
    assert_eq!(gb.mmu.read_byte(0xFF00) & 0x0F, 0x07);
    gb.button_up(Button::Start);
    assert_eq!(gb.mmu.read_byte(0xFF00) & 0x0F, 0x0F);
}

#[test]
fn debug_snapshot_reports_registers_and_clock() {
    let mut gb = common::machine();
    gb.step().expect("step");
    let snapshot = gb.debug_snapshot();
    assert!(snapshot.contains("AF:01B0"));
    assert!(snapshot.contains("PC:0101"));
    assert!(snapshot.contains("CY:4"));
}

#[test]
fn frame_is_available_after_running_one_frame() {
    let mut gb = common::machine();
    gb.run(70_224).expect("run");
    assert!(gb.mmu.ppu.frame_ready());
    assert_eq!(gb.mmu.ppu.frames(), 1);
}
