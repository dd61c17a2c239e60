mod common;

use cerise_core::{Config, Error, GameBoy, Interrupts};

/// Write a code fragment into WRAM and point PC at it.
fn stage(gb: &mut GameBoy, code: &[u8]) {
    for (i, byte) in code.iter().enumerate() {
        gb.mmu.write_byte(0xC000 + i as u16, *byte);
    }
    gb.cpu.regs.pc = 0xC000;
}

fn exec(gb: &mut GameBoy) -> u8 {
    gb.cpu
        .step(&mut gb.mmu, &Config::default())
        .expect("opcode should execute")
}

#[test]
fn add_flag_laws_hold_for_all_operands() {
    let mut gb = common::machine();
    stage(&mut gb, &[0x80]); // ADD A,B

    for a in 0..=255u8 {
        for b in 0..=255u8 {
            gb.cpu.regs.pc = 0xC000;
            gb.cpu.regs.a = a;
            gb.cpu.regs.b = b;
            exec(&mut gb);

            let sum = a as u16 + b as u16;
            assert_eq!(gb.cpu.regs.a, sum as u8);
            assert_eq!(gb.cpu.regs.zero(), sum & 0xFF == 0, "Z for {a:#04X}+{b:#04X}");
            assert!(!gb.cpu.regs.subtract());
            assert_eq!(
                gb.cpu.regs.half_carry(),
                (a & 0x0F) + (b & 0x0F) > 0x0F,
                "H for {a:#04X}+{b:#04X}"
            );
            assert_eq!(gb.cpu.regs.carry(), sum > 0xFF, "C for {a:#04X}+{b:#04X}");
            assert_eq!(gb.cpu.regs.f() & 0x0F, 0);
        }
    }
}

#[test]
fn sub_a_a_always_zero() {
    let mut gb = common::machine();
    stage(&mut gb, &[0x97]); // SUB A

    for a in [0x00u8, 0x01, 0x0F, 0x80, 0xFF] {
        gb.cpu.regs.pc = 0xC000;
        gb.cpu.regs.a = a;
        exec(&mut gb);
        assert_eq!(gb.cpu.regs.a, 0);
        assert!(gb.cpu.regs.zero());
        assert!(gb.cpu.regs.subtract());
        assert!(!gb.cpu.regs.half_carry());
        assert!(!gb.cpu.regs.carry());
    }
}

#[test]
fn inc_a_preserves_carry() {
    let mut gb = common::machine();
    stage(&mut gb, &[0x3C]); // INC A
    gb.cpu.regs.a = 0x3A;
    gb.cpu.regs.set_flags(false, true, true, true);
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.a, 0x3B);
    assert!(!gb.cpu.regs.zero());
    assert!(!gb.cpu.regs.subtract());
    assert!(!gb.cpu.regs.half_carry());
    assert!(gb.cpu.regs.carry()); // C unchanged
}

#[test]
fn add_sets_half_carry_on_nibble_overflow() {
    let mut gb = common::machine();
    stage(&mut gb, &[0x80]); // ADD A,B
    gb.cpu.regs.a = 0x0F;
    gb.cpu.regs.b = 0x01;
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.a, 0x10);
    assert!(!gb.cpu.regs.zero());
    assert!(!gb.cpu.regs.subtract());
    assert!(gb.cpu.regs.half_carry());
    assert!(!gb.cpu.regs.carry());
}

#[test]
fn rlca_rotates_into_carry_and_clears_zero() {
    let mut gb = common::machine();
    stage(&mut gb, &[0x07]); // RLCA
    gb.cpu.regs.a = 0x80;
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.a, 0x01);
    assert!(gb.cpu.regs.carry());
    assert!(!gb.cpu.regs.zero());
    assert!(!gb.cpu.regs.subtract());
    assert!(!gb.cpu.regs.half_carry());
}

#[test]
fn cb_rotations_set_zero_from_result() {
    let mut gb = common::machine();
    stage(&mut gb, &[0xCB, 0x07]); // RLC A
    gb.cpu.regs.a = 0x00;
    let cycles = exec(&mut gb);
    assert!(gb.cpu.regs.zero());
    assert_eq!(cycles, 8);
}

#[test]
fn pop_af_masks_flag_low_nibble() {
    let mut gb = common::machine();
    gb.mmu.write_byte(0xC100, 0xFF); // F image with garbage low nibble
    gb.mmu.write_byte(0xC101, 0x12); // A
    stage(&mut gb, &[0xF1]); // POP AF
    gb.cpu.regs.sp = 0xC100;
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.a, 0x12);
    assert_eq!(gb.cpu.regs.f(), 0xF0);
    assert_eq!(gb.cpu.regs.f() & 0x0F, 0);
}

#[test]
fn every_defined_opcode_decodes() {
    const UNDEFINED: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    for opcode in 0..=255u8 {
        let mut gb = common::machine();
        stage(&mut gb, &[opcode, 0x00, 0x00]);
        let result = gb.cpu.step(&mut gb.mmu, &Config::default());
        if UNDEFINED.contains(&opcode) {
            match result {
                Err(Error::UnsupportedOpcode { opcode: code, pc }) => {
                    assert_eq!(code, opcode);
                    assert_eq!(pc, 0xC000);
                }
                other => panic!("opcode {opcode:#04X} should be undefined, got {other:?}"),
            }
        } else {
            result.unwrap_or_else(|e| panic!("opcode {opcode:#04X} failed: {e}"));
        }
    }

    // The whole CB page is defined.
    for opcode in 0..=255u8 {
        let mut gb = common::machine();
        stage(&mut gb, &[0xCB, opcode]);
        gb.cpu
            .step(&mut gb.mmu, &Config::default())
            .unwrap_or_else(|e| panic!("CB {opcode:#04X} failed: {e}"));
    }
}

#[test]
fn flag_low_nibble_stays_zero_across_the_alu_page() {
    // Every ALU opcode against a messy operand mix.
    for opcode in 0x80..=0xBFu8 {
        let mut gb = common::machine();
        stage(&mut gb, &[opcode]);
        gb.cpu.regs.a = 0xA7;
        gb.cpu.regs.b = 0x3C;
        gb.cpu.regs.c = 0xFF;
        gb.cpu.regs.d = 0x01;
        gb.cpu.regs.e = 0x99;
        gb.cpu.regs.set_hl(0xC080);
        exec(&mut gb);
        assert_eq!(gb.cpu.regs.f() & 0x0F, 0, "low nibble after {opcode:#04X}");
    }
}

#[test]
fn nop_nop_jp_loop_returns_to_entry() {
    let mut gb = common::machine_with_code(&[0x00, 0x00, 0xC3, 0x00, 0x01]);

    for _ in 0..3 {
        gb.step().expect("step");
    }
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    // NOP + NOP + JP = 4 + 4 + 16 T-cycles.
    assert_eq!(gb.cpu.cycles, 24);
}

#[test]
fn interrupt_dispatch_costs_twenty_cycles() {
    let mut gb = common::machine_with_code(&[0x00]); // NOP
    gb.cpu.ime = true;
    gb.mmu.ie_reg = 0x01;
    gb.mmu.if_reg = Interrupts::VBLANK;
    let sp_before = gb.cpu.regs.sp;

    let cycles = gb.step().expect("step");

    // One NOP plus the dispatch sequence.
    assert_eq!(cycles, 4 + 20);
    assert_eq!(gb.cpu.regs.pc, 0x0040);
    assert_eq!(gb.cpu.regs.sp, sp_before.wrapping_sub(2));
    assert!(!gb.cpu.ime);
    assert!(!gb.mmu.if_reg.contains(Interrupts::VBLANK));

    // The pushed return address is the instruction after the NOP,
    // high byte first.
    let lo = gb.mmu.read_byte(gb.cpu.regs.sp);
    let hi = gb.mmu.read_byte(gb.cpu.regs.sp.wrapping_add(1));
    assert_eq!(((hi as u16) << 8) | lo as u16, 0x0101);
}

#[test]
fn interrupt_priority_is_vblank_first() {
    let mut gb = common::machine_with_code(&[0x00]);
    gb.cpu.ime = true;
    gb.mmu.ie_reg = 0x1F;
    gb.mmu.if_reg = Interrupts::TIMER | Interrupts::VBLANK | Interrupts::JOYPAD;
    gb.step().expect("step");
    assert_eq!(gb.cpu.regs.pc, 0x0040);
    // The other requests stay pending.
    assert!(gb.mmu.if_reg.contains(Interrupts::TIMER));
    assert!(gb.mmu.if_reg.contains(Interrupts::JOYPAD));
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    let mut gb = common::machine_with_code(&[0xFB, 0x00, 0x00]); // EI; NOP; NOP
    gb.mmu.ie_reg = 0x01;
    gb.mmu.if_reg = Interrupts::VBLANK;

    gb.step().expect("EI");
    assert!(!gb.cpu.ime);
    assert_eq!(gb.cpu.regs.pc, 0x0101); // not yet serviced

    gb.step().expect("NOP");
    // Serviced right after the instruction following EI.
    assert_eq!(gb.cpu.regs.pc, 0x0040);
}

#[test]
fn di_is_immediate() {
    let mut gb = common::machine_with_code(&[0xF3, 0x00]); // DI; NOP
    gb.cpu.ime = true;
    gb.mmu.ie_reg = 0x01;
    gb.mmu.if_reg = Interrupts::VBLANK;

    gb.step().expect("DI");
    assert!(!gb.cpu.ime);
    gb.step().expect("NOP");
    assert_eq!(gb.cpu.regs.pc, 0x0102); // never vectored
}

#[test]
fn halt_wakes_on_pending_interrupt_without_ime() {
    let mut gb = common::machine_with_code(&[0x76, 0x00]); // HALT; NOP
    gb.mmu.ie_reg = 0x04;

    gb.step().expect("HALT");
    assert!(gb.cpu.halted);

    // Stays halted while nothing is pending.
    gb.step().expect("halted tick");
    assert!(gb.cpu.halted);

    gb.mmu.if_reg = Interrupts::TIMER;
    gb.step().expect("wake");
    assert!(!gb.cpu.halted);
    // IME is off, so no vector was taken.
    assert_eq!(gb.cpu.regs.pc, 0x0101);
    assert!(gb.mmu.if_reg.contains(Interrupts::TIMER));
}

#[test]
fn halt_bug_replays_the_following_byte() {
    // HALT with IME clear and an interrupt already pending: the byte
    // after HALT is fetched twice, so INC A runs twice.
    let mut gb = common::machine_with_code(&[0x76, 0x3C, 0x00]); // HALT; INC A
    gb.mmu.ie_reg = 0x04;
    gb.mmu.if_reg = Interrupts::TIMER;
    gb.cpu.regs.a = 0;

    gb.step().expect("HALT");
    assert!(!gb.cpu.halted);
    gb.step().expect("INC A (replayed)");
    gb.step().expect("INC A");
    assert_eq!(gb.cpu.regs.a, 2);
    assert_eq!(gb.cpu.regs.pc, 0x0102);
}

#[test]
fn push_writes_high_byte_first() {
    let mut gb = common::machine();
    stage(&mut gb, &[0xC5]); // PUSH BC
    gb.cpu.regs.set_bc(0x1234);
    gb.cpu.regs.sp = 0xC200;
    let cycles = exec(&mut gb);
    assert_eq!(cycles, 16);
    assert_eq!(gb.cpu.regs.sp, 0xC1FE);
    assert_eq!(gb.mmu.read_byte(0xC1FF), 0x12);
    assert_eq!(gb.mmu.read_byte(0xC1FE), 0x34);
}

#[test]
fn conditional_branch_cycle_split() {
    // JR NZ taken vs not taken.
    let mut gb = common::machine();
    stage(&mut gb, &[0x20, 0x05]);
    gb.cpu.regs.set_flags(false, false, false, false);
    assert_eq!(exec(&mut gb), 12);

    stage(&mut gb, &[0x20, 0x05]);
    gb.cpu.regs.set_flags(true, false, false, false);
    assert_eq!(exec(&mut gb), 8);
}

#[test]
fn daa_canonicalises_bcd_addition() {
    let mut gb = common::machine();
    // 0x15 + 0x27 = 0x3C, DAA -> 0x42
    stage(&mut gb, &[0x80, 0x27]); // ADD A,B; DAA
    gb.cpu.regs.a = 0x15;
    gb.cpu.regs.b = 0x27;
    exec(&mut gb);
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.a, 0x42);
    assert!(!gb.cpu.regs.carry());
    assert!(!gb.cpu.regs.half_carry());

    // 0x90 + 0x90 = 0x20 carry, DAA -> 0x80 with C set
    stage(&mut gb, &[0x80, 0x27]);
    gb.cpu.regs.a = 0x90;
    gb.cpu.regs.b = 0x90;
    exec(&mut gb);
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.a, 0x80);
    assert!(gb.cpu.regs.carry());
}

#[test]
fn add_sp_flags_come_from_the_low_byte() {
    let mut gb = common::machine();
    stage(&mut gb, &[0xE8, 0x01]); // ADD SP,+1
    gb.cpu.regs.sp = 0xFFFF;
    let cycles = exec(&mut gb);
    assert_eq!(cycles, 16);
    assert_eq!(gb.cpu.regs.sp, 0x0000);
    assert!(!gb.cpu.regs.zero());
    assert!(!gb.cpu.regs.subtract());
    assert!(gb.cpu.regs.half_carry());
    assert!(gb.cpu.regs.carry());

    stage(&mut gb, &[0xE8, 0xFF]); // ADD SP,-1
    gb.cpu.regs.sp = 0x0001;
    exec(&mut gb);
    assert_eq!(gb.cpu.regs.sp, 0x0000);
    // Low-byte unsigned addition: 0x01 + 0xFF carries.
    assert!(gb.cpu.regs.half_carry());
    assert!(gb.cpu.regs.carry());
}
