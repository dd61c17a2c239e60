//! The LR35902 instruction set as data: a 256-entry primary table and a
//! 256-entry CB-prefix table.
//!
//! Each entry carries its mnemonic, its base cost in M-cycles (the
//! not-taken cost for conditional branches) and a handler. Handlers
//! receive the opcode byte, so one handler serves a whole register
//! family; all memory traffic goes through the CPU helpers, which
//! advance the shared clock by 4 T-cycles per access.

use crate::cpu::Cpu;
use crate::error::Error;
use crate::mmu::Mmu;

pub(crate) type OpFn = fn(&mut Cpu, &mut Mmu, u8) -> Result<(), Error>;

pub(crate) struct Opcode {
    pub mnemonic: &'static str,
    /// Base cost in M-cycles; validated against consumed cycles in
    /// debug builds.
    pub m_cycles: u8,
    pub exec: OpFn,
}

const fn op(mnemonic: &'static str, m_cycles: u8, exec: OpFn) -> Opcode {
    Opcode {
        mnemonic,
        m_cycles,
        exec,
    }
}

fn get_rr(cpu: &Cpu, index: u8) -> u16 {
    match index & 0x03 {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => cpu.regs.hl(),
        _ => cpu.regs.sp,
    }
}

fn set_rr(cpu: &mut Cpu, index: u8, val: u16) {
    match index & 0x03 {
        0 => cpu.regs.set_bc(val),
        1 => cpu.regs.set_de(val),
        2 => cpu.regs.set_hl(val),
        _ => cpu.regs.sp = val,
    }
}

// ---- misc ------------------------------------------------------------

fn nop(_cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    Ok(())
}

fn illegal(cpu: &mut Cpu, _mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    Err(Error::UnsupportedOpcode {
        opcode: op,
        pc: cpu.regs.pc.wrapping_sub(1),
    })
}

fn halt(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.halt(mmu);
    Ok(())
}

fn stop(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let _pad = cpu.fetch8(mmu);
    cpu.stop(mmu);
    Ok(())
}

fn di(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.disable_ime();
    Ok(())
}

fn ei(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.schedule_ime_enable();
    Ok(())
}

fn cb_prefix(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.dispatch_cb(mmu)
}

// ---- 8-bit loads -----------------------------------------------------

fn ld_r_r(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = cpu.read_operand(mmu, op & 0x07);
    cpu.write_operand(mmu, (op >> 3) & 0x07, val);
    Ok(())
}

fn ld_r_d8(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = cpu.fetch8(mmu);
    cpu.write_operand(mmu, (op >> 3) & 0x07, val);
    Ok(())
}

fn ld_rr_ind_a(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let addr = if op & 0x10 != 0 {
        cpu.regs.de()
    } else {
        cpu.regs.bc()
    };
    let a = cpu.regs.a;
    cpu.write8(mmu, addr, a);
    Ok(())
}

fn ld_a_rr_ind(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let addr = if op & 0x10 != 0 {
        cpu.regs.de()
    } else {
        cpu.regs.bc()
    };
    cpu.regs.a = cpu.read8(mmu, addr);
    Ok(())
}

fn ld_hli_a(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.regs.hl();
    let a = cpu.regs.a;
    cpu.write8(mmu, addr, a);
    cpu.regs.set_hl(addr.wrapping_add(1));
    Ok(())
}

fn ld_hld_a(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.regs.hl();
    let a = cpu.regs.a;
    cpu.write8(mmu, addr, a);
    cpu.regs.set_hl(addr.wrapping_sub(1));
    Ok(())
}

fn ld_a_hli(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.regs.hl();
    cpu.regs.a = cpu.read8(mmu, addr);
    cpu.regs.set_hl(addr.wrapping_add(1));
    Ok(())
}

fn ld_a_hld(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.regs.hl();
    cpu.regs.a = cpu.read8(mmu, addr);
    cpu.regs.set_hl(addr.wrapping_sub(1));
    Ok(())
}

fn ld_a16_a(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.fetch16(mmu);
    let a = cpu.regs.a;
    cpu.write8(mmu, addr, a);
    Ok(())
}

fn ld_a_a16(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.fetch16(mmu);
    cpu.regs.a = cpu.read8(mmu, addr);
    Ok(())
}

fn ldh_a8_a(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let offset = cpu.fetch8(mmu) as u16;
    let a = cpu.regs.a;
    cpu.write8(mmu, 0xFF00 | offset, a);
    Ok(())
}

fn ldh_a_a8(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let offset = cpu.fetch8(mmu) as u16;
    cpu.regs.a = cpu.read8(mmu, 0xFF00 | offset);
    Ok(())
}

fn ldh_c_a(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = 0xFF00 | cpu.regs.c as u16;
    let a = cpu.regs.a;
    cpu.write8(mmu, addr, a);
    Ok(())
}

fn ldh_a_c(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = 0xFF00 | cpu.regs.c as u16;
    cpu.regs.a = cpu.read8(mmu, addr);
    Ok(())
}

// ---- 16-bit loads ----------------------------------------------------

fn ld_rr_d16(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = cpu.fetch16(mmu);
    set_rr(cpu, (op >> 4) & 0x03, val);
    Ok(())
}

fn ld_a16_sp(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.fetch16(mmu);
    let sp = cpu.regs.sp;
    cpu.write16(mmu, addr, sp);
    Ok(())
}

fn ld_sp_hl(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.regs.sp = cpu.regs.hl();
    cpu.tick(mmu, 1);
    Ok(())
}

fn ld_hl_sp_e8(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let offset = cpu.fetch8(mmu) as i8;
    let result = cpu.alu_add_sp(offset);
    cpu.regs.set_hl(result);
    cpu.tick(mmu, 1);
    Ok(())
}

fn push_rr(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = match (op >> 4) & 0x03 {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => cpu.regs.hl(),
        _ => cpu.regs.af(),
    };
    cpu.tick(mmu, 1);
    cpu.push_stack(mmu, val);
    Ok(())
}

fn pop_rr(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = cpu.pop_stack(mmu);
    match (op >> 4) & 0x03 {
        0 => cpu.regs.set_bc(val),
        1 => cpu.regs.set_de(val),
        2 => cpu.regs.set_hl(val),
        _ => cpu.regs.set_af(val),
    }
    Ok(())
}

// ---- 8-bit arithmetic ------------------------------------------------

fn apply_alu(cpu: &mut Cpu, kind: u8, val: u8) {
    match kind {
        0 => cpu.alu_add(val, false),
        1 => cpu.alu_add(val, true),
        2 => cpu.alu_sub(val, false),
        3 => cpu.alu_sub(val, true),
        4 => cpu.alu_and(val),
        5 => cpu.alu_xor(val),
        6 => cpu.alu_or(val),
        _ => cpu.alu_cp(val),
    }
}

fn alu_a_r(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = cpu.read_operand(mmu, op & 0x07);
    apply_alu(cpu, (op >> 3) & 0x07, val);
    Ok(())
}

fn alu_a_d8(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = cpu.fetch8(mmu);
    apply_alu(cpu, (op >> 3) & 0x07, val);
    Ok(())
}

fn inc_r(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let index = (op >> 3) & 0x07;
    let val = cpu.read_operand(mmu, index);
    let result = cpu.alu_inc8(val);
    cpu.write_operand(mmu, index, result);
    Ok(())
}

fn dec_r(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let index = (op >> 3) & 0x07;
    let val = cpu.read_operand(mmu, index);
    let result = cpu.alu_dec8(val);
    cpu.write_operand(mmu, index, result);
    Ok(())
}

fn daa(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.alu_daa();
    Ok(())
}

fn cpl(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.regs.a = !cpu.regs.a;
    let (z, c) = (cpu.regs.zero(), cpu.regs.carry());
    cpu.regs.set_flags(z, true, true, c);
    Ok(())
}

fn scf(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let z = cpu.regs.zero();
    cpu.regs.set_flags(z, false, false, true);
    Ok(())
}

fn ccf(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let (z, c) = (cpu.regs.zero(), cpu.regs.carry());
    cpu.regs.set_flags(z, false, false, !c);
    Ok(())
}

// ---- 16-bit arithmetic -----------------------------------------------

fn inc_rr(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let index = (op >> 4) & 0x03;
    let val = get_rr(cpu, index).wrapping_add(1);
    set_rr(cpu, index, val);
    cpu.tick(mmu, 1);
    Ok(())
}

fn dec_rr(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let index = (op >> 4) & 0x03;
    let val = get_rr(cpu, index).wrapping_sub(1);
    set_rr(cpu, index, val);
    cpu.tick(mmu, 1);
    Ok(())
}

fn add_hl_rr(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let val = get_rr(cpu, (op >> 4) & 0x03);
    cpu.alu_add_hl(val);
    cpu.tick(mmu, 1);
    Ok(())
}

fn add_sp_e8(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let offset = cpu.fetch8(mmu) as i8;
    cpu.regs.sp = cpu.alu_add_sp(offset);
    cpu.tick(mmu, 2);
    Ok(())
}

// ---- accumulator rotates (Z always cleared) --------------------------

fn rlca(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let a = cpu.regs.a;
    cpu.regs.a = a.rotate_left(1);
    cpu.regs.set_flags(false, false, false, a & 0x80 != 0);
    Ok(())
}

fn rrca(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let a = cpu.regs.a;
    cpu.regs.a = a.rotate_right(1);
    cpu.regs.set_flags(false, false, false, a & 0x01 != 0);
    Ok(())
}

fn rla(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let a = cpu.regs.a;
    cpu.regs.a = (a << 1) | cpu.regs.carry() as u8;
    cpu.regs.set_flags(false, false, false, a & 0x80 != 0);
    Ok(())
}

fn rra(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let a = cpu.regs.a;
    cpu.regs.a = (a >> 1) | ((cpu.regs.carry() as u8) << 7);
    cpu.regs.set_flags(false, false, false, a & 0x01 != 0);
    Ok(())
}

// ---- jumps and calls -------------------------------------------------

fn jr_e8(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let offset = cpu.fetch8(mmu) as i8;
    cpu.regs.pc = cpu.regs.pc.wrapping_add(offset as u16);
    cpu.tick(mmu, 1);
    Ok(())
}

fn jr_cc_e8(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let offset = cpu.fetch8(mmu) as i8;
    if cpu.condition((op >> 3) & 0x03) {
        cpu.regs.pc = cpu.regs.pc.wrapping_add(offset as u16);
        cpu.tick(mmu, 1);
    }
    Ok(())
}

fn jp_a16(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.regs.pc = cpu.fetch16(mmu);
    cpu.tick(mmu, 1);
    Ok(())
}

fn jp_cc_a16(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let addr = cpu.fetch16(mmu);
    if cpu.condition((op >> 3) & 0x03) {
        cpu.regs.pc = addr;
        cpu.tick(mmu, 1);
    }
    Ok(())
}

fn jp_hl(cpu: &mut Cpu, _mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.regs.pc = cpu.regs.hl();
    Ok(())
}

fn call_a16(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    let addr = cpu.fetch16(mmu);
    cpu.tick(mmu, 1);
    let pc = cpu.regs.pc;
    cpu.push_stack(mmu, pc);
    cpu.regs.pc = addr;
    Ok(())
}

fn call_cc_a16(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let addr = cpu.fetch16(mmu);
    if cpu.condition((op >> 3) & 0x03) {
        cpu.tick(mmu, 1);
        let pc = cpu.regs.pc;
        cpu.push_stack(mmu, pc);
        cpu.regs.pc = addr;
    }
    Ok(())
}

fn ret(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.regs.pc = cpu.pop_stack(mmu);
    cpu.tick(mmu, 1);
    Ok(())
}

fn ret_cc(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    cpu.tick(mmu, 1);
    if cpu.condition((op >> 3) & 0x03) {
        cpu.regs.pc = cpu.pop_stack(mmu);
        cpu.tick(mmu, 1);
    }
    Ok(())
}

fn reti(cpu: &mut Cpu, mmu: &mut Mmu, _op: u8) -> Result<(), Error> {
    cpu.regs.pc = cpu.pop_stack(mmu);
    cpu.tick(mmu, 1);
    cpu.enable_ime();
    Ok(())
}

fn rst(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    cpu.tick(mmu, 1);
    let pc = cpu.regs.pc;
    cpu.push_stack(mmu, pc);
    cpu.regs.pc = (op & 0x38) as u16;
    Ok(())
}

// ---- CB-prefixed families --------------------------------------------

fn cb_rotate(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let index = op & 0x07;
    let val = cpu.read_operand(mmu, index);
    let result = match op >> 3 {
        0 => cpu.alu_rlc(val),
        1 => cpu.alu_rrc(val),
        2 => cpu.alu_rl(val),
        3 => cpu.alu_rr(val),
        4 => cpu.alu_sla(val),
        5 => cpu.alu_sra(val),
        6 => cpu.alu_swap(val),
        _ => cpu.alu_srl(val),
    };
    cpu.write_operand(mmu, index, result);
    Ok(())
}

fn cb_bit(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let bit = (op >> 3) & 0x07;
    let val = cpu.read_operand(mmu, op & 0x07);
    let c = cpu.regs.carry();
    cpu.regs.set_flags(val & (1 << bit) == 0, false, true, c);
    Ok(())
}

fn cb_res(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let bit = (op >> 3) & 0x07;
    let index = op & 0x07;
    let val = cpu.read_operand(mmu, index);
    cpu.write_operand(mmu, index, val & !(1 << bit));
    Ok(())
}

fn cb_set(cpu: &mut Cpu, mmu: &mut Mmu, op: u8) -> Result<(), Error> {
    let bit = (op >> 3) & 0x07;
    let index = op & 0x07;
    let val = cpu.read_operand(mmu, index);
    cpu.write_operand(mmu, index, val | (1 << bit));
    Ok(())
}

#[rustfmt::skip]
pub(crate) static OPCODES: [Opcode; 256] = [
    op("NOP", 1, nop),                 // 0x00
    op("LD BC,d16", 3, ld_rr_d16),     // 0x01
    op("LD (BC),A", 2, ld_rr_ind_a),   // 0x02
    op("INC BC", 2, inc_rr),           // 0x03
    op("INC B", 1, inc_r),             // 0x04
    op("DEC B", 1, dec_r),             // 0x05
    op("LD B,d8", 2, ld_r_d8),         // 0x06
    op("RLCA", 1, rlca),               // 0x07
    op("LD (a16),SP", 5, ld_a16_sp),   // 0x08
    op("ADD HL,BC", 2, add_hl_rr),     // 0x09
    op("LD A,(BC)", 2, ld_a_rr_ind),   // 0x0A
    op("DEC BC", 2, dec_rr),           // 0x0B
    op("INC C", 1, inc_r),             // 0x0C
    op("DEC C", 1, dec_r),             // 0x0D
    op("LD C,d8", 2, ld_r_d8),         // 0x0E
    op("RRCA", 1, rrca),               // 0x0F
    op("STOP", 2, stop),               // 0x10
    op("LD DE,d16", 3, ld_rr_d16),     // 0x11
    op("LD (DE),A", 2, ld_rr_ind_a),   // 0x12
    op("INC DE", 2, inc_rr),           // 0x13
    op("INC D", 1, inc_r),             // 0x14
    op("DEC D", 1, dec_r),             // 0x15
    op("LD D,d8", 2, ld_r_d8),         // 0x16
    op("RLA", 1, rla),                 // 0x17
    op("JR e8", 3, jr_e8),             // 0x18
    op("ADD HL,DE", 2, add_hl_rr),     // 0x19
    op("LD A,(DE)", 2, ld_a_rr_ind),   // 0x1A
    op("DEC DE", 2, dec_rr),           // 0x1B
    op("INC E", 1, inc_r),             // 0x1C
    op("DEC E", 1, dec_r),             // 0x1D
    op("LD E,d8", 2, ld_r_d8),         // 0x1E
    op("RRA", 1, rra),                 // 0x1F
    op("JR NZ,e8", 2, jr_cc_e8),       // 0x20
    op("LD HL,d16", 3, ld_rr_d16),     // 0x21
    op("LD (HL+),A", 2, ld_hli_a),     // 0x22
    op("INC HL", 2, inc_rr),           // 0x23
    op("INC H", 1, inc_r),             // 0x24
    op("DEC H", 1, dec_r),             // 0x25
    op("LD H,d8", 2, ld_r_d8),         // 0x26
    op("DAA", 1, daa),                 // 0x27
    op("JR Z,e8", 2, jr_cc_e8),        // 0x28
    op("ADD HL,HL", 2, add_hl_rr),     // 0x29
    op("LD A,(HL+)", 2, ld_a_hli),     // 0x2A
    op("DEC HL", 2, dec_rr),           // 0x2B
    op("INC L", 1, inc_r),             // 0x2C
    op("DEC L", 1, dec_r),             // 0x2D
    op("LD L,d8", 2, ld_r_d8),         // 0x2E
    op("CPL", 1, cpl),                 // 0x2F
    op("JR NC,e8", 2, jr_cc_e8),       // 0x30
    op("LD SP,d16", 3, ld_rr_d16),     // 0x31
    op("LD (HL-),A", 2, ld_hld_a),     // 0x32
    op("INC SP", 2, inc_rr),           // 0x33
    op("INC (HL)", 3, inc_r),          // 0x34
    op("DEC (HL)", 3, dec_r),          // 0x35
    op("LD (HL),d8", 3, ld_r_d8),      // 0x36
    op("SCF", 1, scf),                 // 0x37
    op("JR C,e8", 2, jr_cc_e8),        // 0x38
    op("ADD HL,SP", 2, add_hl_rr),     // 0x39
    op("LD A,(HL-)", 2, ld_a_hld),     // 0x3A
    op("DEC SP", 2, dec_rr),           // 0x3B
    op("INC A", 1, inc_r),             // 0x3C
    op("DEC A", 1, dec_r),             // 0x3D
    op("LD A,d8", 2, ld_r_d8),         // 0x3E
    op("CCF", 1, ccf),                 // 0x3F
    op("LD B,B", 1, ld_r_r),           // 0x40
    op("LD B,C", 1, ld_r_r),           // 0x41
    op("LD B,D", 1, ld_r_r),           // 0x42
    op("LD B,E", 1, ld_r_r),           // 0x43
    op("LD B,H", 1, ld_r_r),           // 0x44
    op("LD B,L", 1, ld_r_r),           // 0x45
    op("LD B,(HL)", 2, ld_r_r),        // 0x46
    op("LD B,A", 1, ld_r_r),           // 0x47
    op("LD C,B", 1, ld_r_r),           // 0x48
    op("LD C,C", 1, ld_r_r),           // 0x49
    op("LD C,D", 1, ld_r_r),           // 0x4A
    op("LD C,E", 1, ld_r_r),           // 0x4B
    op("LD C,H", 1, ld_r_r),           // 0x4C
    op("LD C,L", 1, ld_r_r),           // 0x4D
    op("LD C,(HL)", 2, ld_r_r),        // 0x4E
    op("LD C,A", 1, ld_r_r),           // 0x4F
    op("LD D,B", 1, ld_r_r),           // 0x50
    op("LD D,C", 1, ld_r_r),           // 0x51
    op("LD D,D", 1, ld_r_r),           // 0x52
    op("LD D,E", 1, ld_r_r),           // 0x53
    op("LD D,H", 1, ld_r_r),           // 0x54
    op("LD D,L", 1, ld_r_r),           // 0x55
    op("LD D,(HL)", 2, ld_r_r),        // 0x56
    op("LD D,A", 1, ld_r_r),           // 0x57
    op("LD E,B", 1, ld_r_r),           // 0x58
    op("LD E,C", 1, ld_r_r),           // 0x59
    op("LD E,D", 1, ld_r_r),           // 0x5A
    op("LD E,E", 1, ld_r_r),           // 0x5B
    op("LD E,H", 1, ld_r_r),           // 0x5C
    op("LD E,L", 1, ld_r_r),           // 0x5D
    op("LD E,(HL)", 2, ld_r_r),        // 0x5E
    op("LD E,A", 1, ld_r_r),           // 0x5F
    op("LD H,B", 1, ld_r_r),           // 0x60
    op("LD H,C", 1, ld_r_r),           // 0x61
    op("LD H,D", 1, ld_r_r),           // 0x62
    op("LD H,E", 1, ld_r_r),           // 0x63
    op("LD H,H", 1, ld_r_r),           // 0x64
    op("LD H,L", 1, ld_r_r),           // 0x65
    op("LD H,(HL)", 2, ld_r_r),        // 0x66
    op("LD H,A", 1, ld_r_r),           // 0x67
    op("LD L,B", 1, ld_r_r),           // 0x68
    op("LD L,C", 1, ld_r_r),           // 0x69
    op("LD L,D", 1, ld_r_r),           // 0x6A
    op("LD L,E", 1, ld_r_r),           // 0x6B
    op("LD L,H", 1, ld_r_r),           // 0x6C
    op("LD L,L", 1, ld_r_r),           // 0x6D
    op("LD L,(HL)", 2, ld_r_r),        // 0x6E
    op("LD L,A", 1, ld_r_r),           // 0x6F
    op("LD (HL),B", 2, ld_r_r),        // 0x70
    op("LD (HL),C", 2, ld_r_r),        // 0x71
    op("LD (HL),D", 2, ld_r_r),        // 0x72
    op("LD (HL),E", 2, ld_r_r),        // 0x73
    op("LD (HL),H", 2, ld_r_r),        // 0x74
    op("LD (HL),L", 2, ld_r_r),        // 0x75
    op("HALT", 1, halt),               // 0x76
    op("LD (HL),A", 2, ld_r_r),        // 0x77
    op("LD A,B", 1, ld_r_r),           // 0x78
    op("LD A,C", 1, ld_r_r),           // 0x79
    op("LD A,D", 1, ld_r_r),           // 0x7A
    op("LD A,E", 1, ld_r_r),           // 0x7B
    op("LD A,H", 1, ld_r_r),           // 0x7C
    op("LD A,L", 1, ld_r_r),           // 0x7D
    op("LD A,(HL)", 2, ld_r_r),        // 0x7E
    op("LD A,A", 1, ld_r_r),           // 0x7F
    op("ADD A,B", 1, alu_a_r),         // 0x80
    op("ADD A,C", 1, alu_a_r),         // 0x81
    op("ADD A,D", 1, alu_a_r),         // 0x82
    op("ADD A,E", 1, alu_a_r),         // 0x83
    op("ADD A,H", 1, alu_a_r),         // 0x84
    op("ADD A,L", 1, alu_a_r),         // 0x85
    op("ADD A,(HL)", 2, alu_a_r),      // 0x86
    op("ADD A,A", 1, alu_a_r),         // 0x87
    op("ADC A,B", 1, alu_a_r),         // 0x88
    op("ADC A,C", 1, alu_a_r),         // 0x89
    op("ADC A,D", 1, alu_a_r),         // 0x8A
    op("ADC A,E", 1, alu_a_r),         // 0x8B
    op("ADC A,H", 1, alu_a_r),         // 0x8C
    op("ADC A,L", 1, alu_a_r),         // 0x8D
    op("ADC A,(HL)", 2, alu_a_r),      // 0x8E
    op("ADC A,A", 1, alu_a_r),         // 0x8F
    op("SUB B", 1, alu_a_r),           // 0x90
    op("SUB C", 1, alu_a_r),           // 0x91
    op("SUB D", 1, alu_a_r),           // 0x92
    op("SUB E", 1, alu_a_r),           // 0x93
    op("SUB H", 1, alu_a_r),           // 0x94
    op("SUB L", 1, alu_a_r),           // 0x95
    op("SUB (HL)", 2, alu_a_r),        // 0x96
    op("SUB A", 1, alu_a_r),           // 0x97
    op("SBC A,B", 1, alu_a_r),         // 0x98
    op("SBC A,C", 1, alu_a_r),         // 0x99
    op("SBC A,D", 1, alu_a_r),         // 0x9A
    op("SBC A,E", 1, alu_a_r),         // 0x9B
    op("SBC A,H", 1, alu_a_r),         // 0x9C
    op("SBC A,L", 1, alu_a_r),         // 0x9D
    op("SBC A,(HL)", 2, alu_a_r),      // 0x9E
    op("SBC A,A", 1, alu_a_r),         // 0x9F
    op("AND B", 1, alu_a_r),           // 0xA0
    op("AND C", 1, alu_a_r),           // 0xA1
    op("AND D", 1, alu_a_r),           // 0xA2
    op("AND E", 1, alu_a_r),           // 0xA3
    op("AND H", 1, alu_a_r),           // 0xA4
    op("AND L", 1, alu_a_r),           // 0xA5
    op("AND (HL)", 2, alu_a_r),        // 0xA6
    op("AND A", 1, alu_a_r),           // 0xA7
    op("XOR B", 1, alu_a_r),           // 0xA8
    op("XOR C", 1, alu_a_r),           // 0xA9
    op("XOR D", 1, alu_a_r),           // 0xAA
    op("XOR E", 1, alu_a_r),           // 0xAB
    op("XOR H", 1, alu_a_r),           // 0xAC
    op("XOR L", 1, alu_a_r),           // 0xAD
    op("XOR (HL)", 2, alu_a_r),        // 0xAE
    op("XOR A", 1, alu_a_r),           // 0xAF
    op("OR B", 1, alu_a_r),            // 0xB0
    op("OR C", 1, alu_a_r),            // 0xB1
    op("OR D", 1, alu_a_r),            // 0xB2
    op("OR E", 1, alu_a_r),            // 0xB3
    op("OR H", 1, alu_a_r),            // 0xB4
    op("OR L", 1, alu_a_r),            // 0xB5
    op("OR (HL)", 2, alu_a_r),         // 0xB6
    op("OR A", 1, alu_a_r),            // 0xB7
    op("CP B", 1, alu_a_r),            // 0xB8
    op("CP C", 1, alu_a_r),            // 0xB9
    op("CP D", 1, alu_a_r),            // 0xBA
    op("CP E", 1, alu_a_r),            // 0xBB
    op("CP H", 1, alu_a_r),            // 0xBC
    op("CP L", 1, alu_a_r),            // 0xBD
    op("CP (HL)", 2, alu_a_r),         // 0xBE
    op("CP A", 1, alu_a_r),            // 0xBF
    op("RET NZ", 2, ret_cc),           // 0xC0
    op("POP BC", 3, pop_rr),           // 0xC1
    op("JP NZ,a16", 3, jp_cc_a16),     // 0xC2
    op("JP a16", 4, jp_a16),           // 0xC3
    op("CALL NZ,a16", 3, call_cc_a16), // 0xC4
    op("PUSH BC", 4, push_rr),         // 0xC5
    op("ADD A,d8", 2, alu_a_d8),       // 0xC6
    op("RST 00", 4, rst),              // 0xC7
    op("RET Z", 2, ret_cc),            // 0xC8
    op("RET", 4, ret),                 // 0xC9
    op("JP Z,a16", 3, jp_cc_a16),      // 0xCA
    op("PREFIX CB", 2, cb_prefix),     // 0xCB
    op("CALL Z,a16", 3, call_cc_a16),  // 0xCC
    op("CALL a16", 6, call_a16),       // 0xCD
    op("ADC A,d8", 2, alu_a_d8),       // 0xCE
    op("RST 08", 4, rst),              // 0xCF
    op("RET NC", 2, ret_cc),           // 0xD0
    op("POP DE", 3, pop_rr),           // 0xD1
    op("JP NC,a16", 3, jp_cc_a16),     // 0xD2
    op("(undefined)", 1, illegal),     // 0xD3
    op("CALL NC,a16", 3, call_cc_a16), // 0xD4
    op("PUSH DE", 4, push_rr),         // 0xD5
    op("SUB d8", 2, alu_a_d8),         // 0xD6
    op("RST 10", 4, rst),              // 0xD7
    op("RET C", 2, ret_cc),            // 0xD8
    op("RETI", 4, reti),               // 0xD9
    op("JP C,a16", 3, jp_cc_a16),      // 0xDA
    op("(undefined)", 1, illegal),     // 0xDB
    op("CALL C,a16", 3, call_cc_a16),  // 0xDC
    op("(undefined)", 1, illegal),     // 0xDD
    op("SBC A,d8", 2, alu_a_d8),       // 0xDE
    op("RST 18", 4, rst),              // 0xDF
    op("LDH (a8),A", 3, ldh_a8_a),     // 0xE0
    op("POP HL", 3, pop_rr),           // 0xE1
    op("LD (C),A", 2, ldh_c_a),        // 0xE2
    op("(undefined)", 1, illegal),     // 0xE3
    op("(undefined)", 1, illegal),     // 0xE4
    op("PUSH HL", 4, push_rr),         // 0xE5
    op("AND d8", 2, alu_a_d8),         // 0xE6
    op("RST 20", 4, rst),              // 0xE7
    op("ADD SP,e8", 4, add_sp_e8),     // 0xE8
    op("JP HL", 1, jp_hl),             // 0xE9
    op("LD (a16),A", 4, ld_a16_a),     // 0xEA
    op("(undefined)", 1, illegal),     // 0xEB
    op("(undefined)", 1, illegal),     // 0xEC
    op("(undefined)", 1, illegal),     // 0xED
    op("XOR d8", 2, alu_a_d8),         // 0xEE
    op("RST 28", 4, rst),              // 0xEF
    op("LDH A,(a8)", 3, ldh_a_a8),     // 0xF0
    op("POP AF", 3, pop_rr),           // 0xF1
    op("LD A,(C)", 2, ldh_a_c),        // 0xF2
    op("DI", 1, di),                   // 0xF3
    op("(undefined)", 1, illegal),     // 0xF4
    op("PUSH AF", 4, push_rr),         // 0xF5
    op("OR d8", 2, alu_a_d8),          // 0xF6
    op("RST 30", 4, rst),              // 0xF7
    op("LD HL,SP+e8", 3, ld_hl_sp_e8), // 0xF8
    op("LD SP,HL", 2, ld_sp_hl),       // 0xF9
    op("LD A,(a16)", 4, ld_a_a16),     // 0xFA
    op("EI", 1, ei),                   // 0xFB
    op("(undefined)", 1, illegal),     // 0xFC
    op("(undefined)", 1, illegal),     // 0xFD
    op("CP d8", 2, alu_a_d8),          // 0xFE
    op("RST 38", 4, rst),              // 0xFF
];

#[rustfmt::skip]
pub(crate) static CB_OPCODES: [Opcode; 256] = [
    op("RLC B", 2, cb_rotate),         // 0x00
    op("RLC C", 2, cb_rotate),         // 0x01
    op("RLC D", 2, cb_rotate),         // 0x02
    op("RLC E", 2, cb_rotate),         // 0x03
    op("RLC H", 2, cb_rotate),         // 0x04
    op("RLC L", 2, cb_rotate),         // 0x05
    op("RLC (HL)", 4, cb_rotate),      // 0x06
    op("RLC A", 2, cb_rotate),         // 0x07
    op("RRC B", 2, cb_rotate),         // 0x08
    op("RRC C", 2, cb_rotate),         // 0x09
    op("RRC D", 2, cb_rotate),         // 0x0A
    op("RRC E", 2, cb_rotate),         // 0x0B
    op("RRC H", 2, cb_rotate),         // 0x0C
    op("RRC L", 2, cb_rotate),         // 0x0D
    op("RRC (HL)", 4, cb_rotate),      // 0x0E
    op("RRC A", 2, cb_rotate),         // 0x0F
    op("RL B", 2, cb_rotate),          // 0x10
    op("RL C", 2, cb_rotate),          // 0x11
    op("RL D", 2, cb_rotate),          // 0x12
    op("RL E", 2, cb_rotate),          // 0x13
    op("RL H", 2, cb_rotate),          // 0x14
    op("RL L", 2, cb_rotate),          // 0x15
    op("RL (HL)", 4, cb_rotate),       // 0x16
    op("RL A", 2, cb_rotate),          // 0x17
    op("RR B", 2, cb_rotate),          // 0x18
    op("RR C", 2, cb_rotate),          // 0x19
    op("RR D", 2, cb_rotate),          // 0x1A
    op("RR E", 2, cb_rotate),          // 0x1B
    op("RR H", 2, cb_rotate),          // 0x1C
    op("RR L", 2, cb_rotate),          // 0x1D
    op("RR (HL)", 4, cb_rotate),       // 0x1E
    op("RR A", 2, cb_rotate),          // 0x1F
    op("SLA B", 2, cb_rotate),         // 0x20
    op("SLA C", 2, cb_rotate),         // 0x21
    op("SLA D", 2, cb_rotate),         // 0x22
    op("SLA E", 2, cb_rotate),         // 0x23
    op("SLA H", 2, cb_rotate),         // 0x24
    op("SLA L", 2, cb_rotate),         // 0x25
    op("SLA (HL)", 4, cb_rotate),      // 0x26
    op("SLA A", 2, cb_rotate),         // 0x27
    op("SRA B", 2, cb_rotate),         // 0x28
    op("SRA C", 2, cb_rotate),         // 0x29
    op("SRA D", 2, cb_rotate),         // 0x2A
    op("SRA E", 2, cb_rotate),         // 0x2B
    op("SRA H", 2, cb_rotate),         // 0x2C
    op("SRA L", 2, cb_rotate),         // 0x2D
    op("SRA (HL)", 4, cb_rotate),      // 0x2E
    op("SRA A", 2, cb_rotate),         // 0x2F
    op("SWAP B", 2, cb_rotate),        // 0x30
    op("SWAP C", 2, cb_rotate),        // 0x31
    op("SWAP D", 2, cb_rotate),        // 0x32
    op("SWAP E", 2, cb_rotate),        // 0x33
    op("SWAP H", 2, cb_rotate),        // 0x34
    op("SWAP L", 2, cb_rotate),        // 0x35
    op("SWAP (HL)", 4, cb_rotate),     // 0x36
    op("SWAP A", 2, cb_rotate),        // 0x37
    op("SRL B", 2, cb_rotate),         // 0x38
    op("SRL C", 2, cb_rotate),         // 0x39
    op("SRL D", 2, cb_rotate),         // 0x3A
    op("SRL E", 2, cb_rotate),         // 0x3B
    op("SRL H", 2, cb_rotate),         // 0x3C
    op("SRL L", 2, cb_rotate),         // 0x3D
    op("SRL (HL)", 4, cb_rotate),      // 0x3E
    op("SRL A", 2, cb_rotate),         // 0x3F
    op("BIT 0,B", 2, cb_bit),          // 0x40
    op("BIT 0,C", 2, cb_bit),          // 0x41
    op("BIT 0,D", 2, cb_bit),          // 0x42
    op("BIT 0,E", 2, cb_bit),          // 0x43
    op("BIT 0,H", 2, cb_bit),          // 0x44
    op("BIT 0,L", 2, cb_bit),          // 0x45
    op("BIT 0,(HL)", 3, cb_bit),       // 0x46
    op("BIT 0,A", 2, cb_bit),          // 0x47
    op("BIT 1,B", 2, cb_bit),          // 0x48
    op("BIT 1,C", 2, cb_bit),          // 0x49
    op("BIT 1,D", 2, cb_bit),          // 0x4A
    op("BIT 1,E", 2, cb_bit),          // 0x4B
    op("BIT 1,H", 2, cb_bit),          // 0x4C
    op("BIT 1,L", 2, cb_bit),          // 0x4D
    op("BIT 1,(HL)", 3, cb_bit),       // 0x4E
    op("BIT 1,A", 2, cb_bit),          // 0x4F
    op("BIT 2,B", 2, cb_bit),          // 0x50
    op("BIT 2,C", 2, cb_bit),          // 0x51
    op("BIT 2,D", 2, cb_bit),          // 0x52
    op("BIT 2,E", 2, cb_bit),          // 0x53
    op("BIT 2,H", 2, cb_bit),          // 0x54
    op("BIT 2,L", 2, cb_bit),          // 0x55
    op("BIT 2,(HL)", 3, cb_bit),       // 0x56
    op("BIT 2,A", 2, cb_bit),          // 0x57
    op("BIT 3,B", 2, cb_bit),          // 0x58
    op("BIT 3,C", 2, cb_bit),          // 0x59
    op("BIT 3,D", 2, cb_bit),          // 0x5A
    op("BIT 3,E", 2, cb_bit),          // 0x5B
    op("BIT 3,H", 2, cb_bit),          // 0x5C
    op("BIT 3,L", 2, cb_bit),          // 0x5D
    op("BIT 3,(HL)", 3, cb_bit),       // 0x5E
    op("BIT 3,A", 2, cb_bit),          // 0x5F
    op("BIT 4,B", 2, cb_bit),          // 0x60
    op("BIT 4,C", 2, cb_bit),          // 0x61
    op("BIT 4,D", 2, cb_bit),          // 0x62
    op("BIT 4,E", 2, cb_bit),          // 0x63
    op("BIT 4,H", 2, cb_bit),          // 0x64
    op("BIT 4,L", 2, cb_bit),          // 0x65
    op("BIT 4,(HL)", 3, cb_bit),       // 0x66
    op("BIT 4,A", 2, cb_bit),          // 0x67
    op("BIT 5,B", 2, cb_bit),          // 0x68
    op("BIT 5,C", 2, cb_bit),          // 0x69
    op("BIT 5,D", 2, cb_bit),          // 0x6A
    op("BIT 5,E", 2, cb_bit),          // 0x6B
    op("BIT 5,H", 2, cb_bit),          // 0x6C
    op("BIT 5,L", 2, cb_bit),          // 0x6D
    op("BIT 5,(HL)", 3, cb_bit),       // 0x6E
    op("BIT 5,A", 2, cb_bit),          // 0x6F
    op("BIT 6,B", 2, cb_bit),          // 0x70
    op("BIT 6,C", 2, cb_bit),          // 0x71
    op("BIT 6,D", 2, cb_bit),          // 0x72
    op("BIT 6,E", 2, cb_bit),          // 0x73
    op("BIT 6,H", 2, cb_bit),          // 0x74
    op("BIT 6,L", 2, cb_bit),          // 0x75
    op("BIT 6,(HL)", 3, cb_bit),       // 0x76
    op("BIT 6,A", 2, cb_bit),          // 0x77
    op("BIT 7,B", 2, cb_bit),          // 0x78
    op("BIT 7,C", 2, cb_bit),          // 0x79
    op("BIT 7,D", 2, cb_bit),          // 0x7A
    op("BIT 7,E", 2, cb_bit),          // 0x7B
    op("BIT 7,H", 2, cb_bit),          // 0x7C
    op("BIT 7,L", 2, cb_bit),          // 0x7D
    op("BIT 7,(HL)", 3, cb_bit),       // 0x7E
    op("BIT 7,A", 2, cb_bit),          // 0x7F
    op("RES 0,B", 2, cb_res),          // 0x80
    op("RES 0,C", 2, cb_res),          // 0x81
    op("RES 0,D", 2, cb_res),          // 0x82
    op("RES 0,E", 2, cb_res),          // 0x83
    op("RES 0,H", 2, cb_res),          // 0x84
    op("RES 0,L", 2, cb_res),          // 0x85
    op("RES 0,(HL)", 4, cb_res),       // 0x86
    op("RES 0,A", 2, cb_res),          // 0x87
    op("RES 1,B", 2, cb_res),          // 0x88
    op("RES 1,C", 2, cb_res),          // 0x89
    op("RES 1,D", 2, cb_res),          // 0x8A
    op("RES 1,E", 2, cb_res),          // 0x8B
    op("RES 1,H", 2, cb_res),          // 0x8C
    op("RES 1,L", 2, cb_res),          // 0x8D
    op("RES 1,(HL)", 4, cb_res),       // 0x8E
    op("RES 1,A", 2, cb_res),          // 0x8F
    op("RES 2,B", 2, cb_res),          // 0x90
    op("RES 2,C", 2, cb_res),          // 0x91
    op("RES 2,D", 2, cb_res),          // 0x92
    op("RES 2,E", 2, cb_res),          // 0x93
    op("RES 2,H", 2, cb_res),          // 0x94
    op("RES 2,L", 2, cb_res),          // 0x95
    op("RES 2,(HL)", 4, cb_res),       // 0x96
    op("RES 2,A", 2, cb_res),          // 0x97
    op("RES 3,B", 2, cb_res),          // 0x98
    op("RES 3,C", 2, cb_res),          // 0x99
    op("RES 3,D", 2, cb_res),          // 0x9A
    op("RES 3,E", 2, cb_res),          // 0x9B
    op("RES 3,H", 2, cb_res),          // 0x9C
    op("RES 3,L", 2, cb_res),          // 0x9D
    op("RES 3,(HL)", 4, cb_res),       // 0x9E
    op("RES 3,A", 2, cb_res),          // 0x9F
    op("RES 4,B", 2, cb_res),          // 0xA0
    op("RES 4,C", 2, cb_res),          // 0xA1
    op("RES 4,D", 2, cb_res),          // 0xA2
    op("RES 4,E", 2, cb_res),          // 0xA3
    op("RES 4,H", 2, cb_res),          // 0xA4
    op("RES 4,L", 2, cb_res),          // 0xA5
    op("RES 4,(HL)", 4, cb_res),       // 0xA6
    op("RES 4,A", 2, cb_res),          // 0xA7
    op("RES 5,B", 2, cb_res),          // 0xA8
    op("RES 5,C", 2, cb_res),          // 0xA9
    op("RES 5,D", 2, cb_res),          // 0xAA
    op("RES 5,E", 2, cb_res),          // 0xAB
    op("RES 5,H", 2, cb_res),          // 0xAC
    op("RES 5,L", 2, cb_res),          // 0xAD
    op("RES 5,(HL)", 4, cb_res),       // 0xAE
    op("RES 5,A", 2, cb_res),          // 0xAF
    op("RES 6,B", 2, cb_res),          // 0xB0
    op("RES 6,C", 2, cb_res),          // 0xB1
    op("RES 6,D", 2, cb_res),          // 0xB2
    op("RES 6,E", 2, cb_res),          // 0xB3
    op("RES 6,H", 2, cb_res),          // 0xB4
    op("RES 6,L", 2, cb_res),          // 0xB5
    op("RES 6,(HL)", 4, cb_res),       // 0xB6
    op("RES 6,A", 2, cb_res),          // 0xB7
    op("RES 7,B", 2, cb_res),          // 0xB8
    op("RES 7,C", 2, cb_res),          // 0xB9
    op("RES 7,D", 2, cb_res),          // 0xBA
    op("RES 7,E", 2, cb_res),          // 0xBB
    op("RES 7,H", 2, cb_res),          // 0xBC
    op("RES 7,L", 2, cb_res),          // 0xBD
    op("RES 7,(HL)", 4, cb_res),       // 0xBE
    op("RES 7,A", 2, cb_res),          // 0xBF
    op("SET 0,B", 2, cb_set),          // 0xC0
    op("SET 0,C", 2, cb_set),          // 0xC1
    op("SET 0,D", 2, cb_set),          // 0xC2
    op("SET 0,E", 2, cb_set),          // 0xC3
    op("SET 0,H", 2, cb_set),          // 0xC4
    op("SET 0,L", 2, cb_set),          // 0xC5
    op("SET 0,(HL)", 4, cb_set),       // 0xC6
    op("SET 0,A", 2, cb_set),          // 0xC7
    op("SET 1,B", 2, cb_set),          // 0xC8
    op("SET 1,C", 2, cb_set),          // 0xC9
    op("SET 1,D", 2, cb_set),          // 0xCA
    op("SET 1,E", 2, cb_set),          // 0xCB
    op("SET 1,H", 2, cb_set),          // 0xCC
    op("SET 1,L", 2, cb_set),          // 0xCD
    op("SET 1,(HL)", 4, cb_set),       // 0xCE
    op("SET 1,A", 2, cb_set),          // 0xCF
    op("SET 2,B", 2, cb_set),          // 0xD0
    op("SET 2,C", 2, cb_set),          // 0xD1
    op("SET 2,D", 2, cb_set),          // 0xD2
    op("SET 2,E", 2, cb_set),          // 0xD3
    op("SET 2,H", 2, cb_set),          // 0xD4
    op("SET 2,L", 2, cb_set),          // 0xD5
    op("SET 2,(HL)", 4, cb_set),       // 0xD6
    op("SET 2,A", 2, cb_set),          // 0xD7
    op("SET 3,B", 2, cb_set),          // 0xD8
    op("SET 3,C", 2, cb_set),          // 0xD9
    op("SET 3,D", 2, cb_set),          // 0xDA
    op("SET 3,E", 2, cb_set),          // 0xDB
    op("SET 3,H", 2, cb_set),          // 0xDC
    op("SET 3,L", 2, cb_set),          // 0xDD
    op("SET 3,(HL)", 4, cb_set),       // 0xDE
    op("SET 3,A", 2, cb_set),          // 0xDF
    op("SET 4,B", 2, cb_set),          // 0xE0
    op("SET 4,C", 2, cb_set),          // 0xE1
    op("SET 4,D", 2, cb_set),          // 0xE2
    op("SET 4,E", 2, cb_set),          // 0xE3
    op("SET 4,H", 2, cb_set),          // 0xE4
    op("SET 4,L", 2, cb_set),          // 0xE5
    op("SET 4,(HL)", 4, cb_set),       // 0xE6
    op("SET 4,A", 2, cb_set),          // 0xE7
    op("SET 5,B", 2, cb_set),          // 0xE8
    op("SET 5,C", 2, cb_set),          // 0xE9
    op("SET 5,D", 2, cb_set),          // 0xEA
    op("SET 5,E", 2, cb_set),          // 0xEB
    op("SET 5,H", 2, cb_set),          // 0xEC
    op("SET 5,L", 2, cb_set),          // 0xED
    op("SET 5,(HL)", 4, cb_set),       // 0xEE
    op("SET 5,A", 2, cb_set),          // 0xEF
    op("SET 6,B", 2, cb_set),          // 0xF0
    op("SET 6,C", 2, cb_set),          // 0xF1
    op("SET 6,D", 2, cb_set),          // 0xF2
    op("SET 6,E", 2, cb_set),          // 0xF3
    op("SET 6,H", 2, cb_set),          // 0xF4
    op("SET 6,L", 2, cb_set),          // 0xF5
    op("SET 6,(HL)", 4, cb_set),       // 0xF6
    op("SET 6,A", 2, cb_set),          // 0xF7
    op("SET 7,B", 2, cb_set),          // 0xF8
    op("SET 7,C", 2, cb_set),          // 0xF9
    op("SET 7,D", 2, cb_set),          // 0xFA
    op("SET 7,E", 2, cb_set),          // 0xFB
    op("SET 7,H", 2, cb_set),          // 0xFC
    op("SET 7,L", 2, cb_set),          // 0xFD
    op("SET 7,(HL)", 4, cb_set),       // 0xFE
    op("SET 7,A", 2, cb_set),          // 0xFF
];
