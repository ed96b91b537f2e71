//! # Engine Properties
//!
//! Universal properties of the engine, checked over generated programs.

use crate::common::strategies::{reg, valid_program};
use minicpu_core::common::{FaultKind, Operand, REG_COUNT, Space};
use minicpu_core::isa::Instruction;
use minicpu_core::sim::{Engine, Program};
use minicpu_core::{MachineState, Termination, execute};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_valid_programs_run_off_end_within_length(insts in valid_program(64)) {
        let program = Program::new(insts);
        let mut state = MachineState::new();
        let mut engine = Engine::new(&mut state, &program);

        prop_assert_eq!(engine.run(), Ok(Termination::RanOffEnd));
        prop_assert!(engine.stats().cycles <= program.len() as u64);
        prop_assert_eq!(engine.state().pc, program.len());
    }

    #[test]
    fn prop_mov_then_read(r in reg(), v in any::<u8>()) {
        let mut state = MachineState::new();
        let result = execute(&mut state, &Program::new(vec![Instruction::mov(r, v)]));
        prop_assert!(result.is_ok());
        prop_assert_eq!(state.reg(r as usize), Some(v));
    }

    #[test]
    fn prop_add_zero_flag_iff_result_zero(a in any::<u8>(), b in any::<u8>()) {
        let program = Program::new(vec![
            Instruction::mov(0, a),
            Instruction::mov(1, b),
            Instruction::add(0, 1),
        ]);
        let mut state = MachineState::new();
        prop_assert_eq!(execute(&mut state, &program), Ok(Termination::RanOffEnd));

        let result = state.reg(0).unwrap_or_default();
        prop_assert_eq!(result, a.wrapping_add(b));
        prop_assert_eq!(state.zero_flag, result == 0);
        prop_assert_eq!(state.zero_flag, a as u16 + b as u16 == 0 || a as u16 + b as u16 == 256);
    }

    #[test]
    fn prop_sub_zero_flag_iff_equal(a in any::<u8>(), b in any::<u8>()) {
        let program = Program::new(vec![
            Instruction::mov(2, a),
            Instruction::mov(3, b),
            Instruction::sub(2, 3),
        ]);
        let mut state = MachineState::new();
        prop_assert_eq!(execute(&mut state, &program), Ok(Termination::RanOffEnd));
        prop_assert_eq!(state.reg(2), Some(a.wrapping_sub(b)));
        prop_assert_eq!(state.zero_flag, a == b);
    }

    #[test]
    fn prop_store_then_read(r in reg(), v in any::<u8>(), addr in any::<u8>()) {
        let program = Program::new(vec![
            Instruction::mov(r, v),
            Instruction::store(r, addr),
        ]);
        let mut state = MachineState::new();
        prop_assert_eq!(execute(&mut state, &program), Ok(Termination::RanOffEnd));
        prop_assert_eq!(state.mem(addr as usize), Some(v));
    }

    #[test]
    fn prop_out_of_range_register_faults_and_preserves_state(
        prefix in valid_program(16),
        bad in (REG_COUNT as u8)..=255,
        v in any::<u8>(),
    ) {
        let pc = prefix.len();

        // Reference: the prefix alone.
        let mut expected = MachineState::new();
        prop_assert_eq!(
            execute(&mut expected, &Program::new(prefix.clone())),
            Ok(Termination::RanOffEnd)
        );

        let mut insts = prefix;
        insts.push(Instruction::mov(bad, v));
        insts.push(Instruction::mov(0, v));
        let mut state = MachineState::new();
        let fault = execute(&mut state, &Program::new(insts));

        prop_assert_eq!(
            fault,
            Err(FaultKind::out_of_range(Operand::Dst, Space::Register, bad as usize, REG_COUNT).at(pc))
        );
        prop_assert_eq!(state.pc, pc);
        prop_assert_eq!(&state.regs, &expected.regs);
        prop_assert_eq!(&state.memory, &expected.memory);
        prop_assert_eq!(state.zero_flag, expected.zero_flag);
    }

    #[test]
    fn prop_out_of_range_memory_faults(
        (size, addr) in (1usize..=255).prop_flat_map(|size| (Just(size), (size as u8)..=255)),
    ) {
        let mut state = MachineState::with_sizes(REG_COUNT, size);
        let fault = execute(&mut state, &Program::new(vec![Instruction::store(0, addr)]));
        prop_assert_eq!(
            fault,
            Err(FaultKind::out_of_range(Operand::SrcOrImm, Space::Memory, addr as usize, size).at(0))
        );
        prop_assert!(state.memory.as_slice().iter().all(|&b| b == 0));
    }
}
