//! # ALU Tests

use minicpu_core::core::alu::{AluOp, AluResult, execute};
use rstest::rstest;

#[rstest]
#[case::add_plain(AluOp::Add, 10, 20, 30, false)]
#[case::add_wraps_to_zero(AluOp::Add, 200, 56, 0, true)]
#[case::add_wraps_past_zero(AluOp::Add, 255, 2, 1, false)]
#[case::add_zero_plus_zero(AluOp::Add, 0, 0, 0, true)]
#[case::sub_plain(AluOp::Sub, 30, 20, 10, false)]
#[case::sub_self(AluOp::Sub, 5, 5, 0, true)]
#[case::sub_wraps_below_zero(AluOp::Sub, 0, 1, 255, false)]
#[case::sub_wraps_large(AluOp::Sub, 3, 10, 249, false)]
fn test_alu(
    #[case] op: AluOp,
    #[case] a: u8,
    #[case] b: u8,
    #[case] value: u8,
    #[case] zero: bool,
) {
    assert_eq!(execute(op, a, b), AluResult { value, zero });
}
