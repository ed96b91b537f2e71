//! ALU arithmetic operations.
//!
//! Register arithmetic is 8 bits wide and wraps modulo 256; there is no overflow
//! fault and no carry flag. The only flag produced is zero.

/// Arithmetic operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
}

/// Result of an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// The wrapped result.
    pub value: u8,
    /// True when `value` is zero.
    pub zero: bool,
}

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform.
/// * `a`  - Left operand (the destination register's old value).
/// * `b`  - Right operand.
pub const fn execute(op: AluOp, a: u8, b: u8) -> AluResult {
    let value = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
    };
    AluResult {
        value,
        zero: value == 0,
    }
}
