//! The core's error type.
//!
//! The only failure mode the CPU itself can raise is an unrecognized opcode
//! byte. It is fatal for the current `run` call but never corrupts CPU
//! state: the byte is never written anywhere, and `pc` is left pointing at
//! the opcode that failed to decode.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("unrecognized opcode {opcode:#04X} at {pc:#06X}")]
    InvalidOpcode { opcode: u8, pc: u16 },
}
