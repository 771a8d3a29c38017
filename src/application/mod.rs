//! Application layer: the change engine and the register that drives it.
//!
//! `Register` validates a sale and hands the change owed to `ChangeEngine`,
//! which owns the greedy denomination algorithm.

pub mod engine;
pub mod register;
