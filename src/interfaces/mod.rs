//! Boundary adapters: CSV input and receipt output for the command-line register.

pub mod csv;
pub mod receipt_writer;
