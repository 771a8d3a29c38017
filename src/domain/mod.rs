//! Domain types: money, denominations, the drawer and change results.
//!
//! Nothing in here performs I/O.

pub mod change;
pub mod denomination;
pub mod drawer;
pub mod money;
