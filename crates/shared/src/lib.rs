//! Wire types shared by the control panel front ends and the relay.

pub mod command;
pub mod domain;
pub mod protocol;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
