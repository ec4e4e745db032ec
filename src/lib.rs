//! Sticky note library exports for testing

pub mod core;
pub mod error;
pub mod gui;

#[cfg(test)]
pub mod test_support;
