// src/debug/mod.rs

//! The `debug` module is macros and functions for printing errors and
//! warnings, and helpers for test builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
