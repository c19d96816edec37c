// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod transform;

pub mod csv;
pub mod file;
pub mod runner;

pub use error::{Result, TbaError};
