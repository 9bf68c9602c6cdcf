use std::sync::LazyLock;
use std::time::Instant;

/// Configuration of the genetic search
pub mod config;

/// Reading instances, writing solutions, logging and the command line interface
pub mod io;

/// Chromosomes and the genetic loop
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
