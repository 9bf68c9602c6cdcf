/// Chromosome layouts and their translation into encodings
pub mod chromosome;

/// Generational genetic loop
pub mod ga;
