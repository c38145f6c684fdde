//! Fixed, process-wide presets: the cipher alphabet and its lookup tables.

pub mod alphabet;
