//! Record fixtures with fixed, predictable values.

pub mod factory;
