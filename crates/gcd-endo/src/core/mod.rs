//! Core data types: the gcd primitive, the domain `M`, and self-maps on it.

pub mod domain;
pub mod gcd;
pub mod map;
