//! Driven adapters living outside the hexagonal boundary.

pub mod persistence;
