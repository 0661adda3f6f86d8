//! Back-office core for the canteen ordering system.
//!
//! The domain layer holds the order lifecycle manager, the notification
//! dispatcher, and the ports they depend on. The outbound layer provides
//! Diesel/PostgreSQL adapters for those ports. The web surface that drives
//! these services lives outside this crate.

pub mod config;
pub mod domain;
pub mod outbound;
