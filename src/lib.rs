//! Dialog Multiplier - Dialogue dataset multiplication
//!
//! This crate grows a labeled multi-turn dialogue corpus by recombining the
//! conversation flows it contains, rewriting client turns with paraphrases and
//! filling identity placeholders with synthetic values.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
