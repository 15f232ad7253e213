//! Core types: configuration, event models, dedup cursor, secrets.

pub mod config;
pub mod cursor;
pub mod models;
pub mod secrets;
