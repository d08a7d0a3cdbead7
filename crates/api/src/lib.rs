//! HTTP host for the advisory engine.

pub mod app;
pub mod config;
