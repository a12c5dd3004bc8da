//! HTTP handlers

pub mod calculation;
