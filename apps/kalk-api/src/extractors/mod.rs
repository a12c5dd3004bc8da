//! Request extractors that gate handlers

pub mod calculation;
