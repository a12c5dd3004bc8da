//! Wire types for the HTTP API

pub mod calculation;
