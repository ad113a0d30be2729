//! API route handlers
//!
//! Each submodule contains handlers for one logical group of endpoints.

pub mod health;
pub mod precipitation;
pub mod root;
pub mod stations;
pub mod stats;
pub mod tobs;
