// LineSift - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde/csv for export.
// Must NOT depend on: ui, platform, app.

pub mod export;
pub mod filter;
pub mod lines;
pub mod model;
