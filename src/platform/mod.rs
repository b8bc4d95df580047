// LineSift - platform/mod.rs
//
// Platform abstraction layer: file reading and config directories.
// Dependencies: core (line splitting), util, directories crate.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
