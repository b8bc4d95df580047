// LineSift - app/mod.rs
//
// Application layer: state management and user actions.
// Dependencies: core, platform (file reading, config).
// Must NOT depend on: ui.

pub mod state;
