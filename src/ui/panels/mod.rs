// LineSift - ui/panels/mod.rs

pub mod about;
pub mod panes;
pub mod toolbar;
