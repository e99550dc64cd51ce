mod components;
mod constants;
mod fonts;
mod manager;

pub use manager::run_gui;
