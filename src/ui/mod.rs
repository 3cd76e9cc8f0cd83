// src/ui/mod.rs
pub mod central_panel;
pub mod egui_surface;
pub mod main_window;
pub mod side_panel;
pub mod status_bar;

pub use main_window::run_main_window;
