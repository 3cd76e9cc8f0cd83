//! # Roomplan Main Entry Point
//!
//! Roomplan is an interactive floor-planning canvas: a rectangular dot grid
//! on which walls are dragged out between grid points and named furniture
//! objects are placed, moved, rotated, and deleted, with the whole layout
//! (plus named alternates) persisted across sessions. This file initializes
//! logging and starts the main event loop using eframe/egui.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;

use log::info;

use roomplan::ui::run_main_window;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("roomplan starting...");

    run_main_window()?;

    info!("roomplan exiting.");
    Ok(())
}
