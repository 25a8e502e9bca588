//! Standalone demo: opens a window with the picker and logs each commit.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_tint::{PickerConfig, tint_picker};

fn main() {
    env_logger::init();

    floem::Application::new()
        .window(
            move |_| {
                tint_picker(Some("#336699"), PickerConfig::default(), |picked| {
                    match picked {
                        Some(color) => log::info!("selected {color}"),
                        None => log::info!("cleared color"),
                    }
                    floem::quit_app();
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 380.0))
                    .title("floem-tint"),
            ),
        )
        .run();
}
