#![windows_subsystem = "windows"]

mod database;
mod dictionary;
mod error;
mod gui;
mod lookup;

pub use error::{Error, Result};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    gui::run().unwrap();
}
