#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Route the window opens on, set from the command line
static START_ROUTE: OnceLock<String> = OnceLock::new();

/// Get the start route (set from command line, if any)
pub fn get_start_route() -> Option<String> {
    START_ROUTE.get().cloned()
}

/// Procura - Hospitality Procurement Marketplace
#[derive(Parser, Debug)]
#[command(name = "procura-desktop")]
#[command(about = "Procura - sourcing and selling for hospitality teams")]
struct Args {
    /// Open the window on a specific route (e.g. /learn, /book-demo)
    #[arg(short, long)]
    route: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    window_width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 850.0)]
    window_height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(route) = args.route {
        let _ = START_ROUTE.set(route);
    }

    tracing::info!(
        start_route = %get_start_route().as_deref().unwrap_or("/"),
        width = args.window_width,
        height = args.window_height,
        "starting Procura"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Procura")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                args.window_width,
                args.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
