//! LeadLens
//! A desktop lead-research tool built with Dioxus

use dioxus::desktop::{LogicalSize, WindowBuilder};
use ui::App;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting LeadLens");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_disable_context_menu(true)
                .with_window(
                    WindowBuilder::new()
                        .with_title("LeadLens")
                        .with_decorations(false)
                        .with_inner_size(LogicalSize::new(1100.0, 720.0))
                        .with_resizable(true),
                ),
        )
        .launch(App);
}
