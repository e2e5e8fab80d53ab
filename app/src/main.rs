use tracing::Level;

mod app;
mod components;

fn main() {
    // dioxus::launch may already have installed a subscriber
    if dioxus_logger::init(Level::INFO).is_err() {
        tracing::debug!("Logger already initialized");
    }
    dioxus::launch(app::App);
}
