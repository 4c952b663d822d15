use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    let window = WindowBuilder::new()
        .with_title("Calculator PFA")
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
