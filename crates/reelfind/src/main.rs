use dioxus::prelude::*;
use reelfind::components::App as ReelfindApp;

const MAIN_CSS: Asset = asset!("/assets/reelfind.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window();
        let has_document = window.as_ref().and_then(|w| w.document()).is_some();

        if window.is_none() || !has_document {
            // No DOM to mount into.
            return;
        }
    }

    // Cross-platform logger (web console + desktop stdout)
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Reelfind")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 800.0))
                .with_min_inner_size(LogicalSize::new(480.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! is unreliable on desktop, inline the stylesheet there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/reelfind.css")} }
        }

        ReelfindApp {}
    }
}
