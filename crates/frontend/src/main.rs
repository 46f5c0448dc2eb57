mod components;
mod coords;
mod pages;

use dioxus::prelude::*;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        pages::sketcher::Sketcher {}
    }
}

fn main() {
    // Debug level so every annotation transition shows up in the console.
    // `launch` installs the default logger only if none is set yet.
    dioxus::logger::init(tracing::Level::DEBUG).ok();
    launch(App);
}
