use dioxus::prelude::*;
use mapsketch_shared::session::{Event as SketchEvent, Outcome, Session};

fn dispatch_logged(session: &mut Signal<Session>, event: SketchEvent) {
    let outcome = session.write().dispatch(event);
    if outcome == Outcome::Dropped {
        tracing::debug!(action = event.name(), "Toolbar action had no effect");
    }
}

#[component]
pub fn Toolbar(mut session: Signal<Session>) -> Element {
    let nothing_to_clear = {
        let s = session.read();
        s.path().is_empty() && s.shapes().is_empty()
    };

    rsx! {
        div { class: "toolbar",
            button {
                class: "danger",
                disabled: nothing_to_clear,
                onclick: move |_| dispatch_logged(&mut session, SketchEvent::Clear),
                "Clear"
            }
            button {
                "aria-label": "Zoom in",
                onclick: move |_| dispatch_logged(&mut session, SketchEvent::ZoomIn),
                "+"
            }
            button {
                "aria-label": "Zoom out",
                onclick: move |_| dispatch_logged(&mut session, SketchEvent::ZoomOut),
                "−"
            }
            button {
                class: "secondary",
                onclick: move |_| dispatch_logged(&mut session, SketchEvent::ResetViewport),
                "Reset view"
            }
        }
    }
}
