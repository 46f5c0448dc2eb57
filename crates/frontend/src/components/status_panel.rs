use dioxus::prelude::*;
use mapsketch_shared::projection;
use mapsketch_shared::session::Session;

/// Hint shown under the counters, depending on how far the path has got.
fn drawing_hint(path_len: usize) -> &'static str {
    match path_len {
        0 => "Tap the map to start a shape.",
        1 => "Keep tapping to add points.",
        _ => "Tap a numbered point to close the shape there.",
    }
}

#[component]
pub fn StatusPanel(session: Signal<Session>) -> Element {
    let (path_len, shape_count, viewport) = {
        let s = session.read();
        (s.path().len(), s.shapes().len(), s.viewport())
    };
    let center = projection::format_coord(viewport.center());
    let span = format!(
        "{:.4}° × {:.4}°",
        viewport.latitude_span, viewport.longitude_span
    );
    let hint = drawing_hint(path_len);

    rsx! {
        div { class: "panel",
            h3 { "Sketch" }
            div { class: "status-row",
                span { class: "status-label", "Points" }
                span { "{path_len}" }
            }
            div { class: "status-row",
                span { class: "status-label", "Shapes" }
                span { "{shape_count}" }
            }
            p { class: "hint", "{hint}" }
        }
        div { class: "panel",
            h3 { "View" }
            div { class: "status-row",
                span { class: "status-label", "Center" }
                span { "{center}" }
            }
            div { class: "status-row",
                span { class: "status-label", "Span" }
                span { "{span}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_hint_progression() {
        assert!(drawing_hint(0).contains("start"));
        assert!(drawing_hint(1).contains("add points"));
        assert!(drawing_hint(5).contains("close"));
    }
}
