use dioxus::prelude::*;
use mapsketch_shared::config::SessionConfig;
use mapsketch_shared::session::{Session, TracingObserver};

use crate::components::map_view::MapView;
use crate::components::status_panel::StatusPanel;
use crate::components::toolbar::Toolbar;

const SESSION_CONFIG: &str = include_str!("../../assets/session.json");

/// Parse the bundled config, falling back to defaults if it is broken.
fn load_config(json: &str) -> SessionConfig {
    match SessionConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default session config");
            SessionConfig::default()
        }
    }
}

#[component]
pub fn Sketcher() -> Element {
    let config = use_hook(|| load_config(SESSION_CONFIG));
    let hit_radius_px = config.vertex_hit_radius_px;

    // The whole annotation state lives in one session; components only dispatch
    // events into it and re-read its scene.
    let session = use_signal(|| Session::new(&config).with_observer(TracingObserver));

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Map Sketcher" }
                Toolbar { session: session }
            }

            div { class: "sidebar",
                StatusPanel { session: session }
            }

            MapView {
                session: session,
                hit_radius_px: hit_radius_px,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = SessionConfig::from_json(SESSION_CONFIG).unwrap();
        assert!(config.initial_viewport.has_valid_spans());
    }

    #[test]
    fn test_broken_config_falls_back_to_default() {
        assert_eq!(load_config("{ nope"), SessionConfig::default());
    }
}
