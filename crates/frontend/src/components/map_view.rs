use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use mapsketch_shared::models::{Point, Shape, Viewport};
use mapsketch_shared::projection::{self, Surface};
use mapsketch_shared::session::{Event as SketchEvent, Scene, Session};
use mapsketch_shared::viewport::ZOOM_FACTOR;

use crate::coords;

const MAP_CONTAINER_ID: &str = "sketch-map-container";

/// Drag threshold in pixels — movement below this is treated as a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Touch drag threshold — larger than mouse because touch is less precise.
const TOUCH_DRAG_THRESHOLD: f64 = 8.0;

/// Wheel travel (in pixel-like units) that counts as one zoom step.
const WHEEL_STEP: f64 = 100.0;

/// Surface size used before the container has been laid out.
const FALLBACK_SURFACE: Surface = Surface {
    width: 960.0,
    height: 640.0,
};

struct Palette {
    graticule: &'static str,
    shape_fill: &'static str,
    shape_stroke: &'static str,
    path_stroke: &'static str,
    vertex: &'static str,
    first_vertex: &'static str,
    label: &'static str,
}

const PALETTE: Palette = Palette {
    graticule: "rgba(255,255,255,0.15)",
    shape_fill: "rgba(74,143,212,0.35)",
    shape_stroke: "#4a8fd4",
    path_stroke: "#c43030",
    vertex: "#c43030",
    first_vertex: "#5ab882",
    label: "#f0f0f0",
};

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Distance between two client-coordinate points (for touch threshold checks).
fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Zoom event for a pinch that has scaled by `scale` since the last step.
fn pinch_zoom_event(scale: f64) -> Option<SketchEvent> {
    if scale >= ZOOM_FACTOR {
        Some(SketchEvent::ZoomIn)
    } else if scale <= 1.0 / ZOOM_FACTOR {
        Some(SketchEvent::ZoomOut)
    } else {
        None
    }
}

fn current_surface() -> Surface {
    coords::container_surface(MAP_CONTAINER_ID).unwrap_or(FALLBACK_SURFACE)
}

/// Resolve a press in client coordinates and feed it to the session.
fn press_at(session: &mut Signal<Session>, client_x: f64, client_y: f64, hit_radius_px: f64) {
    let press = {
        let s = session.read();
        coords::press_at_client(
            client_x,
            client_y,
            MAP_CONTAINER_ID,
            &s.viewport(),
            s.path().points(),
            hit_radius_px,
        )
    };
    if let Some(press) = press {
        session.write().dispatch(press.to_event());
    }
}

// ---------------------------------------------------------------------------
// SVG builder
// ---------------------------------------------------------------------------

/// Build the full SVG content for a scene as a string.
fn build_svg_content(scene: &Scene, surface: Surface) -> String {
    let mut svg = String::with_capacity(4096);
    let vp = &scene.viewport;

    build_graticule(&mut svg, vp, surface);
    build_shapes(&mut svg, &scene.shapes, vp, surface);
    if let Some(line) = &scene.line {
        build_path_line(&mut svg, line.points(), vp, surface);
    }
    build_vertex_markers(&mut svg, scene.points.points(), vp, surface);

    svg
}

/// SVG `points` attribute for a list of geographic points.
fn svg_points(points: &[Point], vp: &Viewport, surface: Surface) -> String {
    points
        .iter()
        .map(|p| {
            let (x, y) = projection::point_to_px(vp, surface, *p);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_graticule(svg: &mut String, vp: &Viewport, surface: Surface) {
    for lat in projection::graticule_latitudes(vp) {
        let (_, y) = projection::point_to_px(vp, surface, Point::new(lat, vp.center_longitude));
        svg.push_str(&format!(
            r#"<line x1="0" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="{}" stroke-width="1"/>"#,
            surface.width, PALETTE.graticule
        ));
    }
    for lon in projection::graticule_longitudes(vp) {
        let (x, _) = projection::point_to_px(vp, surface, Point::new(vp.center_latitude, lon));
        svg.push_str(&format!(
            r#"<line x1="{x:.1}" y1="0" x2="{x:.1}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            surface.height, PALETTE.graticule
        ));
    }
}

/// Shapes are drawn in store order so later shapes end up on top.
fn build_shapes(svg: &mut String, shapes: &[Shape], vp: &Viewport, surface: Surface) {
    for shape in shapes {
        svg.push_str(&format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            svg_points(shape.points(), vp, surface),
            PALETTE.shape_fill,
            PALETTE.shape_stroke
        ));
    }
}

fn build_path_line(svg: &mut String, points: &[Point], vp: &Viewport, surface: Surface) {
    svg.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="3" stroke-linejoin="round"/>"#,
        svg_points(points, vp, surface),
        PALETTE.path_stroke
    ));
}

fn build_vertex_markers(svg: &mut String, points: &[Point], vp: &Viewport, surface: Surface) {
    for (i, p) in points.iter().enumerate() {
        let (cx, cy) = projection::point_to_px(vp, surface, *p);
        let fill = if i == 0 {
            PALETTE.first_vertex
        } else {
            PALETTE.vertex
        };
        svg.push_str(&format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="7" fill="{fill}" stroke="white" stroke-width="2"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" fill="{}" font-size="12" font-weight="bold">{}</text>"#,
            cx + 10.0,
            cy - 10.0,
            PALETTE.label,
            i + 1
        ));
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(mut session: Signal<Session>, hit_radius_px: f64) -> Element {
    // Drag state (mouse)
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start = use_signal(|| (0.0_f64, 0.0_f64));
    let mut drag_start_viewport = use_signal(Viewport::default);

    // Wheel travel not yet turned into a zoom step
    let mut wheel_accum = use_signal(|| 0.0_f64);

    // Touch state
    let mut touch_start_pos = use_signal(|| None::<(f64, f64)>);
    let mut touch_did_pan = use_signal(|| false);
    let mut touch_start_viewport = use_signal(Viewport::default);
    let mut is_pinching = use_signal(|| false);
    let mut pinch_ref_distance = use_signal(|| 0.0_f64);

    // Rebuilt whenever the session changes; the scene is re-read fresh each time.
    let svg_html = use_memo(move || {
        let scene = session.read().scene();
        let surface = current_surface();
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">{}</svg>"#,
            surface.width,
            surface.height,
            build_svg_content(&scene, surface)
        )
    });

    let container_class = if *is_dragging.read() && *did_drag.read() {
        "map-container dragging"
    } else {
        "map-container"
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let total = *wheel_accum.read() + wheel_delta_y(evt.data().delta());
                if total.abs() < WHEEL_STEP {
                    wheel_accum.set(total);
                    return;
                }
                wheel_accum.set(0.0);
                let event = if total < 0.0 { SketchEvent::ZoomIn } else { SketchEvent::ZoomOut };
                session.write().dispatch(event);
            },

            onmousedown: move |evt: Event<MouseData>| {
                // Only track drag/click for left mouse button
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                is_dragging.set(true);
                did_drag.set(false);
                drag_start.set((client.x, client.y));
                drag_start_viewport.set(session.read().viewport());
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !*is_dragging.read() {
                    return;
                }
                let client = evt.client_coordinates();
                let start = *drag_start.read();
                let dx = client.x - start.0;
                let dy = client.y - start.1;

                if !*did_drag.read() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                    did_drag.set(true);
                }
                if *did_drag.read() {
                    let next = projection::pan_by_px(&drag_start_viewport.read(), current_surface(), dx, dy);
                    session.write().dispatch(SketchEvent::ViewportChanged(next));
                }
            },

            onmouseup: move |evt: Event<MouseData>| {
                let was_dragging = *is_dragging.read();
                let was_drag = *did_drag.read();
                is_dragging.set(false);

                // A mouseup without drag movement = a click
                if was_dragging && !was_drag {
                    let client = evt.client_coordinates();
                    press_at(&mut session, client.x, client.y, hit_radius_px);
                }
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
            },

            // --- Touch event handlers ---

            ontouchstart: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = evt.data().touches();
                if touches.len() == 1 {
                    // Single finger: record start position for tap detection and panning
                    let t = &touches[0];
                    touch_start_pos.set(Some((t.client_coordinates().x, t.client_coordinates().y)));
                    touch_did_pan.set(false);
                    touch_start_viewport.set(session.read().viewport());
                } else if touches.len() >= 2 {
                    // Two fingers: start pinch-to-zoom
                    let t0 = &touches[0];
                    let t1 = &touches[1];
                    let p0 = (t0.client_coordinates().x, t0.client_coordinates().y);
                    let p1 = (t1.client_coordinates().x, t1.client_coordinates().y);
                    is_pinching.set(true);
                    pinch_ref_distance.set(point_distance(p0, p1));
                    // Cancel any tap tracking
                    touch_start_pos.set(None);
                    touch_did_pan.set(true);
                }
            },

            ontouchmove: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = evt.data().touches();

                if *is_pinching.read() && touches.len() >= 2 {
                    let t0 = &touches[0];
                    let t1 = &touches[1];
                    let p0 = (t0.client_coordinates().x, t0.client_coordinates().y);
                    let p1 = (t1.client_coordinates().x, t1.client_coordinates().y);
                    let d = point_distance(p0, p1);
                    let ref_d = *pinch_ref_distance.read();
                    if ref_d < 1.0 { return; }

                    // Zoom in whole steps; each step re-bases the reference distance
                    if let Some(event) = pinch_zoom_event(d / ref_d) {
                        session.write().dispatch(event);
                        pinch_ref_distance.set(d);
                    }
                } else if touches.len() == 1 {
                    // Single finger pan
                    let t = &touches[0];
                    let cur = (t.client_coordinates().x, t.client_coordinates().y);
                    if let Some(start) = *touch_start_pos.read() {
                        if !*touch_did_pan.read() && point_distance(start, cur) > TOUCH_DRAG_THRESHOLD {
                            touch_did_pan.set(true);
                        }
                        if *touch_did_pan.read() {
                            let next = projection::pan_by_px(
                                &touch_start_viewport.read(),
                                current_surface(),
                                cur.0 - start.0,
                                cur.1 - start.1,
                            );
                            session.write().dispatch(SketchEvent::ViewportChanged(next));
                        }
                    }
                }
            },

            ontouchend: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let remaining = evt.data().touches().len();

                if *is_pinching.read() {
                    // Wait for all fingers to lift before resetting pinch state
                    if remaining == 0 {
                        is_pinching.set(false);
                        touch_start_pos.set(None);
                    }
                    return;
                }

                // Single-finger tap: if no pan occurred and all fingers are up, treat as tap
                if remaining == 0 && !*touch_did_pan.read() {
                    let start = *touch_start_pos.read();
                    if let Some(start) = start {
                        press_at(&mut session, start.0, start.1, hit_radius_px);
                    }
                }

                if remaining == 0 {
                    touch_start_pos.set(None);
                }
            },

            ontouchcancel: move |_evt: Event<TouchData>| {
                // Reset all touch state
                touch_start_pos.set(None);
                touch_did_pan.set(false);
                is_pinching.set(false);
            },

            div {
                dangerous_inner_html: "{svg_html}",
                style: "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;",
            }
        }
    }
}
