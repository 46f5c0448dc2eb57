use mapsketch_shared::models::{Point, Viewport};
use mapsketch_shared::projection::{self, Surface};
use mapsketch_shared::session::Event;

/// What a press on the map surface lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Press {
    /// An existing vertex of the path being drawn.
    Vertex(usize),
    /// Empty map at this coordinate.
    Location(Point),
}

impl Press {
    pub fn to_event(self) -> Event {
        match self {
            Press::Vertex(index) => Event::SelectPoint(index),
            Press::Location(point) => Event::Tap(point),
        }
    }
}

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
pub fn client_to_container(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Pure function: resolve a container-relative press against the current path.
/// Vertices win over empty map so the user can close the path by pressing one.
pub fn resolve_press(
    container: (f64, f64),
    surface: Surface,
    viewport: &Viewport,
    path: &[Point],
    hit_radius_px: f64,
) -> Option<Press> {
    if let Some(index) =
        projection::find_nearest_vertex(path, viewport, surface, container, hit_radius_px)
    {
        return Some(Press::Vertex(index));
    }
    projection::px_to_point(viewport, surface, container.0, container.1).map(Press::Location)
}

/// Get the bounding client rect of an element by id.
pub fn container_rect(container_id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    Some(element.get_bounding_client_rect())
}

/// Rendered size of the map container, if it is laid out.
pub fn container_surface(container_id: &str) -> Option<Surface> {
    let rect = container_rect(container_id)?;
    let surface = Surface::new(rect.width(), rect.height());
    surface.is_drawable().then_some(surface)
}

/// Resolve a press given in client coordinates using the live container rect.
pub fn press_at_client(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    viewport: &Viewport,
    path: &[Point],
    hit_radius_px: f64,
) -> Option<Press> {
    let rect = container_rect(container_id)?;
    let surface = Surface::new(rect.width(), rect.height());
    let container = client_to_container(client_x, client_y, rect.left(), rect.top());
    resolve_press(container, surface, viewport, path, hit_radius_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Surface = Surface {
        width: 800.0,
        height: 400.0,
    };

    fn viewport() -> Viewport {
        Viewport::new(Point::new(0.0, 0.0), 10.0, 20.0)
    }

    #[test]
    fn test_client_to_container_origin() {
        let (x, y) = client_to_container(100.0, 200.0, 100.0, 200.0);
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_container_offset() {
        let (x, y) = client_to_container(450.0, 350.0, 320.0, 50.0);
        assert!((x - 130.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_press_on_empty_map_is_location() {
        let press = resolve_press((400.0, 200.0), SURFACE, &viewport(), &[], 24.0);
        match press {
            Some(Press::Location(p)) => {
                assert!(p.latitude.abs() < 1e-9);
                assert!(p.longitude.abs() < 1e-9);
            }
            other => panic!("expected a location, got {:?}", other),
        }
    }

    #[test]
    fn test_press_near_vertex_selects_it() {
        let path = vec![Point::new(0.0, 0.0), Point::new(2.5, 5.0)];
        let press = resolve_press((605.0, 98.0), SURFACE, &viewport(), &path, 24.0);
        assert_eq!(press, Some(Press::Vertex(1)));
    }

    #[test]
    fn test_press_outside_hit_radius_places_point() {
        let path = vec![Point::new(0.0, 0.0)];
        let press = resolve_press((460.0, 200.0), SURFACE, &viewport(), &path, 24.0);
        assert!(matches!(press, Some(Press::Location(_))));
    }

    #[test]
    fn test_press_on_collapsed_surface() {
        let press = resolve_press((1.0, 1.0), Surface::new(0.0, 0.0), &viewport(), &[], 24.0);
        assert_eq!(press, None);
    }

    #[test]
    fn test_press_maps_to_events() {
        assert_eq!(Press::Vertex(3).to_event(), Event::SelectPoint(3));
        let p = Point::new(1.0, 2.0);
        assert_eq!(Press::Location(p).to_event(), Event::Tap(p));
    }
}
