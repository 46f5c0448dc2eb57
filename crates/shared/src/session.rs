//! Whole-core annotation state machine.
//!
//! A [`Session`] owns the path, shape and viewport controllers and is the only
//! place events enter. Rejected events are logged and dropped here; the
//! controllers themselves just report errors.

use serde::Serialize;

use crate::config::SessionConfig;
use crate::error::AnnotationError;
use crate::models::{Point, Shape, Viewport};
use crate::path::{PathState, PointPathController};
use crate::shapes::ShapeStore;
use crate::viewport::ViewportController;

/// One interaction reported by the map surface or a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Tap(Point),
    /// An existing path vertex was pressed: close the path there.
    SelectPoint(usize),
    Clear,
    ZoomIn,
    ZoomOut,
    ViewportChanged(Viewport),
    ResetViewport,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Tap(_) => "tap",
            Event::SelectPoint(_) => "select_point",
            Event::Clear => "clear",
            Event::ZoomIn => "zoom_in",
            Event::ZoomOut => "zoom_out",
            Event::ViewportChanged(_) => "viewport_changed",
            Event::ResetViewport => "reset_viewport",
        }
    }
}

/// What the renderer has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Path or shapes changed; redraw everything from a fresh scene.
    Redraw { revision: u64 },
    /// Only the visible region changed.
    ViewportMoved,
    /// The event was refused and nothing changed.
    Dropped,
}

/// Declarative draw instructions for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub points: PathState,
    /// Present only when the path has at least two points.
    pub line: Option<PathState>,
    /// Draw order: later shapes on top.
    pub shapes: Vec<Shape>,
    pub viewport: Viewport,
    pub revision: u64,
}

/// Notified after every applied transition.
pub trait Observer {
    fn on_transition(&mut self, event: &Event, scene: &Scene);
}

impl<F> Observer for F
where
    F: FnMut(&Event, &Scene),
{
    fn on_transition(&mut self, event: &Event, scene: &Scene) {
        self(event, scene)
    }
}

/// Logs each transition through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_transition(&mut self, event: &Event, scene: &Scene) {
        tracing::debug!(
            event = event.name(),
            points = scene.points.len(),
            shapes = scene.shapes.len(),
            revision = scene.revision,
            "Annotation state updated"
        );
    }
}

pub struct Session {
    path: PointPathController,
    shapes: ShapeStore,
    viewport: ViewportController,
    revision: u64,
    observer: Option<Box<dyn Observer>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.path)
            .field("shapes", &self.shapes)
            .field("viewport", &self.viewport)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        Session {
            path: PointPathController::new(),
            shapes: ShapeStore::new(),
            viewport: ViewportController::new(config.initial_viewport),
            revision: 0,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn path(&self) -> &PathState {
        self.path.state()
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one event to completion.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        match self.apply(event) {
            Ok(outcome) => {
                if self.observer.is_some() {
                    let scene = self.scene();
                    if let Some(observer) = self.observer.as_mut() {
                        observer.on_transition(&event, &scene);
                    }
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(event = event.name(), error = %e, "Dropped annotation event");
                Outcome::Dropped
            }
        }
    }

    fn apply(&mut self, event: Event) -> Result<Outcome, AnnotationError> {
        match event {
            Event::Tap(point) => {
                self.path.handle_tap_at(point);
                Ok(self.bump())
            }
            Event::SelectPoint(index) => {
                let (_, shape) = self.path.handle_close_at_index(index)?;
                self.shapes.append(shape);
                Ok(self.bump())
            }
            Event::Clear => {
                self.path.handle_clear();
                self.shapes.clear();
                Ok(self.bump())
            }
            Event::ZoomIn => self.viewport.zoom_in().map(|_| Outcome::ViewportMoved),
            Event::ZoomOut => self.viewport.zoom_out().map(|_| Outcome::ViewportMoved),
            Event::ViewportChanged(next) => self
                .viewport
                .set_viewport(next)
                .map(|_| Outcome::ViewportMoved),
            Event::ResetViewport => {
                self.viewport.reset();
                Ok(Outcome::ViewportMoved)
            }
        }
    }

    fn bump(&mut self) -> Outcome {
        self.revision += 1;
        Outcome::Redraw {
            revision: self.revision,
        }
    }

    pub fn scene(&self) -> Scene {
        let points = self.path.state().clone();
        let line = points.has_renderable_line().then(|| points.clone());
        Scene {
            points,
            line,
            shapes: self.shapes.all().to_vec(),
            viewport: self.viewport.current(),
            revision: self.revision,
        }
    }
}
