//! Pointer event dispatch for rendered regions
//!
//! The host application owns the surface the SVG ends up on; when a
//! pointer event lands on a region's shape, it asks the router for that
//! region's target and dispatches the event through it. Each target is
//! bound to its region identifier when the router is built, so dispatch
//! never has to recover the identifier from the event itself.
//!
//! All callbacks are optional and fire-and-forget: dispatch never fails,
//! never blocks, and is a no-op when nothing is registered. For each
//! event the raw-event callback (if any) runs first, then the
//! identifier-based callback.

use std::collections::HashSet;

use crate::dataset::RegionTable;
use crate::renderer::DISTRICT_ID;

/// Kind of pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Click,
    MouseOver,
}

/// Raw pointer event payload, passed through untouched to raw-event
/// callbacks. Ephemeral; lives only for one dispatch.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Pointer position in the host surface's coordinate space
    pub x: f64,
    pub y: f64,
}

type IdCallback = Box<dyn Fn(&str)>;
type EventCallback = Box<dyn Fn(&PointerEvent)>;

/// The four optional interaction callbacks
#[derive(Default)]
pub struct MapCallbacks {
    on_click: Option<IdCallback>,
    on_click_event: Option<EventCallback>,
    on_mouse_over: Option<IdCallback>,
    on_mouse_over_event: Option<EventCallback>,
}

impl MapCallbacks {
    /// Create an empty callback set (dispatch is a no-op)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the click-by-identifier callback
    pub fn on_click(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Set the raw click event callback
    pub fn on_click_event(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_click_event = Some(Box::new(f));
        self
    }

    /// Set the mouse-over-by-identifier callback
    pub fn on_mouse_over(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_mouse_over = Some(Box::new(f));
        self
    }

    /// Set the raw mouse-over event callback
    pub fn on_mouse_over_event(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_mouse_over_event = Some(Box::new(f));
        self
    }
}

/// Routes pointer events on rendered shapes to the registered callbacks
pub struct EventRouter {
    callbacks: MapCallbacks,
    ids: HashSet<String>,
}

impl EventRouter {
    /// Build a router for the given table
    ///
    /// Every region identifier in the table resolves to a target, plus
    /// the federal district identifier, which is always interactable
    /// even though it is not a table entry.
    pub fn new(table: &RegionTable, callbacks: MapCallbacks) -> Self {
        let mut ids: HashSet<String> = table.iter().map(|r| r.id.clone()).collect();
        ids.insert(DISTRICT_ID.to_string());
        Self { callbacks, ids }
    }

    /// Get the dispatch target for one region
    ///
    /// Returns `None` for identifiers the rendered map does not carry;
    /// events on unknown identifiers are ignored silently.
    pub fn target(&self, id: &str) -> Option<RegionTarget<'_>> {
        self.ids.get(id).map(|bound| RegionTarget {
            id: bound.as_str(),
            callbacks: &self.callbacks,
        })
    }
}

/// A dispatch target bound to one region's identifier
pub struct RegionTarget<'a> {
    id: &'a str,
    callbacks: &'a MapCallbacks,
}

impl RegionTarget<'_> {
    /// The region identifier this target is bound to
    pub fn id(&self) -> &str {
        self.id
    }

    /// Dispatch one pointer event: raw-event callback first, then the
    /// identifier callback with the bound identifier
    pub fn dispatch(&self, event: &PointerEvent) {
        match event.kind {
            PointerKind::Click => {
                if let Some(f) = &self.callbacks.on_click_event {
                    f(event);
                }
                if let Some(f) = &self.callbacks.on_click {
                    f(self.id);
                }
            }
            PointerKind::MouseOver => {
                if let Some(f) = &self.callbacks.on_mouse_over_event {
                    f(event);
                }
                if let Some(f) = &self.callbacks.on_mouse_over {
                    f(self.id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn click_at(x: f64, y: f64) -> PointerEvent {
        PointerEvent {
            kind: PointerKind::Click,
            x,
            y,
        }
    }

    #[test]
    fn test_click_invokes_identifier_callback() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let log = clicked.clone();
        let callbacks = MapCallbacks::new().on_click(move |id| log.borrow_mut().push(id.to_string()));

        let router = EventRouter::new(&RegionTable::builtin(), callbacks);
        router
            .target("CA")
            .expect("CA should be a target")
            .dispatch(&click_at(100.0, 250.0));

        assert_eq!(*clicked.borrow(), vec!["CA".to_string()]);
    }

    #[test]
    fn test_raw_callback_fires_before_identifier_callback() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let raw_log = order.clone();
        let id_log = order.clone();
        let callbacks = MapCallbacks::new()
            .on_click_event(move |_| raw_log.borrow_mut().push("raw"))
            .on_click(move |_| id_log.borrow_mut().push("id"));

        let router = EventRouter::new(&RegionTable::builtin(), callbacks);
        router.target("TX").unwrap().dispatch(&click_at(0.0, 0.0));

        assert_eq!(*order.borrow(), vec!["raw", "id"]);
    }

    #[test]
    fn test_mouse_over_dispatch() {
        let hovered = Rc::new(RefCell::new(None));
        let log = hovered.clone();
        let callbacks =
            MapCallbacks::new().on_mouse_over(move |id| *log.borrow_mut() = Some(id.to_string()));

        let router = EventRouter::new(&RegionTable::builtin(), callbacks);
        let event = PointerEvent {
            kind: PointerKind::MouseOver,
            x: 10.0,
            y: 10.0,
        };
        router.target("NY").unwrap().dispatch(&event);

        assert_eq!(*hovered.borrow(), Some("NY".to_string()));
    }

    #[test]
    fn test_click_does_not_fire_mouse_over_callbacks() {
        let hovered = Rc::new(RefCell::new(false));
        let log = hovered.clone();
        let callbacks = MapCallbacks::new().on_mouse_over(move |_| *log.borrow_mut() = true);

        let router = EventRouter::new(&RegionTable::builtin(), callbacks);
        router.target("FL").unwrap().dispatch(&click_at(0.0, 0.0));

        assert!(!*hovered.borrow());
    }

    #[test]
    fn test_district_always_resolves() {
        let router = EventRouter::new(&RegionTable::builtin(), MapCallbacks::new());
        let target = router.target(DISTRICT_ID).expect("district should resolve");
        assert_eq!(target.id(), "DC");
    }

    #[test]
    fn test_unknown_identifier_yields_no_target() {
        let router = EventRouter::new(&RegionTable::builtin(), MapCallbacks::new());
        assert!(router.target("ZZ").is_none());
        assert!(router.target("").is_none());
    }

    #[test]
    fn test_dispatch_without_callbacks_is_noop() {
        let router = EventRouter::new(&RegionTable::builtin(), MapCallbacks::new());
        // Should not panic
        router.target("WA").unwrap().dispatch(&click_at(50.0, 50.0));
    }

    #[test]
    fn test_raw_event_passed_through_untouched() {
        let seen = Rc::new(RefCell::new(None));
        let log = seen.clone();
        let callbacks = MapCallbacks::new().on_click_event(move |e| *log.borrow_mut() = Some((e.x, e.y)));

        let router = EventRouter::new(&RegionTable::builtin(), callbacks);
        router.target("OR").unwrap().dispatch(&click_at(123.5, 456.25));

        assert_eq!(*seen.borrow(), Some((123.5, 456.25)));
    }
}
