//! Browser signals the animations depend on: window width and
//! "element became visible".

use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, Window};
use yew::prelude::*;

/// Read access to the layout viewport.
pub trait Viewport {
    type Subscription;

    /// Current width in logical pixels, `None` when it can't be read.
    fn width(&self) -> Option<f64>;

    /// Calls `on_resize` with the new width after every resize. Dropping the
    /// returned value unsubscribes.
    fn subscribe(&self, on_resize: Callback<f64>) -> Self::Subscription;
}

/// Reports the current width once, then on every change.
pub fn watch_width<V: Viewport>(viewport: &V, on_width: Callback<f64>) -> V::Subscription {
    if let Some(width) = viewport.width() {
        on_width.emit(width);
    }
    viewport.subscribe(on_width)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserViewport;

fn current_width(window: &Window) -> Option<f64> {
    window.inner_width().ok().and_then(|w| w.as_f64())
}

impl Viewport for BrowserViewport {
    type Subscription = ResizeListener;

    fn width(&self) -> Option<f64> {
        web_sys::window().and_then(|w| current_width(&w))
    }

    fn subscribe(&self, on_resize: Callback<f64>) -> ResizeListener {
        let Some(window) = web_sys::window() else {
            warn!("no window, resize events will not be observed");
            return ResizeListener { inner: None };
        };

        let window_clone = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Some(width) = current_width(&window_clone) {
                on_resize.emit(width);
            }
        }) as Box<dyn FnMut()>);

        if window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("failed to register resize listener");
            return ResizeListener { inner: None };
        }

        ResizeListener {
            inner: Some((window, callback)),
        }
    }
}

/// Keeps a `resize` listener registered on the window until dropped.
pub struct ResizeListener {
    inner: Option<(Window, Closure<dyn FnMut()>)>,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some((window, callback)) = self.inner.take() {
            let _ = window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        }
    }
}

/// One-shot "has been visible" flag. Set by the first intersecting
/// observation and never cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    fired: bool,
}

impl InViewLatch {
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` only for the observation that trips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Calls `on_visible` the first time `element` intersects the viewport, then
/// stops observing. Dropping it disconnects the observer.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(element: &Element, on_visible: Callback<()>) -> Option<Self> {
        let latch = Rc::new(RefCell::new(InViewLatch::default()));
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if latch.borrow_mut().observe(intersecting) {
                    observer.disconnect();
                    on_visible.emit(());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` from the first time the referenced element scrolls into view.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(
                        &element,
                        Callback::from(move |_| {
                            debug!("element entered viewport");
                            in_view.set(true);
                        }),
                    )
                });
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic viewport driven by the test.
    #[derive(Default)]
    pub(crate) struct FakeViewport {
        width: RefCell<Option<f64>>,
        listeners: Rc<RefCell<Vec<Callback<f64>>>>,
    }

    pub(crate) struct FakeSubscription {
        listeners: Rc<RefCell<Vec<Callback<f64>>>>,
        callback: Callback<f64>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.listeners.borrow_mut().retain(|cb| cb != &self.callback);
        }
    }

    impl FakeViewport {
        pub(crate) fn with_width(width: f64) -> Self {
            let viewport = Self::default();
            *viewport.width.borrow_mut() = Some(width);
            viewport
        }

        pub(crate) fn resize(&self, width: f64) {
            *self.width.borrow_mut() = Some(width);
            let listeners = self.listeners.borrow().clone();
            for listener in listeners {
                listener.emit(width);
            }
        }

        pub(crate) fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl Viewport for FakeViewport {
        type Subscription = FakeSubscription;

        fn width(&self) -> Option<f64> {
            *self.width.borrow()
        }

        fn subscribe(&self, on_resize: Callback<f64>) -> FakeSubscription {
            self.listeners.borrow_mut().push(on_resize.clone());
            FakeSubscription {
                listeners: self.listeners.clone(),
                callback: on_resize,
            }
        }
    }

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = InViewLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.has_fired());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }

    #[test]
    fn watch_width_reports_initial_then_resizes() {
        let viewport = FakeViewport::with_width(1024.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            watch_width(&viewport, Callback::from(move |w| seen.borrow_mut().push(w)))
        };
        viewport.resize(500.0);
        viewport.resize(700.0);
        assert_eq!(*seen.borrow(), vec![1024.0, 500.0, 700.0]);

        drop(sub);
        assert_eq!(viewport.listener_count(), 0);
        viewport.resize(300.0);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn watch_width_skips_unknown_initial_width() {
        let viewport = FakeViewport::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            watch_width(&viewport, Callback::from(move |w| seen.borrow_mut().push(w)))
        };
        assert!(seen.borrow().is_empty());
        viewport.resize(320.0);
        assert_eq!(*seen.borrow(), vec![320.0]);
    }
}

#[cfg(test)]
pub(crate) use tests::FakeViewport;
