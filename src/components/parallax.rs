//! Scroll-linked parallax motion.
//!
//! A [`ParallaxController`] keeps a set of registered layers offset in
//! proportion to the viewport scroll position. Each layer carries its own
//! speed factor (smaller reads as farther away). Scroll events are coalesced:
//! however many arrive between animation frames, at most one style write per
//! layer happens per frame, using the latest observed position.
//!
//! The browser is reached only through the [`ScrollHost`] trait, so the whole
//! update loop can be driven deterministically in unit tests. Components bind
//! elements through the [`use_parallax`] hook, which finds the controller via
//! a [`ParallaxHandle`] in the Yew context tree.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};
use yew::prelude::*;

use crate::config;

/// Handle for a frame scheduled through [`ScrollHost::request_frame`].
pub type FrameHandle = i32;

/// The scroll position source and frame scheduler a controller runs against.
///
/// The production implementation is [`WindowHost`]. Tests substitute a fake
/// that fires scroll callbacks and frames on demand.
pub trait ScrollHost: 'static {
    /// Current scroll position, in pixels from the top of the viewport.
    fn scroll_position(&self) -> f64;

    /// Starts delivering scroll notifications to `on_scroll`.
    fn observe(&self, on_scroll: Box<dyn Fn()>);

    /// Stops delivering scroll notifications.
    fn unobserve(&self);

    /// Schedules `callback` to run once, just before the next repaint.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameHandle;

    /// Cancels a frame scheduled with [`request_frame`](Self::request_frame)
    /// that has not fired yet.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Anything the controller can move vertically.
pub trait Positionable: 'static {
    /// Applies a vertical offset in pixels.
    ///
    /// Returns `false` if the underlying target no longer exists. That is
    /// normal unmount ordering, not a fault; the controller skips the layer
    /// silently.
    fn set_offset(&self, px: i32) -> bool;
}

/// Identifies a registered layer so it can be unregistered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerId(u64);

struct Layer {
    id: u64,
    speed: f64,
    target: Box<dyn Positionable>,
}

struct Inner<H: ScrollHost> {
    host: H,
    layers: RefCell<Vec<Layer>>,
    /// Position recorded by the most recent scroll notification.
    latest: Cell<f64>,
    /// Frame scheduled but not yet fired, if any.
    pending: Cell<Option<FrameHandle>>,
    next_id: Cell<u64>,
    max_offset: Cell<Option<i32>>,
}

/// Applies scroll-proportional offsets to registered layers, at most once per
/// animation frame.
///
/// Scroll observation starts with the first registered layer and stops with
/// the last; a pending frame is cancelled when the last layer leaves, so
/// nothing runs after teardown.
pub struct ParallaxController<H: ScrollHost> {
    inner: Rc<Inner<H>>,
}

impl<H: ScrollHost> Clone for ParallaxController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: ScrollHost> ParallaxController<H> {
    pub fn new(host: H) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                layers: RefCell::new(Vec::new()),
                latest: Cell::new(0.0),
                pending: Cell::new(None),
                next_id: Cell::new(0),
                max_offset: Cell::new(None),
            }),
        }
    }

    /// Clamps every computed offset to `±limit` pixels.
    pub fn with_max_offset(self, limit: i32) -> Self {
        self.inner.max_offset.set(Some(limit));
        self
    }

    /// Binds `target` to the scroll position with the given speed factor.
    ///
    /// The layer is placed immediately from the current scroll position, so
    /// it is correct before any scroll event arrives (e.g. when the page
    /// loads at a restored scroll offset).
    pub fn register(&self, target: impl Positionable, speed: f64) -> LayerId {
        let inner = &self.inner;
        let id = inner.next_id.get();
        inner.next_id.set(id + 1);

        let position = inner.host.scroll_position();
        inner.latest.set(position);
        target.set_offset(offset_for(position, speed, inner.max_offset.get()));

        let first = inner.layers.borrow().is_empty();
        inner.layers.borrow_mut().push(Layer {
            id,
            speed,
            target: Box::new(target),
        });

        if first {
            let weak = Rc::downgrade(inner);
            inner.host.observe(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::on_scroll(&inner);
                }
            }));
            log::debug!("parallax: scroll observation started");
        }

        LayerId(id)
    }

    /// Releases a layer. No further offsets are applied to it, even from a
    /// frame that was already scheduled when this was called.
    pub fn unregister(&self, layer: LayerId) {
        let inner = &self.inner;
        inner.layers.borrow_mut().retain(|l| l.id != layer.0);

        if inner.layers.borrow().is_empty() {
            if let Some(handle) = inner.pending.take() {
                inner.host.cancel_frame(handle);
            }
            inner.host.unobserve();
            log::debug!("parallax: scroll observation stopped");
        }
    }
}

impl<H: ScrollHost> Drop for Inner<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        self.host.unobserve();
    }
}

impl<H: ScrollHost> Inner<H> {
    /// Records the newest scroll position and makes sure exactly one frame is
    /// scheduled. Bursts of scroll events between frames collapse into that
    /// single frame.
    fn on_scroll(inner: &Rc<Self>) {
        inner.latest.set(inner.host.scroll_position());
        if inner.pending.get().is_none() {
            let weak = Rc::downgrade(inner);
            let handle = inner.host.request_frame(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.apply();
                }
            }));
            inner.pending.set(Some(handle));
        }
    }

    fn apply(&self) {
        self.pending.set(None);
        let position = self.latest.get();
        let max_offset = self.max_offset.get();
        for layer in self.layers.borrow().iter() {
            layer
                .target
                .set_offset(offset_for(position, layer.speed, max_offset));
        }
    }
}

fn offset_for(position: f64, speed: f64, max_offset: Option<i32>) -> i32 {
    let px = (position * speed).round() as i32;
    match max_offset {
        Some(limit) => px.clamp(-limit, limit),
        None => px,
    }
}

/// [`ScrollHost`] backed by the browser window: `scrollY`, a passive
/// `scroll` listener and `requestAnimationFrame`.
pub struct WindowHost {
    scroll_listener: RefCell<Option<Closure<dyn Fn()>>>,
    frame_closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl WindowHost {
    pub fn new() -> Self {
        Self {
            scroll_listener: RefCell::new(None),
            frame_closure: RefCell::new(None),
        }
    }
}

impl Default for WindowHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollHost for WindowHost {
    fn scroll_position(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn observe(&self, on_scroll: Box<dyn Fn()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::wrap(on_scroll);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .is_ok()
        {
            *self.scroll_listener.borrow_mut() = Some(closure);
        }
    }

    fn unobserve(&self) {
        let listener = self.scroll_listener.borrow_mut().take();
        if let (Some(window), Some(closure)) = (web_sys::window(), listener) {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                closure.as_ref().unchecked_ref(),
            );
        }
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameHandle {
        let Some(window) = web_sys::window() else {
            return 0;
        };
        let closure = Closure::once(callback);
        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .unwrap_or(0);
        // Keep the closure alive until it fires or is cancelled. The
        // controller never has more than one frame pending, so one slot is
        // enough.
        *self.frame_closure.borrow_mut() = Some(closure);
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
        self.frame_closure.borrow_mut().take();
    }
}

/// A DOM element driven as a parallax layer.
pub struct ElementLayer {
    element: HtmlElement,
}

impl ElementLayer {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl Positionable for ElementLayer {
    fn set_offset(&self, px: i32) -> bool {
        // The element may already be detached if its component unmounted.
        if !self.element.is_connected() {
            return false;
        }
        self.element
            .style()
            .set_property("transform", &format!("translate3d(0, {}px, 0)", px))
            .is_ok()
    }
}

/// Clonable handle to the page's one [`ParallaxController`], shared through
/// the Yew context tree.
#[derive(Clone)]
pub struct ParallaxHandle {
    controller: ParallaxController<WindowHost>,
}

impl ParallaxHandle {
    pub fn new() -> Self {
        let mut controller = ParallaxController::new(WindowHost::new());
        if let Some(limit) = config::PARALLAX_MAX_OFFSET {
            controller = controller.with_max_offset(limit);
        }
        Self { controller }
    }

    pub fn register(&self, element: HtmlElement, speed: f64) -> LayerId {
        self.controller.register(ElementLayer::new(element), speed)
    }

    pub fn unregister(&self, layer: LayerId) {
        self.controller.unregister(layer);
    }
}

impl Default for ParallaxHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ParallaxHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller.inner, &other.controller.inner)
    }
}

/// Moves the element behind `node` at `speed` times the scroll distance for
/// as long as the calling component stays mounted.
///
/// Without a [`ParallaxHandle`] in context, or before the node renders, the
/// element simply does not move.
#[hook]
pub fn use_parallax(node: NodeRef, speed: f64) {
    let parallax = use_context::<ParallaxHandle>();
    use_effect_with_deps(
        move |(node, speed): &(NodeRef, f64)| {
            let speed = *speed;
            let registration = parallax.and_then(|parallax| {
                node.cast::<HtmlElement>().map(|element| {
                    let id = parallax.register(element, speed);
                    (parallax, id)
                })
            });
            move || {
                if let Some((parallax, id)) = registration {
                    parallax.unregister(id);
                }
            }
        },
        (node, speed),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct FakeHost(Rc<FakeHostState>);

    #[derive(Default)]
    struct FakeHostState {
        position: Cell<f64>,
        next_handle: Cell<i32>,
        on_scroll: RefCell<Option<Box<dyn Fn()>>>,
        frame: RefCell<Option<(FrameHandle, Box<dyn FnOnce()>)>>,
        frames_requested: Cell<u32>,
        frames_cancelled: Cell<u32>,
    }

    impl FakeHost {
        /// Moves the viewport and fires the scroll listener, if one is
        /// attached.
        fn scroll_to(&self, position: f64) {
            self.0.position.set(position);
            let callback = self.0.on_scroll.borrow();
            if let Some(callback) = callback.as_ref() {
                callback();
            }
        }

        /// Fires the pending frame, if any.
        fn run_frame(&self) {
            let frame = self.0.frame.borrow_mut().take();
            if let Some((_, callback)) = frame {
                callback();
            }
        }

        fn observing(&self) -> bool {
            self.0.on_scroll.borrow().is_some()
        }

        fn has_pending_frame(&self) -> bool {
            self.0.frame.borrow().is_some()
        }
    }

    impl ScrollHost for FakeHost {
        fn scroll_position(&self) -> f64 {
            self.0.position.get()
        }

        fn observe(&self, on_scroll: Box<dyn Fn()>) {
            *self.0.on_scroll.borrow_mut() = Some(on_scroll);
        }

        fn unobserve(&self) {
            self.0.on_scroll.borrow_mut().take();
        }

        fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameHandle {
            let handle = self.0.next_handle.get() + 1;
            self.0.next_handle.set(handle);
            self.0.frames_requested.set(self.0.frames_requested.get() + 1);
            *self.0.frame.borrow_mut() = Some((handle, callback));
            handle
        }

        fn cancel_frame(&self, handle: FrameHandle) {
            let mut slot = self.0.frame.borrow_mut();
            if matches!(*slot, Some((pending, _)) if pending == handle) {
                slot.take();
                self.0
                    .frames_cancelled
                    .set(self.0.frames_cancelled.get() + 1);
            }
        }
    }

    #[derive(Clone)]
    struct FakeLayer(Rc<FakeLayerState>);

    struct FakeLayerState {
        offset: Cell<i32>,
        applied: Cell<u32>,
        alive: Cell<bool>,
    }

    impl FakeLayer {
        fn new() -> Self {
            Self(Rc::new(FakeLayerState {
                offset: Cell::new(0),
                applied: Cell::new(0),
                alive: Cell::new(true),
            }))
        }

        fn offset(&self) -> i32 {
            self.0.offset.get()
        }

        fn applied(&self) -> u32 {
            self.0.applied.get()
        }

        fn destroy(&self) {
            self.0.alive.set(false);
        }
    }

    impl Positionable for FakeLayer {
        fn set_offset(&self, px: i32) -> bool {
            if !self.0.alive.get() {
                return false;
            }
            self.0.offset.set(px);
            self.0.applied.set(self.0.applied.get() + 1);
            true
        }
    }

    fn controller(host: &FakeHost) -> ParallaxController<FakeHost> {
        ParallaxController::new(host.clone())
    }

    #[test]
    fn offset_is_proportional_to_scroll() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(layer.clone(), 0.25);

        host.scroll_to(101.0);
        host.run_frame();

        assert_eq!(layer.offset(), 25, "round(101 * 0.25)");
    }

    #[test]
    fn offsets_round_to_nearest_pixel() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(layer.clone(), 0.1);

        host.scroll_to(15.0);
        host.run_frame();

        assert_eq!(layer.offset(), 2, "1.5 rounds away from zero");
    }

    #[test]
    fn scroll_bursts_coalesce_into_one_frame() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(layer.clone(), 0.5);
        let applied_after_register = layer.applied();

        host.scroll_to(10.0);
        host.scroll_to(20.0);
        host.scroll_to(30.0);

        assert_eq!(host.0.frames_requested.get(), 1);
        host.run_frame();

        assert_eq!(layer.applied(), applied_after_register + 1);
        assert_eq!(layer.offset(), 15, "latest position wins, round(30 * 0.5)");
    }

    #[test]
    fn layer_is_placed_immediately_on_register() {
        let host = FakeHost::default();
        // Page restored at a non-zero offset, before any listener exists.
        host.scroll_to(400.0);

        let layer = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(layer.clone(), 0.1);

        assert_eq!(layer.offset(), 40);
        assert_eq!(layer.applied(), 1);
        assert!(!host.has_pending_frame());
    }

    #[test]
    fn unregistered_layer_is_skipped_by_scheduled_frame() {
        let host = FakeHost::default();
        let kept = FakeLayer::new();
        let dropped = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(kept.clone(), 0.1);
        let dropped_id = parallax.register(dropped.clone(), 0.2);

        host.scroll_to(100.0);
        assert!(host.has_pending_frame());
        let dropped_applied = dropped.applied();
        parallax.unregister(dropped_id);
        host.run_frame();

        assert_eq!(kept.offset(), 10);
        assert_eq!(dropped.applied(), dropped_applied);
    }

    #[test]
    fn last_unregister_cancels_pending_frame_and_observation() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);
        let id = parallax.register(layer.clone(), 0.1);
        assert!(host.observing());

        host.scroll_to(50.0);
        parallax.unregister(id);

        assert!(!host.observing());
        assert!(!host.has_pending_frame());
        assert_eq!(host.0.frames_cancelled.get(), 1);
    }

    #[test]
    fn speed_factors_are_independent() {
        let host = FakeHost::default();
        let slow = FakeLayer::new();
        let fast = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(slow.clone(), 0.06);
        parallax.register(fast.clone(), 0.12);

        host.scroll_to(200.0);
        host.run_frame();

        assert_eq!(slow.offset(), 12);
        assert_eq!(fast.offset(), 24);
    }

    #[test]
    fn settled_positions_map_through_speed_factor() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(layer.clone(), 0.1);
        assert_eq!(layer.offset(), 0);

        let mut offsets = Vec::new();
        for position in [100.0, 250.0] {
            host.scroll_to(position);
            host.run_frame();
            offsets.push(layer.offset());
        }

        assert_eq!(offsets, vec![10, 25]);
    }

    #[test]
    fn offsets_clamp_to_configured_limit() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host).with_max_offset(40);
        parallax.register(layer.clone(), 0.5);

        host.scroll_to(200.0);
        host.run_frame();

        assert_eq!(layer.offset(), 40, "round(200 * 0.5) clamped to 40");
    }

    #[test]
    fn vanished_target_is_skipped_silently() {
        let host = FakeHost::default();
        let gone = FakeLayer::new();
        let live = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(gone.clone(), 0.1);
        parallax.register(live.clone(), 0.1);

        gone.destroy();
        host.scroll_to(100.0);
        host.run_frame();

        assert_eq!(gone.offset(), 0);
        assert_eq!(live.offset(), 10);
    }

    #[test]
    fn dropping_the_controller_tears_everything_down() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);
        parallax.register(layer.clone(), 0.1);
        host.scroll_to(50.0);
        assert!(host.has_pending_frame());

        drop(parallax);

        assert!(!host.observing());
        assert!(!host.has_pending_frame());
    }

    #[test]
    fn observation_restarts_after_reregistering() {
        let host = FakeHost::default();
        let layer = FakeLayer::new();
        let parallax = controller(&host);

        let id = parallax.register(layer.clone(), 0.1);
        parallax.unregister(id);
        assert!(!host.observing());

        parallax.register(layer.clone(), 0.1);
        assert!(host.observing());

        host.scroll_to(100.0);
        host.run_frame();
        assert_eq!(layer.offset(), 10);
    }
}
