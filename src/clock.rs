use std::any::Any;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[cfg(test)]
pub mod manual;

/// A scheduled timeout, interval or animation frame. Dropping the handle
/// cancels whatever it still has pending.
pub struct TimerHandle {
    _guard: Box<dyn Any>,
}

impl TimerHandle {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self { _guard: Box::new(guard) }
    }
}

/// Source of every deferred callback used by the animated components.
pub trait Clock {
    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> TimerHandle;
    /// `None` when the host cannot schedule frames at all.
    fn animation_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Option<TimerHandle>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

struct FrameRequest {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

impl Clock for BrowserClock {
    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::new(Timeout::new(millis, callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::new(Interval::new(millis, callback))
    }

    fn animation_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Option<TimerHandle> {
        let window = web_sys::window()?;
        let closure = Closure::once(move |timestamp: f64| callback(timestamp));
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;
        Some(TimerHandle::new(FrameRequest {
            id,
            _closure: closure,
        }))
    }
}
