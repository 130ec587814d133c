use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::SmallRng;

use crate::clock::{Clock, TimerHandle};
use crate::config;
use crate::rain::field::{RainField, RainSurface};

struct Inner {
    surface: Box<dyn RainSurface>,
    /// `None` while motion is reduced: the surface only ever holds a still frame.
    field: Option<RainField>,
    rng: SmallRng,
    last_drawn: Option<f64>,
    frame: Option<TimerHandle>,
    resize: Option<TimerHandle>,
}

/// Owns the animation loop for one mounted rain surface. Dropping the engine
/// cancels the pending frame and any debounced resize.
pub struct RainEngine {
    inner: Rc<RefCell<Inner>>,
    clock: Rc<dyn Clock>,
}

impl RainEngine {
    /// With `reduced_motion` set the surface gets one still frame and no
    /// frame callback is ever requested.
    pub fn start(
        clock: Rc<dyn Clock>,
        mut surface: Box<dyn RainSurface>,
        viewport: (f64, f64),
        reduced_motion: bool,
        mut rng: SmallRng,
    ) -> Self {
        let (width, height) = viewport;
        surface.resize(width, height);
        let field = if reduced_motion {
            surface.paint_static();
            None
        } else {
            Some(RainField::new(width, height, &mut rng))
        };

        let inner = Rc::new(RefCell::new(Inner {
            surface,
            field,
            rng,
            last_drawn: None,
            frame: None,
            resize: None,
        }));
        if !reduced_motion {
            request_frame(&inner, &clock);
        }
        Self { inner, clock }
    }

    /// Waits for the viewport to stay put before touching the surface.
    pub fn on_resize(&self, width: f64, height: f64) {
        let weak = Rc::downgrade(&self.inner);
        let handle = self.clock.timeout(
            config::RAIN_RESIZE_DEBOUNCE_MS,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                let mut guard = inner.borrow_mut();
                let state = &mut *guard;
                state.resize = None;
                state.surface.resize(width, height);
                match state.field.as_mut() {
                    Some(field) => field.resize(width, height, &mut state.rng),
                    // Resizing clears the canvas, so the still frame is repainted.
                    None => state.surface.paint_static(),
                }
            }),
        );
        // Replacing the handle cancels the previous, still-pending resize.
        self.inner.borrow_mut().resize = Some(handle);
    }

    #[cfg(test)]
    fn is_animating(&self) -> bool {
        self.inner.borrow().field.is_some()
    }

    #[cfg(test)]
    fn columns(&self) -> usize {
        self.inner
            .borrow()
            .field
            .as_ref()
            .map(|field| field.columns())
            .unwrap_or(0)
    }
}

fn request_frame(inner: &Rc<RefCell<Inner>>, clock: &Rc<dyn Clock>) {
    let weak = Rc::downgrade(inner);
    let next_clock = clock.clone();
    let handle = clock.animation_frame(Box::new(move |timestamp| {
        on_frame(&weak, &next_clock, timestamp)
    }));
    inner.borrow_mut().frame = handle;
}

fn on_frame(weak: &Weak<RefCell<Inner>>, clock: &Rc<dyn Clock>, timestamp: f64) {
    let Some(inner) = weak.upgrade() else { return };
    {
        let mut guard = inner.borrow_mut();
        let state = &mut *guard;
        let due = state
            .last_drawn
            .map_or(true, |last| timestamp - last >= config::RAIN_FRAME_MS);
        if due {
            if let Some(field) = state.field.as_mut() {
                field.step(state.surface.as_mut(), &mut state.rng);
            }
            state.last_drawn = Some(timestamp);
        }
    }
    // The next frame is only requested once this one has finished.
    request_frame(&inner, clock);
}
