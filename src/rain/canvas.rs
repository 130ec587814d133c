use std::rc::Rc;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::clock::BrowserClock;
use crate::config;
use crate::rain::engine::RainEngine;
use crate::rain::field::{GlyphColor, RainSurface};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("rain canvas is not mounted")]
    NoCanvas,
    #[error("2d drawing context is unavailable")]
    NoContext,
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::NoContext)?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { canvas, context })
    }

    fn fill(&self, style: &str) {
        self.context.set_fill_style_str(style);
        self.context.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }
}

impl RainSurface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        // Resizing resets the context state, font included.
        self.context
            .set_font(&format!("{}px monospace", config::RAIN_CELL_PX));
    }

    fn fade(&mut self, alpha: f64) {
        self.fill(&format!("rgba(0, 0, 0, {})", alpha));
    }

    fn glyph(&mut self, glyph: char, x: f64, y: f64, color: GlyphColor) {
        self.context.set_fill_style_str(&color.css());
        let _ = self.context.fill_text(&glyph.to_string(), x, y);
    }

    fn paint_static(&mut self) {
        self.fill("#000000");
    }
}

fn viewport() -> (f64, f64) {
    window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(config::REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Falling-glyph background. Purely decorative: it ignores pointer input and
/// renders nothing at all when the canvas cannot be drawn on.
#[function_component(MatrixRain)]
pub fn matrix_rain() -> Html {
    let canvas_ref = use_node_ref();
    let reduced_motion = use_state(prefers_reduced_motion);

    {
        let reduced_motion = reduced_motion.clone();
        use_effect_with_deps(
            move |_| {
                let query = window()
                    .and_then(|w| w.match_media(config::REDUCED_MOTION_QUERY).ok().flatten());
                let listener = query.map(|query| {
                    let watched = query.clone();
                    let on_change = Closure::wrap(Box::new(move || {
                        reduced_motion.set(watched.matches());
                    }) as Box<dyn FnMut()>);
                    let _ = query.add_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    );
                    (query, on_change)
                });
                move || {
                    if let Some((query, on_change)) = listener {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |reduced: &bool| {
                let surface = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SurfaceError::NoCanvas)
                    .and_then(CanvasSurface::new);
                let running = match surface {
                    Ok(surface) => {
                        debug!("Starting rain (reduced motion: {})", reduced);
                        let engine = Rc::new(RainEngine::start(
                            Rc::new(BrowserClock),
                            Box::new(surface),
                            viewport(),
                            *reduced,
                            SmallRng::from_entropy(),
                        ));
                        let resized = engine.clone();
                        let on_resize = Closure::wrap(Box::new(move || {
                            let (width, height) = viewport();
                            resized.on_resize(width, height);
                        }) as Box<dyn FnMut()>);
                        if let Some(w) = window() {
                            let _ = w.add_event_listener_with_callback(
                                "resize",
                                on_resize.as_ref().unchecked_ref(),
                            );
                        }
                        Some((engine, on_resize))
                    }
                    Err(e) => {
                        warn!("Rain disabled: {}", e);
                        None
                    }
                };

                move || {
                    if let Some((engine, on_resize)) = running {
                        if let Some(w) = window() {
                            let _ = w.remove_event_listener_with_callback(
                                "resize",
                                on_resize.as_ref().unchecked_ref(),
                            );
                        }
                        drop(on_resize);
                        drop(engine);
                    }
                }
            },
            *reduced_motion,
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            aria-hidden="true"
            style="position: fixed; inset: 0; z-index: 0; pointer-events: none; opacity: 0.4;"
        />
    }
}
