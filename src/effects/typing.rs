use std::cell::RefCell;
use std::rc::{Rc, Weak};

use yew::prelude::*;

use crate::clock::{BrowserClock, Clock, TimerHandle};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Idle,
    Typing,
    Done,
}

/// Solid while characters are still arriving, blinking otherwise.
pub fn caret_class(phase: TypingPhase) -> &'static str {
    match phase {
        TypingPhase::Typing => "caret",
        TypingPhase::Idle | TypingPhase::Done => "caret cursor-blink",
    }
}

struct Inner {
    chars: Vec<char>,
    revealed: usize,
    phase: TypingPhase,
    starter: Option<TimerHandle>,
    ticker: Option<TimerHandle>,
    on_complete: Option<Box<dyn FnOnce()>>,
    notify: Rc<dyn Fn()>,
}

pub struct Typewriter {
    inner: Rc<RefCell<Inner>>,
    clock: Rc<dyn Clock>,
    speed: u32,
    delay: u32,
}

impl Typewriter {
    pub fn new(
        clock: Rc<dyn Clock>,
        text: &str,
        speed: u32,
        delay: u32,
        on_complete: Option<Box<dyn FnOnce()>>,
        notify: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                chars: text.chars().collect(),
                revealed: 0,
                phase: TypingPhase::Idle,
                starter: None,
                ticker: None,
                on_complete,
                notify,
            })),
            clock,
            speed,
            delay,
        }
    }

    pub fn start(&self) {
        if self.inner.borrow().chars.is_empty() {
            finish(&self.inner);
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let clock = self.clock.clone();
        let speed = self.speed;
        let handle = self.clock.timeout(
            self.delay,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                let notify = {
                    let mut state = inner.borrow_mut();
                    state.starter = None;
                    state.phase = TypingPhase::Typing;
                    let weak = Rc::downgrade(&inner);
                    state.ticker = Some(clock.interval(speed, Box::new(move || reveal(&weak))));
                    state.notify.clone()
                };
                notify();
            }),
        );
        self.inner.borrow_mut().starter = Some(handle);
    }

    pub fn display_text(&self) -> String {
        let inner = self.inner.borrow();
        inner.chars[..inner.revealed].iter().collect()
    }

    pub fn phase(&self) -> TypingPhase {
        self.inner.borrow().phase
    }
}

fn reveal(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else { return };
    let done = {
        let mut state = inner.borrow_mut();
        if state.revealed < state.chars.len() {
            state.revealed += 1;
        }
        state.revealed == state.chars.len()
    };
    if done {
        finish(&inner);
    } else {
        let notify = inner.borrow().notify.clone();
        notify();
    }
}

fn finish(inner: &Rc<RefCell<Inner>>) {
    let (on_complete, notify) = {
        let mut state = inner.borrow_mut();
        state.phase = TypingPhase::Done;
        state.starter = None;
        state.ticker = None;
        (state.on_complete.take(), state.notify.clone())
    };
    if let Some(on_complete) = on_complete {
        on_complete();
    }
    notify();
}

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: AttrValue,
    #[prop_or(config::TYPING_SPEED_MS)]
    pub speed: u32,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(true)]
    pub show_cursor: bool,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let update = use_force_update();
    let typewriter = use_mut_ref(|| None::<Typewriter>);

    {
        let typewriter = typewriter.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |(text, speed, delay)| {
                let on_complete = on_complete
                    .map(|callback| Box::new(move || callback.emit(())) as Box<dyn FnOnce()>);
                let writer = Typewriter::new(
                    Rc::new(BrowserClock),
                    text,
                    *speed,
                    *delay,
                    on_complete,
                    Rc::new(move || update.force_update()),
                );
                writer.start();
                *typewriter.borrow_mut() = Some(writer);
                // Dropping the writer cancels its pending timers.
                move || {
                    typewriter.borrow_mut().take();
                }
            },
            (props.text.clone(), props.speed, props.delay),
        );
    }

    let (shown, phase) = match typewriter.borrow().as_ref() {
        Some(writer) => (writer.display_text(), writer.phase()),
        None => (String::new(), TypingPhase::Idle),
    };

    html! {
        <span class={props.class.clone()}>
            { shown }
            {
                if props.show_cursor {
                    html! { <span class={caret_class(phase)}></span> }
                } else {
                    html! {}
                }
            }
        </span>
    }
}
