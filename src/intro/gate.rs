use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::info;
use yew::prelude::*;

use crate::clock::{BrowserClock, Clock, TimerHandle};
use crate::config;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroGateStatus {
    /// Unmounted before the intro finished.
    NotStarted,
    Playing,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Skipped,
    TimedOut,
}

struct Inner {
    status: IntroGateStatus,
    stage: usize,
    skip_visible: bool,
    timers: Vec<TimerHandle>,
    session: Session,
    notify: Rc<dyn Fn()>,
}

/// Plays the scripted intro once per session. Whichever of the timeout or a
/// skip arrives first completes the gate; the other becomes a no-op.
pub struct IntroGate {
    inner: Rc<RefCell<Inner>>,
    clock: Rc<dyn Clock>,
}

impl IntroGate {
    /// Reads the seen flag right away so the very first render already knows
    /// whether to gate. An unseen intro is `Playing` from construction; the
    /// stage timers are only scheduled by `start`.
    pub fn new(clock: Rc<dyn Clock>, session: Session, notify: Rc<dyn Fn()>) -> Self {
        let seen = session.store().get(config::INTRO_SEEN_KEY).is_some();
        let status = if seen {
            IntroGateStatus::Completed
        } else {
            IntroGateStatus::Playing
        };
        Self {
            inner: Rc::new(RefCell::new(Inner {
                status,
                stage: 0,
                skip_visible: false,
                timers: Vec::new(),
                session,
                notify,
            })),
            clock,
        }
    }

    pub fn start(&self) {
        {
            let state = self.inner.borrow();
            if state.status != IntroGateStatus::Playing || !state.timers.is_empty() {
                return;
            }
        }

        let mut timers = Vec::with_capacity(config::INTRO_STAGES.len() + 2);
        for (index, (offset, _)) in config::INTRO_STAGES.iter().enumerate() {
            let weak = Rc::downgrade(&self.inner);
            timers.push(self.clock.timeout(
                *offset,
                Box::new(move || update(&weak, |state| state.stage = index + 1)),
            ));
        }

        let weak = Rc::downgrade(&self.inner);
        timers.push(self.clock.timeout(
            config::INTRO_SKIP_AFTER_MS,
            Box::new(move || update(&weak, |state| state.skip_visible = true)),
        ));

        let weak = Rc::downgrade(&self.inner);
        timers.push(self.clock.timeout(
            config::INTRO_COMPLETE_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    complete(&inner, Completion::TimedOut);
                }
            }),
        ));

        self.inner.borrow_mut().timers = timers;
    }

    pub fn skip(&self) {
        if self.status() == IntroGateStatus::Playing {
            complete(&self.inner, Completion::Skipped);
        }
    }

    /// Unmount before completion: drop every stage timer, persist nothing.
    /// The interrupted intro counts as never started.
    pub fn cancel(&self) {
        let mut state = self.inner.borrow_mut();
        state.timers.clear();
        if state.status == IntroGateStatus::Playing {
            state.status = IntroGateStatus::NotStarted;
        }
    }

    pub fn status(&self) -> IntroGateStatus {
        self.inner.borrow().status
    }

    /// 0 before the first line, then 1-based index into the stage script.
    pub fn stage(&self) -> usize {
        self.inner.borrow().stage
    }

    pub fn skip_visible(&self) -> bool {
        self.inner.borrow().skip_visible
    }
}

fn update(weak: &Weak<RefCell<Inner>>, change: impl FnOnce(&mut Inner)) {
    let Some(inner) = weak.upgrade() else { return };
    let notify = {
        let mut state = inner.borrow_mut();
        if state.status != IntroGateStatus::Playing {
            return;
        }
        change(&mut *state);
        state.notify.clone()
    };
    notify();
}

fn complete(inner: &Rc<RefCell<Inner>>, how: Completion) {
    let notify = {
        let mut state = inner.borrow_mut();
        if state.status == IntroGateStatus::Completed {
            return;
        }
        state.status = IntroGateStatus::Completed;
        state.session.store().set(config::INTRO_SEEN_KEY, "true");
        state.timers.clear();
        state.notify.clone()
    };
    info!("Intro completed ({:?})", how);
    notify();
}

#[derive(Clone, PartialEq)]
pub struct IntroHandle {
    pub status: IntroGateStatus,
    pub stage: usize,
    pub skip_visible: bool,
    pub skip: Callback<()>,
}

#[hook]
pub fn use_intro_gate() -> IntroHandle {
    let session = use_context::<Session>().unwrap_or_else(Session::browser);
    let update = use_force_update();
    let gate = use_mut_ref(move || {
        IntroGate::new(
            Rc::new(BrowserClock),
            session,
            Rc::new(move || update.force_update()),
        )
    });

    {
        let gate = gate.clone();
        use_effect_with_deps(
            move |_| {
                gate.borrow().start();
                move || gate.borrow().cancel()
            },
            (),
        );
    }

    let skip = {
        let gate = gate.clone();
        Callback::from(move |_: ()| gate.borrow().skip())
    };

    let current = gate.borrow();
    IntroHandle {
        status: current.status(),
        stage: current.stage(),
        skip_visible: current.skip_visible(),
        skip,
    }
}
