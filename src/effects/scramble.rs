use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

use crate::clock::{BrowserClock, Clock, TimerHandle};
use crate::config;

/// One intermediate frame. Characters before `step / 3` are locked to the
/// target, spaces always pass through, everything else is a random glyph.
pub fn scramble_frame<R: Rng + ?Sized>(
    target: &[char],
    step: usize,
    glyphs: &[char],
    rng: &mut R,
) -> String {
    target
        .iter()
        .enumerate()
        .map(|(index, &ch)| {
            if ch == ' ' {
                ' '
            } else if index * config::SCRAMBLE_STEPS_PER_CHAR < step {
                ch
            } else {
                glyphs.choose(rng).copied().unwrap_or(ch)
            }
        })
        .collect()
}

pub fn total_steps(len: usize) -> usize {
    len * config::SCRAMBLE_STEPS_PER_CHAR
}

struct Inner {
    text: String,
    display: String,
    scrambling: bool,
    step: usize,
    glyphs: Vec<char>,
    rng: SmallRng,
    ticker: Option<TimerHandle>,
    kickoff: Option<TimerHandle>,
    notify: Rc<dyn Fn()>,
}

/// Drives a single scrambling text. Timer callbacks hold only a weak
/// reference, so dropping the scrambler stops everything.
pub struct Scrambler {
    inner: Rc<RefCell<Inner>>,
    clock: Rc<dyn Clock>,
    scramble_on_mount: bool,
}

impl Scrambler {
    pub fn new(
        clock: Rc<dyn Clock>,
        text: &str,
        scramble_on_mount: bool,
        rng: SmallRng,
        notify: Rc<dyn Fn()>,
    ) -> Self {
        let display = if scramble_on_mount {
            String::new()
        } else {
            text.to_string()
        };
        Self {
            inner: Rc::new(RefCell::new(Inner {
                text: text.to_string(),
                display,
                scrambling: false,
                step: 0,
                glyphs: config::SCRAMBLE_GLYPHS.chars().collect(),
                rng,
                ticker: None,
                kickoff: None,
                notify,
            })),
            clock,
            scramble_on_mount,
        }
    }

    pub fn mount(&self) {
        if !self.scramble_on_mount {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let clock = self.clock.clone();
        let handle = self.clock.timeout(
            config::SCRAMBLE_MOUNT_DELAY_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().kickoff = None;
                    start(&inner, &clock);
                }
            }),
        );
        self.inner.borrow_mut().kickoff = Some(handle);
    }

    /// Restarts from scratch if a run is already in flight.
    pub fn scramble(&self) {
        start(&self.inner, &self.clock);
    }

    /// Only takes effect on the display when idle; a running scramble keeps
    /// resolving towards the text it was started with.
    pub fn set_text(&self, text: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.text == text {
            return;
        }
        inner.text = text.to_string();
        if !inner.scrambling && inner.kickoff.is_none() {
            inner.display = inner.text.clone();
        }
    }

    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.ticker = None;
        inner.kickoff = None;
        inner.scrambling = false;
    }

    pub fn display_text(&self) -> String {
        self.inner.borrow().display.clone()
    }

    pub fn is_scrambling(&self) -> bool {
        self.inner.borrow().scrambling
    }
}

fn start(inner: &Rc<RefCell<Inner>>, clock: &Rc<dyn Clock>) {
    let notify = {
        let mut state = inner.borrow_mut();
        // Cancel the previous run before anything else.
        state.ticker = None;
        state.kickoff = None;

        let target: Vec<char> = state.text.chars().collect();
        if target.is_empty() {
            state.display.clear();
            state.scrambling = false;
        } else {
            state.scrambling = true;
            state.step = 0;
            let total = total_steps(target.len());
            let weak = Rc::downgrade(inner);
            let handle = clock.interval(
                config::SCRAMBLE_STEP_MS,
                Box::new(move || tick(&weak, &target, total)),
            );
            state.ticker = Some(handle);
        }
        state.notify.clone()
    };
    notify();
}

fn tick(weak: &Weak<RefCell<Inner>>, target: &[char], total: usize) {
    let Some(inner) = weak.upgrade() else { return };
    let notify = {
        let mut guard = inner.borrow_mut();
        let state = &mut *guard;
        let frame = scramble_frame(target, state.step, &state.glyphs, &mut state.rng);
        state.step += 1;
        if state.step >= total {
            state.display = target.iter().collect();
            state.scrambling = false;
            state.ticker = None;
        } else {
            state.display = frame;
        }
        state.notify.clone()
    };
    notify();
}

pub struct TextScramble {
    pub display_text: String,
    pub is_scrambling: bool,
    pub scramble: Callback<()>,
}

#[hook]
pub fn use_text_scramble(text: String, scramble_on_mount: bool) -> TextScramble {
    let update = use_force_update();
    let scrambler = {
        let text = text.clone();
        use_mut_ref(move || {
            Scrambler::new(
                Rc::new(BrowserClock),
                &text,
                scramble_on_mount,
                SmallRng::from_entropy(),
                Rc::new(move || update.force_update()),
            )
        })
    };

    {
        let scrambler = scrambler.clone();
        use_effect_with_deps(
            move |text: &String| {
                scrambler.borrow().set_text(text);
                || ()
            },
            text,
        );
    }

    {
        let scrambler = scrambler.clone();
        use_effect_with_deps(
            move |_| {
                scrambler.borrow().mount();
                move || scrambler.borrow().cancel()
            },
            (),
        );
    }

    let scramble = {
        let scrambler = scrambler.clone();
        Callback::from(move |_: ()| scrambler.borrow().scramble())
    };

    let current = scrambler.borrow();
    TextScramble {
        display_text: current.display_text(),
        is_scrambling: current.is_scrambling(),
        scramble,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::ManualClock;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn scrambler(clock: &ManualClock, text: &str, on_mount: bool) -> (Scrambler, Rc<Cell<usize>>) {
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let scrambler = Scrambler::new(
            Rc::new(clock.clone()),
            text,
            on_mount,
            SmallRng::seed_from_u64(7),
            Rc::new(move || counter.set(counter.get() + 1)),
        );
        (scrambler, renders)
    }

    fn step_ms() -> u64 {
        u64::from(config::SCRAMBLE_STEP_MS)
    }

    #[test]
    fn frame_locks_prefix_and_keeps_spaces() {
        let target: Vec<char> = "neo anderson".chars().collect();
        let glyphs: Vec<char> = config::SCRAMBLE_GLYPHS.chars().collect();
        let mut rng = SmallRng::seed_from_u64(1);

        let frame: Vec<char> = scramble_frame(&target, 7, &glyphs, &mut rng).chars().collect();

        assert_eq!(frame.len(), target.len());
        // 7 / 3 rounds up to three locked positions.
        assert_eq!(&frame[..3], &target[..3]);
        assert_eq!(frame[3], ' ');
    }

    #[test]
    fn converges_exactly_after_three_steps_per_char() {
        let clock = ManualClock::new();
        let (scrambler, _) = scrambler(&clock, "ab", false);

        scrambler.scramble();
        assert!(scrambler.is_scrambling());

        clock.advance(5 * step_ms());
        assert!(scrambler.is_scrambling());

        clock.advance(step_ms());
        assert!(!scrambler.is_scrambling());
        assert_eq!(scrambler.display_text(), "ab");
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn restart_converges_once_and_leaves_no_timer() {
        let clock = ManualClock::new();
        let text = "follow the white rabbit";
        let (scrambler, renders) = scrambler(&clock, text, false);

        scrambler.scramble();
        clock.advance(4 * step_ms());
        scrambler.scramble();
        clock.advance(total_steps(text.chars().count()) as u64 * step_ms());

        assert_eq!(scrambler.display_text(), text);
        assert!(!scrambler.is_scrambling());
        assert_eq!(clock.pending(), 0);

        let settled = renders.get();
        clock.advance(10_000);
        assert_eq!(renders.get(), settled);
        assert_eq!(scrambler.display_text(), text);
    }

    #[test]
    fn scramble_on_mount_starts_empty_and_waits() {
        let clock = ManualClock::new();
        let (scrambler, _) = scrambler(&clock, "pa", true);
        assert_eq!(scrambler.display_text(), "");

        scrambler.mount();
        clock.advance(u64::from(config::SCRAMBLE_MOUNT_DELAY_MS) - 1);
        assert!(!scrambler.is_scrambling());

        clock.advance(1);
        assert!(scrambler.is_scrambling());

        clock.advance(total_steps(2) as u64 * step_ms());
        assert_eq!(scrambler.display_text(), "pa");
    }

    #[test]
    fn empty_text_converges_immediately() {
        let clock = ManualClock::new();
        let (scrambler, _) = scrambler(&clock, "", false);
        scrambler.scramble();
        assert!(!scrambler.is_scrambling());
        assert_eq!(scrambler.display_text(), "");
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_mid_run_cancels_the_interval() {
        let clock = ManualClock::new();
        let (scrambler, renders) = scrambler(&clock, "the matrix", false);
        scrambler.scramble();
        clock.advance(3 * step_ms());
        drop(scrambler);

        assert_eq!(clock.pending(), 0);
        let before = renders.get();
        clock.advance(10_000);
        assert_eq!(renders.get(), before);
    }

    #[test]
    fn text_change_during_run_keeps_the_captured_target() {
        let clock = ManualClock::new();
        let (scrambler, _) = scrambler(&clock, "blue", false);
        scrambler.scramble();
        clock.advance(2 * step_ms());
        scrambler.set_text("red");
        clock.advance(total_steps(4) as u64 * step_ms());
        assert_eq!(scrambler.display_text(), "blue");

        scrambler.scramble();
        clock.advance(total_steps(3) as u64 * step_ms());
        assert_eq!(scrambler.display_text(), "red");
    }

    proptest! {
        #[test]
        fn prop_converges_with_spaces_fixed(text in "[a-z ]{1,24}") {
            let clock = ManualClock::new();
            let (scrambler, _) = scrambler(&clock, &text, false);
            let target: Vec<char> = text.chars().collect();

            scrambler.scramble();
            for _ in 0..total_steps(target.len()) {
                clock.advance(step_ms());
                let shown: Vec<char> = scrambler.display_text().chars().collect();
                prop_assert_eq!(shown.len(), target.len());
                for (shown, expected) in shown.iter().zip(&target) {
                    if *expected == ' ' {
                        prop_assert_eq!(*shown, ' ');
                    }
                }
            }

            prop_assert_eq!(scrambler.display_text(), text);
            prop_assert!(!scrambler.is_scrambling());
            prop_assert_eq!(clock.pending(), 0);
        }
    }
}
