use yew::prelude::*;

use crate::intro::gate::{use_intro_gate, IntroGateStatus};
use crate::intro::overlay::MatrixIntro;
use crate::intro::prompt::VisitorPrompt;
use crate::pages::recruiter::RecruiterPage;
use crate::pages::thematic::ThematicPage;
use crate::state::mode::{use_mode, PresentationMode};
use crate::state::visitor::{use_visitor, VisitorState};

/// The one tree mounted under the root at any moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Intro,
    VisitorPrompt,
    Recruiter,
    Thematic(PresentationMode),
}

/// The intro plays first; the visitor is only asked once it has finished.
/// Nothing past the gate mounts while the intro is still pending.
pub fn compose(visitor: &VisitorState, mode: PresentationMode, gate: IntroGateStatus) -> View {
    if gate != IntroGateStatus::Completed {
        View::Intro
    } else if !visitor.is_classified() {
        View::VisitorPrompt
    } else if visitor.is_recruiter() {
        View::Recruiter
    } else {
        View::Thematic(mode)
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub on_exit: Callback<()>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let gate = use_intro_gate();
    let visitor = use_visitor();
    let mode = use_mode();

    match compose(&visitor.state(), mode.mode, gate.status) {
        View::Intro => html! {
            <MatrixIntro
                stage={gate.stage}
                skip_visible={gate.skip_visible}
                on_skip={gate.skip.clone()}
            />
        },
        View::VisitorPrompt => html! {
            <VisitorPrompt on_select={visitor.select.clone()} />
        },
        View::Recruiter => html! {
            <RecruiterPage on_exit={props.on_exit.clone()} />
        },
        View::Thematic(current) => html! {
            <ThematicPage
                mode={current}
                on_toggle={mode.toggle.clone()}
                on_exit={props.on_exit.clone()}
            />
        },
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::clock::manual::ManualClock;
    use crate::config;
    use crate::intro::gate::IntroGate;
    use crate::session::{MemorySession, Session, SessionStore};
    use crate::state::mode::ModeState;
    use crate::state::visitor::VisitorCategory;

    /// One mounted page: the three state machines restored from a shared
    /// store, the way the providers build them on first render.
    struct Visit {
        clock: ManualClock,
        gate: IntroGate,
        visitor: VisitorState,
        mode: ModeState,
    }

    impl Visit {
        fn mount(store: &Rc<MemorySession>) -> Self {
            let clock = ManualClock::new();
            let gate = IntroGate::new(
                Rc::new(clock.clone()),
                Session::new(store.clone()),
                Rc::new(|| ()),
            );
            Self {
                clock,
                gate,
                visitor: VisitorState::restore(&**store),
                mode: ModeState::restore(&**store),
            }
        }

        fn view(&self) -> View {
            compose(&self.visitor, self.mode.mode, self.gate.status())
        }
    }

    #[test]
    fn nothing_mounts_past_an_unfinished_gate() {
        let visitors = [
            VisitorCategory::Recruiter,
            VisitorCategory::Other,
            VisitorCategory::Unset,
        ];
        let modes = [PresentationMode::Blue, PresentationMode::Red];
        let pending = [IntroGateStatus::NotStarted, IntroGateStatus::Playing];

        for visitor in visitors {
            for mode in modes {
                for gate in pending {
                    assert_eq!(compose(&VisitorState { category: visitor }, mode, gate), View::Intro);
                }
            }
        }
    }

    #[test]
    fn recruiters_ignore_the_presentation_mode() {
        let recruiter = VisitorState {
            category: VisitorCategory::Recruiter,
        };
        for mode in [PresentationMode::Blue, PresentationMode::Red] {
            assert_eq!(
                compose(&recruiter, mode, IntroGateStatus::Completed),
                View::Recruiter
            );
        }
    }

    #[test]
    fn fresh_session_skip_then_recruiter() {
        let store = Rc::new(MemorySession::default());
        let mut visit = Visit::mount(&store);
        visit.gate.start();
        assert_eq!(visit.gate.status(), IntroGateStatus::Playing);
        assert_eq!(visit.view(), View::Intro);

        visit.clock.advance(700);
        visit.gate.skip();
        assert_eq!(visit.gate.status(), IntroGateStatus::Completed);
        assert_eq!(store.get(config::INTRO_SEEN_KEY).as_deref(), Some("true"));
        assert_eq!(visit.view(), View::VisitorPrompt);

        visit.visitor.select(VisitorCategory::Recruiter, &*store);
        assert!(visit.visitor.is_recruiter());
        assert_eq!(visit.view(), View::Recruiter);
    }

    #[test]
    fn fresh_session_other_then_toggle_mode() {
        let store = Rc::new(MemorySession::default());
        let mut visit = Visit::mount(&store);
        visit.gate.start();
        visit.gate.skip();

        visit.visitor.select(VisitorCategory::Other, &*store);
        assert_eq!(visit.view(), View::Thematic(PresentationMode::Blue));

        visit.mode.toggle(&*store);
        assert_eq!(visit.view(), View::Thematic(PresentationMode::Red));
        assert_eq!(store.get(config::MODE_KEY).as_deref(), Some("red"));

        let reloaded = Visit::mount(&store);
        assert_eq!(reloaded.view(), View::Thematic(PresentationMode::Red));
    }

    #[test]
    fn returning_recruiter_sees_content_on_first_paint() {
        let store = Rc::new(MemorySession::default());
        store.set(config::INTRO_SEEN_KEY, "true");
        store.set(config::VISITOR_KEY, "recruiter");

        let visit = Visit::mount(&store);
        assert_eq!(visit.view(), View::Recruiter);

        visit.gate.start();
        assert_eq!(visit.clock.pending(), 0);
        assert_eq!(visit.view(), View::Recruiter);
    }

    #[test]
    fn reset_mid_session_starts_over() {
        let store = Rc::new(MemorySession::default());
        let mut visit = Visit::mount(&store);
        visit.gate.start();
        visit.clock.advance(u64::from(config::INTRO_COMPLETE_MS));
        visit.visitor.select(VisitorCategory::Other, &*store);
        visit.mode.toggle(&*store);
        assert_eq!(visit.view(), View::Thematic(PresentationMode::Red));

        Session::new(store.clone()).reset();
        drop(visit);

        let visit = Visit::mount(&store);
        assert_eq!(visit.gate.status(), IntroGateStatus::Playing);
        visit.gate.start();
        assert_eq!(visit.view(), View::Intro);

        visit.gate.skip();
        assert_eq!(visit.view(), View::VisitorPrompt);
        assert_eq!(visit.mode.mode, PresentationMode::Blue);
    }
}
