use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::session::{Session, SessionStore};

/// Which arrangement the themed tree shows: the "blue pill" work view or the
/// "red pill" personal view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Blue,
    Red,
}

impl PresentationMode {
    pub fn from_stored(value: &str) -> Self {
        match value {
            "red" => PresentationMode::Red,
            _ => PresentationMode::Blue,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            PresentationMode::Blue => "blue",
            PresentationMode::Red => "red",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PresentationMode::Blue => PresentationMode::Red,
            PresentationMode::Red => PresentationMode::Blue,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModeState {
    pub mode: PresentationMode,
}

impl ModeState {
    pub fn restore(store: &dyn SessionStore) -> Self {
        let mode = store
            .get(config::MODE_KEY)
            .map(|value| PresentationMode::from_stored(&value))
            .unwrap_or_default();
        Self { mode }
    }

    pub fn toggle(&mut self, store: &dyn SessionStore) {
        self.mode = self.mode.toggled();
        store.set(config::MODE_KEY, self.mode.as_stored());
    }
}

#[derive(Clone, PartialEq)]
pub struct ModeContext {
    pub mode: PresentationMode,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ModeProviderProps {
    pub children: Children,
}

#[function_component(ModeProvider)]
pub fn mode_provider(props: &ModeProviderProps) -> Html {
    let session = use_context::<Session>().unwrap_or_else(Session::browser);
    let state = {
        let session = session.clone();
        use_state(move || ModeState::restore(session.store()))
    };

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = *state;
            next.toggle(session.store());
            info!("Presentation mode toggled to {:?}", next.mode);
            state.set(next);
        })
    };

    let context = ModeContext {
        mode: state.mode,
        toggle,
    };

    html! {
        <ContextProvider<ModeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ModeContext>>
    }
}

#[hook]
pub fn use_mode() -> ModeContext {
    use_context::<ModeContext>().unwrap_or_else(|| {
        warn!("use_mode called outside ModeProvider");
        ModeContext {
            mode: PresentationMode::Blue,
            toggle: Callback::noop(),
        }
    })
}
