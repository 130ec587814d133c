use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::session::{Session, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisitorCategory {
    Recruiter,
    Other,
    #[default]
    Unset,
}

impl VisitorCategory {
    /// Anything unexpected in storage reads as `Unset` so the prompt is shown again.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "recruiter" => VisitorCategory::Recruiter,
            "other" => VisitorCategory::Other,
            _ => VisitorCategory::Unset,
        }
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            VisitorCategory::Recruiter => Some("recruiter"),
            VisitorCategory::Other => Some("other"),
            VisitorCategory::Unset => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VisitorState {
    pub category: VisitorCategory,
}

impl VisitorState {
    pub fn restore(store: &dyn SessionStore) -> Self {
        let category = store
            .get(config::VISITOR_KEY)
            .map(|value| VisitorCategory::from_stored(&value))
            .unwrap_or_default();
        Self { category }
    }

    /// Writes through before returning so a reload sees the same choice.
    pub fn select(&mut self, category: VisitorCategory, store: &dyn SessionStore) {
        match category.as_stored() {
            Some(value) => store.set(config::VISITOR_KEY, value),
            None => store.remove(config::VISITOR_KEY),
        }
        self.category = category;
    }

    pub fn is_recruiter(&self) -> bool {
        self.category == VisitorCategory::Recruiter
    }

    pub fn is_classified(&self) -> bool {
        self.category != VisitorCategory::Unset
    }
}

#[derive(Clone, PartialEq)]
pub struct VisitorContext {
    pub category: VisitorCategory,
    pub select: Callback<VisitorCategory>,
}

impl VisitorContext {
    pub fn state(&self) -> VisitorState {
        VisitorState {
            category: self.category,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct VisitorProviderProps {
    pub children: Children,
}

#[function_component(VisitorProvider)]
pub fn visitor_provider(props: &VisitorProviderProps) -> Html {
    let session = use_context::<Session>().unwrap_or_else(Session::browser);
    // Restored while building the initial state, never in an effect, so the
    // first render already knows the visitor.
    let state = {
        let session = session.clone();
        use_state(move || VisitorState::restore(session.store()))
    };

    let select = {
        let state = state.clone();
        Callback::from(move |category: VisitorCategory| {
            let mut next = *state;
            next.select(category, session.store());
            info!("Visitor selected: {:?}", category);
            state.set(next);
        })
    };

    let context = VisitorContext {
        category: state.category,
        select,
    };

    html! {
        <ContextProvider<VisitorContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<VisitorContext>>
    }
}

#[hook]
pub fn use_visitor() -> VisitorContext {
    use_context::<VisitorContext>().unwrap_or_else(|| {
        warn!("use_visitor called outside VisitorProvider");
        VisitorContext {
            category: VisitorCategory::Unset,
            select: Callback::noop(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{BrokenSession, MemorySession};

    #[test]
    fn stored_recruiter_is_restored_synchronously() {
        let store = MemorySession::default();
        store.set(config::VISITOR_KEY, "recruiter");

        let state = VisitorState::restore(&store);

        assert!(state.is_recruiter());
        assert!(state.is_classified());
    }

    #[test]
    fn refused_storage_forgets_the_choice_on_remount() {
        let store = BrokenSession;
        let mut state = VisitorState::restore(&store);
        state.select(VisitorCategory::Recruiter, &store);
        assert!(state.is_recruiter());

        assert_eq!(VisitorState::restore(&store).category, VisitorCategory::Unset);
    }

    #[test]
    fn context_exposes_the_selected_category() {
        let context = VisitorContext {
            category: VisitorCategory::Other,
            select: Callback::noop(),
        };
        let state = context.state();
        assert!(state.is_classified());
        assert!(!state.is_recruiter());
    }

    #[test]
    fn missing_or_malformed_values_read_as_unset() {
        let store = MemorySession::default();
        assert_eq!(VisitorState::restore(&store).category, VisitorCategory::Unset);

        store.set(config::VISITOR_KEY, "hiring-manager");
        let state = VisitorState::restore(&store);
        assert_eq!(state.category, VisitorCategory::Unset);
        assert!(!state.is_classified());
    }

    #[test]
    fn selection_is_written_through_and_survives_reload() {
        let store = MemorySession::default();
        let mut state = VisitorState::restore(&store);

        state.select(VisitorCategory::Other, &store);
        assert_eq!(store.get(config::VISITOR_KEY).as_deref(), Some("other"));

        let reloaded = VisitorState::restore(&store);
        assert_eq!(reloaded.category, VisitorCategory::Other);
        assert!(!reloaded.is_recruiter());
    }

    #[test]
    fn unset_is_never_persisted() {
        let store = MemorySession::default();
        let mut state = VisitorState::default();
        state.select(VisitorCategory::Recruiter, &store);
        state.select(VisitorCategory::Unset, &store);
        assert_eq!(store.get(config::VISITOR_KEY), None);
    }
}
