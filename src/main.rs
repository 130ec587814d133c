use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod clock;
mod compose;
mod config;
mod content;
mod session;
mod state {
    pub mod mode;
    pub mod visitor;
}
mod effects {
    pub mod scramble;
    pub mod typing;
}
mod rain {
    pub mod canvas;
    pub mod engine;
    pub mod field;
}
mod intro {
    pub mod gate;
    pub mod overlay;
    pub mod prompt;
}
mod pages {
    pub mod recruiter;
    pub mod thematic;
}

use compose::Portfolio;
use session::Session;
use state::{mode::ModeProvider, visitor::VisitorProvider};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Home)]
fn home() -> Html {
    let session = use_context::<Session>().unwrap_or_else(Session::browser);
    // Bumping the epoch remounts every provider, so state is rebuilt from
    // the freshly cleared session instead of reloading the page.
    let epoch = use_state(|| 0u32);

    let on_exit = {
        let epoch = epoch.clone();
        Callback::from(move |_: ()| {
            session.reset();
            epoch.set(*epoch + 1);
        })
    };

    html! {
        <VisitorProvider key={epoch.to_string()}>
            <ModeProvider>
                <Portfolio {on_exit} />
            </ModeProvider>
        </VisitorProvider>
    }
}

#[function_component]
fn App() -> Html {
    let session = use_state(Session::browser);

    html! {
        <ContextProvider<Session> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Session>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
