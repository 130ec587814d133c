use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::effects::typing::TypingText;

#[derive(Properties, PartialEq)]
pub struct MatrixIntroProps {
    pub stage: usize,
    pub skip_visible: bool,
    pub on_skip: Callback<()>,
}

#[function_component(MatrixIntro)]
pub fn matrix_intro(props: &MatrixIntroProps) -> Html {
    // Any key skips, from the moment the overlay is up.
    {
        let on_skip = props.on_skip.clone();
        use_event_with_window("keydown", move |_: KeyboardEvent| on_skip.emit(()));
    }

    let line = props
        .stage
        .checked_sub(1)
        .and_then(|index| config::INTRO_STAGES.get(index))
        .map(|(_, text)| *text);

    let on_click = props.on_skip.reform(|_: MouseEvent| ());

    html! {
        <div class="matrix-intro" style="position: fixed; inset: 0; z-index: 9999; background: #000; display: flex; align-items: center; justify-content: center;">
            <div class="intro-line text-glow" style="color: var(--matrix-green); font-size: 1.5rem; text-align: center;">
                {
                    if let Some(text) = line {
                        html! {
                            // Keyed so each stage types from scratch.
                            <TypingText
                                key={props.stage}
                                text={text}
                                speed={config::INTRO_TYPING_SPEED_MS}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if props.skip_visible {
                    html! {
                        <button class="intro-skip" onclick={on_click}
                            style="position: absolute; bottom: 2rem; right: 2rem; background: none; border: none; color: var(--matrix-green-dim); font-family: inherit; cursor: pointer;">
                            {"[Press any key or click to skip]"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
