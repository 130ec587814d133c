use yew::prelude::*;

use crate::state::visitor::VisitorCategory;

struct VisitorOption {
    category: VisitorCategory,
    label: &'static str,
    description: &'static str,
}

const VISITOR_OPTIONS: &[VisitorOption] = &[
    VisitorOption {
        category: VisitorCategory::Recruiter,
        label: "Recruiter / Hiring Manager",
        description: "Looking for talent",
    },
    VisitorOption {
        category: VisitorCategory::Other,
        label: "Fellow Developer",
        description: "Just browsing",
    },
    VisitorOption {
        category: VisitorCategory::Other,
        label: "Curious Visitor",
        description: "Exploring the web",
    },
    VisitorOption {
        category: VisitorCategory::Other,
        label: "Someone Else",
        description: "None of the above",
    },
];

#[derive(Properties, PartialEq)]
pub struct VisitorPromptProps {
    pub on_select: Callback<VisitorCategory>,
}

/// Asks who is visiting. `on_select` fires at most once per mount.
#[function_component(VisitorPrompt)]
pub fn visitor_prompt(props: &VisitorPromptProps) -> Html {
    let chosen = use_mut_ref(|| false);

    html! {
        <div class="visitor-prompt" role="dialog" aria-labelledby="visitor-title"
            style="position: fixed; inset: 0; z-index: 9999; display: flex; align-items: center; justify-content: center; padding: 1rem; background: #000;">
            <div style="max-width: 42rem; width: 100%;">
                <div style="text-align: center; margin-bottom: 2.5rem;">
                    <h1 id="visitor-title" class="text-glow" style="color: var(--matrix-green); font-size: 2.5rem; margin-bottom: 1rem;">
                        {"Hey there!"}
                    </h1>
                    <p style="color: var(--text-secondary);">
                        {"Tell me a bit about yourself so I can show you the right stuff."}
                    </p>
                </div>
                <div class="visitor-options" role="group" aria-label="Visitor type options"
                    style="display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem;">
                    {
                        VISITOR_OPTIONS.iter().map(|option| {
                            let onclick = {
                                let chosen = chosen.clone();
                                let on_select = props.on_select.clone();
                                let category = option.category;
                                Callback::from(move |_: MouseEvent| {
                                    if chosen.replace(true) {
                                        return;
                                    }
                                    on_select.emit(category);
                                })
                            };
                            html! {
                                <button class="visitor-option box-glow" {onclick}
                                    aria-label={format!("{}: {}", option.label, option.description)}
                                    style="padding: 1.5rem; text-align: left; background: #000; border: 1px solid var(--matrix-green); color: var(--text-primary); font-family: inherit; cursor: pointer;">
                                    <h3 style="color: var(--matrix-green); margin-bottom: 0.25rem;">{option.label}</h3>
                                    <p style="color: var(--text-muted); font-size: 0.875rem;">{option.description}</p>
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <p style="text-align: center; color: var(--text-muted); font-size: 0.875rem; margin-top: 2.5rem;">
                    {"Don't worry, you can always change this later"}
                </p>
            </div>
        </div>
    }
}
