use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{self, PROFILE};
use crate::effects::scramble::use_text_scramble;
use crate::rain::canvas::MatrixRain;
use crate::state::mode::PresentationMode;

/// Colours and copy that differ between the two presentation modes.
#[derive(Clone, Copy, PartialEq)]
struct Theme {
    accent: &'static str,
    dim: &'static str,
    reality: &'static str,
}

fn theme(mode: PresentationMode) -> Theme {
    match mode {
        PresentationMode::Blue => Theme {
            accent: "var(--matrix-green)",
            dim: "var(--matrix-green-dim)",
            reality: "work",
        },
        PresentationMode::Red => Theme {
            accent: "var(--matrix-red)",
            dim: "var(--matrix-red-dim)",
            reality: "truth",
        },
    }
}

const SIDE_NAV: &[(&str, &str)] = &[
    ("#about", "about"),
    ("#experience", "work"),
    ("#projects", "built"),
    ("#contact", "contact"),
];

#[derive(Properties, PartialEq)]
pub struct ThematicPageProps {
    pub mode: PresentationMode,
    pub on_toggle: Callback<()>,
    pub on_exit: Callback<()>,
}

#[function_component(ThematicPage)]
pub fn thematic_page(props: &ThematicPageProps) -> Html {
    let theme = theme(props.mode);

    html! {
        <>
            <MatrixRain />
            <ThemedHeader mode={props.mode} on_toggle={props.on_toggle.clone()} on_exit={props.on_exit.clone()} />
            <div style="position: relative; z-index: 10; min-height: 100vh;">
                <div style="max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; display: flex;">
                    <aside class="side-nav" style="width: 9rem; flex-shrink: 0; padding-top: 6rem;">
                        <nav style="position: sticky; top: 6rem; display: flex; flex-direction: column; gap: 2rem;">
                            { for SIDE_NAV.iter().map(|(href, label)| html! {
                                    <a href={*href} style={format!("font-size: 1.25rem; color: {}; text-decoration: none;", theme.dim)}>
                                        {format!("> {}", label)}
                                    </a>
                                })
                            }
                        </nav>
                    </aside>
                    <main style="flex: 1; padding: 4rem 0 5rem 2rem; border-left: 1px solid var(--matrix-green-dark);">
                        <Hero />
                        {
                            match props.mode {
                                PresentationMode::Blue => html! { <BlueContent /> },
                                PresentationMode::Red => html! { <RedContent /> },
                            }
                        }
                    </main>
                </div>
                <Footer />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ThemedHeaderProps {
    mode: PresentationMode,
    on_toggle: Callback<()>,
    on_exit: Callback<()>,
}

#[function_component(ThemedHeader)]
fn themed_header(props: &ThemedHeaderProps) -> Html {
    let theme = theme(props.mode);
    let is_red = props.mode == PresentationMode::Red;
    let on_exit = props.on_exit.reform(|_: MouseEvent| ());
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());

    let label_style = |active: bool| {
        if active {
            format!("font-size: 0.75rem; color: {};", theme.accent)
        } else {
            "font-size: 0.75rem; color: var(--text-muted);".to_string()
        }
    };

    html! {
        <header style="position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: rgba(0,0,0,0.8); border-bottom: 1px solid var(--matrix-green-dark);">
            <div style="max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; height: 3rem; display: flex; align-items: center; justify-content: space-between;">
                <div style="display: flex; align-items: center; gap: 1rem;">
                    <button onclick={on_exit} title="Back to menu"
                        style={format!("background: none; border: none; font-family: inherit; font-size: 1rem; cursor: pointer; color: {};", theme.dim)}>
                        {"< EXIT"}
                    </button>
                    <span class="text-glow" style={format!("font-size: 0.875rem; font-weight: bold; color: {};", theme.accent)}>
                        {"> pa_"}
                    </span>
                </div>
                <div style="display: flex; align-items: center; gap: 0.75rem;">
                    <span style="font-size: 0.875rem; color: var(--text-muted);">
                        {"[SELECT_REALITY] "}
                        <span style={format!("color: {};", theme.accent)}>{theme.reality}</span>
                    </span>
                    <div class="pill-toggle" style="display: flex; align-items: center; gap: 0.5rem;">
                        <span style={label_style(!is_red)}>{"BLUE"}</span>
                        <button onclick={on_toggle}
                            role="switch"
                            aria-checked={is_red.to_string()}
                            aria-label={if is_red { "Switch to Work mode" } else { "Switch to About mode" }}
                            style={format!("width: 3rem; height: 1.5rem; padding: 0.125rem; background: #000; border: 1px solid {}; display: flex; justify-content: {}; cursor: pointer;", theme.accent, if is_red { "flex-end" } else { "flex-start" })}>
                            <span style={format!("display: block; width: 1.25rem; height: 1.25rem; background: {}; box-shadow: 0 0 10px {};", theme.accent, theme.accent)} />
                        </button>
                        <span style={label_style(is_red)}>{"RED"}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let name = use_text_scramble(PROFILE.name.to_lowercase(), true);
    let tagline = use_text_scramble(PROFILE.title.to_lowercase(), true);
    let scramble_name = name.scramble.reform(|_: MouseEvent| ());
    let scramble_tagline = tagline.scramble.reform(|_: MouseEvent| ());

    html! {
        <section id="about" style="padding: 2rem 0; display: flex; align-items: flex-start; gap: 1.5rem;">
            <div class="box-glow" onmouseenter={scramble_name.clone()}
                style="width: 6rem; height: 6rem; flex-shrink: 0; border: 1px solid var(--matrix-green); display: flex; align-items: center; justify-content: center; background: #000;">
                <span class="text-glow" style="font-size: 1.875rem; font-weight: bold; color: var(--matrix-green);">{"PA"}</span>
            </div>
            <div style="flex: 1;">
                <h1 class="text-glow" onmouseenter={scramble_name} aria-busy={name.is_scrambling.to_string()}
                    style="font-size: 1.875rem; color: var(--matrix-green); margin-bottom: 0.25rem; cursor: pointer;">
                    {name.display_text}
                    <span class="cursor-blink" style="margin-left: 0.25rem;">{"_"}</span>
                </h1>
                <p onmouseenter={scramble_tagline} style="color: var(--text-primary); margin-bottom: 0.75rem; cursor: pointer;">
                    <span style="color: var(--matrix-green);">{"> "}</span>
                    {tagline.display_text}
                </p>
                <p style="color: var(--text-secondary); font-size: 0.875rem; margin-bottom: 0.75rem;">
                    {format!("{} | {}", PROFILE.location, PROFILE.bio)}
                </p>
                <div style="display: flex; gap: 1rem; font-size: 0.875rem;">
                    <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"[linkedin]"}</a>
                    <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"[github]"}</a>
                    <a href={format!("mailto:{}", PROFILE.email)}>{"[email]"}</a>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    id: AttrValue,
    title: AttrValue,
    loading: AttrValue,
    loaded: AttrValue,
    children: Children,
}

/// Bordered terminal-style box shared by every blue-mode section.
#[function_component(Panel)]
fn panel(props: &PanelProps) -> Html {
    html! {
        <section id={props.id.clone()} style="padding: 1.5rem 0;">
            <h2 class="text-glow-subtle" style="font-size: 1.125rem; color: var(--matrix-green); margin-bottom: 1rem;">
                <span style="color: var(--matrix-green-dim);">{"/// "}</span>
                {props.title.clone()}
            </h2>
            <div style="border: 1px solid var(--matrix-green); padding: 1rem; background: #000;">
                <div style="color: var(--text-muted); font-size: 0.75rem; margin-bottom: 0.75rem;">
                    {format!("> {} [OK]", props.loading)}
                </div>
                { for props.children.iter() }
                <div style="color: var(--text-muted); font-size: 0.75rem; margin-top: 0.75rem; padding-top: 0.5rem; border-top: 1px solid var(--matrix-green-dark);">
                    {format!("> {}_", props.loaded)}
                </div>
            </div>
        </section>
    }
}

#[function_component(BlueContent)]
fn blue_content() -> Html {
    html! {
        <>
            <Panel id="experience" title="EXPERIENCE.log" loading="Loading work history..." loaded="End of work history">
                { for content::EXPERIENCES.iter().map(|job| html! {
                    <div key={job.id} style="margin-bottom: 1rem;">
                        <div style="color: var(--matrix-green); font-weight: bold;">{job.title}</div>
                        <div style="color: var(--text-primary); font-size: 0.875rem;">
                            {format!("@ {}", job.company)}
                            { job.team.map(|team| format!(" / {}", team)).unwrap_or_default() }
                        </div>
                        <div style="color: var(--text-muted); font-size: 0.75rem;">
                            {format!("[{} - {}]", job.start, job.end)}
                        </div>
                        { for job.description.map(|text| html! {
                            <p style="font-size: 0.875rem; color: var(--text-secondary);">{text}</p>
                        }) }
                        <ul style="margin-top: 0.25rem;">
                            { for job.bullets.iter().map(|b| html! {
                                <li style="font-size: 0.875rem; color: var(--text-secondary);">
                                    <span style="color: var(--matrix-green);">{"$ "}</span>{*b}
                                </li>
                            }) }
                        </ul>
                    </div>
                }) }
            </Panel>
            <Education />
            <Panel id="projects" title="PROJECTS.bin" loading="Mounting project archive..." loaded="Archive mounted">
                { for content::featured_projects().map(|project| html! {
                    <div key={project.id} style="margin-bottom: 1rem;">
                        <div style="color: var(--matrix-green); font-weight: bold;">{project.title}</div>
                        <p style="font-size: 0.875rem; color: var(--text-secondary);">{project.description}</p>
                        <div style="font-size: 0.75rem; color: var(--matrix-green-dim);">
                            {project.technologies.join(" | ")}
                        </div>
                        <div style="display: flex; gap: 1rem; font-size: 0.75rem;">
                            { for project.github_url.map(|url| html! { <a href={url} target="_blank" rel="noopener noreferrer">{"[source]"}</a> }) }
                            { for project.live_url.map(|url| html! { <a href={url} target="_blank" rel="noopener noreferrer">{"[live]"}</a> }) }
                        </div>
                    </div>
                }) }
            </Panel>
            <Panel id="skills" title="SKILLS.sys" loading="Scanning installed modules..." loaded="Scan complete">
                { for content::skills_by_category().into_iter().map(|(category, names)| html! {
                    <div style="margin-bottom: 0.5rem; font-size: 0.875rem;">
                        <span style="color: var(--matrix-green);">{format!("[{}] ", category.label())}</span>
                        <span style="color: var(--text-primary);">{names.join(", ")}</span>
                    </div>
                }) }
            </Panel>
            <Panel id="contact" title="CONTACT.sh" loading="Opening secure channel..." loaded="Channel open">
                <div style="display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.875rem;">
                    <a href={format!("mailto:{}", PROFILE.email)}>{format!("$ mail {}", PROFILE.email)}</a>
                    <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"$ open linkedin"}</a>
                    <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"$ open github"}</a>
                </div>
            </Panel>
        </>
    }
}

#[function_component(Education)]
fn education() -> Html {
    let school = use_text_scramble("Georgia Institute of Technology".to_string(), false);
    let on_hover = school.scramble.reform(|_: MouseEvent| ());

    html! {
        <Panel id="education" title="EDUCATION.dat" loading="Accessing academic records..." loaded="Education data loaded successfully">
            <div onmouseenter={on_hover} style="display: flex; gap: 1rem; cursor: pointer;">
                <div class="box-glow" style="width: 3rem; height: 3rem; flex-shrink: 0; border: 1px solid var(--matrix-green); display: flex; align-items: center; justify-content: center;">
                    <span style="color: var(--matrix-green); font-weight: bold;">{"GT"}</span>
                </div>
                <div>
                    <h3 style="color: var(--matrix-green); font-weight: bold;">{school.display_text}</h3>
                    <p style="font-size: 0.875rem;">
                        <span style="color: var(--matrix-green);">{"[DEGREE] "}</span>
                        {"Bachelor's degree, Computer Science"}
                    </p>
                    <p style="font-size: 0.875rem; color: var(--text-secondary);">
                        <span style="color: var(--matrix-green);">{"[DATE] "}</span>
                        {"Aug 2021 - May 2025"}
                    </p>
                </div>
            </div>
        </Panel>
    }
}

#[function_component(RedContent)]
fn red_content() -> Html {
    html! {
        <div style="padding: 1.5rem 0;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;">
                <h2 class="text-glow-red" style="font-size: 1.125rem; color: var(--matrix-red);">
                    <span style="color: var(--matrix-red-dim);">{"/// "}</span>
                    {"THE_TRUTH.exe"}
                </h2>
                <span style="font-size: 0.875rem; color: var(--matrix-red-dim);">{"[CLASSIFIED]"}</span>
            </div>
            <div style="border: 1px solid var(--matrix-red); padding: 1rem; background: #000;">
                <div style="color: var(--text-muted); font-size: 0.75rem; margin-bottom: 1rem;">
                    {"> Decrypting personal data... [OK]"}
                </div>
                { for (0..content::TIMELINE.len()).map(|index| html! {
                    <TimelineItem key={content::TIMELINE[index].id} index={index} />
                }) }
                <div style="color: var(--text-muted); font-size: 0.75rem; margin-top: 1rem; padding-top: 0.5rem; border-top: 1px solid var(--matrix-red-dim);">
                    {"> You have chosen to see how deep the rabbit hole goes_"}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    index: usize,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    let section = &content::TIMELINE[props.index];
    let open = use_state(|| section.open_by_default);
    let title = use_text_scramble(section.title.to_string(), false);

    let on_click = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let on_hover = title.scramble.reform(|_: MouseEvent| ());

    html! {
        <div style="border-left: 1px solid var(--matrix-red-dim); padding: 0.5rem 0 0.5rem 1rem;">
            <button onclick={on_click} onmouseenter={on_hover} aria-expanded={open.to_string()}
                style="width: 100%; text-align: left; background: none; border: none; font-family: inherit; cursor: pointer;">
                <div style="display: flex; align-items: center; gap: 0.5rem;">
                    <span style="color: var(--matrix-red-dim); font-size: 0.75rem; font-weight: bold;">{section.marker}</span>
                    <span style="color: var(--matrix-red);">{if *open { "v" } else { ">" }}</span>
                    <span style="color: var(--matrix-red); font-weight: bold;">{title.display_text}</span>
                </div>
                <p style="font-size: 0.875rem; color: var(--text-secondary); margin-left: 2rem;">{section.subtitle}</p>
            </button>
            {
                if *open {
                    html! {
                        <ul style="margin: 0.5rem 0 0 2rem;">
                            { for section.bullets.iter().map(|b| html! {
                                <li style="font-size: 0.875rem; color: var(--text-primary);">
                                    <span style="color: var(--matrix-red);">{"$ "}</span>{*b}
                                </li>
                            }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer style="padding: 2rem 1.5rem;">
            <p style="max-width: 48rem; margin: 0 auto; font-size: 0.75rem; color: var(--text-muted);">
                {format!("{} {}", year, PROFILE.name)}
            </p>
        </footer>
    }
}
