use yew::prelude::*;

use crate::content::{self, PROFILE};

/// In-page anchor of a project card.
pub fn project_anchor(id: &str) -> String {
    format!("project-{}", id)
}

#[derive(Properties, PartialEq)]
pub struct RecruiterPageProps {
    pub on_exit: Callback<()>,
}

/// Plain, professional rendering of the portfolio. No rain, no scrambling.
#[function_component(RecruiterPage)]
pub fn recruiter_page(props: &RecruiterPageProps) -> Html {
    let on_exit = props.on_exit.reform(|_: MouseEvent| ());

    html! {
        <div class="professional" style="min-height: 100vh; background: #fff; color: #111827; font-family: system-ui, sans-serif;">
            <style>
                {r#"
                    .professional a { color: #2563eb; text-decoration: none; }
                    .professional a:hover { text-decoration: underline; }
                    .pro-section { padding: 3rem 0; border-bottom: 1px solid #e5e7eb; }
                    .pro-section h2 { font-size: 1.5rem; margin-bottom: 1.5rem; }
                    .pro-tag {
                        display: inline-block;
                        padding: 0.125rem 0.5rem;
                        margin: 0 0.25rem 0.25rem 0;
                        background: #eff6ff;
                        color: #1d4ed8;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                    }
                "#}
            </style>
            <header style="position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,0.9); border-bottom: 1px solid #e5e7eb;">
                <div style="max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; height: 3.5rem; display: flex; align-items: center; justify-content: space-between;">
                    <span style="font-size: 1.125rem; font-weight: 600;">{PROFILE.name}</span>
                    <nav style="display: flex; gap: 2rem; align-items: center; font-size: 0.875rem;">
                        <a href="#about">{"About"}</a>
                        <a href="#experience">{"Experience"}</a>
                        <a href="#education">{"Education"}</a>
                        <a href="#projects">{"Projects"}</a>
                        <a href="#contact">{"Contact"}</a>
                        <button onclick={on_exit} title="Back to menu"
                            style="padding: 0.375rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; background: none; cursor: pointer;">
                            {"Switch view"}
                        </button>
                    </nav>
                </div>
            </header>

            <div style="max-width: 76rem; margin: 0 auto; padding: 0 1.5rem; display: flex; gap: 2rem;">
            <main style="flex: 1; min-width: 0;">
                <section id="about" class="pro-section">
                    <h1 style="font-size: 2.25rem; margin-bottom: 0.5rem;">{PROFILE.name}</h1>
                    <p style="font-size: 1.25rem; color: #2563eb; margin-bottom: 0.75rem;">{PROFILE.title}</p>
                    <p style="color: #4b5563; margin-bottom: 1rem;">{format!("{} · {}", PROFILE.location, PROFILE.education)}</p>
                    <p style="max-width: 42rem; line-height: 1.6;">{PROFILE.short_bio}</p>
                </section>

                <section id="experience" class="pro-section">
                    <h2>{"Experience"}</h2>
                    {
                        content::EXPERIENCES.iter().map(|job| html! {
                            <article key={job.id} style="margin-bottom: 2rem;">
                                <h3 style="font-weight: 600;">{job.title}</h3>
                                <p style="color: #2563eb;">{job.company}</p>
                                <p style="color: #6b7280; font-size: 0.875rem;">
                                    {format!("{} - {}", job.start, job.end)}
                                    { job.location.map(|l| format!(" · {}", l)).unwrap_or_default() }
                                </p>
                                {
                                    if let Some(team) = job.team {
                                        html! { <p style="font-size: 0.875rem; color: #4b5563;">{team}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <ul style="margin: 0.5rem 0 0.5rem 1.25rem; line-height: 1.6;">
                                    { for job.bullets.iter().map(|b| html! { <li>{*b}</li> }) }
                                </ul>
                                <div>
                                    { for job.skills.iter().map(|s| html! { <span class="pro-tag">{*s}</span> }) }
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </section>

                <section id="education" class="pro-section">
                    <h2>{"Education"}</h2>
                    <h3 style="font-weight: 600;">{"Georgia Institute of Technology"}</h3>
                    <p>{"Bachelor's degree, Computer Science"}</p>
                    <p style="color: #6b7280; font-size: 0.875rem;">{"Aug 2021 - May 2025"}</p>
                </section>

                <section id="projects" class="pro-section">
                    <h2>{"Projects"}</h2>
                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem;">
                        {
                            content::PROJECTS.iter().map(|project| html! {
                                <article key={project.id} id={project_anchor(project.id)} style="padding: 1.25rem; border: 1px solid #e5e7eb; border-radius: 0.75rem;">
                                    <h3 style="font-weight: 600; margin-bottom: 0.25rem;">{project.title}</h3>
                                    <p style="color: #6b7280; font-size: 0.75rem;">{project.date.unwrap_or_default()}</p>
                                    <p style="margin: 0.5rem 0; font-size: 0.875rem; line-height: 1.5;">{project.description}</p>
                                    <div>
                                        { for project.technologies.iter().map(|t| html! { <span class="pro-tag">{*t}</span> }) }
                                    </div>
                                    <div style="display: flex; gap: 1rem; font-size: 0.875rem; margin-top: 0.5rem;">
                                        { for project.github_url.map(|url| html! { <a href={url} target="_blank" rel="noopener noreferrer">{"Code"}</a> }) }
                                        { for project.live_url.map(|url| html! { <a href={url} target="_blank" rel="noopener noreferrer">{"Live"}</a> }) }
                                    </div>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="contact" class="pro-section" style="border-bottom: none;">
                    <h2>{"Get in touch"}</h2>
                    <div style="display: flex; gap: 1.5rem; flex-wrap: wrap;">
                        <a href={format!("mailto:{}", PROFILE.email)}>{PROFILE.email}</a>
                        <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    </div>
                </section>
            </main>
            <aside class="side-nav" style="width: 12rem; flex-shrink: 0; padding-top: 3rem;">
                <nav style="position: sticky; top: 5rem;">
                    <h2 style="font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; color: #6b7280; margin-bottom: 0.75rem;">
                        {"Featured projects"}
                    </h2>
                    <ul style="display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.875rem;">
                        { for content::featured_projects().map(|project| html! {
                            <li key={project.id}>
                                <a href={format!("#{}", project_anchor(project.id))}>{project.title}</a>
                            </li>
                        }) }
                    </ul>
                </nav>
            </aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_links_land_on_rendered_cards() {
        let cards: Vec<String> = content::PROJECTS
            .iter()
            .map(|project| project_anchor(project.id))
            .collect();
        let links: Vec<String> = content::featured_projects()
            .map(|project| project_anchor(project.id))
            .collect();

        assert!(!links.is_empty());
        assert!(links.len() < cards.len());
        assert!(links.iter().all(|link| cards.contains(link)));
        assert_eq!(project_anchor("secure-usb"), "project-secure-usb");
    }
}
