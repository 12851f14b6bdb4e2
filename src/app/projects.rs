use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Portfolio, Project, ProjectFilter};

use super::section_frame::{Motif, SectionFrame};

#[component]
pub fn ProjectsPanel(content: &'static Portfolio) -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);
    let filters = std::iter::once(ProjectFilter::All)
        .chain(content.project_tags().into_iter().map(ProjectFilter::Tag))
        .collect::<Vec<_>>();

    view! {
        <Title text="Projects" />
        <SectionFrame
            id="projects"
            title="Projects"
            subtitle="Things I've built in the open"
            motif=Motif::Grid
            glow=true
        >
            <div class="flex flex-wrap justify-center gap-2 mb-8 section-content">
                {filters
                    .into_iter()
                    .map(|f| {
                        let label = f.label().to_string();
                        let is_selected = {
                            let f = f.clone();
                            move || filter.with(|cur| *cur == f)
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_selected() {
                                        "px-4 py-1 rounded-full text-sm border border-cyan bg-cyan/20 text-cyan"
                                    } else {
                                        "px-4 py-1 rounded-full text-sm border border-muted/40 hover:border-cyan/40"
                                    }
                                }
                                on:click=move |_| set_filter(f.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 section-content">
                {move || {
                    filter
                        .with(|f| content.filtered_projects(f))
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <article
            class=move || {
                let lift = if hovered.get() { "-translate-y-1 border-cyan/50 shadow-xl" } else { "border-muted/30" };
                format!("flex flex-col p-6 rounded-lg border bg-brightBlack/20 transition-all duration-200 {lift}")
            }
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
        >
            <h3 class="text-xl font-bold mb-2">
                {project.title.clone()}
                {project.featured.then_some(view! { <span class="ml-2 text-xs text-yellow align-middle">"★ featured"</span> })}
            </h3>
            <p class="text-sm leading-relaxed mb-4 flex-grow">{project.description.clone()}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tags
                    .iter()
                    .map(|t| view! { <span class="rounded-md px-2 py-1 bg-brightBlack text-xs">{t.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="flex gap-4 text-sm">
                {project
                    .repo
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-cyan">
                                <i class="devicon-github-plain mr-1"></i>
                                "Source"
                            </a>
                        }
                    })}
                {project
                    .live
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-cyan">
                                <i class="extra-link mr-1"></i>
                                "Live"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
