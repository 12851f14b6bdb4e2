use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{format_period, Experience};

use super::section_frame::{Motif, SectionFrame};

#[component]
pub fn ExperiencePanel(entries: &'static [Experience]) -> impl IntoView {
    view! {
        <Title text="Experience" />
        <SectionFrame
            id="experience"
            title="Experience"
            subtitle="Where I've worked and what I shipped"
            motif=Motif::Dots
        >
            <div class="space-y-8 section-content">
                {entries.iter().map(|entry| view! { <ExperienceCard entry /> }).collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ExperienceCard(entry: &'static Experience) -> impl IntoView {
    let (expanded, set_expanded) = signal(true);
    view! {
        <article class="p-6 rounded-lg border border-muted/30 bg-brightBlack/20 hover:bg-brightBlack/30 transition-colors duration-200">
            <div class="flex flex-wrap items-start justify-between gap-2 mb-3">
                <div>
                    <h3 class="text-xl font-bold">{entry.role.clone()}</h3>
                    <p class="text-cyan font-medium">{entry.company.clone()}</p>
                </div>
                <div class="text-right text-sm text-muted">
                    <p>{format_period(entry.start, entry.end)}</p>
                    <p>{entry.location.clone()}</p>
                </div>
            </div>
            <button
                class="text-sm text-muted hover:text-cyan mb-2"
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                {move || if expanded.get() { "▾ Hide details" } else { "▸ Show details" }}
            </button>
            <Show when=move || expanded.get()>
                <ul class="list-disc ml-5 space-y-1 mb-4">
                    {entry.highlights.iter().map(|h| view! { <li>{h.clone()}</li> }).collect_view()}
                </ul>
            </Show>
            <div class="flex flex-wrap gap-2">
                {entry
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">{t.clone()}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
