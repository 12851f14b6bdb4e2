use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{format_period, Education};

use super::section_frame::SectionFrame;

#[component]
pub fn EducationPanel(entries: &'static [Education]) -> impl IntoView {
    view! {
        <Title text="Education" />
        <SectionFrame id="education" title="Education">
            <ol class="relative border-l border-muted/40 ml-4 space-y-10 section-content">
                {entries
                    .iter()
                    .map(|e| {
                        view! {
                            <li class="ml-6">
                                <span class="absolute -left-2 mt-1.5 h-4 w-4 rounded-full bg-cyan"></span>
                                <h3 class="text-xl font-bold">{e.degree.clone()}</h3>
                                <p class="text-cyan font-medium">{e.institution.clone()}</p>
                                <p class="text-sm text-muted mb-3">
                                    {format_period(e.start, e.end)} " · " {e.location.clone()}
                                </p>
                                <ul class="list-disc ml-5 space-y-1 text-sm">
                                    {e
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{h.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </SectionFrame>
    }
}
