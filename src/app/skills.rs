use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::SkillGroup;

use super::section_frame::{Motif, SectionFrame};

#[component]
pub fn SkillsPanel(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <Title text="Skills" />
        <SectionFrame id="skills" title="Skills" subtitle="Tools I reach for" motif=Motif::Grid glow=true>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 section-content">
                {groups.iter().map(|group| view! { <SkillCard group /> }).collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=move || {
                if hovered.get() {
                    "p-6 rounded-lg border border-cyan/50 bg-brightBlack/40 -translate-y-1 shadow-xl transition-all duration-200"
                } else {
                    "p-6 rounded-lg border border-muted/30 bg-brightBlack/20 transition-all duration-200"
                }
            }
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
        >
            <h3 class="text-xl font-bold mb-4">
                <span class="mr-2">{group.icon.clone()}</span>
                {group.category.clone()}
            </h3>
            <ul class="space-y-3">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        let width = format!("{}%", skill.level.min(100));
                        view! {
                            <li>
                                <div class="flex justify-between text-sm mb-1">
                                    <span>{skill.name.clone()}</span>
                                    <span class="text-muted">{width.clone()}</span>
                                </div>
                                <div class="h-2 rounded bg-brightBlack/60 overflow-hidden">
                                    <div
                                        class="h-full rounded bg-cyan skill-bar"
                                        style:width=width
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
