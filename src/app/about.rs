use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::Profile;

use super::section_frame::{Motif, SectionFrame};

#[component]
pub fn AboutPanel(profile: &'static Profile) -> impl IntoView {
    view! {
        <Title text="About" />
        <SectionFrame id="about" title="About Me" subtitle="A little background" motif=Motif::Dots glow=true>
            <div class="flex flex-col lg:flex-row gap-8 lg:gap-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    {profile
                        .bio
                        .iter()
                        .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{p.clone()}</p> })
                        .collect_view()}
                    <a
                        href=profile.resume_url.clone()
                        download=""
                        class="inline-block mt-4 bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        <i class="extra-download mr-2"></i>
                        "Download résumé"
                    </a>
                </div>
                <div class="w-full lg:max-w-md">
                    <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                        <h3 class="text-xl font-bold mb-4">"Quick facts"</h3>
                        <dl class="space-y-3">
                            {profile
                                .facts
                                .iter()
                                .map(|f| {
                                    view! {
                                        <div class="flex justify-between gap-4">
                                            <dt class="text-muted">{f.label.clone()}</dt>
                                            <dd class="text-right font-medium">{f.value.clone()}</dd>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    </div>
                </div>
            </div>
        </SectionFrame>
    }
}
