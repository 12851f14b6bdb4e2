use leptos::prelude::*;

use crate::{
    content::{build_year, ContactInfo, Profile, BUILD_TIME},
    section::SectionId,
};

use super::AppContext;

#[component]
pub fn Footer(profile: &'static Profile, contact: &'static ContactInfo) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let year = build_year(BUILD_TIME)
        .map(|y| y.to_string())
        .unwrap_or_default();

    view! {
        <footer class="border-t border-muted/30 mt-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-10 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <p class="text-xl font-bold text-cyan mb-2">{profile.name.clone()}</p>
                    <p class="text-sm text-muted">{profile.tagline.clone()}</p>
                </div>
                <nav>
                    <h3 class="font-bold mb-3">"Quick links"</h3>
                    <ul class="grid grid-cols-2 gap-1 text-sm">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                let ctx = ctx.clone();
                                view! {
                                    <li>
                                        <button
                                            class="hover:text-cyan transition-colors duration-200"
                                            on:click=move |_| ctx.navigate(id)
                                        >
                                            {id.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div>
                    <h3 class="font-bold mb-3">"Elsewhere"</h3>
                    <a href=format!("mailto:{}", contact.email) class="block text-sm hover:text-cyan mb-2">
                        {contact.email.clone()}
                    </a>
                    <div class="flex gap-3">
                        {contact
                            .socials
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-xl hover:text-cyan"
                                        aria-label=s.label.clone()
                                    >
                                        <i class=s.icon.clone()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <p class="text-center text-xs text-muted pb-6">
                "© " {year} " " {profile.name.clone()} ". Built with Rust and Leptos."
            </p>
        </footer>
    }
}
