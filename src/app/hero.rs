use leptos::{ev, prelude::*};
use leptos_use::use_interval_fn;

use crate::{
    content::{ContactInfo, Profile},
    motion::{RoleCycle, ROLE_INTERVAL},
    section::SectionId,
};

use super::{section_frame::Motif, AppContext};

#[component]
pub fn Hero(profile: &'static Profile, contact: &'static ContactInfo) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let roles = RwSignal::new(RoleCycle::new(profile.roles.clone()));
    let _ = use_interval_fn(
        move || {
            roles.update(|r| {
                r.advance();
            })
        },
        ROLE_INTERVAL.as_millis() as u64,
    );
    let (speaking, toggle_speech) = use_intro_speech(&profile.intro);
    let (cta_hover, set_cta_hover) = signal(false);

    let to_contact = {
        let ctx = ctx.clone();
        move |_: ev::MouseEvent| ctx.navigate(SectionId::Contact)
    };
    let to_projects = move |_: ev::MouseEvent| ctx.navigate(SectionId::Projects);

    view! {
        <section
            id="home"
            class=format!(
                "relative min-h-[80vh] flex items-center justify-center px-4 {}",
                Motif::Grid.class(),
            )
        >
            <div class="relative max-w-4xl mx-auto text-center section-content">
                <div class="mx-auto mb-8 flex h-28 w-28 items-center justify-center rounded-full border-2 border-cyan/60 bg-brightBlack/40 text-4xl font-bold text-cyan shadow-2xl">
                    {profile.initials.clone()}
                </div>
                <p class="text-lg text-muted mb-2">"Hello, I'm"</p>
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold mb-4">{profile.name.clone()}</h1>
                <p class="text-2xl sm:text-3xl font-medium text-cyan h-10 mb-6">
                    {move || roles.with(|r| r.current().unwrap_or_default().to_string())}
                    <span class="animate-pulse">"|"</span>
                </p>
                <p class="max-w-2xl mx-auto text-lg mb-10 leading-relaxed">
                    {profile.tagline.clone()}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-10">
                    <button
                        class=move || {
                            if cta_hover.get() {
                                "bg-cyan text-background px-8 py-3 rounded-md font-medium transition-all duration-200 scale-105"
                            } else {
                                "bg-cyan/90 text-background px-8 py-3 rounded-md font-medium transition-all duration-200"
                            }
                        }
                        on:mouseenter=move |_| set_cta_hover(true)
                        on:mouseleave=move |_| set_cta_hover(false)
                        on:click=to_contact
                    >
                        "Get in touch"
                        <span class="ml-2">{move || if cta_hover.get() { "→" } else { "›" }}</span>
                    </button>
                    <button
                        class="px-8 py-3 rounded-md font-medium border border-cyan/40 text-cyan hover:bg-cyan/10 transition-all duration-200"
                        on:click=to_projects
                    >
                        "View my work"
                    </button>
                    <button
                        class="px-6 py-3 rounded-md font-medium border border-muted/40 hover:bg-brightBlack/30 transition-all duration-200"
                        aria-pressed=move || speaking.get().to_string()
                        on:click=move |_| toggle_speech.run(())
                    >
                        {move || if speaking.get() { "⏹ Stop" } else { "🔊 Listen" }}
                    </button>
                </div>
                <div class="flex items-center justify-center gap-5">
                    {contact
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-2xl hover:text-cyan transition-colors duration-200"
                                    aria-label=s.label.clone()
                                >
                                    <i class=s.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=profile.resume_url.clone()
                        download=""
                        class="text-sm px-4 py-2 rounded-md border border-muted/40 hover:text-cyan hover:border-cyan/40 transition-colors duration-200"
                    >
                        <i class="extra-download mr-2"></i>
                        "Résumé"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Speaking flag plus a toggle for the intro text.
#[cfg(feature = "hydrate")]
fn use_intro_speech(intro: &'static str) -> (ReadSignal<bool>, Callback<()>) {
    use crate::speech::{browser::BrowserSpeech, SpeechToggle};

    let (speaking, set_speaking) = signal(false);
    let toggle = StoredValue::new_local(None::<SpeechToggle<BrowserSpeech>>);
    let synth = BrowserSpeech::new(move |id| {
        toggle.update_value(|t| {
            if t.as_mut().is_some_and(|t| t.finished(id)) {
                set_speaking(false);
            }
        });
    });
    toggle.set_value(Some(SpeechToggle::new(synth, intro)));

    on_cleanup(move || {
        toggle.update_value(|t| {
            if let Some(t) = t {
                t.stop();
            }
        })
    });

    let run = Callback::new(move |_: ()| {
        toggle.update_value(|t| {
            let Some(t) = t else {
                return;
            };
            match t.toggle() {
                Ok(now_speaking) => set_speaking(now_speaking),
                Err(e) => {
                    log::warn!("{e}");
                    set_speaking(false);
                }
            }
        })
    });
    (speaking, run)
}

#[cfg(not(feature = "hydrate"))]
fn use_intro_speech(_intro: &'static str) -> (ReadSignal<bool>, Callback<()>) {
    let (speaking, _) = signal(false);
    (speaking, Callback::new(|_: ()| {}))
}
