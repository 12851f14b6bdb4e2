use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::motion::{glow_style, pointer_percent, Bounds};

/// Decorative background drawn behind a section's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motif {
    #[default]
    Plain,
    Grid,
    Dots,
}

impl Motif {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Grid => "motif-grid",
            Self::Dots => "motif-dots",
        }
    }
}

/// Shared chrome for every panel: heading, background motif and an optional
/// pointer-following glow.
#[component]
pub fn SectionFrame(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] motif: Motif,
    #[prop(optional)] glow: bool,
    children: Children,
) -> impl IntoView {
    let frame_ref = NodeRef::<html::Section>::new();
    let (glow_at, set_glow_at) = signal((50.0, 50.0));

    if glow {
        let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
            let Some(el) = frame_ref.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            set_glow_at(pointer_percent(
                ev.client_x() as f64,
                ev.client_y() as f64,
                bounds,
            ));
        });
    }

    view! {
        <section
            id=id
            node_ref=frame_ref
            class=format!("relative overflow-hidden py-16 px-4 sm:px-6 lg:px-8 {}", motif.class())
        >
            {glow
                .then(|| {
                    view! {
                        <div
                            class="pointer-events-none absolute inset-0 transition-opacity duration-300"
                            style=move || {
                                let (x, y) = glow_at.get();
                                glow_style(x, y)
                            }
                        ></div>
                    }
                })}
            <div class="relative mx-auto max-w-6xl">
                <header class="text-center mb-12 section-content">
                    <h2 class="text-3xl lg:text-4xl font-bold mb-4">
                        <span class="text-cyan">"# "</span>
                        {title}
                    </h2>
                    {subtitle
                        .map(|s| {
                            view! { <p class="max-w-2xl mx-auto text-lg text-muted">{s}</p> }
                        })}
                    <div class="mx-auto mt-4 h-1 w-20 rounded bg-cyan/60"></div>
                </header>
                {children()}
            </div>
        </section>
    }
}
