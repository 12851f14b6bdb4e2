use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::Profile,
    scroll::{ScrollSnapshot, ScrollTracker},
    section::SectionId,
    transition::PanelTransition,
};

use super::AppContext;

#[component]
pub fn Navbar(profile: &'static Profile) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let active = ctx.active_section();
    let transition = ctx.transition;
    let tracker = StoredValue::new(ScrollTracker::default());
    let (snapshot, set_snapshot) = signal(ScrollSnapshot::default());
    let (menu_open, set_menu_open) = signal(false);

    let measure = move || {
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        tracker.update_value(|t| t.resize(document_height, viewport_height));
    };
    let refresh = move || {
        let offset = window().scroll_y().unwrap_or_default();
        set_snapshot(tracker.with_value(|t| t.update(offset)));
    };

    // the document height changes whenever a different panel is mounted
    Effect::new(move |_| {
        transition.with(PanelTransition::mounted);
        measure();
        refresh();
    });
    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        measure();
        refresh();
    });

    let go = {
        let ctx = ctx.clone();
        move |target: SectionId| {
            set_menu_open(false);
            ctx.navigate(target);
        }
    };

    let home = {
        let go = go.clone();
        move |_: ev::MouseEvent| go(SectionId::Home)
    };

    let links = move |mobile: bool| {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                let go = go.clone();
                let base = if mobile {
                    "block w-full text-left px-4 py-3 rounded-md"
                } else {
                    "px-3 py-2 rounded-md text-sm"
                };
                view! {
                    <li>
                        <button
                            class=move || {
                                let state = if active.get() == id {
                                    "text-cyan bg-cyan/10"
                                } else {
                                    "text-foreground hover:text-cyan hover:bg-brightBlack/30"
                                };
                                format!("{base} font-medium transition-colors duration-200 {state}")
                            }
                            aria-current=move || (active.get() == id).then_some("page")
                            on:click=move |_| go(id)
                        >
                            <span class="mr-1">{id.icon()}</span>
                            {id.label()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if snapshot.get().scrolled {
                "fixed top-0 inset-x-0 z-40 bg-background/90 backdrop-blur shadow-lg transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent transition-all duration-300"
            }
        }>
            <div
                class="absolute top-0 left-0 h-0.5 bg-cyan"
                style:width=move || format!("{:.2}%", snapshot.get().progress * 100.0)
            ></div>
            <nav class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <button class="text-2xl font-bold text-cyan" on:click=home>
                    {profile.initials.clone()}
                    <span class="text-foreground">"."</span>
                </button>
                <ul class="hidden md:flex items-center gap-1">{links(false)}</ul>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <ul class=move || {
                if menu_open.get() { "md:hidden px-4 pb-4 space-y-1 bg-background/95" } else { "hidden" }
            }>{links(true)}</ul>
        </header>
    }
}
