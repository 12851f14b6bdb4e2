use leptos::prelude::*;

use crate::content::portfolio;

#[component]
pub fn Splash() -> impl IntoView {
    let initials = portfolio()
        .map(|p| p.profile.initials.clone())
        .unwrap_or_default();
    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-background splash">
            <div class="relative flex h-24 w-24 items-center justify-center">
                <div class="absolute inset-0 rounded-full border-4 border-cyan/20 border-t-cyan animate-spin"></div>
                <span class="text-3xl font-bold text-cyan">{initials}</span>
            </div>
            <p class="mt-6 text-sm text-muted tracking-widest uppercase">"Loading portfolio"</p>
        </div>
    }
}
