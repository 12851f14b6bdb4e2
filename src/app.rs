mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod section_frame;
mod skills;
mod splash;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    bus::NavBus,
    content::{portfolio, Portfolio},
    section::SectionId,
    transition::{PanelTransition, ENTER_DURATION, EXIT_DURATION},
    view_state::{apply_navigation, Navigation, ViewState},
};

use about::AboutPanel;
use contact::ContactPanel;
use education::EducationPanel;
use experience::ExperiencePanel;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::ProjectsPanel;
use skills::SkillsPanel;
use splash::Splash;

/// Id of the element the client hydrates into.
pub const MOUNT_ID: &str = "app";

/// Shared view state, provided once by [`App`] and read by every section.
#[derive(Clone)]
pub struct AppContext {
    pub view: RwSignal<ViewState>,
    pub transition: RwSignal<PanelTransition>,
    pub bus: NavBus,
}

impl AppContext {
    pub fn navigate(&self, target: SectionId) {
        self.bus.emit(target);
    }

    pub fn active_section(&self) -> Memo<SectionId> {
        let view = self.view;
        Memo::new(move |_| view.with(ViewState::active_section))
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <div id=MOUNT_ID>
                    <App />
                </div>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::new());
    let transition = RwSignal::new(PanelTransition::new(SectionId::Home));
    let bus = NavBus::new();
    provide_context(AppContext {
        view: view_state,
        transition,
        bus: bus.clone(),
    });

    let subscription = bus.subscribe(move |target| {
        let (Some(mut view), Some(mut panels)) =
            (view_state.try_get_untracked(), transition.try_get_untracked())
        else {
            return;
        };
        let outcome = apply_navigation(&mut view, &mut panels, target);
        match outcome.navigation {
            Navigation::Unchanged => return,
            Navigation::Queued(to) => log::debug!("{to} queued behind the splash"),
            Navigation::Changed { from, to } => log::debug!("navigating {from} -> {to}"),
        }
        view_state.set(view);
        transition.set(panels);
        if outcome.scroll_to_top {
            scroll_to_top();
        }
        if let Some(epoch) = outcome.exit_epoch {
            set_timeout(move || finish_exit(transition, epoch), EXIT_DURATION);
        }
    });
    on_cleanup(move || subscription.cancel());

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if view_state.try_update(ViewState::finish_loading) != Some(true) {
                return;
            }
            let first = view_state.with_untracked(ViewState::active_section);
            log::info!("splash finished, showing {first}");
            transition.set(PanelTransition::new(first));
            set_timeout(move || finish_enter(transition, 0), ENTER_DURATION);
        },
        view_state.with_untracked(ViewState::splash_delay).as_millis() as f64,
    );
    // effects only run in the browser, so the splash timer never starts during SSR
    Effect::new(move |_| {
        // a `#section` deep link picks the first panel shown after the splash
        if let Ok(hash) = window().location().hash() {
            if hash.len() > 1 {
                bus.emit_named(&hash);
            }
        }
        start(());
    });

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

fn finish_exit(transition: RwSignal<PanelTransition>, epoch: u64) {
    if let Some(Some(enter)) = transition.try_update(|t| t.exit_finished(epoch)) {
        set_timeout(move || finish_enter(transition, enter), ENTER_DURATION);
    }
}

fn finish_enter(transition: RwSignal<PanelTransition>, epoch: u64) {
    transition.try_update(|t| t.enter_finished(epoch));
}

fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let view = ctx.view;
    let loading = Memo::new(move |_| view.with(ViewState::is_loading));

    view! {
        <Title text="Home" />
        <ErrorBoundary fallback=|errors| {
            view! { <RecoveryScreen errors /> }
        }>
            {move || {
                if loading.get() {
                    Either::Left(view! { <Splash /> })
                } else {
                    Either::Right(portfolio().map(|content| view! { <Page content /> }))
                }
            }}
        </ErrorBoundary>
    }
}

#[component]
fn Page(content: &'static Portfolio) -> impl IntoView {
    view! {
        <Navbar profile=&content.profile />
        <main class="min-h-screen pt-20">
            <PanelHost content />
        </main>
        <Footer profile=&content.profile contact=&content.contact />
    }
}

/// Mounts exactly one panel, swapping it only when the transition says so.
#[component]
fn PanelHost(content: &'static Portfolio) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let transition = ctx.transition;
    let mounted = Memo::new(move |_| transition.with(PanelTransition::mounted));
    let class = move || format!("panel {}", transition.with(PanelTransition::css_class));

    view! { <div class=class>{move || render_panel(mounted.get(), content)}</div> }
}

fn render_panel(section: SectionId, content: &'static Portfolio) -> AnyView {
    match section {
        SectionId::Home => view! { <Hero profile=&content.profile contact=&content.contact /> }
            .into_any(),
        SectionId::About => view! { <AboutPanel profile=&content.profile /> }.into_any(),
        SectionId::Education => view! { <EducationPanel entries=&content.education /> }
            .into_any(),
        SectionId::Skills => view! { <SkillsPanel groups=&content.skills /> }.into_any(),
        SectionId::Experience => view! { <ExperiencePanel entries=&content.experience /> }
            .into_any(),
        SectionId::Projects => view! { <ProjectsPanel content /> }.into_any(),
        SectionId::Contact => view! { <ContactPanel contact=&content.contact /> }.into_any(),
    }
}

#[component]
fn RecoveryScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| {
                log::error!("render failed: {e}");
                view! { <li class="text-sm text-muted">{e.to_string()}</li> }
            })
            .collect_view()
    };
    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-lg text-center bg-brightBlack/30 p-8 rounded-lg border border-red/40">
                <h1 class="text-3xl font-bold text-red mb-4">"Something went wrong"</h1>
                <p class="mb-4">"This page hit an unexpected error and couldn't be displayed."</p>
                <ul class="mb-6 space-y-1">{messages}</ul>
                <button
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    on:click=move |_| {
                        if let Err(e) = window().location().reload() {
                            log::error!("reload failed: {e:?}");
                        }
                    }
                >
                    "Reload page"
                </button>
            </div>
        </div>
    }
}
