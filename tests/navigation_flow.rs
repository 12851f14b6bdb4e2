use std::sync::{Arc, Mutex};

use portfolio_site::{
    bus::NavBus,
    contact::{deliver, ContactForm, Field, SubmitStatus},
    content::portfolio,
    scroll::ScrollTracker,
    section::SectionId,
    transition::PanelTransition,
    view_state::{apply_navigation, Phase, ViewState, SPLASH_DELAY},
};

/// Page-level state; the bus handler runs the same step the shell runs.
struct Page {
    view: ViewState,
    transition: PanelTransition,
    scroll_offset: f64,
    scroll_resets: usize,
    /// Epoch of the exit timer the shell would have armed.
    pending_exit: Option<u64>,
}

fn mount(bus: &NavBus) -> (Arc<Mutex<Page>>, portfolio_site::bus::Subscription) {
    let page = Arc::new(Mutex::new(Page {
        view: ViewState::new(),
        transition: PanelTransition::new(SectionId::Home),
        scroll_offset: 0.0,
        scroll_resets: 0,
        pending_exit: None,
    }));
    let handle = page.clone();
    let sub = bus.subscribe(move |target| {
        let mut guard = handle.lock().unwrap();
        let page = &mut *guard;
        let outcome = apply_navigation(&mut page.view, &mut page.transition, target);
        if outcome.scroll_to_top {
            page.scroll_offset = 0.0;
            page.scroll_resets += 1;
        }
        if let Some(epoch) = outcome.exit_epoch {
            page.pending_exit = Some(epoch);
        }
    });
    (page, sub)
}

/// Fires the armed exit timer and then the enter timer, as the shell's timers would.
fn settle(page: &Arc<Mutex<Page>>) {
    let mut page = page.lock().unwrap();
    if let Some(exit) = page.pending_exit.take() {
        let enter = page.transition.exit_finished(exit).expect("exit timer is current");
        assert!(page.transition.enter_finished(enter));
    } else {
        let epoch = page.transition.epoch();
        page.transition.enter_finished(epoch);
    }
}

#[test]
fn test_visit_and_send_message() {
    let content = portfolio().expect("content should load");
    let bus = NavBus::new();
    let (page, sub) = mount(&bus);

    // splash is up until its one-shot timer fires
    {
        let mut p = page.lock().unwrap();
        assert_eq!(p.view.phase(), Phase::Loading);
        assert_eq!(p.view.splash_delay(), SPLASH_DELAY);
        assert!(p.view.finish_loading());
        assert_eq!(p.view.phase(), Phase::Ready(SectionId::Home));
    }
    settle(&page);
    assert_eq!(page.lock().unwrap().transition.mounted(), SectionId::Home);

    // reader scrolls down the hero, then clicks "Contact" in the nav bar
    page.lock().unwrap().scroll_offset = 640.0;
    assert_eq!(bus.emit(SectionId::Contact), 1);
    {
        let p = page.lock().unwrap();
        assert_eq!(p.view.active_section(), SectionId::Contact);
        assert_eq!(p.scroll_offset, 0.0);
        assert_eq!(p.transition.mounted(), SectionId::Home);
    }
    settle(&page);
    {
        let p = page.lock().unwrap();
        assert_eq!(p.transition.mounted(), SectionId::Contact);
        assert!(p.transition.is_settled());
        assert_eq!((p.transition.exits(), p.transition.enters()), (1, 2));
    }

    // clicking the active entry again neither scrolls nor remounts
    bus.emit(SectionId::Contact);
    {
        let p = page.lock().unwrap();
        assert_eq!(p.scroll_resets, 1);
        assert_eq!(p.transition.exits(), 1);
        assert_eq!(p.pending_exit, None);
    }

    // a scrolled-to-top page reports zero progress
    let mut tracker = ScrollTracker::default();
    tracker.resize(2400.0, 900.0);
    let snap = tracker.update(page.lock().unwrap().scroll_offset);
    assert!(!snap.scrolled);
    assert_eq!(snap.progress, 0.0);

    // fill in and submit the form
    let mut form = ContactForm::new();
    form.set(Field::Name, "Grace Hopper");
    form.set(Field::Email, "grace@example.com");
    form.set(Field::Message, format!("Hi {}!", content.profile.name));
    let message = form.begin_submit().expect("form should be valid");
    assert_eq!(form.status(), &SubmitStatus::Submitting);
    // the delivery callback fires after the simulated delay
    form.complete(deliver(&message));
    assert_eq!(form.status(), &SubmitStatus::Sent);
    assert!(Field::ALL.iter().all(|f| form.value(*f).is_empty()));

    // unmount: the shell's handler goes away with it
    sub.cancel();
    assert_eq!(bus.emit(SectionId::Home), 0);
    assert_eq!(
        page.lock().unwrap().view.active_section(),
        SectionId::Contact
    );
}

#[test]
fn test_every_nav_entry_reaches_its_panel() {
    let bus = NavBus::new();
    let (page, _sub) = mount(&bus);
    page.lock().unwrap().view.finish_loading();
    settle(&page);

    for target in SectionId::ALL.into_iter().rev() {
        let before = page.lock().unwrap().transition.exits();
        let was_active = page.lock().unwrap().view.active_section() == target;
        bus.emit(target);
        settle(&page);
        let p = page.lock().unwrap();
        assert_eq!(p.view.active_section(), target);
        assert_eq!(p.transition.mounted(), target);
        let expected = if was_active { before } else { before + 1 };
        assert_eq!(p.transition.exits(), expected);
    }
}

#[test]
fn test_deep_link_during_splash_picks_first_panel() {
    let bus = NavBus::new();
    let (page, _sub) = mount(&bus);
    assert_eq!(bus.emit_named("#projects"), 1);
    {
        let p = page.lock().unwrap();
        assert_eq!(p.view.phase(), Phase::Loading);
        assert_eq!(p.scroll_resets, 0);
        assert_eq!(p.transition.exits(), 0);
        assert_eq!(p.view.active_section(), SectionId::Projects);
    }
    page.lock().unwrap().view.finish_loading();
    assert_eq!(
        page.lock().unwrap().view.phase(),
        Phase::Ready(SectionId::Projects)
    );
}

#[test]
fn test_unknown_section_name_is_dropped() {
    let bus = NavBus::new();
    let (page, _sub) = mount(&bus);
    page.lock().unwrap().view.finish_loading();
    bus.emit(SectionId::Skills);
    assert_eq!(bus.emit_named("admin"), 0);
    assert_eq!(page.lock().unwrap().view.active_section(), SectionId::Skills);
}
