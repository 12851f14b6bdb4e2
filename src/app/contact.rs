use leptos::{either::Either, ev, prelude::*};
use leptos_meta::Title;

use crate::{
    contact::{deliver, ContactForm, Field, SUBMIT_DELAY},
    content::ContactInfo,
};

use super::section_frame::{Motif, SectionFrame};

#[component]
pub fn ContactPanel(contact: &'static ContactInfo) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // never complete into a torn-down form
    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(message)) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        let res = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                form.try_update(|f| f.complete(deliver(&message)));
            },
            SUBMIT_DELAY,
        );
        match res {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => log::error!("couldn't schedule contact delivery: {e:?}"),
        }
    };

    // only flips on Sent, so editing after an error never remounts the inputs
    let sent = Memo::new(move |_| form.with(ContactForm::is_sent));

    view! {
        <Title text="Contact" />
        <SectionFrame
            id="contact"
            title="Get in Touch"
            subtitle="Have a question or a project in mind? Send me a message."
            motif=Motif::Dots
            glow=true
        >
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 section-content">
                <ContactDetails contact />
                <div class="lg:col-span-2 bg-brightBlack/20 p-6 rounded-lg border border-muted/30">
                    {move || {
                        if sent.get() {
                            Either::Left(
                                view! {
                                    <div class="text-center py-12">
                                        <p class="text-5xl mb-4">"✓"</p>
                                        <h3 class="text-2xl font-bold text-green mb-2">"Message sent!"</h3>
                                        <p class="mb-6">"Thanks for reaching out. I'll get back to you soon."</p>
                                        <button
                                            class="px-6 py-2 rounded-md border border-cyan/40 text-cyan hover:bg-cyan/10"
                                            on:click=move |_| form.update(ContactForm::reset)
                                        >
                                            "Send another message"
                                        </button>
                                    </div>
                                },
                            )
                        } else {
                            Either::Right(view! { <FormBody form on_submit /> })
                        }
                    }}
                </div>
            </div>
        </SectionFrame>
    }
}

#[component]
fn FormBody<F>(form: RwSignal<ContactForm>, on_submit: F) -> impl IntoView
where
    F: FnMut(ev::SubmitEvent) + 'static,
{
    let submitting = move || form.with(ContactForm::is_submitting);
    let error = move || form.with(|f| f.error().map(str::to_string));
    view! {
        <form class="space-y-6" on:submit=on_submit novalidate=true>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField form field=Field::Name />
                <FormField form field=Field::Email />
            </div>
            <FormField form field=Field::Subject />
            <FormField form field=Field::Message multiline=true />
            {move || {
                error()
                    .map(|msg| {
                        view! {
                            <p class="text-sm text-red bg-red/10 border border-red/30 rounded-md px-4 py-2" role="alert">
                                {msg}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full sm:w-auto px-8 py-3 rounded-md font-medium bg-cyan/90 text-background hover:bg-cyan disabled:opacity-50 transition-all duration-200"
                disabled=submitting
            >
                {move || if submitting() { "Sending…" } else { "Send message" }}
            </button>
        </form>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{}", field.label().to_lowercase().replace(' ', "-"));
    let value = move || form.with(|f| f.value(field).to_string());
    let label_class = move || {
        if form.with(|f| f.is_label_raised(field)) {
            "absolute left-3 -top-2.5 px-1 text-xs text-cyan bg-background transition-all duration-200"
        } else {
            "absolute left-3 top-3 text-muted pointer-events-none transition-all duration-200"
        }
    };
    let input_class = "w-full px-4 py-3 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground";
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let input = if multiline {
        view! {
            <textarea
                id=id.clone()
                rows="6"
                class=input_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(|f| f.blur(field))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type=if field == Field::Email { "email" } else { "text" }
                class=input_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(|f| f.blur(field))
            />
        }
        .into_any()
    };

    view! {
        <div class="relative">
            {input}
            <label for=id class=label_class>
                {label}
            </label>
        </div>
    }
}

#[component]
fn ContactDetails(contact: &'static ContactInfo) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h3 class="font-bold mb-1">"Email"</h3>
                <a href=format!("mailto:{}", contact.email) class="text-cyan hover:underline">
                    {contact.email.clone()}
                </a>
            </div>
            {contact
                .phone
                .clone()
                .map(|phone| {
                    view! {
                        <div>
                            <h3 class="font-bold mb-1">"Phone"</h3>
                            <p>{phone}</p>
                        </div>
                    }
                })}
            <div>
                <h3 class="font-bold mb-1">"Location"</h3>
                <p>{contact.location.clone()}</p>
            </div>
            <div>
                <h3 class="font-bold mb-2">"Find me online"</h3>
                <ul class="space-y-2">
                    {contact
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <li>
                                    <a
                                        href=s.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="hover:text-cyan"
                                    >
                                        <i class=format!("{} mr-2", s.icon)></i>
                                        {s.label.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
