use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{
    retain_timer, ContactFormController, ContactSender, FieldKey, FormFields, FormSnapshot,
    SubmissionError, SubmitOutcome,
};
#[cfg(feature = "ssr")]
use crate::contact::validate;
use crate::portfolio::{CONTACT_EMAIL, LOCATION, SOCIAL_LINKS};

/// Accepts a contact message on the server. Input is validated again here;
/// delivery beyond logging is left to whatever is configured downstream.
#[server]
pub async fn send_contact_message(fields: FormFields) -> Result<(), ServerFnError> {
    let errors = validate(&fields);
    if !errors.is_empty() {
        let reasons = errors
            .iter()
            .map(|(_, e)| e.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(%reasons, "rejected contact message");
        return Err(ServerFnError::new(reasons));
    }

    tracing::info!(
        name = %fields.name,
        email = %fields.email,
        subject = %fields.subject,
        message_chars = fields.message.chars().count(),
        "contact message received"
    );
    Ok(())
}

/// Sends through the `send_contact_message` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnSender;

impl ContactSender for ServerFnSender {
    async fn send(&self, fields: FormFields) -> Result<(), SubmissionError> {
        match send_contact_message(fields).await {
            Ok(()) => Ok(()),
            Err(ServerFnError::ServerError(reason)) => Err(SubmissionError::Rejected(reason)),
            Err(e) => Err(SubmissionError::Transport(e.to_string())),
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="max-w-6xl mx-auto px-4 py-16 section-content">
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-2">"Get In Touch"</h2>
                <p class="text-muted">
                    "Have a project in mind? Let's work together to create something amazing."
                </p>
            </div>
            <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
                <ContactInfo />
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="w-full lg:max-w-md space-y-6">
            <div>
                <h3 class="text-xl font-bold mb-2">"Let's Connect"</h3>
                <p class="leading-relaxed">
                    "I'm currently open for freelance and full-time opportunities. Whether you want to kick-start a project, need technical help, or just want to say hi, drop a message!"
                </p>
            </div>
            <div class="space-y-3">
                <div class="flex items-center gap-3">
                    <i class="extra-email"></i>
                    <div>
                        <div class="text-sm text-muted">"Email"</div>
                        <a href=format!("mailto:{CONTACT_EMAIL}") class="text-cyan">
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <i class="extra-location"></i>
                    <div>
                        <div class="text-sm text-muted">"Location"</div>
                        <span>{LOCATION}</span>
                    </div>
                </div>
            </div>
            <div>
                <div class="text-sm font-medium mb-2">"Connect on Social Media"</div>
                <div class="flex gap-3 text-2xl">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                    class="hover:text-cyan"
                                >
                                    <i class=link.icon_class></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let snapshot = RwSignal::new(FormSnapshot::default());
    let dismiss_handle = RwSignal::new(None::<TimeoutHandle>);

    // the observer may outlive this component inside a pending submit
    let controller = ContactFormController::new(ServerFnSender).with_observer(move |s| {
        _ = snapshot.try_set(s.clone());
    });

    let cancel_dismissal = move || {
        if let Some(Some(handle)) = dismiss_handle.try_get_untracked() {
            handle.clear();
        }
        _ = dismiss_handle.try_set(None);
    };
    on_cleanup(cancel_dismissal);

    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |(key, value): (FieldKey, String)| {
            cancel_dismissal();
            controller.update_field(key, value);
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            let SubmitOutcome::Succeeded(ticket) = controller.submit().await else {
                return;
            };
            // unmounted while the send was in flight
            if dismiss_handle.try_get_untracked().is_none() {
                return;
            }
            cancel_dismissal();
            let display = controller.settings().success_display;
            let handle = set_timeout_with_handle(
                move || {
                    controller.expire(ticket);
                },
                display,
            );
            match handle {
                Ok(handle) => {
                    retain_timer(
                        handle,
                        |h| dismiss_handle.try_set(Some(h)).flatten(),
                        |h| h.clear(),
                    );
                }
                Err(_) => log::warn!("couldn't schedule contact success dismissal"),
            }
        });
    };

    let is_submitting = move || snapshot.with(FormSnapshot::is_submitting);

    view! {
        <form class="w-full flex-1 space-y-4" on:submit=on_submit novalidate=true>
            <FormField field=FieldKey::Name placeholder="John Doe" snapshot on_edit />
            <FormField field=FieldKey::Email placeholder="john@example.com" snapshot on_edit />
            <FormField field=FieldKey::Subject placeholder="Project Inquiry" snapshot on_edit />
            <FormField
                field=FieldKey::Message
                placeholder="Tell me about your project..."
                snapshot
                on_edit
                multiline=true
            />
            <button
                type="submit"
                disabled=is_submitting
                class="w-full px-4 py-3 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 font-medium transition-all duration-200 disabled:opacity-50"
            >
                {move || {
                    if is_submitting() {
                        Either::Left(view! { <span class="loading-spinner" aria-label="Sending"></span> })
                    } else {
                        Either::Right("Send Message")
                    }
                }}
            </button>
            {move || {
                snapshot
                    .with(|s| s.notice.as_ref().map(|e| e.to_string()))
                    .map(|notice| {
                        view! {
                            <div class="p-3 rounded-md bg-red/20 text-red" role="alert">
                                {notice}
                                " Your message is still here, please try again."
                            </div>
                        }
                    })
            }}
            {move || {
                snapshot
                    .with(FormSnapshot::show_success)
                    .then(|| {
                        view! {
                            <div class="p-3 rounded-md bg-green/20 text-green" role="status">
                                "✓ Message sent successfully! I'll get back to you soon."
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn FormField(
    field: FieldKey,
    placeholder: &'static str,
    snapshot: RwSignal<FormSnapshot>,
    on_edit: Callback<(FieldKey, String)>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || snapshot.with(|s| s.fields.get(field).to_string());
    let error = move || snapshot.with(|s| s.errors.message(field));
    let class = move || {
        if error().is_some() {
            "w-full px-4 py-2 rounded-md border border-red focus:outline-none focus:ring-2 focus:ring-red bg-background text-foreground"
        } else {
            "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground"
        }
    };
    let invalid = move || error().is_some().to_string();
    let required = field.is_required();

    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="5"
                class=class
                placeholder=placeholder
                aria-required=required.to_string()
                aria-invalid=invalid
                autocomplete="off"
                prop:value=value
                on:input=move |ev| on_edit.run((field, event_target_value(&ev)))
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                type=if field == FieldKey::Email { "email" } else { "text" }
                id=field.as_str()
                name=field.as_str()
                class=class
                placeholder=placeholder
                aria-required=required.to_string()
                aria-invalid=invalid
                autocomplete="off"
                prop:value=value
                on:input=move |ev| on_edit.run((field, event_target_value(&ev)))
            />
        })
    };

    view! {
        <div>
            <label for=field.as_str() class="block mb-1 font-medium">
                {field.label()}
                {required.then(|| view! { <span class="text-red">" *"</span> })}
            </label>
            {control}
            {move || error().map(|msg| view! { <span class="text-sm text-red">{msg}</span> })}
        </div>
    }
}
