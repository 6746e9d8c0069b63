//! Contact page: campus details and the simulated message form

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::SimulatedBackend;
use crate::config::SiteConfig;
use crate::content::{CONTACT_BANNER, CONTACT_DETAILS, MAP_IMAGE};
use crate::frontend::components::{Banner, Button, EmailInput, TextArea, TextInput, Toast};
use crate::state::{ContactForm, SubmitTicket};

/// Browser timers owned by the page; both are cleared when it unmounts.
#[derive(Debug, Default)]
struct Timers {
    pending: Option<TimeoutHandle>,
    toast: Option<TimeoutHandle>,
}

impl Timers {
    fn clear_toast(&mut self) {
        if let Some(handle) = self.toast.take() {
            handle.clear();
        }
    }

    fn clear_all(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.clear();
        }
        self.clear_toast();
    }
}

// Timer glue only. Ticket and toast-id rules live in `state::contact` and are
// covered by tests/form_tests.rs.
fn finish_submission(
    form: RwSignal<ContactForm>,
    timers: StoredValue<Timers>,
    ticket: SubmitTicket,
    toast_duration: Duration,
) {
    timers.try_update_value(|t| t.pending = None);

    let toast = match form.try_update(|f| f.complete(ticket, &SimulatedBackend)) {
        Some(Ok(Some(toast))) => toast,
        Some(Err(e)) => {
            crate::log_err!("sending contact message", e);
            return;
        }
        _ => return,
    };

    let id = toast.id();
    let expire = move || {
        form.try_update(|f| f.expire_toast(id));
    };
    match set_timeout_with_handle(expire, toast_duration) {
        Ok(handle) => {
            timers.try_update_value(|t| {
                t.clear_toast();
                t.toast = Some(handle);
            });
        }
        Err(e) => crate::log_err!("scheduling toast dismissal", format!("{:?}", e)),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let delay = config.submit_delay();
    let toast_duration = config.toast_duration();

    let form = RwSignal::new(ContactForm::new(config.toast_message));
    let timers = StoredValue::new(Timers::default());

    on_cleanup(move || {
        timers.try_update_value(|t| t.clear_all());
        form.try_update(|f| f.cancel());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ticket = match form.try_update(|f| f.submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("Contact message not sent: {}", e);
                return;
            }
            None => return,
        };

        let finish = move || finish_submission(form, timers, ticket, toast_duration);
        match set_timeout_with_handle(finish, delay) {
            Ok(handle) => timers.update_value(|t| t.pending = Some(handle)),
            Err(e) => {
                crate::log_err!("scheduling contact submission", format!("{:?}", e));
                form.update(|f| f.cancel());
            }
        }
    };

    let dismiss = Callback::new(move |_: ()| {
        timers.update_value(|t| t.clear_toast());
        form.update(|f| f.dismiss_toast());
    });

    view! {
        <div class="pt-24 dark:bg-slate-900 transition-colors">
            {move || {
                form.with(|f| f.toast().cloned())
                    .map(|toast| view! { <Toast message=toast.message().to_string() on_dismiss=dismiss/> })
            }}

            <Banner banner=CONTACT_BANNER/>

            <section class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-2 gap-20 items-start">
                <div class="space-y-16">
                    <div>
                        <h2 class="text-4xl font-serif font-bold text-navy dark:text-white mb-10">"Our Location"</h2>
                        <div class="space-y-10">
                            {CONTACT_DETAILS
                                .into_iter()
                                .map(|detail| {
                                    view! {
                                        <div class="flex items-start group">
                                            <div class="bg-navy dark:bg-slate-800 p-4 rounded-2xl text-2xl mr-8 group-hover:bg-warm-gold transition-colors shadow-lg">
                                                {detail.icon}
                                            </div>
                                            <div>
                                                <h4 class="font-bold text-navy dark:text-warm-gold text-xl mb-1">{detail.title}</h4>
                                                <p class="text-gray-500 dark:text-gray-400 text-lg leading-relaxed">{detail.value}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="h-96 rounded-[3rem] overflow-hidden shadow-2xl relative border-8 border-white dark:border-slate-800 group">
                        <img
                            src=MAP_IMAGE
                            alt="Map Location"
                            class="absolute inset-0 w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                        />
                        <div class="absolute inset-0 bg-navy/20 flex items-center justify-center">
                            <div class="bg-white dark:bg-slate-900 p-6 rounded-3xl shadow-2xl flex flex-col items-center">
                                <span class="text-4xl mb-2">"📍"</span>
                                <p class="font-bold text-navy dark:text-white text-lg">"Ludhiana Campus"</p>
                                <button type="button" class="mt-3 text-xs font-bold text-vibrant-green hover:underline">
                                    "Get Directions"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="bg-off-white dark:bg-slate-800 p-12 rounded-[3.5rem] border border-gray-100 dark:border-slate-700 shadow-xl sticky top-32">
                    <h3 class="text-3xl font-serif font-bold text-navy dark:text-white mb-10">"Send a Detailed Message"</h3>
                    <form class="space-y-6" on:submit=on_submit>
                        <TextInput
                            label="Your Name"
                            name="contact-name"
                            input_type="text"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.fields().name.clone()))
                            on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().name = value))
                        />
                        <EmailInput
                            name="contact-email"
                            value=Signal::derive(move || form.with(|f| f.fields().email.clone()))
                            on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().email = value))
                        />
                        <TextInput
                            label="Subject"
                            name="subject"
                            input_type="text"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.fields().subject.clone()))
                            on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().subject = value))
                        />
                        <TextArea
                            label="Message"
                            name="message"
                            value=Signal::derive(move || form.with(|f| f.fields().message.clone()))
                            on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().message = value))
                        />
                        <Button
                            loading=Signal::derive(move || form.with(|f| f.is_submit_disabled()))
                            loading_text="Sending..."
                        >
                            "Send Request ›"
                        </Button>
                    </form>
                </div>
            </section>
        </div>
    }
}
