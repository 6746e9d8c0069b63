use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::SimulatedBackend;
use crate::content::{ADMISSION_STEPS, ADMISSIONS_BANNER, CONFIRMATION_BODY, CONFIRMATION_TITLE};
use crate::frontend::components::{Banner, Button, EmailInput, GradeSelect, TextInput};
use crate::models::Grade;
use crate::state::AdmissionForm;

#[component]
fn InquiryForm(form: RwSignal<AdmissionForm>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit(&SimulatedBackend) {
                log::warn!("Admission inquiry not submitted: {}", e);
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <TextInput
                    label="Parent's Name"
                    name="parent-name"
                    input_type="text"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.fields().parent_name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().parent_name = value))
                />
                <EmailInput
                    name="admission-email"
                    value=Signal::derive(move || form.with(|f| f.fields().email.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().email = value))
                />
            </div>
            <TextInput
                label="Phone Number"
                name="phone"
                input_type="tel"
                required=true
                value=Signal::derive(move || form.with(|f| f.fields().phone.clone()))
                on_input=Callback::new(move |value: String| form.update(|f| f.fields_mut().phone = value))
            />
            <GradeSelect
                value=Signal::derive(move || form.with(|f| f.fields().grade))
                on_change=Callback::new(move |grade: Option<Grade>| form.update(|f| f.fields_mut().grade = grade))
            />
            <Button loading=false>
                "Send Application"
            </Button>
        </form>
    }
}

#[component]
fn Confirmation(form: RwSignal<AdmissionForm>) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="bg-green-100 dark:bg-green-900/30 text-vibrant-green text-5xl w-24 h-24 rounded-full flex items-center justify-center mx-auto mb-8 shadow-inner">
                "✓"
            </div>
            <h4 class="text-3xl font-bold text-navy dark:text-white mb-3">{CONFIRMATION_TITLE}</h4>
            <p class="text-gray-600 dark:text-gray-400 text-lg">{CONFIRMATION_BODY}</p>
            <button
                type="button"
                class="mt-10 text-navy dark:text-warm-gold font-bold underline hover:text-vibrant-green transition-colors"
                on:click=move |_| form.update(|f| f.submit_another())
            >
                "Submit another inquiry"
            </button>
        </div>
    }
}

#[component]
pub fn AdmissionsPage() -> impl IntoView {
    let form = RwSignal::new(AdmissionForm::new());

    view! {
        <div class="pt-24 dark:bg-slate-900 transition-colors">
            <Banner banner=ADMISSIONS_BANNER/>

            <section class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-2 gap-20 items-start">
                <div>
                    <h2 class="text-4xl font-serif font-bold text-navy dark:text-white mb-12">"The Journey to SGN"</h2>
                    <div class="space-y-16">
                        {ADMISSION_STEPS
                            .into_iter()
                            .map(|step| {
                                view! {
                                    <div class="flex items-start group">
                                        <div class="bg-navy dark:bg-slate-800 text-white text-2xl font-extrabold w-16 h-16 flex items-center justify-center
                                                    rounded-[1.5rem] flex-shrink-0 mr-8 group-hover:bg-vibrant-green transition-colors shadow-lg">
                                            {step.step}
                                        </div>
                                        <div class="pt-2">
                                            <h3 class="text-2xl font-bold text-navy dark:text-warm-gold mb-3">{step.title}</h3>
                                            <p class="text-gray-500 dark:text-gray-400 leading-relaxed text-lg">{step.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-white dark:bg-slate-800 p-12 rounded-[3.5rem] border border-gray-100 dark:border-slate-700 sticky top-32">
                    <h3 class="text-3xl font-serif font-bold text-navy dark:text-white mb-10">"Admission Inquiry"</h3>
                    <Show
                        when=move || form.with(|f| f.is_submitted())
                        fallback=move || view! { <InquiryForm form=form/> }
                    >
                        <Confirmation form=form/>
                    </Show>
                </div>
            </section>
        </div>
    }
}
