use leptos::prelude::*;

use crate::models::Grade;

const LABEL_CLASS: &str = "block text-xs font-bold text-gray-400 uppercase tracking-widest ml-2";
const FIELD_CLASS: &str = "w-full p-4 bg-white dark:bg-slate-900 border border-transparent dark:border-slate-700
                           rounded-2xl shadow-sm text-navy dark:text-white
                           focus:outline-none focus:border-navy dark:focus:border-vibrant-green transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=name.clone() class=LABEL_CLASS>{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASS
            />
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label="Email Address"
            name=name
            input_type="email"
            required=true
            value=value
            on_input=on_input
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional)] rows: Option<u32>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=name.clone() class=LABEL_CLASS>{label}</label>
            <textarea
                id=name.clone()
                name=name
                rows=rows.unwrap_or(5).to_string()
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASS
            ></textarea>
        </div>
    }
}

/// Grade picker. The empty placeholder option keeps `required` meaningful.
#[component]
pub fn GradeSelect(
    #[prop(into)] value: Signal<Option<Grade>>,
    on_change: Callback<Option<Grade>>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for="grade" class=LABEL_CLASS>"Grade Seeking"</label>
            <select
                id="grade"
                name="grade"
                required=true
                prop:value=move || value.get().map(|grade| grade.as_str()).unwrap_or_default()
                on:change=move |ev| on_change.run(event_target_value(&ev).parse::<Grade>().ok())
                class=format!("{} appearance-none cursor-pointer", FIELD_CLASS)
            >
                <option value="">"Select Grade"</option>
                {Grade::ALL
                    .into_iter()
                    .map(|grade| view! { <option value=grade.as_str()>{grade.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
