use leptos::prelude::*;

/// Form submit button. Shows a spinner and `loading_text` while `loading` is set.
#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] loading_text: Option<&'static str>,
) -> impl IntoView {
    let classes = "w-full mt-4 py-5 rounded-2xl font-bold text-xl flex items-center justify-center transition-all group \
        bg-navy dark:bg-vibrant-green text-white hover:bg-navy/90 dark:hover:bg-green-600 shadow-[0_20px_40px_rgba(30,58,138,0.2)] \
        disabled:opacity-70 disabled:cursor-not-allowed";

    let loading_text = loading_text.unwrap_or("Loading...");

    view! {
        <button type="submit" class=classes disabled=move || loading.get()>
            <Show when=move || loading.get() fallback=move || children()>
                <span class="w-6 h-6 mr-2 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </Show>
        </button>
    }
}
