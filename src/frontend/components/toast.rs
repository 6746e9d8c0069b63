use leptos::prelude::*;

/// Success banner pinned to the top-right corner until dismissed.
#[component]
pub fn Toast(#[prop(into)] message: String, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div
            role="status"
            class="fixed top-24 right-6 z-[100] bg-vibrant-green text-white px-6 py-4 rounded-xl shadow-2xl
                   flex items-center space-x-3 border border-white/20"
        >
            <span class="bg-white/20 px-2 py-1 rounded-full">"✓"</span>
            <span class="font-semibold text-sm md:text-base">{message}</span>
            <button
                type="button"
                aria-label="Dismiss"
                class="ml-4 hover:opacity-70 transition-opacity p-1"
                on:click=move |_| on_dismiss.run(())
            >
                "✕"
            </button>
        </div>
    }
}
