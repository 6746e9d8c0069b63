use leptos::prelude::*;

use crate::models::Theme;

#[component]
pub fn ThemeToggle(theme: ReadSignal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-label="Toggle Theme"
            class="p-2.5 rounded-full bg-white/10 hover:bg-white/20 transition-all text-white border border-white/10 shadow-lg active:scale-90"
            on:click=move |_| on_toggle.run(())
        >
            {move || match theme.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}
