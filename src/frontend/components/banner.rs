use leptos::prelude::*;

use crate::content::PageBanner;

/// Coloured heading strip opening each inner page.
#[component]
pub fn Banner(banner: PageBanner) -> impl IntoView {
    view! {
        <section class=format!("py-24 text-center relative overflow-hidden {}", banner.class)>
            <div class="absolute inset-0 bg-black/5"></div>
            <h1 class="text-5xl md:text-6xl font-serif font-bold mb-6 relative z-10">{banner.title}</h1>
            <p class="max-w-2xl mx-auto text-lg md:text-xl font-medium opacity-90 relative z-10 px-4">
                {banner.subtitle}
            </p>
        </section>
    }
}
