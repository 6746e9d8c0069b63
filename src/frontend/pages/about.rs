//! About page: principal's message and core values

use leptos::prelude::*;

use crate::content::{
    ABOUT_BANNER, CORE_VALUES, PRINCIPAL_IMAGE, PRINCIPAL_MESSAGE, PRINCIPAL_NAME, PRINCIPAL_TITLE,
};
use crate::frontend::components::{Banner, FeatureCard};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="pt-24 dark:bg-slate-900 transition-colors">
            <Banner banner=ABOUT_BANNER/>

            <section class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-2 gap-20 items-center">
                <div class="order-2 md:order-1">
                    <h2 class="text-4xl font-serif font-bold text-navy dark:text-white mb-8">"Our Principal's Message"</h2>
                    <div class="w-16 h-1 bg-warm-gold mb-8 rounded-full"></div>
                    <p class="text-gray-600 dark:text-gray-300 text-lg italic mb-10 leading-relaxed">
                        "\""{PRINCIPAL_MESSAGE}"\""
                    </p>
                    <p class="font-bold text-navy dark:text-warm-gold text-xl">{PRINCIPAL_NAME}</p>
                    <p class="text-vibrant-green font-bold text-sm tracking-widest uppercase mt-1">{PRINCIPAL_TITLE}</p>
                </div>
                <div class="order-1 md:order-2 rounded-2xl overflow-hidden shadow-2xl">
                    <img src=PRINCIPAL_IMAGE alt="Principal"/>
                </div>
            </section>

            <section class="bg-off-white dark:bg-slate-950 py-24 border-y border-gray-100 dark:border-slate-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-center text-4xl font-serif font-bold text-navy dark:text-white mb-20">
                        "Our Core Philosophy"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                        {CORE_VALUES
                            .into_iter()
                            .map(|card| view! { <FeatureCard card=card centered=true/> })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
