use leptos::prelude::*;

use crate::content::{FACILITIES, FACILITIES_BANNER};
use crate::frontend::components::{Banner, FeatureCard};

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    view! {
        <div class="pt-24 dark:bg-slate-900 transition-colors">
            <Banner banner=FACILITIES_BANNER/>
            <section class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10">
                {FACILITIES.into_iter().map(|card| view! { <FeatureCard card=card/> }).collect_view()}
            </section>
        </div>
    }
}
