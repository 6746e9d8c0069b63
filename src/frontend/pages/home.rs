use leptos::prelude::*;

use crate::content::{
    HERO_BADGE, HERO_IMAGE, HERO_TAGLINE, PROGRAMS, PROGRAMS_INTRO, QUICK_STATS,
};
use crate::frontend::components::FeatureCard;
use crate::frontend::pages::SuccessStories;
use crate::models::Page;

#[component]
fn Hero(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center overflow-hidden">
            <div class="absolute inset-0">
                <img src=HERO_IMAGE alt="School Campus" class="w-full h-full object-cover"/>
                <div class="absolute inset-0 bg-navy/60 backdrop-blur-[2px]"></div>
            </div>
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-20">
                <div class="max-w-2xl text-white">
                    <div class="inline-flex items-center space-x-2 bg-white/10 backdrop-blur-md px-4 py-2 rounded-full border border-white/20 mb-6">
                        <span class="w-2 h-2 rounded-full bg-vibrant-green animate-pulse"></span>
                        <span class="text-vibrant-green text-xs font-bold tracking-widest uppercase">{HERO_BADGE}</span>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold font-serif mb-6 leading-tight">
                        "Nurturing "<span class="text-warm-gold">"Global Leaders"</span>" for Tomorrow."
                    </h1>
                    <p class="text-lg md:text-xl text-gray-200 mb-10 leading-relaxed font-medium">{HERO_TAGLINE}</p>
                    <div class="flex flex-col sm:flex-row gap-5">
                        <button
                            type="button"
                            class="bg-vibrant-green text-white px-10 py-4 rounded-full font-bold text-lg shadow-2xl hover:bg-green-600 transition-all"
                            on:click=move |_| on_navigate.run(Page::Admissions)
                        >
                            "Apply for Admission ›"
                        </button>
                        <button
                            type="button"
                            class="bg-white/10 backdrop-blur-md border border-white/30 text-white px-10 py-4 rounded-full font-bold text-lg hover:bg-white/20 transition-all"
                        >
                            "Virtual Tour"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuickStats() -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-slate-900 py-20 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-2 md:grid-cols-4 gap-8">
                {QUICK_STATS
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="text-center group">
                                <div class="text-4xl flex justify-center mb-5 group-hover:scale-110 transition-transform duration-300">
                                    {stat.icon}
                                </div>
                                <div class="text-4xl md:text-5xl font-bold text-navy dark:text-white mb-2 tracking-tight">
                                    {stat.value}
                                </div>
                                <div class="text-gray-500 dark:text-gray-400 text-[10px] font-bold uppercase tracking-[0.2em]">
                                    {stat.label}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeaturedPrograms() -> impl IntoView {
    view! {
        <section class="py-24 bg-white dark:bg-slate-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-2xl mb-20">
                    <h2 class="text-navy dark:text-white font-serif text-4xl md:text-5xl font-bold mb-6">
                        "Programs of Excellence"
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400 text-lg leading-relaxed">{PROGRAMS_INTRO}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    {PROGRAMS.into_iter().map(|card| view! { <FeatureCard card=card/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <Hero on_navigate=on_navigate/>
        <QuickStats/>
        <SuccessStories/>
        <FeaturedPrograms/>

        // Closing call to action
        <section class="bg-navy py-24 relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 text-center relative z-10">
                <h2 class="text-white font-serif text-4xl md:text-5xl font-bold mb-10 leading-tight">
                    "Empower Your Child with a"<br/>
                    <span class="text-warm-gold">"Global Perspective."</span>
                </h2>
                <div class="flex flex-col sm:flex-row justify-center gap-6">
                    <button
                        type="button"
                        class="bg-vibrant-green text-white px-12 py-5 rounded-full font-bold text-2xl hover:bg-green-600 transition-all shadow-2xl"
                        on:click=move |_| on_navigate.run(Page::Admissions)
                    >
                        "Apply Now"
                    </button>
                    <button
                        type="button"
                        class="bg-transparent border-2 border-white/30 text-white px-12 py-5 rounded-full font-bold text-2xl hover:bg-white hover:text-navy transition-all"
                        on:click=move |_| on_navigate.run(Page::Contact)
                    >
                        "Contact Office"
                    </button>
                </div>
            </div>
        </section>
    }
}
