use leptos::prelude::*;

use crate::content::{SPOTLIGHT_INTRO, STUDENTS};

/// "Student Spotlights" section, shown on the home page and on its own.
#[component]
pub fn SuccessStories() -> impl IntoView {
    view! {
        <section id="success-stories" class="bg-off-white dark:bg-slate-950 py-24 relative transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-20">
                    <h2 class="text-navy dark:text-white font-serif text-4xl md:text-5xl font-bold mb-4">
                        "Student Spotlights"
                    </h2>
                    <div class="w-24 h-1.5 bg-vibrant-green mx-auto mb-8 rounded-full"></div>
                    <p class="text-gray-600 dark:text-gray-300 max-w-2xl mx-auto text-lg leading-relaxed font-medium">
                        {SPOTLIGHT_INTRO}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-10">
                    {STUDENTS
                        .into_iter()
                        .map(|student| {
                            view! {
                                <div class="bg-white dark:bg-slate-800 rounded-[2rem] overflow-hidden border border-gray-100 dark:border-slate-700
                                            group hover:-translate-y-3 transition-all">
                                    <div class="h-72 overflow-hidden relative">
                                        <img
                                            src=student.img
                                            alt=student.name
                                            class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                                        />
                                        <span class="absolute top-5 right-5 bg-warm-gold text-navy text-[10px] font-bold px-4 py-1.5 rounded-full uppercase tracking-widest shadow-lg">
                                            {student.achievement}
                                        </span>
                                    </div>
                                    <div class="p-8">
                                        <h3 class="text-2xl font-bold text-navy dark:text-warm-gold mb-1 group-hover:text-vibrant-green transition-colors">
                                            {student.name}
                                        </h3>
                                        <p class="text-gray-500 dark:text-gray-400 text-xs font-bold mb-6 tracking-widest uppercase">
                                            {student.role}
                                        </p>
                                        <p class="text-gray-600 dark:text-gray-300 text-sm leading-relaxed italic opacity-90">
                                            "\""{student.bio}"\""
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SuccessStoriesPage() -> impl IntoView {
    view! {
        <div class="pt-10 dark:bg-slate-900 transition-colors">
            <SuccessStories/>
        </div>
    }
}
