use leptos::prelude::*;

use crate::content::{ACADEMICS_BANNER, CALENDAR, PATHWAYS};
use crate::frontend::components::Banner;

#[component]
pub fn AcademicsPage() -> impl IntoView {
    view! {
        <div class="pt-24 dark:bg-slate-900 transition-colors">
            <Banner banner=ACADEMICS_BANNER/>

            <section class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-3 gap-16">
                <div class="lg:col-span-2">
                    <h2 class="text-4xl font-serif font-bold text-navy dark:text-white mb-10">"Curriculum Pathways"</h2>
                    <div class="space-y-8">
                        {PATHWAYS
                            .into_iter()
                            .map(|pathway| {
                                view! {
                                    <div class="p-8 border-l-8 border-warm-gold bg-off-white dark:bg-slate-800 rounded-r-[2rem] shadow-sm">
                                        <h3 class="text-2xl font-bold text-navy dark:text-warm-gold mb-3">{pathway.level}</h3>
                                        <p class="text-gray-600 dark:text-gray-300 leading-relaxed text-lg">{pathway.focus}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-navy dark:bg-slate-800 p-10 rounded-[3rem] text-white shadow-2xl h-fit sticky top-32">
                    <h3 class="text-3xl font-serif font-bold mb-8">"🕒 Academic Calendar"</h3>
                    <div class="space-y-6">
                        {CALENDAR
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="flex justify-between items-center border-b border-white/10 pb-4">
                                        <span class="text-gray-300 font-medium">{entry.label}</span>
                                        <span class="font-bold text-warm-gold text-lg">{entry.date}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <button
                            type="button"
                            class="w-full mt-10 bg-white dark:bg-vibrant-green text-navy dark:text-white py-4 rounded-2xl font-extrabold text-lg hover:bg-warm-gold transition-all"
                        >
                            "Download Full Schedule ›"
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}
