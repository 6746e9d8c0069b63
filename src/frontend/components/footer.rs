use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::content::{COPYRIGHT, FOOTER_BLURB, FOOTER_CONTACTS, QUICK_LINKS, SOCIAL_LINKS};
use crate::models::Page;

#[component]
pub fn Footer(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <footer class="bg-navy text-white pt-20 pb-10 border-t border-white/5 relative z-10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-4 gap-12">
                <div>
                    <p class="flex items-center mb-6 font-serif text-2xl font-bold">
                        <span class="text-warm-gold text-4xl mr-3">"🎓"</span>
                        "SGN International"
                    </p>
                    <p class="text-gray-300 text-sm mb-6 leading-relaxed opacity-80">{FOOTER_BLURB}</p>
                    <div class="flex space-x-5 text-sm">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|name| {
                                view! {
                                    <span class="cursor-pointer opacity-80 hover:opacity-100 hover:text-vibrant-green transition-colors">
                                        {name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h3 class="font-serif text-xl font-semibold mb-6 text-warm-gold">"Quick Links"</h3>
                    <ul class="space-y-3 text-gray-300 text-sm">
                        {QUICK_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="opacity-80 hover:opacity-100 hover:text-vibrant-green transition-colors"
                                            on:click=move |_| on_navigate.run(link.target)
                                        >
                                            "› "{link.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="font-serif text-xl font-semibold mb-6 text-warm-gold">"Connect"</h3>
                    <ul class="space-y-4 text-gray-300 text-sm">
                        {FOOTER_CONTACTS
                            .into_iter()
                            .map(|detail| {
                                view! {
                                    <li class="flex items-start">
                                        <span class="mr-3" title=detail.title>{detail.icon}</span>
                                        <span class="opacity-80">{detail.value}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="font-serif text-xl font-semibold mb-6 text-warm-gold">"Newsletter"</h3>
                    <p class="text-gray-300 text-sm mb-4 opacity-80">"Join our mailing list for updates."</p>
                    // Cosmetic only, nothing is sent.
                    <form class="flex" on:submit=|ev: SubmitEvent| ev.prevent_default()>
                        <input
                            type="email"
                            placeholder="Email address"
                            class="bg-white/10 border border-white/20 px-4 py-2.5 rounded-l-xl w-full text-sm
                                   placeholder:text-gray-500 focus:outline-none focus:border-vibrant-green transition-colors"
                        />
                        <button class="bg-vibrant-green px-5 py-2.5 rounded-r-xl hover:bg-green-600 transition-colors font-bold">
                            "Join"
                        </button>
                    </form>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-16 pt-8 border-t border-white/5 text-center text-xs text-gray-500">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
