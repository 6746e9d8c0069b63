use leptos::ev;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::frontend::browser;
use crate::frontend::components::ThemeToggle;
use crate::models::{Page, Theme};
use crate::state::Navigator;

fn link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-medium py-1 text-warm-gold border-b-2 border-warm-gold"
    } else {
        "text-sm font-medium py-1 text-white hover:text-vibrant-green transition-colors"
    }
}

#[component]
pub fn Navbar(
    navigator: RwSignal<Navigator>,
    theme: ReadSignal<Theme>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let threshold = f64::from(
        use_context::<SiteConfig>()
            .unwrap_or_default()
            .scroll_threshold_px,
    );
    let (scrolled, set_scrolled) = signal(false);
    let listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(browser::scroll_y() > threshold);
    });
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            navigator.update(|n| n.close_menu());
        }
    });
    on_cleanup(move || {
        listener.remove();
        escape.remove();
    });

    let go = move |page: Page| {
        navigator.update(|n| {
            n.navigate_to(page);
        });
    };
    let menu_open = move || navigator.with(|n| n.is_menu_open());

    view! {
        <nav class=move || {
            format!(
                "fixed w-full z-50 transition-all duration-300 border-b border-white/5 {}",
                if scrolled.get() {
                    "bg-navy/95 py-2 shadow-xl backdrop-blur-md"
                } else {
                    "bg-navy py-4 shadow-lg"
                },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center">
                <button type="button" class="flex items-center" on:click=move |_| go(Page::Home)>
                    <span class="bg-white p-2 rounded-full mr-3 shadow-inner text-2xl">"🎓"</span>
                    <span class="text-left">
                        <span class="block text-white font-serif text-xl font-bold leading-none tracking-tight">"SGN"</span>
                        <span class="block text-white text-[10px] tracking-widest uppercase opacity-80">
                            "International School"
                        </span>
                    </span>
                </button>

                <div class="hidden md:flex items-center space-x-6">
                    {Page::NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <button
                                    type="button"
                                    class=move || link_class(navigator.with(|n| n.is_active(link)))
                                    on:click=move |_| go(link)
                                >
                                    {link.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <div class="h-6 w-[1px] bg-white/10 mx-2"></div>
                    <ThemeToggle theme=theme on_toggle=on_toggle_theme/>
                    <button
                        type="button"
                        class="bg-vibrant-green hover:bg-green-600 text-white px-6 py-2.5 rounded-full text-sm font-bold transition-all active:scale-95"
                        on:click=move |_| go(Page::Admissions)
                    >
                        "Apply Now"
                    </button>
                </div>

                <div class="md:hidden flex items-center space-x-4">
                    <ThemeToggle theme=theme on_toggle=on_toggle_theme/>
                    <button
                        type="button"
                        aria-label="Toggle Menu"
                        class="text-white text-2xl p-2 hover:bg-white/10 rounded-lg transition-colors"
                        on:click=move |_| navigator.update(|n| n.toggle_menu())
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="md:hidden bg-navy absolute w-full left-0 top-full border-t border-white/5 px-4 py-8 shadow-2xl">
                    <div class="flex flex-col space-y-6">
                        {Page::NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if navigator.with(|n| n.is_active(link)) {
                                                "text-left text-lg font-semibold text-warm-gold"
                                            } else {
                                                "text-left text-lg font-semibold text-white"
                                            }
                                        }
                                        on:click=move |_| go(link)
                                    >
                                        {link.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            type="button"
                            class="w-full bg-vibrant-green text-white py-4 rounded-xl font-bold text-lg shadow-lg active:scale-95 transition-transform"
                            on:click=move |_| go(Page::Admissions)
                        >
                            "Admissions Open"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
