pub mod browser;
pub mod components;
pub mod pages;

use browser::{DocumentStyleScope, LocalThemeStore};
use components::{Footer, Navbar};
use leptos::prelude::*;
use leptos_meta::*;
use pages::*;

use crate::config::SiteConfig;
use crate::content::SCHOOL_NAME;
use crate::models::Page;
use crate::state::{Navigator, ThemeController};

fn render_page(page: Page, on_navigate: Callback<Page>) -> impl IntoView {
    match page {
        Page::Home => view! { <HomePage on_navigate=on_navigate/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Academics => view! { <AcademicsPage/> }.into_any(),
        Page::Admissions => view! { <AdmissionsPage/> }.into_any(),
        Page::Facilities => view! { <FacilitiesPage/> }.into_any(),
        Page::Gallery => view! { <GalleryPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::SuccessStories => view! { <SuccessStoriesPage/> }.into_any(),
    }
}

/// Application root. Owns the current page and the theme; everything below
/// receives them as props or callbacks.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let theme_controller = StoredValue::new(ThemeController::init(
        LocalThemeStore::new(config.theme_storage_key.clone()),
        DocumentStyleScope,
    ));
    let (theme, set_theme) = signal(theme_controller.with_value(|c| c.theme()));
    let toggle_theme = Callback::new(move |_: ()| {
        theme_controller.update_value(|c| {
            c.toggle();
        });
        set_theme.set(theme_controller.with_value(|c| c.theme()));
    });

    let navigator = RwSignal::new(Navigator::new());
    let page = Memo::new(move |_| navigator.with(|n| n.current()));
    let navigate = Callback::new(move |target: Page| {
        navigator.update(|n| {
            n.navigate_to(target);
        });
    });

    Effect::new(move |_| {
        log::debug!("Showing the {} page", page.get());
        browser::scroll_to_top();
    });

    provide_context(config);

    view! {
        <Title text=SCHOOL_NAME/>

        <div
            class="min-h-screen selection:bg-vibrant-green selection:text-white transition-colors duration-300"
            class:dark=move || theme.get().is_dark()
        >
            <div class="bg-off-white dark:bg-slate-900 transition-colors duration-300">
                <Navbar navigator=navigator theme=theme on_toggle_theme=toggle_theme/>
                <main>{move || render_page(page.get(), navigate)}</main>
                <Footer on_navigate=navigate/>
            </div>
        </div>
    }
}
