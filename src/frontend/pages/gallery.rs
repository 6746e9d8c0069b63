use leptos::prelude::*;

use crate::content::{GALLERY, GALLERY_BANNER};
use crate::frontend::components::Banner;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="pt-24 dark:bg-slate-900 transition-colors">
            <Banner banner=GALLERY_BANNER/>
            <section class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {GALLERY
                    .into_iter()
                    .map(|image| {
                        view! {
                            <div class="relative rounded-[2rem] overflow-hidden group shadow-xl dark:shadow-none h-80">
                                <img
                                    src=image.src
                                    alt=image.title
                                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                                />
                                <div class="absolute inset-0 bg-navy/60 opacity-0 group-hover:opacity-100 transition-opacity
                                            flex flex-col items-center justify-center p-6 text-center">
                                    <h4 class="text-white text-xl font-bold mb-2">{image.title}</h4>
                                    <button type="button" class="bg-warm-gold text-navy px-6 py-2 rounded-full font-bold text-sm">
                                        "View Larger"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
