use leptos::prelude::*;

use crate::content::Card;

#[component]
pub fn FeatureCard(card: Card, #[prop(optional)] centered: bool) -> impl IntoView {
    let layout = if centered { "text-center" } else { "" };

    view! {
        <div class=format!(
            "group p-10 rounded-[2.5rem] bg-white dark:bg-slate-800 border border-gray-100 dark:border-slate-700
             shadow-[0_10px_30px_rgba(0,0,0,0.03)] hover:border-warm-gold/30 transition-all {}",
            layout,
        )>
            <span class="text-5xl mb-8 inline-block group-hover:scale-110 transition-transform duration-300">
                {card.icon}
            </span>
            <h3 class="text-2xl font-bold text-navy dark:text-white mb-4">{card.title}</h3>
            <p class="text-gray-500 dark:text-gray-400 leading-relaxed font-medium">{card.desc}</p>
        </div>
    }
}
