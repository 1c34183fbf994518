use content::Section;
use content::data::testimonials;
use yew::prelude::*;

use crate::components::SectionHeading;

const MAX_RATING: u8 = 5;

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING);
    "★".repeat(filled.into()) + &"☆".repeat((MAX_RATING - filled).into())
}

#[function_component]
pub fn TestimonialsSection() -> Html {
    html! {
        <section id={Section::Testimonials.anchor()} class="py-20 bg-white dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading lead="Happy" accent="Travelers" />
                <div class="grid md:grid-cols-3 gap-8">
                    { for testimonials().iter().map(|t| html! {
                        <figure key={t.name} class="p-8 rounded-2xl bg-amber-50 dark:bg-gray-800 shadow-lg space-y-4">
                            <div class="text-amber-400 text-xl" aria-label={format!("{} out of {MAX_RATING}", t.rating)}>
                                {stars(t.rating)}
                            </div>
                            <blockquote class="text-gray-700 dark:text-gray-300 italic">
                                {format!("\u{201c}{}\u{201d}", t.text)}
                            </blockquote>
                            <figcaption class="flex items-center gap-4">
                                <img src={t.image} alt={t.name} class="w-12 h-12 rounded-full object-cover" />
                                <div>
                                    <p class="font-semibold text-gray-900 dark:text-white">{t.name}</p>
                                    <p class="text-sm text-gray-500 dark:text-gray-400">{t.location}</p>
                                </div>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}
