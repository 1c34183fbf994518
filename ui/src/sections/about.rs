use content::Section;
use content::data::ACHIEVEMENTS;
use yew::prelude::*;

use crate::components::SectionHeading;

const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=800";

#[function_component]
pub fn AboutSection() -> Html {
    html! {
        <section id={Section::About.anchor()} class="py-20 bg-amber-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading lead="Meet" accent="WanderDuo" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <img src={ABOUT_IMAGE} alt="The two of us on the road" class="rounded-2xl shadow-2xl w-full h-96 object-cover" />
                    <div class="space-y-6 text-lg text-gray-700 dark:text-gray-300">
                        <p>
                            {"We quit our desk jobs to see the world on a shoestring, and never looked back. \
                              Every story here comes with the real numbers behind it."}
                        </p>
                        <p>
                            {"Now we help fellow travelers plan trips that are rich in experience and light on the wallet."}
                        </p>
                        <div class="grid grid-cols-2 gap-6 pt-4">
                            { for ACHIEVEMENTS.iter().map(|(figure, label)| html! {
                                <div key={*label} class="p-4 rounded-xl bg-white dark:bg-gray-700 shadow text-center">
                                    <div class="text-3xl font-bold text-amber-500">{*figure}</div>
                                    <div class="text-sm text-gray-600 dark:text-gray-400">{*label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
