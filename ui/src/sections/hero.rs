use content::Section;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::anchors::use_scroll_to;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=1920";

#[function_component]
pub fn HeroSection() -> Html {
    let scroll_to = use_scroll_to();
    let read_stories = scroll_to.reform(|_: MouseEvent| Section::Stories);

    html! {
        <section
            id={Section::Hero.anchor()}
            class="relative h-[90vh] flex items-center justify-center overflow-hidden"
        >
            <img src={HERO_IMAGE} alt="Travelers overlooking mountains" class="absolute inset-0 w-full h-full object-cover" />
            <div class="absolute inset-0 bg-gradient-to-b from-black/60 via-black/40 to-black/70"></div>
            <div class="relative z-10 text-center px-4 max-w-4xl">
                <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                    {"Explore the World "}
                    <span class="text-amber-400">{"Together"}</span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-200 mb-10">
                    {"Budget-friendly adventures, honest stories and custom itineraries from a couple who have been there."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Link<Route> to={Route::Itinerary} classes="px-8 py-4 rounded-full text-lg font-semibold bg-amber-400 text-gray-900 hover:bg-amber-300 shadow-xl transition-colors">
                        {"Plan Your Adventure"}
                    </Link<Route>>
                    <button
                        onclick={read_stories}
                        class="px-8 py-4 rounded-full text-lg font-semibold border-2 border-white text-white hover:bg-white hover:text-gray-900 transition-colors"
                    >
                        {"Read Our Stories"}
                    </button>
                </div>
            </div>
        </section>
    }
}
