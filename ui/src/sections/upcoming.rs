use content::data::upcoming_trips;
use content::{Section, TripStatus};
use yew::prelude::*;

use crate::anchors::use_scroll_to;
use crate::components::SectionHeading;

fn status_classes(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Booked => "bg-green-500 text-white",
        TripStatus::Planning => "bg-amber-400 text-gray-900",
        TripStatus::Researching => "bg-sky-500 text-white",
    }
}

#[function_component]
pub fn UpcomingSection() -> Html {
    let scroll_to = use_scroll_to();
    let follow_along = scroll_to.reform(|_: MouseEvent| Section::Newsletter);

    html! {
        <section id={Section::Upcoming.anchor()} class="py-20 bg-white dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Upcoming"
                    accent="Adventures"
                    subtitle="Where we are headed next."
                />
                <div class="grid md:grid-cols-3 gap-8">
                    { for upcoming_trips().iter().map(|trip| html! {
                        <article key={trip.destination} class="rounded-2xl overflow-hidden shadow-lg bg-white dark:bg-gray-800">
                            <div class="relative h-48">
                                <img src={trip.image} alt={trip.destination} class="w-full h-full object-cover" />
                                <span class={classes!(
                                    "absolute", "top-4", "right-4", "px-3", "py-1",
                                    "rounded-full", "text-sm", "font-medium",
                                    status_classes(trip.status)
                                )}>
                                    {trip.status.to_string()}
                                </span>
                            </div>
                            <div class="p-6 space-y-2">
                                <h3 class="text-xl font-bold text-gray-900 dark:text-white">{trip.destination}</h3>
                                <p class="text-sm text-amber-500">{"📅 "}{trip.dates}</p>
                                <p class="text-gray-600 dark:text-gray-300">{trip.description}</p>
                            </div>
                        </article>
                    }) }
                </div>
                <div class="text-center mt-12">
                    <button
                        onclick={follow_along}
                        class="px-8 py-3 rounded-full font-semibold bg-amber-400 text-gray-900 hover:bg-amber-300 shadow-md"
                    >
                        {"Follow Our Journey"}
                    </button>
                </div>
            </div>
        </section>
    }
}
