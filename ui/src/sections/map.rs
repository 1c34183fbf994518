use content::data::{destinations, find_destination, find_post};
use content::map::{countries_visited, routes};
use content::{DestinationId, MapSelection, Section};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::SectionHeading;

#[function_component]
pub fn MapSection() -> Html {
    let selection = use_state(MapSelection::new);
    let places = destinations();

    let select = |id: DestinationId| {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selection).clone();
            next.select(id);
            selection.set(next);
        })
    };
    let close = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| selection.set(MapSelection::new()))
    };

    let route_lines = routes(places)
        .map(|(from, to)| {
            html! {
                <line
                    key={format!("{}-{}", from.id, to.id)}
                    x1={from.position.left.to_string()}
                    y1={from.position.top.to_string()}
                    x2={to.position.left.to_string()}
                    y2={to.position.top.to_string()}
                    stroke="#fbbf24"
                    stroke-width="0.4"
                    stroke-dasharray="1.5 1"
                />
            }
        })
        .collect::<Html>();

    let pins = places
        .iter()
        .map(|place| {
            let active = selection.is_selected(&place.id);
            html! {
                <button
                    key={place.id.0}
                    onclick={select(place.id)}
                    style={format!(
                        "left: {}%; top: {}%",
                        place.position.left, place.position.top
                    )}
                    class={classes!(
                        "absolute", "-translate-x-1/2", "-translate-y-1/2",
                        "w-6", "h-6", "rounded-full", "border-2", "border-white",
                        "shadow-lg", "transition-transform",
                        if active { "bg-red-500 scale-125" } else { "bg-amber-400 hover:scale-125" }
                    )}
                    title={place.name}
                    aria-label={format!("{}, {}", place.name, place.country)}
                    aria-pressed={active.to_string()}
                />
            }
        })
        .collect::<Html>();

    let detail = selection
        .current()
        .and_then(|id| find_destination(*id))
        .map(|place| {
            let story = place.blog_post.and_then(|id| find_post(id.0));
            html! {
                <div class="absolute bottom-4 left-4 right-4 md:left-auto md:w-80 p-6 rounded-2xl bg-white dark:bg-gray-800 shadow-2xl space-y-3">
                    <button onclick={close.clone()} class="float-right text-gray-500 hover:text-gray-900 dark:hover:text-white" aria-label="Close">
                        {"✕"}
                    </button>
                    <img src={place.image} alt={place.name} class="w-full h-32 object-cover rounded-lg" />
                    <h3 class="text-lg font-bold text-gray-900 dark:text-white">
                        {format!("{}, {}", place.name, place.country)}
                    </h3>
                    <p class="text-sm text-gray-600 dark:text-gray-300">{place.description}</p>
                    <p class="text-xs text-gray-500 dark:text-gray-400">{"Visited "}{place.visited}</p>
                    if let Some(story) = story {
                        <Link<Route>
                            to={Route::Post { id: story.id.to_string() }}
                            classes="inline-block text-amber-500 font-medium hover:underline"
                        >
                            {"Read the story →"}
                        </Link<Route>>
                    }
                </div>
            }
        });

    let stats = [
        (places.len().to_string(), "Destinations"),
        (countries_visited(places).to_string(), "Countries"),
        (routes(places).count().to_string(), "Journeys"),
    ];

    html! {
        <section id={Section::Map.anchor()} class="py-20 bg-amber-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Where We've"
                    accent="Been"
                    subtitle="Click a pin to see what we found there."
                />
                <div class="relative h-[28rem] rounded-2xl overflow-hidden bg-sky-100 dark:bg-gray-700 shadow-inner">
                    <svg class="absolute inset-0 w-full h-full" viewBox="0 0 100 100" preserveAspectRatio="none">
                        {route_lines}
                    </svg>
                    {pins}
                    {detail}
                </div>
                <div class="grid grid-cols-3 gap-6 mt-10">
                    { for stats.into_iter().map(|(figure, label)| html! {
                        <div key={label} class="text-center p-4 rounded-xl bg-white dark:bg-gray-700 shadow">
                            <div class="text-3xl font-bold text-amber-500">{figure}</div>
                            <div class="text-sm text-gray-600 dark:text-gray-400">{label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
