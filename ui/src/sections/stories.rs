use content::data::posts;
use content::{Category, Section, StoryFilter, categories};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{SectionHeading, StoryCard};

#[function_component]
pub fn StoriesSection() -> Html {
    let filter = use_state(StoryFilter::default);
    let category_options = use_memo((), |_| categories(posts()));

    let on_query = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(StoryFilter {
                query: input.value(),
                ..(*filter).clone()
            });
        })
    };

    let on_category = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(StoryFilter {
                category: Category::parse(&select.value()),
                ..(*filter).clone()
            });
        })
    };

    let clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(StoryFilter::default()))
    };

    let visible = filter.apply(posts());

    html! {
        <section id={Section::Stories.anchor()} class="py-20 bg-white dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Travel"
                    accent="Stories"
                    subtitle="Real trips, real budgets, and everything we learned along the way."
                />

                <div class="flex flex-col md:flex-row gap-4 mb-12">
                    <input
                        type="search"
                        placeholder="Search by destination, title or tag..."
                        value={filter.query.clone()}
                        oninput={on_query}
                        class="flex-1 px-5 py-3 rounded-full border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-amber-400"
                        aria-label="Search stories"
                    />
                    <select
                        onchange={on_category}
                        class="px-5 py-3 rounded-full border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800"
                        aria-label="Filter by category"
                    >
                        { for category_options.iter().map(|category| html! {
                            <option
                                key={category.label().to_string()}
                                value={category.label().to_string()}
                                selected={*category == filter.category}
                            >
                                {category.label()}
                            </option>
                        }) }
                    </select>
                </div>

                if visible.is_empty() {
                    <div class="text-center py-16 space-y-4">
                        <p class="text-xl text-gray-600 dark:text-gray-400">
                            {"No stories match your search."}
                        </p>
                        <button
                            onclick={clear}
                            class="px-6 py-2 rounded-full bg-amber-400 text-gray-900 font-medium hover:bg-amber-300"
                        >
                            {"Clear filters"}
                        </button>
                    </div>
                } else {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { for visible.into_iter().map(|post| html! {
                            <StoryCard key={post.id.0} {post} />
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}
