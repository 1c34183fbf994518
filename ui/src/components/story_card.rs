use content::Post;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct StoryCardProps {
    pub post: &'static Post,
    /// Compact cards skip the meta row and tags.
    #[prop_or_default]
    pub compact: bool,
}

#[function_component]
pub fn StoryCard(props: &StoryCardProps) -> Html {
    let post = props.post;
    let route = Route::Post {
        id: post.id.to_string(),
    };

    html! {
        <Link<Route> to={route} classes="group block rounded-2xl overflow-hidden bg-white dark:bg-gray-700 shadow-lg hover:shadow-2xl transition-all">
            <div class="relative h-56 overflow-hidden">
                <img src={post.image} alt={post.title} class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500" />
                <span class="absolute top-4 left-4 px-3 py-1 rounded-full text-sm font-medium bg-amber-400 text-gray-900">
                    {post.category}
                </span>
            </div>
            <div class="p-6 space-y-3">
                if !props.compact {
                    <div class="flex flex-wrap gap-4 text-sm text-gray-500 dark:text-gray-400">
                        <span>{"📍 "}{post.location}</span>
                        <span>{"📅 "}{post.display_date()}</span>
                        <span>{"💵 "}{post.budget}</span>
                    </div>
                }
                <h3 class="text-xl font-bold text-gray-900 dark:text-white group-hover:text-amber-500 transition-colors">
                    {post.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300">{post.excerpt}</p>
                if !props.compact {
                    <div class="flex flex-wrap gap-2">
                        { for post.tags.iter().take(3).map(|tag| html! {
                            <span key={*tag} class="px-2 py-1 rounded-md text-xs bg-gray-100 dark:bg-gray-600 text-gray-600 dark:text-gray-300">
                                {format!("#{tag}")}
                            </span>
                        }) }
                    </div>
                }
            </div>
        </Link<Route>>
    }
}
