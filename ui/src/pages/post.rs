use content::Post;
use content::data::{find_post, related_posts};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{MarkdownText, StoryCard};
use crate::hooks::use_title;

const RELATED_LIMIT: usize = 2;

#[derive(Properties, PartialEq)]
pub struct PostPageProps {
    pub id: AttrValue,
}

#[function_component]
pub fn PostPage(props: &PostPageProps) -> Html {
    let post = find_post(&props.id);
    use_title(post.map_or("Story not found", |post| post.title));

    match post {
        Some(post) => html! { <Article {post} /> },
        None => {
            tracing::debug!(id = %props.id, "no story with this id");
            html! {
                <div class="py-32 text-center space-y-6">
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"Story not found"}</h1>
                    <p class="text-gray-600 dark:text-gray-300">
                        {"We couldn't find that story. It may have moved."}
                    </p>
                    <Link<Route> to={Route::Home} classes="inline-block px-6 py-3 rounded-full bg-amber-400 text-gray-900 font-medium hover:bg-amber-300">
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ArticleProps {
    post: &'static Post,
}

#[function_component]
fn Article(props: &ArticleProps) -> Html {
    let post = props.post;
    let related = related_posts(post.id, RELATED_LIMIT);

    html! {
        <article>
            <header class="relative h-[60vh] overflow-hidden">
                <img src={post.image} alt={post.title} class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent"></div>
                <div class="absolute bottom-0 inset-x-0 max-w-4xl mx-auto px-4 pb-12 text-white space-y-4">
                    <span class="px-3 py-1 rounded-full text-sm font-medium bg-amber-400 text-gray-900">
                        {post.category}
                    </span>
                    <h1 class="text-4xl md:text-6xl font-bold">{post.title}</h1>
                    <div class="flex flex-wrap gap-6 text-gray-200">
                        <span>{"📍 "}{post.location}</span>
                        <span>{"📅 "}{post.display_date()}</span>
                        <span>{"💵 "}{post.budget}</span>
                    </div>
                </div>
            </header>

            <div class="max-w-4xl mx-auto px-4 py-16 space-y-12">
                <MarkdownText text={post.article_markdown()} />

                <div class="flex flex-wrap gap-2">
                    { for post.tags.iter().map(|tag| html! {
                        <span key={*tag} class="px-3 py-1 rounded-full text-sm bg-amber-100 dark:bg-gray-700 text-amber-800 dark:text-amber-300">
                            {format!("#{tag}")}
                        </span>
                    }) }
                </div>

                <div class="p-8 rounded-2xl bg-amber-50 dark:bg-gray-800 text-center space-y-4">
                    <h2 class="text-2xl font-bold">{"Want a trip like this?"}</h2>
                    <p class="text-gray-600 dark:text-gray-300">
                        {"We'll plan it around your dates and budget."}
                    </p>
                    <Link<Route> to={Route::Itinerary} classes="inline-block px-8 py-3 rounded-full font-semibold bg-amber-400 text-gray-900 hover:bg-amber-300">
                        {"Plan a Similar Trip"}
                    </Link<Route>>
                </div>

                if !related.is_empty() {
                    <section class="space-y-6">
                        <h2 class="text-2xl font-bold">{"More Stories"}</h2>
                        <div class="grid md:grid-cols-2 gap-8">
                            { for related.into_iter().map(|post| html! {
                                <StoryCard key={post.id.0} {post} compact={true} />
                            }) }
                        </div>
                    </section>
                }
            </div>
        </article>
    }
}
