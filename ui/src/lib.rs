use yew::prelude::*;
use yew_router::prelude::*;

pub mod anchors;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod sections;
pub mod theme;

use components::layout::{Footer, Header};
use theme::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog/:id")]
    Post { id: String },
    #[at("/itinerary-preview")]
    Itinerary,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <anchors::AnchorProvider>
                    <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                        <Header />
                        <main class="pt-16">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </anchors::AnchorProvider>
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Post { id } => html! { <pages::PostPage {id} /> },
        Route::Itinerary => html! { <pages::ItineraryPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
