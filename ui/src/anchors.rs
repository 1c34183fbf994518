//! Smooth scrolling to home-page sections.
//!
//! Section components never touch the document themselves; they ask the
//! [`AnchorProvider`] through [`use_scroll_to`].

use content::Section;
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Delay before scrolling after navigating back to the home view, giving
/// the sections time to mount.
const SCROLL_AFTER_NAVIGATION_MS: u32 = 300;

#[derive(Clone, PartialEq)]
pub struct ScrollToAnchor(pub Callback<Section>);

/// Scroll the element for `section` into view, if it is on the page.
pub fn scroll_to_anchor(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        tracing::debug!(anchor = section.anchor(), "anchor not on this page");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorProviderProps {
    pub children: Html,
}

/// Provides [`ScrollToAnchor`]. Must sit inside the router.
#[function_component]
pub fn AnchorProvider(props: &AnchorProviderProps) -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let scroll = Callback::from(move |section: Section| {
        if route == Some(Route::Home) {
            scroll_to_anchor(section);
            return;
        }
        let Some(navigator) = &navigator else {
            tracing::warn!("no navigator available, cannot leave this page");
            return;
        };
        navigator.push(&Route::Home);
        Timeout::new(SCROLL_AFTER_NAVIGATION_MS, move || {
            scroll_to_anchor(section)
        })
        .forget();
    });

    html! {
        <ContextProvider<ScrollToAnchor> context={ScrollToAnchor(scroll)}>
            {props.children.clone()}
        </ContextProvider<ScrollToAnchor>>
    }
}

/// Returns a callback that scrolls to a home section, leaving the current
/// page first if needed.
#[hook]
pub fn use_scroll_to() -> Callback<Section> {
    use_context::<ScrollToAnchor>()
        .expect("use_scroll_to must be used within an AnchorProvider")
        .0
}
