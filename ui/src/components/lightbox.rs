use content::{GalleryItem, MediaKind};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxOverlayProps {
    pub item: &'static GalleryItem,
    /// Position of `item` and the gallery size, for the "3 / 9" counter.
    pub index: usize,
    pub len: usize,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
}

/// Full-size view of one gallery item. Clicking the backdrop or pressing
/// Escape closes it; the arrow keys and buttons step through the gallery.
#[function_component]
pub fn LightboxOverlay(props: &LightboxOverlayProps) -> Html {
    let backdrop_ref = use_node_ref();

    // focus the backdrop so keyboard navigation works straight away
    {
        let backdrop_ref = backdrop_ref.clone();
        use_effect_with((), move |_| {
            if let Some(element) = backdrop_ref.cast::<web_sys::HtmlElement>()
            {
                let _ = element.focus();
            }
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_keydown = {
        let on_close = props.on_close.clone();
        let on_next = props.on_next.clone();
        let on_previous = props.on_previous.clone();

        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => on_close.emit(()),
            "ArrowRight" => on_next.emit(()),
            "ArrowLeft" => on_previous.emit(()),
            _ => {}
        })
    };

    let item = props.item;
    let media = match item.kind {
        MediaKind::Image => html! {
            <img src={item.src} alt={item.alt} class="max-h-[80vh] w-auto rounded-lg" />
        },
        MediaKind::Video => html! {
            <div class="relative">
                <img src={item.src} alt={item.alt} class="max-h-[80vh] w-auto rounded-lg opacity-80" />
                <span class="absolute inset-0 flex items-center justify-center text-6xl text-white">{"▶"}</span>
            </div>
        },
    };

    let button_class = "p-3 rounded-full bg-white/10 text-white hover:bg-white/20 transition-colors";

    html! {
        <div
            ref={backdrop_ref}
            tabindex="-1"
            onclick={on_backdrop_click}
            onkeydown={on_keydown}
            class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4 outline-none"
            role="dialog"
            aria-modal="true"
            aria-label={item.alt}
        >
            <button
                class={classes!(button_class, "absolute", "top-4", "right-4")}
                onclick={props.on_close.reform(|_: MouseEvent| ())}
                aria-label="Close"
            >
                {"✕"}
            </button>
            <button
                class={classes!(button_class, "absolute", "left-4")}
                onclick={props.on_previous.reform(|_: MouseEvent| ())}
                aria-label="Previous"
            >
                {"‹"}
            </button>
            <figure class="text-center">
                {media}
                <figcaption class="mt-4 text-white">
                    <p class="text-lg font-semibold">{item.alt}</p>
                    <p class="text-sm text-gray-300">
                        {format!("{} · {} / {}", item.location, props.index + 1, props.len)}
                    </p>
                </figcaption>
            </figure>
            <button
                class={classes!(button_class, "absolute", "right-4")}
                onclick={props.on_next.reform(|_: MouseEvent| ())}
                aria-label="Next"
            >
                {"›"}
            </button>
        </div>
    }
}
