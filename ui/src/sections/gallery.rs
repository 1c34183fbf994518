use content::data::gallery;
use content::{Lightbox, MediaKind, Section};
use yew::prelude::*;

use crate::components::{LightboxOverlay, SectionHeading};

#[function_component]
pub fn GallerySection() -> Html {
    let items = gallery();
    let lightbox = use_state(|| Lightbox::new(items.len()));

    // Lightbox is a value type; each handler edits a copy and stores it.
    let update = {
        let lightbox = lightbox.clone();
        move |change: fn(&mut Lightbox)| {
            let lightbox = lightbox.clone();
            Callback::from(move |()| {
                let mut next = (*lightbox).clone();
                change(&mut next);
                lightbox.set(next);
            })
        }
    };
    let on_close = update(Lightbox::close);
    let on_next = update(Lightbox::next);
    let on_previous = update(Lightbox::previous);

    let open = |index: usize| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*lightbox).clone();
            next.open(index);
            lightbox.set(next);
        })
    };

    let overlay = lightbox.current().and_then(|index| {
        items.get(index).map(|item| {
            html! {
                <LightboxOverlay
                    {item}
                    {index}
                    len={items.len()}
                    {on_close}
                    {on_next}
                    {on_previous}
                />
            }
        })
    });

    html! {
        <section id={Section::Gallery.anchor()} class="py-20 bg-amber-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Photo"
                    accent="Gallery"
                    subtitle="Moments from the road. Click any photo to see it full size."
                />
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    { for items.iter().enumerate().map(|(index, item)| html! {
                        <button
                            key={index}
                            onclick={open(index)}
                            class="group relative aspect-square overflow-hidden rounded-xl"
                            aria-label={item.alt}
                        >
                            <img src={item.src} alt={item.alt} class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500" />
                            if item.kind == MediaKind::Video {
                                <span class="absolute inset-0 flex items-center justify-center text-5xl text-white/90">{"▶"}</span>
                            }
                            <span class="absolute bottom-0 inset-x-0 p-3 text-left text-sm text-white bg-gradient-to-t from-black/70 opacity-0 group-hover:opacity-100 transition-opacity">
                                {item.location}
                            </span>
                        </button>
                    }) }
                </div>
            </div>
            {overlay}
        </section>
    }
}
