use yew::prelude::*;

use crate::hooks::use_title;
use crate::sections::{
    AboutSection, BudgetSection, ContactSection, FaqSection, GallerySection,
    HeroSection, MapSection, NewsletterSection, StoriesSection,
    TestimonialsSection, UpcomingSection,
};

#[function_component]
pub fn HomePage() -> Html {
    use_title("");

    html! {
        <>
            <HeroSection />
            <AboutSection />
            <StoriesSection />
            <GallerySection />
            <UpcomingSection />
            <BudgetSection />
            <TestimonialsSection />
            <MapSection />
            <ContactSection />
            <NewsletterSection />
            <FaqSection />
        </>
    }
}
