//! The home page, one component per scroll anchor.

pub mod about;
pub mod budget;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod hero;
pub mod map;
pub mod newsletter;
pub mod stories;
pub mod testimonials;
pub mod upcoming;

pub use about::AboutSection;
pub use budget::BudgetSection;
pub use contact::ContactSection;
pub use faq::FaqSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use map::MapSection;
pub use newsletter::NewsletterSection;
pub use stories::StoriesSection;
pub use testimonials::TestimonialsSection;
pub use upcoming::UpcomingSection;
