pub mod home;
pub mod itinerary;
pub mod not_found;
pub mod post;

pub use home::HomePage;
pub use itinerary::ItineraryPage;
pub use not_found::NotFoundPage;
pub use post::PostPage;
