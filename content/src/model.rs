//! Record types for everything the site displays.
//!
//! All records are immutable and `'static`; they are seeded in
//! [`crate::data`] and only ever borrowed by the views.

use derive_more::Display;
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
)]
pub struct PostId(pub &'static str);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
)]
pub struct DestinationId(pub &'static str);

/// A travel story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub date: Date,
    pub location: &'static str,
    /// Free-form label such as "$4,500 total".
    pub budget: &'static str,
    pub category: &'static str,
    /// Markdown body shown on the detail page.
    pub body: &'static str,
    pub tags: &'static [&'static str],
}

impl Post {
    /// Publication date as shown on cards, e.g. "January 15, 2024".
    pub fn display_date(&self) -> String {
        self.date.strftime("%B %-d, %Y").to_string()
    }

    /// The full article as markdown: the post body followed by the
    /// planning advice and cost notes every story ends with.
    pub fn article_markdown(&self) -> String {
        let location = self.location;
        format!(
            "{body} Our journey through {location} was filled with incredible \
             discoveries, budget-friendly finds, and unforgettable moments \
             that proved you don't need to spend a fortune to have the \
             adventure of a lifetime.

## Planning Your Own Adventure

Based on our experience in {location}, here are our top recommendations \
for fellow budget travelers:

- Book accommodations at least 2-3 weeks in advance for better rates
- Use local transportation instead of tourist shuttles to save money
- Eat where the locals eat - street food is often delicious and affordable
- Look for free walking tours to get oriented and learn about the culture
- Pack light to avoid baggage fees and make moving around easier

## Budget Breakdown

### {title} - Detailed Costs

| Accommodation | Food & Drinks |
|---|---|
| Hostels: $15-25/night | Street food: $2-5/meal |
| Budget hotels: $25-40/night | Local restaurants: $5-12/meal |
| Guesthouses: $20-35/night | Groceries: $10-15/day |

## Final Thoughts

{location} exceeded all our expectations and proved once again that the \
best travel experiences come from stepping outside your comfort zone, not \
your budget. The memories we made, the people we met, and the lessons we \
learned are priceless souvenirs that will stay with us forever.

Ready to plan your own budget adventure? We're here to help you create an \
unforgettable journey that won't break the bank.
",
            body = self.body,
            title = self.title,
        )
    }
}

/// Illustrative pin placement, in percent of the map box. This is not a
/// projection of the real coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinPosition {
    pub left: u8,
    pub top: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: &'static str,
    pub country: &'static str,
    /// `(longitude, latitude)`; reference only.
    pub coordinates: (f64, f64),
    pub position: PinPosition,
    pub image: &'static str,
    pub description: &'static str,
    /// Year and month, e.g. "2024-01".
    pub visited: &'static str,
    pub blog_post: Option<PostId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    /// 1 through 5.
    pub rating: u8,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum TripStatus {
    Planning,
    Booked,
    Researching,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingTrip {
    pub destination: &'static str,
    pub dates: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub status: TripStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub location: &'static str,
    pub activities: &'static [&'static str],
    pub budget: &'static str,
    pub accommodation: &'static str,
    pub meals: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub title: &'static str,
    pub total_budget: &'static str,
    pub countries: &'static [&'static str],
    pub days: &'static [ItineraryDay],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub kind: MediaKind,
    /// Full image, or the thumbnail for videos.
    pub src: &'static str,
    pub alt: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum BudgetTripKey {
    #[display("southeast-asia")]
    SoutheastAsia,
    #[display("europe")]
    Europe,
    #[display("new-zealand")]
    NewZealand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: &'static str,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetTrip {
    pub key: BudgetTripKey,
    pub name: &'static str,
    pub total: Decimal,
    pub daily: Decimal,
    pub breakdown: Vec<BudgetLine>,
    pub tips: &'static [&'static str],
}

/// A section of the home view that can be scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Stories,
    Gallery,
    Upcoming,
    Budget,
    Testimonials,
    Map,
    Contact,
    Newsletter,
    Faq,
}

impl Section {
    /// Every section, in page order.
    pub const ALL: [Section; 11] = [
        Section::Hero,
        Section::About,
        Section::Stories,
        Section::Gallery,
        Section::Upcoming,
        Section::Budget,
        Section::Testimonials,
        Section::Map,
        Section::Contact,
        Section::Newsletter,
        Section::Faq,
    ];

    /// The element id the section is rendered under.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Stories => "stories",
            Section::Gallery => "gallery",
            Section::Upcoming => "upcoming",
            Section::Budget => "budget",
            Section::Testimonials => "testimonials",
            Section::Map => "map",
            Section::Contact => "contact",
            Section::Newsletter => "newsletter",
            Section::Faq => "faq",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// A labelled link to a home section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: Section,
}
