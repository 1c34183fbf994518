//! Seeded site content.
//!
//! Nothing here is created or changed at runtime; views borrow straight
//! from these lists.

use jiff::civil::date;
use rust_decimal::Decimal;

use crate::model::{
    BudgetLine, BudgetTrip, BudgetTripKey, Destination, DestinationId, Faq,
    GalleryItem, Itinerary, ItineraryDay, MediaKind, NavItem, PinPosition,
    Post, PostId, Section, Testimonial, TripStatus, UpcomingTrip,
};

static POSTS: &[Post] = &[
    Post {
        id: PostId("1"),
        title: "Backpacking Through Southeast Asia",
        excerpt: "Our incredible 3-month journey across Thailand, Vietnam, \
                  and Cambodia on just $50 a day.",
        image: "https://images.pexels.com/photos/2422913/pexels-photo-2422913.jpeg",
        date: date(2024, 1, 15),
        location: "Southeast Asia",
        budget: "$4,500 total",
        category: "Backpacking",
        body: "Our Southeast Asian adventure was the trip of a lifetime.",
        tags: &["budget", "backpacking", "asia", "culture"],
    },
    Post {
        id: PostId("2"),
        title: "European Cities on a Shoestring",
        excerpt: "Exploring 8 European capitals in 2 weeks with smart budget \
                  strategies and local insights.",
        image: "https://images.pexels.com/photos/2363/france-landmark-lights-night.jpg",
        date: date(2024, 2, 20),
        location: "Europe",
        budget: "$3,200 total",
        category: "City Hopping",
        body: "Europe doesn't have to break the bank.",
        tags: &["europe", "cities", "budget", "culture"],
    },
    Post {
        id: PostId("3"),
        title: "Road Trip Across New Zealand",
        excerpt: "Epic landscapes and hidden gems discovered during our \
                  3-week campervan adventure.",
        image: "https://images.pexels.com/photos/1166209/pexels-photo-1166209.jpeg",
        date: date(2024, 3, 10),
        location: "New Zealand",
        budget: "$5,800 total",
        category: "Road Trip",
        body: "New Zealand's natural beauty exceeded all expectations.",
        tags: &["roadtrip", "nature", "camping", "adventure"],
    },
    Post {
        id: PostId("4"),
        title: "Japan's Hidden Treasures",
        excerpt: "Beyond Tokyo and Kyoto - discovering authentic Japan in \
                  small towns and rural areas.",
        image: "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg",
        date: date(2024, 4, 5),
        location: "Japan",
        budget: "$4,100 total",
        category: "Cultural",
        body: "Japan's rural beauty and traditional culture stayed with us \
               long after we flew home.",
        tags: &["japan", "culture", "tradition", "hidden gems"],
    },
    Post {
        id: PostId("5"),
        title: "South American Adventure",
        excerpt: "From Machu Picchu to Patagonia - our unforgettable journey \
                  through South America.",
        image: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        date: date(2024, 5, 18),
        location: "South America",
        budget: "$6,200 total",
        category: "Adventure",
        body: "South America offered adventures beyond our wildest dreams.",
        tags: &["southamerica", "trekking", "culture", "adventure"],
    },
    Post {
        id: PostId("6"),
        title: "African Safari & Culture",
        excerpt: "Wildlife encounters and cultural immersion in Kenya, \
                  Tanzania, and Rwanda.",
        image: "https://images.pexels.com/photos/631317/pexels-photo-631317.jpeg",
        date: date(2024, 6, 12),
        location: "East Africa",
        budget: "$7,500 total",
        category: "Safari",
        body: "Africa changed our perspective on life and travel.",
        tags: &["africa", "safari", "wildlife", "culture"],
    },
];

static DESTINATIONS: &[Destination] = &[
    Destination {
        id: DestinationId("1"),
        name: "Bangkok",
        country: "Thailand",
        coordinates: (100.5018, 13.7563),
        position: PinPosition { left: 75, top: 35 },
        image: "https://images.pexels.com/photos/1007657/pexels-photo-1007657.jpeg",
        description: "Vibrant street food and golden temples",
        visited: "2024-01",
        blog_post: Some(PostId("1")),
    },
    Destination {
        id: DestinationId("2"),
        name: "Paris",
        country: "France",
        coordinates: (2.3522, 48.8566),
        position: PinPosition { left: 25, top: 25 },
        image: "https://images.pexels.com/photos/2363/france-landmark-lights-night.jpg",
        description: "City of lights and romance",
        visited: "2024-02",
        blog_post: Some(PostId("2")),
    },
    Destination {
        id: DestinationId("3"),
        name: "Queenstown",
        country: "New Zealand",
        coordinates: (168.6626, -45.0312),
        position: PinPosition { left: 85, top: 75 },
        image: "https://images.pexels.com/photos/1166209/pexels-photo-1166209.jpeg",
        description: "Adventure capital surrounded by stunning landscapes",
        visited: "2024-03",
        blog_post: Some(PostId("3")),
    },
    Destination {
        id: DestinationId("4"),
        name: "Kyoto",
        country: "Japan",
        coordinates: (135.7681, 35.0116),
        position: PinPosition { left: 78, top: 32 },
        image: "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg",
        description: "Ancient temples and traditional culture",
        visited: "2024-04",
        blog_post: Some(PostId("4")),
    },
    Destination {
        id: DestinationId("5"),
        name: "Cusco",
        country: "Peru",
        coordinates: (-71.9675, -13.5319),
        position: PinPosition { left: 15, top: 65 },
        image: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        description: "Gateway to Machu Picchu",
        visited: "2024-05",
        blog_post: Some(PostId("5")),
    },
];

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah & Mike",
        location: "California, USA",
        text: "These two helped us plan the perfect European honeymoon on \
               our tight budget. Every recommendation was spot-on!",
        rating: 5,
        image: "https://images.pexels.com/photos/1043474/pexels-photo-1043474.jpeg",
    },
    Testimonial {
        name: "Alex Chen",
        location: "Toronto, Canada",
        text: "Their Southeast Asia itinerary saved us thousands while \
               giving us the most authentic experiences. Incredible value!",
        rating: 5,
        image: "https://images.pexels.com/photos/1559486/pexels-photo-1559486.jpeg",
    },
    Testimonial {
        name: "Emma Rodriguez",
        location: "Madrid, Spain",
        text: "The detailed budget breakdowns and local tips made our Japan \
               trip absolutely perfect. Would recommend to anyone!",
        rating: 5,
        image: "https://images.pexels.com/photos/1542085/pexels-photo-1542085.jpeg",
    },
];

static UPCOMING_TRIPS: &[UpcomingTrip] = &[
    UpcomingTrip {
        destination: "Iceland",
        dates: "July 2024",
        image: "https://images.pexels.com/photos/1483337/pexels-photo-1483337.jpeg",
        description: "Northern lights and epic waterfalls",
        status: TripStatus::Planning,
    },
    UpcomingTrip {
        destination: "Morocco",
        dates: "September 2024",
        image: "https://images.pexels.com/photos/2374967/pexels-photo-2374967.jpeg",
        description: "Desert adventures and vibrant markets",
        status: TripStatus::Booked,
    },
    UpcomingTrip {
        destination: "Nepal",
        dates: "November 2024",
        image: "https://images.pexels.com/photos/1365425/pexels-photo-1365425.jpeg",
        description: "Himalayan trekking expedition",
        status: TripStatus::Researching,
    },
];

static SAMPLE_ITINERARY: Itinerary = Itinerary {
    title: "Southeast Asia Explorer - 21 Days",
    total_budget: "$2,800",
    countries: &["Thailand", "Vietnam", "Cambodia"],
    days: &[
        ItineraryDay {
            day: 1,
            location: "Bangkok, Thailand",
            activities: &[
                "Arrive at Suvarnabhumi Airport",
                "Check into hostel in Khao San Road",
                "Street food tour",
            ],
            budget: "$45",
            accommodation: "Mad Monkey Hostel",
            meals: "Street food ($8), Restaurant dinner ($12)",
        },
        ItineraryDay {
            day: 2,
            location: "Bangkok, Thailand",
            activities: &[
                "Visit Grand Palace",
                "Wat Pho Temple",
                "Chao Phraya River cruise",
            ],
            budget: "$35",
            accommodation: "Mad Monkey Hostel",
            meals: "Local breakfast ($3), Lunch at market ($6), Dinner ($10)",
        },
        ItineraryDay {
            day: 3,
            location: "Bangkok to Chiang Mai",
            activities: &[
                "Morning flight to Chiang Mai",
                "Explore Old City",
                "Night Bazaar",
            ],
            budget: "$85",
            accommodation: "Hostel in Old City",
            meals: "Airport food ($8), Khao Soi lunch ($5), Night market \
                    dinner ($8)",
        },
    ],
};

static GALLERY: &[GalleryItem] = &[
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.pexels.com/photos/2422915/pexels-photo-2422915.jpeg",
        alt: "Mountain landscape",
        location: "Swiss Alps",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.pexels.com/photos/1371360/pexels-photo-1371360.jpeg",
        alt: "Beach sunset",
        location: "Bali, Indonesia",
    },
    GalleryItem {
        kind: MediaKind::Video,
        src: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        alt: "Machu Picchu timelapse",
        location: "Peru",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg",
        alt: "Cherry blossoms",
        location: "Kyoto, Japan",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.pexels.com/photos/631317/pexels-photo-631317.jpeg",
        alt: "Safari wildlife",
        location: "Kenya",
    },
    GalleryItem {
        kind: MediaKind::Video,
        src: "https://images.pexels.com/photos/1166209/pexels-photo-1166209.jpeg",
        alt: "Northern lights",
        location: "Iceland",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.pexels.com/photos/2374967/pexels-photo-2374967.jpeg",
        alt: "Desert landscape",
        location: "Morocco",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "https://images.pexels.com/photos/1007657/pexels-photo-1007657.jpeg",
        alt: "Temple architecture",
        location: "Bangkok, Thailand",
    },
    GalleryItem {
        kind: MediaKind::Video,
        src: "https://images.pexels.com/photos/2363/france-landmark-lights-night.jpg",
        alt: "European cities",
        location: "Paris, France",
    },
];

static FAQS: &[Faq] = &[
    Faq {
        question: "How do you keep travel costs so low?",
        answer: "Our secret lies in thorough research, local connections, and \
                 smart timing. We stay in hostels or budget accommodations, \
                 eat at local places, use public transportation, and travel \
                 during off-peak seasons. We also leverage travel rewards, \
                 book in advance when beneficial, and always look for free \
                 activities and experiences.",
    },
    Faq {
        question: "What's included in your itinerary planning service?",
        answer: "Our basic plan ($49) includes a day-by-day itinerary with \
                 accommodation recommendations, transportation options, and \
                 must-see attractions. The detailed plan ($99) adds budget \
                 breakdowns, restaurant recommendations, and local tips. The \
                 full consultation ($149) includes a 1-hour video call, \
                 customized planning, and 30-day email support.",
    },
    Faq {
        question: "Do you only plan budget trips?",
        answer: "While we specialize in budget travel, we can work with \
                 various budgets. Our expertise is in maximizing value \
                 regardless of your spending level. Whether you have $30/day \
                 or $150/day, we'll help you get the most authentic and \
                 memorable experiences for your money.",
    },
    Faq {
        question: "How far in advance should I book my trip?",
        answer: "For international trips, we recommend booking flights 2-3 \
                 months in advance. Accommodation can be more flexible - book \
                 popular destinations early but leave room for spontaneity. \
                 We provide specific timing advice based on your chosen \
                 destination and travel season.",
    },
    Faq {
        question: "What if I need to change my plans after booking your \
                   service?",
        answer: "Life happens! We offer one free major revision within 30 \
                 days of delivery. Additional changes are available for a \
                 small fee ($15-25 depending on complexity). We're always \
                 here to help adjust your plans when needed.",
    },
    Faq {
        question: "Do you help with visa requirements and travel insurance?",
        answer: "We provide basic guidance on visa requirements and strongly \
                 recommend travel insurance, but we're not licensed agents. \
                 We'll point you to reliable resources and share our \
                 personal experiences, but official requirements should be \
                 confirmed with embassies and insurance providers.",
    },
    Faq {
        question: "What destinations do you specialize in?",
        answer: "We have extensive experience in Southeast Asia, Europe, New \
                 Zealand, Japan, and South America. However, our research \
                 skills and network of fellow travelers allow us to plan \
                 trips worldwide. If we haven't been somewhere personally, we \
                 connect with trusted local experts.",
    },
    Faq {
        question: "How do you handle dietary restrictions and accessibility \
                   needs?",
        answer: "We take special requirements seriously! Let us know about \
                 dietary restrictions, mobility needs, or other \
                 accommodations during your consultation. We'll research \
                 accessible accommodations, appropriate restaurants, and \
                 modify itineraries to ensure your comfort and safety.",
    },
];

pub static HEADER_NAV: &[NavItem] = &[
    NavItem { label: "Home", section: Section::Hero },
    NavItem { label: "About", section: Section::About },
    NavItem { label: "Stories", section: Section::Stories },
    NavItem { label: "Gallery", section: Section::Gallery },
    NavItem { label: "Budget Tips", section: Section::Budget },
    NavItem { label: "Contact", section: Section::Contact },
];

pub static FOOTER_NAV: &[NavItem] = &[
    NavItem { label: "About Us", section: Section::About },
    NavItem { label: "Travel Stories", section: Section::Stories },
    NavItem { label: "Budget Tips", section: Section::Budget },
    NavItem { label: "Photo Gallery", section: Section::Gallery },
    NavItem { label: "Contact", section: Section::Contact },
];

/// Headline numbers for the about section, as `(figure, label)`.
pub static ACHIEVEMENTS: &[(&str, &str)] = &[
    ("25+", "Countries Explored"),
    ("$50", "Average Daily Budget"),
    ("500+", "Fellow Travelers Helped"),
    ("∞", "Memories Created"),
];

/// General savings advice shown under the budget tables, as
/// `(title, description)`.
pub static SAVINGS_TIPS: &[(&str, &str)] = &[
    (
        "Budget Tracking",
        "Use apps like Trail Wallet to track daily expenses and stay on \
         budget.",
    ),
    (
        "Off-Season Travel",
        "Travel during shoulder seasons for 30-50% savings on accommodation \
         and flights.",
    ),
    (
        "Price Comparison",
        "Always compare prices on multiple booking platforms before making \
         reservations.",
    ),
    (
        "Local Living",
        "Live like a local - eat street food, use public transport, and \
         avoid tourist traps.",
    ),
];

pub static NEWSLETTER_BENEFITS: &[&str] = &[
    "Exclusive destination guides",
    "Money-saving tips & deals",
    "Free travel planning templates",
];

pub fn posts() -> &'static [Post] {
    POSTS
}

pub fn destinations() -> &'static [Destination] {
    DESTINATIONS
}

pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}

pub fn upcoming_trips() -> &'static [UpcomingTrip] {
    UPCOMING_TRIPS
}

pub fn sample_itinerary() -> &'static Itinerary {
    &SAMPLE_ITINERARY
}

pub fn gallery() -> &'static [GalleryItem] {
    GALLERY
}

pub fn faqs() -> &'static [Faq] {
    FAQS
}

fn line(category: &'static str, amount: i64) -> BudgetLine {
    BudgetLine {
        category,
        amount: Decimal::from(amount),
    }
}

/// Cost breakdowns from past trips, in selector order.
pub fn budget_trips() -> Vec<BudgetTrip> {
    vec![
        BudgetTrip {
            key: BudgetTripKey::SoutheastAsia,
            name: "Southeast Asia (3 months)",
            total: Decimal::from(4500),
            daily: Decimal::from(50),
            breakdown: vec![
                line("Accommodation", 1350),
                line("Food", 1125),
                line("Transportation", 900),
                line("Activities", 675),
                line("Miscellaneous", 450),
            ],
            tips: &[
                "Book hostels in advance for better rates",
                "Eat at local street food stalls",
                "Use overnight buses to save on accommodation",
                "Look for free walking tours in major cities",
            ],
        },
        BudgetTrip {
            key: BudgetTripKey::Europe,
            name: "Europe Cities (2 weeks)",
            total: Decimal::from(3200),
            daily: Decimal::from(114),
            breakdown: vec![
                line("Accommodation", 1120),
                line("Food", 800),
                line("Transportation", 640),
                line("Activities", 480),
                line("Miscellaneous", 160),
            ],
            tips: &[
                "Use Eurail passes for train travel",
                "Stay in hostels or Airbnb",
                "Cook some meals to save money",
                "Take advantage of free museum days",
            ],
        },
        BudgetTrip {
            key: BudgetTripKey::NewZealand,
            name: "New Zealand Road Trip (3 weeks)",
            total: Decimal::from(5800),
            daily: Decimal::from(276),
            breakdown: vec![
                line("Accommodation", 1740),
                line("Transportation", 1740),
                line("Food", 1160),
                line("Activities", 870),
                line("Miscellaneous", 290),
            ],
            tips: &[
                "Rent a campervan to combine transport and accommodation",
                "Shop at New World or Countdown for groceries",
                "Book activities in advance for discounts",
                "Use DOC campsites for budget-friendly stays",
            ],
        },
    ]
}

pub fn find_post(id: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.id.0 == id)
}

/// The first `limit` posts other than `id`, in list order.
pub fn related_posts(id: PostId, limit: usize) -> Vec<&'static Post> {
    POSTS.iter().filter(|post| post.id != id).take(limit).collect()
}

pub fn find_destination(id: DestinationId) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}
