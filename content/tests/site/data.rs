use std::collections::HashSet;

use content::data::{
    budget_trips, destinations, faqs, find_destination, find_post, gallery,
    posts, related_posts, sample_itinerary,
};
use content::{DestinationId, PostId, Section, format_usd};
use rust_decimal::{Decimal, dec};

#[test]
fn seeded_counts() {
    assert_eq!(posts().len(), 6);
    assert_eq!(destinations().len(), 5);
    assert_eq!(content::data::testimonials().len(), 3);
    assert_eq!(content::data::upcoming_trips().len(), 3);
    assert_eq!(gallery().len(), 9);
    assert_eq!(faqs().len(), 8);
    assert_eq!(sample_itinerary().days.len(), 3);
    assert_eq!(budget_trips().len(), 3);
}

#[test]
fn post_ids_are_unique() {
    let ids: HashSet<_> = posts().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), posts().len());
}

#[test]
fn find_post_by_id() {
    let post = find_post("3").expect("post 3 is seeded");
    assert_eq!(post.title, "Road Trip Across New Zealand");
    assert!(find_post("42").is_none());
    assert!(find_post("").is_none());
}

#[test]
fn related_posts_skip_current() {
    let related: Vec<_> =
        related_posts(PostId("1"), 2).iter().map(|p| p.id).collect();
    assert_eq!(related, vec![PostId("2"), PostId("3")]);

    let related: Vec<_> =
        related_posts(PostId("2"), 2).iter().map(|p| p.id).collect();
    assert_eq!(related, vec![PostId("1"), PostId("3")]);

    assert_eq!(related_posts(PostId("9"), 10).len(), 6);
}

#[test]
fn display_date_is_long_form() {
    assert_eq!(posts()[0].display_date(), "January 15, 2024");
    assert_eq!(posts()[3].display_date(), "April 5, 2024");
}

#[test]
fn article_includes_body_and_location() {
    let post = &posts()[1];
    let article = post.article_markdown();
    assert!(article.starts_with(post.body));
    assert!(article.contains("Based on our experience in Europe"));
    assert!(article.contains("## Final Thoughts"));
    assert!(article.contains(&format!("### {} - Detailed Costs", post.title)));
}

#[test]
fn destination_back_references_resolve() {
    for destination in destinations() {
        if let Some(post_id) = destination.blog_post {
            assert!(find_post(post_id.0).is_some(), "{post_id} missing");
        }
    }
    let kyoto = find_destination(DestinationId("4")).expect("kyoto");
    assert_eq!(kyoto.name, "Kyoto");
    assert!(find_destination(DestinationId("0")).is_none());
}

#[test]
fn pins_are_inside_the_map() {
    for destination in destinations() {
        assert!(destination.position.left <= 100);
        assert!(destination.position.top <= 100);
    }
}

#[test]
fn budget_shares_sum_to_one_hundred() {
    for trip in budget_trips() {
        let total: Decimal =
            trip.breakdown.iter().map(|line| trip.share(line)).sum();
        assert_eq!(total, dec!(100), "{}", trip.name);
        assert_eq!(trip.itemized_total(), trip.total, "{}", trip.name);
    }
}

#[test]
fn budget_share_values() {
    let trips = budget_trips();
    let europe = &trips[1];
    assert_eq!(europe.key.to_string(), "europe");
    assert_eq!(europe.share(&europe.breakdown[0]), dec!(35));
    assert_eq!(format_usd(europe.total), "$3,200");
}

#[test]
fn itinerary_days_are_numbered_from_one() {
    let days: Vec<u32> =
        sample_itinerary().days.iter().map(|d| d.day).collect();
    assert_eq!(days, vec![1, 2, 3]);
}

#[test]
fn section_anchors_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_anchor(section.anchor()), Some(section));
    }
    assert_eq!(Section::from_anchor("pricing"), None);
}

#[test]
fn nav_targets_are_home_sections() {
    let nav = content::data::HEADER_NAV.iter();
    for item in nav.chain(content::data::FOOTER_NAV) {
        assert!(Section::ALL.contains(&item.section), "{}", item.label);
    }
}
