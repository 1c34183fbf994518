use content::data::posts;
use content::{Category, StoryFilter, categories, filter_posts};

fn ids(found: &[&content::Post]) -> Vec<&'static str> {
    found.iter().map(|post| post.id.0).collect()
}

#[test]
fn empty_query_and_all_returns_everything_in_order() {
    let found = filter_posts(posts(), "", &Category::All);
    assert_eq!(ids(&found), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn result_is_an_ordered_subsequence() {
    for query in ["", "a", "CULTURE", "zzz", "asia", "e"] {
        for category in categories(posts()) {
            let found = filter_posts(posts(), query, &category);
            let mut source = posts().iter();
            for post in found {
                assert!(
                    source.any(|p| p.id == post.id),
                    "{} out of order for {query:?} / {category}",
                    post.id
                );
            }
        }
    }
}

#[test]
fn query_matches_title_location_and_tags_case_insensitively() {
    // title
    let found = filter_posts(posts(), "SHOESTRING", &Category::All);
    assert_eq!(ids(&found), vec!["2"]);

    // location
    let found = filter_posts(posts(), "east africa", &Category::All);
    assert_eq!(ids(&found), vec!["6"]);

    // tag
    let found = filter_posts(posts(), "Wildlife", &Category::All);
    assert_eq!(ids(&found), vec!["6"]);

    // substring of a tag
    let found = filter_posts(posts(), "gems", &Category::All);
    assert_eq!(ids(&found), vec!["4"]);
}

#[test]
fn japan_matches_only_the_japan_post() {
    let found = filter_posts(posts(), "japan", &Category::All);
    assert_eq!(ids(&found), vec!["4"]);
    assert_eq!(found[0].location, "Japan");
}

#[test]
fn excerpt_is_not_searched() {
    // "Kyoto" only appears in the Japan post's excerpt.
    assert!(posts()[3].excerpt.contains("Kyoto"));
    assert!(filter_posts(posts(), "kyoto", &Category::All).is_empty());
}

#[test]
fn category_restricts_results() {
    let found =
        filter_posts(posts(), "", &Category::Named("Road Trip".to_string()));
    assert_eq!(ids(&found), vec!["3"]);

    let found =
        filter_posts(posts(), "culture", &Category::parse("Cultural"));
    assert_eq!(ids(&found), vec!["4"]);
}

#[test]
fn unknown_category_yields_no_matches() {
    let found =
        filter_posts(posts(), "", &Category::Named("Cruise".to_string()));
    assert!(found.is_empty());
}

#[test]
fn categories_are_derived_in_first_appearance_order() {
    let labels: Vec<String> = categories(posts())
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    assert_eq!(
        labels,
        vec![
            "All",
            "Backpacking",
            "City Hopping",
            "Road Trip",
            "Cultural",
            "Adventure",
            "Safari"
        ]
    );
}

#[test]
fn categories_deduplicate() {
    let mut doubled = posts().to_vec();
    doubled.extend_from_slice(posts());
    assert_eq!(categories(&doubled).len(), 7);
    assert_eq!(categories(&[]), vec![Category::All]);
}

#[test]
fn story_filter_matches_free_function() {
    let filter = StoryFilter {
        query: "culture".to_string(),
        category: Category::All,
    };
    assert!(filter.is_active());
    assert_eq!(
        filter.apply(posts()),
        filter_posts(posts(), "culture", &Category::All)
    );
    assert_eq!(ids(&filter.apply(posts())), vec!["1", "2", "4", "5", "6"]);

    assert!(!StoryFilter::default().is_active());
    assert_eq!(StoryFilter::default().apply(posts()).len(), posts().len());
}

#[test]
fn parse_round_trips_labels() {
    assert_eq!(Category::parse("All"), Category::All);
    assert_eq!(Category::parse("Safari").label(), "Safari");
    assert_eq!(Category::All.to_string(), "All");
}
