use content::data::destinations;
use content::map::{countries_visited, routes};
use content::{DestinationId, MapSelection};

#[test]
fn routes_follow_list_order() {
    let names: Vec<_> = routes(destinations())
        .map(|(from, to)| (from.name, to.name))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Bangkok", "Paris"),
            ("Paris", "Queenstown"),
            ("Queenstown", "Kyoto"),
            ("Kyoto", "Cusco"),
        ]
    );
}

#[test]
fn routes_need_two_destinations() {
    assert_eq!(routes(&destinations()[..1]).count(), 0);
    assert_eq!(routes(&[]).count(), 0);
}

#[test]
fn counts_distinct_countries() {
    assert_eq!(countries_visited(destinations()), 5);

    let mut repeated = destinations().to_vec();
    repeated.push(destinations()[0].clone());
    assert_eq!(countries_visited(&repeated), 5);
}

#[test]
fn pin_selection_toggles() {
    let mut selection = MapSelection::new();
    selection.select(DestinationId("2"));
    selection.select(DestinationId("4"));
    assert_eq!(selection.current(), Some(&DestinationId("4")));
    selection.select(DestinationId("4"));
    assert!(selection.is_none());
}
