use std::cmp::Ordering;

use parkview_catalog::{
    compare_names, flatten, project_coasters, project_detail, project_parks, Catalog, Park,
    RollerCoaster, DEFUNCT_SECTION, OPERATING_SECTION,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn six_flags_splits_into_operating_and_defunct() {
    let park = Park::new("Six Flags")
        .with_coaster("Batman", Some("operating"))
        .with_coaster("Apollo's Chariot", Some("closed"));

    let detail = project_detail(&park);
    let shaped: Vec<(&str, Vec<&str>)> = detail
        .sections
        .iter()
        .map(|s| (s.title, s.names().collect()))
        .collect();

    assert_eq!(
        shaped,
        vec![
            ("Operating Roller Coasters", vec!["Batman"]),
            ("Defunct Roller Coasters", vec!["Apollo's Chariot"]),
        ]
    );
}

#[test]
fn missing_status_counts_as_defunct_and_empty_groups_drop() {
    let sections = project_coasters(&[
        RollerCoaster::new("Drachen Fire", None),
        RollerCoaster::new("Big Bad Wolf", Some("removed")),
        RollerCoaster::new("", Some("operating")),
    ]);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, DEFUNCT_SECTION);
    assert_eq!(sections[0].names().collect::<Vec<_>>(), vec!["Big Bad Wolf", "Drachen Fire"]);
}

#[test]
fn status_match_is_exact() {
    let sections = project_coasters(&[RollerCoaster::new("Loud", Some("Operating"))]);
    assert_eq!(sections[0].title, DEFUNCT_SECTION);
}

#[test]
fn park_list_drops_unnamed_and_sorts() {
    let parks = vec![Park::new("Six Flags"), Park::new(""), Park::new("alton towers"), Park::new("Cedar Point")];
    let names: Vec<String> = project_parks(&parks).into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["alton towers", "Cedar Point", "Six Flags"]);
}

#[test]
fn bundled_catalog_projects_in_order() {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let names: Vec<String> = project_parks(catalog.parks()).into_iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            "Alton Towers",
            "Busch Gardens Williamsburg",
            "Cedar Point",
            "Europa-Park",
            "Six Flags",
        ]
    );

    let cedar = project_detail(catalog.find("Cedar Point").expect("Cedar Point"));
    assert_eq!(cedar.sections[0].title, OPERATING_SECTION);
    assert_eq!(
        cedar.sections[0].names().collect::<Vec<_>>(),
        vec!["Magnum XL-200", "Millennium Force", "Steel Vengeance"]
    );
    assert_eq!(cedar.info[1].value, "May 25, 1870");
}

fn coaster() -> impl Strategy<Value = RollerCoaster> {
    (
        "[A-Za-zÉé' 0-9]{0,8}",
        prop::option::of(prop::sample::select(vec!["operating", "closed", "removed", "Operating"])),
    )
        .prop_map(|(name, status)| RollerCoaster::new(name, status))
}

proptest! {
    #[test]
    fn projection_is_idempotent(coasters in prop::collection::vec(coaster(), 0..24)) {
        let once = project_coasters(&coasters);
        let twice = project_coasters(&flatten(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sections_are_sorted_disjoint_and_complete(coasters in prop::collection::vec(coaster(), 0..24)) {
        let sections = project_coasters(&coasters);

        for section in &sections {
            prop_assert!(!section.is_empty());
            for pair in section.items.windows(2) {
                prop_assert_ne!(compare_names(&pair[0].name, &pair[1].name), Ordering::Greater);
            }
            for item in &section.items {
                prop_assert_eq!(item.is_operating(), section.title == OPERATING_SECTION);
            }
        }

        let named = coasters.iter().filter(|c| !c.name.is_empty()).count();
        prop_assert_eq!(flatten(&sections).len(), named);
        prop_assert!(sections.len() <= 2);
        if sections.len() == 2 {
            prop_assert_eq!(sections[0].title, OPERATING_SECTION);
            prop_assert_eq!(sections[1].title, DEFUNCT_SECTION);
        }
    }

    #[test]
    fn park_projection_is_idempotent(names in prop::collection::vec("[A-Za-z ]{0,6}", 0..16)) {
        let parks: Vec<Park> = names.into_iter().map(Park::new).collect();
        let once = project_parks(&parks);
        prop_assert_eq!(project_parks(&once), once);
    }
}
