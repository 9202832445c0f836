use parkview_header::{HeaderRevealController, NavigationHost, RevealState};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingHost {
    titles: Vec<String>,
}

impl NavigationHost for RecordingHost {
    fn set_header_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}

fn controller(entity: &str) -> HeaderRevealController {
    let mut ctl = HeaderRevealController::new(12.0);
    ctl.enter(entity);
    ctl
}

#[test]
fn single_crossing_emits_once_with_entity_name() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");
    ctl.record_title_anchor(100.0);

    assert_eq!(ctl.on_scroll(80.0, &mut host), None);
    assert_eq!(ctl.on_scroll(90.0, &mut host), Some(RevealState::Shown));

    assert_eq!(host.titles, vec!["Six Flags"]);
}

#[test]
fn threshold_boundary_is_inclusive() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");
    ctl.record_title_anchor(100.0);

    ctl.on_scroll(87.9, &mut host);
    assert_eq!(ctl.state(), RevealState::Hidden);
    ctl.on_scroll(88.0, &mut host);
    assert_eq!(ctl.state(), RevealState::Shown);
}

#[test]
fn no_anchor_never_emits() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");

    for offset in [0.0, 50.0, 1_000.0, -20.0, f32::MAX, f32::NAN] {
        assert_eq!(ctl.on_scroll(offset, &mut host), None);
    }
    assert!(host.titles.is_empty());
    assert_eq!(ctl.state(), RevealState::Hidden);
}

#[test]
fn redundant_scrolls_do_not_re_emit() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");
    ctl.record_title_anchor(100.0);

    for offset in [90.0, 120.0, 400.0, 95.0] {
        ctl.on_scroll(offset, &mut host);
    }
    for offset in [10.0, 0.0, 50.0] {
        ctl.on_scroll(offset, &mut host);
    }

    assert_eq!(host.titles, vec!["Six Flags", ""]);
}

#[test]
fn oscillation_at_boundary_flickers() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");
    ctl.record_title_anchor(100.0);

    for offset in [88.0, 87.5, 88.0, 87.5] {
        ctl.on_scroll(offset, &mut host);
    }
    assert_eq!(host.titles, vec!["Six Flags", "", "Six Flags", ""]);
}

#[test]
fn anchor_orderings_agree() {
    // title-first, info-first, info-never
    let setups: [&dyn Fn(&mut HeaderRevealController); 3] = [
        &|c: &mut HeaderRevealController| {
            c.record_title_anchor(56.0);
            c.record_info_anchor(100.0);
        },
        &|c: &mut HeaderRevealController| {
            c.record_info_anchor(100.0);
            c.record_title_anchor(56.0);
        },
        &|c: &mut HeaderRevealController| c.record_title_anchor(100.0),
    ];

    for setup in setups {
        let mut host = RecordingHost::default();
        let mut ctl = controller("Cedar Point");
        setup(&mut ctl);
        assert_eq!(ctl.threshold(), Some(88.0));

        ctl.on_scroll(87.0, &mut host);
        ctl.on_scroll(89.0, &mut host);
        assert_eq!(host.titles, vec!["Cedar Point"]);
    }
}

#[test]
fn late_info_anchor_moves_threshold() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Cedar Point");
    ctl.record_title_anchor(56.0);

    ctl.on_scroll(60.0, &mut host);
    assert!(ctl.is_shown());

    ctl.record_info_anchor(100.0);
    ctl.on_scroll(60.0, &mut host);
    assert!(!ctl.is_shown());
    assert_eq!(host.titles, vec!["Cedar Point", ""]);
}

#[test]
fn re_entering_another_entity_re_arms() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");
    ctl.record_title_anchor(100.0);
    ctl.on_scroll(200.0, &mut host);
    assert!(ctl.is_shown());

    assert!(ctl.enter("Europa-Park"));
    assert_eq!(ctl.state(), RevealState::Hidden);
    assert_eq!(ctl.compact_title(), "");

    // Old anchors are gone until the new screen measures
    ctl.on_scroll(200.0, &mut host);
    assert_eq!(host.titles, vec!["Six Flags"]);

    ctl.record_info_anchor(40.0);
    ctl.on_scroll(200.0, &mut host);
    assert_eq!(host.titles, vec!["Six Flags", "Europa-Park"]);
}

#[test]
fn bursts_keep_only_latest_offset() {
    let mut host = RecordingHost::default();
    let mut ctl = controller("Six Flags");
    ctl.record_title_anchor(100.0);

    for i in 0..10_000 {
        ctl.on_scroll((i % 200) as f32, &mut host);
    }
    assert_eq!(ctl.last_offset(), Some(199.0));
    assert_eq!(host.titles.len(), 2 * 50 - 1);
}
