//! Timeline properties over realistic threads

use threadreplay::timeline::{build_timeline, ReplayOptions};

use crate::helpers::load_fixture;

fn thread_timeline(window_minutes: u32) -> threadreplay::Timeline {
    let thread = load_fixture("thread.json");
    build_timeline(&thread.nodes, &ReplayOptions::with_window(window_minutes))
}

#[test]
fn fixture_thread_is_valid_preorder() {
    let thread = load_fixture("thread.json");
    assert_eq!(thread.len(), 12);
    thread.validate().expect("fixture should validate");
}

#[test]
fn fixture_thread_gets_thirty_minute_window() {
    let thread = load_fixture("thread.json");
    assert_eq!(ReplayOptions::for_thread(thread.len()).window_minutes, 30);
}

#[test]
fn frame_count_for_thirty_minute_window() {
    assert_eq!(thread_timeline(30).len(), 34);
}

#[test]
fn every_frame_starts_with_the_story() {
    for window in [5, 15, 30] {
        let timeline = thread_timeline(window);
        for frame in &timeline {
            let first = &frame.entries[0];
            assert_eq!(first.id, 8863, "window {} at {}", window, frame.time);
            assert!(first.root);
            assert_eq!(first.indent, "");
        }
    }
}

#[test]
fn frame_times_strictly_increase() {
    for window in [5, 15, 30] {
        let times = thread_timeline(window).times();
        assert!(
            times.windows(2).all(|pair| pair[0] < pair[1]),
            "window {}: {:?}",
            window,
            times
        );
    }
}

#[test]
fn every_reply_is_shown_for_minimum_exposure() {
    let thread = load_fixture("thread.json");
    for window in [5, 15, 30] {
        let timeline = thread_timeline(window);
        for node in thread.nodes.iter().skip(1) {
            assert!(
                timeline.exposure(node.id) >= 5,
                "window {}: item {} shown {} times",
                window,
                node.id,
                timeline.exposure(node.id)
            );
        }
    }
}

#[test]
fn entries_keep_thread_order() {
    let thread = load_fixture("thread.json");
    let order: Vec<u64> = thread.nodes.iter().map(|node| node.id).collect();
    let timeline = thread_timeline(30);

    for frame in &timeline {
        let positions: Vec<usize> = frame
            .ids()
            .iter()
            .map(|id| order.iter().position(|other| other == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn first_frame_is_story_alone_at_rounded_time() {
    let timeline = thread_timeline(30);
    let first = timeline.get(0).unwrap();

    assert_eq!(first.time, 1175714220);
    assert_eq!(first.ids(), vec![8863]);
    assert_eq!(first.entries[0].age, "0m");
}

#[test]
fn last_frame_is_story_alone_after_final_activity() {
    let timeline = thread_timeline(30);
    let last = timeline.get(timeline.len() - 1).unwrap();

    assert_eq!(last.ids(), vec![8863]);
    assert!(!last.entries[0].active);
    assert_eq!(last.entries[0].age, "29h 12m");
}

#[test]
fn stale_reply_becomes_placeholder_above_active_descendant() {
    let timeline = thread_timeline(30);
    let frame = timeline.get(10).unwrap();

    assert_eq!(frame.ids(), vec![8863, 8884, 8888, 8890]);

    let stale = frame.entry(8884).unwrap();
    assert!(!stale.active);
    assert_eq!(stale.text, None);
    assert_eq!(stale.indent, " \\");

    let active = frame.entry(8890).unwrap();
    assert!(active.active);
    assert_eq!(active.age, "30m");
    assert_eq!(active.indent, "   \\-");
}

#[test]
fn ages_past_an_hour_show_hours_and_minutes() {
    let timeline = thread_timeline(30);
    let frame = timeline.get(16).unwrap();

    assert_eq!(frame.ids(), vec![8863, 8952]);
    assert_eq!(frame.entries[0].age, "20h 00m");
    assert_eq!(frame.entries[1].age, "0m");
}

#[test]
fn deep_chain_keeps_inactive_parent_of_active_reply() {
    let timeline = thread_timeline(30);
    let frame = timeline.get(30).unwrap();

    assert_eq!(frame.ids(), vec![8863, 8952, 9224, 8917, 9479]);
    assert_eq!(frame.entry(8952).unwrap().text, None);
    assert_eq!(frame.entry(9224).unwrap().indent, "  \\-");
    assert!(!frame.entry(9224).unwrap().active);
    assert!(frame.entry(8917).unwrap().active);
}

#[test]
fn stale_ancestor_exposures() {
    let thread = load_fixture("stale_ancestor.json");
    let timeline = build_timeline(&thread.nodes, &ReplayOptions::with_window(10));

    assert_eq!(
        timeline.times(),
        vec![0, 60, 660, 1200, 1800, 2400, 2820, 2880, 2940, 3000, 3060]
    );
    assert_eq!(timeline.exposure(2), 9);
    assert_eq!(timeline.exposure(3), 7);
    assert_eq!(timeline.exposure(4), 5);
}

#[test]
fn lenient_build_of_broken_thread_terminates() {
    let thread = load_fixture("broken.json");
    assert!(thread.validate().is_err());

    let timeline = build_timeline(&thread.nodes, &ReplayOptions::default());
    assert!(!timeline.is_empty());
    assert!(timeline.iter().all(|frame| frame.entries[0].id == 1));
}

#[test]
fn empty_fixture_builds_empty_timeline() {
    let thread = load_fixture("empty.json");
    assert!(thread.is_empty());
    assert!(build_timeline(&thread.nodes, &ReplayOptions::default()).is_empty());
}
