//! Whole-gesture flows through the public editor facade: place, link, drag,
//! toggle, clear, dump.

use graphpad::{Editor, HIT_THRESHOLD, Mode, Pt};

fn editor_with_two_linked_points() -> Editor {
    let mut editor = Editor::new();
    editor.primary_down(Pt::new(10.0, 10.0));
    editor.primary_down(Pt::new(60.0, 60.0));
    editor.secondary_down(Pt::new(10.0, 10.0));
    editor.secondary_down(Pt::new(60.0, 60.0));
    editor
}

#[test]
fn place_link_and_drag_round_trip() {
    let mut editor = editor_with_two_linked_points();
    assert_eq!(editor.graph().point_count(), 2);
    assert_eq!(editor.graph().line_count(), 1);

    editor.toggle_mode();
    assert_eq!(editor.mode(), Mode::Edit);

    // Grab slightly off-center, still within the hit radius.
    editor.primary_down(Pt::new(13.0, 8.0));
    editor.pointer_moved(Pt::new(45.0, 30.0));
    editor.pointer_moved(Pt::new(90.0, 90.0));
    editor.primary_up();

    let (_, line) = editor.graph().lines().next().unwrap();
    assert_eq!(line.a, Pt::new(90.0, 90.0));
    assert_eq!(line.b, Pt::new(60.0, 60.0));

    let moved = editor
        .graph()
        .find_point_near(Pt::new(90.0, 90.0), HIT_THRESHOLD)
        .expect("dragged point should be at its new position");
    assert_eq!(editor.graph().point(moved).unwrap().pos, Pt::new(90.0, 90.0));
}

#[test]
fn dragging_a_shared_point_updates_all_its_lines_but_no_others() {
    let mut editor = Editor::new();
    editor.primary_down(Pt::new(0.0, 0.0));
    editor.primary_down(Pt::new(100.0, 0.0));
    editor.primary_down(Pt::new(0.0, 100.0));
    // Hub at the origin, linked to both others; the others linked to each
    // other as well.
    editor.secondary_down(Pt::new(0.0, 0.0));
    editor.secondary_down(Pt::new(100.0, 0.0));
    editor.secondary_down(Pt::new(0.0, 0.0));
    editor.secondary_down(Pt::new(0.0, 100.0));
    editor.secondary_down(Pt::new(100.0, 0.0));
    editor.secondary_down(Pt::new(0.0, 100.0));
    assert_eq!(editor.graph().line_count(), 3);

    editor.toggle_mode();
    editor.primary_down(Pt::new(0.0, 0.0));
    editor.pointer_moved(Pt::new(50.0, 50.0));
    editor.primary_up();

    let lines: Vec<_> = editor.graph().lines().map(|(_, l)| *l).collect();
    assert_eq!(lines[0].a, Pt::new(50.0, 50.0));
    assert_eq!(lines[0].b, Pt::new(100.0, 0.0));
    assert_eq!(lines[1].a, Pt::new(50.0, 50.0));
    assert_eq!(lines[1].b, Pt::new(0.0, 100.0));
    // The edge between the two untouched points is unchanged.
    assert_eq!(lines[2].a, Pt::new(100.0, 0.0));
    assert_eq!(lines[2].b, Pt::new(0.0, 100.0));
}

#[test]
fn lines_keep_creation_coordinates_until_an_endpoint_owner_moves() {
    let mut editor = editor_with_two_linked_points();

    // Placing more points nearby must not disturb the existing line.
    editor.primary_down(Pt::new(11.0, 11.0));
    let (_, line) = editor.graph().lines().next().unwrap();
    assert_eq!(line.a, Pt::new(10.0, 10.0));
    assert_eq!(line.b, Pt::new(60.0, 60.0));
}

#[test]
fn mode_toggle_cancels_a_half_built_link() {
    let mut editor = Editor::new();
    editor.primary_down(Pt::new(10.0, 10.0));
    editor.primary_down(Pt::new(60.0, 60.0));
    editor.secondary_down(Pt::new(10.0, 10.0));
    assert!(editor.pending_link().is_some());

    editor.toggle_mode();
    editor.toggle_mode();
    assert_eq!(editor.mode(), Mode::Build);
    assert_eq!(editor.pending_link(), None);

    // The earlier pick is forgotten: this pick starts a new pending link
    // instead of completing the old one.
    editor.secondary_down(Pt::new(60.0, 60.0));
    assert_eq!(editor.graph().line_count(), 0);
    assert!(editor.pending_link().is_some());
}

#[test]
fn clear_is_idempotent_and_total() {
    let mut editor = editor_with_two_linked_points();
    editor.secondary_down(Pt::new(10.0, 10.0));

    editor.clear();
    editor.clear();

    assert_eq!(editor.graph().point_count(), 0);
    assert_eq!(editor.graph().line_count(), 0);
    assert_eq!(editor.pending_link(), None);
    assert_eq!(editor.grabbed_point(), None);

    // The canvas is immediately usable again.
    editor.primary_down(Pt::new(5.0, 5.0));
    assert_eq!(editor.graph().point_count(), 1);
}

#[test]
fn dump_reflects_current_coordinates_after_a_drag() {
    let mut editor = editor_with_two_linked_points();
    editor.toggle_mode();
    editor.primary_down(Pt::new(10.0, 10.0));
    editor.pointer_moved(Pt::new(25.0, 35.0));
    editor.primary_up();

    let dump = editor.dump();
    assert!(dump.contains("Point 0 - x: 25.0, y: 35.0"));
    assert!(dump.contains("Point 1 - x: 60.0, y: 60.0"));
    assert!(dump.contains("  Line - x1: 25.0, y1: 35.0, x2: 60.0, y2: 60.0"));
    assert!(!dump.contains("x1: 10.0"));
}
