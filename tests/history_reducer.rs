use pixel_editor::{Action, Color, Edit, EditorState, HistoryReducer, Picture, ToolId};

fn start_state() -> EditorState {
    EditorState::new(
        ToolId::Draw,
        Color::BLACK,
        Picture::empty(6, 6, Color::WHITE).unwrap(),
    )
}

fn paint(picture: &Picture, x: usize) -> Picture {
    picture.with_edits(&[Edit::new(x, x, Color::BLACK)])
}

#[test]
fn test_burst_undoes_as_one_step() {
    let reducer = HistoryReducer::default();
    let start = start_state();
    let p1 = paint(&start.picture, 0);
    let p2 = paint(&p1, 1);

    let state = reducer.reduce(&start, Action::picture(p1), 100_000).unwrap();
    let state = reducer.reduce(&state, Action::picture(p2.clone()), 100_500).unwrap();
    assert_eq!(state.picture, p2);
    assert_eq!(state.history.len(), 1);

    let state = reducer.reduce(&state, Action::undo(), 100_600).unwrap();
    assert_eq!(state.picture, start.picture);
    assert!(state.history.is_empty());
}

#[test]
fn test_undo_on_fresh_state_changes_nothing() {
    let reducer = HistoryReducer::default();
    let start = start_state();
    let state = reducer.reduce(&start, Action::undo(), 42).unwrap();
    assert_eq!(state, start);
    assert!(state.picture.same_as(&start.picture));
}

#[test]
fn test_separate_strokes_undo_one_at_a_time() {
    let reducer = HistoryReducer::default();
    let start = start_state();
    let p1 = paint(&start.picture, 0);
    let p2 = paint(&p1, 1);
    let p3 = paint(&p2, 2);

    let mut state = start.clone();
    for (picture, at) in [(p1.clone(), 10_000), (p2.clone(), 12_000), (p3, 14_000)] {
        state = reducer.reduce(&state, Action::picture(picture), at).unwrap();
    }
    assert_eq!(state.history.len(), 3);

    let state = reducer.reduce(&state, Action::undo(), 14_100).unwrap();
    assert_eq!(state.picture, p2);
    let state = reducer.reduce(&state, Action::undo(), 14_200).unwrap();
    assert_eq!(state.picture, p1);
    let state = reducer.reduce(&state, Action::undo(), 14_300).unwrap();
    assert_eq!(state.picture, start.picture);
}

#[test]
fn test_edit_after_window_opens_new_step() {
    let reducer = HistoryReducer::default();
    let start = start_state();
    let p1 = paint(&start.picture, 0);
    let p2 = paint(&p1, 1);

    let state = reducer.reduce(&start, Action::picture(p1.clone()), 50_000).unwrap();
    // Exactly on the boundary still coalesces.
    let same_step = reducer.reduce(&state, Action::picture(p2.clone()), 51_000).unwrap();
    assert_eq!(same_step.history.len(), 1);

    let new_step = reducer.reduce(&state, Action::picture(p2), 51_001).unwrap();
    assert_eq!(new_step.history, vec![p1, start.picture]);
    assert_eq!(new_step.last_checkpoint, Some(51_001));
}

#[test]
fn test_tool_and_color_changes_skip_history() {
    let reducer = HistoryReducer::default();
    let start = start_state();
    let red = Color::rgb(255, 0, 0);

    let state = reducer
        .reduce(&start, Action::tool(ToolId::Fill).with_color(red), 1_000)
        .unwrap();
    assert_eq!(state.tool, ToolId::Fill);
    assert_eq!(state.color, red);
    assert!(state.history.is_empty());
    assert!(state.picture.same_as(&start.picture));
    assert_eq!(state.last_checkpoint, None);
}

#[test]
fn test_reduce_leaves_input_state_untouched() {
    let reducer = HistoryReducer::default();
    let start = start_state();
    let snapshot = start.clone();
    let _ = reducer.reduce(&start, Action::picture(paint(&start.picture, 3)), 5_000).unwrap();
    assert_eq!(start, snapshot);
}
