use tui_2048::core::{Board, GameState};
use tui_2048::term::{tile_style, AnchorY, GameView, Viewport};

fn screen_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot_of(values: [[u32; 4]; 4]) -> tui_2048::core::GameSnapshot {
    GameState::with_board(Board::from_values(values).unwrap(), 1).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles of 7x3 with 1-cell gaps, plus the border => 35x19
    let (w, h) = view.frame_size();
    assert_eq!((w, h), (35, 19));
    let fb = view.render(&snap, Viewport::new(w, h));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_value() {
    let snap = snapshot_of([[2048, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]]);
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(35, 19));

    let (x, y) = view.tile_origin(0, 0, 0, 0);
    assert_eq!((x, y), (2, 2));
    let text: String = fb.row_string(y + 1).chars().skip(x as usize).take(7).collect();
    assert_eq!(text, " 2048  ");

    let (x, y) = view.tile_origin(0, 0, 3, 3);
    let cell = fb.get(x + 3, y + 1).unwrap();
    assert_eq!(cell.ch, '8');
    assert_eq!(cell.style, tile_style(8));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.best_score = 5678;
    snap.moves = 42;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5678"));
    assert!(all.contains("MOVES"));
    assert!(all.contains("n new game"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(35, 19));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_points_from_last_move() {
    let mut state = GameState::with_board(
        Board::from_values([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]).unwrap(),
        1,
    );
    assert!(state.apply_move(tui_2048::types::Direction::Left));
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("12 +12"));
}

#[test]
fn term_view_overlays_game_over() {
    let snap = snapshot_of([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(snap.game_over);
    let all = screen_text(&GameView::default().render(&snap, Viewport::new(80, 24)));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("n: new game"));
}

#[test]
fn term_view_overlays_win_until_continued() {
    let mut state = GameState::with_board(
        Board::from_values([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap(),
        1,
    );
    assert!(state.apply_move(tui_2048::types::Direction::Left));
    let view = GameView::default();

    let all = screen_text(&view.render(&state.snapshot(), Viewport::new(80, 24)));
    assert!(all.contains("YOU WIN!"));
    assert!(all.contains("c keep going"));

    state.continue_after_win();
    let all = screen_text(&view.render(&state.snapshot(), Viewport::new(80, 24)));
    assert!(!all.contains("YOU WIN!"));
}

#[test]
fn term_view_anchor_top_pins_frame() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let (_, y) = view.frame_origin(Viewport::new(80, 40));
    assert_eq!(y, 0);
    let fb = view.render(&snap, Viewport::new(80, 40));
    assert!(fb.row_string(0).contains('┌'));
}

#[test]
fn term_view_renders_overflow_tiles() {
    let snap = snapshot_of([[8192, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(35, 19));
    let (x, y) = view.tile_origin(0, 0, 0, 0);
    assert!(fb.row_string(y + 1).contains("8192"));
    assert_eq!(fb.get(x, y).unwrap().style, tile_style(4096));
}

#[test]
fn term_view_highlights_fresh_merges() {
    let mut state = GameState::with_board(
        Board::from_values([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap(),
        1,
    );
    assert!(state.apply_move(tui_2048::types::Direction::Left));
    assert!(state.merged_at(0, 0));

    let view = GameView::default();
    let fb = view.render(&state.snapshot(), Viewport::new(35, 19));
    let (x, y) = view.tile_origin(0, 0, 0, 0);
    let style = fb.get(x + 3, y + 1).unwrap().style;
    assert!(style.bold);
    assert!(!tile_style(8).bold);
}
