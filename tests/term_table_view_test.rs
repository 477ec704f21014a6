use spoticards::core::GameSession;
use spoticards::term::{TableUi, TableView, Viewport};
use spoticards::types::{GuessField, Track};

fn session(years: &[i32]) -> GameSession {
    let tracks: Vec<Track> = years
        .iter()
        .map(|&y| Track::new(&format!("Hit of {y}"), "Band", y))
        .collect();
    GameSession::with_target(&tracks, 3, 42).unwrap()
}

fn place_sorted(session: &mut GameSession) {
    let year = session.draw_next_card().unwrap().release_year;
    let slot = session
        .timeline()
        .iter()
        .position(|t| t.release_year > year)
        .unwrap_or(session.timeline().len());
    session.place_current_card(slot).unwrap();
}

#[test]
fn term_view_shows_header_and_empty_timeline() {
    let snap = session(&[1990, 2000]).snapshot();
    let ui = TableUi {
        playlist: "nineties".to_string(),
        ..TableUi::default()
    };
    let fb = TableView::default().render(&snap, &ui, Viewport::new(100, 24));

    let header = fb.row_text(0);
    assert!(header.contains("SPOTICARDS"));
    assert!(header.contains("nineties"));
    assert!(header.contains("Score 0"));
    assert!(fb.row_text(1).contains("Correct 0/3"));
    assert!(fb.text().contains("press n to draw"));
}

#[test]
fn term_view_draws_placed_cards_with_years() {
    let mut s = session(&[1985, 1995, 2005]);
    place_sorted(&mut s);
    place_sorted(&mut s);
    let snap = s.snapshot();

    let ui = TableUi {
        cursor: 2,
        ..TableUi::default()
    };
    let fb = TableView::default().render(&snap, &ui, Viewport::new(100, 24));
    let text = fb.text();

    for track in &snap.timeline {
        assert!(text.contains(&track.release_year.to_string()));
    }
    assert!(text.contains('▼'));
}

#[test]
fn term_view_keeps_pending_card_face_down() {
    let mut s = session(&[1977]);
    s.draw_next_card();
    let snap = s.snapshot();

    let fb = TableView::default().render(&snap, &TableUi::default(), Viewport::new(100, 24));
    let text = fb.text();
    assert!(text.contains("face down"));
    assert!(!text.contains("Hit of 1977"));
    assert!(!text.contains("1977"));
}

#[test]
fn term_view_shows_guess_being_typed() {
    let mut s = session(&[1977]);
    s.draw_next_card();
    s.guess_mut().title = "Heroes".to_string();
    let snap = s.snapshot();

    let ui = TableUi {
        editing: Some(GuessField::Title),
        ..TableUi::default()
    };
    let fb = TableView::default().render(&snap, &ui, Viewport::new(100, 24));
    let text = fb.text();
    assert!(text.contains("Heroes"));
    assert!(text.contains("esc done"));
}

#[test]
fn term_view_win_and_exhausted_overlays() {
    let mut s = session(&[1970, 1980, 1990]);
    for _ in 0..3 {
        place_sorted(&mut s);
    }
    let snap = s.snapshot();
    assert!(snap.is_won);
    let fb = TableView::default().render(&snap, &TableUi::default(), Viewport::new(100, 24));
    assert!(fb.text().contains("YOU WIN!"));

    let mut s = session(&[1970]);
    s.draw_next_card();
    s.place_current_card(0).unwrap();
    let snap = s.snapshot();
    let fb = TableView::default().render(&snap, &TableUi::default(), Viewport::new(100, 24));
    assert!(fb.text().contains("DECK EXHAUSTED"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let mut s = session(&[1970, 1980]);
    place_sorted(&mut s);
    let snap = s.snapshot();
    let fb = TableView::default().render(&snap, &TableUi::default(), Viewport::new(8, 3));
    assert_eq!(fb.width(), 8);
    assert_eq!(fb.height(), 3);
}
