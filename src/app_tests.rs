use super::*;
use crate::data::{to_entries, BUNDLED_CLASS_FIRST, BUNDLED_CLASS_SECOND, BUNDLED_DATA};

fn bundled_app() -> App {
    let store = VocabStore::new(
        vec![to_entries("core", BUNDLED_DATA)],
        to_entries("first", BUNDLED_CLASS_FIRST),
        to_entries("second", BUNDLED_CLASS_SECOND),
        Vec::new(),
    );
    App::new(store, RoundGenerator::seeded(1), None)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::from(code));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn select_correct(app: &mut App) {
    let correct: Vec<usize> = app
        .round
        .as_ref()
        .unwrap()
        .options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_correct)
        .map(|(i, _)| i)
        .collect();
    for i in correct {
        app.toggle_option(i);
    }
}

#[test]
fn test_new_app_state() {
    let app = bundled_app();
    assert_eq!(app.current_screen, CurrentScreen::Menu);
    assert_eq!(app.score.attempts, 0);
    assert_eq!(app.menu_selection, 0);
    assert!(app.round.is_none());
}

#[test]
fn test_start_quiz() {
    let mut app = bundled_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen, CurrentScreen::Quiz);
    let round = app.round.as_ref().unwrap();
    assert!(!round.options.is_empty());
    assert!(round.options.len() <= 8);
}

#[test]
fn test_correct_answer() {
    let mut app = bundled_app();
    app.start_quiz(QuizMode::AllWords);
    select_correct(&mut app);
    app.check_answer();

    assert_eq!(app.feedback, Some(true));
    assert_eq!(app.score.correct, 1);
    assert_eq!(app.streak, 1);
}

#[test]
fn test_incorrect_answer() {
    let mut app = bundled_app();
    app.start_quiz(QuizMode::AllWords);
    let wrong = app
        .round
        .as_ref()
        .unwrap()
        .options
        .iter()
        .position(|o| !o.is_correct)
        .unwrap();
    press(&mut app, KeyCode::Char(char::from(b'1' + wrong as u8)));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.feedback, Some(false));
    assert_eq!(app.score.correct, 0);
    assert_eq!(app.score.attempts, 1);
    assert_eq!(app.streak, 0);
}

#[test]
fn test_quiz_screen_shows_correct_answer_count() {
    use ratatui::{backend::TestBackend, Terminal};

    let mut app = bundled_app();
    let big = app.store.find("big").unwrap().clone();
    app.practice(&big);
    let expected = app.round.as_ref().unwrap().correct_count();
    assert_eq!(expected, big.synonyms.len());

    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| crate::ui::render(&app, frame)).unwrap();
    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();

    assert!(screen.contains(&crate::ui::correct_answers_label(expected)));
    assert_eq!(crate::ui::correct_answers_label(1), "1 correct answer");
}

#[test]
fn test_selection_locked_after_check() {
    let mut app = bundled_app();
    app.start_quiz(QuizMode::AllWords);
    app.check_answer();
    app.toggle_option(0);
    assert!(app.selected.is_empty());

    press(&mut app, KeyCode::Char('n'));
    assert!(app.feedback.is_none());
}

#[test]
fn test_menu_navigation() {
    let mut app = bundled_app();
    let last = MENU_ITEMS.len() - 1;

    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu_selection, 1);

    for _ in 1..last {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.menu_selection, last);

    // wrap
    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu_selection, 0);

    press(&mut app, KeyCode::Up);
    assert_eq!(app.menu_selection, last);
}

#[test]
fn test_class_session_runs_to_completion() {
    let mut app = bundled_app();
    app.start_quiz(QuizMode::Class(ClassList::First));
    assert_eq!(app.class_session.as_ref().unwrap().total(), BUNDLED_CLASS_FIRST.len());

    let mut quizzed = Vec::new();
    while let Some(round) = app.round.clone() {
        assert!(round.target.is_class_word);
        quizzed.push(round.target.headword);
        select_correct(&mut app);
        app.check_answer();
        app.next_round();
    }

    quizzed.sort();
    let mut expected: Vec<&str> = BUNDLED_CLASS_FIRST.iter().map(|b| b.headword).collect();
    expected.sort();
    assert_eq!(quizzed, expected);

    let session = app.class_session.as_ref().unwrap();
    assert!(session.is_finished());
    assert_eq!(session.hits as usize, BUNDLED_CLASS_FIRST.len());

    press(&mut app, KeyCode::Char('r'));
    assert!(app.round.is_some());
}

#[test]
fn test_empty_vocabulary_stays_on_menu() {
    let mut app = App::new(VocabStore::default(), RoundGenerator::seeded(1), None);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen, CurrentScreen::Menu);
    assert!(app.status.is_some());
}

#[test]
fn test_browse_then_practice_pins_word() {
    let mut app = bundled_app();
    app.menu_selection = 4;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen, CurrentScreen::Browse);

    type_text(&mut app, "enormous");
    assert_eq!(app.browse_results().len(), 1);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen, CurrentScreen::Quiz);
    assert_eq!(app.round.as_ref().unwrap().target.headword, "big");
}

#[test]
fn test_add_word_persists_to_user_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user.json");
    let mut app = bundled_app();
    app.user_data = Some(path.clone());

    app.menu_selection = 5;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen, CurrentScreen::Edit);

    type_text(&mut app, "Polita");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ederra, dotorea");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen, CurrentScreen::Browse);
    let saved = app.store.find("polita").unwrap();
    assert_eq!(saved.synonyms, vec!["ederra", "dotorea"]);
    assert!(saved.is_class_word);

    let on_disk = crate::storage::load_entries(&path).unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].headword, "Polita");
}

#[test]
fn test_incomplete_word_is_not_saved() {
    let mut app = bundled_app();
    app.menu_selection = 5;
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "lonely");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen, CurrentScreen::Edit);
    assert!(app.status.is_some());
    assert!(app.store.find("lonely").is_none());
}

#[test]
fn test_ctrl_c_exits_anywhere() {
    let mut app = bundled_app();
    app.current_screen = CurrentScreen::Edit;
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.exit);
}
