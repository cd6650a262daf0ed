use crossterm::event::KeyCode;
use five_card_rank::dealer::DealConfig;
use five_card_rank::evaluator::Ruleset;
use five_card_rank::tui::app::{AppState, InputAction, Scene};
use five_card_rank::tui::controller::handle_key;

fn setup_table_app() -> AppState {
    let mut app = AppState::with_config(DealConfig { seed: Some(11), ruleset: Ruleset::Reference });
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, app.menu_items_display().len() - 1);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn labels_toggle_applies_to_new_session() {
    let mut app = AppState::default();
    assert!(app.menu_items_display()[0].contains("Reference"));
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_ruleset, Ruleset::Conventional);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.dealer.ruleset(), Ruleset::Conventional);
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn keys_deal_and_quit() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert_eq!(app.dealer.deals(), 2);
    assert!(app.dealer.last().is_some());

    assert!(!handle_key(&mut app, KeyCode::Char('m')));
    assert_eq!(app.scene, Scene::Menu);
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert_eq!(app.scene, Scene::Table);
    assert_eq!(app.dealer.deals(), 2);

    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn overlays_swallow_deal_keys() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.dealer.deals(), 0);
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.dealer.deals(), 1);
}
