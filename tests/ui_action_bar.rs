use actionbar::config::Config;
use actionbar::icons::{IconService, IconTheme};
use actionbar::logger::Logger;
use actionbar::menu::{ActionSet, MenuAction, MenuGroup};
use actionbar::overflow::{GroupKind, MeasureOptions};
use actionbar::ui::components::{ActionBar, BarEntry, StatusMessage};
use actionbar::ui::core::{Action, Component};
use actionbar::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

fn test_set() -> ActionSet {
    ActionSet::new(
        vec![
            MenuAction::new("Save"),
            MenuAction::new("Duplicate"),
            MenuAction::new("Export"),
            MenuAction::new("Archive").disabled(),
        ],
        vec![MenuGroup::new("More", vec![MenuAction::new("Delete")])],
    )
}

fn test_bar() -> ActionBar {
    ActionBar::new(
        test_set(),
        MeasureOptions {
            spacing: 1,
            max_passes: 4,
        },
        IconService::new(IconTheme::Ascii),
        "More actions".to_string(),
    )
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

/// Draw until the bar settles
fn settle(terminal: &mut Terminal<TestBackend>, bar: &mut ActionBar) {
    for _ in 0..4 {
        terminal.draw(|f| bar.render(f, Rect::new(0, 0, 40, 3))).unwrap();
    }
    assert!(!bar.is_measuring());
}

fn entry_labels(bar: &ActionBar) -> Vec<String> {
    bar.entries()
        .into_iter()
        .map(|entry| match entry {
            BarEntry::Action(action) => action.content,
            BarEntry::Group(group) => group.title,
        })
        .collect()
}

#[test]
fn test_narrow_bar_rolls_actions_into_trailing_group() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut bar = test_bar();
    settle(&mut terminal, &mut bar);

    assert_eq!(entry_labels(&bar), vec!["Save", "Duplicate", "More"]);

    let line = row(terminal.backend().buffer(), 1);
    assert!(line.contains("[ Save ]"), "row was {line:?}");
    assert!(line.contains("[ Duplicate ]"));
    assert!(line.contains("[ More v ]"));
    assert!(!line.contains("Export"));

    match &bar.entries()[2] {
        BarEntry::Group(group) => {
            assert_eq!(group.kind, GroupKind::Rollup);
            let contents: Vec<&str> = group.actions.iter().map(|a| a.content.as_str()).collect();
            assert_eq!(contents, vec!["Export", "Archive", "Delete"]);
        }
        other => panic!("expected the rollup group, got {other:?}"),
    }
}

#[test]
fn test_dropdown_opens_and_activates() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut bar = test_bar();
    settle(&mut terminal, &mut bar);

    assert_eq!(bar.update(Action::FocusPrevious), Action::Render);
    assert_eq!(bar.focus(), 2);
    assert_eq!(bar.update(Action::Activate), Action::Render);
    assert!(bar.menu_state().is_open("More"));

    terminal.draw(|f| bar.render(f, Rect::new(0, 0, 40, 3))).unwrap();
    let buffer = terminal.backend().buffer();
    assert!(row(buffer, 4).contains("> Export"));
    assert!(row(buffer, 5).contains("Archive x"));
    assert!(row(buffer, 6).contains("Delete"));

    bar.update(Action::MenuNext);
    assert_eq!(bar.menu_selection(), 1);
    assert_eq!(bar.update(Action::MenuActivate), Action::InvokeDisabled("Archive".to_string()));
    assert_eq!(bar.menu_state().active(), None);

    bar.update(Action::Activate);
    assert_eq!(bar.update(Action::MenuActivate), Action::Invoke(MenuAction::new("Export")));
}

#[test]
fn test_key_mapping_depends_on_open_dropdown() {
    let mut bar = test_bar();
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    assert_eq!(bar.handle_key_events(key(KeyCode::Char('l'))), Action::FocusNext);
    assert_eq!(bar.handle_key_events(key(KeyCode::Enter)), Action::Activate);
    assert_eq!(bar.handle_key_events(key(KeyCode::Char('j'))), Action::None);

    bar.update(Action::ToggleGroup("More".to_string()));
    assert_eq!(bar.handle_key_events(key(KeyCode::Char('j'))), Action::MenuNext);
    assert_eq!(bar.handle_key_events(key(KeyCode::Esc)), Action::CloseGroup);
    assert_eq!(bar.handle_key_events(key(KeyCode::Enter)), Action::MenuActivate);
}

#[test]
fn test_settled_resize_widens_the_bar() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut bar = test_bar();
    settle(&mut terminal, &mut bar);

    bar.update(Action::ResizeSettled(80));

    assert!(!bar.is_measuring());
    assert_eq!(
        entry_labels(&bar),
        vec!["Save", "Duplicate", "Export", "Archive", "More"]
    );
}

#[test]
fn test_app_routes_keys_and_invocations() {
    let mut app = AppComponent::new(&Config::default(), ActionSet::demo(), Logger::new());
    let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
    for _ in 0..4 {
        terminal
            .draw(|f| {
                let area = f.area();
                app.render(f, area);
            })
            .unwrap();
    }
    assert!(!app.needs_layout_pass());

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let action = app.handle_key_events(enter);
    assert_eq!(app.update(action), Action::Render);
    assert_eq!(app.status_bar().message(), &StatusMessage::Invoked("duplicate".to_string()));

    let logs = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE);
    let action = app.handle_key_events(logs);
    app.update(action);
    assert!(app.is_showing_logs());

    let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let action = app.handle_key_events(quit);
    assert_eq!(app.update(action), Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_empty_action_set_settles_without_redrawing() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut bar = ActionBar::new(
        ActionSet::default(),
        MeasureOptions::default(),
        IconService::new(IconTheme::Ascii),
        "More actions".to_string(),
    );

    terminal.draw(|f| bar.render(f, Rect::new(0, 0, 40, 3))).unwrap();

    assert!(!bar.is_measuring());
    assert!(bar.measurer().is_settled());
    assert!(bar.entries().is_empty());
}

#[test]
fn test_zero_width_bar_stops_asking_for_layout_passes() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut bar = test_bar();

    terminal.draw(|f| bar.render(f, Rect::new(0, 0, 4, 3))).unwrap();

    assert!(!bar.is_measuring());
    assert!(!bar.measurer().is_settled());
    assert!(bar.measurer().partition().is_empty());

    // The debounced resize brings the bar back to a usable width
    bar.update(Action::ResizeSettled(40));
    assert!(bar.is_measuring());
    settle(&mut terminal, &mut bar);
    assert_eq!(entry_labels(&bar), vec!["Save", "Duplicate", "More"]);
}

#[test]
fn test_replacing_actions_keeps_the_settled_boundary() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut bar = test_bar();
    settle(&mut terminal, &mut bar);
    bar.update(Action::ToggleGroup("More".to_string()));

    bar.set_action_set(ActionSet::new(
        vec![
            MenuAction::new("Open"),
            MenuAction::new("Copy"),
            MenuAction::new("Rename"),
            MenuAction::new("Share"),
        ],
        vec![MenuGroup::new("More", vec![MenuAction::new("Delete")])],
    ));

    assert!(!bar.is_measuring());
    assert_eq!(bar.menu_state().active(), None);
    assert_eq!(entry_labels(&bar), vec!["Open", "Copy", "More"]);

    bar.set_action_set(ActionSet::new(vec![MenuAction::new("Open")], Vec::new()));
    assert!(bar.is_measuring());
    settle(&mut terminal, &mut bar);
    assert_eq!(entry_labels(&bar), vec!["Open"]);
}
