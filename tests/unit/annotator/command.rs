use super::*;
use crate::core::event::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn shifted(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::SHIFT,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_default_bindings_pair_arrows_with_letters() {
    let bindings = Keybindings::default();

    for (arrow, letter, expected) in [
        (KeyCode::Up, 'k', Command::PrevChar),
        (KeyCode::Down, 'j', Command::NextChar),
        (KeyCode::Left, 'h', Command::PrevLine),
        (KeyCode::Right, 'l', Command::NextLine),
    ] {
        assert_eq!(bindings.get(&Key::simple(arrow)), Some(&expected));
        assert_eq!(
            bindings.get(&Key::simple(KeyCode::Char(letter))),
            Some(&expected)
        );
    }
}

#[test]
fn test_tagging_keys() {
    let bindings = Keybindings::default();

    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('i'))),
        Some(Command::TagWithin)
    );
    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('o'))),
        Some(Command::TagOut)
    );
    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('b'))),
        Some(Command::EnterLabel)
    );
    // 大写 I 也进入标签输入
    assert_eq!(
        bindings.translate(Mode::Navigation, &shifted('I')),
        Some(Command::EnterLabel)
    );
}

#[test]
fn test_quit_and_save_keys() {
    let bindings = Keybindings::default();

    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('q'))),
        Some(Command::Quit)
    );
    assert_eq!(
        bindings.translate(Mode::Navigation, &shifted('Q')),
        Some(Command::Quit)
    );
    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('w'))),
        Some(Command::Save)
    );
}

#[test]
fn test_unbound_navigation_key_is_noop() {
    let bindings = Keybindings::default();

    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('z'))),
        None
    );
    assert_eq!(bindings.translate(Mode::Navigation, &press(KeyCode::Esc)), None);
}

#[test]
fn test_label_entry_translation() {
    let bindings = Keybindings::default();

    assert_eq!(
        bindings.translate(Mode::LabelEntry, &press(KeyCode::Enter)),
        Some(Command::CommitLabel)
    );
    assert_eq!(
        bindings.translate(Mode::LabelEntry, &press(KeyCode::Char('x'))),
        Some(Command::AppendCategory('x'))
    );
    // 录入模式下 q 是普通类别字符，不退出
    assert_eq!(
        bindings.translate(Mode::LabelEntry, &press(KeyCode::Char('q'))),
        Some(Command::AppendCategory('q'))
    );
    assert_eq!(
        bindings.translate(Mode::LabelEntry, &press(KeyCode::Char('_'))),
        Some(Command::AppendCategory('_'))
    );

    assert_eq!(
        bindings.translate(Mode::LabelEntry, &press(KeyCode::Char('1'))),
        None
    );
    assert_eq!(
        bindings.translate(Mode::LabelEntry, &press(KeyCode::Up)),
        None
    );
}

#[test]
fn test_custom_binding() {
    let mut bindings = Keybindings::empty();
    assert_eq!(bindings.translate(Mode::Navigation, &press(KeyCode::Char('o'))), None);

    bindings.bind(Key::simple(KeyCode::Char('o')), Command::TagOut);
    assert_eq!(
        bindings.translate(Mode::Navigation, &press(KeyCode::Char('o'))),
        Some(Command::TagOut)
    );
}

#[test]
fn test_command_names() {
    assert_eq!(Command::PrevChar.name(), "prevChar");
    assert_eq!(Command::AppendCategory('x').name(), "appendCategory");
    assert_eq!(Command::Quit.name(), "quit");
}
