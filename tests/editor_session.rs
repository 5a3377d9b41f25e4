//! Whole sessions driven through the public API with an in-memory terminal.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Cell;

use eddy::app::{App, EditorState};
use eddy::cursor::Position;
use eddy::input::Key;
use eddy::terminal::{Screen, ScriptedKeys, Surface};

fn surface(cols: u16, rows: u16, keys: Vec<Key>) -> Surface<TestBackend, ScriptedKeys> {
    let terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
    Surface::new(terminal, ScriptedKeys::new(keys))
}

fn screen_lines(surface: &Surface<TestBackend, ScriptedKeys>) -> Vec<String> {
    let buffer = surface.terminal().backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).map_or(" ", Cell::symbol))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[test]
fn test_view_file_move_echo_and_quit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poem.txt");
    std::fs::write(&path, "roses\nviolets are blue and so on\n").unwrap();

    let keys = vec![
        Key::DOWN,
        Key::DOWN,
        Key::DOWN,
        Key::RIGHT,
        Key::from_char('!'),
        Key::ctrl('q'),
    ];
    let mut surface = surface(12, 6, keys);
    let mut editor = App::new().with_file(Some(path)).editor();

    editor.open(&mut surface).unwrap();
    assert_eq!(
        screen_lines(&surface),
        ["roses", "violets are", " blue and s", "o on", "", ""]
    );

    for _ in 0..5 {
        editor.step(&mut surface).unwrap();
    }
    assert_eq!(screen_lines(&surface)[3], "o!on");
    assert_eq!(surface.cursor().unwrap(), Position::new(3, 2));

    editor.run(&mut surface).unwrap();
    assert_eq!(editor.state(), EditorState::Terminating);
    assert!(screen_lines(&surface).iter().all(String::is_empty));
}

#[test]
fn test_splash_with_logo() {
    let mut surface = surface(80, 24, vec![Key::ctrl('q')]);
    let mut editor = App::new().with_logo(true).editor();

    editor.open(&mut surface).unwrap();
    let lines = screen_lines(&surface);
    assert_eq!(lines[7].trim(), "Eddy");
    assert!(lines[8].trim().starts_with("version "));
    assert!(lines[6].contains("/____/"));
    assert!(lines[23].is_empty());

    editor.run(&mut surface).unwrap();
    assert_eq!(surface.keys().reads(), 1);
}

#[test]
fn test_unreadable_file_keeps_session_alive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let keys = vec![Key::RIGHT, Key::from_char('a'), Key::ctrl('q')];
    let mut surface = surface(80, 24, keys);
    let mut editor = App::new().with_file(Some(path)).editor();

    editor.open(&mut surface).unwrap();
    assert!(screen_lines(&surface)[23].starts_with("FAIL: "));

    editor.step(&mut surface).unwrap();
    editor.step(&mut surface).unwrap();
    assert_eq!(screen_lines(&surface)[0], " a");

    editor.run(&mut surface).unwrap();
    assert_eq!(editor.state(), EditorState::Terminating);
}

#[test]
fn test_wide_text_stays_inside_the_screen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.txt");
    std::fs::write(&path, "中文字符测试中文字符测试\n").unwrap();

    let mut surface = surface(12, 4, vec![Key::ctrl('q')]);
    let mut editor = App::new().with_file(Some(path)).editor();

    editor.open(&mut surface).unwrap();
    assert_eq!(
        screen_lines(&surface),
        ["中 文 字 符 测", "试 中 文 字 符", "测 试", ""]
    );
    assert_eq!(surface.cursor().unwrap(), Position::ORIGIN);

    editor.run(&mut surface).unwrap();
    assert_eq!(editor.state(), EditorState::Terminating);
}
