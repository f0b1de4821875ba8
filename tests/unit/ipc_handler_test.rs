//! Decoding chrome and page messages.

use rstest::rstest;
use tabshell::ipc_handler::{chrome_update_script, parse_message, shortcut_init_script, ShellMessage};
use tabshell::managers::shortcut_manager::ShortcutManager;
use tabshell::types::action::ToolbarAction;
use tabshell::types::chrome::ChromeState;
use tabshell::types::tab::TabId;
use tabshell::types::theme::Theme;

#[rstest]
#[case(r#"{"cmd":"back"}"#, ToolbarAction::Back)]
#[case(r#"{"cmd":"forward"}"#, ToolbarAction::Forward)]
#[case(r#"{"cmd":"reload"}"#, ToolbarAction::Reload)]
#[case(r#"{"cmd":"home"}"#, ToolbarAction::Home)]
#[case(r#"{"cmd":"new_tab"}"#, ToolbarAction::NewTab { url: None })]
#[case(r#"{"cmd":"new_tab","url":"https://docs.rs"}"#, ToolbarAction::NewTab { url: Some("https://docs.rs".into()) })]
#[case(r#"{"cmd":"close_active_tab"}"#, ToolbarAction::CloseActiveTab)]
#[case(r#"{"cmd":"next_tab"}"#, ToolbarAction::NextTab)]
#[case(r#"{"cmd":"navigate","input":"rust lang"}"#, ToolbarAction::Navigate { input: "rust lang".into() })]
#[case(r#"{"cmd":"add_bookmark"}"#, ToolbarAction::AddBookmark)]
#[case(r#"{"cmd":"open_bookmark","url":"https://a.example/"}"#, ToolbarAction::OpenBookmark { url: "https://a.example/".into() })]
#[case(r#"{"cmd":"toggle_dark_mode"}"#, ToolbarAction::ToggleDarkMode)]
fn test_toolbar_actions(#[case] body: &str, #[case] expected: ToolbarAction) {
    assert_eq!(parse_message(body).unwrap(), ShellMessage::Action(expected));
}

#[test]
fn test_tab_id_actions() {
    let id = TabId::new();
    let body = format!(r#"{{"cmd":"switch_tab","id":"{}"}}"#, id);
    assert_eq!(parse_message(&body).unwrap(), ShellMessage::Action(ToolbarAction::SwitchTab { id }));

    let body = format!(r#"{{"cmd":"close_tab","id":"{}"}}"#, id);
    assert_eq!(parse_message(&body).unwrap(), ShellMessage::Action(ToolbarAction::CloseTab { id }));
}

#[test]
fn test_control_messages() {
    assert_eq!(parse_message(r#"{"cmd":"ui_ready"}"#).unwrap(), ShellMessage::UiReady);
    assert_eq!(
        parse_message(r#"{"cmd":"shortcut","combo":"Ctrl+T"}"#).unwrap(),
        ShellMessage::Shortcut("Ctrl+T".into())
    );
}

#[rstest]
#[case("")]
#[case("not json")]
#[case(r#"{"no_cmd":true}"#)]
#[case(r#"{"cmd":"format_disk"}"#)]
#[case(r#"{"cmd":"switch_tab","id":"not-a-uuid"}"#)]
#[case(r#"{"cmd":"shortcut"}"#)]
#[case(r#"{"cmd":"edit","text":"exa"}"#)]
#[case(r#"["back"]"#)]
fn test_rejects_malformed(#[case] body: &str) {
    assert!(parse_message(body).is_err(), "accepted {:?}", body);
}

#[test]
fn test_chrome_update_script() {
    let state = ChromeState {
        tabs: Vec::new(),
        active_id: None,
        address: "https://example.com/".into(),
        bookmarks: Vec::new(),
        theme: Theme::Dark,
        css_variables: Default::default(),
    };
    let js = chrome_update_script(&state).unwrap();
    assert!(js.starts_with("if(window.__shell_update)window.__shell_update({"));
    assert!(js.ends_with("})"));

    let json = &js["if(window.__shell_update)window.__shell_update(".len()..js.len() - 1];
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["address"], "https://example.com/");
    assert_eq!(value["theme"], "dark");
}

#[test]
fn test_shortcut_init_script_lists_bound_combos() {
    let defaults = ShortcutManager::default_shortcuts();
    let js = shortcut_init_script(defaults.values().map(String::as_str)).unwrap();

    let prefix = "window.__shell_bound_combos = ";
    assert!(js.starts_with(prefix));
    let line = js.lines().next().unwrap();
    let json = line[prefix.len()..].trim_end_matches(';');
    let combos: Vec<String> = serde_json::from_str(json).unwrap();
    assert_eq!(combos.len(), defaults.len());
    for keys in defaults.values() {
        assert!(combos.contains(keys), "missing {}", keys);
    }

    // The forwarder that reads the list follows it.
    assert!(js.contains("__shell_bound_combos ||"));
    assert!(js.contains("preventDefault"));
}

#[test]
fn test_shortcut_init_script_without_bindings() {
    let js = shortcut_init_script(std::iter::empty()).unwrap();
    assert!(js.starts_with("window.__shell_bound_combos = [];"));
}
