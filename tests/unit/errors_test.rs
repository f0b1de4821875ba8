use tabshell::types::errors::*;
use tabshell::types::tab::TabId;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let id = TabId::new();
    let err = TabError::NotFound(id);
    assert_eq!(err.to_string(), format!("Tab not found: {}", id));
}

#[test]
fn tab_error_no_active_tab_display() {
    assert_eq!(TabError::NoActiveTab.to_string(), "No active tab");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound(TabId::new()));
    assert!(err.source().is_none());
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(
        ShortcutError::InvalidKeys("Keys cannot be empty".to_string()).to_string(),
        "Invalid shortcut keys: Keys cannot be empty"
    );
    assert_eq!(
        ShortcutError::Conflict("'Ctrl+T' is already bound to 'new_tab'".to_string()).to_string(),
        "Shortcut conflict: 'Ctrl+T' is already bound to 'new_tab'"
    );
    assert_eq!(
        ShortcutError::NotFound("print".to_string()).to_string(),
        "Shortcut not found: print"
    );
}

// === IpcError Tests ===

#[test]
fn ipc_error_wraps_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let expected = format!("Malformed IPC message: {}", json_err);
    let err: IpcError = json_err.into();
    assert_eq!(err.to_string(), expected);
}

// === ShellError Tests ===

#[test]
fn shell_error_display_variants() {
    assert_eq!(
        ShellError::Window("no display".to_string()).to_string(),
        "Failed to create window: no display"
    );
    assert_eq!(
        ShellError::WebView("webkit missing".to_string()).to_string(),
        "Failed to create web view: webkit missing"
    );
}
