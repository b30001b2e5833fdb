// shortcuts.rs
use crate::core::actions::Action;
use egui::{Key, KeyboardShortcut, Modifiers};

pub struct Shortcuts;

impl Shortcuts {
    /// THE ONE PLACE TO CHANGE SHORTCUTS
    /// Copy/Cut/Paste/Select All are left to the text widget itself.
    fn get_mappings() -> Vec<(KeyboardShortcut, Action)> {
        vec![
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::N), Action::New),
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::O), Action::Open),
            (
                KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::S),
                Action::SaveAs,
            ),
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::S), Action::Save),
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::P), Action::Print),
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::Q), Action::Exit),
        ]
    }

    // Consume every pressed shortcut and return its action
    pub fn resolve(input: &mut egui::InputState) -> Vec<Action> {
        Self::get_mappings()
            .into_iter()
            .filter(|(shortcut, _)| input.consume_shortcut(shortcut))
            .map(|(_, action)| action)
            .collect()
    }

    // Shortcut hint for a menu entry, e.g. "Ctrl+S"
    pub fn label(action: Action) -> Option<String> {
        Self::get_mappings()
            .into_iter()
            .find(|(_, a)| *a == action)
            .map(|(shortcut, _)| Self::key_to_string(&shortcut))
            .or_else(|| {
                let key = match action {
                    Action::Copy => "C",
                    Action::Cut => "X",
                    Action::Paste => "V",
                    Action::SelectAll => "A",
                    _ => return None,
                };
                Some(format!("Ctrl+{}", key))
            })
    }

    fn key_to_string(shortcut: &KeyboardShortcut) -> String {
        let mut s = String::new();
        if shortcut.modifiers.command || shortcut.modifiers.ctrl { s.push_str("Ctrl+"); }
        if shortcut.modifiers.alt { s.push_str("Alt+"); }
        if shortcut.modifiers.shift { s.push_str("Shift+"); }
        s.push_str(shortcut.logical_key.name());
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        assert_eq!(Shortcuts::label(Action::Save).as_deref(), Some("Ctrl+S"));
        assert_eq!(Shortcuts::label(Action::SaveAs).as_deref(), Some("Ctrl+Shift+S"));
        assert_eq!(Shortcuts::label(Action::Paste).as_deref(), Some("Ctrl+V"));
        assert_eq!(Shortcuts::label(Action::About), None);
    }

    #[test]
    fn test_save_as_is_checked_before_save() {
        // consume_shortcut ignores extra shift, so the longer chord must win first
        let mappings = Shortcuts::get_mappings();
        let save_as = mappings.iter().position(|(_, a)| *a == Action::SaveAs).unwrap();
        let save = mappings.iter().position(|(_, a)| *a == Action::Save).unwrap();
        assert!(save_as < save);
    }
}
