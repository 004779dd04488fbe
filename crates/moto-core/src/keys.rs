// ABOUTME: Key bindings mapping canonical key strings to layout actions.
// ABOUTME: Bindings are plain strings so the table can live in the config file.

use serde::{Deserialize, Serialize};

/// Something the user can ask the layout to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    SwitchPane,
    ClosePane,
    ShrinkHorizontalSplit,
    GrowHorizontalSplit,
    ShrinkVerticalSplit,
    GrowVerticalSplit,
    /// Hide/show everything beside the explorer
    ExplorerFullScreen,
    TogglePreview,
}

impl Action {
    /// Short help text shown in the footer
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::SwitchPane => "switch pane",
            Action::ClosePane => "close pane",
            Action::ShrinkHorizontalSplit => "shrink horizontal split",
            Action::GrowHorizontalSplit => "grow horizontal split",
            Action::ShrinkVerticalSplit => "shrink vertical split",
            Action::GrowVerticalSplit => "grow vertical split",
            Action::ExplorerFullScreen => "toggle full explorer",
            Action::TogglePreview => "toggle preview",
        }
    }
}

/// Keys bound to each action.
///
/// Keys use the canonical names produced by the terminal driver: printable
/// characters as themselves (`"<"`, `"E"`), named keys in lowercase
/// (`"tab"`, `"esc"`), and modifiers as prefixes (`"ctrl+c"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: Vec<String>,
    pub switch_pane: Vec<String>,
    pub close_pane: Vec<String>,
    pub shrink_horizontal_split: Vec<String>,
    pub grow_horizontal_split: Vec<String>,
    pub shrink_vertical_split: Vec<String>,
    pub grow_vertical_split: Vec<String>,
    pub explorer_full_screen: Vec<String>,
    pub toggle_preview: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: keys(&["ctrl+c", "q"]),
            switch_pane: keys(&["tab"]),
            close_pane: keys(&["x"]),
            shrink_horizontal_split: keys(&["<"]),
            grow_horizontal_split: keys(&[">"]),
            shrink_vertical_split: keys(&["-"]),
            grow_vertical_split: keys(&["+"]),
            explorer_full_screen: keys(&["E"]),
            toggle_preview: keys(&["P"]),
        }
    }
}

impl KeyBindings {
    /// Bindings in declaration order; earlier entries win on conflicts
    pub fn bindings(&self) -> [(Action, &[String]); 9] {
        [
            (Action::Quit, self.quit.as_slice()),
            (Action::SwitchPane, self.switch_pane.as_slice()),
            (Action::ClosePane, self.close_pane.as_slice()),
            (Action::ShrinkHorizontalSplit, self.shrink_horizontal_split.as_slice()),
            (Action::GrowHorizontalSplit, self.grow_horizontal_split.as_slice()),
            (Action::ShrinkVerticalSplit, self.shrink_vertical_split.as_slice()),
            (Action::GrowVerticalSplit, self.grow_vertical_split.as_slice()),
            (Action::ExplorerFullScreen, self.explorer_full_screen.as_slice()),
            (Action::TogglePreview, self.toggle_preview.as_slice()),
        ]
    }

    /// Look up the action bound to a canonical key string
    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|(_, keys)| keys.iter().any(|k| k == key))
            .map(|(action, _)| action)
    }

    /// One-line help text, e.g. `tab switch pane • < shrink horizontal split`
    pub fn help_line(&self, actions: &[Action]) -> String {
        self.bindings()
            .into_iter()
            .filter(|(action, keys)| actions.contains(action) && !keys.is_empty())
            .map(|(action, keys)| format!("{} {}", keys[0], action.description()))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_resolve() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for("tab"), Some(Action::SwitchPane));
        assert_eq!(keys.action_for("<"), Some(Action::ShrinkHorizontalSplit));
        assert_eq!(keys.action_for("+"), Some(Action::GrowVerticalSplit));
        assert_eq!(keys.action_for("E"), Some(Action::ExplorerFullScreen));
        assert_eq!(keys.action_for("ctrl+c"), Some(Action::Quit));
        assert_eq!(keys.action_for("e"), None);
    }

    #[test]
    fn first_declared_action_wins() {
        let keys = KeyBindings {
            close_pane: vec!["tab".to_string()],
            ..KeyBindings::default()
        };
        assert_eq!(keys.action_for("tab"), Some(Action::SwitchPane));
    }

    #[test]
    fn help_line_uses_first_key() {
        let keys = KeyBindings::default();
        let help = keys.help_line(&[Action::SwitchPane, Action::Quit]);
        assert_eq!(help, "ctrl+c quit • tab switch pane");
    }

    #[test]
    fn unbound_action_is_left_out_of_help() {
        let keys = KeyBindings {
            toggle_preview: Vec::new(),
            ..KeyBindings::default()
        };
        assert_eq!(keys.help_line(&[Action::TogglePreview]), "");
    }
}
