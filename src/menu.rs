use winit::event::VirtualKeyCode;

use crate::config::{LARGE_GRID, MEDIUM_GRID, SMALL_GRID};

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub options: Vec<MenuOption>,
}

#[derive(Debug, Clone)]
pub struct MenuOption {
    pub label: String,
    pub shortcut: VirtualKeyCode,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewCanvas,
    Open,
    Save,
    ChooseColor,
    Draw,
    Eraser,
    ClearCanvas,
    ChangeCanvasColor,
    ToggleGrid,
    GridSize(u32),
    FullScreenGrid,
}

impl MenuOption {
    fn new(label: &str, shortcut: VirtualKeyCode, action: MenuAction) -> Self {
        Self {
            label: label.to_string(),
            shortcut,
            action,
        }
    }
}

impl Menu {
    fn new(title: &str, options: Vec<MenuOption>) -> Self {
        Self {
            title: title.to_string(),
            options,
        }
    }
}

pub fn menu_bar() -> Vec<Menu> {
    use MenuAction::*;

    vec![
        Menu::new(
            "File",
            vec![
                MenuOption::new("New Canvas", VirtualKeyCode::N, NewCanvas),
                MenuOption::new("Open", VirtualKeyCode::O, Open),
                MenuOption::new("Save", VirtualKeyCode::S, Save),
            ],
        ),
        Menu::new("Color", vec![MenuOption::new("Choose Color", VirtualKeyCode::C, ChooseColor)]),
        Menu::new(
            "Tools",
            vec![
                MenuOption::new("Draw", VirtualKeyCode::D, Draw),
                MenuOption::new("Eraser", VirtualKeyCode::E, Eraser),
            ],
        ),
        Menu::new(
            "Canvas",
            vec![
                MenuOption::new("Clear Canvas", VirtualKeyCode::X, ClearCanvas),
                MenuOption::new("Change Canvas Color", VirtualKeyCode::B, ChangeCanvasColor),
            ],
        ),
        Menu::new(
            "View",
            vec![
                MenuOption::new("Toggle Grid", VirtualKeyCode::G, ToggleGrid),
                MenuOption::new("Small Grid (20x20)", VirtualKeyCode::F1, GridSize(SMALL_GRID)),
                MenuOption::new("Medium Grid (30x30)", VirtualKeyCode::F2, GridSize(MEDIUM_GRID)),
                MenuOption::new("Large Grid (40x40)", VirtualKeyCode::F3, GridSize(LARGE_GRID)),
                MenuOption::new("Full-Screen Grid", VirtualKeyCode::F11, FullScreenGrid),
            ],
        ),
    ]
}

pub fn action_for_key(menus: &[Menu], key: VirtualKeyCode) -> Option<MenuAction> {
    menus
        .iter()
        .flat_map(|menu| menu.options.iter())
        .find(|option| option.shortcut == key)
        .map(|option| option.action)
}

/// One line per menu listing its options and shortcuts.
pub fn help_lines(menus: &[Menu]) -> Vec<String> {
    menus
        .iter()
        .map(|menu| {
            let options: Vec<String> = menu
                .options
                .iter()
                .map(|option| format!("{} [{:?}]", option.label, option.shortcut))
                .collect();
            format!("{}: {}", menu.title, options.join(", "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shortcuts_resolve() {
        let menus = menu_bar();
        assert_eq!(action_for_key(&menus, VirtualKeyCode::S), Some(MenuAction::Save));
        assert_eq!(action_for_key(&menus, VirtualKeyCode::E), Some(MenuAction::Eraser));
        assert_eq!(action_for_key(&menus, VirtualKeyCode::F3), Some(MenuAction::GridSize(40)));
        assert_eq!(action_for_key(&menus, VirtualKeyCode::Q), None);
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let menus = menu_bar();
        let mut keys: Vec<VirtualKeyCode> = menus
            .iter()
            .flat_map(|menu| menu.options.iter().map(|option| option.shortcut))
            .collect();
        let total = keys.len();
        keys.sort_by_key(|key| *key as u32);
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_help_lines() {
        let lines = help_lines(&menu_bar());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "File: New Canvas [N], Open [O], Save [S]");
    }
}
