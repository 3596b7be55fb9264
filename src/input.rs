use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

use crate::menu::{self, Menu, MenuAction};

pub struct InputHandler {
    menus: Vec<Menu>,
    cursor: Option<PhysicalPosition<f64>>,
    drawing: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            menus: menu::menu_bar(),
            cursor: None,
            drawing: false,
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) -> InputAction {
        match (input.state, input.virtual_keycode) {
            (ElementState::Pressed, Some(key_code)) => self.handle_key_press(key_code),
            _ => InputAction::None,
        }
    }

    fn handle_key_press(&self, key_code: VirtualKeyCode) -> InputAction {
        if let Some(index) = palette_slot(key_code) {
            return InputAction::SelectColor(index);
        }

        menu::action_for_key(&self.menus, key_code)
            .map(InputAction::Menu)
            .unwrap_or(InputAction::None)
    }

    pub fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) -> InputAction {
        if button != MouseButton::Left {
            return InputAction::None;
        }

        match state {
            ElementState::Pressed => match self.cursor {
                Some(position) => {
                    self.drawing = true;
                    InputAction::PointerAt(position)
                }
                // No position reported yet
                None => InputAction::None,
            },
            ElementState::Released => {
                self.drawing = false;
                InputAction::None
            }
        }
    }

    /// Dragging with the button held keeps drawing.
    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputAction {
        self.cursor = Some(position);
        if self.drawing {
            InputAction::PointerAt(position)
        } else {
            InputAction::None
        }
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor = None;
        self.drawing = false;
    }
}

fn palette_slot(key_code: VirtualKeyCode) -> Option<usize> {
    match key_code {
        VirtualKeyCode::Key1 => Some(0),
        VirtualKeyCode::Key2 => Some(1),
        VirtualKeyCode::Key3 => Some(2),
        VirtualKeyCode::Key4 => Some(3),
        VirtualKeyCode::Key5 => Some(4),
        VirtualKeyCode::Key6 => Some(5),
        VirtualKeyCode::Key7 => Some(6),
        VirtualKeyCode::Key8 => Some(7),
        VirtualKeyCode::Key9 => Some(8),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    PointerAt(PhysicalPosition<f64>),
    SelectColor(usize),
    Menu(MenuAction),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_map_to_actions() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_press(VirtualKeyCode::G), InputAction::Menu(MenuAction::ToggleGrid));
        assert_eq!(handler.handle_key_press(VirtualKeyCode::Key3), InputAction::SelectColor(2));
        assert_eq!(handler.handle_key_press(VirtualKeyCode::Space), InputAction::None);
    }

    #[test]
    fn test_drag_draws_only_while_pressed() {
        let mut handler = InputHandler::new();
        let first = PhysicalPosition::new(10.0, 12.0);
        let second = PhysicalPosition::new(30.0, 12.0);

        assert_eq!(handler.handle_cursor_moved(first), InputAction::None);
        assert_eq!(
            handler.handle_mouse_input(ElementState::Pressed, MouseButton::Left),
            InputAction::PointerAt(first)
        );
        assert_eq!(handler.handle_cursor_moved(second), InputAction::PointerAt(second));

        handler.handle_mouse_input(ElementState::Released, MouseButton::Left);
        assert_eq!(handler.handle_cursor_moved(first), InputAction::None);
    }

    #[test]
    fn test_press_without_known_position_does_nothing() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_mouse_input(ElementState::Pressed, MouseButton::Left),
            InputAction::None
        );
        assert_eq!(handler.handle_cursor_moved(PhysicalPosition::new(0.0, 0.0)), InputAction::None);

        let inside = PhysicalPosition::new(25.0, 25.0);
        handler.handle_cursor_moved(inside);
        handler.handle_cursor_left();
        assert_eq!(
            handler.handle_mouse_input(ElementState::Pressed, MouseButton::Left),
            InputAction::None
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_mouse_input(ElementState::Pressed, MouseButton::Right),
            InputAction::None
        );
        assert_eq!(handler.handle_cursor_moved(PhysicalPosition::new(1.0, 1.0)), InputAction::None);
    }
}
