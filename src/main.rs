mod art_file;
mod canvas;
mod color;
mod config;
mod controller;
mod dialogs;
mod error;
mod graphics;
mod input;
mod menu;

use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::config::Config;
use crate::controller::{Controller, Tool};
use crate::graphics::GraphicsRenderer;
use crate::input::{InputAction, InputHandler};
use crate::menu::MenuAction;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::default();
    let mut controller = Controller::new(&config);
    let (width, height) = controller.canvas().pixel_size();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, width, height)?;
    let mut input_handler = InputHandler::new();

    for line in menu::help_lines(input_handler.menus()) {
        log::info!("{}", line);
    }

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => {
                let action = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        InputAction::None
                    }
                    WindowEvent::Resized(size) => {
                        graphics.resize_surface(size.width, size.height);
                        window.request_redraw();
                        InputAction::None
                    }
                    WindowEvent::KeyboardInput { input, .. } => input_handler.handle_keyboard_input(&input),
                    WindowEvent::MouseInput { state, button, .. } => input_handler.handle_mouse_input(state, button),
                    WindowEvent::CursorMoved { position, .. } => input_handler.handle_cursor_moved(position),
                    WindowEvent::CursorLeft { .. } => {
                        input_handler.handle_cursor_left();
                        InputAction::None
                    }
                    _ => InputAction::None,
                };

                match action {
                    InputAction::None => {}
                    InputAction::PointerAt(position) => {
                        if let Some((px, py)) = graphics.window_pos_to_pixel(position) {
                            controller.pointer_at(px, py);
                            window.request_redraw();
                        }
                    }
                    InputAction::SelectColor(index) => controller.select_palette(index),
                    InputAction::Menu(menu_action) => {
                        apply_menu_action(menu_action, &mut controller, &window);
                        window.request_redraw();
                    }
                }
            }
            Event::RedrawRequested(_) => {
                graphics.render(&controller.frame());
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn apply_menu_action(action: MenuAction, controller: &mut Controller, window: &Window) {
    match action {
        MenuAction::NewCanvas | MenuAction::ClearCanvas => controller.clear(),
        MenuAction::Open => {
            if let Some(path) = dialogs::choose_open_path() {
                if let Err(err) = controller.load_from_path(&path) {
                    log::error!("Error opening the image {}: {}", path.display(), err);
                }
            }
        }
        MenuAction::Save => {
            if let Some(path) = dialogs::choose_save_path() {
                if let Err(err) = controller.save_to_path(&path) {
                    log::error!("Error saving the image {}: {}", path.display(), err);
                }
            }
        }
        MenuAction::ChooseColor => controller.next_color(),
        MenuAction::Draw => controller.set_tool(Tool::Draw),
        MenuAction::Eraser => controller.set_tool(Tool::Eraser),
        MenuAction::ChangeCanvasColor => {
            let color = controller.current_color();
            controller.set_background(color);
        }
        MenuAction::ToggleGrid => {
            controller.toggle_grid_lines();
            log::debug!("Grid lines shown: {}", controller.show_grid());
        }
        MenuAction::GridSize(size) => {
            controller.resize_to(size);
            let (width, height) = controller.canvas().pixel_size();
            window.set_inner_size(PhysicalSize::new(width, height));
        }
        MenuAction::FullScreenGrid => match window.current_monitor() {
            Some(monitor) => {
                let display = monitor.size();
                controller.fit_to_display(display.width, display.height);
                window.set_maximized(true);
            }
            None => log::warn!("No monitor available to fit the grid to"),
        },
    }
}
