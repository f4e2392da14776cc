use macroquad::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputModel {
    pub left_movement_down: bool,
    pub right_movement_down: bool,
    pub jump_down: bool,
    pub shoot_pressed: bool,
    pub quit_requested: bool,
    pub confirmation_detected: bool,
    pub pause_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub debug_toggle_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let left_movement_down = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        let right_movement_down = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);
        let jump_down = is_key_down(KeyCode::Space) || is_key_down(KeyCode::J);
        let shoot_pressed = is_key_pressed(KeyCode::LeftControl) || is_key_pressed(KeyCode::K);
        let quit_requested = is_key_pressed(KeyCode::Q);
        let confirmation_detected =
            is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Enter);
        let pause_requested = is_key_pressed(KeyCode::Escape);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);
        let debug_toggle_requested = is_key_pressed(KeyCode::F3);

        Self {
            left_movement_down,
            right_movement_down,
            jump_down,
            shoot_pressed,
            quit_requested,
            confirmation_detected,
            pause_requested,
            fullscreen_toggle_requested,
            debug_toggle_requested,
        }
    }
}
