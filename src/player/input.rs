use bevy::prelude::*;

/// Per-tick input: held state for walking, press edges for actions
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Session commands raised from the keyboard this frame
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandFrame {
    pub start: bool,
    pub stop: bool,
}

#[derive(Resource, Clone, Debug)]
pub struct KeyBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub shoot: Vec<KeyCode>,
    pub start: Vec<KeyCode>,
    pub stop: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            jump: vec![KeyCode::Space],
            shoot: vec![
                KeyCode::KeyX,
                KeyCode::KeyZ,
                KeyCode::ControlLeft,
                KeyCode::ControlRight,
            ],
            start: vec![KeyCode::Enter],
            stop: vec![KeyCode::Escape],
        }
    }
}

impl KeyBindings {
    pub fn read(&self, keyboard: &ButtonInput<KeyCode>) -> InputFrame {
        InputFrame {
            left: keyboard.any_pressed(self.left.iter().copied()),
            right: keyboard.any_pressed(self.right.iter().copied()),
            jump: keyboard.any_just_pressed(self.jump.iter().copied()),
            shoot: keyboard.any_just_pressed(self.shoot.iter().copied()),
        }
    }

    pub fn read_commands(&self, keyboard: &ButtonInput<KeyCode>) -> CommandFrame {
        CommandFrame {
            start: keyboard.any_just_pressed(self.start.iter().copied()),
            stop: keyboard.any_just_pressed(self.stop.iter().copied()),
        }
    }
}

pub fn gather_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut frame: ResMut<InputFrame>,
    mut commands_frame: ResMut<CommandFrame>,
) {
    *frame = bindings.read(&keyboard);
    *commands_frame = bindings.read_commands(&keyboard);
}
