//! Per-frame logical input resource.
//!
//! [`InputState`] turns the physical snapshot in
//! [`RawInput`](crate::resources::rawinput::RawInput) into per-action state
//! through the binding table. Edge flags evaluate the current bindings against
//! both this frame's and the previous frame's device state, so `just_pressed`
//! fires only when none of an action's inputs were down last frame and at
//! least one is now.
//!
//! Gameplay code consumes it through the [`InputProvider`] trait.

use bevy_ecs::prelude::*;

use crate::events::input::InputAction;
use crate::math::Vector2;
use crate::resources::camera2d::CameraView;
use crate::resources::inputbinding::{AxisDirection, GamepadAxis, InputBindings, InputId};
use crate::resources::rawinput::RawInput;

/// Default analog stick deadzone.
pub const DEFAULT_DEADZONE: f64 = 0.2;
const MAX_DEADZONE: f64 = 0.99;
const ACTION_COUNT: usize = InputAction::ALL.len();

/// Edge-aware state of one logical action.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionState {
    /// At least one bound input is held this frame.
    pub active: bool,
    /// Active now, inactive for every bound input last frame.
    pub just_pressed: bool,
    /// Inactive now, active for some bound input last frame.
    pub just_released: bool,
    /// Strongest reading among active inputs: 1.0 for keys and buttons, the
    /// axis deflection for stick bindings, 0.0 when inactive.
    pub value: f64,
}

/// Read-only input capability consumed by the player controller.
pub trait InputProvider {
    fn action_state(&self, action: InputAction) -> ActionState;

    fn is_pressed(&self, action: InputAction) -> bool {
        self.action_state(action).active
    }

    fn just_pressed(&self, action: InputAction) -> bool {
        self.action_state(action).just_pressed
    }

    fn just_released(&self, action: InputAction) -> bool {
        self.action_state(action).just_released
    }

    /// Movement intent with magnitude in `[0, 1]`.
    fn movement_vector(&self) -> Vector2;

    /// Cursor position in world coordinates, truncated to integers.
    fn mouse_position_world(&self) -> (i32, i32);

    /// Unit right-stick direction when the stick is deflected past the deadzone.
    fn gamepad_aim(&self) -> Option<Vector2>;

    /// Whether the most recent device activity came from a gamepad.
    fn using_gamepad(&self) -> bool {
        false
    }
}

/// Resource holding the logical input state for the current frame.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    bindings: InputBindings,
    deadzone: f64,
    /// Device state seen on the previous frame. Edges compare the current
    /// bindings against it, so a key held while being bound is not a press.
    previous: RawInput,
    actions: [ActionState; ACTION_COUNT],
    movement: Vector2,
    mouse_world: (i32, i32),
    last_cursor: Option<(i32, i32)>,
    gamepad_aim: Option<Vector2>,
    using_gamepad: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(InputBindings::with_defaults())
    }
}

impl InputState {
    pub fn new(bindings: InputBindings) -> Self {
        Self {
            bindings,
            deadzone: DEFAULT_DEADZONE,
            previous: RawInput::default(),
            actions: [ActionState::default(); ACTION_COUNT],
            movement: Vector2::ZERO,
            mouse_world: (0, 0),
            last_cursor: None,
            gamepad_aim: None,
            using_gamepad: false,
        }
    }

    pub fn with_deadzone(mut self, deadzone: f64) -> Self {
        self.set_deadzone(deadzone);
        self
    }

    /// Set the stick deadzone, clamped to `[0, 0.99]`.
    pub fn set_deadzone(&mut self, deadzone: f64) {
        self.deadzone = if deadzone.is_finite() {
            deadzone.clamp(0.0, MAX_DEADZONE)
        } else {
            DEFAULT_DEADZONE
        };
    }

    pub fn deadzone(&self) -> f64 {
        self.deadzone
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    pub fn bind(&mut self, input: InputId, action: InputAction) -> Option<InputAction> {
        self.bindings.bind(input, action)
    }

    pub fn unbind(&mut self, input: InputId) -> Option<InputAction> {
        self.bindings.unbind(input)
    }

    pub fn rebind(&mut self, old: InputId, new: InputId) -> bool {
        self.bindings.rebind(old, new)
    }

    /// Recompute every action and vector from this frame's raw device state.
    ///
    /// Must run exactly once per frame. The camera, when present, maps the
    /// cursor into world space.
    pub fn update(&mut self, raw: &RawInput, camera: Option<&dyn CameraView>) {
        let mut now = [(false, 0.0_f64); ACTION_COUNT];
        let mut before = [false; ACTION_COUNT];

        for (input, action) in self.bindings.iter() {
            let idx = *action as usize;
            if let Some(value) = self.read_input(raw, input) {
                now[idx].0 = true;
                now[idx].1 = now[idx].1.max(value);
            }
            if self.read_input(&self.previous, input).is_some() {
                before[idx] = true;
            }
        }
        self.previous.clone_from(raw);

        for (idx, state) in self.actions.iter_mut().enumerate() {
            let (active, value) = now[idx];
            *state = ActionState {
                active,
                just_pressed: active && !before[idx],
                just_released: !active && before[idx],
                value,
            };
        }

        self.movement = self.compute_movement(raw);
        self.gamepad_aim = self.compute_gamepad_aim(raw);

        let cursor = raw.cursor();
        let screen = Vector2::new(f64::from(cursor.0), f64::from(cursor.1));
        let world = camera.map_or(screen, |c| c.screen_to_world(screen));
        self.mouse_world = (world.x as i32, world.y as i32);

        self.update_device(raw, cursor);
    }

    /// `Some(value)` when the input is held this frame.
    fn read_input(&self, raw: &RawInput, input: &InputId) -> Option<f64> {
        match *input {
            InputId::Keyboard(key) => raw.is_key_down(key).then_some(1.0),
            InputId::Combo { modifier, key } => {
                (raw.is_key_down(modifier) && raw.is_key_down(key)).then_some(1.0)
            }
            InputId::GamepadButton { gamepad, button } => {
                raw.is_button_down(gamepad, button).then_some(1.0)
            }
            InputId::GamepadAxis {
                gamepad,
                axis,
                direction,
            } => {
                let v = raw.axis(gamepad, axis);
                let v = match direction {
                    AxisDirection::Positive => v,
                    AxisDirection::Negative => -v,
                };
                (v > self.deadzone).then_some(v)
            }
        }
    }

    fn compute_movement(&self, raw: &RawInput) -> Vector2 {
        let axis = |neg: InputAction, pos: InputAction| {
            let mut v = 0.0;
            if self.action(neg).active {
                v -= 1.0;
            }
            if self.action(pos).active {
                v += 1.0;
            }
            v
        };
        let digital = Vector2::new(
            axis(InputAction::MoveLeft, InputAction::MoveRight),
            axis(InputAction::MoveUp, InputAction::MoveDown),
        );
        if !digital.is_zero() {
            return if digital.x != 0.0 && digital.y != 0.0 {
                digital.normalized()
            } else {
                digital
            };
        }

        let Some(pad) = raw.first_gamepad() else {
            return Vector2::ZERO;
        };
        let stick = Vector2::new(
            raw.axis(pad, GamepadAxis::LeftStickHorizontal),
            raw.axis(pad, GamepadAxis::LeftStickVertical),
        );
        self.apply_deadzone(stick)
    }

    fn compute_gamepad_aim(&self, raw: &RawInput) -> Option<Vector2> {
        let pad = raw.first_gamepad()?;
        let stick = Vector2::new(
            raw.axis(pad, GamepadAxis::RightStickHorizontal),
            raw.axis(pad, GamepadAxis::RightStickVertical),
        );
        (stick.magnitude() > self.deadzone).then(|| stick.normalized())
    }

    /// Zero inside the deadzone, otherwise rescaled so the output ramps from 0 to 1.
    fn apply_deadzone(&self, stick: Vector2) -> Vector2 {
        let m = stick.magnitude().min(1.0);
        if m <= self.deadzone {
            return Vector2::ZERO;
        }
        let scaled = (m - self.deadzone) / (1.0 - self.deadzone);
        stick.normalized() * scaled
    }

    fn update_device(&mut self, raw: &RawInput, cursor: (i32, i32)) {
        let pad_active = raw.any_button_down()
            || self.gamepad_aim.is_some()
            || raw.first_gamepad().is_some_and(|pad| {
                let left = Vector2::new(
                    raw.axis(pad, GamepadAxis::LeftStickHorizontal),
                    raw.axis(pad, GamepadAxis::LeftStickVertical),
                );
                left.magnitude() > self.deadzone
            });
        let cursor_moved = self.last_cursor.is_some_and(|last| last != cursor);
        self.last_cursor = Some(cursor);

        if pad_active {
            self.using_gamepad = true;
        } else if raw.any_key_down() || cursor_moved {
            self.using_gamepad = false;
        }
    }

    fn action(&self, action: InputAction) -> &ActionState {
        &self.actions[action as usize]
    }
}

impl InputProvider for InputState {
    fn action_state(&self, action: InputAction) -> ActionState {
        *self.action(action)
    }

    fn movement_vector(&self) -> Vector2 {
        self.movement
    }

    fn mouse_position_world(&self) -> (i32, i32) {
        self.mouse_world
    }

    fn gamepad_aim(&self) -> Option<Vector2> {
        self.gamepad_aim
    }

    fn using_gamepad(&self) -> bool {
        self.using_gamepad
    }
}
