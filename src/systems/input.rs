//! Input system.
//!
//! [`update_input_state`] scans the whole keyboard against raylib each
//! frame and writes the keys found down into
//! [`InputState`](crate::resources::input::InputState), keeping scan order.
//! A fresh press of the key bound to [`Action::ToggleDebug`] fires a
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{Action, InputState, KeyBindings, SCANNED_KEYS};
use crate::resources::windowstate::WindowState;

/// Run condition: false while the window is minimized, so key edges are
/// kept until the window comes back.
pub fn window_visible(window: Res<WindowState>) -> bool {
    !window.drawing_skipped()
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    bindings: Res<KeyBindings>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    scan_keys(&mut input, |key| rl.is_key_down(key));
    if !input.held.is_empty() {
        trace!("Keys held: {:?}", input.held);
    }

    if let Some(key) = bindings.key_for(Action::ToggleDebug) {
        if input.just_pressed(key) {
            commands.trigger(SwitchDebugEvent {});
        }
    }
}

/// Rebuild `input` from a key-down predicate, in [`SCANNED_KEYS`] order.
pub fn scan_keys(input: &mut InputState, is_key_down: impl Fn(raylib::consts::KeyboardKey) -> bool) {
    input.begin_frame();
    for key in SCANNED_KEYS.iter().copied() {
        if is_key_down(key) {
            input.press(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::consts::KeyboardKey;

    #[test]
    fn test_scan_keeps_fixed_order() {
        let mut input = InputState::default();
        scan_keys(&mut input, |k| {
            matches!(
                k,
                KeyboardKey::KEY_SPACE | KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_LEFT
            )
        });
        assert_eq!(
            input.held.as_slice(),
            &[
                KeyboardKey::KEY_LEFT,
                KeyboardKey::KEY_RIGHT,
                KeyboardKey::KEY_SPACE
            ]
        );
    }

    #[test]
    fn test_scan_tracks_previous_frame() {
        let mut input = InputState::default();
        scan_keys(&mut input, |k| k == KeyboardKey::KEY_UP);
        assert!(input.just_pressed(KeyboardKey::KEY_UP));
        scan_keys(&mut input, |k| k == KeyboardKey::KEY_UP);
        assert!(!input.just_pressed(KeyboardKey::KEY_UP));
        scan_keys(&mut input, |_| false);
        assert!(input.held.is_empty());
        assert_eq!(input.previous.as_slice(), &[KeyboardKey::KEY_UP]);
    }

    #[derive(Resource, Default)]
    struct Scans(u32);

    fn count_scan(mut scans: ResMut<Scans>) {
        scans.0 += 1;
    }

    #[test]
    fn test_scan_paused_while_minimized() {
        let mut world = World::new();
        world.insert_resource(WindowState::new(480, 480));
        world.insert_resource(Scans::default());
        let mut schedule = Schedule::default();
        schedule.add_systems(count_scan.run_if(window_visible));

        schedule.run(&mut world);
        world.resource_mut::<WindowState>().minimized = true;
        schedule.run(&mut world);
        schedule.run(&mut world);
        world.resource_mut::<WindowState>().minimized = false;
        schedule.run(&mut world);

        assert_eq!(world.resource::<Scans>().0, 2);
    }

    #[test]
    fn test_unbound_keypad_key_is_held_and_reported() {
        let bindings = KeyBindings::default();
        let mut input = InputState::default();
        scan_keys(&mut input, |k| {
            matches!(k, KeyboardKey::KEY_KP_5 | KeyboardKey::KEY_LEFT_SHIFT)
        });
        assert_eq!(
            input.held.as_slice(),
            &[KeyboardKey::KEY_KP_5, KeyboardKey::KEY_LEFT_SHIFT]
        );
        assert_eq!(
            input.unbound_presses(&bindings).collect::<Vec<_>>(),
            vec![KeyboardKey::KEY_KP_5, KeyboardKey::KEY_LEFT_SHIFT]
        );
    }
}
