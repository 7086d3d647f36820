//! Per-frame keyboard input resources.
//!
//! [`InputState`] holds the keys found down during this frame's scan, in
//! scan order, plus the previous frame's set for edge detection.
//! [`KeyBindings`] maps key codes to game [`Action`]s.
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Keys inspected every frame, in evaluation order: the arrow keys, then
/// every other desktop keyboard key in key code order.
///
/// Movement keys come first so that when Left and Right are both held,
/// Right is applied last and decides the facing.
pub const SCANNED_KEYS: &[KeyboardKey] = &[
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_APOSTROPHE,
    KeyboardKey::KEY_COMMA,
    KeyboardKey::KEY_MINUS,
    KeyboardKey::KEY_PERIOD,
    KeyboardKey::KEY_SLASH,
    KeyboardKey::KEY_ZERO,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
    KeyboardKey::KEY_SEMICOLON,
    KeyboardKey::KEY_EQUAL,
    KeyboardKey::KEY_A,
    KeyboardKey::KEY_B,
    KeyboardKey::KEY_C,
    KeyboardKey::KEY_D,
    KeyboardKey::KEY_E,
    KeyboardKey::KEY_F,
    KeyboardKey::KEY_G,
    KeyboardKey::KEY_H,
    KeyboardKey::KEY_I,
    KeyboardKey::KEY_J,
    KeyboardKey::KEY_K,
    KeyboardKey::KEY_L,
    KeyboardKey::KEY_M,
    KeyboardKey::KEY_N,
    KeyboardKey::KEY_O,
    KeyboardKey::KEY_P,
    KeyboardKey::KEY_Q,
    KeyboardKey::KEY_R,
    KeyboardKey::KEY_S,
    KeyboardKey::KEY_T,
    KeyboardKey::KEY_U,
    KeyboardKey::KEY_V,
    KeyboardKey::KEY_W,
    KeyboardKey::KEY_X,
    KeyboardKey::KEY_Y,
    KeyboardKey::KEY_Z,
    KeyboardKey::KEY_LEFT_BRACKET,
    KeyboardKey::KEY_BACKSLASH,
    KeyboardKey::KEY_RIGHT_BRACKET,
    KeyboardKey::KEY_GRAVE,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_ESCAPE,
    KeyboardKey::KEY_ENTER,
    KeyboardKey::KEY_TAB,
    KeyboardKey::KEY_BACKSPACE,
    KeyboardKey::KEY_INSERT,
    KeyboardKey::KEY_DELETE,
    KeyboardKey::KEY_PAGE_UP,
    KeyboardKey::KEY_PAGE_DOWN,
    KeyboardKey::KEY_HOME,
    KeyboardKey::KEY_END,
    KeyboardKey::KEY_CAPS_LOCK,
    KeyboardKey::KEY_SCROLL_LOCK,
    KeyboardKey::KEY_NUM_LOCK,
    KeyboardKey::KEY_PRINT_SCREEN,
    KeyboardKey::KEY_PAUSE,
    KeyboardKey::KEY_F1,
    KeyboardKey::KEY_F2,
    KeyboardKey::KEY_F3,
    KeyboardKey::KEY_F4,
    KeyboardKey::KEY_F5,
    KeyboardKey::KEY_F6,
    KeyboardKey::KEY_F7,
    KeyboardKey::KEY_F8,
    KeyboardKey::KEY_F9,
    KeyboardKey::KEY_F10,
    KeyboardKey::KEY_F11,
    KeyboardKey::KEY_F12,
    KeyboardKey::KEY_KP_0,
    KeyboardKey::KEY_KP_1,
    KeyboardKey::KEY_KP_2,
    KeyboardKey::KEY_KP_3,
    KeyboardKey::KEY_KP_4,
    KeyboardKey::KEY_KP_5,
    KeyboardKey::KEY_KP_6,
    KeyboardKey::KEY_KP_7,
    KeyboardKey::KEY_KP_8,
    KeyboardKey::KEY_KP_9,
    KeyboardKey::KEY_KP_DECIMAL,
    KeyboardKey::KEY_KP_DIVIDE,
    KeyboardKey::KEY_KP_MULTIPLY,
    KeyboardKey::KEY_KP_SUBTRACT,
    KeyboardKey::KEY_KP_ADD,
    KeyboardKey::KEY_KP_ENTER,
    KeyboardKey::KEY_KP_EQUAL,
    KeyboardKey::KEY_LEFT_SHIFT,
    KeyboardKey::KEY_LEFT_CONTROL,
    KeyboardKey::KEY_LEFT_ALT,
    KeyboardKey::KEY_LEFT_SUPER,
    KeyboardKey::KEY_RIGHT_SHIFT,
    KeyboardKey::KEY_RIGHT_CONTROL,
    KeyboardKey::KEY_RIGHT_ALT,
    KeyboardKey::KEY_RIGHT_SUPER,
    KeyboardKey::KEY_KB_MENU,
];

/// Something a bound key asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleDebug,
}

/// Key code to action table.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<i32, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
            .with(KeyboardKey::KEY_UP, Action::MoveUp)
            .with(KeyboardKey::KEY_DOWN, Action::MoveDown)
            .with(KeyboardKey::KEY_LEFT, Action::MoveLeft)
            .with(KeyboardKey::KEY_RIGHT, Action::MoveRight)
            .with(KeyboardKey::KEY_F11, Action::ToggleDebug)
    }
}

impl KeyBindings {
    /// Create a table with no bindings.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn with(mut self, key: KeyboardKey, action: Action) -> Self {
        self.map.insert(key as i32, action);
        self
    }

    pub fn action(&self, key: KeyboardKey) -> Option<Action> {
        self.map.get(&(key as i32)).copied()
    }

    /// First scanned key bound to `action`, if any.
    pub fn key_for(&self, action: Action) -> Option<KeyboardKey> {
        SCANNED_KEYS
            .iter()
            .copied()
            .find(|k| self.action(*k) == Some(action))
    }
}

/// Keys held this frame and the frame before, in scan order.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub held: SmallVec<[KeyboardKey; 8]>,
    pub previous: SmallVec<[KeyboardKey; 8]>,
}

impl InputState {
    /// Build a state with `keys` held and nothing held before.
    pub fn with_held(keys: &[KeyboardKey]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            previous: SmallVec::new(),
        }
    }

    /// Move this frame's keys to `previous` before a new scan.
    pub fn begin_frame(&mut self) {
        self.previous = std::mem::take(&mut self.held);
    }

    pub fn press(&mut self, key: KeyboardKey) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    pub fn is_held(&self, key: KeyboardKey) -> bool {
        self.held.contains(&key)
    }

    /// Held now but not during the previous frame.
    pub fn just_pressed(&self, key: KeyboardKey) -> bool {
        self.is_held(key) && !self.previous.contains(&key)
    }

    /// Keys that went down this frame with no binding, in scan order.
    pub fn unbound_presses<'a>(
        &'a self,
        bindings: &'a KeyBindings,
    ) -> impl Iterator<Item = KeyboardKey> + 'a {
        self.held
            .iter()
            .copied()
            .filter(move |k| bindings.action(*k).is_none() && self.just_pressed(*k))
    }
}
