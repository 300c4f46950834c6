use winit::event::VirtualKeyCode as WinitKey;

/// Symbolic name for a key on the keyboard.
///
/// Only the keys the viewer binds are named; everything else maps to
/// `Invalid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VirtualKeyCode {
    Invalid,

    Key1,
    Key2,
    Key3,
    Key4,

    C,
    Q,
    S,

    KeypadAdd,
    KeypadSubtract,

    /// For any country/region, the '=+' key.
    Equals,
    /// For any country/region, the '-_' key.
    Minus,

    Escape,

    PageUp,
    PageDown,
    Home,

    Left,
    Right,
    Up,
    Down,
}

pub(crate) fn map(key: WinitKey) -> VirtualKeyCode {
    match key {
        WinitKey::Key1 | WinitKey::Numpad1 => VirtualKeyCode::Key1,
        WinitKey::Key2 | WinitKey::Numpad2 => VirtualKeyCode::Key2,
        WinitKey::Key3 | WinitKey::Numpad3 => VirtualKeyCode::Key3,
        WinitKey::Key4 | WinitKey::Numpad4 => VirtualKeyCode::Key4,

        WinitKey::C => VirtualKeyCode::C,
        WinitKey::Q => VirtualKeyCode::Q,
        WinitKey::S => VirtualKeyCode::S,

        WinitKey::NumpadAdd | WinitKey::Plus => VirtualKeyCode::KeypadAdd,
        WinitKey::NumpadSubtract => VirtualKeyCode::KeypadSubtract,
        WinitKey::Equals => VirtualKeyCode::Equals,
        WinitKey::Minus => VirtualKeyCode::Minus,

        WinitKey::Escape => VirtualKeyCode::Escape,

        WinitKey::PageUp => VirtualKeyCode::PageUp,
        WinitKey::PageDown => VirtualKeyCode::PageDown,
        WinitKey::Home => VirtualKeyCode::Home,

        WinitKey::Left => VirtualKeyCode::Left,
        WinitKey::Right => VirtualKeyCode::Right,
        WinitKey::Up => VirtualKeyCode::Up,
        WinitKey::Down => VirtualKeyCode::Down,

        _ => VirtualKeyCode::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_keypad_agree() {
        assert_eq!(map(WinitKey::Key3), VirtualKeyCode::Key3);
        assert_eq!(map(WinitKey::Numpad3), VirtualKeyCode::Key3);
        assert_eq!(map(WinitKey::NumpadAdd), VirtualKeyCode::KeypadAdd);
        assert_eq!(map(WinitKey::Plus), VirtualKeyCode::KeypadAdd);
        assert_eq!(map(WinitKey::Return), VirtualKeyCode::Invalid);
        assert_eq!(map(WinitKey::F7), VirtualKeyCode::Invalid);
    }
}
