//! Key bindings.

use fractals::{FractalKind, FractalRequest};
use shell::{ButtonState, VirtualKeyCode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the depth by the given amount, clamped to the kind's range.
    StepDepth(i32),
    SetDepth(u32),
    SelectKind(FractalKind),
    /// Draw fresh random colors for the current geometry.
    Recolor,
    SaveSnapshot,
    Quit,
}

impl Command {
    /// Whether holding the key down should keep issuing the command.
    #[must_use]
    pub fn repeats(self) -> bool {
        matches!(self, Self::StepDepth(_))
    }

    /// The request that results from applying this command, or `None` for
    /// commands that do not touch the request.
    #[must_use]
    pub fn apply(self, request: &FractalRequest) -> Option<FractalRequest> {
        match self {
            Self::StepDepth(delta) => Some(request.clone().stepped(delta)),
            Self::SetDepth(depth) => Some(request.clone().with_depth(depth)),
            Self::SelectKind(kind) => Some(request.clone().with_kind(kind)),
            Self::Recolor | Self::SaveSnapshot | Self::Quit => None,
        }
    }
}

const BINDINGS: &[(VirtualKeyCode, Command)] = &[
    (VirtualKeyCode::Left, Command::StepDepth(-1)),
    (VirtualKeyCode::Minus, Command::StepDepth(-1)),
    (VirtualKeyCode::KeypadSubtract, Command::StepDepth(-1)),
    (VirtualKeyCode::Right, Command::StepDepth(1)),
    (VirtualKeyCode::Equals, Command::StepDepth(1)),
    (VirtualKeyCode::KeypadAdd, Command::StepDepth(1)),
    (VirtualKeyCode::Down, Command::StepDepth(-10)),
    (VirtualKeyCode::PageDown, Command::StepDepth(-10)),
    (VirtualKeyCode::Up, Command::StepDepth(10)),
    (VirtualKeyCode::PageUp, Command::StepDepth(10)),
    (VirtualKeyCode::Home, Command::SetDepth(0)),
    (VirtualKeyCode::Key1, Command::SelectKind(FractalKind::Sierpinski)),
    (VirtualKeyCode::Key2, Command::SelectKind(FractalKind::SquareDiamond)),
    (VirtualKeyCode::Key3, Command::SelectKind(FractalKind::KochSnowflake)),
    (VirtualKeyCode::Key4, Command::SelectKind(FractalKind::Circle)),
    (VirtualKeyCode::C, Command::Recolor),
    (VirtualKeyCode::S, Command::SaveSnapshot),
    (VirtualKeyCode::Escape, Command::Quit),
    (VirtualKeyCode::Q, Command::Quit),
];

/// Maps a key event to a command. Releases never produce one.
#[must_use]
pub fn translate(key: VirtualKeyCode, state: ButtonState) -> Option<Command> {
    let command = BINDINGS
        .iter()
        .find_map(|(bound, command)| (*bound == key).then_some(*command))?;

    match state {
        ButtonState::Pressed => Some(command),
        ButtonState::Repeated(_) if command.repeats() => Some(command),
        ButtonState::Repeated(_) | ButtonState::Released => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        assert_eq!(
            translate(VirtualKeyCode::Right, ButtonState::Pressed),
            Some(Command::StepDepth(1))
        );
        assert_eq!(translate(VirtualKeyCode::Right, ButtonState::Released), None);
        assert_eq!(translate(VirtualKeyCode::Invalid, ButtonState::Pressed), None);
    }

    #[test]
    fn repeats() {
        assert_eq!(
            translate(VirtualKeyCode::Left, ButtonState::Repeated(3)),
            Some(Command::StepDepth(-1))
        );
        assert_eq!(translate(VirtualKeyCode::S, ButtonState::Repeated(1)), None);
        assert_eq!(translate(VirtualKeyCode::Escape, ButtonState::Repeated(1)), None);
    }

    #[test]
    fn kinds() {
        for (key, kind) in [
            (VirtualKeyCode::Key1, FractalKind::Sierpinski),
            (VirtualKeyCode::Key2, FractalKind::SquareDiamond),
            (VirtualKeyCode::Key3, FractalKind::KochSnowflake),
            (VirtualKeyCode::Key4, FractalKind::Circle),
        ] {
            let command = translate(key, ButtonState::Pressed).unwrap();
            let request = command.apply(&FractalRequest::default()).unwrap();
            assert_eq!(request.kind(), kind);
        }
    }

    #[test]
    fn depth_clamps_at_bounds() {
        let mut request = FractalRequest::default();

        let down = translate(VirtualKeyCode::Left, ButtonState::Pressed).unwrap();
        request = down.apply(&request).unwrap();
        assert_eq!(request.depth(), 0);

        let up = translate(VirtualKeyCode::Right, ButtonState::Pressed).unwrap();
        for _ in 0..20 {
            request = up.apply(&request).unwrap();
        }
        assert_eq!(request.depth(), 10);

        let home = translate(VirtualKeyCode::Home, ButtonState::Pressed).unwrap();
        assert_eq!(home.apply(&request).unwrap().depth(), 0);
    }

    #[test]
    fn every_named_key_is_bound() {
        for key in [
            VirtualKeyCode::Key1,
            VirtualKeyCode::Key2,
            VirtualKeyCode::Key3,
            VirtualKeyCode::Key4,
            VirtualKeyCode::C,
            VirtualKeyCode::Q,
            VirtualKeyCode::S,
            VirtualKeyCode::KeypadAdd,
            VirtualKeyCode::KeypadSubtract,
            VirtualKeyCode::Equals,
            VirtualKeyCode::Minus,
            VirtualKeyCode::Escape,
            VirtualKeyCode::PageUp,
            VirtualKeyCode::PageDown,
            VirtualKeyCode::Home,
            VirtualKeyCode::Left,
            VirtualKeyCode::Right,
            VirtualKeyCode::Up,
            VirtualKeyCode::Down,
        ] {
            assert!(translate(key, ButtonState::Pressed).is_some(), "{key:?} is unbound");
        }
    }

    #[test]
    fn non_request_commands() {
        let request = FractalRequest::default();
        assert_eq!(Command::Quit.apply(&request), None);
        assert_eq!(Command::SaveSnapshot.apply(&request), None);
        assert_eq!(Command::Recolor.apply(&request), None);
    }
}
