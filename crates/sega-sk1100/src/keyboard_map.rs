//! Host keyboard → SK-1100 key mapping.
//!
//! Maps winit `KeyCode` values to [`HostKey`] for windowed frontends. The
//! layout tables then resolve the SK-1100 key.

use winit::keyboard::KeyCode;

use crate::layout::{HostKey, Layout, Sk1100Key};

/// Map a winit key code to a host key.
///
/// Returns `None` for keys the SK-1100 has no use for.
#[must_use]
pub fn map_keycode(key: KeyCode) -> Option<HostKey> {
    let host = match key {
        KeyCode::Digit0 => HostKey::Digit0,
        KeyCode::Digit1 => HostKey::Digit1,
        KeyCode::Digit2 => HostKey::Digit2,
        KeyCode::Digit3 => HostKey::Digit3,
        KeyCode::Digit4 => HostKey::Digit4,
        KeyCode::Digit5 => HostKey::Digit5,
        KeyCode::Digit6 => HostKey::Digit6,
        KeyCode::Digit7 => HostKey::Digit7,
        KeyCode::Digit8 => HostKey::Digit8,
        KeyCode::Digit9 => HostKey::Digit9,

        KeyCode::KeyA => HostKey::KeyA,
        KeyCode::KeyB => HostKey::KeyB,
        KeyCode::KeyC => HostKey::KeyC,
        KeyCode::KeyD => HostKey::KeyD,
        KeyCode::KeyE => HostKey::KeyE,
        KeyCode::KeyF => HostKey::KeyF,
        KeyCode::KeyG => HostKey::KeyG,
        KeyCode::KeyH => HostKey::KeyH,
        KeyCode::KeyI => HostKey::KeyI,
        KeyCode::KeyJ => HostKey::KeyJ,
        KeyCode::KeyK => HostKey::KeyK,
        KeyCode::KeyL => HostKey::KeyL,
        KeyCode::KeyM => HostKey::KeyM,
        KeyCode::KeyN => HostKey::KeyN,
        KeyCode::KeyO => HostKey::KeyO,
        KeyCode::KeyP => HostKey::KeyP,
        KeyCode::KeyQ => HostKey::KeyQ,
        KeyCode::KeyR => HostKey::KeyR,
        KeyCode::KeyS => HostKey::KeyS,
        KeyCode::KeyT => HostKey::KeyT,
        KeyCode::KeyU => HostKey::KeyU,
        KeyCode::KeyV => HostKey::KeyV,
        KeyCode::KeyW => HostKey::KeyW,
        KeyCode::KeyX => HostKey::KeyX,
        KeyCode::KeyY => HostKey::KeyY,
        KeyCode::KeyZ => HostKey::KeyZ,

        // Punctuation
        KeyCode::Minus => HostKey::Minus,
        KeyCode::Equal => HostKey::Equal,
        KeyCode::BracketLeft => HostKey::BracketLeft,
        KeyCode::BracketRight => HostKey::BracketRight,
        KeyCode::Backslash => HostKey::Backslash,
        KeyCode::IntlBackslash => HostKey::IntlBackslash,
        KeyCode::Semicolon => HostKey::Semicolon,
        KeyCode::Quote => HostKey::Quote,
        KeyCode::Comma => HostKey::Comma,
        KeyCode::Period => HostKey::Period,
        KeyCode::Slash => HostKey::Slash,

        // Editing and cursor keys
        KeyCode::Backspace => HostKey::Backspace,
        KeyCode::Tab => HostKey::Tab,
        KeyCode::Space => HostKey::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => HostKey::Enter,
        KeyCode::Escape => HostKey::Escape,
        KeyCode::Insert => HostKey::Insert,
        KeyCode::Delete => HostKey::Delete,
        KeyCode::ArrowUp => HostKey::ArrowUp,
        KeyCode::ArrowDown => HostKey::ArrowDown,
        KeyCode::ArrowLeft => HostKey::ArrowLeft,
        KeyCode::ArrowRight => HostKey::ArrowRight,

        // Modifiers
        KeyCode::ShiftLeft => HostKey::ShiftLeft,
        KeyCode::ShiftRight => HostKey::ShiftRight,
        KeyCode::ControlLeft | KeyCode::ControlRight => HostKey::ControlLeft,
        KeyCode::AltLeft => HostKey::AltLeft,
        KeyCode::AltRight => HostKey::AltRight,

        _ => return None,
    };
    Some(host)
}

/// Map a winit key code straight to an SK-1100 key.
#[must_use]
pub fn map_key(layout: &Layout, key: KeyCode) -> Option<Sk1100Key> {
    map_keycode(key).and_then(|host| layout.key_for_host(host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DOMESTIC;

    #[test]
    fn letters_and_modifiers() {
        assert_eq!(map_key(&DOMESTIC, KeyCode::KeyQ), Some(Sk1100Key::Q));
        assert_eq!(map_key(&DOMESTIC, KeyCode::ShiftRight), Some(Sk1100Key::Shift));
        assert_eq!(map_key(&DOMESTIC, KeyCode::ControlRight), Some(Sk1100Key::Ctrl));
        assert_eq!(map_key(&DOMESTIC, KeyCode::Escape), Some(Sk1100Key::Break));
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(map_keycode(KeyCode::F1), None);
        assert_eq!(map_key(&DOMESTIC, KeyCode::PageUp), None);
    }
}
