//! Scripted keyboard input.
//!
//! `InputQueue` holds frame-stamped key events and applies them to a
//! [`KeyMatrix`] as the host reaches each frame. Text is typed through a
//! [`Layout`], holding SHIFT and the alternate modifier as each character
//! needs.

use std::collections::VecDeque;

use crate::layout::{AltMode, Layout, Sk1100Key};
use crate::matrix::KeyMatrix;

/// Frames each typed key is held.
const HOLD_FRAMES: u64 = 3;
/// Frames between typed keys.
const GAP_FRAMES: u64 = 3;

/// A timed keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Frame number at which this event fires.
    pub frame: u64,
    pub key: Sk1100Key,
    /// True = press, false = release.
    pub pressed: bool,
}

/// Timed input queue for scripted key sequences.
///
/// Events stay sorted by frame. Events for the same frame fire in the
/// order they were queued.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` after every event already queued for its frame.
    pub fn push(&mut self, event: InputEvent) {
        let pos = self
            .events
            .iter()
            .position(|e| e.frame > event.frame)
            .unwrap_or(self.events.len());
        self.events.insert(pos, event);
    }

    /// Enqueue a key press and its release `hold_frames` later.
    pub fn enqueue_key(&mut self, key: Sk1100Key, at_frame: u64, hold_frames: u64) {
        self.push(InputEvent {
            frame: at_frame,
            key,
            pressed: true,
        });
        self.push(InputEvent {
            frame: at_frame.saturating_add(hold_frames),
            key,
            pressed: false,
        });
    }

    /// Enqueue typing `text` on `layout`. Characters the layout cannot type
    /// are skipped.
    ///
    /// With a kana lock the lock is assumed off at `start_frame`; it is
    /// toggled around alternate-layer characters and switched off again at
    /// the end. Returns the next free frame.
    pub fn enqueue_text(&mut self, layout: &Layout, text: &str, start_frame: u64) -> u64 {
        let mut frame = start_frame;
        let mut locked = false;

        for ch in text.chars() {
            let Some(stroke) = layout.stroke_for_char(ch) else {
                log::debug!("no SK-1100 key types {ch:?}");
                continue;
            };

            let mut chord = vec![stroke.key];
            if stroke.shift {
                chord.push(Sk1100Key::Shift);
            }
            match layout.alt_mode {
                AltMode::Hold => {
                    if stroke.alt {
                        chord.push(Sk1100Key::Eng);
                    }
                }
                AltMode::Lock => {
                    if stroke.alt != locked && (stroke.alt || has_alt_layer(layout, stroke.key)) {
                        frame = self.tap(&[Sk1100Key::Eng], frame);
                        locked = stroke.alt;
                    }
                }
            }
            frame = self.tap(&chord, frame);
        }

        if locked {
            frame = self.tap(&[Sk1100Key::Eng], frame);
        }
        frame
    }

    /// Apply every event due at or before `frame`.
    pub fn process(&mut self, frame: u64, keys: &mut KeyMatrix) {
        while self.events.front().is_some_and(|e| e.frame <= frame) {
            if let Some(event) = self.events.pop_front() {
                keys.set_key(event.key.position(), event.pressed);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Press `keys` together, release them after the hold, and return the
    /// frame after the gap. Modifiers come last so they are released with
    /// the key they modify.
    fn tap(&mut self, keys: &[Sk1100Key], frame: u64) -> u64 {
        for &key in keys.iter().rev() {
            self.push(InputEvent {
                frame,
                key,
                pressed: true,
            });
        }
        for &key in keys {
            self.push(InputEvent {
                frame: frame.saturating_add(HOLD_FRAMES),
                key,
                pressed: false,
            });
        }
        frame.saturating_add(HOLD_FRAMES + GAP_FRAMES)
    }
}

fn has_alt_layer(layout: &Layout, key: Sk1100Key) -> bool {
    layout
        .get(key)
        .is_some_and(|def| def.chars.alt.is_some() || def.chars.alt_shifted.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DOMESTIC, EXPORT};

    fn keys_at(queue: &[InputEvent], frame: u64, pressed: bool) -> Vec<Sk1100Key> {
        queue
            .iter()
            .filter(|e| e.frame == frame && e.pressed == pressed)
            .map(|e| e.key)
            .collect()
    }

    fn drain(queue: &InputQueue) -> Vec<InputEvent> {
        queue.events.iter().copied().collect()
    }

    #[test]
    fn enqueue_key_creates_press_and_release() {
        let mut queue = InputQueue::new();
        queue.enqueue_key(Sk1100Key::A, 10, 3);
        assert_eq!(queue.len(), 2);
        let events = drain(&queue);
        assert_eq!(keys_at(&events, 10, true), vec![Sk1100Key::A]);
        assert_eq!(keys_at(&events, 13, false), vec![Sk1100Key::A]);
    }

    #[test]
    fn push_keeps_frame_order() {
        let mut queue = InputQueue::new();
        queue.enqueue_key(Sk1100Key::B, 20, 1);
        queue.enqueue_key(Sk1100Key::A, 5, 1);
        let frames: Vec<u64> = drain(&queue).iter().map(|e| e.frame).collect();
        assert_eq!(frames, vec![5, 6, 20, 21]);
    }

    #[test]
    fn enqueue_text_basic() {
        let mut queue = InputQueue::new();
        let next = queue.enqueue_text(&DOMESTIC, "AB", 0);
        assert_eq!(next, 12);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn shifted_character_holds_shift() {
        let mut queue = InputQueue::new();
        queue.enqueue_text(&DOMESTIC, "!", 0);
        let events = drain(&queue);
        assert_eq!(
            keys_at(&events, 0, true),
            vec![Sk1100Key::Shift, Sk1100Key::N1]
        );
        assert_eq!(
            keys_at(&events, 3, false),
            vec![Sk1100Key::N1, Sk1100Key::Shift]
        );
    }

    #[test]
    fn kana_toggles_lock_around_text() {
        let mut queue = InputQueue::new();
        let next = queue.enqueue_text(&DOMESTIC, "カA", 0);
        let events = drain(&queue);
        // Lock on, カ, lock off, A.
        assert_eq!(keys_at(&events, 0, true), vec![Sk1100Key::Eng]);
        assert_eq!(keys_at(&events, 6, true), vec![Sk1100Key::T]);
        assert_eq!(keys_at(&events, 12, true), vec![Sk1100Key::Eng]);
        assert_eq!(keys_at(&events, 18, true), vec![Sk1100Key::A]);
        assert_eq!(next, 24);
    }

    #[test]
    fn lock_ignores_keys_without_kana() {
        let mut queue = InputQueue::new();
        let next = queue.enqueue_text(&DOMESTIC, "カ カ", 0);
        // Eng, カ, space, カ, Eng.
        assert_eq!(next, 30);
    }

    #[test]
    fn export_holds_modifier() {
        let mut queue = InputQueue::new();
        let next = queue.enqueue_text(&EXPORT, "ÉÉ", 0);
        assert_eq!(next, 12);
        let events = drain(&queue);
        assert_eq!(keys_at(&events, 0, true), vec![Sk1100Key::Eng, Sk1100Key::E]);
        assert_eq!(keys_at(&events, 3, false), vec![Sk1100Key::E, Sk1100Key::Eng]);
    }

    #[test]
    fn unsupported_characters_are_skipped() {
        let mut queue = InputQueue::new();
        let next = queue.enqueue_text(&EXPORT, "€", 7);
        assert_eq!(next, 7);
        assert!(queue.is_empty());
    }

    #[test]
    fn late_frames_clamp_instead_of_wrapping() {
        let mut queue = InputQueue::new();
        queue.enqueue_key(Sk1100Key::A, u64::MAX, 1);
        let events = drain(&queue);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.frame == u64::MAX));
        assert!(events[0].pressed);

        let mut queue = InputQueue::new();
        assert_eq!(queue.enqueue_text(&DOMESTIC, "A", u64::MAX - 1), u64::MAX);

        let mut keys = KeyMatrix::new();
        queue.process(u64::MAX, &mut keys);
        assert!(queue.is_empty());
    }

    #[test]
    fn process_applies_events() {
        let mut queue = InputQueue::new();
        let mut keys = KeyMatrix::new();
        queue.enqueue_key(Sk1100Key::A, 5, 3);

        queue.process(4, &mut keys);
        assert!(!keys.is_pressed(Sk1100Key::A));

        queue.process(5, &mut keys);
        assert!(keys.is_pressed(Sk1100Key::A));

        queue.process(8, &mut keys);
        assert!(!keys.is_pressed(Sk1100Key::A));
        assert!(queue.is_empty());
    }
}
