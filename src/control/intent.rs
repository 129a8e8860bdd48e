use crate::app::input::{Key, KeyEvent};

/// A discrete user intention, produced from key transition edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    StartWalking,
    StopWalking,
    Jump,
    TurnLeft,
    TurnRight,
    Shoot,
}

/// Key-to-intent mapping. Bindings are plain data so several rigs can own
/// independent mappers (or share one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: Key,
    pub jump: Key,
    pub turn_left: Key,
    pub turn_right: Key,
    pub fire: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: Key::ArrowUp,
            jump: Key::Space,
            turn_left: Key::ArrowLeft,
            turn_right: Key::ArrowRight,
            fire: Key::F,
        }
    }
}

impl KeyBindings {
    /// Maps one key edge to an intent. Walking follows the held forward
    /// key (press starts, release stops); everything else triggers on
    /// press only.
    #[must_use]
    pub fn map(&self, event: &KeyEvent) -> Option<Intent> {
        if event.pressed {
            if event.key == self.forward {
                Some(Intent::StartWalking)
            } else if event.key == self.jump {
                Some(Intent::Jump)
            } else if event.key == self.turn_left {
                Some(Intent::TurnLeft)
            } else if event.key == self.turn_right {
                Some(Intent::TurnRight)
            } else if event.key == self.fire {
                Some(Intent::Shoot)
            } else {
                None
            }
        } else if event.key == self.forward {
            Some(Intent::StopWalking)
        } else {
            None
        }
    }
}
