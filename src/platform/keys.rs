//! Keyboard mapping
//!
//! Uses `KeyboardEvent.code` values so the layout does not matter.

use crate::sim::Intent;

/// Translate a key press into an intent. Auto-repeated presses are dropped.
pub fn intent_for_key(code: &str, repeat: bool) -> Option<Intent> {
    if repeat {
        return None;
    }
    let intent = match code {
        "ArrowLeft" | "KeyA" => Intent::MoveLeft,
        "ArrowRight" | "KeyD" => Intent::MoveRight,
        "Space" | "ArrowUp" | "KeyW" => Intent::Jump,
        "Enter" | "NumpadEnter" => Intent::StartOrRestart,
        "Escape" => Intent::ShowMenu,
        "KeyM" => Intent::ToggleSound,
        _ => {
            let digit = code.strip_prefix("Digit")?.parse::<i64>().ok()?;
            if digit == 0 {
                return None;
            }
            Intent::SelectSkin(digit - 1)
        }
    };
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(intent_for_key("ArrowLeft", false), Some(Intent::MoveLeft));
        assert_eq!(intent_for_key("KeyD", false), Some(Intent::MoveRight));
        assert_eq!(intent_for_key("Space", false), Some(Intent::Jump));
        assert_eq!(intent_for_key("Enter", false), Some(Intent::StartOrRestart));
    }

    #[test]
    fn test_repeat_ignored() {
        assert_eq!(intent_for_key("ArrowLeft", true), None);
        assert_eq!(intent_for_key("Space", true), None);
    }

    #[test]
    fn test_skin_digits() {
        assert_eq!(intent_for_key("Digit1", false), Some(Intent::SelectSkin(0)));
        assert_eq!(intent_for_key("Digit4", false), Some(Intent::SelectSkin(3)));
        assert_eq!(intent_for_key("Digit0", false), None);
        assert_eq!(intent_for_key("KeyQ", false), None);
    }
}
