//! Key mapping from terminal events to game intents.

use crate::types::{Intent, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to an intent for the given phase.
pub fn handle_key_event(key: KeyEvent, phase: Phase) -> Option<Intent> {
    // Only presses count: held keys auto-repeat and some terminals report releases.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Sound toggle works everywhere
    if matches!(key.code, KeyCode::Char('m') | KeyCode::Char('M')) {
        return Some(Intent::ToggleSound);
    }

    match phase {
        Phase::Menu => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Start),
            _ => None,
        },
        Phase::Playing => match key.code {
            KeyCode::Char('h') | KeyCode::Char('H') => Some(Intent::UseHint),
            _ => option_for_key(key.code).map(Intent::SubmitAnswer),
        },
        Phase::LevelComplete => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(Intent::NextLevel)
            }
            _ => None,
        },
        Phase::GameOver | Phase::Victory => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(Intent::Restart)
            }
            _ => None,
        },
    }
}

/// Option index for an answer key: `1`-`9` or a letter from `a`.
///
/// `h` and `m` are taken by the hint and sound keys, so letters stop at `g`.
pub fn option_for_key(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        KeyCode::Char(c @ 'a'..='g') => Some(c as usize - 'a' as usize),
        KeyCode::Char(c @ 'A'..='G') => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(handle_key_event(press(KeyCode::Enter), Phase::Menu), Some(Intent::Start));
        assert_eq!(
            handle_key_event(press(KeyCode::Char(' ')), Phase::Menu),
            Some(Intent::Start)
        );
        assert_eq!(handle_key_event(press(KeyCode::Char('1')), Phase::Menu), None);
    }

    #[test]
    fn test_answer_keys() {
        assert_eq!(
            handle_key_event(press(KeyCode::Char('1')), Phase::Playing),
            Some(Intent::SubmitAnswer(0))
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('4')), Phase::Playing),
            Some(Intent::SubmitAnswer(3))
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('b')), Phase::Playing),
            Some(Intent::SubmitAnswer(1))
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('D')), Phase::Playing),
            Some(Intent::SubmitAnswer(3))
        );
        assert_eq!(handle_key_event(press(KeyCode::Char('0')), Phase::Playing), None);
        assert_eq!(handle_key_event(press(KeyCode::Enter), Phase::Playing), None);
    }

    #[test]
    fn test_hint_key() {
        assert_eq!(
            handle_key_event(press(KeyCode::Char('h')), Phase::Playing),
            Some(Intent::UseHint)
        );
        assert_eq!(handle_key_event(press(KeyCode::Char('h')), Phase::Menu), None);
    }

    #[test]
    fn test_progress_keys() {
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('n')] {
            assert_eq!(
                handle_key_event(press(code), Phase::LevelComplete),
                Some(Intent::NextLevel)
            );
        }
        for phase in [Phase::GameOver, Phase::Victory] {
            for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('r')] {
                assert_eq!(handle_key_event(press(code), phase), Some(Intent::Restart));
            }
        }
        assert_eq!(handle_key_event(press(KeyCode::Char('r')), Phase::LevelComplete), None);
    }

    #[test]
    fn test_sound_toggle_in_every_phase() {
        for phase in [
            Phase::Menu,
            Phase::Playing,
            Phase::LevelComplete,
            Phase::GameOver,
            Phase::Victory,
        ] {
            assert_eq!(
                handle_key_event(press(KeyCode::Char('m')), phase),
                Some(Intent::ToggleSound)
            );
        }
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('1'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(key, Phase::Playing), None);
    }

    #[test]
    fn test_held_key_repeat_is_ignored() {
        for code in [KeyCode::Char('h'), KeyCode::Char('2'), KeyCode::Char('m')] {
            let mut key = press(code);
            key.kind = KeyEventKind::Repeat;
            assert_eq!(handle_key_event(key, Phase::Playing), None);
        }
        let mut enter = press(KeyCode::Enter);
        enter.kind = KeyEventKind::Repeat;
        assert_eq!(handle_key_event(enter, Phase::Menu), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Char('x'))));
    }
}
