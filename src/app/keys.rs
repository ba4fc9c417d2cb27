//! Keyboard and paste handling.
//!
//! | Screen    | Keys |
//! |-----------|------|
//! | any       | Ctrl+C quit, Esc back to home |
//! | Home      | `1`/`c` vent, `2`/`f` community, `3`/`w` wellness, `q` quit |
//! | Chat      | Enter send, Tab language, PgUp/PgDn scroll |
//! | Community | Enter post, Ctrl+R refresh |
//! | Wellness  | Tab focus, `1`-`5` or Left/Right mood, Enter save, Ctrl+R reload |
//!
//! While the community acknowledgement is open, any key only dismisses it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::models::MoodRating;
use crate::widgets::input_box::InputBox;

use super::{App, Effect, MountedView, Screen, WellnessFocus};

const SCROLL_STEP: u16 = 5;

/// Apply a basic editing key. Returns false for keys it does not handle.
fn edit_input(input: &mut InputBox, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete_char(),
        KeyCode::Left => input.move_cursor_left(),
        KeyCode::Right => input.move_cursor_right(),
        KeyCode::Home => input.move_cursor_home(),
        KeyCode::End => input.move_cursor_end(),
        _ => return false,
    }
    true
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

impl App {
    /// Handle one key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'c') {
            self.quit();
            return;
        }

        if let MountedView::Community { view, .. } = &mut self.view {
            if view.notice().is_some() {
                view.dismiss_notice();
                self.mark_dirty();
                return;
            }
        }

        if key.code == KeyCode::Esc {
            match self.screen() {
                Screen::Home => self.quit(),
                _ => self.navigate(Screen::Home),
            }
            return;
        }

        self.mark_dirty();
        if self.screen() == Screen::Home {
            match key.code {
                KeyCode::Char('1') | KeyCode::Char('c') => self.navigate(Screen::Chat),
                KeyCode::Char('2') | KeyCode::Char('f') => self.navigate(Screen::Community),
                KeyCode::Char('3') | KeyCode::Char('w') => self.navigate(Screen::Wellness),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        let instance = self.view.instance();
        let effect = match &mut self.view {
            MountedView::Home => return,
            MountedView::Chat { view, .. } => match key.code {
                KeyCode::Enter if view.can_send() => view.send().map(Effect::Chat),
                KeyCode::Enter => None,
                KeyCode::Tab => {
                    view.set_language(view.language().toggled());
                    None
                }
                KeyCode::PageUp => {
                    view.scroll_up(SCROLL_STEP);
                    None
                }
                KeyCode::PageDown => {
                    view.scroll_down(SCROLL_STEP);
                    None
                }
                _ => {
                    edit_input(view.input_mut(), key);
                    None
                }
            },
            MountedView::Community { view, .. } => {
                if is_ctrl(&key, 'r') {
                    Some(Effect::LoadFeed(view.begin_load()))
                } else if key.code == KeyCode::Enter {
                    view.post().map(Effect::SubmitPost)
                } else {
                    edit_input(view.compose_mut(), key);
                    None
                }
            }
            MountedView::Wellness { view, focus, .. } => {
                if is_ctrl(&key, 'r') {
                    Some(Effect::LoadMoodHistory {
                        session_id: view.session().to_string(),
                        token: view.begin_load(),
                    })
                } else {
                    match (key.code, *focus) {
                        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                            *focus = focus.toggled();
                            None
                        }
                        (KeyCode::Enter, _) => view.save_mood().map(Effect::SaveMood),
                        (KeyCode::Char(c @ '1'..='5'), WellnessFocus::Mood) => {
                            let _ = view.set_mood(c as u8 - b'0');
                            None
                        }
                        (KeyCode::Left, WellnessFocus::Mood) => {
                            let _ = view.set_mood(view.mood().value().saturating_sub(1).max(MoodRating::MIN));
                            None
                        }
                        (KeyCode::Right, WellnessFocus::Mood) => {
                            let _ = view.set_mood((view.mood().value() + 1).min(MoodRating::MAX));
                            None
                        }
                        (_, WellnessFocus::Note) => {
                            edit_input(view.note_mut(), key);
                            None
                        }
                        _ => None,
                    }
                }
            }
        };

        if let (Some(instance), Some(effect)) = (instance, effect) {
            self.run_effect(instance, effect);
        }
    }

    /// Bracketed paste goes to whichever input is active.
    pub fn handle_paste(&mut self, text: &str) {
        let screen = self.screen();
        let input = match &mut self.view {
            MountedView::Chat { view, .. } => view.input_mut(),
            MountedView::Community { view, .. } => view.compose_mut(),
            MountedView::Wellness {
                view,
                focus: WellnessFocus::Note,
                ..
            } => view.note_mut(),
            _ => {
                debug!("paste ignored on {:?}", screen);
                return;
            }
        };
        input.insert_str(text);
        self.mark_dirty();
    }
}
