//! Single-line text input for the personal-info step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    /// Byte index into `value`, always on a char boundary.
    cursor: usize,
}

impl InputField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Returns true if the key edited the value.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
                'u' => {
                    self.value.clear();
                    self.cursor = 0;
                    true
                }
                'a' => {
                    self.cursor = 0;
                    false
                }
                'e' => {
                    self.cursor = self.value.len();
                    false
                }
                _ => false,
            },
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.value.remove(prev);
                    self.cursor = prev;
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                false
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    /// Value with a `|` at the cursor, for the focused field.
    pub fn with_cursor(&self) -> String {
        let (head, tail) = self.value.split_at(self.cursor);
        format!("{}|{}", head, tail)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = InputField::new("ab");
        assert!(field.handle_key(key(KeyCode::Char('c'))));
        assert_eq!(field.value(), "abc");
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut field = InputField::new("né");
        field.handle_key(key(KeyCode::Left));
        assert_eq!(field.cursor(), 1);
        field.handle_key(key(KeyCode::Char('x')));
        assert_eq!(field.value(), "nxé");
        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Left));
        assert_eq!(field.cursor(), 0);
        field.handle_key(key(KeyCode::End));
        assert_eq!(field.with_cursor(), "nxé|");
    }

    #[test]
    fn delete_at_end_and_ctrl_u() {
        let mut field = InputField::new("hello");
        assert!(!field.handle_key(key(KeyCode::Delete)));
        let ctrl_u = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('u'))
        };
        assert!(field.handle_key(ctrl_u));
        assert_eq!(field.value(), "");
        assert!(!field.handle_key(key(KeyCode::Backspace)));
    }
}
