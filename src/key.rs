//! Type-safe key bindings with help metadata.
//!
//! This module provides the key binding system shared by all components in
//! this crate. A [`Binding`] couples one or more key presses with the help
//! text shown to the user, and the [`KeyMap`] trait lets components expose
//! their bindings for short and full help views.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_listview::key::{self, Binding, KeyMap};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! // Constructor style
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//!
//! // Functional-options style, with string key specs
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//!
//! assert_eq!(confirm.help.key, "enter");
//! assert_eq!(quit.keys.len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier keys.
///
/// Most bindings are plain key codes, but combinations like `ctrl+c` need
/// modifiers too. `KeyPress` converts from both shapes so binding
/// construction stays terse.
///
/// # Examples
///
/// ```rust
/// use bubbletea_listview::key::KeyPress;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let plain: KeyPress = KeyCode::Enter.into();
/// let combo: KeyPress = (KeyCode::Char('c'), KeyModifiers::CONTROL).into();
/// assert_eq!(plain.modifiers, KeyModifiers::NONE);
/// assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help metadata for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// Short action description, e.g. `"prev page"`.
    pub desc: String,
}

/// A key binding: the key presses that trigger it, its help text, and
/// whether it is currently enabled.
///
/// Disabled bindings never match and are meant to be hidden from help
/// views by the embedding application.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key presses that trigger this binding.
    pub keys: Vec<KeyPress>,
    /// Help metadata shown in help views.
    pub help: Help,
    /// Whether the binding is inactive.
    pub disabled: bool,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    ///
    /// Accepts anything convertible to [`KeyPress`], so plain `KeyCode`s
    /// and `(KeyCode, KeyModifiers)` tuples both work.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
    /// assert_eq!(b.keys.len(), 2);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns true if the given key message triggers this binding.
    ///
    /// Shift is ignored for character keys: terminals report `G` as
    /// `Char('G')` with the shift modifier set, and bindings list the
    /// shifted character directly.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.disabled {
            return false;
        }
        self.keys.iter().any(|press| {
            press.code == msg.key
                && (press.modifiers == msg.modifiers
                    || (matches!(press.code, KeyCode::Char(_))
                        && msg.modifiers.difference(press.modifiers) == KeyModifiers::SHIFT))
        })
    }

    /// Returns true if the binding is enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }
}

/// A functional option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Creates a binding from functional options, mirroring the Go bubbles
/// `key.NewBinding(key.WithKeys(...), key.WithHelp(...))` style.
///
/// # Examples
///
/// ```rust
/// use bubbletea_listview::key;
///
/// let b = key::new_binding(vec![
///     key::with_keys_str(&["pgdown", "right", "l"]),
///     key::with_help("→/l", "next page"),
/// ]);
/// assert_eq!(b.keys.len(), 3);
/// assert_eq!(b.help.desc, "next page");
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::new::<KeyPress>(vec![]);
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: set the binding's keys from explicit key presses.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    let keys: Vec<KeyPress> = keys.into_iter().map(Into::into).collect();
    Box::new(move |b| b.keys = keys)
}

/// Option: set the binding's keys from string specs.
///
/// Recognizes named keys (`"up"`, `"down"`, `"left"`, `"right"`, `"pgup"`,
/// `"pgdown"`, `"home"`, `"end"`, `"enter"`, `"esc"`, `"tab"`, `"space"`,
/// `"backspace"`), `"ctrl+<char>"` combinations, and single characters.
/// Unrecognized specs are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|spec| parse_key(spec)).collect();
    Box::new(move |b| b.keys = presses)
}

/// Option: set the binding's help label and description.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

fn parse_key(spec: &str) -> Option<KeyPress> {
    if let Some(rest) = spec.strip_prefix("ctrl+") {
        let c = rest.chars().next()?;
        return Some((KeyCode::Char(c), KeyModifiers::CONTROL).into());
    }
    let code = match spec {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = spec.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(code.into())
}

/// Returns true if the message matches the binding.
///
/// Free-function form of [`Binding::matches`] for call sites that read
/// better without method syntax.
pub fn matches(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Returns true if the message matches any of the given bindings.
pub fn matches_binding(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Trait for components that expose their key bindings for help views.
///
/// `short_help` returns the handful of bindings worth showing in a compact
/// single-line help; `full_help` returns all bindings grouped into columns.
pub trait KeyMap {
    /// Bindings for the compact help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_msg(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key_msg(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key_msg(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key_msg(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_matches_shifted_char() {
        // Terminals report 'G' with the shift modifier set.
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key_msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_binding_requires_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key_msg(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key_msg(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let b = new_binding(vec![with_keys_str(&["q"]), with_disabled()]);
        assert!(!b.matches(&key_msg(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!b.enabled());
    }

    #[test]
    fn test_with_keys_str_parsing() {
        let b = new_binding(vec![with_keys_str(&["pgup", "left", "h", "ctrl+b"])]);
        assert_eq!(b.keys.len(), 4);
        assert!(b.matches(&key_msg(KeyCode::PageUp, KeyModifiers::NONE)));
        assert!(b.matches(&key_msg(KeyCode::Char('b'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_matches_binding_helper() {
        let next = Binding::new(vec![KeyCode::Right]);
        let prev = Binding::new(vec![KeyCode::Left]);
        let msg = key_msg(KeyCode::Left, KeyModifiers::NONE);
        assert!(matches_binding(&msg, &[&next, &prev]));
        assert!(matches(&msg, &prev));
        assert!(!matches(&msg, &next));
    }
}
