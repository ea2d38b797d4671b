//! Keystroke filtering for the free-text name and the masked national ID.

use super::error::MaskError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Mask of the Salvadoran DUI: eight digits, a dash and a check digit.
pub const DUI_MASK: &str = "00000000-0";

/// Placeholder shown in unfilled digit slots.
pub const DEFAULT_PROMPT: char = '_';

static DUI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{8}-\d$").expect("DUI pattern is a valid regex"));

/// Whether a key press is accepted by the name field.
///
/// Control keys (backspace, delete, ...) pass through so the text can be edited.
pub fn accepts_name_key(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || c.is_control()
}

/// Strip everything from `raw` that may not be stored in the name field.
pub fn filter_name_input(raw: &str) -> String {
    raw.chars().filter(|&c| is_name_char(c)).collect()
}

/// A name is valid when it is not blank and holds only letters and spaces.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().all(is_name_char)
}

fn is_name_char(c: char) -> bool {
    accepts_name_key(c) && !c.is_control()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit,
    Literal(char),
}

/// Fixed-format numeric mask such as `00000000-0`.
///
/// `0` marks a required digit; every other character is a literal.
#[derive(Debug, Clone)]
pub struct IdMask {
    source: String,
    slots: Vec<Slot>,
    prompt: char,
    pattern: Regex,
}

impl IdMask {
    pub fn parse(mask: &str, prompt: char) -> Result<Self, MaskError> {
        if mask.is_empty() {
            return Err(MaskError::Empty);
        }
        if prompt.is_ascii_digit() || prompt.is_whitespace() {
            return Err(MaskError::InvalidPrompt(prompt));
        }

        let mut slots = Vec::with_capacity(mask.len());
        for c in mask.chars() {
            if c == '0' {
                slots.push(Slot::Digit);
            } else if c.is_ascii_digit() || c == prompt {
                return Err(MaskError::AmbiguousLiteral(c));
            } else {
                slots.push(Slot::Literal(c));
            }
        }
        if !slots.contains(&Slot::Digit) {
            return Err(MaskError::NoDigitSlots(mask.to_string()));
        }

        let pattern = if mask == DUI_MASK {
            DUI_PATTERN.clone()
        } else {
            Regex::new(&pattern_for(&slots))?
        };

        Ok(Self {
            source: mask.to_string(),
            slots,
            prompt,
            pattern,
        })
    }

    /// The DUI mask with the default prompt.
    pub fn dui() -> Self {
        Self {
            source: DUI_MASK.to_string(),
            slots: DUI_MASK
                .chars()
                .map(|c| if c == '0' { Slot::Digit } else { Slot::Literal(c) })
                .collect(),
            prompt: DEFAULT_PROMPT,
            pattern: DUI_PATTERN.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of digits the mask holds.
    pub fn capacity(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Digit).count()
    }

    /// Lay `digits` out over the mask, prompting in unfilled slots.
    ///
    /// No digits renders as an empty string, the state of a cleared field.
    pub fn render(&self, digits: &str) -> String {
        if digits.is_empty() {
            return String::new();
        }

        let mut digits = digits.chars();
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Digit => digits.next().unwrap_or(self.prompt),
                Slot::Literal(c) => *c,
            })
            .collect()
    }

    /// True when `text` is a fully filled rendering of this mask.
    pub fn is_complete(&self, text: &str) -> bool {
        !text.trim().is_empty() && !text.contains(self.prompt) && self.pattern.is_match(text)
    }
}

impl Default for IdMask {
    fn default() -> Self {
        Self::dui()
    }
}

fn pattern_for(slots: &[Slot]) -> String {
    let mut pattern = String::from("^");
    for slot in slots {
        match slot {
            Slot::Digit => pattern.push_str(r"\d"),
            Slot::Literal(c) => pattern.push_str(&regex::escape(&c.to_string())),
        }
    }
    pattern.push('$');
    pattern
}

/// Masked text box state: the digits typed so far over an [`IdMask`].
#[derive(Debug, Clone, Default)]
pub struct MaskedInput {
    mask: IdMask,
    digits: String,
}

impl MaskedInput {
    pub fn new(mask: IdMask) -> Self {
        Self {
            mask,
            digits: String::new(),
        }
    }

    pub fn mask(&self) -> &IdMask {
        &self.mask
    }

    /// Type one character. Only digits are accepted, and only while a slot is free.
    pub fn insert(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.digits.len() >= self.mask.capacity() {
            return false;
        }
        self.digits.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Re-derive the typed digits from an edited rendering.
    ///
    /// Literals, prompts and any non-digit the user managed to type are dropped;
    /// digits beyond the mask capacity are ignored.
    pub fn accept_edit(&mut self, edited: &str) {
        self.digits = edited
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.mask.capacity())
            .collect();
    }

    /// The field text as displayed, including literals and prompts.
    pub fn text(&self) -> String {
        self.mask.render(&self.digits)
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }
}
