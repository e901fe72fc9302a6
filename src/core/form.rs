//! # Forms
//!
//! A `Form` is an ordered set of `FormField`s plus a single focus index.
//! It is the one place focus cycling lives: every page with fields uses the
//! same ring instead of re-deriving the modulo arithmetic.
//!
//! ```text
//! Form (login)
//! ├── [0] Email      ◀── focused
//! └── [1] Password   (masked)
//! ```
//!
//! Invariant: exactly one field has `focused == true`, and it is the one at
//! `focused_index`.

/// Which logical input a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Username => "Username",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
            FieldKind::ConfirmPassword => "Confirm Password",
        }
    }

    /// Maximum length in characters.
    pub fn max_length(&self) -> usize {
        match self {
            FieldKind::Username => 32,
            FieldKind::Email => 64,
            FieldKind::Password | FieldKind::ConfirmPassword => 50,
        }
    }

    pub fn masked(&self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }
}

/// A single editable text value.
///
/// Masked fields store the raw text; substituting the mask character is the
/// renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub value: String,
    pub focused: bool,
    pub masked: bool,
    pub max_length: usize,
}

impl FormField {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            focused: false,
            masked: kind.masked(),
            max_length: kind.max_length(),
        }
    }

    /// Appends a character. Returns false if the field is full or the
    /// character is a control character.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.value.chars().count() >= self.max_length {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Removes the last character. Returns false if the field was empty.
    pub fn pop(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Ordered fields with one focus index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
    focused_index: usize,
}

impl Form {
    /// Builds a form from the given kinds, focusing the first one.
    pub fn new(kinds: &[FieldKind]) -> Self {
        let mut form = Self {
            fields: kinds.iter().copied().map(FormField::new).collect(),
            focused_index: 0,
        };
        form.sync_focus();
        form
    }

    /// Email + password.
    pub fn login() -> Self {
        Self::new(&[FieldKind::Email, FieldKind::Password])
    }

    /// Username + email + password + confirmation.
    pub fn signup() -> Self {
        Self::new(&[
            FieldKind::Username,
            FieldKind::Email,
            FieldKind::Password,
            FieldKind::ConfirmPassword,
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focused_index)
    }

    pub fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused_index)
    }

    /// Value of the first field of the given kind, or "" if the form has none.
    pub fn value(&self, kind: FieldKind) -> &str {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focused_index = (self.focused_index + 1) % self.fields.len();
        self.sync_focus();
    }

    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        self.focused_index = (self.focused_index + len - 1) % len;
        self.sync_focus();
    }

    /// Empties every field and moves focus back to the first one.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focused_index = 0;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == self.focused_index;
        }
    }
}
