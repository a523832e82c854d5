use std::fmt;

use crate::{INPUT_CLASS, cn, prelude::*};

type ChangeHandler = Box<dyn FnMut(&str)>;

/// A controlled single-line text input.
///
/// The host owns the value: every edit is stored and forwarded to the change
/// handler verbatim.
#[derive(Default)]
pub struct TextInput {
    value:      String,
    class_name: Option<String>,
    on_change:  Option<ChangeHandler>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Extra classes appended after the base input classes
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value without notifying, for host-driven updates.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Applies a user edit and notifies the change handler.
    pub fn input(&mut self, text: &str) {
        trace!("text input changed to {text:?}");
        text.clone_into(&mut self.value);
        if let Some(handler) = self.on_change.as_mut() {
            handler(text);
        }
    }

    pub fn class(&self) -> String {
        cn([Some(INPUT_CLASS), self.class_name.as_deref()])
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("value", &self.value)
            .field("class_name", &self.class_name)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
