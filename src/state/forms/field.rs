//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// Hint shown while the value is empty
    pub placeholder: String,
    value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self::text_with_value(name, label, placeholder, String::new(), is_multiline)
    }

    /// Create a new text field with initial value
    pub fn text_with_value(
        name: &str,
        label: &str,
        placeholder: &str,
        value: String,
        is_multiline: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value,
            is_multiline,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Value with `c` appended; newlines are dropped from single-line fields
    pub fn with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        if c != '\n' || self.is_multiline {
            value.push(c);
        }
        value
    }

    /// Value with the last character removed
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    /// Value with `text` appended, flattened to one line for single-line fields
    pub fn with_pasted(&self, text: &str) -> String {
        let mut value = self.value.clone();
        if self.is_multiline {
            value.push_str(&text.replace("\r\n", "\n"));
        } else {
            value.push_str(&text.replace(['\r', '\n'], " "));
        }
        value
    }

    /// Get the display value for rendering: the placeholder while empty
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}
