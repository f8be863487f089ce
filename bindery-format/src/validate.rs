use crate::{FormatResult, NumberParser};
use bindery_model::Record;
use serde_json::Value;

/// Validates a record attribute by parsing it under a number pattern.
///
/// An unparseable value attaches a localized message to the attribute's
/// error bag — parse failure is an expected outcome of validating user
/// input, never an error. The default message follows the framework
/// convention: `"{attribute} format is invalid."`.
#[derive(Debug, Clone)]
pub struct FormatParseRule {
    pub pattern: String,
    /// Whether a missing or empty value passes without parsing. Defaults
    /// to true.
    pub allow_empty: bool,
    /// Custom message; `{attribute}` interpolates the attribute name.
    pub message: Option<String>,
}

impl FormatParseRule {
    /// Creates a rule for `pattern` that lets empty values pass.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            allow_empty: true,
            message: None,
        }
    }

    /// Makes empty values fail validation like any other unparseable text.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.allow_empty = false;
        self
    }

    /// Overrides the error message.
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Validates `attribute` on `record`, adding an error on failure.
    ///
    /// Returns whether the attribute passed. String and numeric values
    /// parse by their text form; null and missing count as empty; any
    /// other JSON shape fails.
    ///
    /// # Errors
    ///
    /// Propagates a bad pattern from compilation.
    pub fn validate(
        &self,
        record: &mut Record,
        attribute: &str,
        parser: &NumberParser,
    ) -> FormatResult<bool> {
        let text = match record.get(attribute) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            // Non-scalar shapes can never denote a number.
            Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
                record.add_error(attribute, self.message_for(attribute));
                return Ok(false);
            }
        };

        if text.is_empty() && self.allow_empty {
            return Ok(true);
        }

        if parser.parse(&self.pattern, &text)?.is_some() {
            Ok(true)
        } else {
            record.add_error(attribute, self.message_for(attribute));
            Ok(false)
        }
    }

    fn message_for(&self, attribute: &str) -> String {
        self.message
            .as_deref()
            .unwrap_or("{attribute} format is invalid.")
            .replace("{attribute}", attribute)
    }
}
