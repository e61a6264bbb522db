//! Confirm-before-submit gate.
//!
//! In the browser the gate is the `confirmSubmit` script emitted by the
//! renderer; `ConfirmationGate` carries the same message and decision rule so
//! that other front ends (and tests) can drive it with their own prompt.

/// A blocking yes/no prompt.
pub trait Confirm {
    /// Show `message` and return whether the user explicitly agreed.
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Decides whether a pending form submission may proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate {
    message: String,
}

impl ConfirmationGate {
    /// Create a gate that asks `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the confirmation text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ask for confirmation; `true` lets the submission through, `false` blocks it.
    pub fn allow_submit(&self, prompt: &dyn Confirm) -> bool {
        prompt.confirm(&self.message)
    }

    /// The `<script>` block defining `confirmSubmit()` for the form's `onsubmit`.
    pub(crate) fn script(&self) -> String {
        // A JSON string is a valid JS string literal; "</" is split so the
        // message can never terminate the script element.
        let literal = serde_json::to_string(&self.message)
            .unwrap_or_else(|_| "\"\"".to_string())
            .replace("</", "<\\/");

        format!(
            "<script>\n  function confirmSubmit() {{\n    return window.confirm({literal});\n  }}\n</script>\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn declining_blocks_submission() {
        let gate = ConfirmationGate::new("Submit?");
        assert!(!gate.allow_submit(&|_: &str| false));
    }

    #[test]
    fn accepting_allows_submission() {
        let gate = ConfirmationGate::new("Submit?");
        assert!(gate.allow_submit(&|_: &str| true));
    }

    #[test]
    fn prompt_receives_configured_message() {
        let seen = RefCell::new(String::new());
        let gate = ConfirmationGate::new("确定提交吗？");

        gate.allow_submit(&|message: &str| {
            seen.replace(message.to_string());
            true
        });

        assert_eq!(seen.into_inner(), "确定提交吗？");
    }

    #[test]
    fn script_escapes_message() {
        let gate = ConfirmationGate::new("Really \"submit\"? </script><b>");
        let script = gate.script();

        assert!(script.contains(r#"window.confirm("Really \"submit\"? <\/script><b>")"#));
        assert_eq!(script.matches("</script>").count(), 1);
    }
}
