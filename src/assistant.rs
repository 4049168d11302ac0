pub const CANNED_REPLY: &str =
    "I'm here to help! This AI helper will explain or refactor your code once connected to a backend.";

/// Answers questions in the "Ask AI" panel.
pub trait Assistant {
    fn reply(&self, question: &str) -> String;
}

/// Always gives the same reply; no model behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedAssistant;

impl Assistant for CannedAssistant {
    fn reply(&self, _question: &str) -> String {
        CANNED_REPLY.to_string()
    }
}
