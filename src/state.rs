use std::rc::Rc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::assistant::{Assistant, CannedAssistant};
use crate::config::AppConfig;
use crate::converter::{Converter, PlaceholderConverter};
use crate::history::{self, HistoryEntry};
use crate::types::{ChatMessage, Language, Notice, Theme};
use crate::upload::{self, MergeOutcome};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

/// Everything the page shows, for one browser session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub from_lang: Language,
    pub to_lang: Language,
    pub prompt: String,
    pub input_code: String,
    pub output_code: String,
    pub history: Vec<HistoryEntry>,
    pub history_limit: usize,
    pub ai_open: bool,
    pub ai_messages: Vec<ChatMessage>,
    pub theme: Theme,
    pub notice: Option<Notice>,
    pub toast: Option<Toast>,
}

impl SessionState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            from_lang: config.default_from,
            to_lang: config.default_to,
            prompt: String::new(),
            input_code: String::new(),
            output_code: String::new(),
            history: Vec::new(),
            history_limit: config.history_limit,
            ai_open: false,
            ai_messages: Vec::new(),
            theme: config.theme,
            notice: None,
            toast: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetFromLang(Language),
    SetToLang(Language),
    SetPrompt(String),
    SetInputCode(String),
    /// `at` is the wall-clock time recorded in history.
    Convert { at: NaiveDateTime },
    FileLoaded { name: String, bytes: Vec<u8> },
    UploadFailed(String),
    OpenAssistant,
    ToggleAssistant,
    AskAssistant(String),
    SetTheme(Theme),
    SetHistoryLimit(usize),
    ClearHistory,
    Notify(Notice),
    DismissNotice,
    ShowToast(Toast),
    ExpireToast(u64),
}

/// Session state plus the services the reducer needs to answer actions.
#[derive(Clone)]
pub struct Store {
    pub state: SessionState,
    pub config: Rc<AppConfig>,
    converter: Rc<dyn Converter>,
    assistant: Rc<dyn Assistant>,
}

impl Store {
    pub fn new(config: AppConfig) -> Self {
        Self::with_services(config, Rc::new(PlaceholderConverter), Rc::new(CannedAssistant))
    }

    pub fn with_services(
        config: AppConfig,
        converter: Rc<dyn Converter>,
        assistant: Rc<dyn Assistant>,
    ) -> Self {
        Self {
            state: SessionState::new(&config),
            config: Rc::new(config),
            converter,
            assistant,
        }
    }

    pub fn apply(&mut self, action: Action) {
        let state = &mut self.state;
        match action {
            Action::SetFromLang(lang) => state.from_lang = lang,
            Action::SetToLang(lang) => state.to_lang = lang,
            Action::SetPrompt(prompt) => state.prompt = prompt,
            Action::SetInputCode(code) => state.input_code = code,
            Action::Convert { at } => {
                if state.input_code.trim().is_empty() {
                    state.notice = Some(Notice::warning("Please provide code or upload a file."));
                    return;
                }
                let (from, to) = (state.from_lang.name(), state.to_lang.name());
                state.output_code =
                    self.converter.convert(from, to, &state.prompt, &state.input_code);
                state.notice = Some(Notice::success(format!(
                    "Conversion from {} to {} completed!",
                    from, to
                )));
                let entry = HistoryEntry::new(at, from, to, &state.prompt, &state.input_code);
                history::record(&mut state.history, entry, state.history_limit);
                log::info!(
                    "converted {} -> {} ({} bytes), history size {}",
                    from,
                    to,
                    state.input_code.len(),
                    state.history.len()
                );
            }
            Action::FileLoaded { name, bytes } => {
                if let Err(e) = upload::check_extension(&name) {
                    log::warn!("rejected upload {}: {}", name, e);
                    state.notice = Some(Notice::error(format!("Failed to read uploaded file: {}", e)));
                    return;
                }
                let content = upload::decode_text(bytes);
                let (merged, outcome) = upload::merge_into_input(&state.input_code, &content);
                state.input_code = merged;
                state.notice = Some(match outcome {
                    MergeOutcome::Appended => {
                        Notice::info("Uploaded file content appended to existing input.")
                    }
                    MergeOutcome::Loaded => {
                        Notice::success(format!("Loaded '{}' into input code.", name))
                    }
                });
                log::info!("upload {} {:?} ({} chars)", name, outcome, content.chars().count());
            }
            Action::UploadFailed(reason) => {
                log::error!("upload failed: {}", reason);
                state.notice = Some(Notice::error(format!("Failed to read uploaded file: {}", reason)));
            }
            Action::OpenAssistant => state.ai_open = true,
            Action::ToggleAssistant => state.ai_open = !state.ai_open,
            Action::AskAssistant(question) => {
                if question.trim().is_empty() {
                    return;
                }
                let reply = self.assistant.reply(&question);
                state.ai_messages.push(ChatMessage::user(question));
                state.ai_messages.push(ChatMessage::assistant(reply));
                state.ai_open = true;
            }
            Action::SetTheme(theme) => state.theme = theme,
            // Takes effect on the next insert.
            Action::SetHistoryLimit(limit) => {
                state.history_limit = self.config.clamp_history_limit(limit)
            }
            Action::ClearHistory => {
                state.history.clear();
                state.notice = Some(Notice::info("History cleared."));
            }
            Action::Notify(notice) => state.notice = Some(notice),
            Action::DismissNotice => state.notice = None,
            Action::ShowToast(toast) => state.toast = Some(toast),
            Action::ExpireToast(id) => {
                if state.toast.as_ref().is_some_and(|t| t.id == id) {
                    state.toast = None;
                }
            }
        }
    }
}

impl Reducible for Store {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::CANNED_REPLY;
    use crate::types::{NoticeLevel, Role};
    use chrono::NaiveDate;

    fn at(sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, sec)
            .unwrap()
    }

    fn store() -> Store {
        Store::new(AppConfig::default())
    }

    #[test]
    fn test_initial_state_follows_config() {
        let s = store();
        assert_eq!(s.state.from_lang, Language::Python);
        assert_eq!(s.state.to_lang, Language::JavaScript);
        assert_eq!(s.state.history_limit, 10);
        assert_eq!(s.state.theme, Theme::Light);
        assert!(!s.state.ai_open);
    }

    #[test]
    fn test_convert_with_blank_input_only_warns() {
        let mut s = store();
        s.apply(Action::SetInputCode("   \n".to_string()));
        let before = s.state.clone();
        s.apply(Action::Convert { at: at(0) });

        let notice = s.state.notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.text, "Please provide code or upload a file.");
        assert_eq!(SessionState { notice: None, ..s.state }, before);
    }

    #[test]
    fn test_convert_sets_output_and_records_history() {
        let mut s = store();
        s.apply(Action::SetPrompt("  ".to_string()));
        s.apply(Action::SetInputCode("x=1".to_string()));
        s.apply(Action::Convert { at: at(1) });

        assert!(s.state.output_code.starts_with("// Conversion from Python to JavaScript completed!\n"));
        assert!(s.state.output_code.ends_with("// Original Python code below for reference:\n// x=1"));
        assert_eq!(
            s.state.notice,
            Some(Notice::success("Conversion from Python to JavaScript completed!"))
        );
        assert_eq!(s.state.history.len(), 1);
        let entry = &s.state.history[0];
        assert_eq!((entry.from.as_str(), entry.to.as_str()), ("Python", "JavaScript"));
        assert_eq!(entry.prompt, "");
        assert_eq!(entry.code_preview, "x=1");
        assert_eq!(entry.time, at(1));
    }

    #[test]
    fn test_history_limit_applies_on_next_insert_only() {
        let mut s = store();
        s.apply(Action::SetInputCode("a".to_string()));
        for i in 0..6 {
            s.apply(Action::Convert { at: at(i) });
        }
        s.apply(Action::SetHistoryLimit(4));
        assert_eq!(s.state.history.len(), 6);

        s.apply(Action::Convert { at: at(10) });
        assert_eq!(s.state.history.len(), 4);
        assert_eq!(s.state.history[0].time, at(10));
        assert_eq!(s.state.history[3].time, at(3));
    }

    #[test]
    fn test_history_limit_is_clamped() {
        let mut s = store();
        s.apply(Action::SetHistoryLimit(0));
        assert_eq!(s.state.history_limit, 3);
        s.apply(Action::SetHistoryLimit(100));
        assert_eq!(s.state.history_limit, 30);
    }

    #[test]
    fn test_clear_history() {
        let mut s = store();
        s.apply(Action::SetInputCode("a".to_string()));
        s.apply(Action::Convert { at: at(0) });
        s.apply(Action::ClearHistory);
        assert!(s.state.history.is_empty());
        assert_eq!(s.state.notice, Some(Notice::info("History cleared.")));
    }

    #[test]
    fn test_upload_into_empty_input_loads() {
        let mut s = store();
        s.apply(Action::FileLoaded { name: "main.py".to_string(), bytes: b"print(1)\n".to_vec() });
        assert_eq!(s.state.input_code, "print(1)\n");
        assert_eq!(s.state.notice, Some(Notice::success("Loaded 'main.py' into input code.")));
    }

    #[test]
    fn test_upload_into_existing_input_appends() {
        let mut s = store();
        s.apply(Action::SetInputCode("x = 1".to_string()));
        s.apply(Action::FileLoaded { name: "more.txt".to_string(), bytes: b"y = 2".to_vec() });
        assert_eq!(s.state.input_code, "x = 1\n\ny = 2");
        assert_eq!(s.state.notice.unwrap().level, NoticeLevel::Info);
    }

    #[test]
    fn test_upload_rejects_unlisted_extension() {
        let mut s = store();
        s.apply(Action::SetInputCode("keep".to_string()));
        s.apply(Action::FileLoaded { name: "photo.png".to_string(), bytes: vec![0x89, b'P'] });
        assert_eq!(s.state.input_code, "keep");
        let notice = s.state.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.starts_with("Failed to read uploaded file: "));
    }

    #[test]
    fn test_upload_failure_leaves_input_untouched() {
        let mut s = store();
        s.apply(Action::SetInputCode("keep".to_string()));
        s.apply(Action::UploadFailed("NotReadableError".to_string()));
        assert_eq!(s.state.input_code, "keep");
        assert_eq!(
            s.state.notice,
            Some(Notice::error("Failed to read uploaded file: NotReadableError"))
        );
    }

    #[test]
    fn test_ask_assistant_appends_pair_and_opens_panel() {
        let mut s = store();
        s.apply(Action::AskAssistant("What does this do?".to_string()));
        assert!(s.state.ai_open);
        assert_eq!(
            s.state.ai_messages,
            vec![
                ChatMessage::user("What does this do?"),
                ChatMessage::assistant(CANNED_REPLY),
            ]
        );
        assert_eq!(s.state.ai_messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut s = store();
        s.apply(Action::AskAssistant("  ".to_string()));
        assert!(s.state.ai_messages.is_empty());
        assert!(!s.state.ai_open);
    }

    #[test]
    fn test_swapped_converter_is_used() {
        struct Upper;
        impl Converter for Upper {
            fn convert(&self, _: &str, _: &str, _: &str, code: &str) -> String {
                code.to_uppercase()
            }
        }
        let mut s = Store::with_services(AppConfig::default(), Rc::new(Upper), Rc::new(CannedAssistant));
        s.apply(Action::SetInputCode("abc".to_string()));
        s.apply(Action::Convert { at: at(0) });
        assert_eq!(s.state.output_code, "ABC");
    }

    #[test]
    fn test_toast_expires_only_for_matching_id() {
        let mut s = store();
        s.apply(Action::ShowToast(Toast { id: 1, text: "Copied to clipboard.".to_string() }));
        s.apply(Action::ShowToast(Toast { id: 2, text: "Copied to clipboard.".to_string() }));
        s.apply(Action::ExpireToast(1));
        assert_eq!(s.state.toast.as_ref().map(|t| t.id), Some(2));
        s.apply(Action::ExpireToast(2));
        assert!(s.state.toast.is_none());
    }

    #[test]
    fn test_reduce_leaves_previous_state_intact() {
        let first = Rc::new(store());
        let second = first.clone().reduce(Action::SetTheme(Theme::Dark));
        assert_eq!(first.state.theme, Theme::Light);
        assert_eq!(second.state.theme, Theme::Dark);
    }

    #[test]
    fn test_state_serializes() {
        let mut s = store();
        s.apply(Action::AskAssistant("hi".to_string()));
        let json = serde_json::to_string(&s.state).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s.state);
    }
}
