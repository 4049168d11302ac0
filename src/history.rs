use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const PREVIEW_CHARS: usize = 120;
const ELLIPSIS: char = '…';
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: NaiveDateTime,
    pub from: String,
    pub to: String,
    pub prompt: String,
    pub code_preview: String,
}

impl HistoryEntry {
    pub fn new(time: NaiveDateTime, from: &str, to: &str, prompt: &str, code: &str) -> Self {
        Self {
            time,
            from: from.to_string(),
            to: to.to_string(),
            prompt: prompt.trim().to_string(),
            code_preview: preview(code),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// First `PREVIEW_CHARS` characters of `code`, with an ellipsis if anything was cut.
pub fn preview(code: &str) -> String {
    match code.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => {
            let mut s = code[..cut].to_string();
            s.push(ELLIPSIS);
            s
        }
        None => code.to_string(),
    }
}

/// Inserts `entry` as the newest item and drops whatever exceeds `limit`.
pub fn record(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: usize) {
    history.insert(0, entry);
    history.truncate(limit);
}
