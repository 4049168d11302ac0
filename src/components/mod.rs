mod chat_panel;
mod converter_form;
mod history_view;
mod notice_banner;
mod output_view;
mod settings_panel;

pub use chat_panel::ChatPanel;
pub use converter_form::ConverterForm;
pub use history_view::HistoryView;
pub use notice_banner::NoticeBanner;
pub use output_view::OutputView;
pub use settings_panel::SettingsPanel;
