use yew::prelude::*;

use crate::state::{Action, Toast};
use crate::types::{Notice, NoticeLevel};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub toast: Option<Toast>,
    pub on_action: Callback<Action>,
}

/// (background, border, text) colors per level.
fn colors(level: NoticeLevel) -> (&'static str, &'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("#d4edda", "#c3e6cb", "#155724"),
        NoticeLevel::Info => ("#e7f3ff", "#b3d9ff", "#0056b3"),
        NoticeLevel::Warning => ("#fff3cd", "#ffeeba", "#856404"),
        NoticeLevel::Error => ("#f8d7da", "#f5c6cb", "#721c24"),
    }
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let on_dismiss = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::DismissNotice))
    };

    let banner = match &props.notice {
        Some(notice) => {
            let (bg, border, fg) = colors(notice.level);
            let mark = match notice.level {
                NoticeLevel::Success => "✓",
                NoticeLevel::Info => "ℹ",
                NoticeLevel::Warning => "⚠",
                NoticeLevel::Error => "✗",
            };
            html! {
                <div style={format!(
                    "padding:0.75em 1em; background:{}; border:1px solid {}; border-radius:4px; color:{}; display:flex; justify-content:space-between; align-items:center;",
                    bg, border, fg
                )}>
                    <span><strong>{ mark }</strong>{ " " }{ &notice.text }</span>
                    <button onclick={on_dismiss} style="background:none; border:none; cursor:pointer; font-size:1.1em; color:inherit;">{ "×" }</button>
                </div>
            }
        }
        None => html! {},
    };

    let toast = match &props.toast {
        Some(toast) => {
            let (bg, border, fg) = colors(NoticeLevel::Success);
            html! {
                <div style={format!(
                    "position:fixed; bottom:1.5em; right:1.5em; z-index:1000; padding:0.75em 1em; background:{}; border:1px solid {}; border-radius:8px; color:{}; box-shadow:0 10px 25px rgba(0,0,0,0.2);",
                    bg, border, fg
                )}>
                    { &toast.text }
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <>
            { banner }
            { toast }
        </>
    }
}
