use yew::prelude::*;

use crate::history::HistoryEntry;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct HistoryViewProps {
    pub entries: Vec<HistoryEntry>,
    pub on_action: Callback<Action>,
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "—" } else { s }
}

#[function_component(HistoryView)]
pub fn history_view(props: &HistoryViewProps) -> Html {
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let on_clear = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::ClearHistory))
    };

    let body = if !*expanded {
        html! {}
    } else if props.entries.is_empty() {
        html! { <div style="margin-top:0.75em; opacity:0.7;">{ "No conversions yet." }</div> }
    } else {
        html! {
            <div style="display:flex; flex-direction:column; gap:0.75em; margin-top:0.75em;">
                { for props.entries.iter().map(|entry| html! {
                    <div style="border:1px solid rgba(2, 6, 23, 0.12); border-radius:6px; padding:0.75em;">
                        <div style="font-weight:bold; margin-bottom:0.5em; font-size:0.95em;">
                            { format!("{} → {}", entry.from, entry.to) }
                            <span style="font-weight:normal; opacity:0.7;">{ format!(" · {}", entry.formatted_time()) }</span>
                        </div>
                        <div style="font-size:0.85em;">{ format!("Prompt: {}", or_dash(&entry.prompt)) }</div>
                        <div style="font-family:'Courier New', monospace; font-size:0.8em; opacity:0.8; white-space:pre-line;">
                            { format!("Snippet: {}", or_dash(&entry.code_preview)) }
                        </div>
                    </div>
                })}
                <div>
                    <button class="cc-secondary" onclick={on_clear}>{ "Clear History" }</button>
                </div>
            </div>
        }
    };

    html! {
        <div class="cc-card">
            <div onclick={on_toggle} style="cursor:pointer; font-weight:bold; display:flex; justify-content:space-between;">
                <span>{ format!("History ({})", props.entries.len()) }</span>
                <span>{ if *expanded { "▾" } else { "▸" } }</span>
            </div>
            { body }
        </div>
    }
}
