use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::Action;
use crate::types::{ChatMessage, Role};

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub on_action: Callback<Action>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let input_ref = use_node_ref();

    let on_toggle = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::ToggleAssistant))
    };

    let on_submit = {
        let on_action = props.on_action.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let question = input.value();
                if !question.trim().is_empty() {
                    on_action.emit(Action::AskAssistant(question));
                    input.set_value("");
                }
            }
        })
    };

    html! {
        <div class="cc-card">
            <div onclick={on_toggle} style="cursor:pointer; font-weight:bold; display:flex; justify-content:space-between;">
                <span>{ "🧠 Ask AI" }</span>
                <span>{ if props.open { "▾" } else { "▸" } }</span>
            </div>
            { if props.open {
                html! {
                    <div style="display:flex; flex-direction:column; gap:0.75em; margin-top:0.75em;">
                        <div style="font-size:0.85em; opacity:0.7;">{ "Get help or explanations about your code. (Placeholder)" }</div>
                        { for props.messages.iter().map(|msg| {
                            let (who, align, tint) = match msg.role {
                                Role::User => ("You", "flex-end", "rgba(37, 99, 235, 0.12)"),
                                Role::Assistant => ("Assistant", "flex-start", "rgba(2, 6, 23, 0.05)"),
                            };
                            html! {
                                <div style={format!("align-self:{}; max-width:80%; padding:0.5em 0.75em; border-radius:10px; background:{};", align, tint)}>
                                    <div style="font-size:0.75em; opacity:0.7;">{ who }</div>
                                    <div style="white-space:pre-wrap;">{ &msg.content }</div>
                                </div>
                            }
                        })}
                        <form onsubmit={on_submit} style="display:flex; gap:0.5em;">
                            <input ref={input_ref} type="text" placeholder="Ask a question about the code…" style="flex:1;" />
                            <button class="cc-button" type="submit">{ "Send" }</button>
                        </form>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
