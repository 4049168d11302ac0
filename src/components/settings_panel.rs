use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::Action;
use crate::types::Theme;

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub theme: Theme,
    pub history_limit: usize,
    pub limit_min: usize,
    pub limit_max: usize,
    pub on_action: Callback<Action>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let on_theme_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlSelectElement>();
            if let Some(theme) = Theme::from_name(&target.value()) {
                on_action.emit(Action::SetTheme(theme));
            }
        })
    };

    let on_limit_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            if let Ok(limit) = target.value().parse::<usize>() {
                on_action.emit(Action::SetHistoryLimit(limit));
            }
        })
    };

    html! {
        <div class="cc-card" style="width:280px; min-width:240px; margin:1em; display:flex; flex-direction:column; gap:1em; align-self:flex-start;">
            <h3 style="margin:0;">{ "Settings" }</h3>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style="font-weight:bold;">{ "Theme" }</label>
                <select onchange={on_theme_change} style="width:100%;">
                    { for Theme::ALL.iter().map(|theme| html! {
                        <option value={theme.name()} selected={*theme == props.theme}>{ theme.name() }</option>
                    })}
                </select>
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style="font-weight:bold;">{ format!("History size: {}", props.history_limit) }</label>
                <input
                    type="range"
                    min={props.limit_min.to_string()}
                    max={props.limit_max.to_string()}
                    value={props.history_limit.to_string()}
                    oninput={on_limit_input}
                    style="width:100%; box-shadow:none;"
                />
            </div>

            <hr style="width:100%; opacity:0.3;" />
            <h3 style="margin:0;">{ "About" }</h3>
            <div style="font-size:0.9em;">{ "Built with Yew" }</div>
            <div style="font-size:0.8em; opacity:0.7;">
                { "This app simulates code conversion; connect to a backend to enable real translations." }
            </div>
        </div>
    }
}
