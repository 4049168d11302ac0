use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::Action;
use crate::types::Language;
use crate::upload;

#[derive(Properties, PartialEq)]
pub struct ConverterFormProps {
    pub from_lang: Language,
    pub to_lang: Language,
    pub prompt: String,
    pub input_code: String,
    pub on_action: Callback<Action>,
    pub on_file: Callback<web_sys::File>,
    pub on_convert: Callback<()>,
}

fn language_select(id: &str, label: &str, selected: Language, onchange: Callback<Event>) -> Html {
    html! {
        <div style="flex:1; display:flex; flex-direction:column; gap:0.5em;">
            <label for={id.to_string()} style="font-weight:bold;">{ label }</label>
            <select id={id.to_string()} {onchange} style="width:100%;">
                { for Language::ALL.iter().map(|lang| html! {
                    <option value={lang.name()} selected={*lang == selected}>{ lang.name() }</option>
                })}
            </select>
        </div>
    }
}

#[function_component(ConverterForm)]
pub fn converter_form(props: &ConverterFormProps) -> Html {
    let on_from_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlSelectElement>();
            if let Some(lang) = Language::from_name(&target.value()) {
                on_action.emit(Action::SetFromLang(lang));
            }
        })
    };

    let on_to_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlSelectElement>();
            if let Some(lang) = Language::from_name(&target.value()) {
                on_action.emit(Action::SetToLang(lang));
            }
        })
    };

    let on_prompt_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            on_action.emit(Action::SetPrompt(target.value()));
        })
    };

    let on_code_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlTextAreaElement>();
            on_action.emit(Action::SetInputCode(target.value()));
        })
    };

    let on_file_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            if let Some(file) = target.files().and_then(|list| list.get(0)) {
                on_file.emit(file);
            }
            // Allow picking the same file again.
            target.set_value("");
        })
    };

    let on_convert_click = {
        let on_convert = props.on_convert.clone();
        Callback::from(move |_: MouseEvent| on_convert.emit(()))
    };

    html! {
        <div class="cc-card" style="display:flex; flex-direction:column; gap:1em;">
            <div style="display:flex; gap:1em;">
                { language_select("from-lang", "From Language", props.from_lang, on_from_change) }
                { language_select("to-lang", "To Language", props.to_lang, on_to_change) }
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label for="prompt" style="font-weight:bold;">{ "Prompt" }</label>
                <input
                    id="prompt"
                    type="text"
                    title="Optional guidance for conversion"
                    placeholder="Describe what you want the code to do..."
                    value={props.prompt.clone()}
                    oninput={on_prompt_input}
                    style="width:100%;"
                />
            </div>

            <div class="cc-dropzone" style="display:flex; flex-direction:column; gap:0.5em;">
                <label style="font-weight:bold;">{ "Upload source code file" }</label>
                <input type="file" accept={upload::accept_attr()} onchange={on_file_change} style="width:100%; box-shadow:none;" />
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label for="input-code" style="font-weight:bold;">{ "Input Code" }</label>
                <textarea
                    id="input-code"
                    rows=12
                    placeholder="Write or paste your code here..."
                    value={props.input_code.clone()}
                    oninput={on_code_input}
                    style="width:100%; min-height:260px; resize:vertical; font-family:'Courier New', monospace; font-size:0.9em;"
                />
            </div>

            <div style="display:flex; justify-content:center;">
                <button class="cc-button" onclick={on_convert_click} style="width:33%;">{ "Convert" }</button>
            </div>
        </div>
    }
}
