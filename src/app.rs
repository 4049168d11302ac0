use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser;
use crate::components::{ChatPanel, ConverterForm, HistoryView, NoticeBanner, OutputView, SettingsPanel};
use crate::config::AppConfig;
use crate::output::OutputFormat;
use crate::state::{Action, Store, Toast};
use crate::theme::Palette;
use crate::types::Notice;
use crate::upload;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store = {
        let config = props.config.clone();
        use_reducer(move || Store::new(config))
    };
    let state = &store.state;

    let dispatch = {
        let store = store.clone();
        Callback::from(move |action: Action| store.dispatch(action))
    };

    let on_convert = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            store.dispatch(Action::Convert { at: chrono::Local::now().naive_local() });
        })
    };

    let on_file = {
        let store = store.clone();
        Callback::from(move |file: web_sys::File| {
            let name = file.name();
            if let Err(e) = upload::check_extension(&name) {
                store.dispatch(Action::UploadFailed(e.to_string()));
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                match browser::read_file_bytes(file).await {
                    Ok(bytes) => store.dispatch(Action::FileLoaded { name, bytes }),
                    Err(e) => store.dispatch(Action::UploadFailed(e.to_string())),
                }
            });
        })
    };

    let on_copy = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let text = store.state.output_code.clone();
            let toast_ms = store.config.toast_ms;
            let store = store.clone();
            spawn_local(async move {
                match browser::copy_to_clipboard(text).await {
                    Ok(()) => {
                        let id = browser::now_millis();
                        store.dispatch(Action::ShowToast(Toast {
                            id,
                            text: "Copied to clipboard.".to_string(),
                        }));
                        let expire = store.clone();
                        if let Err(e) = browser::set_timeout(toast_ms, move || {
                            expire.dispatch(Action::ExpireToast(id))
                        }) {
                            log::warn!("toast timer not scheduled: {}", e);
                        }
                    }
                    Err(e) => {
                        log::error!("clipboard write failed: {}", e);
                        store.dispatch(Action::Notify(Notice::error(format!(
                            "Copy failed: {}",
                            e
                        ))));
                    }
                }
            });
        })
    };

    let on_download = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let format = OutputFormat::for_language(store.state.to_lang.name());
            let file_name = format.file_name();
            match browser::download_text(&store.state.output_code, &file_name, format.mime) {
                Ok(()) => log::info!("downloaded {} ({})", file_name, format.mime),
                Err(e) => {
                    log::error!("download failed: {}", e);
                    store.dispatch(Action::Notify(Notice::error(format!(
                        "Download failed: {}",
                        e
                    ))));
                }
            }
        })
    };

    let on_ask_open = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::OpenAssistant))
    };

    let palette = Palette::for_theme(state.theme);
    let format = OutputFormat::for_language(state.to_lang.name());

    html! {
        <div class="cc-app" style="display:flex; flex-direction:row; min-height:100vh;">
            <style>{ palette.stylesheet() }</style>
            <SettingsPanel
                theme={state.theme}
                history_limit={state.history_limit}
                limit_min={store.config.history_limit_min}
                limit_max={store.config.history_limit_max}
                on_action={dispatch.clone()}
            />
            <div style="flex:1; display:flex; flex-direction:column; padding:1.5em 2em; gap:1em; overflow-y:auto;">
                <div style="display:flex; align-items:center; justify-content:space-between;">
                    <div>
                        <h2 class="cc-title" style="margin:0;">{ "💻 Code Converter" }</h2>
                        <div style="opacity:0.7; font-size:0.9em;">{ "Convert code between languages with AI (placeholder)" }</div>
                    </div>
                    <button class="cc-button" onclick={on_ask_open}>{ "🧠 Ask AI" }</button>
                </div>

                <NoticeBanner notice={state.notice.clone()} toast={state.toast.clone()} on_action={dispatch.clone()} />

                <ConverterForm
                    from_lang={state.from_lang}
                    to_lang={state.to_lang}
                    prompt={state.prompt.clone()}
                    input_code={state.input_code.clone()}
                    on_action={dispatch.clone()}
                    on_file={on_file}
                    on_convert={on_convert}
                />

                <OutputView
                    output={state.output_code.clone()}
                    highlight={format.highlight}
                    on_copy={on_copy}
                    on_download={on_download}
                />

                <ChatPanel
                    open={state.ai_open}
                    messages={state.ai_messages.clone()}
                    on_action={dispatch.clone()}
                />

                <HistoryView entries={state.history.clone()} on_action={dispatch} />
            </div>
        </div>
    }
}
