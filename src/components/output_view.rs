use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OutputViewProps {
    pub output: String,
    /// Language hint for highlighters, e.g. `python`.
    pub highlight: &'static str,
    pub on_copy: Callback<()>,
    pub on_download: Callback<()>,
}

#[function_component(OutputView)]
pub fn output_view(props: &OutputViewProps) -> Html {
    if props.output.is_empty() {
        return html! {
            <div class="cc-card">
                <h4 style="margin:0 0 0.75em 0;">{ "Output Code" }</h4>
                <div style="padding:1em; background:#e7f3ff; border:1px solid #b3d9ff; border-radius:4px; color:#0056b3;">
                    { "Your converted code will appear here after conversion." }
                </div>
            </div>
        };
    }

    let on_copy_click = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(()))
    };
    let on_download_click = {
        let on_download = props.on_download.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(()))
    };

    html! {
        <div class="cc-card" style="display:flex; flex-direction:column; gap:0.75em;">
            <h4 style="margin:0;">{ "Output Code" }</h4>
            <pre style="margin:0; padding:1em; overflow-x:auto; background:rgba(2, 6, 23, 0.04); font-family:'Courier New', monospace; font-size:0.9em;">
                <code class={format!("language-{}", props.highlight)}>{ &props.output }</code>
            </pre>
            <div style="display:flex; gap:0.5em;">
                <button class="cc-secondary" onclick={on_copy_click}>{ "📋 Copy Code" }</button>
                <button class="cc-secondary" onclick={on_download_click}>{ "⬇️ Download Code" }</button>
            </div>
        </div>
    }
}
