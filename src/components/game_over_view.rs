use web_sys::HtmlInputElement;
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverViewProps {
    pub score: u32,
    pub name: String,
    pub on_name: Callback<String>,
    pub on_save: Callback<()>,
}

#[function_component]
pub fn GameOverView(props: &GameOverViewProps) -> Html {
    let oninput = {
        let cb = props.on_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    // Enter submits too; a blank name is rejected by the save itself
    let onsubmit = {
        let cb = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let can_save = !props.name.trim().is_empty();
    let button_style = format!(
        "width:100%; background:#22c55e; color:#fff; font-size:36px; font-weight:900; padding:32px 0; border-radius:48px; border:none; box-shadow:0 12px 0 rgb(21,128,61); cursor:pointer; {}",
        if can_save { "" } else { "opacity:0.5; cursor:not-allowed;" }
    );

    html! {
        <div style="max-width:36rem; margin:0 auto; background:#fff; padding:48px; border-radius:64px; border:12px solid #fff7ed; text-align:center;">
            <div style="font-size:96px; margin-bottom:24px;">{"🍌🎉"}</div>
            <h2 style="font-size:36px; font-weight:900; color:#ea580c; margin-bottom:16px;">{"YOU DID IT!"}</h2>
            <div style="font-size:128px; font-weight:900; color:#22c55e; margin-bottom:32px;">{ props.score }</div>
            <form onsubmit={onsubmit}>
                <div style="background:#fff7ed; padding:32px; border-radius:24px; margin-bottom:32px;">
                    <label style="display:block; color:#fb923c; font-size:18px; font-weight:900; text-transform:uppercase; margin-bottom:16px;">{"Your Hero Name:"}</label>
                    <input
                        type="text"
                        value={props.name.clone()}
                        oninput={oninput}
                        placeholder="Ex: Jungle King"
                        style="width:100%; box-sizing:border-box; padding:24px; border:4px solid #fed7aa; border-radius:24px; text-align:center; font-size:30px; font-weight:900; color:#c2410c;"
                    />
                </div>
                <button type="submit" disabled={!can_save} style={button_style}>{"Save Sticker! 💎"}</button>
            </form>
        </div>
    }
}
