use super::app::StoreContext;
use crate::state::View;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{FileReader, HtmlInputElement};
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub on_navigate: Callback<View>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let stores = use_context::<StoreContext>().unwrap_or_else(StoreContext::browser);
    let logo = {
        let brand = stores.brand.clone();
        use_state(move || brand.get())
    };

    // Read the chosen PNG as a data URL, then persist and show it
    let on_upload = {
        let brand = stores.brand.clone();
        let logo = logo.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Ok(reader) = FileReader::new() else {
                log::warn!("FileReader unavailable; brand upload skipped");
                return;
            };
            let onloadend = {
                let reader = reader.clone();
                let brand = brand.clone();
                let logo = logo.clone();
                Closure::once_into_js(move || {
                    let Some(data_url) = reader.result().ok().and_then(|v| v.as_string()) else {
                        log::warn!("uploaded brand image could not be read");
                        return;
                    };
                    if let Err(e) = brand.set(&data_url) {
                        log::error!("brand image not persisted: {e}");
                    }
                    logo.set(Some(data_url));
                })
            };
            reader.set_onloadend(Some(onloadend.unchecked_ref()));
            if let Err(e) = reader.read_as_data_url(&file) {
                log::error!("reading brand image failed: {e:?}");
            }
        })
    };
    let on_clear = {
        let brand = stores.brand.clone();
        let logo = logo.clone();
        Callback::from(move |_| {
            if let Err(e) = brand.clear() {
                log::error!("brand image not cleared: {e}");
            }
            logo.set(None);
        })
    };
    let nav = |view: View| {
        let cb = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(view))
    };

    let brand_area = match &*logo {
        Some(src) => html! {
            <div style="display:flex; flex-direction:column; align-items:center; gap:8px;">
                <img src={src.clone()} alt="Brand Logo" style="height:112px; width:auto; object-fit:contain;" />
                <button onclick={on_clear} style="background:#f87171; color:#fff; border:none; border-radius:999px; padding:4px 16px; font-size:12px; cursor:pointer;">
                    {"Change Brand 🔄"}
                </button>
            </div>
        },
        None => html! {
            <label style="cursor:pointer; background:#fff; border:4px dashed #fb923c; border-radius:24px; padding:32px 48px; display:flex; flex-direction:column; align-items:center; gap:12px;">
                <span style="font-size:36px;">{"🖼️"}</span>
                <span style="color:#ea580c; font-weight:900; font-size:20px;">{"UPLOAD YOUR BRAND"}</span>
                <span style="color:#fb923c; font-size:14px;">{"PNG Files look best!"}</span>
                <input type="file" accept="image/png" style="display:none;" onchange={on_upload} />
            </label>
        },
    };

    let pill = "padding:12px 24px; border-radius:16px; font-weight:900; font-size:18px; cursor:pointer; border:none;";
    html! {
        <header style="background:rgba(255,255,255,0.8); border-bottom:8px solid #ffedd5; padding:24px; position:sticky; top:0; z-index:50;">
            <div style="max-width:80rem; margin:0 auto; display:flex; flex-direction:column; align-items:center; gap:24px;">
                { brand_area }
                <nav style="display:flex; align-items:center; justify-content:center; gap:40px; width:100%;">
                    <button onclick={nav(View::Facts)} style={format!("{pill} background:#dcfce7; color:#15803d; border-bottom:4px solid #86efac;")}>
                        {"Learn 🌿"}
                    </button>
                    <button onclick={nav(View::Home)} style="background:none; border:none; color:#ea580c; font-weight:900; font-size:24px; cursor:pointer;">
                        {"OrangUtan "}<span style="color:#22c55e; text-decoration:underline;">{"Quest"}</span>
                    </button>
                    <button onclick={nav(View::Leaderboard)} style={format!("{pill} background:#fef9c3; color:#a16207; border-bottom:4px solid #fde047;")}>
                        {"Trophy 🏆"}
                    </button>
                </nav>
            </div>
        </header>
    }
}
