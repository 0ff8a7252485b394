use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer style="padding:48px 0; text-align:center;">
            <div style="display:flex; justify-content:center; gap:16px; font-size:36px; opacity:0.4; margin-bottom:16px;">
                <span>{"🌴"}</span><span>{"🐒"}</span><span>{"🥥"}</span><span>{"🌴"}</span>
            </div>
            <p style="color:rgba(124,45,18,0.4); font-weight:900; font-size:20px;">{"OrangUtan Brand Kids - Playing Together"}</p>
        </footer>
    }
}
