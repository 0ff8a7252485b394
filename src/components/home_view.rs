use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub on_play: Callback<()>,
    pub on_learn: Callback<()>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let play_btn = {
        let cb = props.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let learn_btn = {
        let cb = props.on_learn.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="text-align:center; padding:40px 16px; display:flex; flex-direction:column; align-items:center;">
            <div style="position:relative; margin-bottom:48px;">
                <div style="position:absolute; top:-40px; left:-40px; font-size:60px;">{"🌴"}</div>
                <div style="position:absolute; bottom:-40px; right:-40px; font-size:60px;">{"🍌"}</div>
                <img
                    src="https://picsum.photos/seed/baby-orangutan/800/600"
                    alt="Cute Baby Orangutan"
                    style="width:100%; max-width:42rem; height:auto; border-radius:64px; border:16px solid #fff;"
                />
            </div>
            <h2 style="font-size:72px; font-weight:900; color:#ea580c; margin-bottom:32px;">{"Hi Friend! 🦧"}</h2>
            <p style="font-size:28px; font-weight:900; color:#4b5563; margin-bottom:48px; max-width:36rem;">
                {"Want to play in the trees with us?"}
            </p>
            <div style="display:flex; flex-direction:column; gap:32px; width:100%; max-width:28rem;">
                <button onclick={play_btn} style="background:#f97316; color:#fff; font-size:36px; font-weight:900; padding:32px 40px; border-radius:48px; border:none; box-shadow:0 12px 0 rgb(194,65,12); cursor:pointer;">
                    {"PLAY NOW! 🎮"}
                </button>
                <button onclick={learn_btn} style="background:#22c55e; color:#fff; font-size:24px; font-weight:900; padding:24px 40px; border-radius:40px; border:none; box-shadow:0 10px 0 rgb(21,128,61); cursor:pointer;">
                    {"MEET THE MONKEYS 🐒"}
                </button>
            </div>
        </div>
    }
}
