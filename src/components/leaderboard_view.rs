use super::app::StoreContext;
use crate::model::ScoreEntry;
use crate::util::today_iso;
use yew::prelude::*;

#[function_component(LeaderboardView)]
pub fn leaderboard_view() -> Html {
    let stores = use_context::<StoreContext>().unwrap_or_else(StoreContext::browser);
    let entries = use_memo((), move |_| stores.scores.list());
    let today = use_memo((), |_| today_iso());

    let header_cell = "font-size:14px; font-weight:900; color:#9ca3af; text-transform:uppercase; letter-spacing:0.1em;";
    let rows = if entries.is_empty() {
        html! {
            <div style="text-align:center; padding:40px 0; color:#9ca3af; font-style:italic;">
                {"No explorers have reached the top yet. Will you be the first?"}
            </div>
        }
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| score_row(i, entry, &today))
            .collect::<Html>()
    };

    html! {
        <div style="max-width:56rem; margin:0 auto; background:#fff; border-radius:24px; overflow:hidden; border:4px solid #dcfce7;">
            <div style="background:#16a34a; padding:32px; text-align:center;">
                <h2 style="font-size:36px; font-weight:900; color:#fff; margin:0 0 8px 0;">{"🏆 Jungle Hall of Fame"}</h2>
                <p style="color:#dcfce7; font-weight:500; margin:0;">{"Are you the smartest Orangutan in the forest?"}</p>
            </div>
            <div style="padding:24px;">
                <div style="display:grid; grid-template-columns:1fr 5fr 3fr 3fr; gap:16px; border-bottom:1px solid #e5e7eb; padding-bottom:16px; margin-bottom:16px;">
                    <div style={format!("{header_cell} text-align:center;")}>{"#"}</div>
                    <div style={header_cell}>{"Adventurer"}</div>
                    <div style={format!("{header_cell} text-align:right;")}>{"Score"}</div>
                    <div style={format!("{header_cell} text-align:right;")}>{"Level"}</div>
                </div>
                <div style="display:flex; flex-direction:column; gap:12px;">{ rows }</div>
            </div>
        </div>
    }
}

fn score_row(index: usize, entry: &ScoreEntry, today: &str) -> Html {
    let background = if index == 0 {
        "background:#fefce8; border:2px solid #fef08a;"
    } else {
        "background:#f9fafb; border:2px solid transparent;"
    };
    let is_new = entry.date == today;
    html! {
        <div key={entry.id.clone()} style={format!("display:grid; grid-template-columns:1fr 5fr 3fr 3fr; gap:16px; align-items:center; padding:16px; border-radius:16px; {background}")}>
            <div style="text-align:center; font-weight:900; font-size:20px;">{ rank_badge(index) }</div>
            <div style="font-weight:900; color:#1f2937; font-size:18px; display:flex; align-items:center; gap:8px;">
                { entry.name.clone() }
                if is_new {
                    <span style="background:#22c55e; color:#fff; font-size:10px; padding:4px 8px; border-radius:999px;">{"NEW!"}</span>
                }
            </div>
            <div style="text-align:right; font-weight:900; color:#ea580c; font-size:24px;">{ entry.score }</div>
            <div style="text-align:right; font-weight:700; color:#15803d; font-style:italic;">{ entry.level.clone() }</div>
        </div>
    }
}

/// Medal for the podium, plain 1-based rank below it.
fn rank_badge(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => (n + 1).to_string(),
    }
}
