use crate::generator::ContentGenerator;
use crate::state::{QuizAction, QuizSession, RoundGuard};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuizViewProps {
    pub round: u64,
    /// Emits `(round, score)` once the last question is passed.
    pub on_complete: Callback<(u64, u32)>,
}

#[function_component(QuizView)]
pub fn quiz_view(props: &QuizViewProps) -> Html {
    let round = props.round;
    let session = use_reducer(move || QuizSession::new(round));
    let guard = use_memo((), |_| RoundGuard::default());

    // Fresh questions for every round; results for an unmounted round are dropped
    {
        let session = session.clone();
        let guard = guard.clone();
        use_effect_with(round, move |&round| {
            guard.activate(round);
            let live = (*guard).clone();
            spawn_local(async move {
                let generator = ContentGenerator::from_build_env();
                let delivered = live
                    .deliver(round, generator.fetch_quiz(), |questions| {
                        session.dispatch(QuizAction::Loaded { round, questions })
                    })
                    .await;
                if !delivered {
                    log::debug!("dropping questions for abandoned quiz round {round}");
                }
            });
            move || guard.retire()
        });
    }

    {
        let on_complete = props.on_complete.clone();
        let (round, score) = (session.round, session.score);
        use_effect_with(session.completed, move |&done| {
            if done {
                on_complete.emit((round, score));
            }
            || ()
        });
    }

    if session.loading {
        return html! {
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:50vh;">
                <div style="width:96px; height:96px; background:#fb923c; border-radius:50%; display:flex; align-items:center; justify-content:center; font-size:48px; margin-bottom:24px;">{"🦧"}</div>
                <p style="font-size:30px; font-weight:900; color:#ea580c; text-align:center;">
                    {"Wait for the monkeys..."}<br/>
                    <span style="font-size:20px;">{"Building your game!"}</span>
                </p>
            </div>
        };
    }
    // Completed: the app moves on to the game-over screen
    let Some(question) = session.current() else {
        return html! {};
    };

    let answered = session.selected.is_some();
    let options = question
        .options
        .iter()
        .map(|opt| {
            let onclick = {
                let session = session.clone();
                let opt = opt.clone();
                Callback::from(move |_| session.dispatch(QuizAction::Answer(opt.clone())))
            };
            let style = option_style(
                question.is_correct(opt),
                session.selected.as_deref() == Some(opt.as_str()),
                answered,
            );
            html! {
                <button key={opt.clone()} style={style} disabled={answered} onclick={onclick}>{ opt.clone() }</button>
            }
        })
        .collect::<Html>();

    let explanation = match session.answered_correctly() {
        None => html! {},
        Some(right) => {
            let next = {
                let session = session.clone();
                Callback::from(move |_| session.dispatch(QuizAction::Next))
            };
            html! {
                <div style="margin-top:48px; background:#fefce8; padding:32px; border-radius:32px; border:4px dashed #fef08a; text-align:center;">
                    <div style="font-size:60px; margin-bottom:16px;">{ if right { "✨🌟✨" } else { "🧡" } }</div>
                    <p style="font-size:24px; font-weight:900; color:#854d0e; margin-bottom:32px;">{ question.explanation.clone() }</p>
                    <button onclick={next} style="background:#f97316; color:#fff; font-size:30px; font-weight:900; padding:24px 48px; border-radius:999px; border:none; border-bottom:8px solid #c2410c; cursor:pointer;">
                        { if session.is_last() { "All Done! 🍌" } else { "Next One! 👉" } }
                    </button>
                </div>
            }
        }
    };

    html! {
        <div style="max-width:48rem; margin:0 auto; padding:32px 16px;">
            <div style="margin-bottom:40px; display:flex; flex-direction:column; align-items:center; gap:16px;">
                <div style="display:flex; justify-content:space-between; width:100%; padding:0 8px; font-size:36px;">
                    <span>{"🏝️"}</span><span>{"🍌"}</span>
                </div>
                <div style="height:32px; width:100%; background:#fff; border-radius:999px; padding:8px; border:4px solid #dcfce7; box-sizing:border-box; overflow:hidden;">
                    <div style={format!("height:100%; background:#4ade80; border-radius:999px; transition:width 0.7s ease-out; width:{:.0}%;", session.progress_percent())}></div>
                </div>
            </div>
            <div style="background:#fff; border-radius:48px; padding:48px 32px; border-bottom:12px solid #ffedd5; position:relative;">
                <div style="position:absolute; top:-20px; left:50%; transform:translateX(-50%); background:#facc15; color:#713f12; font-weight:900; padding:8px 32px; border-radius:999px; border:4px solid #fff;">
                    { format!("QUESTION {}", session.index + 1) }
                </div>
                <h2 style="font-size:40px; font-weight:900; color:#1f2937; margin:16px 0 40px; text-align:center;">{ question.question.clone() }</h2>
                <div style="display:grid; grid-template-columns:1fr; gap:24px;">{ options }</div>
                { explanation }
            </div>
        </div>
    }
}

fn option_style(is_correct: bool, is_selected: bool, answered: bool) -> &'static str {
    match (answered, is_correct, is_selected) {
        (false, _, _) => "padding:32px; border-radius:24px; font-size:32px; font-weight:900; border:none; border-bottom:8px solid #fed7aa; background:#fff; color:#374151; cursor:pointer;",
        (true, true, _) => "padding:32px; border-radius:24px; font-size:32px; font-weight:900; border:none; border-bottom:8px solid #16a34a; background:#4ade80; color:#fff; transform:scale(1.05);",
        (true, false, true) => "padding:32px; border-radius:24px; font-size:32px; font-weight:900; border:none; border-bottom:8px solid #dc2626; background:#f87171; color:#fff; opacity:0.5;",
        (true, false, false) => "padding:32px; border-radius:24px; font-size:32px; font-weight:900; border:none; border-bottom:8px solid #e5e7eb; background:#f3f4f6; color:#d1d5db;",
    }
}
