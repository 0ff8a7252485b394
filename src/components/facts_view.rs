use crate::generator::ContentGenerator;
use crate::model::FunFact;
use crate::state::RoundGuard;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FactsViewProps {
    pub round: u64,
}

#[function_component(FactsView)]
pub fn facts_view(props: &FactsViewProps) -> Html {
    let facts = use_state(|| None::<Vec<FunFact>>);
    let guard = use_memo((), |_| RoundGuard::default());

    {
        let facts = facts.clone();
        let guard = guard.clone();
        use_effect_with(props.round, move |&round| {
            guard.activate(round);
            let live = (*guard).clone();
            spawn_local(async move {
                let generator = ContentGenerator::from_build_env();
                let delivered = live
                    .deliver(round, generator.fetch_facts(), |cards| facts.set(Some(cards)))
                    .await;
                if !delivered {
                    log::debug!("dropping facts for abandoned round {round}");
                }
            });
            move || guard.retire()
        });
    }

    let Some(cards) = &*facts else {
        return html! {
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:40vh;">
                <div style="height:48px; width:48px; background:#4ade80; border-radius:50%; margin-bottom:16px;"></div>
                <p style="font-size:20px; font-weight:700; color:#16a34a;">{"Gathering jungle secrets..."}</p>
            </div>
        };
    };

    let body = if cards.is_empty() {
        html! {
            <p style="text-align:center; color:#9ca3af; font-style:italic; padding:40px 0;">
                {"The monkeys are napping. Come back soon for more secrets! 💤"}
            </p>
        }
    } else {
        html! {
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:32px;">
                { for cards.iter().map(fact_card) }
            </div>
        }
    };

    html! {
        <div style="max-width:72rem; margin:0 auto; padding:16px;">
            <h2 style="font-size:36px; font-weight:900; text-align:center; color:#15803d; margin-bottom:40px;">{"Amazing Orangutan Facts!"}</h2>
            { body }
        </div>
    }
}

fn fact_card(fact: &FunFact) -> Html {
    html! {
        <div style="background:#fff; padding:32px; border-radius:24px; box-shadow:0 10px 25px rgba(0,0,0,0.1); border-top:8px solid #fb923c;">
            <div style="font-size:48px; margin-bottom:16px;">{ fact.emoji.clone() }</div>
            <h3 style="font-size:20px; font-weight:900; color:#1f2937; margin-bottom:12px;">{ fact.title.clone() }</h3>
            <p style="color:#4b5563; font-weight:500; line-height:1.6;">{ fact.fact.clone() }</p>
        </div>
    }
}
