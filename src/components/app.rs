use super::{
    facts_view::FactsView, footer::Footer, game_over_view::GameOverView, header::Header,
    home_view::HomeView, leaderboard_view::LeaderboardView, quiz_view::QuizView,
};
use crate::state::{GameAction, GameState, View, save_score};
use crate::store::{BrandStore, BrowserStorage, ScoreStore};
use crate::util::{entry_id, today_iso};
use yew::prelude::*;

// Provide the stores as context so screens never reach localStorage themselves
#[derive(Clone, PartialEq)]
pub struct StoreContext {
    pub scores: ScoreStore<BrowserStorage>,
    pub brand: BrandStore<BrowserStorage>,
}

impl StoreContext {
    pub fn browser() -> Self {
        let backend = BrowserStorage::local();
        Self {
            scores: ScoreStore::new(backend.clone()),
            brand: BrandStore::new(backend),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::default);
    let stores = use_memo((), |_| StoreContext::browser());

    let navigate = {
        let game = game.clone();
        Callback::from(move |view: View| game.dispatch(GameAction::Navigate(view)))
    };
    let play = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Play))
    };
    let learn = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Learn))
    };
    let quiz_complete = {
        let game = game.clone();
        Callback::from(move |(round, score): (u64, u32)| {
            game.dispatch(GameAction::QuizCompleted { round, score })
        })
    };
    let set_name = {
        let game = game.clone();
        Callback::from(move |name: String| game.dispatch(GameAction::SetName(name)))
    };
    let save = {
        let game = game.clone();
        let stores = stores.clone();
        Callback::from(move |_| {
            if save_score(&game, &stores.scores, entry_id(), today_iso()) {
                game.dispatch(GameAction::ScoreSaved);
            }
        })
    };

    let content = match game.view {
        View::Home => html! { <HomeView on_play={play} on_learn={learn} /> },
        View::Quiz => html! {
            <QuizView key={game.quiz_round} round={game.quiz_round} on_complete={quiz_complete} />
        },
        View::Facts => html! { <FactsView key={game.facts_round} round={game.facts_round} /> },
        View::Leaderboard => html! { <LeaderboardView /> },
        View::GameOver => html! { <GameOverView
            score={game.final_score}
            name={game.player_name.clone()}
            on_name={set_name}
            on_save={save}
        /> },
    };

    html! {
        <ContextProvider<StoreContext> context={(*stores).clone()}>
            <div id="root" style="min-height:100vh; display:flex; flex-direction:column; background:#fffbeb; font-family:'Fredoka', 'Nunito', sans-serif;">
                <Header on_navigate={navigate} />
                <main style="flex-grow:1; width:100%; max-width:64rem; margin:0 auto; padding:48px 16px; box-sizing:border-box;">
                    { content }
                </main>
                <Footer />
            </div>
        </ContextProvider<StoreContext>>
    }
}
