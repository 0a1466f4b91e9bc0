use crate::table::{ScoreTable, TableOrder};
use crate::utils::*;
use bitflags::bitflags;
use clap::Args;
use game::ToNdIndex;
use ndarray::Array2;
use planes_core as game;
use yew::prelude::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct CellMarks: u8 {
        const SHOT      = 1;
        const DESTROYED = 1 << 1;
    }
}

impl CellMarks {
    fn of(state: &game::GameState, shot_counts: &Array2<u16>, coords: game::Coord2) -> Self {
        let mut marks = Self::empty();
        marks.set(Self::SHOT, shot_counts[coords.to_nd_index()] > 0);
        marks.set(Self::DESTROYED, state.is_won() && state.target() == coords);
        marks
    }

    fn classes(self) -> Classes {
        classes!(
            "tile",
            self.contains(Self::SHOT).then_some("shot"),
            self.contains(Self::DESTROYED).then_some("destroyed"),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Announcement {
    Nothing,
    Missed,
    Won,
}

impl Announcement {
    fn of(state: &game::GameState) -> Self {
        if state.is_won() {
            Self::Won
        } else if state.shows_miss() {
            Self::Missed
        } else {
            Self::Nothing
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Selected(game::Coord2),
    Replay,
}

impl From<Msg> for game::Action {
    fn from(msg: Msg) -> Self {
        match msg {
            Msg::Selected(coords) => game::Action::selected(coords),
            Msg::Replay => game::Action::Replay,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    marks: CellMarks,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        marks,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        callback.emit((row, col));
    });

    html! {
        <div class={marks.classes()} {onclick}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Board side length
    #[arg(short, long, default_value_t = game::GameConfig::DEFAULT_GRID_SIZE)]
    pub grid_size: game::Coord,

    /// Score table row order
    #[arg(short, long, value_enum, default_value_t)]
    pub order: TableOrder,
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            seed: None,
            grid_size: game::GameConfig::DEFAULT_GRID_SIZE,
            order: TableOrder::default(),
        }
    }
}

type BoardSession = game::Session<LocalHistoryStore, game::RandomTargets>;

#[derive(Debug)]
pub(crate) struct GameView {
    session: BoardSession,
    order: game::HistoryOrder,
}

impl GameView {
    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let state = self.session.state();
        let size = state.grid_size();
        let shot_counts = state.shot_counts();
        let callback = ctx.link().callback(Msg::Selected);

        html! {
            <div id="gameboard">
                {
                    for (0..size).map(|row| html! {
                        <div key={row.to_string()}>
                            {
                                for (0..size).map(|col| {
                                    let marks = CellMarks::of(state, &shot_counts, (row, col));
                                    let callback = callback.clone();
                                    html! {
                                        <CellView key={format!("{}-{}", row, col)} {row} {col} {marks} {callback}/>
                                    }
                                })
                            }
                        </div>
                    })
                }
            </div>
        }
    }

    fn view_announcement(&self, ctx: &Context<Self>) -> Html {
        let cb_replay = ctx.link().callback(|_: MouseEvent| Msg::Replay);

        html! {
            <div class="announcement__box">
                {
                    match Announcement::of(self.session.state()) {
                        Announcement::Won => html! {
                            <div>
                                <h2>{"You win!"}</h2>
                                <button onclick={cb_replay}>{"Play again!"}</button>
                            </div>
                        },
                        Announcement::Missed => html! { <h2>{"Missed! Hit another."}</h2> },
                        Announcement::Nothing => html! {},
                    }
                }
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let config = game::GameConfig::new(props.grid_size);
        let session = game::Session::open(config, LocalHistoryStore, game::RandomTargets::new(seed));

        Self {
            session,
            order: props.order.into(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.session.dispatch(msg.into(), utc_now()).has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                {self.view_board(ctx)}
                {self.view_announcement(ctx)}
                <ScoreTable history={self.session.state().history().clone()} order={self.order}/>
            </>
        }
    }
}
