use crate::utils::locale_date;
use clap::ValueEnum;
use planes_core::{History, HistoryOrder};
use yew::prelude::*;

/// Row order as picked from the URL options.
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum TableOrder {
    #[default]
    Recorded,
    Shots,
}

impl From<TableOrder> for HistoryOrder {
    fn from(order: TableOrder) -> Self {
        match order {
            TableOrder::Recorded => HistoryOrder::Recorded,
            TableOrder::Shots => HistoryOrder::MostShots,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ScoreTableProps {
    pub history: History,
    #[prop_or_default]
    pub order: HistoryOrder,
}

#[function_component(ScoreTable)]
pub(crate) fn score_table(props: &ScoreTableProps) -> Html {
    let rows = props.history.ordered(props.order);

    html! {
        <table class="scores">
            <thead>
                <tr><th colspan="4">{"Score table"}</th></tr>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Result"}</th>
                    <th>{"Shots"}</th>
                    <th>{"Duration"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    for rows.into_iter().map(|record| html! {
                        <tr>
                            <td>{locale_date(record.started_at)}</td>
                            <td>{record.result.label()}</td>
                            <td>{record.shots}</td>
                            <td>{record.duration.clone()}</td>
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
