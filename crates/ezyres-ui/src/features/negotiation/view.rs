//! Negotiation margin table view.

use crate::app::hooks::use_mount_fetch;
use crate::components::atoms::Card;
use crate::components::atoms::empty_state::render_state;
use crate::components::pagination::Pagination;
use crate::components::table::Table;
use crate::core::fetch::{LoadState, settled};
use crate::core::source::report_failure;
use crate::features::negotiation::api::load_rows;
use crate::features::negotiation::state::{HEADERS, Paginator, RowCells, TableVariant};
use ezyres_api_models::NegotiationRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NegotiationMarginTableProps {
    #[prop_or_default]
    pub(crate) variant: TableVariant,
}

#[function_component(NegotiationMarginTable)]
pub(crate) fn negotiation_margin_table(props: &NegotiationMarginTableProps) -> Html {
    let state = use_mount_fetch(LoadState::Idle.begin(), |client| async move {
        let outcome = load_rows(&client).await;
        if let Err(err) = &outcome {
            report_failure("negotiation_margin_table", err);
        }
        settled(outcome, Vec::is_empty)
    });
    let variant = props.variant;
    let total = state.ready().map_or(0, Vec::len);
    let pager = use_state(move || Paginator::new(total, variant.page_size()));
    {
        let pager = pager.clone();
        use_effect_with_deps(
            move |total| {
                pager.set(Paginator::new(*total, variant.page_size()));
                || ()
            },
            total,
        );
    }
    let on_change = {
        let pager = pager.clone();
        Callback::from(move |next: Paginator| pager.set(next))
    };

    html! {
        <Card title="Negotiation Margin Table">
            {render_state(&state, "No negotiation data", |rows: &Vec<NegotiationRow>| html! {
                <>
                    {render_page(rows, *pager, variant)}
                    <Pagination pager={*pager} {on_change} />
                </>
            })}
        </Card>
    }
}

fn render_page(rows: &[NegotiationRow], pager: Paginator, variant: TableVariant) -> Html {
    let cell = variant.cell_class();
    let body: Vec<Html> = pager
        .slice(rows)
        .iter()
        .map(|row| {
            let cells = RowCells::from(row);
            let margin_tone = if cells.negative { "text-red-600" } else { "text-green-600" };
            html! {
                <tr key={cells.id.clone()} class="hover:bg-gray-50">
                    <td class={classes!(cell, "text-gray-900")}>{cells.address}</td>
                    <td class={classes!(cell, "text-right", "text-gray-700")}>{cells.price}</td>
                    <td class={classes!(cell, "text-right", "text-gray-700")}>{cells.dispo_price}</td>
                    <td class={classes!(cell, "text-right", "font-medium", margin_tone)}>{cells.margin}</td>
                </tr>
            }
        })
        .collect();
    html! {
        <Table
            headers={HEADERS.iter().map(|head| AttrValue::from(*head)).collect::<Vec<_>>()}
            rows={body}
            cell_class={classes!(cell)}
        />
    }
}
