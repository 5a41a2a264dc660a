//! Reports page view.

use crate::features::negotiation::state::TableVariant;
use crate::features::negotiation::view::NegotiationMarginTable;
use crate::features::sellers::view::RepeatSellersChart;
use crate::features::trends::view::TrendsCardGroup;
use yew::prelude::*;

#[function_component(ReportsPage)]
pub(crate) fn reports_page() -> Html {
    html! {
        <div class="space-y-6">
            <header>
                <h1 class="text-2xl font-bold text-gray-900">{"Reports"}</h1>
                <p class="text-sm text-gray-500">{"Seller activity, margins and submission trends"}</p>
            </header>
            <div class="grid grid-cols-1 gap-6 xl:grid-cols-2">
                <RepeatSellersChart />
                <NegotiationMarginTable variant={TableVariant::Standard} />
            </div>
            <TrendsCardGroup />
        </div>
    }
}
