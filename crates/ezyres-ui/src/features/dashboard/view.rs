//! Dashboard page view.

use crate::features::deals::view::DealsBarChart;
use crate::features::donuts::view::AnalyticsDonutGroup;
use crate::features::health::view::HealthBadge;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    html! {
        <div class="space-y-6">
            <header class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Dashboard"}</h1>
                    <p class="text-sm text-gray-500">{"Deal flow and portfolio mix at a glance"}</p>
                </div>
                <HealthBadge />
            </header>
            <DealsBarChart />
            <AnalyticsDonutGroup />
        </div>
    }
}
