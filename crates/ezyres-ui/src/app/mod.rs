//! Application root: context, router and boot.
//!
//! # Design
//! - Resolve configuration and install logging exactly once, before the
//!   first render.
//! - Provide the API client through context; pages never build their own.

pub(crate) mod api;
pub(crate) mod hooks;
pub(crate) mod preferences;
pub(crate) mod routes;

use crate::app::api::ApiCtx;
use crate::app::preferences::{page_origin, set_document_title};
use crate::app::routes::Route;
use crate::components::shell::Layout;
use crate::core::config::DashboardConfig;
use crate::features::dashboard::view::DashboardPage;
use crate::features::reports::view::ReportsPage;
use ezyres_telemetry::{LoggingConfig, init_logging};
use yew::prelude::*;
use yew_router::prelude::*;

const DOCUMENT_TITLE: &str = "EzyRes Analytics";

#[derive(Properties, PartialEq)]
struct EzyresAppProps {
    base_url: AttrValue,
}

#[function_component(EzyresApp)]
fn ezyres_app(props: &EzyresAppProps) -> Html {
    let base_url = props.base_url.clone();
    let api_ctx = use_memo(move |_| ApiCtx::new(base_url.to_string()), ());
    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <h1 class="text-3xl font-bold text-gray-900">{"Page not found"}</h1>
            <p class="mt-2 text-sm text-gray-500">{"The page you requested does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("mt-6", "text-indigo-600", "hover:underline")}>
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}

/// Boot the dashboard into `#root`, or `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = DashboardConfig::from_build(&page_origin());
    let logging = LoggingConfig {
        level: &config.log_level,
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::warn!(format!("logging unavailable: {err}"));
    }
    tracing::info!(base_url = %config.base_url, "starting ezyres dashboard");
    set_document_title(DOCUMENT_TITLE);

    let props = EzyresAppProps {
        base_url: config.base_url.into(),
    };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<EzyresApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<EzyresApp>::with_props(props).render();
    }
}
