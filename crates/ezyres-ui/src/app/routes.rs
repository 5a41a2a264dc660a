//! Routing definitions for the dashboard.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Root,
    #[at("/dashboard")]
    Dashboard,
    #[at("/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}
