//! Sidebar navigation and page frame.
//!
//! # Design
//! - Hover drives the sidebar: pointer enter expands, leave collapses.
//! - The state lives in the layout and resets on reload.

use crate::app::routes::Route;
use crate::components::atoms::icons::{IconLogo, nav_icon};
use crate::core::ui::{NAV_SECTIONS, NavItem, PointerEdge, SIDEBAR_USER, SidebarState, is_active};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub(crate) state: SidebarState,
    pub(crate) on_pointer: Callback<PointerEdge>,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let location = use_location();
    let current = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();
    let expanded = props.state.is_expanded();
    let onmouseenter = {
        let on_pointer = props.on_pointer.clone();
        Callback::from(move |_: MouseEvent| on_pointer.emit(PointerEdge::Enter))
    };
    let onmouseleave = {
        let on_pointer = props.on_pointer.clone();
        Callback::from(move |_: MouseEvent| on_pointer.emit(PointerEdge::Leave))
    };

    html! {
        <aside
            class={classes!("fixed", "inset-y-0", "left-0", "z-20", "flex", "flex-col", "bg-gray-900", "text-gray-300", "transition-all", "duration-200", props.state.width_class())}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="flex items-center gap-3 h-16 px-5 border-b border-gray-800">
                <IconLogo class="text-indigo-400" />
                {if expanded {
                    html! { <span class="text-white font-semibold whitespace-nowrap">{"EzyRes"}</span> }
                } else {
                    html! {}
                }}
            </div>
            <nav class="flex-1 py-4 space-y-6 overflow-y-auto">
                {for NAV_SECTIONS.iter().map(|section| html! {
                    <div>
                        {if expanded {
                            html! { <p class="px-5 mb-2 text-xs uppercase tracking-wider text-gray-500">{section.title}</p> }
                        } else {
                            html! {}
                        }}
                        {for section.items.iter().map(|item| nav_item(item, &current, expanded))}
                    </div>
                })}
            </nav>
            <div class="flex items-center gap-3 px-4 py-4 border-t border-gray-800">
                <span class="flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-indigo-500 text-xs font-semibold text-white">
                    {SIDEBAR_USER.initials}
                </span>
                {if expanded {
                    html! {
                        <div class="min-w-0">
                            <p class="text-sm text-white truncate">{SIDEBAR_USER.name}</p>
                            <p class="text-xs text-gray-500 truncate">{SIDEBAR_USER.role}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </aside>
    }
}

fn nav_item(item: &NavItem, current: &str, expanded: bool) -> Html {
    let classes = classes!(
        "flex",
        "items-center",
        "gap-3",
        "mx-2",
        "px-3",
        "py-2",
        "rounded-md",
        "text-sm",
        if is_active(item, current) {
            "bg-gray-800 text-white"
        } else {
            "hover:bg-gray-800 hover:text-white"
        }
    );
    let route = Route::recognize(item.href).unwrap_or(Route::Dashboard);
    html! {
        <Link<Route> to={route} classes={classes}>
            {nav_icon(item.icon)}
            {if expanded {
                html! { <span class="whitespace-nowrap">{item.name}</span> }
            } else {
                html! {}
            }}
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LayoutProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Layout)]
pub(crate) fn layout(props: &LayoutProps) -> Html {
    let sidebar = use_state(SidebarState::default);
    let on_pointer = {
        let sidebar = sidebar.clone();
        Callback::from(move |edge: PointerEdge| sidebar.set(sidebar.on_pointer(edge)))
    };
    html! {
        <div class="min-h-screen bg-gray-50">
            <Navbar state={*sidebar} {on_pointer} />
            <main class="pl-16 transition-all">
                <div class="max-w-7xl mx-auto px-6 py-8">
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}
