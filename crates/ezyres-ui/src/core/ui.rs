//! Sidebar shell state and navigation entries.

/// Sidebar presentation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    /// Icon rail only.
    #[default]
    Collapsed,
    /// Icons plus labels, section titles, logo and user block.
    Expanded,
}

/// Pointer crossing the sidebar boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEdge {
    /// Pointer entered the sidebar.
    Enter,
    /// Pointer left the sidebar.
    Leave,
}

impl SidebarState {
    /// Next state after a pointer crossing; hover drives the state, clicks do not.
    #[must_use]
    pub const fn on_pointer(self, edge: PointerEdge) -> Self {
        match edge {
            PointerEdge::Enter => Self::Expanded,
            PointerEdge::Leave => Self::Collapsed,
        }
    }

    /// Whether labels should be rendered.
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Width utility class for the rail.
    #[must_use]
    pub const fn width_class(self) -> &'static str {
        match self {
            Self::Collapsed => "w-16",
            Self::Expanded => "w-60",
        }
    }
}

/// Icon shown next to a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    /// Column layout glyph.
    Dashboard,
    /// Gear glyph.
    Reports,
}

/// One link in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown when expanded.
    pub name: &'static str,
    /// Route path.
    pub href: &'static str,
    /// Leading icon.
    pub icon: NavIcon,
}

/// Titled group of links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    /// Heading shown when expanded.
    pub title: &'static str,
    /// Links in display order.
    pub items: &'static [NavItem],
}

/// Sidebar contents.
pub const NAV_SECTIONS: &[NavSection] = &[NavSection {
    title: "Main",
    items: &[
        NavItem {
            name: "Dashboard",
            href: "/dashboard",
            icon: NavIcon::Dashboard,
        },
        NavItem {
            name: "Reports",
            href: "/reports",
            icon: NavIcon::Reports,
        },
    ],
}];

/// Signed-in user block shown in the sidebar footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarUser {
    /// Avatar initials.
    pub initials: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Role caption.
    pub role: &'static str,
}

/// Static footer identity; the dashboard has no authentication.
pub const SIDEBAR_USER: SidebarUser = SidebarUser {
    initials: "JD",
    name: "John Doe",
    role: "Administrator",
};

/// Whether `item` is the entry for the current path.
#[must_use]
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    current_path.trim_end_matches('/') == item.href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_expands_and_leave_collapses() {
        let state = SidebarState::default();
        assert_eq!(state, SidebarState::Collapsed);
        let expanded = state.on_pointer(PointerEdge::Enter);
        assert!(expanded.is_expanded());
        assert_eq!(expanded.on_pointer(PointerEdge::Leave), SidebarState::Collapsed);
    }

    #[test]
    fn repeated_edges_are_idempotent() {
        let expanded = SidebarState::Expanded.on_pointer(PointerEdge::Enter);
        assert_eq!(expanded, SidebarState::Expanded);
        let collapsed = SidebarState::Collapsed.on_pointer(PointerEdge::Leave);
        assert_eq!(collapsed, SidebarState::Collapsed);
    }

    #[test]
    fn width_tracks_state() {
        assert_eq!(SidebarState::Collapsed.width_class(), "w-16");
        assert_eq!(SidebarState::Expanded.width_class(), "w-60");
    }

    #[test]
    fn active_item_matches_current_path() {
        let dashboard = &NAV_SECTIONS[0].items[0];
        assert!(is_active(dashboard, "/dashboard"));
        assert!(is_active(dashboard, "/dashboard/"));
        assert!(!is_active(dashboard, "/reports"));
    }
}
