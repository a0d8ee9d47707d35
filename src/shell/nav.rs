//! Sidebar navigation
//!
//! Menu definitions and the active-route rule used to highlight entries.

use serde::Serialize;

/// Static menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Top section of the sidebar
pub const MAIN_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/", icon: "layout-dashboard" },
    NavItem { label: "Clients", path: "/clients", icon: "users" },
    NavItem { label: "Briefs", path: "/briefs", icon: "file-text" },
    NavItem { label: "Opportunities", path: "/opportunities", icon: "briefcase" },
    NavItem { label: "Projects", path: "/projects", icon: "folder" },
    NavItem { label: "Tasks", path: "/tasks", icon: "check-square" },
    NavItem { label: "Meetings", path: "/meetings", icon: "calendar" },
];

/// Bottom section of the sidebar, above sign-out
pub const BOTTOM_MENU: &[NavItem] = &[
    NavItem { label: "Settings", path: "/settings", icon: "settings" },
    NavItem { label: "Help", path: "/help", icon: "help-circle" },
];

/// Strip query/fragment and trailing slashes; the root stays `/`
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(|c| c == '?' || c == '#').next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether a link to `item_path` is active while `current_path` is shown.
///
/// Active on an exact match or on a descendant route (`/clients/42` keeps
/// `Clients` active). The root only matches itself.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    let item = normalize_path(item_path);
    let current = normalize_path(current_path);

    if item == current {
        return true;
    }
    if item == "/" {
        return false;
    }
    current
        .strip_prefix(item)
        .map(|rest| rest.starts_with('/'))
        .unwrap_or(false)
}

/// Menu entry as rendered for one route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    pub icon: String,
    pub active: bool,
}

impl NavEntry {
    pub fn from_item(item: &NavItem, current_path: &str) -> Self {
        Self {
            label: item.label.to_string(),
            path: item.path.to_string(),
            icon: item.icon.to_string(),
            active: is_active(item.path, current_path),
        }
    }
}

/// Build the entries of a menu section for the current route
pub fn menu_entries(items: &[NavItem], current_path: &str) -> Vec<NavEntry> {
    items
        .iter()
        .map(|item| NavEntry::from_item(item, current_path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/clients/"), "/clients");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/tasks?filter=open"), "/tasks");
        assert_eq!(normalize_path("/help#faq"), "/help");
    }

    #[test]
    fn test_exact_and_nested_match() {
        assert!(is_active("/clients", "/clients"));
        assert!(is_active("/clients", "/clients/"));
        assert!(is_active("/clients", "/clients/42"));
        assert!(!is_active("/clients", "/clientsarchive"));
        assert!(!is_active("/clients", "/"));
    }

    #[test]
    fn test_root_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/clients"));
        assert!(!is_active("/", "/settings"));
    }

    #[test]
    fn test_single_active_entry() {
        let entries = menu_entries(MAIN_MENU, "/projects/7/tasks");
        let active: Vec<&str> = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(active, vec!["Projects"]);
    }

    #[test]
    fn test_menu_contents() {
        let labels: Vec<&str> = MAIN_MENU.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Clients", "Briefs", "Opportunities", "Projects", "Tasks", "Meetings"]
        );
        assert_eq!(BOTTOM_MENU.len(), 2);
    }
}
