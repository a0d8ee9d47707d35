//! Sidebar Component
//!
//! Brand header, the main and bottom menus with route highlighting, the
//! sign-out button and the dark-mode switch.

use leptos::*;
use leptos_router::*;

use crate::state::{SessionController, ThemeController};

/// Product name shown at the top of the sidebar
pub const BRAND: &str = "PANTOPIA";

/// A sidebar menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    const fn new(label: &'static str, path: &'static str, icon: &'static str) -> Self {
        Self { label, path, icon }
    }

    /// The root route is only active on itself
    pub fn exact(&self) -> bool {
        self.path == "/"
    }
}

pub const MAIN_MENU: [MenuItem; 7] = [
    MenuItem::new("Dashboard", "/", "▦"),
    MenuItem::new("Clients", "/clients", "◉"),
    MenuItem::new("Briefs", "/briefs", "✎"),
    MenuItem::new("Opportunities", "/opportunities", "◆"),
    MenuItem::new("Projects", "/projects", "▤"),
    MenuItem::new("Tasks", "/tasks", "✓"),
    MenuItem::new("Meetings", "/meetings", "◷"),
];

pub const BOTTOM_MENU: [MenuItem; 2] = [
    MenuItem::new("Settings", "/settings", "⚙"),
    MenuItem::new("Help", "/help", "?"),
];

/// Navigation sidebar
#[component]
pub fn Sidebar(theme: ThemeController, session: SessionController) -> impl IntoView {
    let navigate = use_navigate();
    let pending = session.pending();
    let current = theme.theme();

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        session.sign_out(move |path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <aside class="sidebar w-64 min-h-screen flex flex-col border-r">
            // Brand
            <div class="h-16 flex items-center px-6">
                <span class="text-xl font-bold tracking-widest">{BRAND}</span>
            </div>

            // Main menu
            <nav class="flex-1 px-3 space-y-1">
                {MAIN_MENU.iter().map(|item| view! { <SidebarLink item=*item /> }).collect_view()}
            </nav>

            // Bottom menu and actions
            <div class="px-3 py-4 space-y-1 border-t">
                {BOTTOM_MENU.iter().map(|item| view! { <SidebarLink item=*item /> }).collect_view()}

                <button
                    on:click=on_sign_out
                    disabled=move || pending.get()
                    class="sidebar-item w-full flex items-center space-x-3 px-3 py-2 rounded-lg transition-colors"
                >
                    <span class="w-5 text-center">"⎋"</span>
                    <span>{move || if pending.get() { "Signing out..." } else { "Sign out" }}</span>
                </button>

                <label class="flex items-center justify-between px-3 py-2 cursor-pointer">
                    <span class="flex items-center space-x-3">
                        <span class="w-5 text-center">{move || current.get().icon()}</span>
                        <span>{move || current.get().label()}</span>
                    </span>
                    <input
                        type="checkbox"
                        class="theme-switch"
                        prop:checked=move || current.get().is_dark()
                        on:change=move |_| theme.toggle()
                    />
                </label>
            </div>
        </aside>
    }
}

/// Menu link, highlighted while its route is active
#[component]
fn SidebarLink(item: MenuItem) -> impl IntoView {
    view! {
        <A
            href=item.path
            exact=item.exact()
            class="sidebar-item flex items-center space-x-3 px-3 py-2 rounded-lg transition-colors"
            active_class="sidebar-item-active"
        >
            <span class="w-5 text-center">{item.icon}</span>
            <span>{item.label}</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_paths_unique() {
        let mut paths: Vec<_> = MAIN_MENU.iter().chain(BOTTOM_MENU.iter()).map(|i| i.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), MAIN_MENU.len() + BOTTOM_MENU.len());
    }

    #[test]
    fn test_only_root_is_exact() {
        let exact: Vec<_> = MAIN_MENU.iter().filter(|i| i.exact()).map(|i| i.label).collect();
        assert_eq!(exact, vec!["Dashboard"]);
        assert!(BOTTOM_MENU.iter().all(|i| !i.exact()));
    }
}
