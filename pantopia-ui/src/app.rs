//! App Root Component
//!
//! Main application component with routing and the sidebar shell.

use leptos::*;
use leptos_router::*;

use crate::components::Sidebar;
use crate::pages::{Clients, Dashboard, NotFound, Placeholder, Settings, SignedOut};
use crate::state::{SessionController, Theme, ThemeController};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Shell dependencies, handed to the components that use them
    let theme = ThemeController::new(Theme::default());
    let session = SessionController::new();

    let shell_class = move || {
        if theme.get().is_dark() {
            "theme-dark min-h-screen flex"
        } else {
            "theme-light min-h-screen flex"
        }
    };

    view! {
        <Router>
            <div class=shell_class>
                <Sidebar theme=theme session=session />

                // Main content area
                <main class="flex-1 px-8 py-8">
                    <Routes>
                        <Route path="/" view=move || view! { <Dashboard theme=theme /> } />
                        <Route path="/clients" view=Clients />
                        <Route path="/briefs" view=|| view! { <Placeholder title="Briefs" /> } />
                        <Route path="/opportunities" view=|| view! { <Placeholder title="Opportunities" /> } />
                        <Route path="/projects" view=|| view! { <Placeholder title="Projects" /> } />
                        <Route path="/tasks" view=|| view! { <Placeholder title="Tasks" /> } />
                        <Route path="/meetings" view=|| view! { <Placeholder title="Meetings" /> } />
                        <Route path="/settings" view=move || view! { <Settings theme=theme /> } />
                        <Route path="/help" view=|| view! { <Placeholder title="Help" /> } />
                        <Route path="/login" view=SignedOut />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
