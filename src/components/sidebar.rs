//! Sidebar Component
//!
//! Role-dependent navigation menu with the session action at the bottom.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_session;
use crate::guard::{menu_for, MenuAction};

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h3>"Rewards"</h3>
            </div>

            <ul class="menu-list">
                <For
                    each=move || menu_for(session.role.get())
                    key=|entry| entry.label
                    children=move |entry| {
                        let navigate = navigate.clone();
                        let is_active = move || match entry.action {
                            MenuAction::Navigate(path) => pathname.with(|current| current == path),
                            MenuAction::Logout => false,
                        };

                        view! {
                            <li
                                class=move || if is_active() { "menu-item active" } else { "menu-item" }
                                on:click=move |_| match entry.action {
                                    MenuAction::Navigate(path) => navigate(path, Default::default()),
                                    MenuAction::Logout => {
                                        session.logout();
                                        navigate("/login", Default::default());
                                    }
                                }
                            >
                                <span class="menu-icon">{entry.icon.glyph()}</span>
                                <span class="menu-label">{entry.label}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}
