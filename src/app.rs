//! Rewards Frontend App
//!
//! Router plus the sidebar/header shell around the routed content.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{Guarded, Header, Sidebar};
use crate::config::AppConfig;
use crate::context::SessionContext;
use crate::guard::RouteAccess;
use crate::pages::{
    AddTaskPage, AdminDashboardPage, CompletedTasksPage, HomePage, LoginPage, NotFoundPage, ProfilePage,
    SignupPage, SubmitTasksPage, TaskSubmissionsPage,
};
use crate::session::BrowserTokenStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    let session = SessionContext::restore(Arc::new(BrowserTokenStore));
    provide_context(session);
    provide_context(ApiClient::new(&config, session));

    view! {
        <Router>
            <SessionRedirect />
            <div class="app-layout">
                <Sidebar />
                <div class="main-column">
                    <Header />
                    <main class="main-content">
                        <Routes fallback=|| view! { <NotFoundPage /> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/login") view=LoginPage />
                            <Route path=path!("/signup") view=SignupPage />
                            <Route
                                path=path!("/profile")
                                view=|| view! { <Guarded access=RouteAccess::Authenticated><ProfilePage /></Guarded> }
                            />
                            <Route
                                path=path!("/submissions")
                                view=|| view! { <Guarded access=RouteAccess::Authenticated><CompletedTasksPage /></Guarded> }
                            />
                            <Route
                                path=path!("/submit")
                                view=|| view! { <Guarded access=RouteAccess::Authenticated><SubmitTasksPage /></Guarded> }
                            />
                            <Route
                                path=path!("/add-task")
                                view=|| view! { <Guarded access=RouteAccess::Admin><AddTaskPage /></Guarded> }
                            />
                            <Route
                                path=path!("/dashboard")
                                view=|| view! { <Guarded access=RouteAccess::Admin><AdminDashboardPage /></Guarded> }
                            />
                            <Route
                                path=path!("/tasks/:task_id")
                                view=|| view! { <Guarded access=RouteAccess::Admin><TaskSubmissionsPage /></Guarded> }
                            />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// Sends the user to `/login` once the server has rejected the session
#[component]
fn SessionRedirect() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.expired.get() {
            log::info!("Redirecting to login after expired session");
            navigate("/login", Default::default());
        }
    });
}

/// Shown instead of the app when configuration is unusable
#[component]
pub fn ConfigErrorView(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>{message}</p>
        </div>
    }
}
