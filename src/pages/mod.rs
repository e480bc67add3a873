//! Routed Pages
//!
//! One module per client-side route.

mod home;
mod login;
mod signup;
mod profile;
mod add_task;
mod admin_dashboard;
mod completed_tasks;
mod task_submissions;
mod submit_tasks;
mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use profile::ProfilePage;
pub use add_task::AddTaskPage;
pub use admin_dashboard::AdminDashboardPage;
pub use completed_tasks::CompletedTasksPage;
pub use task_submissions::TaskSubmissionsPage;
pub use submit_tasks::SubmitTasksPage;
pub use not_found::NotFoundPage;

/// Delay between a form's confirmation and the follow-up navigation
pub(crate) const REDIRECT_DELAY_MS: u32 = 2_000;
