//! Navigation & Access Guard
//!
//! Role derivation, sidebar menu composition and per-route access decisions.
//! Everything here is plain data so the shell can decide before a view mounts.

use crate::session::validate_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    User,
    Admin,
}

impl Role {
    /// Role for a (possibly absent) token; undecodable or expired tokens are anonymous
    pub fn from_token(token: Option<&str>, now_unix: i64) -> Self {
        match token.map(|t| validate_token(t, now_unix)) {
            Some(Ok(claims)) if claims.is_admin() => Role::Admin,
            Some(Ok(_)) => Role::User,
            _ => Role::Anonymous,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self != Role::Anonymous
    }
}

// ========================
// Menus
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Home,
    User,
    Tasks,
    Plus,
    SignIn,
    SignOut,
}

impl MenuIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            MenuIcon::Home => "🏠",
            MenuIcon::User => "👤",
            MenuIcon::Tasks => "📋",
            MenuIcon::Plus => "➕",
            MenuIcon::SignIn => "🔑",
            MenuIcon::SignOut => "🚪",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(&'static str),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub action: MenuAction,
}

const fn link(label: &'static str, icon: MenuIcon, path: &'static str) -> MenuEntry {
    MenuEntry { label, icon, action: MenuAction::Navigate(path) }
}

/// Sidebar entries for a role.
///
/// Admins get catalog and review links, everyone else the profile and task
/// links; the last entry is Logout for a session and Login without one.
pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    let mut entries = vec![link("Home", MenuIcon::Home, "/")];
    match role {
        Role::Admin => {
            entries.push(link("Add Apps", MenuIcon::Plus, "/add-task"));
            entries.push(link("Submissions", MenuIcon::Tasks, "/dashboard"));
        }
        Role::User | Role::Anonymous => {
            entries.push(link("Profile", MenuIcon::User, "/profile"));
            entries.push(link("Tasks", MenuIcon::Tasks, "/submit"));
        }
    }
    if role.is_authenticated() {
        entries.push(MenuEntry { label: "Logout", icon: MenuIcon::SignOut, action: MenuAction::Logout });
    } else {
        entries.push(link("Login", MenuIcon::SignIn, "/login"));
    }
    entries
}

// ========================
// Route Access
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectToLogin,
    /// Signed in, but not as an admin
    Forbidden,
}

impl RouteAccess {
    pub fn check(self, role: Role) -> AccessDecision {
        match (self, role) {
            (RouteAccess::Public, _) => AccessDecision::Allow,
            (_, Role::Anonymous) => AccessDecision::RedirectToLogin,
            (RouteAccess::Authenticated, _) => AccessDecision::Allow,
            (RouteAccess::Admin, Role::Admin) => AccessDecision::Allow,
            (RouteAccess::Admin, Role::User) => AccessDecision::Forbidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::make_token;

    fn labels(role: Role) -> Vec<&'static str> {
        menu_for(role).iter().map(|entry| entry.label).collect()
    }

    #[test]
    fn test_admin_menu() {
        assert_eq!(labels(Role::Admin), vec!["Home", "Add Apps", "Submissions", "Logout"]);
    }

    #[test]
    fn test_user_menu() {
        assert_eq!(labels(Role::User), vec!["Home", "Profile", "Tasks", "Logout"]);
    }

    #[test]
    fn test_anonymous_menu_swaps_logout_for_login() {
        let menu = menu_for(Role::Anonymous);
        assert_eq!(menu.iter().map(|e| e.label).collect::<Vec<_>>(), vec!["Home", "Profile", "Tasks", "Login"]);
        assert_eq!(menu[3].action, MenuAction::Navigate("/login"));
    }

    #[test]
    fn test_admin_menu_targets() {
        let menu = menu_for(Role::Admin);
        assert_eq!(menu[1].action, MenuAction::Navigate("/add-task"));
        assert_eq!(menu[2].action, MenuAction::Navigate("/dashboard"));
        assert_eq!(menu[3].action, MenuAction::Logout);
    }

    #[test]
    fn test_role_from_token() {
        let admin = make_token(r#"{"is_admin":true}"#);
        let user = make_token(r#"{"is_admin":false}"#);
        let expired = make_token(r#"{"is_admin":true,"exp":10}"#);
        assert_eq!(Role::from_token(Some(&admin), 0), Role::Admin);
        assert_eq!(Role::from_token(Some(&user), 0), Role::User);
        assert_eq!(Role::from_token(Some(&expired), 20), Role::Anonymous);
        assert_eq!(Role::from_token(Some("garbage"), 0), Role::Anonymous);
        assert_eq!(Role::from_token(None, 0), Role::Anonymous);
    }

    #[test]
    fn test_admin_routes_fail_closed() {
        assert_eq!(RouteAccess::Admin.check(Role::Anonymous), AccessDecision::RedirectToLogin);
        assert_eq!(RouteAccess::Admin.check(Role::User), AccessDecision::Forbidden);
        assert_eq!(RouteAccess::Admin.check(Role::Admin), AccessDecision::Allow);
    }

    #[test]
    fn test_authenticated_routes() {
        assert_eq!(RouteAccess::Authenticated.check(Role::Anonymous), AccessDecision::RedirectToLogin);
        assert_eq!(RouteAccess::Authenticated.check(Role::User), AccessDecision::Allow);
        assert_eq!(RouteAccess::Authenticated.check(Role::Admin), AccessDecision::Allow);
        assert_eq!(RouteAccess::Public.check(Role::Anonymous), AccessDecision::Allow);
    }
}
