//! Page Shells
//!
//! Every dashboard route is a [`Screen`]. A screen knows its path pattern,
//! its label, its breadcrumb trail and how to compose its document title:
//!
//! ```text
//! <Screen Label> | <Surface> - <AppName>
//! ```
//!
//! [`PageShell`] pairs a screen with the resolution [`Strategy`] it declares
//! and produces exactly what its view receives.
//!
//! [`Strategy`]: crate::resolver::Strategy

mod breadcrumbs;
mod shell;
mod title;

pub use breadcrumbs::{trail_text, Crumb};
pub use shell::PageShell;
pub use title::{MemoryTitle, TitleGuard, TitleSink};

use std::fmt;

/// Compose a document title from its three parts
pub fn compose_title(label: &str, surface: &str, app_name: &str) -> String {
    format!("{} | {} - {}", label, surface, app_name)
}

/// Top-level area a screen belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Dashboard,
}

impl Surface {
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Dashboard => "Dashboard",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Surface::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dashboard section, one per record family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Client,
    Lead,
    Property,
    Development,
    User,
    Wallet,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Client,
        Section::Lead,
        Section::Property,
        Section::Development,
        Section::User,
        Section::Wallet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Client => "Client",
            Section::Lead => "Lead",
            Section::Property => "Property",
            Section::Development => "Development",
            Section::User => "User",
            Section::Wallet => "Wallet",
        }
    }

    /// Path of the section's list screen
    pub fn path(&self) -> &'static str {
        self.list_screen().path()
    }

    pub fn list_screen(&self) -> Screen {
        match self {
            Section::Client => Screen::ClientList,
            Section::Lead => Screen::LeadList,
            Section::Property => Screen::PropertyList,
            Section::Development => Screen::DevelopmentList,
            Section::User => Screen::UserList,
            Section::Wallet => Screen::WalletTransfers,
        }
    }
}

/// One row of the dashboard routing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Overview,
    ClientList,
    ClientCreate,
    ClientDetails,
    ClientEdit,
    LeadList,
    LeadDetails,
    PropertyList,
    PropertyCreate,
    PropertyDetails,
    PropertyEdit,
    DevelopmentList,
    DevelopmentDetails,
    UserList,
    UserCreate,
    UserProfile,
    WalletTransfers,
    WalletTransferDetails,
}

impl Screen {
    pub const ALL: [Screen; 18] = [
        Screen::Overview,
        Screen::ClientList,
        Screen::ClientCreate,
        Screen::ClientDetails,
        Screen::ClientEdit,
        Screen::LeadList,
        Screen::LeadDetails,
        Screen::PropertyList,
        Screen::PropertyCreate,
        Screen::PropertyDetails,
        Screen::PropertyEdit,
        Screen::DevelopmentList,
        Screen::DevelopmentDetails,
        Screen::UserList,
        Screen::UserCreate,
        Screen::UserProfile,
        Screen::WalletTransfers,
        Screen::WalletTransferDetails,
    ];

    pub fn all() -> &'static [Screen] {
        &Self::ALL
    }

    pub fn surface(&self) -> Surface {
        Surface::Dashboard
    }

    pub fn section(&self) -> Option<Section> {
        use Screen::*;
        match self {
            Overview => None,
            ClientList | ClientCreate | ClientDetails | ClientEdit => Some(Section::Client),
            LeadList | LeadDetails => Some(Section::Lead),
            PropertyList | PropertyCreate | PropertyDetails | PropertyEdit => {
                Some(Section::Property)
            }
            DevelopmentList | DevelopmentDetails => Some(Section::Development),
            UserList | UserCreate | UserProfile => Some(Section::User),
            WalletTransfers | WalletTransferDetails => Some(Section::Wallet),
        }
    }

    /// Router path pattern; `:id` marks the identifier segment
    pub fn path(&self) -> &'static str {
        use Screen::*;
        match self {
            Overview => "/dashboard",
            ClientList => "/dashboard/client",
            ClientCreate => "/dashboard/client/new",
            ClientDetails => "/dashboard/client/details/:id",
            ClientEdit => "/dashboard/client/edit/:id",
            LeadList => "/dashboard/lead",
            LeadDetails => "/dashboard/lead/details/:id",
            PropertyList => "/dashboard/property",
            PropertyCreate => "/dashboard/property/new",
            PropertyDetails => "/dashboard/property/details/:id",
            PropertyEdit => "/dashboard/property/edit/:id",
            DevelopmentList => "/dashboard/development",
            DevelopmentDetails => "/dashboard/development/details/:id",
            UserList => "/dashboard/user",
            UserCreate => "/dashboard/user/new",
            UserProfile => "/dashboard/user/profile/:id",
            WalletTransfers => "/dashboard/wallet",
            WalletTransferDetails => "/dashboard/wallet/details/:id",
        }
    }

    /// Title label
    pub fn label(&self) -> &'static str {
        use Screen::*;
        match self {
            Overview => "Overview",
            ClientList => "Client List",
            ClientCreate => "Create a new client",
            ClientDetails => "Client Details",
            ClientEdit => "Client Edit",
            LeadList => "Lead List",
            LeadDetails => "Lead Details",
            PropertyList => "Property List",
            PropertyCreate => "Create a new property",
            PropertyDetails => "Property Details",
            PropertyEdit => "Property Edit",
            DevelopmentList => "Development List",
            DevelopmentDetails => "Development Details",
            UserList => "User List",
            UserCreate => "Create a new user",
            UserProfile => "User Profile",
            WalletTransfers => "Wallet Transfers",
            WalletTransferDetails => "Transfer Details",
        }
    }

    /// Last breadcrumb label
    pub fn leaf_label(&self) -> &'static str {
        use Screen::*;
        match self {
            Overview => "Overview",
            ClientList | LeadList | PropertyList | DevelopmentList | UserList => "List",
            ClientCreate | PropertyCreate | UserCreate => "New",
            ClientDetails | LeadDetails | PropertyDetails | DevelopmentDetails
            | WalletTransferDetails => "Details",
            ClientEdit | PropertyEdit => "Edit",
            UserProfile => "Profile",
            WalletTransfers => "Transfers",
        }
    }

    pub fn takes_id(&self) -> bool {
        self.path().ends_with("/:id")
    }

    /// Kebab-case name, e.g. `client-details`
    pub fn name(&self) -> String {
        let debug = format!("{:?}", self);
        let mut name = String::with_capacity(debug.len() + 4);
        for (i, ch) in debug.chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    name.push('-');
                }
                name.push(ch.to_ascii_lowercase());
            } else {
                name.push(ch);
            }
        }
        name
    }

    pub fn from_name(name: &str) -> Option<Screen> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|screen| screen.name() == wanted)
    }

    /// Concrete link for this screen; the id is ignored by screens without one
    pub fn href(&self, id: &str) -> String {
        match self.path().strip_suffix(":id") {
            Some(prefix) => format!("{}{}", prefix, urlencoding::encode(id)),
            None => self.path().to_string(),
        }
    }

    /// Composed document title
    pub fn title(&self, app_name: &str) -> String {
        compose_title(self.label(), self.surface().label(), app_name)
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        breadcrumbs::trail(*self)
    }

    /// Match a concrete path against the routing table
    ///
    /// Returns the screen and the decoded identifier, if the screen takes one.
    pub fn match_path(path: &str) -> Option<(Screen, Option<String>)> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();

        Self::ALL.into_iter().find_map(|screen| {
            let pattern: Vec<&str> = screen.path().split('/').collect();
            if pattern.len() != segments.len() {
                return None;
            }

            let mut id = None;
            for (expected, actual) in pattern.iter().zip(&segments) {
                if *expected == ":id" {
                    if actual.is_empty() {
                        return None;
                    }
                    id = Some(urlencoding::decode(actual).map(|s| s.into_owned()).ok()?);
                } else if expected != actual {
                    return None;
                }
            }
            Some((screen, id))
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_title() {
        assert_eq!(
            compose_title("Client Details", "Dashboard", "Estate CRM"),
            "Client Details | Dashboard - Estate CRM"
        );
    }

    #[test]
    fn test_title_follows_app_name() {
        for screen in Screen::all() {
            let a = screen.title("Alpha");
            let b = screen.title("Beta");
            assert_eq!(a, format!("{} | Dashboard - Alpha", screen.label()));
            assert_eq!(b, format!("{} | Dashboard - Beta", screen.label()));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Screen::all().iter().map(|s| s.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Screen::ALL.len());
    }

    #[test]
    fn test_takes_id() {
        assert!(Screen::ClientDetails.takes_id());
        assert!(Screen::UserProfile.takes_id());
        assert!(!Screen::ClientCreate.takes_id());
        assert!(!Screen::Overview.takes_id());
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Screen::ClientDetails.name(), "client-details");
        assert_eq!(Screen::WalletTransferDetails.name(), "wallet-transfer-details");
        for screen in Screen::all() {
            assert_eq!(Screen::from_name(&screen.name()), Some(*screen));
        }
        assert_eq!(Screen::from_name("Client-Details"), Some(Screen::ClientDetails));
        assert_eq!(Screen::from_name("nowhere"), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(Screen::ClientDetails.href("c-42"), "/dashboard/client/details/c-42");
        assert_eq!(Screen::PropertyEdit.href("a b"), "/dashboard/property/edit/a%20b");
        assert_eq!(Screen::ClientList.href("ignored"), "/dashboard/client");
    }

    #[test]
    fn test_match_path() {
        assert_eq!(
            Screen::match_path("/dashboard/client/details/c-42"),
            Some((Screen::ClientDetails, Some("c-42".to_string())))
        );
        assert_eq!(
            Screen::match_path("/dashboard/property/"),
            Some((Screen::PropertyList, None))
        );
        assert_eq!(
            Screen::match_path("/dashboard/client/new?tab=1"),
            Some((Screen::ClientCreate, None))
        );
        assert_eq!(
            Screen::match_path("/dashboard/property/edit/a%20b"),
            Some((Screen::PropertyEdit, Some("a b".to_string())))
        );
        assert_eq!(Screen::match_path("/dashboard/client/details/"), None);
        assert_eq!(Screen::match_path("/elsewhere"), None);
    }

    #[test]
    fn test_href_matches_back() {
        for screen in Screen::all() {
            let (matched, id) = Screen::match_path(&screen.href("x-1")).unwrap();
            assert_eq!(matched, *screen);
            assert_eq!(id.is_some(), screen.takes_id());
        }
    }

    #[test]
    fn test_sections_cover_list_screens() {
        for section in Section::ALL {
            assert_eq!(section.list_screen().section(), Some(section));
        }
    }
}
