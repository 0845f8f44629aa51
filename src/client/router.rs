use dioxus::prelude::*;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::navigation::BrowserHistory;
#[cfg(not(feature = "web"))]
use crate::navigation::MemoryHistory;
use crate::{
    config::Panel,
    navigation::{active_nav, RouteTable, Router, ViewHost},
};

#[cfg(feature = "web")]
pub type AppHistory = BrowserHistory;
#[cfg(not(feature = "web"))]
pub type AppHistory = MemoryHistory;

/// Every view either panel can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    AdminDashboard,
    Users,
    Offers,
    Reports,
    CompanyDashboard,
    CompanyOffers,
    NewCompanyOffer,
    EditCompanyOffer(u64),
    /// All applicants, or only those of one offer.
    CompanyApplicants(Option<u64>),
}

pub fn route_table(panel: Panel) -> RouteTable<View> {
    match panel {
        Panel::Admin => RouteTable::new(View::AdminDashboard)
            .route("/", |_| Some(View::AdminDashboard))
            .route("/users", |_| Some(View::Users))
            .route("/offers", |_| Some(View::Offers))
            .route("/reports", |_| Some(View::Reports)),
        Panel::Company => RouteTable::new(View::CompanyDashboard)
            .route("/", |_| Some(View::CompanyDashboard))
            .route("/offers", |_| Some(View::CompanyOffers))
            .route("/offers/new", |_| Some(View::NewCompanyOffer))
            .route("/offers/{id}/edit", |params| {
                params.id("id").map(View::EditCompanyOffer)
            })
            .route("/offers/{id}/applicants", |params| {
                params.id("id").map(|id| View::CompanyApplicants(Some(id)))
            })
            .route("/applicants", |_| Some(View::CompanyApplicants(None))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Offers,
    Reports,
    Applicants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

const ADMIN_NAV: [NavItem; 4] = [
    NavItem {
        path: "/",
        label: "Dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        path: "/users",
        label: "Users",
        icon: NavIcon::Users,
    },
    NavItem {
        path: "/offers",
        label: "Offers",
        icon: NavIcon::Offers,
    },
    NavItem {
        path: "/reports",
        label: "Reports",
        icon: NavIcon::Reports,
    },
];

const COMPANY_NAV: [NavItem; 3] = [
    NavItem {
        path: "/",
        label: "Dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        path: "/offers",
        label: "My offers",
        icon: NavIcon::Offers,
    },
    NavItem {
        path: "/applicants",
        label: "Applicants",
        icon: NavIcon::Applicants,
    },
];

pub fn nav_items(panel: Panel) -> &'static [NavItem] {
    match panel {
        Panel::Admin => &ADMIN_NAV,
        Panel::Company => &COMPANY_NAV,
    }
}

/// Mounts views into signals read by the view container.
///
/// Each mount bumps `generation`, which keys the container so the view is rebuilt even when
/// the same view is shown again.
struct SignalHost {
    view: Signal<Option<View>>,
    generation: Signal<u64>,
}

impl ViewHost<View> for SignalHost {
    fn unmount(&mut self) {
        self.view.set(None);
    }

    fn mount(&mut self, view: &View) {
        *self.generation.write() += 1;
        self.view.set(Some(*view));
    }

    fn scroll_to_top(&mut self) {
        let _ = document::eval("window.scrollTo(0, 0);");
    }
}

/// Navigation handle shared through context.
#[derive(Clone, Copy)]
pub struct Nav {
    panel: Panel,
    router: Signal<Router<View, AppHistory>>,
    view: Signal<Option<View>>,
    generation: Signal<u64>,
    current_path: Signal<String>,
}

impl Nav {
    /// Creates the router and resolves the view for the URL the page was loaded with.
    pub fn new(panel: Panel) -> Self {
        let mut host = SignalHost {
            view: Signal::new(None),
            generation: Signal::new(0),
        };
        let mut router = Router::new(route_table(panel), AppHistory::default());
        router.start(&mut host);
        let current_path = router.current_path().to_string();

        Self {
            panel,
            router: Signal::new(router),
            view: host.view,
            generation: host.generation,
            current_path: Signal::new(current_path),
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    fn host(&self) -> SignalHost {
        SignalHost {
            view: self.view,
            generation: self.generation,
        }
    }

    pub fn navigate(&self, path: &str) {
        let mut router = self.router;
        let mut host = self.host();
        router.write().navigate(path, true, &mut host);
        self.sync_path();
    }

    pub fn pop_state(&self) {
        let mut router = self.router;
        let mut host = self.host();
        router.write().pop_state(&mut host);
        self.sync_path();
    }

    fn sync_path(&self) {
        let mut current_path = self.current_path;
        let path = self.router.peek().current_path().to_string();
        current_path.set(path);
    }

    pub fn view(&self) -> Option<View> {
        *self.view.read()
    }

    pub fn generation(&self) -> u64 {
        *self.generation.read()
    }

    /// Whether the sidebar item for `path` is highlighted.
    pub fn is_active(&self, path: &str) -> bool {
        let current = self.current_path.read();
        let paths = nav_items(self.panel).iter().map(|item| item.path);

        active_nav(&current, paths).as_deref() == Some(path)
    }

    /// Re-resolves the view whenever the user steps through the browser history.
    pub async fn follow_browser_history(self) {
        let mut listener = document::eval(
            r#"
            window.addEventListener("popstate", () => dioxus.send(window.location.hash));
            "#,
        );

        loop {
            match listener.recv::<String>().await {
                Ok(hash) => {
                    tracing::debug!("History step to {}", hash);
                    self.pop_state();
                }
                Err(e) => {
                    tracing::warn!("Stopped following browser history: {:?}", e);
                    break;
                }
            }
        }
    }
}

pub fn use_nav() -> Nav {
    use_context::<Nav>()
}
