use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no screen at '{0}'")]
pub struct RouteError(pub String);

/// Console screens, addressed by the same paths the web app used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    LocalityManager,
    VehicleList,
    GpsChecker,
    Downloads,
    LocalityChecker,
}

pub const ALL_ROUTES: [Route; 7] = [
    Route::Login,
    Route::Dashboard,
    Route::LocalityManager,
    Route::VehicleList,
    Route::GpsChecker,
    Route::Downloads,
    Route::LocalityChecker,
];

/// Entries of the sidebar menu, in display order.
pub const SIDEBAR: [Route; 3] = [Route::LocalityManager, Route::VehicleList, Route::Dashboard];

impl Route {
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        ALL_ROUTES
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RouteError(trimmed.to_string()))
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
            Route::LocalityManager => "/locality-manager",
            Route::VehicleList => "/vehicle-list",
            Route::GpsChecker => "/gps-checker",
            Route::Downloads => "/downloads",
            Route::LocalityChecker => "/locality-checker",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::LocalityManager => "Locality Manager",
            Route::VehicleList => "Vehicle List",
            Route::GpsChecker => "GPS Checker",
            Route::Downloads => "Downloads",
            Route::LocalityChecker => "Locality Checker",
        }
    }

    pub fn shows_sidebar(&self) -> bool {
        *self != Route::Login
    }
}

/// Sidebar menu with the active entry marked, or `None` on the login screen.
pub fn render_sidebar(active: Route) -> Option<String> {
    if !active.shows_sidebar() {
        return None;
    }
    let entries: Vec<String> = SIDEBAR
        .iter()
        .map(|route| {
            let marker = if *route == active { '>' } else { ' ' };
            format!("{marker} {:<18}{}", route.title(), route.path())
        })
        .collect();
    Some(format!("Menu\n{}", entries.join("\n")))
}
