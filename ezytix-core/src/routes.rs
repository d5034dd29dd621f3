use crate::user::User;

/// Client-side route surface. Unknown paths fall through to `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Booking,
    BookingSuccess,
    Login,
    Register,
    Profile,
    AdminDashboard,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/search" => Route::Search,
            "/booking" => Route::Booking,
            "/booking/success" => Route::BookingSuccess,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/profile" => Route::Profile,
            "/admin/dashboard" => Route::AdminDashboard,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Search => "/search",
            Route::Booking => "/booking",
            Route::BookingSuccess => "/booking/success",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Profile => "/profile",
            Route::AdminDashboard => "/admin/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(Route),
}

/// Gate a route on the current session. Profile needs a signed-in user,
/// the admin dashboard needs an admin; everything else is public.
pub fn check_access(route: Route, user: Option<&User>) -> RouteDecision {
    match route {
        Route::Profile => match user {
            Some(_) => RouteDecision::Allow,
            None => RouteDecision::RedirectTo(Route::Login),
        },
        Route::AdminDashboard => match user {
            Some(u) if u.is_admin() => RouteDecision::Allow,
            Some(_) => RouteDecision::RedirectTo(Route::Home),
            None => RouteDecision::RedirectTo(Route::Login),
        },
        _ => RouteDecision::Allow,
    }
}
