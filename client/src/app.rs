//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! [`Services`] holds the framework-free stores. Each store's state is
//! mirrored into an `RwSignal` through a subscription, and components read
//! those signals from context. The auth store bootstraps once, in the browser
//! only, so server and first client render agree on `loading = true`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{AuthGuard, GuestGuard};
use crate::components::nav_bar::NavBar;
use crate::components::notice_tray::NoticeTray;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::pages::{
    blogs::{BlogDetailPage, BlogsPage},
    dashboard::DashboardPage,
    login::LoginPage,
    not_authorized::NotAuthorizedPage,
    pending_blogs::PendingBlogsPage,
    profile::ProfilePage,
    signup::SignupPage,
};
use crate::state::auth::{AuthState, AuthStore};
use crate::state::blogs::{BlogState, BlogStore};
use crate::state::notices::{NoticeState, Notices};
use crate::state::store::Store;
use crate::util::host::Host;

/// Roles admitted to the moderation queue.
pub const ADMIN_ROLES: [&str; 2] = ["admin", "super-admin"];

/// Stores shared through context.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthStore>,
    pub blogs: Arc<BlogStore>,
    pub notices: Notices,
}

impl Services {
    pub fn new(host: &Host, config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let api = Arc::new(ApiClient::new(config.api_url.clone(), transport));
        let notices = Notices::new();
        Self {
            auth: Arc::new(AuthStore::new(host, api.clone(), notices.clone())),
            blogs: Arc::new(BlogStore::new(api, notices.clone())),
            notices,
        }
    }

    /// Services for the current environment.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        let transport: Arc<dyn Transport> = Arc::new(crate::net::transport::GlooTransport);
        #[cfg(not(feature = "hydrate"))]
        let transport: Arc<dyn Transport> = Arc::new(crate::net::transport::OfflineTransport);
        Self::new(&Host::detect(), &ClientConfig::from_build_env(), transport)
    }
}

/// Mirror `store` into a fresh signal.
fn bridge<T: Clone + Send + Sync + 'static>(store: &Store<T>) -> RwSignal<T> {
    let signal = RwSignal::new(store.get());
    store.subscribe(move |value| signal.set(value.clone()));
    signal
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::detect();
    provide_context(bridge::<AuthState>(services.auth.state()));
    provide_context(bridge::<BlogState>(services.blogs.state()));
    provide_context(bridge::<NoticeState>(services.notices.store()));
    provide_context(services.clone());

    {
        let auth = services.auth.clone();
        Effect::new(move || {
            let auth = auth.clone();
            leptos::task::spawn_local(async move { auth.bootstrap().await });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpost.css"/>
        <Title text="Inkpost"/>

        <Router>
            <NavBar/>
            <NoticeTray/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/blogs"/> }/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <GuestGuard><LoginPage/></GuestGuard> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <GuestGuard><SignupPage/></GuestGuard> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <AuthGuard><DashboardPage/></AuthGuard> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <AuthGuard><ProfilePage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("pending-blogs"))
                        view=|| {
                            view! {
                                <AuthGuard allowed_roles=ADMIN_ROLES.to_vec()>
                                    <PendingBlogsPage/>
                                </AuthGuard>
                            }
                        }
                    />
                    <Route path=StaticSegment("blogs") view=BlogsPage/>
                    <Route path=(StaticSegment("blogs"), ParamSegment("id")) view=BlogDetailPage/>
                    <Route path=StaticSegment("not-authorized") view=NotAuthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}
