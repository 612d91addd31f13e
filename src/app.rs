//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    active_ride::ActiveRidePage, give_ride::GiveRidePage, home::HomePage, login::LoginPage,
    my_rides::MyRidesPage, payment::PaymentPage, profile::ProfilePage, signup::SignupPage,
    take_ride::TakeRidePage,
};
use crate::state::{
    active_ride::ActiveRideState, auth::AuthState, bookings::BookingsState, rides::RidesState,
};

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
///
/// Provides all shared state contexts, restores the cached session once on
/// mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let rides = RwSignal::new(RidesState::default());
    let active_ride = RwSignal::new(ActiveRideState::default());
    let bookings = RwSignal::new(BookingsState::default());

    provide_context(auth);
    provide_context(rides);
    provide_context(active_ride);
    provide_context(bookings);

    // Session restore happens exactly once; guards wait on `loading`.
    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get() {
            return;
        }
        restored.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::auth::restore_session().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        auth.update(|a| a.loading = false);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ridepool.css"/>
        <Title text="RidePool"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("give-ride") view=GiveRidePage/>
                <Route path=StaticSegment("take-ride") view=TakeRidePage/>
                <Route path=StaticSegment("my-rides") view=MyRidesPage/>
                <Route path=StaticSegment("active-ride") view=ActiveRidePage/>
                <Route path=StaticSegment("payment") view=PaymentPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
