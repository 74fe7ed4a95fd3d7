use dioxus::prelude::*;

mod auth;
mod permission_gate;
mod routes;
use auth::ClaimsSource;
use routes::Route;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        server::health::record_start_time();

        let state = server::state::AppState::from_env();
        if state.jwt_secret.is_none() {
            tracing::warn!("JWT_SECRET is not set, every session will be treated as signed out");
        }

        let router = dioxus::server::router(App)
            .merge(server::rest::api_routes().with_state(state.clone()))
            .layer(axum::middleware::from_fn_with_state(
                state,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ClaimsSource::server);

    rsx! {
        Router::<Route> {}
    }
}
