mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let auth = services::session::AuthBackend::from_env()
        .expect("AUTH_BACKEND_URL and AUTH_ANON_KEY required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let state = state::AppState::new(auth);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "alumni portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
