use axum::{Router, routing::post};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use seedling_app::{app_bus::AppBus, config::Config};
use seedling_types::{Result, errors::ApplicationError};

use crate::{
    handlers::{add_points, delete_all_posts, get_my_garden, get_my_league, get_my_profile},
    identity::TokenVerifier,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub tokens: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: &Config) -> AppState {
        let tokens = Arc::new(TokenVerifier::new(&config.auth_token_secret));

        AppState { app_bus, tokens }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/getMyLeague", post(get_my_league))
            .route("/getMyProfile", post(get_my_profile))
            .route("/getMyGarden", post(get_my_garden))
            .route("/addPoints", post(add_points))
            .route("/deleteAllPosts", post(delete_all_posts))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_on(state, listener).await
    }

    pub async fn serve_on(state: AppState, listener: TcpListener) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
