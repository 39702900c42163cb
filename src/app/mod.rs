use std::{
    io,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Settings, storage::Storage};

mod asset;
mod contact;
pub mod error;
mod field;
mod health;
mod newsletter;

#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn Storage>,
}

fn app_router(assets_dir: Option<&str>) -> Router<AppState> {
    let router = health::router()
        .merge(contact::router())
        .merge(newsletter::router());

    match assets_dir {
        Some(dir) => router.merge(asset::router(dir)),
        None => router,
    }
}

pub struct App {
    listener: TcpListener,
    local_addr: SocketAddr,
    assets_dir: Option<String>,
}

impl App {
    /// Bind the listener described by `config`. Port `0` picks a free port.
    pub async fn with(config: &Settings) -> io::Result<Self> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
            assets_dir: config.application.assets_dir.clone(),
        })
    }

    pub fn host(&self) -> IpAddr {
        self.local_addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// Serve until the process exits, with `storage` shared by every handler.
    pub async fn serve(self, storage: Arc<dyn Storage>) -> Result<(), io::Error> {
        let app = app_router(self.assets_dir.as_deref())
            .with_state(AppState { storage })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
