// Copyright 2025 The covidfacts Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use covidfacts_core::error::Fallible;
use covidfacts_core::provider::DataProvider;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::serve::get::answers_handler;
use crate::cmd::serve::get::cards_handler;
use crate::cmd::serve::get::data_handler;
use crate::cmd::serve::get::questions_handler;
use crate::cmd::serve::post::score_handler;
use crate::cmd::serve::state::ServerState;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub provider: Arc<dyn DataProvider>,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let state = ServerState {
        provider: config.provider,
    };
    let app = router(state);
    let bind = format!("{}:{}", config.host, config.port);

    // Serve until Ctrl+C.
    log::info!("Serving on http://{bind}/");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn router(state: ServerState) -> Router {
    let app = Router::new();
    let app = app.route("/api/data", get(data_handler));
    let app = app.route("/api/quiz/questions", get(questions_handler));
    let app = app.route("/api/quiz/answers", get(answers_handler));
    let app = app.route("/api/quiz/score", post(score_handler));
    let app = app.route("/api/cards", get(cards_handler));
    let app = app.fallback(not_found_handler);
    app.with_state(state)
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::debug!("Received Ctrl+C, shutting down gracefully");
}
