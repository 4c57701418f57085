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

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use covidfacts_core::error::Fallible;
use covidfacts_core::quiz::QuizReport;
use covidfacts_core::quiz::QuizSession;
use serde::Deserialize;

use crate::cmd::serve::state::ServerState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    /// Zero-based choice per question; `null` for unanswered.
    answers: Vec<Option<usize>>,
}

pub async fn score_handler(
    State(state): State<ServerState>,
    body: String,
) -> Result<Json<QuizReport>, (StatusCode, String)> {
    let request: ScoreRequest = serde_json::from_str(&body)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid request: {e}")))?;
    match score(&state, &request) {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            log::debug!("Rejected score request: {e}");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

fn score(state: &ServerState, request: &ScoreRequest) -> Fallible<QuizReport> {
    let mut session = QuizSession::with_selections(state.provider.as_ref(), &request.answers)?;
    session.mark()
}
