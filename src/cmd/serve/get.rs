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
use covidfacts_core::provider::Payload;
use covidfacts_core::types::info_card::InfoCard;
use covidfacts_core::types::question::QuizQuestion;

use crate::cmd::serve::state::ServerState;

pub async fn data_handler(State(state): State<ServerState>) -> Json<Payload> {
    Json(Payload::from_provider(state.provider.as_ref()))
}

pub async fn questions_handler(State(state): State<ServerState>) -> Json<Vec<QuizQuestion>> {
    Json(state.provider.quiz_questions().to_vec())
}

pub async fn answers_handler(State(state): State<ServerState>) -> Json<Vec<usize>> {
    Json(state.provider.correct_answers().to_vec())
}

pub async fn cards_handler(State(state): State<ServerState>) -> Json<Vec<InfoCard>> {
    Json(state.provider.info_cards().to_vec())
}
