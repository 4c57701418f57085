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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::check::Violation;
use crate::check::check_provider;
use crate::error::Fallible;
use crate::provider::DataProvider;
use crate::types::info_card::InfoCard;
use crate::types::question::QuizQuestion;

/// The wire shape of the full data set, as a backend would serve it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub quiz_questions: Vec<QuizQuestion>,
    pub correct_answers: Vec<usize>,
    #[serde(rename = "turtlesData")]
    pub info_cards: Vec<InfoCard>,
}

impl Payload {
    pub fn from_provider(provider: &dyn DataProvider) -> Self {
        Self {
            quiz_questions: provider.quiz_questions().to_vec(),
            correct_answers: provider.correct_answers().to_vec(),
            info_cards: provider.info_cards().to_vec(),
        }
    }

    pub fn to_json(&self) -> Fallible<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Why a payload could not be turned into a provider.
#[derive(Debug, PartialEq)]
pub enum PayloadError {
    /// The text is not JSON, or not the expected shape.
    Malformed(String),
    /// The payload parsed, but its data breaks one or more invariants.
    Invalid(Vec<Violation>),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::Malformed(message) => write!(f, "malformed payload: {message}"),
            PayloadError::Invalid(violations) => {
                let violations: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                write!(f, "invalid payload: {}", violations.join("; "))
            }
        }
    }
}

impl Error for PayloadError {}

/// A provider backed by a [`Payload`].
///
/// The data is checked once, on construction, so the reads stay total like
/// every other provider's.
#[derive(Clone, Debug, PartialEq)]
pub struct PayloadProvider {
    payload: Payload,
}

impl PayloadProvider {
    pub fn from_payload(payload: Payload) -> Result<Self, PayloadError> {
        let provider = Self { payload };
        let violations = check_provider(&provider);
        if !violations.is_empty() {
            return Err(PayloadError::Invalid(violations));
        }
        log::debug!(
            "Loaded payload with {} questions and {} info cards.",
            provider.payload.quiz_questions.len(),
            provider.payload.info_cards.len()
        );
        Ok(provider)
    }

    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let payload: Payload =
            serde_json::from_str(text).map_err(|e| PayloadError::Malformed(e.to_string()))?;
        Self::from_payload(payload)
    }

    pub fn from_file(path: &Path) -> Fallible<Self> {
        log::debug!("Reading payload from {}", path.display());
        let text = read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl DataProvider for PayloadProvider {
    fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.payload.quiz_questions
    }

    fn correct_answers(&self) -> &[usize] {
        &self.payload.correct_answers
    }

    fn info_cards(&self) -> &[InfoCard] {
        &self.payload.info_cards
    }
}
