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

//! covidfacts-core: data and quiz logic for covidfacts.
//!
//! This library provides:
//! - The quiz question and info card types
//! - The `DataProvider` trait, with the compiled-in data and a
//!   payload-backed replacement
//! - An invariant checker for provider data
//! - Quiz sessions and scoring

pub mod check;
pub mod error;
pub mod provider;
pub mod quiz;
pub mod types;

// Re-exports for convenience
pub use check::{Violation, check_provider};
pub use error::{ErrorReport, Fallible, fail};
pub use provider::{DataProvider, Payload, PayloadError, PayloadProvider, StaticProvider};
pub use quiz::{AnswerState, QuestionResult, QuizReport, QuizSession};
pub use types::info_card::InfoCard;
pub use types::question::{Choice, QuestionKind, QuizQuestion};
