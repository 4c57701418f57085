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

//! Data providers.
//!
//! Every consumer reads quiz and card data through [`DataProvider`], so the
//! compiled-in [`StaticProvider`] can be swapped for a [`PayloadProvider`]
//! (the shape a backend would serve) without touching the callers.

pub mod payload;
pub mod reference;

pub use payload::Payload;
pub use payload::PayloadError;
pub use payload::PayloadProvider;
pub use reference::StaticProvider;

use crate::types::info_card::InfoCard;
use crate::types::question::QuizQuestion;

/// Read-only access to the quiz questions, their answer key, and the info
/// cards.
///
/// Implementations hand out shared slices of data they own. Reads never fail
/// and never change what later reads return.
pub trait DataProvider: Send + Sync {
    /// The questions, in authored order.
    fn quiz_questions(&self) -> &[QuizQuestion];

    /// The index of the correct choice for each question, aligned with
    /// [`DataProvider::quiz_questions`].
    fn correct_answers(&self) -> &[usize];

    /// The info cards, in authored order.
    fn info_cards(&self) -> &[InfoCard];
}
