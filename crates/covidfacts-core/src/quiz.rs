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

use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::provider::DataProvider;

/// What the user did with one question during a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnswerState {
    /// The index of the chosen answer, if any.
    pub selection: Option<usize>,
    /// Whether the selection was right. `None` until the session is marked.
    pub correct: Option<bool>,
}

/// A single attempt at the quiz.
///
/// The session borrows the question definitions from the provider and keeps
/// its own answer state, so any number of sessions can run against the same
/// provider.
pub struct QuizSession<'a> {
    provider: &'a dyn DataProvider,
    answers: Vec<AnswerState>,
}

impl<'a> QuizSession<'a> {
    pub fn new(provider: &'a dyn DataProvider) -> Self {
        let answers = vec![AnswerState::default(); provider.quiz_questions().len()];
        Self { provider, answers }
    }

    /// Build a session from a list of selections, one per question in order.
    /// Questions past the end of the list are left unanswered.
    pub fn with_selections(
        provider: &'a dyn DataProvider,
        selections: &[Option<usize>],
    ) -> Fallible<Self> {
        let mut session = Self::new(provider);
        if selections.len() > session.len() {
            return fail(format!(
                "got {} answers but the quiz has {} questions",
                selections.len(),
                session.len()
            ));
        }
        for (question, selection) in selections.iter().enumerate() {
            if let Some(choice) = selection {
                session.select(question, *choice)?;
            }
        }
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn state(&self, question: usize) -> Option<&AnswerState> {
        self.answers.get(question)
    }

    pub fn select(&mut self, question: usize, choice: usize) -> Fallible<()> {
        let definition = self
            .provider
            .quiz_questions()
            .get(question)
            .ok_or_else(|| no_such_question(question))?;
        if !definition.has_choice(choice) {
            return fail(format!(
                "question {} has no choice {} (it has {})",
                question + 1,
                choice,
                definition.choices.len()
            ));
        }
        self.answers[question] = AnswerState {
            selection: Some(choice),
            correct: None,
        };
        Ok(())
    }

    pub fn clear(&mut self, question: usize) -> Fallible<()> {
        let state = self
            .answers
            .get_mut(question)
            .ok_or_else(|| no_such_question(question))?;
        *state = AnswerState::default();
        Ok(())
    }

    pub fn answered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|a| a.selection.is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.len()
    }

    /// Mark every question against the answer key. Unanswered questions are
    /// marked incorrect.
    pub fn mark(&mut self) -> Fallible<QuizReport> {
        let key = self.provider.correct_answers();
        if key.len() < self.answers.len() {
            return fail(format!(
                "answer key has {} entries but there are {} questions",
                key.len(),
                self.answers.len()
            ));
        }
        let mut results = Vec::with_capacity(self.answers.len());
        for (question, (state, answer)) in self.answers.iter_mut().zip(key).enumerate() {
            let correct = state.selection == Some(*answer);
            state.correct = Some(correct);
            results.push(QuestionResult {
                question,
                selected: state.selection,
                answer: *answer,
                correct,
            });
        }
        let correct = results.iter().filter(|r| r.correct).count();
        log::debug!("Marked quiz: {correct}/{} correct.", results.len());
        Ok(QuizReport {
            total: results.len(),
            correct,
            results,
        })
    }
}

fn no_such_question(question: usize) -> ErrorReport {
    ErrorReport::new(format!("no such question: {}", question + 1))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    /// Zero-based question index.
    pub question: usize,
    pub selected: Option<usize>,
    /// The correct choice.
    pub answer: usize,
    pub correct: bool,
}

/// The outcome of marking a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub results: Vec<QuestionResult>,
    pub correct: usize,
    pub total: usize,
}

impl QuizReport {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.correct as f64) * 100.0 / (self.total as f64)
        }
    }
}
