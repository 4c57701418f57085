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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// The kind of content a question's prompt and choices carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
}

impl Display for QuestionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionKind::Text => write!(f, "text"),
        }
    }
}

/// One of the possible answers to a question.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Choice {
    #[serde(rename = "answer")]
    pub label: String,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A multiple-choice question definition.
///
/// This is immutable reference data. What the user picked, and whether it
/// was right, lives in [`crate::quiz::QuizSession`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(rename = "text")]
    pub prompt: String,
    #[serde(rename = "possibilities")]
    pub choices: Vec<Choice>,
}

impl QuizQuestion {
    pub fn new_text<I, S>(prompt: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: QuestionKind::Text,
            prompt: prompt.into(),
            choices: choices.into_iter().map(Choice::new).collect(),
        }
    }

    pub fn has_choice(&self, index: usize) -> bool {
        index < self.choices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_serialize_wire_names() -> Fallible<()> {
        let question = QuizQuestion::new_text("Can COVID-19 be cured?", ["Yes", "No"]);
        let json = serde_json::to_string(&question)?;
        assert_eq!(
            json,
            r#"{"type":"text","text":"Can COVID-19 be cured?","possibilities":[{"answer":"Yes"},{"answer":"No"}]}"#
        );
        Ok(())
    }

    #[test]
    fn test_session_fields_are_ignored() -> Fallible<()> {
        let json = r#"{
            "type": "text",
            "text": "True or False: The virus is mutating rapidly.",
            "possibilities": [{ "answer": "True" }, { "answer": "False" }],
            "selected": 1,
            "correct": false
        }"#;
        let question: QuizQuestion = serde_json::from_str(json)?;
        assert_eq!(
            question,
            QuizQuestion::new_text("True or False: The virus is mutating rapidly.", ["True", "False"])
        );
        Ok(())
    }

    #[test]
    fn test_unknown_kind() {
        let json = r#"{"type": "image", "text": "?", "possibilities": []}"#;
        assert!(serde_json::from_str::<QuizQuestion>(json).is_err());
    }

    #[test]
    fn test_has_choice() {
        let question = QuizQuestion::new_text("?", ["a", "b", "c"]);
        assert!(question.has_choice(0));
        assert!(question.has_choice(2));
        assert!(!question.has_choice(3));
    }
}
