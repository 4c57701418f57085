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

use url::Url;

use crate::provider::DataProvider;

/// The fewest choices a question may offer.
pub const MIN_CHOICES: usize = 2;

/// The most choices a question may offer.
pub const MAX_CHOICES: usize = 4;

/// A broken invariant in a provider's data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The answer key and the question list have different lengths.
    AnswerKeyLength { questions: usize, answers: usize },
    /// A question has too few or too many choices.
    ChoiceCount { question: usize, count: usize },
    /// The answer key points past the end of a question's choices.
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        choices: usize,
    },
    /// A question's prompt is blank.
    EmptyPrompt { question: usize },
    /// One of a question's choice labels is blank.
    EmptyChoice { question: usize, choice: usize },
    /// An info card has a blank category.
    EmptyCategory { card: usize },
    /// An info card has a blank description.
    EmptyDescription { card: usize },
    /// An info card's image URL is not an absolute `http`/`https` URL.
    InvalidImageUrl { card: usize, reason: String },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::AnswerKeyLength { questions, answers } => write!(
                f,
                "answer key has {answers} entries but there are {questions} questions"
            ),
            Violation::ChoiceCount { question, count } => write!(
                f,
                "question {question} has {count} choices, expected between {MIN_CHOICES} and {MAX_CHOICES}"
            ),
            Violation::AnswerOutOfRange {
                question,
                answer,
                choices,
            } => write!(
                f,
                "answer {answer} for question {question} is out of range ({choices} choices)"
            ),
            Violation::EmptyPrompt { question } => {
                write!(f, "question {question} has an empty prompt")
            }
            Violation::EmptyChoice { question, choice } => {
                write!(f, "choice {choice} of question {question} is empty")
            }
            Violation::EmptyCategory { card } => write!(f, "card {card} has an empty category"),
            Violation::EmptyDescription { card } => {
                write!(f, "card {card} has an empty description")
            }
            Violation::InvalidImageUrl { card, reason } => {
                write!(f, "card {card} has an invalid image URL: {reason}")
            }
        }
    }
}

/// Check every data invariant of a provider. An empty result means the data
/// is consistent.
pub fn check_provider(provider: &dyn DataProvider) -> Vec<Violation> {
    let mut violations = Vec::new();
    let questions = provider.quiz_questions();
    let answers = provider.correct_answers();

    if questions.len() != answers.len() {
        violations.push(Violation::AnswerKeyLength {
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    for (idx, question) in questions.iter().enumerate() {
        if question.prompt.trim().is_empty() {
            violations.push(Violation::EmptyPrompt { question: idx });
        }
        let count = question.choices.len();
        if !(MIN_CHOICES..=MAX_CHOICES).contains(&count) {
            violations.push(Violation::ChoiceCount {
                question: idx,
                count,
            });
        }
        for (choice_idx, choice) in question.choices.iter().enumerate() {
            if choice.label.trim().is_empty() {
                violations.push(Violation::EmptyChoice {
                    question: idx,
                    choice: choice_idx,
                });
            }
        }
        if let Some(answer) = answers.get(idx) {
            if !question.has_choice(*answer) {
                violations.push(Violation::AnswerOutOfRange {
                    question: idx,
                    answer: *answer,
                    choices: count,
                });
            }
        }
    }

    for (idx, card) in provider.info_cards().iter().enumerate() {
        if card.category.trim().is_empty() {
            violations.push(Violation::EmptyCategory { card: idx });
        }
        if card.description.trim().is_empty() {
            violations.push(Violation::EmptyDescription { card: idx });
        }
        if let Err(reason) = validate_image_url(&card.image_url) {
            violations.push(Violation::InvalidImageUrl { card: idx, reason });
        }
    }

    violations
}

/// Image URLs must be absolute web URLs with a host.
fn validate_image_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{other}'")),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::info_card::InfoCard;
    use crate::types::question::QuizQuestion;

    struct FakeProvider {
        questions: Vec<QuizQuestion>,
        answers: Vec<usize>,
        cards: Vec<InfoCard>,
    }

    impl DataProvider for FakeProvider {
        fn quiz_questions(&self) -> &[QuizQuestion] {
            &self.questions
        }

        fn correct_answers(&self) -> &[usize] {
            &self.answers
        }

        fn info_cards(&self) -> &[InfoCard] {
            &self.cards
        }
    }

    fn make_valid_provider() -> FakeProvider {
        FakeProvider {
            questions: vec![
                QuizQuestion::new_text("Is it raining?", ["Yes", "No"]),
                QuizQuestion::new_text("Pick one", ["a", "b", "c", "d"]),
            ],
            answers: vec![0, 3],
            cards: vec![InfoCard::new(
                "Gloves",
                "https://example.com/gloves.png",
                "Hand coverings.",
            )],
        }
    }

    #[test]
    fn test_valid() {
        assert!(check_provider(&make_valid_provider()).is_empty());
    }

    #[test]
    fn test_answer_key_length() {
        let mut provider = make_valid_provider();
        provider.answers.pop();
        assert_eq!(
            check_provider(&provider),
            vec![Violation::AnswerKeyLength {
                questions: 2,
                answers: 1
            }]
        );
    }

    #[test]
    fn test_choice_count() {
        let mut provider = make_valid_provider();
        provider.questions[0] = QuizQuestion::new_text("Only one?", ["Yes"]);
        provider.questions[1] = QuizQuestion::new_text("Too many", ["a", "b", "c", "d", "e"]);
        assert_eq!(
            check_provider(&provider),
            vec![
                Violation::ChoiceCount {
                    question: 0,
                    count: 1
                },
                Violation::ChoiceCount {
                    question: 1,
                    count: 5
                },
            ]
        );
    }

    #[test]
    fn test_answer_out_of_range() {
        let mut provider = make_valid_provider();
        provider.answers[0] = 2;
        assert_eq!(
            check_provider(&provider),
            vec![Violation::AnswerOutOfRange {
                question: 0,
                answer: 2,
                choices: 2
            }]
        );
    }

    #[test]
    fn test_empty_text() {
        let mut provider = make_valid_provider();
        provider.questions[0] = QuizQuestion::new_text("  ", ["Yes", ""]);
        provider.cards[0].description = String::new();
        provider.cards[0].category = String::new();
        assert_eq!(
            check_provider(&provider),
            vec![
                Violation::EmptyPrompt { question: 0 },
                Violation::EmptyChoice {
                    question: 0,
                    choice: 1
                },
                Violation::EmptyCategory { card: 0 },
                Violation::EmptyDescription { card: 0 },
            ]
        );
    }

    #[test]
    fn test_image_urls() {
        assert!(validate_image_url("https://example.com/a.png").is_ok());
        assert!(validate_image_url("http://example.com/a.png?fit=2200%2C2200&ssl=1").is_ok());
        assert!(validate_image_url("example.com/a.png").is_err());
        assert!(validate_image_url("ftp://example.com/a.png").is_err());
        assert!(validate_image_url("").is_err());
    }

    #[test]
    fn test_invalid_image_url_is_reported() {
        let mut provider = make_valid_provider();
        provider.cards[0].image_url = "not a url".to_string();
        let violations = check_provider(&provider);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            Violation::InvalidImageUrl { card: 0, .. }
        ));
    }

    #[test]
    fn test_display() {
        let violation = Violation::ChoiceCount {
            question: 3,
            count: 5,
        };
        assert_eq!(
            violation.to_string(),
            "question 3 has 5 choices, expected between 2 and 4"
        );
    }
}
