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

use covidfacts_core::error::ErrorReport;
use covidfacts_core::error::Fallible;
use covidfacts_core::provider::DataProvider;
use covidfacts_core::quiz::QuizReport;
use covidfacts_core::quiz::QuizSession;

use crate::cmd::OutputFormat;

/// Marker for a question the user skipped.
const UNANSWERED: &str = "-";

pub fn score_answers(
    provider: &dyn DataProvider,
    answers: &[String],
    format: OutputFormat,
) -> Fallible<()> {
    let selections = parse_answers(answers)?;
    let mut session = QuizSession::with_selections(provider, &selections)?;
    let report = session.mark()?;
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => render_report(&report),
    };
    println!("{output}");
    Ok(())
}

/// Parse zero-based choice indices. Arguments may also hold several
/// comma-separated answers, e.g. `1,2,-,0`.
fn parse_answers(answers: &[String]) -> Fallible<Vec<Option<usize>>> {
    let mut selections = Vec::new();
    for arg in answers {
        for answer in arg.split(',').map(str::trim).filter(|a| !a.is_empty()) {
            if answer == UNANSWERED {
                selections.push(None);
            } else {
                let choice: usize = answer
                    .parse()
                    .map_err(|_| ErrorReport::new(format!("invalid answer: {answer}")))?;
                selections.push(Some(choice));
            }
        }
    }
    Ok(selections)
}

fn render_report(report: &QuizReport) -> String {
    let mut lines: Vec<String> = report
        .results
        .iter()
        .map(|result| {
            let number = result.question + 1;
            match result.selected {
                None => format!("Question {number}: unanswered (correct answer {})", result.answer),
                Some(_) if result.correct => format!("Question {number}: correct"),
                Some(selected) => format!(
                    "Question {number}: incorrect (answered {selected}, correct answer {})",
                    result.answer
                ),
            }
        })
        .collect();
    lines.push(format!(
        "Score: {}/{} ({:.0}%)",
        report.correct,
        report.total,
        report.percentage()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use covidfacts_core::provider::StaticProvider;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_answers() -> Fallible<()> {
        assert_eq!(
            parse_answers(&args(&["1", "2,-", " 0 , 3"]))?,
            vec![Some(1), Some(2), None, Some(0), Some(3)]
        );
        assert_eq!(parse_answers(&[])?, Vec::new());
        Ok(())
    }

    #[test]
    fn test_parse_invalid_answer() {
        let err = parse_answers(&args(&["1", "x"])).err().unwrap();
        assert_eq!(err.to_string(), "error: invalid answer: x");
        assert!(parse_answers(&args(&["-1"])).is_err());
    }

    #[test]
    fn test_render_report() -> Fallible<()> {
        let provider = StaticProvider::new();
        let selections = parse_answers(&args(&["1,0,-"]))?;
        let report = QuizSession::with_selections(&provider, &selections)?.mark()?;
        let text = render_report(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Question 1: correct");
        assert_eq!(
            lines[1],
            "Question 2: incorrect (answered 0, correct answer 2)"
        );
        assert_eq!(lines[2], "Question 3: unanswered (correct answer 1)");
        assert_eq!(lines[10], "Score: 1/10 (10%)");
        Ok(())
    }

    #[test]
    fn test_score_answers() {
        let provider = StaticProvider::new();
        let answers = args(&["1,2,1,0,0,0,3,1,0,2"]);
        assert!(score_answers(&provider, &answers, OutputFormat::Text).is_ok());
        assert!(score_answers(&provider, &args(&["9"]), OutputFormat::Json).is_err());
    }
}
