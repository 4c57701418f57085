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

use covidfacts_core::error::Fallible;
use covidfacts_core::provider::DataProvider;

use crate::cmd::OutputFormat;

pub fn print_questions(provider: &dyn DataProvider, format: OutputFormat) -> Fallible<()> {
    let output = render_questions(provider, format)?;
    println!("{output}");
    Ok(())
}

fn render_questions(provider: &dyn DataProvider, format: OutputFormat) -> Fallible<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(provider.quiz_questions())?),
        OutputFormat::Text => {
            let mut output = String::new();
            for (idx, question) in provider.quiz_questions().iter().enumerate() {
                if idx > 0 {
                    output.push('\n');
                }
                output.push_str(&format!("{}. {}\n", idx + 1, question.prompt));
                for (choice_idx, choice) in question.choices.iter().enumerate() {
                    output.push_str(&format!("   [{choice_idx}] {}\n", choice.label));
                }
            }
            Ok(output.trim_end().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use covidfacts_core::provider::StaticProvider;

    use super::*;

    #[test]
    fn test_text() -> Fallible<()> {
        let output = render_questions(&StaticProvider::new(), OutputFormat::Text)?;
        assert!(output.starts_with("1. What does COVID-19 stand for?\n   [0] It's a term"));
        assert!(output.contains("10. Can COVID-19 be cured?\n"));
        assert!(output.ends_with("[2] No – but most people get better by themselves"));
        Ok(())
    }

    #[test]
    fn test_json() -> Fallible<()> {
        let output = render_questions(&StaticProvider::new(), OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&output)?;
        assert_eq!(value[0]["text"], "What does COVID-19 stand for?");
        assert_eq!(value[0]["possibilities"].as_array().map(|a| a.len()), Some(2));
        Ok(())
    }
}
