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

pub fn print_cards(provider: &dyn DataProvider, format: OutputFormat) -> Fallible<()> {
    let output = render_cards(provider, format)?;
    println!("{output}");
    Ok(())
}

fn render_cards(provider: &dyn DataProvider, format: OutputFormat) -> Fallible<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(provider.info_cards())?),
        OutputFormat::Text => {
            let cards: Vec<String> = provider
                .info_cards()
                .iter()
                .map(|card| {
                    format!(
                        "{}\n{}\n\n{}",
                        card.category, card.image_url, card.description
                    )
                })
                .collect();
            Ok(cards.join("\n\n---\n\n"))
        }
    }
}
