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

use serde::Deserialize;
use serde::Serialize;

/// A content tile shown in the list view.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct InfoCard {
    /// The card's heading, e.g. "N-95 Masks".
    #[serde(rename = "type")]
    pub category: String,
    /// Absolute URL of the card's picture.
    pub image_url: String,
    pub description: String,
}

impl InfoCard {
    pub fn new(
        category: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            image_url: image_url.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_deserialize() -> Fallible<()> {
        let json = r#"{
            "type": "Gloves",
            "image_url": "https://example.com/gloves.png",
            "description": "A glove is a garment covering the whole hand."
        }"#;
        let card: InfoCard = serde_json::from_str(json)?;
        assert_eq!(card.category, "Gloves");
        assert_eq!(card.image_url, "https://example.com/gloves.png");
        Ok(())
    }

    #[test]
    fn test_missing_description() {
        let json = r#"{"type": "Gloves", "image_url": "https://example.com/gloves.png"}"#;
        assert!(serde_json::from_str::<InfoCard>(json).is_err());
    }
}
