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

use std::path::Path;

use covidfacts_core::error::Fallible;
use covidfacts_core::provider::DataProvider;
use covidfacts_core::provider::PayloadProvider;
use covidfacts_core::provider::StaticProvider;

/// Build the provider every command reads from: the given payload file if
/// there is one, the compiled-in data otherwise.
pub fn load_provider(payload: Option<&str>) -> Fallible<Box<dyn DataProvider>> {
    match payload {
        Some(path) => {
            log::info!("Using payload {path}");
            let provider = PayloadProvider::from_file(Path::new(path))?;
            Ok(Box::new(provider))
        }
        None => Ok(Box::new(StaticProvider::new())),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use covidfacts_core::provider::Payload;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_default_is_static() -> Fallible<()> {
        let provider = load_provider(None)?;
        assert_eq!(provider.quiz_questions().len(), 10);
        assert_eq!(provider.info_cards().len(), 4);
        Ok(())
    }

    #[test]
    fn test_payload_file() -> Fallible<()> {
        let mut payload = Payload::from_provider(&StaticProvider::new());
        payload.info_cards.truncate(1);
        let dir = tempdir()?;
        let path = dir.path().join("payload.json");
        write(&path, payload.to_json()?)?;
        let path = path.display().to_string();
        let provider = load_provider(Some(&path))?;
        assert_eq!(provider.info_cards().len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_payload_file() {
        assert!(load_provider(Some("./derpherp.json")).is_err());
    }
}
