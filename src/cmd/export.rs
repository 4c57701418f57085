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

use std::fs::write;

use covidfacts_core::error::Fallible;
use covidfacts_core::provider::DataProvider;
use covidfacts_core::provider::Payload;

/// Write the full data set in the wire shape, either to a file or to stdout.
pub fn export_data(provider: &dyn DataProvider, output: Option<String>) -> Fallible<()> {
    let json = Payload::from_provider(provider).to_json()?;
    match output {
        Some(path) => {
            write(&path, json)?;
            log::info!("Wrote payload to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use covidfacts_core::provider::PayloadProvider;
    use covidfacts_core::provider::StaticProvider;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_export_to_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("export.json");
        let provider = StaticProvider::new();
        export_data(&provider, Some(path.display().to_string()))?;
        let exported = PayloadProvider::from_json(&read_to_string(&path)?)?;
        assert_eq!(exported.payload(), &Payload::from_provider(&provider));
        Ok(())
    }

    #[test]
    fn test_export_to_missing_directory() {
        let result = export_data(
            &StaticProvider::new(),
            Some("./derpherp/export.json".to_string()),
        );
        assert!(result.is_err());
    }
}
