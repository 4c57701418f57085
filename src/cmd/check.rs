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

use covidfacts_core::check::check_provider;
use covidfacts_core::error::Fallible;
use covidfacts_core::error::fail;
use covidfacts_core::provider::DataProvider;

pub fn check_data(provider: &dyn DataProvider) -> Fallible<()> {
    let violations = check_provider(provider);
    if violations.is_empty() {
        println!("ok");
        return Ok(());
    }
    for violation in violations.iter() {
        println!("{violation}");
    }
    fail(format!("found {} problem(s).", violations.len()))
}
