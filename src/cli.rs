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

use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use covidfacts_core::error::Fallible;
use covidfacts_core::provider::DataProvider;

use crate::cmd::OutputFormat;
use crate::cmd::cards::print_cards;
use crate::cmd::check::check_data;
use crate::cmd::export::export_data;
use crate::cmd::questions::print_questions;
use crate::cmd::score::score_answers;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::config::Config;
use crate::source::load_provider;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. By default, `covidfacts.toml` in the
    /// current working directory is used if it exists.
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the info cards.
    Cards {
        /// Path to a JSON payload to read instead of the built-in data.
        #[arg(long)]
        payload: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the quiz questions and their choices.
    Questions {
        /// Path to a JSON payload to read instead of the built-in data.
        #[arg(long)]
        payload: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check the integrity of the data.
    Check {
        /// Path to a JSON payload to read instead of the built-in data.
        #[arg(long)]
        payload: Option<String>,
    },
    /// Export the data as a JSON payload.
    Export {
        /// Path to a JSON payload to read instead of the built-in data.
        #[arg(long)]
        payload: Option<String>,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Score a set of quiz answers.
    Score {
        /// Zero-based choice index for each question, in order. Use `-` for an
        /// unanswered question. Commas may separate several answers.
        answers: Vec<String>,
        /// Path to a JSON payload to read instead of the built-in data.
        #[arg(long)]
        payload: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve the data over a JSON API.
    Serve {
        /// Path to a JSON payload to serve instead of the built-in data.
        #[arg(long)]
        payload: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// The port to use for the web server. Default is 8000.
        #[arg(long)]
        port: Option<u16>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config: Config = Config::load(cli.config.as_deref())?;
    // A `--payload` flag wins over the config file.
    let provider = |payload: Option<String>| -> Fallible<Box<dyn DataProvider>> {
        load_provider(payload.or(config.data.payload.clone()).as_deref())
    };
    match cli.command {
        Command::Cards { payload, format } => print_cards(provider(payload)?.as_ref(), format),
        Command::Questions { payload, format } => {
            print_questions(provider(payload)?.as_ref(), format)
        }
        Command::Check { payload } => check_data(provider(payload)?.as_ref()),
        Command::Export { payload, output } => export_data(provider(payload)?.as_ref(), output),
        Command::Score {
            answers,
            payload,
            format,
        } => score_answers(provider(payload)?.as_ref(), &answers, format),
        Command::Serve {
            payload,
            host,
            port,
        } => {
            let server_config = ServerConfig {
                host: host.unwrap_or(config.server.host.clone()),
                port: port.unwrap_or(config.server.port),
                provider: Arc::from(provider(payload)?),
            };
            start_server(server_config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score() {
        let cli = Cli::parse_from(["covidfacts", "score", "1,2", "-", "--format", "json"]);
        match cli.command {
            Command::Score {
                answers, format, ..
            } => {
                assert_eq!(answers, vec!["1,2".to_string(), "-".to_string()]);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected the score command"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["covidfacts", "serve", "--port", "9000", "--config", "x.toml"]);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        match cli.command {
            Command::Serve { port, host, .. } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host, None);
            }
            _ => panic!("expected the serve command"),
        }
    }
}
