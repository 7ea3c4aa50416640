//! Choice Ranker CLI
//!
//! Reads one evaluation request (JSON or YAML) from stdin and prints the
//! comparison result as pretty JSON. Criteria are scored from option
//! attributes using the request's optional `rules` table.

use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use choice_ranker::adapters::scoring::{AttributeScorer, ScoringRule};
use choice_ranker::application::DecisionEngine;
use choice_ranker::config::{AppConfig, LoggingConfig};
use choice_ranker::domain::comparison::EvaluationRequest;

/// Evaluation request plus the scoring rules for the attribute scorer.
#[derive(Debug, Deserialize)]
struct RankRequest {
    #[serde(flatten)]
    request: EvaluationRequest,
    #[serde(default)]
    rules: BTreeMap<String, ScoringRule>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load_validated()?;

    init_tracing(&config.logging)?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read request from stdin")?;
    let RankRequest { request, rules } = parse_request(&input)?;

    info!(rules = rules.len(), "Loaded evaluation request");

    let scorer = Arc::new(AttributeScorer::from_rules(rules));
    let engine = DecisionEngine::with_settings(scorer, config.engine.engine_settings());
    let result = engine.evaluate(&request).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Parses JSON when the input looks like a JSON object, YAML otherwise.
fn parse_request(input: &str) -> Result<RankRequest> {
    if input.trim_start().starts_with('{') {
        serde_json::from_str(input).context("Failed to parse JSON request")
    } else {
        serde_yaml::from_str(input).context("Failed to parse YAML request")
    }
}

/// Initialize tracing subscriber on stderr so stdout carries only the result
fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_request_with_rules() {
        let input = r#"{
            "options": [{ "id": "a", "cost": 100 }, { "id": "b", "cost": 50 }],
            "criteria": ["cost"],
            "rules": { "cost": { "kind": "inverse_linear", "attribute": "cost", "divisor": 20 } }
        }"#;

        let parsed = parse_request(input).unwrap();

        assert_eq!(parsed.request.options.len(), 2);
        assert_eq!(parsed.request.options[1].cost, Some(50.0));
        assert_eq!(
            parsed.rules.get("cost"),
            Some(&ScoringRule::inverse_linear("cost", 20.0))
        );
    }

    #[test]
    fn parses_yaml_request_without_rules() {
        let input = "
options:
  - id: a
    attributes:
      speed: 7
  - id: b
    attributes:
      speed: 4
criteria: [speed]
constraints:
  maxCost: 80
";

        let parsed = parse_request(input).unwrap();

        assert_eq!(parsed.request.criteria, vec!["speed".to_string()]);
        assert_eq!(parsed.request.constraints.max_cost, Some(80.0));
        assert!(parsed.rules.is_empty());
    }
}
