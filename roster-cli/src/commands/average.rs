//! Average command - arithmetic mean of a list of numbers

use anyhow::{Context, Result};
use colored::Colorize;
use roster_core::OperationResult;
use serde::Serialize;

use super::{get_context, read_piped_stdin, wants_json};

#[derive(Serialize)]
struct AverageOutput {
    count: usize,
    average: f64,
}

pub fn run(values: Vec<f64>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let json = wants_json(&ctx, json);

    let numbers = if values.is_empty() {
        match read_piped_stdin()? {
            Some(content) => parse_numbers(&content)?,
            None => Vec::new(),
        }
    } else {
        values
    };

    let result = ctx.stats_service.average(&numbers);

    if json {
        let envelope = match &result {
            Ok(average) => OperationResult::ok(AverageOutput {
                count: numbers.len(),
                average: *average,
            }),
            Err(e) => OperationResult::fail(e.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }

    let average = result?;
    if !json {
        println!("{} {}", "Average:".bold(), average);
        println!("{} value(s)", numbers.len());
    }

    Ok(())
}

/// Parse whitespace- or comma-separated numbers
fn parse_numbers(input: &str) -> Result<Vec<f64>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid number: {:?}", token))
        })
        .collect()
}
