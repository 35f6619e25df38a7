//! Stats command - summarize a list of users

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{get_context, load_users, wants_json};
use crate::output;

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let users = load_users(&ctx, file)?;
    let report = ctx.stats_service.report(&users);

    if wants_json(&ctx, json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "User Statistics".bold());
    println!();

    let stats = &report.statistics;
    let average_age = report
        .average_age
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string());

    let mut table = output::create_table();
    table.add_row(vec!["Total", &stats.total.to_string()]);
    table.add_row(vec!["Adults", &stats.adults.to_string()]);
    table.add_row(vec!["With email", &stats.with_email.to_string()]);
    table.add_row(vec!["Average age", &average_age]);

    println!("{}", table);

    if stats.total == 0 {
        println!();
        output::warning("No users found in input.");
    }

    Ok(())
}
