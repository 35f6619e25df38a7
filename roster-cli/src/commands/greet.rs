//! Greet command - greeting messages for users

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use roster_core::User;

use super::{get_context, load_users};
use crate::output;

pub fn run(file: Option<&Path>, name: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        let user = User::new(name, "");
        println!("{}", user.greet());
        return Ok(());
    }

    let ctx = get_context()?;
    let users = load_users(&ctx, file)?;

    if users.is_empty() {
        output::info("Nobody to greet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Greeting", "Email", "Adult"]);

    for user in &users {
        let adult = if user.is_adult() {
            "yes".green().to_string()
        } else {
            "no".dimmed().to_string()
        };
        table.add_row(vec![user.greet(), user.email.clone(), adult]);
    }

    println!("{}", table);
    Ok(())
}
