use anyhow::Result;
use colored::Colorize;

use crate::storage::seed_data;

pub fn handle_seed(json: bool) -> Result<()> {
    let seed = seed_data();

    if json {
        println!("{}", serde_json::to_string_pretty(&seed)?);
        return Ok(());
    }

    println!("{}", "Users".bold());
    for user in &seed.users {
        let age = user
            .age
            .map(|a| format!(" age {}", a))
            .unwrap_or_default();
        println!("  {} {} <{}>{}", user.id.cyan(), user.name, user.email, age.dimmed());
    }

    println!("{}", "Posts".bold());
    for post in &seed.posts {
        let state = if post.published {
            "published".green()
        } else {
            "draft".dimmed()
        };
        println!(
            "  {} {} [{}] by {}",
            post.id.cyan(),
            post.title,
            state,
            post.author.cyan()
        );
    }

    println!("{}", "Comments".bold());
    for comment in &seed.comments {
        println!(
            "  {} on {}: {}",
            comment.user.cyan(),
            comment.post.cyan(),
            comment.body
        );
    }
    Ok(())
}
