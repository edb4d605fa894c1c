//! Blocking stdin prompt helpers
//!
//! Shared by the menu screens. Each prompt re-asks on invalid input and only
//! fails when the stream itself breaks, so a piped run terminates cleanly
//! instead of spinning on an exhausted stdin.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::{MoniError, MoniResult};
use crate::models::CategoryCatalog;

/// Print a prompt and read one trimmed line from stdin
///
/// # Errors
///
/// Fails when stdout cannot be flushed or stdin has reached end of input.
pub fn prompt_string(prompt: &str) -> MoniResult<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Err(MoniError::Io("input stream closed".into()));
    }

    Ok(input.trim().to_string())
}

/// Ask for a positive amount, re-asking until one is entered
pub fn prompt_amount(prompt: &str) -> MoniResult<f64> {
    loop {
        let input = prompt_string(prompt)?;
        match input.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => return Ok(amount),
            Ok(_) => println!("\n{}", "Invalid amount. Please enter a positive number.".red()),
            Err(_) => println!("\n{}", "Invalid amount. Please enter a valid number.".red()),
        }
    }
}

/// Show the category list and ask for a 1-based pick, re-asking until valid
pub fn prompt_category() -> MoniResult<&'static str> {
    println!("\n{}", "Select a category:".magenta());
    for (index, category) in CategoryCatalog::list().iter().enumerate() {
        println!("{}: {}", index + 1, category);
    }

    loop {
        let input = prompt_string("Enter the number of the category: ")?;
        match input.parse::<usize>() {
            Ok(choice) => match CategoryCatalog::select(choice) {
                Ok(category) => return Ok(category),
                Err(_) => {
                    println!("{}", "Invalid choice. Please select a valid category.".red());
                }
            },
            Err(_) => println!("{}", "Invalid input. Please enter a number.".red()),
        }
    }
}
