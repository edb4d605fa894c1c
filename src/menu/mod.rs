//! Interactive main menu
//!
//! The loop the binary spends its life in: greet the user, show the balance,
//! and dispatch to the Add Funds, Withdraw Funds and View Logs screens. Every
//! screen returns to the menu; Exit is the only way out.

pub mod prompt;

use colored::Colorize;

use crate::config::Settings;
use crate::display::format_log;
use crate::error::{MoniError, MoniResult};
use crate::services::{LedgerService, PostOutcome};
use crate::storage::Storage;

use prompt::{prompt_amount, prompt_category, prompt_string};

/// Actions reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddFunds,
    WithdrawFunds,
    ViewLogs,
    Exit,
}

/// The interactive menu over one storage directory
pub struct MainMenu<'a> {
    service: LedgerService<'a>,
    settings: &'a Settings,
}

impl<'a> MainMenu<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            service: LedgerService::new(storage),
            settings,
        }
    }

    /// Run the menu loop until the user exits
    ///
    /// # Errors
    ///
    /// Fails when stdin closes mid-session or the balance file cannot be
    /// written. A failed log append is reported on screen but does not end
    /// the session.
    pub fn run(&self) -> MoniResult<()> {
        loop {
            match self.read_action()? {
                MenuAction::AddFunds => self.add_funds()?,
                MenuAction::WithdrawFunds => self.withdraw_funds()?,
                MenuAction::ViewLogs => self.view_logs(),
                MenuAction::Exit => {
                    println!("\n{}", "Goodbye! See you next time.".blue());
                    println!("{}", "=".repeat(40));
                    return Ok(());
                }
            }
        }
    }

    /// Render the menu and read one action, re-asking on invalid input
    fn read_action(&self) -> MoniResult<MenuAction> {
        loop {
            println!(
                "\n{}",
                format!("Welcome back, {}!", self.settings.user).green()
            );
            println!("{}", "=".repeat(43));
            let balance = format!("{} {}", self.service.balance(), self.settings.currency);
            println!("Current Balance: {}\n", balance.blue());
            println!("1: Add Funds");
            println!("2: Withdraw Funds");
            println!("3: View Logs");
            println!("4: Exit");
            println!("{}", "=".repeat(43));

            let input = prompt_string("Please select an option (1-4): ")?;
            match input.parse::<u32>() {
                Ok(1) => return Ok(MenuAction::AddFunds),
                Ok(2) => return Ok(MenuAction::WithdrawFunds),
                Ok(3) => return Ok(MenuAction::ViewLogs),
                Ok(4) => return Ok(MenuAction::Exit),
                Ok(_) => println!("\n{}", "Invalid choice. Please select a valid option.".red()),
                Err(_) => println!("\n{}", "Invalid input. Please enter a number.".red()),
            }
        }
    }

    /// Add Funds screen: amount and reason, then post the deposit
    fn add_funds(&self) -> MoniResult<()> {
        println!("\n{}", "Add Funds".yellow());
        println!("{}", "=".repeat(40));

        let amount = prompt_amount("Enter the amount to add: ")?;
        let reason = prompt_string("Enter the reason for this addition: ")?;

        let outcome = self.service.deposit(amount, &reason)?;
        warn_on_log_error(&outcome);

        println!(
            "\n{}",
            format!(
                "Success! {} {} has been added for '{}'.",
                amount, self.settings.currency, reason
            )
            .green()
        );
        println!(
            "Your new balance is: {} {}.",
            outcome.new_balance, self.settings.currency
        );
        Ok(())
    }

    /// Withdraw Funds screen: amount, reason and category, then post the
    /// withdrawal. Starts over when the balance does not cover the amount.
    fn withdraw_funds(&self) -> MoniResult<()> {
        println!("\n{}", "Withdraw Funds".yellow());
        println!("{}", "=".repeat(40));

        loop {
            let amount = prompt_amount("Enter the amount to withdraw: ")?;
            let reason = prompt_string("Enter the reason for this withdrawal: ")?;
            let category = prompt_category()?;

            match self.service.withdraw(amount, &reason, category) {
                Ok(outcome) => {
                    warn_on_log_error(&outcome);
                    println!(
                        "\n{}",
                        format!(
                            "Success! {} {} has been withdrawn for '{}' under '{}'.",
                            amount, self.settings.currency, reason, category
                        )
                        .green()
                    );
                    println!(
                        "{}",
                        format!(
                            "Your new balance is: {} {}.",
                            outcome.new_balance, self.settings.currency
                        )
                        .green()
                    );
                    return Ok(());
                }
                Err(MoniError::InsufficientBalance {
                    requested,
                    available,
                }) => {
                    println!(
                        "\n{}",
                        format!(
                            "Error: You do not have enough balance to withdraw {} {}.",
                            requested, self.settings.currency
                        )
                        .red()
                    );
                    println!(
                        "{}",
                        format!(
                            "Your current balance is: {} {}.",
                            available, self.settings.currency
                        )
                        .yellow()
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// View Logs screen
    fn view_logs(&self) {
        println!();
        print!(
            "{}",
            format_log(&self.service.history(), &self.settings.currency)
        );
    }
}

/// Report a failed log append without interrupting the session
fn warn_on_log_error(outcome: &PostOutcome) {
    if let Some(err) = &outcome.log_error {
        println!("\n{}", format!("Error saving logs: {err}").red());
    }
}
