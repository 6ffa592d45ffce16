// Role-selection loop: the entry point of an interactive session.

use anyhow::Result;
use dialoguer::Select;

use crate::service::GymService;
use crate::ui;

use super::{admin, trainee, trainer};

const ROLES: [&str; 4] = ["Admin", "Trainer", "Trainee", "Exit"];

pub fn run(service: &GymService) -> Result<()> {
    ui::banner();

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Who are you?")
            .items(&ROLES)
            .default(0)
            .interact_opt();

        // A failed prompt (EOF, closed terminal) ends the session cleanly.
        let choice = match choice {
            Ok(Some(choice)) => choice,
            Ok(None) | Err(_) => break,
        };

        let outcome = match choice {
            0 => admin::run(service),
            1 => trainer::run(service),
            2 => trainee::run(service),
            _ => break,
        };

        if let Err(e) = outcome {
            // Domain errors are reported inside the menus; an error escaping
            // to here means the input stream itself failed, so exit cleanly.
            tracing::debug!("Menu exited with error: {e:#}");
            break;
        }
    }

    println!();
    println!("Exiting Gym Management System. Goodbye!");
    Ok(())
}
