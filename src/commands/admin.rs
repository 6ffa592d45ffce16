use anyhow::Result;
use chrono::{Datelike, Local};
use dialoguer::Select;

use crate::models::{GymClass, Trainer};
use crate::service::GymService;
use crate::ui;

use super::prompts;

const MENU: [&str; 13] = [
    "Add trainer",
    "Add class",
    "Weekly schedule",
    "Today's schedule",
    "Search trainee by ID",
    "Search trainer by ID",
    "Delete trainee",
    "Delete trainer",
    "Delete class",
    "List all trainees",
    "List all trainers",
    "Trainee payment status",
    "Logout",
];

pub fn run(service: &GymService) -> Result<()> {
    ui::header("Admin Login");
    let username = prompts::text("Username")?;
    let password = prompts::password("Password")?;

    match service.login_admin(&username, &password) {
        Ok(_) => ui::success("Admin login successful!"),
        Err(e) => {
            ui::failure(&e.to_string());
            return Ok(());
        }
    }

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Admin menu")
            .items(&MENU)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => add_trainer(service),
            1 => add_class(service),
            2 => weekly_schedule(service),
            3 => daily_schedule(service),
            4 => search_trainee(service),
            5 => search_trainer(service),
            6 => delete_trainee(service),
            7 => delete_trainer(service),
            8 => delete_class(service),
            9 => list_trainees(service),
            10 => list_trainers(service),
            11 => payment_status(service),
            _ => break,
        };
        outcome?;
    }

    Ok(())
}

fn add_trainer(service: &GymService) -> Result<()> {
    ui::header("Add Trainer");
    let id = prompts::number("Trainer ID")?;
    let name = prompts::text("Name")?;
    let specialization = prompts::text("Specialization")?;
    let contact = prompts::contact("Contact (10 digits)")?;
    let password = prompts::password("Password")?;

    match service.add_trainer(Trainer::new(id, name, specialization, contact, password)) {
        Ok(()) => ui::success("Trainer added successfully!"),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn add_class(service: &GymService) -> Result<()> {
    ui::header("Add Class");
    let name = prompts::text("Class name (e.g. 'Leg Day', 'Yoga', 'HIIT')")?;
    let schedule = prompts::schedule("Schedule (Day-HH:MM, e.g. 'Mon-10:00')")?;
    let trainer_name = prompts::text("Trainer name (must exist)")?;
    let capacity = prompts::number_in_range("Capacity", 1, 100)?;

    match service.add_class(GymClass::new(name, schedule, trainer_name, capacity)) {
        Ok(()) => ui::success("Class added successfully!"),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn weekly_schedule(service: &GymService) -> Result<()> {
    ui::header("Weekly Class Schedule");
    ui::print_week(&service.weekly_schedule()?);
    Ok(())
}

fn daily_schedule(service: &GymService) -> Result<()> {
    let today = Local::now().weekday();
    ui::header(&format!("Classes for Today ({})", today));
    ui::print_day(today, &service.daily_schedule(today)?);
    Ok(())
}

fn search_trainee(service: &GymService) -> Result<()> {
    let id = prompts::number("Trainee ID to search")?;
    match service.find_trainee(id)? {
        Some(trainee) => ui::print_trainee_summary(&trainee),
        None => ui::failure("Trainee not found!"),
    }
    Ok(())
}

fn search_trainer(service: &GymService) -> Result<()> {
    let id = prompts::number("Trainer ID to search")?;
    match service.find_trainer(id)? {
        Some(trainer) => {
            ui::header("Trainer Details");
            println!("ID: {}", trainer.id);
            println!("Name: {}", trainer.name);
            println!("Specialization: {}", trainer.specialization);
            println!("Contact: {}", trainer.contact);
        }
        None => ui::failure("Trainer not found!"),
    }
    Ok(())
}

fn delete_trainee(service: &GymService) -> Result<()> {
    let id = prompts::number("Trainee ID to delete")?;
    match service.delete_trainee(id) {
        Ok(()) => ui::success("Trainee deleted successfully!"),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn delete_trainer(service: &GymService) -> Result<()> {
    let id = prompts::number("Trainer ID to delete")?;
    match service.delete_trainer(id) {
        Ok(0) => ui::success("Trainer deleted successfully! (No associated classes found)"),
        Ok(n) => ui::success(&format!(
            "Trainer and {} associated class(es) deleted successfully!",
            n
        )),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn delete_class(service: &GymService) -> Result<()> {
    let name = prompts::text("Class name to delete")?;
    match service.delete_class(&name) {
        Ok(_) => ui::success(&format!("Class '{}' deleted successfully!", name)),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn list_trainees(service: &GymService) -> Result<()> {
    ui::header("Trainees");
    let trainees = service.trainees()?;
    if trainees.is_empty() {
        println!("No trainees enrolled.");
    }
    for trainee in &trainees {
        ui::print_trainee_summary(trainee);
    }
    Ok(())
}

fn list_trainers(service: &GymService) -> Result<()> {
    ui::header("Trainers");
    let trainers = service.trainers()?;
    if trainers.is_empty() {
        println!("No trainers registered.");
    }
    for trainer in &trainers {
        ui::print_trainer_summary(trainer);
    }
    Ok(())
}

fn payment_status(service: &GymService) -> Result<()> {
    ui::header("Trainee Payment Status");
    let trainees = service.trainees()?;
    if trainees.is_empty() {
        println!("No trainees registered.");
    }
    for trainee in &trainees {
        ui::print_payment_line(trainee);
    }
    Ok(())
}
