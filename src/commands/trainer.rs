use anyhow::Result;
use dialoguer::Select;

use crate::models::Trainer;
use crate::service::GymService;
use crate::ui;

use super::prompts;

const MENU: [&str; 5] = [
    "View profile",
    "View your classes",
    "View your trainees",
    "Update profile",
    "Logout",
];

pub fn run(service: &GymService) -> Result<()> {
    ui::header("Trainer Login");
    let id = prompts::number("Trainer ID")?;
    let password = prompts::password("Password")?;

    let mut trainer = match service.login_trainer(id, &password) {
        Ok(trainer) => {
            ui::success("Trainer login successful!");
            trainer
        }
        Err(e) => {
            ui::failure(&e.to_string());
            return Ok(());
        }
    };

    loop {
        println!();
        let choice = Select::new()
            .with_prompt(format!("Trainer menu ({})", trainer.name))
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => view_profile(&trainer),
            1 => view_classes(service, &trainer)?,
            2 => view_trainees(service, &trainer)?,
            3 => update_profile(service, &mut trainer)?,
            _ => break,
        }
    }

    Ok(())
}

fn view_profile(trainer: &Trainer) {
    ui::header("Trainer Profile");
    println!("Name: {}", trainer.name);
    println!("Specialization: {}", trainer.specialization);
    println!("Contact: {}", trainer.contact);
}

fn view_classes(service: &GymService, trainer: &Trainer) -> Result<()> {
    ui::header(&format!("Classes Taught by {}", trainer.name));
    let classes = service.classes_for_trainer(&trainer.name)?;
    if classes.is_empty() {
        println!("No classes assigned.");
    }
    for class in &classes {
        println!(
            "Class: {}, Schedule: {}, Capacity: {}, Enrolled: {}",
            class.name, class.schedule, class.capacity, class.enrolled
        );
    }
    Ok(())
}

fn view_trainees(service: &GymService, trainer: &Trainer) -> Result<()> {
    ui::header(&format!("Trainees in Classes Taught by {}", trainer.name));
    let roster = service.roster_for_trainer(&trainer.name)?;
    if roster.is_empty() {
        println!("No classes assigned, thus no trainees.");
    }
    for (class, members) in &roster {
        println!("Class: {}", class.name);
        if members.is_empty() {
            println!("  No trainees enrolled.");
        }
        for trainee in members {
            println!("  ID: {}, Name: {}", trainee.id, trainee.name);
        }
    }
    Ok(())
}

/// Re-prompt every profile field, then persist. The logged-in session value
/// is updated in place so later menu actions see the new details.
fn update_profile(service: &GymService, trainer: &mut Trainer) -> Result<()> {
    ui::header("Update Trainer Profile");
    trainer.name = prompts::text("New name")?;
    trainer.specialization = prompts::text("New specialization")?;
    trainer.contact = prompts::contact("New contact (10 digits)")?;
    trainer.password = prompts::password("New password")?;

    match service.update_trainer(trainer) {
        Ok(()) => ui::success("Profile updated successfully!"),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}
