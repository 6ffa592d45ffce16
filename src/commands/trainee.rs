use anyhow::Result;
use chrono::{Datelike, Local};
use dialoguer::Select;

use crate::models::{membership_cost, BmiCategory, MembershipPackage, Trainee, BMI_DISCLAIMER};
use crate::service::GymService;
use crate::ui;

use super::prompts;

const MENU: [&str; 7] = [
    "View profile",
    "Today's schedule",
    "Weekly schedule",
    "Update profile",
    "Calculate BMI",
    "Sign up for a class",
    "Logout",
];

pub fn run(service: &GymService) -> Result<()> {
    let choice = Select::new()
        .with_prompt("Trainee menu")
        .items(&["Register", "Login"])
        .default(0)
        .interact()?;

    match choice {
        0 => register(service),
        _ => login(service),
    }
}

fn register(service: &GymService) -> Result<()> {
    ui::header("Register Trainee");
    let id = prompts::number("New trainee ID")?;
    let name = prompts::text("Name")?;
    let contact = prompts::contact("Contact (10 digits)")?;

    let package = match Select::new()
        .with_prompt("Membership package")
        .items(&[
            "Basic (Access to gym floor)",
            "Premium (Access to gym floor + all classes)",
        ])
        .default(0)
        .interact()?
    {
        1 => MembershipPackage::Premium,
        _ => MembershipPackage::Basic,
    };

    let duration = match Select::new()
        .with_prompt("Membership duration")
        .items(&["3 months", "6 months"])
        .default(0)
        .interact()?
    {
        1 => 6,
        _ => 3,
    };

    let cost = membership_cost(package, duration);
    println!(
        "Total cost for {} membership for {} months is ${}.",
        package, duration, cost
    );

    if !prompts::confirm("Confirm registration?")? {
        println!("Registration cancelled.");
        return Ok(());
    }

    let password = prompts::password("Create password")?;

    match service.register_trainee(Trainee::new(id, name, contact, password, package, duration)) {
        Ok(()) => ui::success("Trainee registered and payment confirmed successfully!"),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn login(service: &GymService) -> Result<()> {
    ui::header("Trainee Login");
    let id = prompts::number("Trainee ID")?;
    let password = prompts::password("Password")?;

    let mut trainee = match service.login_trainee(id, &password) {
        Ok(trainee) => {
            ui::success("Login successful!");
            trainee
        }
        Err(e) => {
            ui::failure(&e.to_string());
            return Ok(());
        }
    };

    loop {
        println!();
        let choice = Select::new()
            .with_prompt(format!("Trainee menu ({})", trainee.name))
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => view_profile(&trainee),
            1 => {
                let today = Local::now().weekday();
                ui::header(&format!("Classes for Today ({})", today));
                ui::print_day(today, &service.daily_schedule(today)?);
            }
            2 => {
                ui::header("Weekly Class Schedule");
                ui::print_week(&service.weekly_schedule()?);
            }
            3 => update_profile(service, &mut trainee)?,
            4 => calculate_bmi(service, &mut trainee)?,
            5 => sign_up(service, &trainee)?,
            _ => break,
        }
    }

    Ok(())
}

fn view_profile(trainee: &Trainee) {
    ui::header("Profile");
    println!("Name: {}", trainee.name);
    println!("Contact: {}", trainee.contact);
    println!(
        "Membership: {} ({} months)",
        trainee.package, trainee.duration_months
    );
    println!("Payment status: {}", trainee.payment_status);
}

fn update_profile(service: &GymService, trainee: &mut Trainee) -> Result<()> {
    ui::header("Update Trainee Profile");
    trainee.name = prompts::text("New name")?;
    trainee.contact = prompts::contact("New contact (10 digits)")?;
    trainee.password = prompts::password("New password")?;

    match service.update_trainee(trainee) {
        Ok(()) => ui::success("Profile updated successfully!"),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn calculate_bmi(service: &GymService, trainee: &mut Trainee) -> Result<()> {
    let height_m = prompts::measurement("Height (meters)", 0.5, 3.0)?;
    let weight_kg = prompts::measurement("Weight (kg)", 20.0, 300.0)?;

    match service.record_bmi(trainee.id, height_m, weight_kg) {
        Ok(updated) => {
            *trainee = updated;
            match trainee.bmi() {
                Some(bmi) => {
                    println!("Your BMI is: {:.2}", bmi);
                    let category = BmiCategory::classify(bmi);
                    ui::header("General Fitness Feedback");
                    println!("Category: {}", category);
                    println!("Suggestion: {}", category.advice());
                    println!();
                    println!("** DISCLAIMER **");
                    println!("{}", BMI_DISCLAIMER);
                }
                None => println!("Could not calculate BMI with the provided values."),
            }
        }
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}

fn sign_up(service: &GymService, trainee: &Trainee) -> Result<()> {
    let class_name = prompts::text("Full class name to sign up for")?;
    match service.sign_up_for_class(trainee, &class_name) {
        Ok(class) => ui::success(&format!(
            "{} signed up successfully for {} ({})!",
            trainee.name, class.name, class.schedule
        )),
        Err(e) => ui::failure(&e.to_string()),
    }
    Ok(())
}
