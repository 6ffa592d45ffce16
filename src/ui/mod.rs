// Terminal rendering helpers for the interactive menus.

use chrono::Weekday;
use colored::Colorize;
use console::style;

use crate::models::{GymClass, PaymentStatus, Trainee, Trainer};

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn banner() {
    println!();
    println!("{}", style("Gym Management System").bold().cyan());
    println!("{}", style("Memberships, trainers, classes and schedules").dim());
}

pub fn header(title: &str) {
    println!();
    println!("{}", style(title).bold().underlined());
    println!();
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn failure(message: &str) {
    println!("{} {}", "✗".red(), message);
}

fn class_line(class: &GymClass) -> String {
    format!(
        "  {}   {} ({})   -   Enrolled: {}/{}",
        class.schedule.time(),
        class.name,
        class.trainer_name,
        class.enrolled,
        class.capacity
    )
}

/// Render a full week of classes grouped by day. Expects input already in
/// calendar order.
pub fn print_week(classes: &[GymClass]) {
    if classes.is_empty() {
        println!("No classes have been scheduled for the week.");
        return;
    }
    for day in WEEK {
        println!("{}", style(format!("--- {} ---", day)).bold());
        let mut found = false;
        for class in classes.iter().filter(|c| c.schedule.day == day) {
            println!("{}", class_line(class));
            found = true;
        }
        if !found {
            println!("  No classes scheduled for this day.");
        }
    }
}

/// Render one day's classes, in time order.
pub fn print_day(day: Weekday, classes: &[GymClass]) {
    if classes.is_empty() {
        println!("No classes are scheduled for {}. Take a rest day!", day);
        return;
    }
    for class in classes {
        println!("{}", class_line(class));
    }
}

pub fn print_trainee_summary(trainee: &Trainee) {
    println!(
        "ID: {}, Name: {}, Contact: {}, Membership: {}",
        trainee.id,
        trainee.name.bold(),
        trainee.contact,
        trainee.package
    );
}

pub fn print_trainer_summary(trainer: &Trainer) {
    println!(
        "ID: {}, Name: {}, Specialization: {}, Contact: {}",
        trainer.id,
        trainer.name.bold(),
        trainer.specialization,
        trainer.contact
    );
}

pub fn print_payment_line(trainee: &Trainee) {
    let status = match trainee.payment_status {
        PaymentStatus::Paid => trainee.payment_status.to_string().green(),
        PaymentStatus::Due => trainee.payment_status.to_string().red(),
    };
    println!(
        "ID: {}, Name: {}, Package: {} ({} months), Status: {}",
        trainee.id, trainee.name, trainee.package, trainee.duration_months, status
    );
}
