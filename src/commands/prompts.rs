// Prompt helpers wrapping dialoguer with the validation rules the record
// format needs. Free-text fields must stay free of the codec's delimiters,
// so that rule is enforced here rather than in the codec.

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

use crate::models::Schedule;

/// Non-empty free text without record delimiters.
pub fn text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                Err("Input cannot be empty".to_string())
            } else if trimmed.contains(',') || trimmed.contains(';') {
                Err("Input cannot contain ',' or ';'".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Exactly 10 digits.
pub fn contact(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            let trimmed = input.trim();
            if trimmed.len() != 10 {
                Err("Contact number must be exactly 10 digits".to_string())
            } else if !trimmed.chars().all(|c| c.is_ascii_digit()) {
                Err("Contact number must contain only digits".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn number(prompt: &str) -> Result<u32> {
    let value: u32 = Input::new().with_prompt(prompt).interact_text()?;
    Ok(value)
}

pub fn number_in_range(prompt: &str, min: u32, max: u32) -> Result<u32> {
    let value: u32 = Input::new()
        .with_prompt(prompt)
        .validate_with(move |input: &u32| -> Result<(), String> {
            if (min..=max).contains(input) {
                Ok(())
            } else {
                Err(format!("Input must be between {} and {}", min, max))
            }
        })
        .interact_text()?;
    Ok(value)
}

pub fn measurement(prompt: &str, min: f32, max: f32) -> Result<f32> {
    let value: f32 = Input::new()
        .with_prompt(prompt)
        .validate_with(move |input: &f32| -> Result<(), String> {
            if (min..=max).contains(input) {
                Ok(())
            } else {
                Err(format!("Input must be between {} and {}", min, max))
            }
        })
        .interact_text()?;
    Ok(value)
}

/// `Day-HH:MM` slot, e.g. 'Mon-10:00' or 'sat-14:30'.
pub fn schedule(prompt: &str) -> Result<Schedule> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            input
                .trim()
                .parse::<Schedule>()
                .map(|_| ())
                .map_err(|_| "Invalid format. Use Day-HH:MM (e.g. 'Mon-10:00')".to_string())
        })
        .interact_text()?;
    value.trim().parse()
}

/// Password entry with echo suppressed.
pub fn password(prompt: &str) -> Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).interact()?)
}
