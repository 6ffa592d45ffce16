use chrono::Weekday;

use super::{parse_field, split_fields, CodecError, Record};

/// Weekly time slot for a class, stored as `Day-HH:MM` (e.g. `Mon-10:00`).
///
/// Ordered chronologically: Monday first, then hour and minute. The stored
/// text form sorts days alphabetically, which is not calendar order, so
/// schedule views must sort on this type rather than on the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub day: Weekday,
    pub hour: u8,
    pub minute: u8,
}

impl Schedule {
    pub fn new(day: Weekday, hour: u8, minute: u8) -> anyhow::Result<Self> {
        if hour > 23 {
            anyhow::bail!("Invalid hour: {}", hour);
        }
        if minute > 59 {
            anyhow::bail!("Invalid minute: {}", minute);
        }
        Ok(Self { day, hour, minute })
    }

    /// `HH:MM` portion, for day-grouped displays.
    pub fn time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn sort_key(&self) -> (u32, u8, u8) {
        (self.day.num_days_from_monday(), self.hour, self.minute)
    }
}

impl Ord for Schedule {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Schedule {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}:{:02}", self.day, self.hour, self.minute)
    }
}

impl std::str::FromStr for Schedule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("Expected Day-HH:MM, got '{}'", s))?;
        let day: Weekday = day
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid day: '{}'", day))?;
        let (hour, minute) = time
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Expected HH:MM, got '{}'", time))?;
        if hour.len() != 2 || minute.len() != 2 {
            anyhow::bail!("Expected two-digit hour and minute, got '{}'", time);
        }
        let hour: u8 = hour
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid hour: '{}'", hour))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid minute: '{}'", minute))?;
        Schedule::new(day, hour, minute)
    }
}

/// Gym class data model
///
/// Classes are keyed by name, and nothing enforces name uniqueness; the
/// service treats the first match as the sign-up target and deletes all
/// matches on removal. The trainer reference is by name and is only checked
/// when the class is created.
#[derive(Debug, Clone, PartialEq)]
pub struct GymClass {
    pub name: String,
    pub schedule: Schedule,
    pub trainer_name: String,
    /// 1-100, validated at the prompt layer.
    pub capacity: u32,
    /// Must always equal `trainee_ids.len()`.
    pub enrolled: u32,
    /// Signup order is preserved.
    pub trainee_ids: Vec<u32>,
}

impl GymClass {
    pub fn new(name: String, schedule: Schedule, trainer_name: String, capacity: u32) -> Self {
        Self {
            name,
            schedule,
            trainer_name,
            capacity,
            enrolled: 0,
            trainee_ids: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }

    pub fn has_trainee(&self, trainee_id: u32) -> bool {
        self.trainee_ids.contains(&trainee_id)
    }

    /// Append a trainee to the roster, keeping the enrolled count in step.
    pub fn enroll(&mut self, trainee_id: u32) {
        self.trainee_ids.push(trainee_id);
        self.enrolled += 1;
    }

    /// Drop a trainee from the roster if present, keeping the enrolled count
    /// in step. Returns whether anything was removed.
    pub fn withdraw(&mut self, trainee_id: u32) -> bool {
        if let Some(pos) = self.trainee_ids.iter().position(|&id| id == trainee_id) {
            self.trainee_ids.remove(pos);
            self.enrolled = self.enrolled.saturating_sub(1);
            true
        } else {
            false
        }
    }
}

impl Record for GymClass {
    const FILE_NAME: &'static str = "classes.txt";

    fn encode(&self) -> String {
        let ids: Vec<String> = self.trainee_ids.iter().map(|id| id.to_string()).collect();
        format!(
            "{},{},{},{},{},{}",
            self.name,
            self.schedule,
            self.trainer_name,
            self.capacity,
            self.enrolled,
            ids.join(";")
        )
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let fields = split_fields(line, 6)?;
        let mut trainee_ids = Vec::new();
        for id in fields[5].split(';') {
            if !id.is_empty() {
                trainee_ids.push(parse_field("trainee id", id)?);
            }
        }
        Ok(Self {
            name: fields[0].to_string(),
            schedule: parse_field("schedule", fields[1])?,
            trainer_name: fields[2].to_string(),
            capacity: parse_field("capacity", fields[3])?,
            enrolled: parse_field("enrolled", fields[4])?,
            trainee_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GymClass {
        GymClass::new(
            "Yoga".to_string(),
            "Mon-10:00".parse().unwrap(),
            "Alex".to_string(),
            20,
        )
    }

    #[test]
    fn round_trip_empty_roster() {
        let line = sample().encode();
        assert_eq!(line, "Yoga,Mon-10:00,Alex,20,0,");
        assert_eq!(GymClass::decode(&line).unwrap(), sample());
    }

    #[test]
    fn round_trip_with_roster() {
        let mut class = sample();
        class.enroll(3);
        class.enroll(11);
        let line = class.encode();
        assert_eq!(line, "Yoga,Mon-10:00,Alex,20,2,3;11");
        assert_eq!(GymClass::decode(&line).unwrap(), class);
    }

    #[test]
    fn schedule_parses_case_insensitively() {
        let schedule: Schedule = "sAt-14:30".parse().unwrap();
        assert_eq!(schedule.day, Weekday::Sat);
        assert_eq!(schedule.to_string(), "Sat-14:30");
    }

    #[test]
    fn schedule_rejects_bad_time() {
        assert!("Mon-24:00".parse::<Schedule>().is_err());
        assert!("Mon-10:60".parse::<Schedule>().is_err());
        assert!("Mon-9:00".parse::<Schedule>().is_err());
        assert!("Someday-10:00".parse::<Schedule>().is_err());
        assert!("Mon 10:00".parse::<Schedule>().is_err());
    }

    #[test]
    fn schedule_orders_by_calendar_week() {
        let fri: Schedule = "Fri-18:00".parse().unwrap();
        let sun: Schedule = "Sun-08:00".parse().unwrap();
        let mon_early: Schedule = "Mon-06:15".parse().unwrap();
        let mon_late: Schedule = "Mon-19:00".parse().unwrap();
        // Lexicographic order of the text form would put Sun before Fri.
        assert!(mon_early < mon_late);
        assert!(mon_late < fri);
        assert!(fri < sun);
    }

    #[test]
    fn withdraw_keeps_count_in_step() {
        let mut class = sample();
        class.enroll(3);
        class.enroll(11);
        assert!(class.withdraw(3));
        assert_eq!(class.enrolled, 1);
        assert_eq!(class.trainee_ids, vec![11]);
        assert!(!class.withdraw(3));
        assert_eq!(class.enrolled, 1);
    }
}
