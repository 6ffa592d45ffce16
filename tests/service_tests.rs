use anyhow::Result;
use chrono::Weekday;
use gym_manager_cli::models::{GymClass, MembershipPackage, Schedule, Trainee, Trainer};
use gym_manager_cli::service::{GymService, ServiceError};
use gym_manager_cli::storage::Storage;
use tempfile::TempDir;

fn test_service() -> Result<(TempDir, GymService)> {
    let dir = TempDir::new()?;
    let storage = Storage::init_with_path(dir.path().to_path_buf())?;
    Ok((dir, GymService::new(storage)))
}

fn trainer(id: u32, name: &str) -> Trainer {
    Trainer::new(
        id,
        name.to_string(),
        "Strength".to_string(),
        "5551234567".to_string(),
        "pw".to_string(),
    )
}

fn trainee(id: u32, name: &str, package: MembershipPackage) -> Trainee {
    Trainee::new(
        id,
        name.to_string(),
        "5559876543".to_string(),
        "pw".to_string(),
        package,
        3,
    )
}

fn class(name: &str, schedule: &str, trainer_name: &str, capacity: u32) -> GymClass {
    GymClass::new(
        name.to_string(),
        schedule.parse::<Schedule>().unwrap(),
        trainer_name.to_string(),
        capacity,
    )
}

#[test]
fn register_rejects_duplicate_id_without_persisting() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.register_trainee(trainee(1, "Riley", MembershipPackage::Basic))?;

    let result = service.register_trainee(trainee(1, "Impostor", MembershipPackage::Premium));
    assert!(matches!(result, Err(ServiceError::DuplicateId(1))));

    let trainees = service.trainees()?;
    assert_eq!(trainees.len(), 1);
    assert_eq!(trainees[0].name, "Riley");
    Ok(())
}

#[test]
fn add_trainer_rejects_duplicate_id() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(5, "Alex"))?;

    let result = service.add_trainer(trainer(5, "Other"));
    assert!(matches!(result, Err(ServiceError::DuplicateId(5))));
    assert_eq!(service.trainers()?.len(), 1);
    Ok(())
}

#[test]
fn add_class_requires_existing_trainer() -> Result<()> {
    let (_dir, service) = test_service()?;

    let result = service.add_class(class("Yoga", "Mon-10:00", "Nobody", 20));
    assert!(matches!(result, Err(ServiceError::UnknownTrainer(_))));

    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;
    assert_eq!(service.weekly_schedule()?.len(), 1);
    Ok(())
}

#[test]
fn default_admin_can_log_in() -> Result<()> {
    let (_dir, service) = test_service()?;

    let admin = service.login_admin("admin", "admin123")?;
    assert_eq!(admin.username, "admin");

    let result = service.login_admin("admin", "wrong");
    assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    Ok(())
}

#[test]
fn trainer_and_trainee_login() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.register_trainee(trainee(2, "Riley", MembershipPackage::Basic))?;

    assert_eq!(service.login_trainer(1, "pw")?.name, "Alex");
    assert_eq!(service.login_trainee(2, "pw")?.name, "Riley");

    assert!(matches!(
        service.login_trainer(1, "nope"),
        Err(ServiceError::InvalidCredentials)
    ));
    assert!(matches!(
        service.login_trainee(99, "pw"),
        Err(ServiceError::InvalidCredentials)
    ));
    Ok(())
}

#[test]
fn sign_up_requires_premium() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;

    let basic = trainee(2, "Riley", MembershipPackage::Basic);
    service.register_trainee(basic.clone())?;

    let result = service.sign_up_for_class(&basic, "Yoga");
    assert!(matches!(result, Err(ServiceError::NotPremium)));
    assert_eq!(service.weekly_schedule()?[0].enrolled, 0);
    Ok(())
}

#[test]
fn sign_up_unknown_class() -> Result<()> {
    let (_dir, service) = test_service()?;
    let premium = trainee(2, "Riley", MembershipPackage::Premium);
    service.register_trainee(premium.clone())?;

    let result = service.sign_up_for_class(&premium, "Pilates");
    assert!(matches!(result, Err(ServiceError::ClassNotFound(_))));
    Ok(())
}

#[test]
fn sign_up_twice_is_rejected_and_leaves_count_unchanged() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;

    let premium = trainee(2, "Riley", MembershipPackage::Premium);
    service.register_trainee(premium.clone())?;

    let enrolled = service.sign_up_for_class(&premium, "Yoga")?;
    assert_eq!(enrolled.enrolled, 1);
    assert_eq!(enrolled.trainee_ids, vec![2]);

    let result = service.sign_up_for_class(&premium, "Yoga");
    assert!(matches!(result, Err(ServiceError::AlreadyEnrolled(_))));

    let classes = service.weekly_schedule()?;
    assert_eq!(classes[0].enrolled, 1);
    assert_eq!(classes[0].trainee_ids, vec![2]);
    Ok(())
}

#[test]
fn sign_up_at_capacity_is_rejected() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Spin", "Tue-07:00", "Alex", 1))?;

    let first = trainee(2, "Riley", MembershipPackage::Premium);
    let second = trainee(3, "Sam", MembershipPackage::Premium);
    service.register_trainee(first.clone())?;
    service.register_trainee(second.clone())?;

    service.sign_up_for_class(&first, "Spin")?;
    let result = service.sign_up_for_class(&second, "Spin");
    assert!(matches!(result, Err(ServiceError::ClassFull(_))));

    let classes = service.weekly_schedule()?;
    assert_eq!(classes[0].enrolled, 1);
    assert_eq!(classes[0].trainee_ids, vec![2]);
    Ok(())
}

#[test]
fn deleting_trainee_scrubs_enrollments() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;
    service.add_class(class("Spin", "Tue-07:00", "Alex", 20))?;

    let riley = trainee(2, "Riley", MembershipPackage::Premium);
    let sam = trainee(3, "Sam", MembershipPackage::Premium);
    service.register_trainee(riley.clone())?;
    service.register_trainee(sam.clone())?;

    service.sign_up_for_class(&riley, "Yoga")?;
    service.sign_up_for_class(&sam, "Yoga")?;
    service.sign_up_for_class(&riley, "Spin")?;

    service.delete_trainee(2)?;

    assert!(service.find_trainee(2)?.is_none());
    for class in service.weekly_schedule()? {
        assert!(!class.trainee_ids.contains(&2));
        assert_eq!(class.enrolled as usize, class.trainee_ids.len());
    }
    let monday = service.daily_schedule(Weekday::Mon)?;
    let yoga = &monday[0];
    assert_eq!(yoga.enrolled, 1);
    assert_eq!(yoga.trainee_ids, vec![3]);
    Ok(())
}

#[test]
fn deleting_missing_trainee_fails() -> Result<()> {
    let (_dir, service) = test_service()?;
    let result = service.delete_trainee(99);
    assert!(matches!(result, Err(ServiceError::TraineeNotFound(99))));
    Ok(())
}

#[test]
fn deleting_trainer_cascades_to_their_classes_only() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_trainer(trainer(2, "Sam"))?;
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;
    service.add_class(class("HIIT", "Wed-18:00", "Alex", 15))?;
    service.add_class(class("Spin", "Tue-07:00", "Sam", 10))?;

    let removed = service.delete_trainer(1)?;
    assert_eq!(removed, 2);

    let remaining = service.weekly_schedule()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Spin");
    assert_eq!(remaining[0].trainer_name, "Sam");
    assert!(service.find_trainer(1)?.is_none());
    Ok(())
}

#[test]
fn deleting_trainer_with_no_classes() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    assert_eq!(service.delete_trainer(1)?, 0);
    assert!(matches!(
        service.delete_trainer(1),
        Err(ServiceError::TrainerNotFound(1))
    ));
    Ok(())
}

#[test]
fn deleting_class_removes_every_name_match() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    // Class names are not unique; two 'Yoga' sessions can coexist.
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;
    service.add_class(class("Yoga", "Thu-19:00", "Alex", 20))?;
    service.add_class(class("Spin", "Tue-07:00", "Alex", 10))?;

    assert_eq!(service.delete_class("Yoga")?, 2);
    let remaining = service.weekly_schedule()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Spin");

    assert!(matches!(
        service.delete_class("Yoga"),
        Err(ServiceError::ClassNotFound(_))
    ));
    Ok(())
}

#[test]
fn record_bmi_persists_measurements() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.register_trainee(trainee(2, "Riley", MembershipPackage::Basic))?;

    let updated = service.record_bmi(2, 1.8, 81.0)?;
    let bmi = updated.bmi().unwrap();
    assert!((bmi - 25.0).abs() < 0.01);

    let reloaded = service.find_trainee(2)?.unwrap();
    assert_eq!(reloaded.height_m, 1.8);
    assert_eq!(reloaded.weight_kg, 81.0);
    Ok(())
}

#[test]
fn update_profile_round_trips_through_store() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;

    let mut updated = service.find_trainer(1)?.unwrap();
    updated.specialization = "Mobility".to_string();
    updated.contact = "5550009999".to_string();
    service.update_trainer(&updated)?;

    assert_eq!(service.find_trainer(1)?.unwrap(), updated);
    Ok(())
}

#[test]
fn weekly_schedule_is_in_calendar_order() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Sunrise Yoga", "Sun-08:00", "Alex", 20))?;
    service.add_class(class("HIIT", "Fri-18:00", "Alex", 15))?;
    service.add_class(class("Spin", "Mon-19:00", "Alex", 10))?;
    service.add_class(class("Mobility", "Mon-06:15", "Alex", 10))?;

    let names: Vec<String> = service
        .weekly_schedule()?
        .into_iter()
        .map(|c| c.name)
        .collect();
    // A lexicographic sort of the raw strings would put Sunday before Friday.
    assert_eq!(names, ["Mobility", "Spin", "HIIT", "Sunrise Yoga"]);
    Ok(())
}

#[test]
fn daily_schedule_filters_and_sorts() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Evening Flow", "Mon-19:00", "Alex", 20))?;
    service.add_class(class("Morning Flow", "Mon-06:30", "Alex", 20))?;
    service.add_class(class("Spin", "Tue-07:00", "Alex", 10))?;

    let monday = service.daily_schedule(Weekday::Mon)?;
    let names: Vec<&str> = monday.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Morning Flow", "Evening Flow"]);

    assert!(service.daily_schedule(Weekday::Wed)?.is_empty());
    Ok(())
}

#[test]
fn roster_resolves_trainees_in_signup_order() -> Result<()> {
    let (_dir, service) = test_service()?;
    service.add_trainer(trainer(1, "Alex"))?;
    service.add_class(class("Yoga", "Mon-10:00", "Alex", 20))?;

    let riley = trainee(2, "Riley", MembershipPackage::Premium);
    let sam = trainee(3, "Sam", MembershipPackage::Premium);
    service.register_trainee(riley.clone())?;
    service.register_trainee(sam.clone())?;
    service.sign_up_for_class(&sam, "Yoga")?;
    service.sign_up_for_class(&riley, "Yoga")?;

    let roster = service.roster_for_trainer("Alex")?;
    assert_eq!(roster.len(), 1);
    let (class, members) = &roster[0];
    assert_eq!(class.name, "Yoga");
    let names: Vec<&str> = members.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Sam", "Riley"]);
    Ok(())
}

#[test]
fn corrupt_line_does_not_block_neighbors() -> Result<()> {
    let (dir, service) = test_service()?;
    std::fs::write(
        dir.path().join("trainees.txt"),
        "1,Riley,5559876543,pw,Premium,3,Paid,0,0\ngarbage line\n2,Sam,5550001111,pw,Basic,6,Paid,0,0\n",
    )?;

    let trainees = service.trainees()?;
    assert_eq!(trainees.len(), 2);
    assert_eq!(trainees[0].name, "Riley");
    assert_eq!(trainees[1].name, "Sam");
    Ok(())
}
