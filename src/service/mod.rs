mod error;

pub use error::ServiceError;

use chrono::Weekday;

use crate::models::{AdminAccount, GymClass, MembershipPackage, Trainee, Trainer};
use crate::storage::Storage;

type Result<T> = std::result::Result<T, ServiceError>;

/// Domain operations over the record store. Each operation reloads the
/// collections it touches, validates, mutates, and saves; no state is cached
/// between calls.
pub struct GymService {
    storage: Storage,
}

impl GymService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    // --- Registration ---

    /// Register a new trainee. The caller is expected to have shown the
    /// membership cost and collected the confirmation before committing.
    pub fn register_trainee(&self, trainee: Trainee) -> Result<()> {
        let mut trainees = self.storage.load_trainees()?;
        if trainees.iter().any(|t| t.id == trainee.id) {
            return Err(ServiceError::DuplicateId(trainee.id));
        }
        tracing::info!("Registering trainee {} ({})", trainee.id, trainee.name);
        trainees.push(trainee);
        self.storage.save_trainees(&trainees)?;
        Ok(())
    }

    pub fn add_trainer(&self, trainer: Trainer) -> Result<()> {
        let mut trainers = self.storage.load_trainers()?;
        if trainers.iter().any(|t| t.id == trainer.id) {
            return Err(ServiceError::DuplicateId(trainer.id));
        }
        tracing::info!("Adding trainer {} ({})", trainer.id, trainer.name);
        trainers.push(trainer);
        self.storage.save_trainers(&trainers)?;
        Ok(())
    }

    /// Add a class. The trainer reference is checked here, at creation time
    /// only. Nothing prevents two classes from sharing a name.
    pub fn add_class(&self, class: GymClass) -> Result<()> {
        let trainers = self.storage.load_trainers()?;
        if !trainers.iter().any(|t| t.name == class.trainer_name) {
            return Err(ServiceError::UnknownTrainer(class.trainer_name));
        }
        let mut classes = self.storage.load_classes()?;
        tracing::info!("Adding class '{}' at {}", class.name, class.schedule);
        classes.push(class);
        self.storage.save_classes(&classes)?;
        Ok(())
    }

    // --- Login ---

    pub fn login_admin(&self, username: &str, password: &str) -> Result<AdminAccount> {
        self.storage
            .load_admins()?
            .into_iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(ServiceError::InvalidCredentials)
    }

    pub fn login_trainer(&self, id: u32, password: &str) -> Result<Trainer> {
        self.storage
            .load_trainers()?
            .into_iter()
            .find(|t| t.id == id && t.password == password)
            .ok_or(ServiceError::InvalidCredentials)
    }

    pub fn login_trainee(&self, id: u32, password: &str) -> Result<Trainee> {
        self.storage
            .load_trainees()?
            .into_iter()
            .find(|t| t.id == id && t.password == password)
            .ok_or(ServiceError::InvalidCredentials)
    }

    // --- Enrollment ---

    /// Enroll a trainee in the first class matching `class_name`. Returns the
    /// updated class for reporting.
    pub fn sign_up_for_class(&self, trainee: &Trainee, class_name: &str) -> Result<GymClass> {
        if trainee.package != MembershipPackage::Premium {
            return Err(ServiceError::NotPremium);
        }

        let mut classes = self.storage.load_classes()?;
        let class = classes
            .iter_mut()
            .find(|c| c.name == class_name)
            .ok_or_else(|| ServiceError::ClassNotFound(class_name.to_string()))?;

        if class.has_trainee(trainee.id) {
            return Err(ServiceError::AlreadyEnrolled(class_name.to_string()));
        }
        if class.is_full() {
            return Err(ServiceError::ClassFull(class_name.to_string()));
        }

        class.enroll(trainee.id);
        let enrolled = class.clone();
        tracing::info!("Trainee {} signed up for '{}'", trainee.id, class_name);
        self.storage.save_classes(&classes)?;
        Ok(enrolled)
    }

    // --- Deletion (with cascades) ---

    /// Delete a trainee and scrub their id from every class roster.
    pub fn delete_trainee(&self, id: u32) -> Result<()> {
        let mut trainees = self.storage.load_trainees()?;
        let before = trainees.len();
        trainees.retain(|t| t.id != id);
        if trainees.len() == before {
            return Err(ServiceError::TraineeNotFound(id));
        }
        self.storage.save_trainees(&trainees)?;

        let mut classes = self.storage.load_classes()?;
        for class in classes.iter_mut() {
            if class.withdraw(id) {
                tracing::debug!("Withdrew trainee {} from '{}'", id, class.name);
            }
        }
        self.storage.save_classes(&classes)?;

        tracing::info!("Deleted trainee {}", id);
        Ok(())
    }

    /// Delete a trainer and every class they teach. Returns how many classes
    /// were removed by the cascade.
    pub fn delete_trainer(&self, id: u32) -> Result<usize> {
        let mut trainers = self.storage.load_trainers()?;
        let name = trainers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .ok_or(ServiceError::TrainerNotFound(id))?;

        trainers.retain(|t| t.id != id);
        self.storage.save_trainers(&trainers)?;

        let mut classes = self.storage.load_classes()?;
        let before = classes.len();
        classes.retain(|c| c.trainer_name != name);
        let removed = before - classes.len();
        if removed > 0 {
            self.storage.save_classes(&classes)?;
        }

        tracing::info!("Deleted trainer {} and {} of their classes", id, removed);
        Ok(removed)
    }

    /// Delete every class with this exact name (names are not unique).
    pub fn delete_class(&self, class_name: &str) -> Result<usize> {
        let mut classes = self.storage.load_classes()?;
        let before = classes.len();
        classes.retain(|c| c.name != class_name);
        let removed = before - classes.len();
        if removed == 0 {
            return Err(ServiceError::ClassNotFound(class_name.to_string()));
        }
        self.storage.save_classes(&classes)?;
        tracing::info!("Deleted {} class(es) named '{}'", removed, class_name);
        Ok(removed)
    }

    // --- Updates ---

    /// Rewrite the stored record matching the trainee's id. A missing record
    /// is a silent no-op.
    pub fn update_trainee(&self, updated: &Trainee) -> Result<()> {
        let mut trainees = self.storage.load_trainees()?;
        for trainee in trainees.iter_mut() {
            if trainee.id == updated.id {
                *trainee = updated.clone();
                break;
            }
        }
        self.storage.save_trainees(&trainees)?;
        Ok(())
    }

    pub fn update_trainer(&self, updated: &Trainer) -> Result<()> {
        let mut trainers = self.storage.load_trainers()?;
        for trainer in trainers.iter_mut() {
            if trainer.id == updated.id {
                *trainer = updated.clone();
                break;
            }
        }
        self.storage.save_trainers(&trainers)?;
        Ok(())
    }

    /// Persist a trainee's measurements and return the updated record.
    pub fn record_bmi(&self, trainee_id: u32, height_m: f32, weight_kg: f32) -> Result<Trainee> {
        let mut trainees = self.storage.load_trainees()?;
        let trainee = trainees
            .iter_mut()
            .find(|t| t.id == trainee_id)
            .ok_or(ServiceError::TraineeNotFound(trainee_id))?;
        trainee.height_m = height_m;
        trainee.weight_kg = weight_kg;
        let updated = trainee.clone();
        self.storage.save_trainees(&trainees)?;
        Ok(updated)
    }

    // --- Queries ---

    pub fn trainees(&self) -> Result<Vec<Trainee>> {
        Ok(self.storage.load_trainees()?)
    }

    pub fn trainers(&self) -> Result<Vec<Trainer>> {
        Ok(self.storage.load_trainers()?)
    }

    pub fn find_trainee(&self, id: u32) -> Result<Option<Trainee>> {
        Ok(self.storage.load_trainees()?.into_iter().find(|t| t.id == id))
    }

    pub fn find_trainer(&self, id: u32) -> Result<Option<Trainer>> {
        Ok(self.storage.load_trainers()?.into_iter().find(|t| t.id == id))
    }

    /// All classes in calendar order (Monday first, then time of day).
    pub fn weekly_schedule(&self) -> Result<Vec<GymClass>> {
        let mut classes = self.storage.load_classes()?;
        classes.sort_by_key(|c| c.schedule);
        Ok(classes)
    }

    /// Classes on one day, in time order.
    pub fn daily_schedule(&self, day: Weekday) -> Result<Vec<GymClass>> {
        let mut classes: Vec<GymClass> = self
            .storage
            .load_classes()?
            .into_iter()
            .filter(|c| c.schedule.day == day)
            .collect();
        classes.sort_by_key(|c| c.schedule);
        Ok(classes)
    }

    pub fn classes_for_trainer(&self, trainer_name: &str) -> Result<Vec<GymClass>> {
        Ok(self
            .storage
            .load_classes()?
            .into_iter()
            .filter(|c| c.trainer_name == trainer_name)
            .collect())
    }

    /// A trainer's classes with the resolved trainee records enrolled in
    /// each, in signup order. Ids with no matching trainee are skipped.
    pub fn roster_for_trainer(&self, trainer_name: &str) -> Result<Vec<(GymClass, Vec<Trainee>)>> {
        let trainees = self.storage.load_trainees()?;
        let mut roster = Vec::new();
        for class in self.classes_for_trainer(trainer_name)? {
            let members: Vec<Trainee> = class
                .trainee_ids
                .iter()
                .filter_map(|id| trainees.iter().find(|t| t.id == *id).cloned())
                .collect();
            roster.push((class, members));
        }
        Ok(roster)
    }
}
