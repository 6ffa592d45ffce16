use thiserror::Error;

/// Domain-level failures. All variants are recoverable: the menu layer
/// reports them and returns to its loop.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("ID {0} already exists")]
    DuplicateId(u32),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Trainee {0} not found")]
    TraineeNotFound(u32),

    #[error("Trainer {0} not found")]
    TrainerNotFound(u32),

    #[error("Class '{0}' not found")]
    ClassNotFound(String),

    #[error("No trainer named '{0}' exists")]
    UnknownTrainer(String),

    #[error("Class '{0}' is full")]
    ClassFull(String),

    #[error("You are already enrolled in '{0}'")]
    AlreadyEnrolled(String),

    #[error("Class sign-up is a Premium feature. Please upgrade your membership")]
    NotPremium,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
