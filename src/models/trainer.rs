use super::{parse_field, split_fields, CodecError, Record};

/// Trainer data model
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    /// 10-digit numeric string, validated at the prompt layer.
    pub contact: String,
    /// Stored in plaintext to match the on-disk format.
    pub password: String,
}

impl Trainer {
    pub fn new(
        id: u32,
        name: String,
        specialization: String,
        contact: String,
        password: String,
    ) -> Self {
        Self {
            id,
            name,
            specialization,
            contact,
            password,
        }
    }
}

impl Record for Trainer {
    const FILE_NAME: &'static str = "trainers.txt";

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.specialization, self.contact, self.password
        )
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let fields = split_fields(line, 5)?;
        Ok(Self {
            id: parse_field("id", fields[0])?,
            name: fields[1].to_string(),
            specialization: fields[2].to_string(),
            contact: fields[3].to_string(),
            password: fields[4].to_string(),
        })
    }
}
