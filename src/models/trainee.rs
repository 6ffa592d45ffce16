use super::{parse_field, split_fields, CodecError, Record};

/// Trainee data model
#[derive(Debug, Clone, PartialEq)]
pub struct Trainee {
    pub id: u32,
    pub name: String,
    pub contact: String,
    /// Stored in plaintext to match the on-disk format.
    pub password: String,
    pub package: MembershipPackage,
    /// 3 or 6 months.
    pub duration_months: u32,
    pub payment_status: PaymentStatus,
    /// 0.0 means "not recorded yet".
    pub height_m: f32,
    /// 0.0 means "not recorded yet".
    pub weight_kg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipPackage {
    /// Access to the gym floor only.
    Basic,
    /// Gym floor plus all classes.
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Due,
}

impl Trainee {
    /// Register a new trainee. Payment is confirmed as part of registration,
    /// so the status starts out Paid; height and weight stay unset until the
    /// trainee records a BMI measurement.
    pub fn new(
        id: u32,
        name: String,
        contact: String,
        password: String,
        package: MembershipPackage,
        duration_months: u32,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            password,
            package,
            duration_months,
            payment_status: PaymentStatus::Paid,
            height_m: 0.0,
            weight_kg: 0.0,
        }
    }

    /// Body mass index, or None while height/weight are unset.
    pub fn bmi(&self) -> Option<f32> {
        if self.height_m > 0.0 && self.weight_kg > 0.0 {
            Some(self.weight_kg / (self.height_m * self.height_m))
        } else {
            None
        }
    }
}

/// Fixed price table, used for display at registration time only.
/// Cost is never persisted.
pub fn membership_cost(package: MembershipPackage, duration_months: u32) -> u32 {
    match (package, duration_months) {
        (MembershipPackage::Basic, 3) => 100,
        (MembershipPackage::Basic, _) => 180,
        (MembershipPackage::Premium, 3) => 150,
        (MembershipPackage::Premium, _) => 270,
    }
}

impl std::fmt::Display for MembershipPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipPackage::Basic => write!(f, "Basic"),
            MembershipPackage::Premium => write!(f, "Premium"),
        }
    }
}

impl std::str::FromStr for MembershipPackage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(MembershipPackage::Basic),
            "premium" => Ok(MembershipPackage::Premium),
            _ => Err(anyhow::anyhow!("Invalid membership package: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Due => write!(f, "Due"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "due" => Ok(PaymentStatus::Due),
            _ => Err(anyhow::anyhow!("Invalid payment status: {}", s)),
        }
    }
}

impl Record for Trainee {
    const FILE_NAME: &'static str = "trainees.txt";

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.id,
            self.name,
            self.contact,
            self.password,
            self.package,
            self.duration_months,
            self.payment_status,
            self.height_m,
            self.weight_kg
        )
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let fields = split_fields(line, 9)?;
        Ok(Self {
            id: parse_field("id", fields[0])?,
            name: fields[1].to_string(),
            contact: fields[2].to_string(),
            password: fields[3].to_string(),
            package: parse_field("package", fields[4])?,
            duration_months: parse_field("duration", fields[5])?,
            payment_status: parse_field("paymentStatus", fields[6])?,
            height_m: parse_field("height", fields[7])?,
            weight_kg: parse_field("weight", fields[8])?,
        })
    }
}

/// Standard BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

pub const BMI_DISCLAIMER: &str = "These suggestions are for informational purposes only and do not \
constitute professional medical advice. Always consult with a healthcare provider before starting \
any new fitness or diet program.";

impl BmiCategory {
    pub fn classify(bmi: f32) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// General fitness suggestion shown alongside the category.
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Focus on strength training to build healthy muscle mass. Consider consulting a \
                 nutritionist to ensure you're getting enough calories and nutrients."
            }
            BmiCategory::NormalWeight => {
                "Great job! Maintain your health with a balanced routine of cardiovascular \
                 exercise (like running or cycling) and strength training."
            }
            BmiCategory::Overweight => {
                "A combination of consistent cardiovascular exercise and resistance training is \
                 recommended. Seeking professional dietary advice can also be very beneficial."
            }
            BmiCategory::Obese => {
                "It's recommended to combine consistent cardiovascular exercise with resistance \
                 training. Please consider seeking professional dietary advice for a personalized \
                 plan."
            }
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::NormalWeight => write!(f, "Normal Weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}
