use serde::Serialize;

/// Grade band a family can apply for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grade {
    PrePrimary,
    Primary,
    Middle,
    Senior,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Self::PrePrimary, Self::Primary, Self::Middle, Self::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrePrimary => "pre-primary",
            Self::Primary => "primary",
            Self::Middle => "middle",
            Self::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PrePrimary => "Pre-Primary (Nursery-UKG)",
            Self::Primary => "Primary (Grades I-V)",
            Self::Middle => "Middle (Grades VI-VIII)",
            Self::Senior => "Senior (Grades IX-XII)",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pre-primary" => Ok(Self::PrePrimary),
            "primary" => Ok(Self::Primary),
            "middle" => Ok(Self::Middle),
            "senior" => Ok(Self::Senior),
            _ => Err(format!("invalid grade: {}", s)),
        }
    }
}
