// thaiid-rs/thaiid/src/decode/gender.rs

/// Gender as encoded on the card. Unknown codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Code `1`
    Male,
    /// Code `2`
    Female,
    /// Any other code, verbatim
    Other(String),
}

impl Gender {
    /// Map the card code: `1` male, `2` female, anything else kept.
    pub fn from_code(code: &str) -> Self {
        match code {
            "1" => Self::Male,
            "2" => Self::Female,
            other => Self::Other(other.to_string()),
        }
    }

    /// Code as stored on the card.
    pub fn code(&self) -> &str {
        match self {
            Self::Male => "1",
            Self::Female => "2",
            Self::Other(code) => code,
        }
    }

    /// Thai label. Unknown codes render as the code itself.
    pub fn th(&self) -> &str {
        match self {
            Self::Male => "ชาย",
            Self::Female => "หญิง",
            Self::Other(code) => code,
        }
    }

    /// English label.
    pub fn en(&self) -> &str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other(code) => code,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.en())
    }
}
