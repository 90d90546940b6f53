//! ESRB age rating

use crate::error::FieldError;

/// ESRB age rating as encoded by the API (`age_rating.rating` for category 1).
///
/// # Example
///
/// ```
/// use igdb_lib::model::types::Esrb;
///
/// let rating = Esrb::try_from(4).unwrap();
/// assert_eq!(rating, Esrb::E10Plus);
/// assert_eq!(rating.to_string(), "E10+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Esrb {
    /// Rating pending.
    Rp,
    /// Early childhood.
    Ec,
    /// Everyone.
    E,
    /// Everyone 10+.
    E10Plus,
    /// Teen.
    T,
    /// Mature 17+.
    M,
    /// Adults only 18+.
    Ao,
}

impl Esrb {
    /// Returns the numeric code used by the API.
    pub fn code(self) -> i64 {
        match self {
            Self::Rp => 1,
            Self::Ec => 2,
            Self::E => 3,
            Self::E10Plus => 4,
            Self::T => 5,
            Self::M => 6,
            Self::Ao => 7,
        }
    }

    /// Returns the label printed on the box.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rp => "RP",
            Self::Ec => "EC",
            Self::E => "E",
            Self::E10Plus => "E10+",
            Self::T => "T",
            Self::M => "M",
            Self::Ao => "AO",
        }
    }
}

impl TryFrom<i64> for Esrb {
    type Error = FieldError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Rp),
            2 => Ok(Self::Ec),
            3 => Ok(Self::E),
            4 => Ok(Self::E10Plus),
            5 => Ok(Self::T),
            6 => Ok(Self::M),
            7 => Ok(Self::Ao),
            other => Err(FieldError::invalid_value("rating", other)),
        }
    }
}

impl From<Esrb> for i64 {
    fn from(rating: Esrb) -> Self {
        rating.code()
    }
}

impl std::fmt::Display for Esrb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
