use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// WHO body mass index bands
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Underweight,
    NormalWeight,
    Overweight,
    #[serde(rename = "obesity_class_1")]
    ObesityClassI,
    #[serde(rename = "obesity_class_2")]
    ObesityClassII,
    #[serde(rename = "obesity_class_3")]
    ObesityClassIII,
}

impl Classification {
    /// Every band, lightest first
    pub const ALL: [Classification; 6] = [
        Self::Underweight,
        Self::NormalWeight,
        Self::Overweight,
        Self::ObesityClassI,
        Self::ObesityClassII,
        Self::ObesityClassIII,
    ];

    /// Inclusive lower and exclusive upper bound of the band. `None` is unbounded.
    pub const fn range(self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Underweight => (None, Some(18.5)),
            Self::NormalWeight => (Some(18.5), Some(25.0)),
            Self::Overweight => (Some(25.0), Some(30.0)),
            Self::ObesityClassI => (Some(30.0), Some(35.0)),
            Self::ObesityClassII => (Some(35.0), Some(40.0)),
            Self::ObesityClassIII => (Some(40.0), None),
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::Underweight => "Underweight",
                Self::NormalWeight => "Normal weight",
                Self::Overweight => "Overweight",
                Self::ObesityClassI => "Obesity Class I",
                Self::ObesityClassII => "Obesity Class II",
                Self::ObesityClassIII => "Obesity Class III (morbid)",
            },
            Locale::PtBr => match self {
                Self::Underweight => "Abaixo do peso",
                Self::NormalWeight => "Peso normal",
                Self::Overweight => "Sobrepeso",
                Self::ObesityClassI => "Obesidade Grau I",
                Self::ObesityClassII => "Obesidade Grau II",
                Self::ObesityClassIII => "Obesidade Grau III (mórbida)",
            },
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// Maps a BMI value onto its band. Anything that is not below 40, NaN
/// included, lands in the top band.
pub fn classify(bmi: f64) -> Classification {
    match bmi {
        b if b < 18.5 => Classification::Underweight,
        b if b < 25.0 => Classification::NormalWeight,
        b if b < 30.0 => Classification::Overweight,
        b if b < 35.0 => Classification::ObesityClassI,
        b if b < 40.0 => Classification::ObesityClassII,
        _ => Classification::ObesityClassIII,
    }
}
