use std::str::FromStr;

use crate::{
    classification::Classification,
    types::{BmiError, BmiResult},
};

/// Language used for prompts, results and error messages
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Brazilian Portuguese
    PtBr,
}

impl FromStr for Locale {
    type Err = BmiError;

    fn from_str(s: &str) -> BmiResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Ok(Self::En),
            "pt" | "pt-br" | "pt_br" | "portuguese" => Ok(Self::PtBr),
            _ => Err(BmiError::InvalidLocale(s.to_string())),
        }
    }
}

impl Locale {
    pub fn weight_prompt(self) -> &'static str {
        match self {
            Self::En => "Enter your weight in kg (e.g. 70.5): ",
            Self::PtBr => "Digite seu peso em kg (ex: 70.5): ",
        }
    }

    pub fn height_prompt(self) -> &'static str {
        match self {
            Self::En => "Enter your height in meters (e.g. 1.75): ",
            Self::PtBr => "Digite sua altura em metros (ex: 1.75): ",
        }
    }

    pub fn bmi_line(self, bmi: f64) -> String {
        match self {
            Self::En => format!("BMI: {bmi:.2}"),
            Self::PtBr => format!("Seu IMC é: {bmi:.2}"),
        }
    }

    pub fn classification_line(self, classification: Classification) -> String {
        let label = classification.label(self);
        match self {
            Self::En => format!("Classification: {label}"),
            Self::PtBr => format!("Classificação: {label}"),
        }
    }

    /// User facing sentence for an error
    pub fn error_message(self, err: &BmiError) -> String {
        match (self, err) {
            (Self::En, BmiError::InvalidHeight(_)) => {
                "Error: height must be a positive value.".to_string()
            }
            (Self::PtBr, BmiError::InvalidHeight(_)) => {
                "Erro: A altura deve ser um valor positivo.".to_string()
            }
            (Self::En, BmiError::InvalidWeight(_)) => {
                "Error: weight must be a positive value.".to_string()
            }
            (Self::PtBr, BmiError::InvalidWeight(_)) => {
                "Erro: O peso deve ser um valor positivo.".to_string()
            }
            (Self::En, BmiError::OutOfRange { .. }) => {
                "Error: these values give a BMI out of range. Please check the weight.".to_string()
            }
            (Self::PtBr, BmiError::OutOfRange { .. }) => {
                "Erro: esses valores geram um IMC fora do intervalo. Verifique o peso.".to_string()
            }
            (Self::En, BmiError::InvalidNumber { input }) => format!(
                "Error: {input:?} is not a number. Please enter valid numeric values."
            ),
            (Self::PtBr, BmiError::InvalidNumber { input }) => format!(
                "Erro: {input:?} não é um número. Por favor, insira valores numéricos válidos."
            ),
            (Self::En, BmiError::MissingInput) => {
                "Error: no value was entered. Please enter valid numeric values.".to_string()
            }
            (Self::PtBr, BmiError::MissingInput) => {
                "Erro: nenhum valor foi informado. Por favor, insira valores numéricos válidos."
                    .to_string()
            }
            (Self::En, BmiError::InvalidLocale(name)) => {
                format!("Error: unknown locale {name:?}.")
            }
            (Self::PtBr, BmiError::InvalidLocale(name)) => {
                format!("Erro: idioma desconhecido {name:?}.")
            }
            (Self::En, BmiError::Io(e)) => format!("An unexpected error occurred: {e}"),
            (Self::PtBr, BmiError::Io(e)) => format!("Ocorreu um erro inesperado: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_names() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!(" pt_br ".parse::<Locale>().unwrap(), Locale::PtBr);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = "fr".parse::<Locale>().unwrap_err();

        assert!(matches!(err, BmiError::InvalidLocale(name) if name == "fr"));
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn bmi_line_has_two_decimals() {
        assert_eq!(Locale::En.bmi_line(23.020408), "BMI: 23.02");
        assert_eq!(Locale::PtBr.bmi_line(41.522491), "Seu IMC é: 41.52");
    }

    #[test]
    fn classification_line() {
        assert_eq!(
            Locale::En.classification_line(Classification::NormalWeight),
            "Classification: Normal weight"
        );
        assert_eq!(
            Locale::PtBr.classification_line(Classification::Overweight),
            "Classificação: Sobrepeso"
        );
    }

    #[test]
    fn invalid_number_message_names_the_input() {
        let err = BmiError::InvalidNumber {
            input: "abc".to_string(),
        };

        let msg = Locale::En.error_message(&err);
        assert!(msg.contains("\"abc\""));
        assert!(msg.ends_with("Please enter valid numeric values."));

        let msg = Locale::PtBr.error_message(&err);
        assert!(msg.ends_with("Por favor, insira valores numéricos válidos."));
    }

    #[test]
    fn invalid_height_message() {
        let err = BmiError::InvalidHeight(0.0);

        assert_eq!(
            Locale::En.error_message(&err),
            "Error: height must be a positive value."
        );
        assert_eq!(
            Locale::PtBr.error_message(&err),
            "Erro: A altura deve ser um valor positivo."
        );
    }
}
