//! Defines the currencies an income or expense can be declared in.

use std::str::FromStr;

use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use thiserror::Error;

/// Returned when a string is not the code of a supported currency.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct ParseCurrencyError(pub String);

/// An ISO 4217 currency accepted by the calculator.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    RON, // Romanian Leu
    EUR, // Euro
    USD, // United States Dollar
    GBP, // Great British Pound
    CHF, // Swiss Franc
    HUF, // Hungarian Forint
    PLN, // Polish Złoty
    CZK, // Czech Koruna
    SEK, // Swedish Krona
    DKK, // Danish Krone
    NOK, // Norwegian Krone
    JPY, // Japanese Yen
    CAD, // Canadian Dollar
    AUD, // Australian Dollar
    MDL, // Moldovan Leu
}

impl Currency {
    /// Parses a currency code, ignoring ASCII case.
    ///
    /// Surrounding whitespace is trimmed, so `" eur "` yields `Currency::EUR`.
    pub fn from_code(code: &str) -> Result<Self, ParseCurrencyError> {
        Self::from_str(code.trim()).map_err(|_| ParseCurrencyError(code.to_string()))
    }

    /// Returns the ISO 4217 code (e.g. "EUR").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the Romanian name of the currency, as shown in selectors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RON => "Leu românesc",
            Self::EUR => "Euro",
            Self::USD => "Dolar american",
            Self::GBP => "Liră sterlină",
            Self::CHF => "Franc elvețian",
            Self::HUF => "Forint maghiar",
            Self::PLN => "Zlot polonez",
            Self::CZK => "Coroană cehă",
            Self::SEK => "Coroană suedeză",
            Self::DKK => "Coroană daneză",
            Self::NOK => "Coroană norvegiană",
            Self::JPY => "Yen japonez",
            Self::CAD => "Dolar canadian",
            Self::AUD => "Dolar australian",
            Self::MDL => "Leu moldovenesc",
        }
    }
}

/// Reads a currency from its code, with the leniency of [`Currency::from_code`].
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(de::Error::custom)
    }
}
