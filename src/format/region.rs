use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::validator::Validator;

/// The 16 Polish provinces (województwa), with their TERYT code and official name.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Voivodeship {
    #[strum(serialize = "dolnośląskie")]
    LowerSilesian,
    #[strum(serialize = "kujawsko-pomorskie")]
    KuyavianPomeranian,
    #[strum(serialize = "lubelskie")]
    Lublin,
    #[strum(serialize = "lubuskie")]
    Lubusz,
    #[strum(serialize = "łódzkie")]
    Lodz,
    #[strum(serialize = "małopolskie")]
    LesserPoland,
    #[strum(serialize = "mazowieckie")]
    Masovian,
    #[strum(serialize = "opolskie")]
    Opole,
    #[strum(serialize = "podkarpackie")]
    Subcarpathian,
    #[strum(serialize = "podlaskie")]
    Podlaskie,
    #[strum(serialize = "pomorskie")]
    Pomeranian,
    #[strum(serialize = "śląskie")]
    Silesian,
    #[strum(serialize = "świętokrzyskie")]
    HolyCross,
    #[strum(serialize = "warmińsko-mazurskie")]
    WarmianMasurian,
    #[strum(serialize = "wielkopolskie")]
    GreaterPoland,
    #[strum(serialize = "zachodniopomorskie")]
    WestPomeranian,
}

impl Voivodeship {
    pub fn code(&self) -> &'static str {
        match self {
            Voivodeship::LowerSilesian => "02",
            Voivodeship::KuyavianPomeranian => "04",
            Voivodeship::Lublin => "06",
            Voivodeship::Lubusz => "08",
            Voivodeship::Lodz => "10",
            Voivodeship::LesserPoland => "12",
            Voivodeship::Masovian => "14",
            Voivodeship::Opole => "16",
            Voivodeship::Subcarpathian => "18",
            Voivodeship::Podlaskie => "20",
            Voivodeship::Pomeranian => "22",
            Voivodeship::Silesian => "24",
            Voivodeship::HolyCross => "26",
            Voivodeship::WarmianMasurian => "28",
            Voivodeship::GreaterPoland => "30",
            Voivodeship::WestPomeranian => "32",
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|voivodeship| voivodeship.code() == code)
    }

    /// Exact, case-sensitive match on the official lower-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }
}

pub struct PolishRegionCode;
pub struct PolishRegionName;

/// Checks a two-digit province code ("02", "04", ..., "32").
pub fn region(code: &str) -> bool {
    Voivodeship::from_code(code).is_some()
}

/// Checks a full province name such as "mazowieckie".
pub fn region_full(name: &str) -> bool {
    Voivodeship::from_name(name).is_some()
}

impl Validator for PolishRegionCode {
    fn is_valid(&self, input: &str) -> bool {
        region(input)
    }
}

impl Validator for PolishRegionName {
    fn is_valid(&self, input: &str) -> bool {
        region_full(input)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_even_code_up_to_32() {
        for code in (2..=32).step_by(2) {
            assert!(region(&format!("{code:02}")), "{code}");
        }
        assert_eq!(Voivodeship::iter().count(), 16);
    }

    #[test]
    fn unknown_codes() {
        for code in ["03", "00", "34", "2", " 02", "02 ", "002", "", "1O"] {
            assert!(!PolishRegionCode.is_valid(code), "{code:?}");
        }
    }

    #[test]
    fn names_are_matched_exactly() {
        assert!(region_full("mazowieckie"));
        assert!(region_full("dolnośląskie"));
        assert!(region_full("łódzkie"));
        assert!(region_full("świętokrzyskie"));
        assert!(PolishRegionName.is_valid("warmińsko-mazurskie"));

        // no case folding
        assert!(!region_full("Mazowieckie"));
        assert!(!region_full("ŁÓDZKIE"));
        // no diacritics folding
        assert!(!region_full("lodzkie"));
        assert!(!region_full("dolnoslaskie"));
        // no trimming
        assert!(!region_full(" mazowieckie"));
        assert!(!region_full(""));
    }

    #[test]
    fn code_and_name_lookups_agree() {
        for voivodeship in Voivodeship::iter() {
            assert_eq!(Voivodeship::from_code(voivodeship.code()), Some(voivodeship));
            assert_eq!(Voivodeship::from_name(voivodeship.name()), Some(voivodeship));
            assert_eq!(voivodeship.to_string(), voivodeship.name());
        }
        assert_eq!(Voivodeship::from_code("14"), Some(Voivodeship::Masovian));
        assert_eq!(Voivodeship::Masovian.name(), "mazowieckie");
        assert_eq!(Voivodeship::Lodz.code(), "10");
    }
}
