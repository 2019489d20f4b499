use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// A closed set of answers for one survey question.
///
/// The wire string is what the prediction service expects; the label is what
/// the form shows.
pub trait Choice: Copy + Into<&'static str> + IntoEnumIterator + 'static {
    fn label(self) -> &'static str;

    fn wire(self) -> &'static str {
        self.into()
    }

    fn options() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Parses a `<select>` value back into the enum. Anything outside the
    /// option set, including the empty placeholder, yields `None`.
    fn from_wire(value: &str) -> Option<Self> {
        Self::iter().find(|option| option.wire() == value)
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:tt, $label:literal;)+ }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
        )]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                #[strum(serialize = $wire)]
                $variant,
            )+
        }

        impl Choice for $name {
            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

choice_enum! {
    /// Yes/no answers, sent as the literal strings `"True"` / `"False"`.
    Binary {
        True => "True", "Iya";
        False => "False", "Tidak";
    }
}

choice_enum! {
    Sex {
        Male => "Male", "Laki-laki";
        Female => "Female", "Perempuan";
    }
}

choice_enum! {
    AgeCategory {
        From18To24 => "18-24", "18-24";
        From25To29 => "25-29", "25-29";
        From30To34 => "30-34", "30-34";
        From35To39 => "35-39", "35-39";
        From40To44 => "40-44", "40-44";
        From45To49 => "45-49", "45-49";
        From50To54 => "50-54", "50-54";
        From55To59 => "55-59", "55-59";
        From60To64 => "60-64", "60-64";
        From65To69 => "65-69", "65-69";
        From70To74 => "70-74", "70-74";
        From75To79 => "75-79", "75-79";
        EightyOrOlder => "80 or older", "80 atau lebih";
    }
}

choice_enum! {
    Race {
        AmericanIndian => "American Indian/Alaskan Native", "Penduduk Asli Amerika / Alaska";
        Asian => "Asian", "Asia";
        Black => "Black", "Kulit Hitam";
        Hispanic => "Hispanic", "Hispanik / Latino";
        White => "White", "Kulit Putih / Kaukasia";
        Other => "Other", "Lainnya";
    }
}

choice_enum! {
    Diabetic {
        No => "No", "Tidak";
        Borderline => "No (borderline diabetes)", "Tidak (pra-diabetes / borderline)";
        Yes => "Yes", "Ya";
        DuringPregnancy => "Yes (during pregnancy)", "Ya (saat kehamilan)";
    }
}

choice_enum! {
    /// Self-rated general health, best first.
    GenHealth {
        Excellent => "Excellent", "Istimewa";
        VeryGood => "Very good", "Sangat Baik";
        Good => "Good", "Baik";
        Fair => "Fair", "Cukup";
        Poor => "Poor", "Buruk";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_strings_match_serde_names() {
        for option in AgeCategory::options() {
            let json = serde_json::to_value(option).unwrap();
            assert_eq!(json, serde_json::Value::String(option.wire().to_string()));
        }
        assert_eq!(serde_json::to_string(&GenHealth::VeryGood).unwrap(), "\"Very good\"");
        assert_eq!(
            serde_json::to_string(&Diabetic::Borderline).unwrap(),
            "\"No (borderline diabetes)\""
        );
    }

    #[test]
    fn options_keep_form_order() {
        let wires: Vec<_> = GenHealth::options().into_iter().map(Choice::wire).collect();
        assert_eq!(wires, ["Excellent", "Very good", "Good", "Fair", "Poor"]);
        assert_eq!(Race::options().len(), 6);
        assert_eq!(AgeCategory::options().len(), 13);
        assert_eq!(Binary::options(), [Binary::True, Binary::False]);
    }

    #[test]
    fn from_wire_rejects_values_outside_the_set() {
        assert_eq!(Sex::from_wire("Female"), Some(Sex::Female));
        assert_eq!(AgeCategory::from_wire("80 or older"), Some(AgeCategory::EightyOrOlder));
        assert_eq!(Sex::from_wire(""), None);
        assert_eq!(Sex::from_wire("female"), None);
        assert_eq!(Binary::from_wire("true"), None);
    }

    #[test]
    fn from_str_agrees_with_from_wire() {
        assert_eq!(Race::from_str("American Indian/Alaskan Native").ok(), Some(Race::AmericanIndian));
        assert!(Race::from_str("Martian").is_err());
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(Sex::Male.label(), "Laki-laki");
        assert_eq!(AgeCategory::EightyOrOlder.label(), "80 atau lebih");
        assert_eq!(AgeCategory::From40To44.label(), "40-44");
        assert_eq!(Binary::True.label(), "Iya");
    }
}
