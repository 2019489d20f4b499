use crate::choices::{AgeCategory, Binary, Choice, Diabetic, GenHealth, Race, Sex};
use crate::error::ClientError;
use serde::Serialize;

/// Answers collected by the survey form. Every field is optional until
/// submission; only height and weight are required then.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SurveyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_disease: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_drinking: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental_health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_walking: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_category: Option<AgeCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diabetic: Option<Diabetic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen_health: Option<GenHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asthma: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kidney_disease: Option<Binary>,
}

/// Body of `POST /predict` for the survey flow: the survey without the raw
/// height/weight pair, plus the derived BMI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SurveyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_disease: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_drinking: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental_health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_walking: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_category: Option<AgeCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diabetic: Option<Diabetic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen_health: Option<GenHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asthma: Option<Binary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kidney_disease: Option<Binary>,
    #[serde(rename = "BMI")]
    pub bmi: f64,
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Body-mass index from centimeters and kilograms, rounded to two decimals.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Parses raw field text. A cleared (blank) field reads as zero; malformed
/// and non-finite input is "no value".
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn clamp_number(value: Option<f64>, min: f64, max: f64) -> Option<f64> {
    value.map(|n| n.max(min).min(max))
}

/// Formats a stored value back into field text (`165`, `22.5`, or empty).
pub fn format_number(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

// Zero counts as missing, same as an empty field.
fn required(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n != 0.0)
}

impl SurveyInput {
    /// Builds the outgoing payload. Fails before anything is sent when height
    /// or weight is missing.
    pub fn to_payload(&self) -> Result<SurveyPayload, ClientError> {
        let (Some(tall), Some(weight)) = (required(self.tall), required(self.weight)) else {
            return Err(ClientError::MissingBodyMeasurements);
        };

        Ok(SurveyPayload {
            heart_disease: self.heart_disease,
            smoking: self.smoking,
            alcohol_drinking: self.alcohol_drinking,
            stroke: self.stroke,
            physical_health: self.physical_health,
            mental_health: self.mental_health,
            diff_walking: self.diff_walking,
            sex: self.sex,
            age_category: self.age_category,
            race: self.race,
            diabetic: self.diabetic,
            physical_activity: self.physical_activity,
            gen_health: self.gen_health,
            sleep_time: self.sleep_time,
            asthma: self.asthma,
            kidney_disease: self.kidney_disease,
            bmi: body_mass_index(tall, weight),
        })
    }

    pub fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::Tall => self.tall,
            NumericField::Weight => self.weight,
            NumericField::PhysicalHealth => self.physical_health,
            NumericField::MentalHealth => self.mental_health,
            NumericField::SleepTime => self.sleep_time,
        }
    }

    fn numeric_mut(&mut self, field: NumericField) -> &mut Option<f64> {
        match field {
            NumericField::Tall => &mut self.tall,
            NumericField::Weight => &mut self.weight,
            NumericField::PhysicalHealth => &mut self.physical_health,
            NumericField::MentalHealth => &mut self.mental_health,
            NumericField::SleepTime => &mut self.sleep_time,
        }
    }

    /// Keystroke handler: stores the parsed text without clamping.
    pub fn set_numeric_text(&mut self, field: NumericField, raw: &str) {
        *self.numeric_mut(field) = parse_number(raw);
    }

    /// Blur handler: pulls the stored value into the field's range.
    pub fn clamp_on_blur(&mut self, field: NumericField) -> Option<f64> {
        let (min, max) = field.range();
        let slot = self.numeric_mut(field);
        *slot = clamp_number(*slot, min, max);
        *slot
    }

    /// Current wire value of a choice field, if answered.
    pub fn choice(&self, field: ChoiceField) -> Option<&'static str> {
        match field {
            ChoiceField::HeartDisease => self.heart_disease.map(Choice::wire),
            ChoiceField::Smoking => self.smoking.map(Choice::wire),
            ChoiceField::AlcoholDrinking => self.alcohol_drinking.map(Choice::wire),
            ChoiceField::Stroke => self.stroke.map(Choice::wire),
            ChoiceField::DiffWalking => self.diff_walking.map(Choice::wire),
            ChoiceField::Sex => self.sex.map(Choice::wire),
            ChoiceField::AgeCategory => self.age_category.map(Choice::wire),
            ChoiceField::Race => self.race.map(Choice::wire),
            ChoiceField::Diabetic => self.diabetic.map(Choice::wire),
            ChoiceField::PhysicalActivity => self.physical_activity.map(Choice::wire),
            ChoiceField::GenHealth => self.gen_health.map(Choice::wire),
            ChoiceField::Asthma => self.asthma.map(Choice::wire),
            ChoiceField::KidneyDisease => self.kidney_disease.map(Choice::wire),
        }
    }

    /// Stores a `<select>` value. Values outside the option set clear the
    /// answer.
    pub fn set_choice(&mut self, field: ChoiceField, value: &str) {
        match field {
            ChoiceField::HeartDisease => self.heart_disease = Binary::from_wire(value),
            ChoiceField::Smoking => self.smoking = Binary::from_wire(value),
            ChoiceField::AlcoholDrinking => self.alcohol_drinking = Binary::from_wire(value),
            ChoiceField::Stroke => self.stroke = Binary::from_wire(value),
            ChoiceField::DiffWalking => self.diff_walking = Binary::from_wire(value),
            ChoiceField::Sex => self.sex = Sex::from_wire(value),
            ChoiceField::AgeCategory => self.age_category = AgeCategory::from_wire(value),
            ChoiceField::Race => self.race = Race::from_wire(value),
            ChoiceField::Diabetic => self.diabetic = Diabetic::from_wire(value),
            ChoiceField::PhysicalActivity => self.physical_activity = Binary::from_wire(value),
            ChoiceField::GenHealth => self.gen_health = GenHealth::from_wire(value),
            ChoiceField::Asthma => self.asthma = Binary::from_wire(value),
            ChoiceField::KidneyDisease => self.kidney_disease = Binary::from_wire(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Tall,
    Weight,
    PhysicalHealth,
    MentalHealth,
    SleepTime,
}

impl NumericField {
    pub fn range(self) -> (f64, f64) {
        match self {
            NumericField::Tall | NumericField::Weight => (35.0, 180.0),
            NumericField::PhysicalHealth | NumericField::MentalHealth => (0.0, 30.0),
            NumericField::SleepTime => (0.0, 24.0),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            NumericField::Tall => "tinggiBadan",
            NumericField::Weight => "beratBadan",
            NumericField::PhysicalHealth => "kesehatanFisik",
            NumericField::MentalHealth => "kesehatanMental",
            NumericField::SleepTime => "jamTidur",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Tall => "Tinggi Badan (cm)",
            NumericField::Weight => "Berat Badan (kg)",
            NumericField::PhysicalHealth => "Kesehatan Fisik (hari)",
            NumericField::MentalHealth => "Kesehatan Mental (hari)",
            NumericField::SleepTime => "Jam tidur akhir-akhir ini (jam)",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            NumericField::Tall => {
                "Masukkan tinggi badan Anda dalam satuan sentimeter (cm). Contoh: 165"
            }
            NumericField::Weight => "Masukkan berat badan Anda dalam kilogram (kg). Contoh: 60",
            NumericField::PhysicalHealth => {
                "Jumlah hari dalam 30 hari terakhir saat tubuh Anda merasa tidak sehat (sakit, nyeri, lemas, dll). Isi 0–30."
            }
            NumericField::MentalHealth => {
                "Jumlah hari dalam 30 hari terakhir saat kondisi mental Anda terasa buruk (stres, cemas, sedih, dll). Isi 0–30."
            }
            NumericField::SleepTime => {
                "Rata-rata jumlah jam tidur Anda per hari dalam beberapa waktu terakhir."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceField {
    HeartDisease,
    Smoking,
    AlcoholDrinking,
    Stroke,
    DiffWalking,
    Sex,
    AgeCategory,
    Race,
    Diabetic,
    PhysicalActivity,
    GenHealth,
    Asthma,
    KidneyDisease,
}

fn option_pairs<C: Choice>() -> Vec<(&'static str, &'static str)> {
    C::options()
        .into_iter()
        .map(|option| (option.wire(), option.label()))
        .collect()
}

impl ChoiceField {
    /// `(wire value, label)` pairs in display order.
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            ChoiceField::Sex => option_pairs::<Sex>(),
            ChoiceField::AgeCategory => option_pairs::<AgeCategory>(),
            ChoiceField::Race => option_pairs::<Race>(),
            ChoiceField::Diabetic => option_pairs::<Diabetic>(),
            ChoiceField::GenHealth => option_pairs::<GenHealth>(),
            ChoiceField::HeartDisease
            | ChoiceField::Smoking
            | ChoiceField::AlcoholDrinking
            | ChoiceField::Stroke
            | ChoiceField::DiffWalking
            | ChoiceField::PhysicalActivity
            | ChoiceField::Asthma
            | ChoiceField::KidneyDisease => option_pairs::<Binary>(),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ChoiceField::HeartDisease => "penyakitJantung",
            ChoiceField::Smoking => "merokok",
            ChoiceField::AlcoholDrinking => "konsumsiAlkohol",
            ChoiceField::Stroke => "stroke",
            ChoiceField::DiffWalking => "sulitBerjalan",
            ChoiceField::Sex => "jenisKelamin",
            ChoiceField::AgeCategory => "kategoriUsia",
            ChoiceField::Race => "ras",
            ChoiceField::Diabetic => "diabetes",
            ChoiceField::PhysicalActivity => "aktivitasFisik",
            ChoiceField::GenHealth => "kondisiKesehatan",
            ChoiceField::Asthma => "asma",
            ChoiceField::KidneyDisease => "penyakitGinjal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChoiceField::HeartDisease => "Penyakit Jantung",
            ChoiceField::Smoking => "Merokok",
            ChoiceField::AlcoholDrinking => "Mengkonsumsi Alkohol",
            ChoiceField::Stroke => "Stroke",
            ChoiceField::DiffWalking => "Sulit Berjalan",
            ChoiceField::Sex => "Jenis Kelamin",
            ChoiceField::AgeCategory => "Kategori Usia",
            ChoiceField::Race => "Ras",
            ChoiceField::Diabetic => "Diabetes",
            ChoiceField::PhysicalActivity => "Aktivitas Fisik",
            ChoiceField::GenHealth => "Kondisi Kesehatan Umum",
            ChoiceField::Asthma => "Asma",
            ChoiceField::KidneyDisease => "Penyakit Ginjal",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ChoiceField::HeartDisease => "Apakah anda memiliki penyakit jantung?",
            ChoiceField::Smoking => "Apakah anda merokok?",
            ChoiceField::AlcoholDrinking => "Apakah anda mengkonsumsi alkohol?",
            ChoiceField::Stroke => "Apakah anda stroke?",
            ChoiceField::DiffWalking => "Apakah anda sulit berjalan?",
            ChoiceField::Sex => "Jenis kelamin?",
            ChoiceField::AgeCategory => "Berapa kisaran usia anda?",
            ChoiceField::Race => "Apa ras anda?",
            ChoiceField::Diabetic => "Apakah anda memiliki penyakit diabetes?",
            ChoiceField::PhysicalActivity => "Apakah anda sering beraktivitas fisik?",
            ChoiceField::GenHealth => "Kondisi kesahatan anda saat ini?",
            ChoiceField::Asthma => "Apakah anda memiliki penyakit asma?",
            ChoiceField::KidneyDisease => "Apakah anda memiliki penyakit ginjal?",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            ChoiceField::GenHealth => Some(
                "Penilaian umum Anda terhadap kondisi kesehatan saat ini, mulai dari Buruk hingga Istimewa.",
            ),
            ChoiceField::PhysicalActivity => Some(
                "Apakah Anda melakukan aktivitas fisik atau olahraga dalam 30 hari terakhir?",
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyField {
    Choice(ChoiceField),
    Numeric(NumericField),
}

/// The eighteen questions in the order the form lays them out.
pub const FORM_LAYOUT: [SurveyField; 18] = [
    SurveyField::Choice(ChoiceField::Sex),
    SurveyField::Choice(ChoiceField::AgeCategory),
    SurveyField::Choice(ChoiceField::Race),
    SurveyField::Numeric(NumericField::Tall),
    SurveyField::Numeric(NumericField::Weight),
    SurveyField::Choice(ChoiceField::Smoking),
    SurveyField::Choice(ChoiceField::HeartDisease),
    SurveyField::Choice(ChoiceField::KidneyDisease),
    SurveyField::Choice(ChoiceField::Asthma),
    SurveyField::Choice(ChoiceField::Diabetic),
    SurveyField::Choice(ChoiceField::Stroke),
    SurveyField::Choice(ChoiceField::AlcoholDrinking),
    SurveyField::Numeric(NumericField::PhysicalHealth),
    SurveyField::Numeric(NumericField::MentalHealth),
    SurveyField::Choice(ChoiceField::GenHealth),
    SurveyField::Choice(ChoiceField::DiffWalking),
    SurveyField::Choice(ChoiceField::PhysicalActivity),
    SurveyField::Numeric(NumericField::SleepTime),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn measured(tall: f64, weight: f64) -> SurveyInput {
        SurveyInput {
            tall: Some(tall),
            weight: Some(weight),
            ..Default::default()
        }
    }

    #[test]
    fn bmi_matches_formula_across_valid_range() {
        for tall in (35..=180).step_by(5) {
            for weight in (35..=180).step_by(7) {
                let (h, w) = (tall as f64, weight as f64);
                let expected = ((w / ((h / 100.0) * (h / 100.0))) * 100.0).round() / 100.0;
                assert_eq!(body_mass_index(h, w), expected);
            }
        }
    }

    #[test]
    fn bmi_rounds_to_two_decimals() {
        assert_eq!(body_mass_index(170.0, 65.0), 22.49);
        assert_eq!(body_mass_index(180.0, 81.0), 25.0);
        assert_eq!(body_mass_index(165.0, 60.0), 22.04);
    }

    #[test]
    fn missing_measurements_block_submission() {
        let mut input = SurveyInput::default();
        input.smoking = Some(Binary::True);
        assert!(matches!(input.to_payload(), Err(ClientError::MissingBodyMeasurements)));

        input.tall = Some(170.0);
        assert!(matches!(input.to_payload(), Err(ClientError::MissingBodyMeasurements)));

        input.tall = None;
        input.weight = Some(60.0);
        assert!(matches!(input.to_payload(), Err(ClientError::MissingBodyMeasurements)));
    }

    #[test]
    fn zero_measurement_counts_as_missing() {
        assert!(measured(0.0, 60.0).to_payload().is_err());
        assert!(measured(170.0, 0.0).to_payload().is_err());
    }

    #[test]
    fn payload_replaces_height_and_weight_with_bmi() {
        let mut input = measured(170.0, 65.0);
        input.sex = Some(Sex::Female);
        input.gen_health = Some(GenHealth::VeryGood);
        input.sleep_time = Some(7.0);

        let value = serde_json::to_value(input.to_payload().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("Tall"));
        assert!(!object.contains_key("Weight"));
        assert_eq!(
            value,
            json!({ "Sex": "Female", "GenHealth": "Very good", "SleepTime": 7.0, "BMI": 22.49 })
        );
    }

    #[test]
    fn payload_keeps_field_order_with_bmi_last() {
        let mut input = measured(160.0, 50.0);
        input.heart_disease = Some(Binary::False);
        input.kidney_disease = Some(Binary::True);
        input.age_category = Some(AgeCategory::EightyOrOlder);

        let body = serde_json::to_string(&input.to_payload().unwrap()).unwrap();
        assert_eq!(
            body,
            r#"{"HeartDisease":"False","AgeCategory":"80 or older","KidneyDisease":"True","BMI":19.53}"#
        );
    }

    #[test]
    fn parse_number_reads_blank_as_zero_and_bad_text_as_none() {
        assert_eq!(parse_number("165"), Some(165.0));
        assert_eq!(parse_number(" 22.5 "), Some(22.5));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("   "), Some(0.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn clamp_lands_in_range_and_is_idempotent() {
        for field in [
            NumericField::Tall,
            NumericField::Weight,
            NumericField::PhysicalHealth,
            NumericField::MentalHealth,
            NumericField::SleepTime,
        ] {
            let (min, max) = field.range();
            for raw in [-10.0, min, (min + max) / 2.0, max, 1_000.0] {
                let clamped = clamp_number(Some(raw), min, max).unwrap();
                assert!(clamped >= min && clamped <= max);
                assert_eq!(clamp_number(Some(clamped), min, max), Some(clamped));
                if raw >= min && raw <= max {
                    assert_eq!(clamped, raw);
                }
            }
        }
        assert_eq!(clamp_number(None, 0.0, 30.0), None);
    }

    #[test]
    fn typing_does_not_clamp_until_blur() {
        let mut input = SurveyInput::default();
        input.set_numeric_text(NumericField::Tall, "250");
        assert_eq!(input.tall, Some(250.0));
        assert_eq!(input.clamp_on_blur(NumericField::Tall), Some(180.0));

        input.set_numeric_text(NumericField::SleepTime, "-3");
        assert_eq!(input.clamp_on_blur(NumericField::SleepTime), Some(0.0));

        input.set_numeric_text(NumericField::MentalHealth, "x");
        assert_eq!(input.clamp_on_blur(NumericField::MentalHealth), None);
    }

    #[test]
    fn cleared_optional_field_is_sent_as_zero() {
        let mut input = measured(170.0, 65.0);
        input.set_numeric_text(NumericField::SleepTime, "8");
        input.set_numeric_text(NumericField::SleepTime, "");
        assert_eq!(input.clamp_on_blur(NumericField::SleepTime), Some(0.0));

        let value = serde_json::to_value(input.to_payload().unwrap()).unwrap();
        assert_eq!(value["SleepTime"].as_f64(), Some(0.0));
        assert_eq!(value, json!({ "SleepTime": 0.0, "BMI": 22.49 }));
    }

    #[test]
    fn cleared_height_blocks_until_blur_then_clamps_to_minimum() {
        let mut input = measured(170.0, 65.0);
        input.set_numeric_text(NumericField::Tall, "");
        assert_eq!(input.tall, Some(0.0));
        assert!(matches!(input.to_payload(), Err(ClientError::MissingBodyMeasurements)));

        assert_eq!(input.clamp_on_blur(NumericField::Tall), Some(35.0));
        assert_eq!(input.to_payload().unwrap().bmi, body_mass_index(35.0, 65.0));
    }

    #[test]
    fn set_choice_only_accepts_listed_values() {
        let mut input = SurveyInput::default();
        input.set_choice(ChoiceField::Diabetic, "Yes (during pregnancy)");
        assert_eq!(input.diabetic, Some(Diabetic::DuringPregnancy));
        assert_eq!(input.choice(ChoiceField::Diabetic), Some("Yes (during pregnancy)"));

        input.set_choice(ChoiceField::Diabetic, "Maybe");
        assert_eq!(input.diabetic, None);

        input.set_choice(ChoiceField::Asthma, "True");
        assert_eq!(input.asthma, Some(Binary::True));
        input.set_choice(ChoiceField::Asthma, "");
        assert_eq!(input.choice(ChoiceField::Asthma), None);
    }

    #[test]
    fn layout_covers_every_question_once() {
        let mut seen = std::collections::HashSet::new();
        for field in FORM_LAYOUT {
            assert!(seen.insert(field));
        }
        assert_eq!(seen.len(), 18);
        let binary_fields = FORM_LAYOUT
            .iter()
            .filter_map(|f| match f {
                SurveyField::Choice(c) => Some(c.options()),
                SurveyField::Numeric(_) => None,
            })
            .filter(|options| options.len() == 2 && options[0].0 == "True")
            .count();
        assert_eq!(binary_fields, 8);
    }

    #[test]
    fn format_number_round_trips_field_text() {
        assert_eq!(format_number(Some(165.0)), "165");
        assert_eq!(format_number(Some(22.5)), "22.5");
        assert_eq!(format_number(None), "");
    }
}
