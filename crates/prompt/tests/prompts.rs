//! Tests for localized prompt assembly.

use kismet_prompt::{
    CompatibilityReading, DailyGuidance, Domain, DreamReading, HoroscopeReading, Language, Sign,
    SignCompatibility, SoulmateInsight, SpiritualAdvice, SymbolAnalysis, Timeframe,
};

#[test]
fn system_prompt_follows_language() {
    assert!(Domain::Dream.system_prompt(Language::En).contains("English"));
    assert!(Domain::Dream.system_prompt(Language::Tr).contains("Türkçe"));
    assert!(Domain::General.system_prompt(Language::Tr).contains("Türkçe"));
}

#[test]
fn dream_prompt_interpolates_fields() {
    let dream = DreamReading {
        description: "flying over the sea".into(),
        mood: Some("calm".into()),
        date: None,
    };
    let prompt = dream.prompt(Language::En);
    assert!(prompt.user.contains("Dream: flying over the sea"));
    assert!(prompt.user.contains("Mood/Emotion upon waking: calm"));
    assert!(prompt.user.contains("Date: not specified"));
    assert_eq!(prompt.system, Domain::Dream.system_prompt(Language::En));

    let text = prompt.text();
    assert!(text.starts_with(prompt.system));
    assert!(text.ends_with(&prompt.user));
}

#[test]
fn dream_prompt_skips_blank_mood() {
    let dream = DreamReading {
        description: "rüyamda uçtum".into(),
        mood: Some("   ".into()),
        date: Some("2024-01-01".into()),
    };
    let prompt = dream.prompt(Language::Tr);
    assert!(!prompt.user.contains("Uyanınca"));
    assert!(prompt.user.contains("Rüya tarihi: 2024-01-01"));
}

#[test]
fn symbol_prompt_quotes_symbol() {
    let symbol: SymbolAnalysis =
        serde_json::from_str(r#"{"symbol":"snake","dreamContext":"in a garden"}"#).unwrap();
    let prompt = symbol.prompt(Language::En);
    assert!(prompt.user.contains("\"snake\""));
    assert!(prompt.user.contains("Dream Context: in a garden"));
}

#[test]
fn horoscope_prompt_uses_timeframe_name() {
    let reading = HoroscopeReading {
        sign: Sign::Leo,
        timeframe: Timeframe::Weekly,
    };
    assert!(reading.prompt(Language::En).user.starts_with("Generate a weekly horoscope for LEO"));
    assert!(reading.prompt(Language::Tr).user.starts_with("LEO burcu için haftalık"));
}

#[test]
fn unknown_timeframe_reads_daily() {
    assert_eq!(Timeframe::parse("Monthly"), Timeframe::Monthly);
    assert_eq!(Timeframe::parse("yearly"), Timeframe::Daily);
}

#[test]
fn sign_compatibility_names_both() {
    let pair = SignCompatibility {
        first: Sign::Aries,
        second: Sign::Libra,
    };
    let prompt = pair.prompt(Language::En);
    assert!(prompt.user.contains("between ARIES and LIBRA"));
}

#[test]
fn compatibility_prefers_signs() {
    let reading: CompatibilityReading = serde_json::from_str(
        r#"{"name1":"Ada","name2":"Bo","sign1":"leo","birthDate2":"1990-02-03"}"#,
    )
    .unwrap();
    assert!(reading.is_complete());
    assert_eq!(reading.first(), "LEO sign");
    assert_eq!(reading.second(), "Bo");

    let prompt = reading.prompt(Language::En);
    assert!(prompt.user.contains("between LEO sign and Bo"));
    assert!(prompt.user.contains("Bo's birthdate: 1990-02-03"));
    assert!(prompt.user.contains("LEO sign's zodiac sign: LEO"));
    assert!(prompt.user.contains("10. **Compatibility Insight**"));
}

#[test]
fn compatibility_needs_a_pair() {
    let reading = CompatibilityReading {
        name1: Some("Ada".into()),
        sign2: Some("leo".into()),
        ..Default::default()
    };
    assert!(!reading.is_complete());
}

#[test]
fn soulmate_prompt_turkish() {
    let insight = SoulmateInsight {
        name: "Deniz".into(),
        sign: Some("pisces".into()),
        ..Default::default()
    };
    let prompt = insight.prompt(Language::Tr);
    assert!(prompt.user.starts_with("Deniz için ruh eşi"));
    assert!(prompt.user.contains("Burç: pisces"));
    assert!(!prompt.user.contains("Doğum tarihi"));
}

#[test]
fn daily_guidance_defaults_focus() {
    let guidance = DailyGuidance {
        sign: Some("virgo".into()),
        ..Default::default()
    };
    let prompt = guidance.prompt(Language::En);
    assert!(prompt.user.starts_with("Generate personalized daily spiritual guidance for virgo."));
    assert!(prompt.user.contains("Focus: General focus"));
}

#[test]
fn advice_prefers_question() {
    let advice = SpiritualAdvice {
        situation: Some("moving cities".into()),
        question: Some("should I go?".into()),
        context: None,
    };
    assert_eq!(advice.topic(), Some("should I go?"));
    assert!(advice.prompt(Language::En).user.contains("guidance about: should I go?"));

    let empty = SpiritualAdvice::default();
    assert_eq!(empty.topic(), None);
}
