//! Horoscope prompts.

use crate::{Domain, Language, Prompt, Sign};
use serde::{Deserialize, Serialize};

/// Horoscope period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// Parse a period. Unknown values read as daily.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Daily,
        }
    }

    /// Localized period name.
    pub const fn name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Daily, Language::En) => "daily",
            (Self::Weekly, Language::En) => "weekly",
            (Self::Monthly, Language::En) => "monthly",
            (Self::Daily, Language::Tr) => "günlük",
            (Self::Weekly, Language::Tr) => "haftalık",
            (Self::Monthly, Language::Tr) => "aylık",
        }
    }
}

/// A horoscope for one sign over one period.
#[derive(Debug, Clone, Copy)]
pub struct HoroscopeReading {
    pub sign: Sign,
    pub timeframe: Timeframe,
}

impl HoroscopeReading {
    /// Build the horoscope prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let sign = self.sign.upper();
        let period = self.timeframe.name(language);
        let user = match language {
            Language::Tr => format!(
                "{sign} burcu için {period} bir burç yorumu oluştur. Bu yorum tamamen benzersiz, sıcak ve kişisel olarak yankılanan olmalı.\n\nŞunları içer:\n1. Genel Enerji ve Ruh Hali\n2. Aşk ve İlişkiler\n3. Kariyer ve Finans\n4. Sağlık ve İyilik\n5. Şanslı Element (renk, sayı, zaman)\n6. Ana Zorluk\n7. Fırsat\n8. Kişisel Yansıtma Sorusu\n\nBu yorumun bu kişinin şu anki anı için özel olarak yazıldığını hissettir. Duygusal, sezgisel dil kullan. Asla standart ifadeleri tekrarlama. Doğal ve merak dolu takip soruları ekle."
            ),
            Language::En => format!(
                "Generate a {period} horoscope for {sign} that is completely unique, warm, and personally resonant.\n\nInclude sections for:\n1. Overall Energy & Mood\n2. Love & Relationships\n3. Career & Finance\n4. Health & Wellness\n5. Lucky Element (color, number, time)\n6. Main Challenge\n7. Opportunity\n8. Personal Reflection Question\n\nMake this feel like it was written specifically for this person's current moment. Use emotional, intuitive language. Never repeat standard phrases. Include follow-up questions that feel natural and curiosity-driven."
            ),
        };
        Prompt::new(Domain::Horoscope, language, user)
    }
}

/// Astrological compatibility between two signs.
#[derive(Debug, Clone, Copy)]
pub struct SignCompatibility {
    pub first: Sign,
    pub second: Sign,
}

impl SignCompatibility {
    /// Build the sign-to-sign compatibility prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let first = self.first.upper();
        let second = self.second.upper();
        let user = match language {
            Language::Tr => format!(
                "{first} ve {second} arasındaki astrolojik uyumluluğu analiz et.\n\nŞunları içeren benzersiz bir okuma yap:\n1. Elemental Uyumluluk\n2. Aşk ve Romantik Potansiyel\n3. Arkadaşlık Dinamikleri\n4. İletişim Tarzı\n5. Yönlendirilecek Zorluklar\n6. Çift Olarak Güçlü Yönler\n7. Büyüme Fırsatları\n8. Uyumluluk Skoru (nüanslı açıklama ile)\n\nBu okumanın kişisel olduğunu hissettir, genel değil. Bu dinamikleri nasıl deneyimledikleri hakkında bir takip sorusu sor."
            ),
            Language::En => format!(
                "Analyze the astrological compatibility between {first} and {second}.\n\nProvide a unique reading including:\n1. Elemental Compatibility\n2. Love & Romance Potential\n3. Friendship Dynamics\n4. Communication Style\n5. Challenges to Navigate\n6. Strengths as a Pair\n7. Growth Opportunities\n8. Compatibility Score (with nuanced explanation)\n\nMake this feel like a personal reading, not generic. Ask a follow-up question about how they've experienced this dynamic."
            ),
        };
        Prompt::new(Domain::Horoscope, language, user)
    }
}
