//! Love compatibility prompts.

use crate::{Domain, Language, Prompt, lines, present};
use serde::Deserialize;

/// Two people, described by names, signs and/or birth dates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompatibilityReading {
    pub name1: Option<String>,
    pub name2: Option<String>,
    pub sign1: Option<String>,
    pub sign2: Option<String>,
    pub birth_date1: Option<String>,
    pub birth_date2: Option<String>,
}

impl CompatibilityReading {
    /// Either both signs or both names are present.
    pub fn is_complete(&self) -> bool {
        (present(&self.sign1).is_some() && present(&self.sign2).is_some())
            || (present(&self.name1).is_some() && present(&self.name2).is_some())
    }

    /// How the first person is referred to: their sign when given,
    /// otherwise their name.
    pub fn first(&self) -> String {
        person(&self.sign1, &self.name1)
    }

    /// How the second person is referred to.
    pub fn second(&self) -> String {
        person(&self.sign2, &self.name2)
    }

    /// Build the compatibility prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let (p1, p2) = (self.first(), self.second());
        let upper = |v: &Option<String>| present(v).map(str::to_uppercase);
        let user = match language {
            Language::Tr => {
                let details = lines([
                    present(&self.name1).map(|n| format!("{p1} adı: {n}")),
                    present(&self.name2).map(|n| format!("{p2} adı: {n}")),
                    present(&self.birth_date1).map(|d| format!("{p1} doğum tarihi: {d}")),
                    present(&self.birth_date2).map(|d| format!("{p2} doğum tarihi: {d}")),
                    upper(&self.sign1).map(|s| format!("{p1} burcu: {s}")),
                    upper(&self.sign2).map(|s| format!("{p2} burcu: {s}")),
                ]);
                format!(
                    "{p1} ve {p2} arasındaki aşk uyumluluğunu analiz et.\n{details}\n\nŞunları içeren derinlemesine kişisel, duygusal olarak zeki bir uyumluluk okuması oluştur:\n\n1. **İlişki Enerjisi**: Bu ikisi arasındaki genel enerjik dinamikleri açıkla\n2. **Aşk Uyumluluğu**: Fiziksel, duygusal ve ruhsal çekim potansiyeli\n3. **İletişim Dinamikleri**: Birbirlerini nasıl anladıkları\n4. **Duygusal Bağlantı**: Derinlik ve özgünlük potansiyeli\n5. **Ortak Değerler**: Onları birbirine bağlayabilecek şeyler\n6. **Potansiyel Zorluklar**: Karşılaşabilecekleri dürüst engeller\n7. **Birlikte Büyüme**: Birbirlerinin evrimine nasıl yardımcı olabilecekleri\n8. **Yakınlık Potansiyeli**: Fiziksel ve duygusal yakınlık\n9. **Uzun Vadeli Uygulanabilirlik**: İlişkinin sürdürülebilirliği\n10. **Uyumluluk İçgörüsü**: Bağlantılarına özgü kişiselleştirilmiş, düşündürücü bir gözlem\n\nBu okumanın bu iki birey için özel olarak yazıldığını hissettir. Canlı, şiirsel dil kullan. Asla şablon kullanma. Birbirleri hakkındaki duyguları hakkında yansıtıcı bir soruyla bitir."
                )
            }
            Language::En => {
                let details = lines([
                    present(&self.name1).map(|n| format!("{p1}'s name: {n}")),
                    present(&self.name2).map(|n| format!("{p2}'s name: {n}")),
                    present(&self.birth_date1).map(|d| format!("{p1}'s birthdate: {d}")),
                    present(&self.birth_date2).map(|d| format!("{p2}'s birthdate: {d}")),
                    upper(&self.sign1).map(|s| format!("{p1}'s zodiac sign: {s}")),
                    upper(&self.sign2).map(|s| format!("{p2}'s zodiac sign: {s}")),
                ]);
                format!(
                    "Analyze the love compatibility between {p1} and {p2}.\n{details}\n\nCreate a deeply personal, emotionally intelligent compatibility reading that includes:\n\n1. **Relationship Energy**: Describe the overall energetic dynamic between these two\n2. **Love Compatibility**: Physical, emotional, and spiritual attraction potential\n3. **Communication Dynamics**: How they likely understand each other\n4. **Emotional Connection**: Depth and authenticity potential\n5. **Shared Values**: What might bind them together\n6. **Potential Challenges**: Honest obstacles they may face\n7. **Growth Together**: How they could help each other evolve\n8. **Intimacy Potential**: Physical and emotional closeness\n9. **Long-term Viability**: Sustainability of the relationship\n10. **Compatibility Insight**: A personalized, thought-provoking observation unique to their connection\n\nMake this reading feel like it was written specifically for these two individuals. Use vivid, poetic language. Never use templates. End with a reflective question about their feelings for each other."
                )
            }
        };
        Prompt::new(Domain::Compatibility, language, user)
    }
}

fn person(sign: &Option<String>, name: &Option<String>) -> String {
    match present(sign) {
        Some(sign) => format!("{} sign", sign.to_uppercase()),
        None => present(name).unwrap_or_default().to_owned(),
    }
}

/// Soulmate and romantic path guidance for one person.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoulmateInsight {
    pub name: String,
    pub birth_date: Option<String>,
    pub sign: Option<String>,
    pub question: Option<String>,
}

impl SoulmateInsight {
    /// Build the soulmate prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let user = match language {
            Language::Tr => format!(
                "{}\n\nRomantik yolları hakkında kişiselleştirilmiş bir ruhsal okuma oluştur:\n1. Romantik enerjileri ve doğal olarak çektikleri\n2. Ruhlarının aradığı partner türü\n3. Mevcut ilişki kalıpları ve karma\n4. Aşk için zamanlama ve hazır olma\n5. Yakınlık etrafındaki engeller veya korkular\n6. Romantik yolculuklarındaki ruhsal dersler\n7. Gerçek eşlerinde aramaları gereken işaretler\n8. Düşünmeleri gereken sonraki adımlar\n9. Aşk yolculukları için güçlü bir onaylama\n\nBu okumanın derinlemesine kişisel ve ruhsal olarak yönlendirilmiş olduğunu hissettir. Sezgisel, sıcak dil kullan. Bir yansıtıcı soru ekle.",
                lines([
                    Some(format!("{} için ruh eşi ve romantik rehberlik sağla.", self.name)),
                    present(&self.birth_date).map(|d| format!("Doğum tarihi: {d}")),
                    present(&self.sign).map(|s| format!("Burç: {s}")),
                    present(&self.question).map(|q| format!("Sorusu/endişesi: {q}")),
                ])
            ),
            Language::En => format!(
                "{}\n\nCreate a personalized spiritual reading about their romantic path that includes:\n1. Their romantic energy and what they naturally attract\n2. The kind of partner their soul seeks\n3. Current relationship patterns and karma\n4. Timing and readiness for love\n5. Blocks or fears around intimacy\n6. Spiritual lessons in their romantic journey\n7. Signs to look for in their true match\n8. Next steps they should consider\n9. A powerful affirmation for their love journey\n\nMake this feel deeply personal and spiritually guided. Use intuitive, warm language. Include one reflective question.",
                lines([
                    Some(format!("Provide soulmate and romantic guidance for {}.", self.name)),
                    present(&self.birth_date).map(|d| format!("Birthdate: {d}")),
                    present(&self.sign).map(|s| format!("Zodiac sign: {s}")),
                    present(&self.question).map(|q| format!("Their question/concern: {q}")),
                ])
            ),
        };
        Prompt::new(Domain::Compatibility, language, user)
    }
}
