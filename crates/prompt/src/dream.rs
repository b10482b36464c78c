//! Dream interpretation prompts.

use crate::{Domain, Language, Prompt, lines, present};
use serde::Deserialize;

/// A dream to interpret.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DreamReading {
    /// What the dreamer remembers.
    pub description: String,
    /// How they felt on waking.
    pub mood: Option<String>,
    /// When the dream happened.
    pub date: Option<String>,
}

impl DreamReading {
    /// Build the interpretation prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let mood = present(&self.mood);
        let date = present(&self.date);
        let user = match language {
            Language::Tr => format!(
                "Aşağıdaki rüyayı Türkçe olarak yorumla. Önce kısa bir özet ver, sonra duygusal ve psikolojik bir analiz yap, en sonda da kullanıcının hayatında dikkat etmesi gereken 2–3 somut öneri ver.\n\n{}\n\nSembolik anlamlar, arketipler, psikolojik içgörüler, duygusal tonlar ve ruhsal rehberlik içeren zengin, çok katmanlı bir yorumlama yap. Bir veya iki takip sorusu ekle. Derinlemesine kişisel ve sohbet eder gibi ol. Asla şablon veya genel yorumlar kullanma.",
                lines([
                    Some(format!("Rüya: {}", self.description)),
                    mood.map(|m| format!("Uyanınca hissedilen duygu: {m}")),
                    Some(date.map_or("Tarih: belirtilmedi".to_owned(), |d| {
                        format!("Rüya tarihi: {d}")
                    })),
                ])
            ),
            Language::En => format!(
                "Interpret the following dream in English. Start with a short summary, then provide emotional and psychological insight, and finally give 2–3 concrete suggestions the person can apply in daily life.\n\n{}\n\nProvide a rich, multi-layered interpretation that includes:\n1. Symbolic meanings and archetypes\n2. Psychological insights\n3. Emotional undertones\n4. Spiritual guidance\n5. One or two follow-up questions to deepen understanding\n\nKeep it deeply personal and conversational. Never use templates or generic interpretations.",
                lines([
                    Some(format!("Dream: {}", self.description)),
                    mood.map(|m| format!("Mood/Emotion upon waking: {m}")),
                    Some(date.map_or("Date: not specified".to_owned(), |d| {
                        format!("Date of dream: {d}")
                    })),
                ])
            ),
        };
        Prompt::new(Domain::Dream, language, user)
    }
}

/// A single dream symbol to analyze.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymbolAnalysis {
    /// The symbol, e.g. "snake".
    pub symbol: String,
    /// The dream it appeared in.
    pub dream_context: Option<String>,
}

impl SymbolAnalysis {
    /// Build the symbol analysis prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let context = present(&self.dream_context);
        let user = match language {
            Language::Tr => format!(
                "{}\n\nŞunları kapsayan bir analiz yap:\n1. Evrensel sembolik anlamlar\n2. Kişisel psikolojik yorumlar\n3. Ruhsal önem\n4. Rüya görenin hayatına nasıl uygulanabileceği\n5. Daha derin keşif için takip sorusu",
                lines([
                    Some(format!(
                        "\"{}\" sembolünün rüya yorumlama bağlamındaki sembolik anlamını analiz et.",
                        self.symbol
                    )),
                    context.map(|c| format!("Rüya Bağlamı: {c}")),
                ])
            ),
            Language::En => format!(
                "{}\n\nProvide analysis covering:\n1. Universal symbolic meanings\n2. Personal psychological interpretations\n3. Spiritual significance\n4. How it might apply to the dreamer's life\n5. Follow-up question for deeper exploration",
                lines([
                    Some(format!(
                        "Analyze the symbolic meaning of \"{}\" in the context of dream interpretation.",
                        self.symbol
                    )),
                    context.map(|c| format!("Dream Context: {c}")),
                ])
            ),
        };
        Prompt::new(Domain::Dream, language, user)
    }
}
