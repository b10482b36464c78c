//! Kismet chat, daily guidance and spiritual advice prompts.

use crate::{Domain, Language, Prompt, lines, present};
use serde::Deserialize;

/// Number of trailing conversation turns carried into the context.
pub const HISTORY_WINDOW: usize = 6;

/// Who said a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    #[serde(other)]
    Kismet,
}

/// One turn of prior conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub role: Speaker,
    #[serde(default)]
    pub content: String,
}

/// A chat message with optional history and user context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatAsk {
    pub message: String,
    pub conversation_history: Vec<ChatTurn>,
    pub context: Option<String>,
}

impl ChatAsk {
    /// The instruction and the quoted user message.
    pub fn prompt(&self, language: Language) -> Prompt {
        let message = &self.message;
        let user = match language {
            Language::Tr => format!(
                "Kullanıcıya ruhsal sıcaklık, içgörü ve merakla yanıt ver.\n\nKullanıcı diyor: \"{message}\""
            ),
            Language::En => format!(
                "Respond to the user with spiritual warmth, insight, and curiosity.\n\nUser says: \"{message}\""
            ),
        };
        Prompt::new(Domain::Chat, language, user)
    }

    /// Persona block, user context and the last [`HISTORY_WINDOW`] turns.
    pub fn context(&self, language: Language) -> String {
        let user_context = present(&self.context).map(|c| {
            format!("{}: {c}", language.pick("User Context", "Kullanıcı Bağlamı"))
        });
        let skip = self.conversation_history.len().saturating_sub(HISTORY_WINDOW);
        let history = (!self.conversation_history.is_empty()).then(|| {
            let turns = self.conversation_history[skip..]
                .iter()
                .map(|turn| {
                    let who = match turn.role {
                        Speaker::User => language.pick("User", "Kullanıcı"),
                        Speaker::Kismet => "Kismet",
                    };
                    format!("{who}: {}", turn.content)
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "{}:\n{turns}",
                language.pick("Recent conversation", "Son konuşma")
            )
        });
        lines([
            Some(language.pick(PERSONA_EN, PERSONA_TR).to_owned()),
            user_context,
            history,
        ])
    }
}

const PERSONA_EN: &str = "You are Kismet, a warm, empathetic spiritual guide and advisor.
Your responses are emotionally intelligent, deeply personal, poetic, and conversational.
Always ask a follow-up question.
Never use templates.
Minimum 2–3 paragraphs.
You specialize in:
- Dream interpretation
- Astrology
- Tarot
- Love guidance
- Spiritual counseling
- Energetic alignment";

const PERSONA_TR: &str = "Sen Kismet'sin, sıcak ve empatik bir ruhsal rehber ve danışmansın.
Yanıtların duygusal olarak zeki, derinlemesine kişisel, şiirsel ve sohbet eder gibi.
Her zaman bir takip sorusu sor.
Asla şablon kullanma.
En az 2–3 paragraf.
Şunlarda uzmanlaşmışsın:
- Rüya yorumlama
- Astroloji
- Tarot
- Aşk rehberliği
- Ruhsal danışmanlık
- Enerjik hizalama";

/// Daily guidance request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailyGuidance {
    pub sign: Option<String>,
    pub name: Option<String>,
    pub focus: Option<String>,
}

impl DailyGuidance {
    /// Build the daily guidance prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let sign = present(&self.sign);
        let name = present(&self.name);
        let focus = present(&self.focus);
        let user = match language {
            Language::Tr => format!(
                "Kişiselleştirilmiş günlük ruhsal rehberlik oluştur{}{}.\nOdak: {}\n\nŞunları içer:\n1. Ruhsal yansıtma\n2. Günün niyeti\n3. Pratik topraklama önerisi\n4. Enerjik içgörü\n5. Bir sıcak takip sorusu",
                sign.map(|s| format!(" {s} burcu için")).unwrap_or_default(),
                name.map(|n| format!(" {n} için")).unwrap_or_default(),
                focus.unwrap_or("Genel odak"),
            ),
            Language::En => format!(
                "Generate personalized daily spiritual guidance{}{}.\nFocus: {}\n\nInclude:\n1. Spiritual reflection\n2. Intention for the day\n3. Practical grounding suggestion\n4. Energetic insight\n5. One warm follow-up question",
                sign.map(|s| format!(" for {s}")).unwrap_or_default(),
                name.map(|n| format!(" for {n}")).unwrap_or_default(),
                focus.unwrap_or("General focus"),
            ),
        };
        Prompt::new(Domain::Chat, language, user)
    }
}

/// Spiritual advice about a situation or question.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpiritualAdvice {
    pub situation: Option<String>,
    pub question: Option<String>,
    pub context: Option<String>,
}

impl SpiritualAdvice {
    /// The question, or the situation when no question was asked.
    pub fn topic(&self) -> Option<&str> {
        present(&self.question).or_else(|| present(&self.situation))
    }

    /// Build the advice prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let topic = self.topic().unwrap_or_default();
        let context = present(&self.context);
        let user = match language {
            Language::Tr => format!(
                "{}\n\nŞunları sağlayan tavsiye ver:\n- Duygusal/ruhsal durumu kabul et\n- Çoklu gelenek ruhsal perspektifler sun\n- Ritüeller veya uygulamalar öner\n- Kozmik/enerjik kalıplara bağla\n- Sezgileri teşvik et\n- Bir nazik takip sorusu sor",
                lines([
                    Some(format!("Bir kişi şu konuda rehberlik arıyor: {topic}")),
                    context.map(|c| format!("Daha fazla bağlam: {c}")),
                ])
            ),
            Language::En => format!(
                "{}\n\nProvide advice that:\n- Acknowledges emotional/spiritual state\n- Offers multi-tradition spiritual perspectives\n- Suggests rituals or practices\n- Connects to cosmic/energetic patterns\n- Encourages intuition\n- Asks one gentle follow-up question",
                lines([
                    Some(format!("A person seeks guidance about: {topic}")),
                    context.map(|c| format!("More context: {c}")),
                ])
            ),
        };
        Prompt::new(Domain::Chat, language, user)
    }
}
