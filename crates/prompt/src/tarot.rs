//! Tarot deck, spreads and drawing.

use crate::{Domain, Language, Prompt};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// A major arcana card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub id: u8,
    pub name: &'static str,
    pub arcana: &'static str,
}

const fn major(id: u8, name: &'static str) -> Card {
    Card {
        id,
        name,
        arcana: "major",
    }
}

/// The 22-card major arcana.
pub const DECK: [Card; 22] = [
    major(0, "The Fool"),
    major(1, "The Magician"),
    major(2, "The High Priestess"),
    major(3, "The Empress"),
    major(4, "The Emperor"),
    major(5, "The Hierophant"),
    major(6, "The Lovers"),
    major(7, "The Chariot"),
    major(8, "Strength"),
    major(9, "The Hermit"),
    major(10, "Wheel of Fortune"),
    major(11, "Justice"),
    major(12, "The Hanged Man"),
    major(13, "Death"),
    major(14, "Temperance"),
    major(15, "The Devil"),
    major(16, "The Tower"),
    major(17, "The Star"),
    major(18, "The Moon"),
    major(19, "The Sun"),
    major(20, "Judgement"),
    major(21, "The World"),
];

/// A card as drawn, upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub card: Card,
    pub reversed: bool,
}

impl DrawnCard {
    /// Card name with a reversal marker, e.g. `"The Moon (Reversed)"`.
    pub fn label(&self) -> String {
        if self.reversed {
            format!("{} (Reversed)", self.card.name)
        } else {
            self.card.name.to_owned()
        }
    }
}

/// Spread layouts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spread {
    #[default]
    Single,
    ThreeCard,
    Horseshoe,
    CelticCross,
}

impl Spread {
    /// Parse a spread type. Unknown values read as a single card.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().replace('-', "_").as_str() {
            "threesome" | "three_card" | "three" => Self::ThreeCard,
            "horseshoe" => Self::Horseshoe,
            "celtic_cross" => Self::CelticCross,
            _ => Self::Single,
        }
    }

    /// Number of cards the spread lays out.
    pub const fn card_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::ThreeCard => 3,
            Self::Horseshoe => 7,
            Self::CelticCross => 10,
        }
    }

    /// Localized spread name.
    pub const fn name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Single, Language::En) => "Single Card",
            (Self::Single, Language::Tr) => "Tek Kart",
            (Self::ThreeCard, Language::En) => "Past-Present-Future",
            (Self::ThreeCard, Language::Tr) => "Geçmiş-Şimdi-Gelecek",
            (Self::Horseshoe, Language::En) => "Horseshoe",
            (Self::Horseshoe, Language::Tr) => "At Nalı",
            (Self::CelticCross, Language::En) => "Celtic Cross",
            (Self::CelticCross, Language::Tr) => "Kelt Haçı",
        }
    }
}

impl<'de> Deserialize<'de> for Spread {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Draw `count` distinct cards without replacement.
///
/// Each pick is uniform over the cards still in the pile and each drawn card
/// is independently reversed with probability 0.5. Asking for more cards
/// than the deck holds returns the whole deck.
pub fn draw<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<DrawnCard> {
    let mut pile = DECK.to_vec();
    let mut drawn = Vec::with_capacity(count.min(DECK.len()));
    while drawn.len() < count && !pile.is_empty() {
        let card = pile.remove(rng.random_range(0..pile.len()));
        drawn.push(DrawnCard {
            card,
            reversed: rng.random_bool(0.5),
        });
    }
    drawn
}

/// [`draw`] with the thread-local generator.
pub fn draw_cards(count: usize) -> Vec<DrawnCard> {
    draw(count, &mut rand::rng())
}

/// A tarot question answered with a drawn spread.
#[derive(Debug, Clone)]
pub struct TarotReading {
    pub question: String,
    pub spread: Spread,
    pub cards: Vec<DrawnCard>,
}

impl TarotReading {
    /// Draw the spread's cards for `question`.
    pub fn draw(question: impl Into<String>, spread: Spread) -> Self {
        Self {
            question: question.into(),
            spread,
            cards: draw_cards(spread.card_count()),
        }
    }

    /// Comma separated card names.
    pub fn card_names(&self) -> String {
        self.cards
            .iter()
            .map(|drawn| drawn.card.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Card labels with reversal markers.
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(DrawnCard::label).collect()
    }

    /// Build the reading prompt.
    pub fn prompt(&self, language: Language) -> Prompt {
        let question = &self.question;
        let spread = self.spread.name(language);
        let names = self.card_names();
        let positions = self.labels().join(" | ");
        let user = match language {
            Language::Tr => format!(
                "Kullanıcı şunu soruyor: \"{question}\"\n\nTarot Yayılımı: {spread}\nÇekilen kartlar: {names}\nKart pozisyonları (varsa ters): {positions}\n\nŞunları içeren nüanslı, kişiselleştirilmiş bir tarot yorumu yap:\n1. Belirli soruyu ve arkasındaki duygusal ağırlığı kabul et\n2. Her kartı soru ve yayılım pozisyonuyla ilişkili olarak yorumla\n3. Kartları tutarlı bir rehberliğe bağlayan bir anlatı ör\n4. Hem yüzeysel hem de daha derin sembolik anlamları keşfet\n5. Eyleme geçirilebilir ruhsal içgörü sağla\n6. Okumayı derinleştirmek için 1-2 takip sorusu ekle\n\nBu okumanın deneyimli, empatik bir tarot okuyucusundan geldiğini hissettir. Asla genel kart anlamları kullanma. Soruya göre özelleştir."
            ),
            Language::En => format!(
                "User is asking: \"{question}\"\n\nTarot Spread: {spread}\nCards drawn: {names}\nCard positions (reversed if applicable): {positions}\n\nProvide a nuanced, personalized tarot interpretation that:\n1. Acknowledges the specific question and emotional weight behind it\n2. Interprets each card in relation to the question and spread position\n3. Weaves a narrative that connects the cards into cohesive guidance\n4. Explores both surface and deeper symbolic meanings\n5. Provides actionable spiritual insight\n6. Includes 1-2 follow-up questions to deepen the reading\n\nMake this feel like a reading from an experienced, empathetic tarot reader. Never use generic card meanings. Customize based on the question."
            ),
        };
        Prompt::new(Domain::Tarot, language, user)
    }
}
