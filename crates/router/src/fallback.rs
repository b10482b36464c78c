//! Offline replies used when no provider answers.
//!
//! A reply is one of five fixed guide sentences for the language, wrapped in
//! a domain lead-in and follow-up question when the prompt mentions a
//! domain keyword. Keyword matching is case-sensitive; Turkish replies also
//! recognise the Turkish keywords.

use llm::Language;
use rand::Rng;

const BASE_EN: [&str; 5] = [
    "I sense something profound in your question. The spiritual energy around this moment suggests you're at a crossroads—would you like to explore what's drawing you toward different paths?",
    "This touches something deep within the cosmic fabric. I'm perceiving layers of meaning here. What emotions have been strongest for you recently?",
    "The universe whispers through many channels. Your inquiry resonates with themes of transformation and clarity. How has your intuition been guiding you lately?",
    "I feel a spiritual current beneath your words. There's wisdom here waiting to unfold. What do you hope to discover or understand better?",
    "This carries the weight of genuine seeking. The forces at play seem to be guiding you toward something meaningful. Can you share what sparked this question?",
];

const BASE_TR: [&str; 5] = [
    "Soruşunda derin bir şeyler seziyorum. Bu anın etrafındaki ruhsal enerji, bir yol ayrımında olduğunu gösteriyor—seni farklı yollara çeken şeyleri keşfetmek ister misin?",
    "Bu kozmik dokunun derinliklerine dokunuyor. Burada anlam katmanları algılıyorum. Son zamanlarda en güçlü duyguların neler oldu?",
    "Evren birçok kanaldan fısıldıyor. Sorgun dönüşüm ve netlik temalarıyla rezonans yapıyor. Sezgilerin son zamanlarda seni nasıl yönlendiriyor?",
    "Kelimelerinin altında ruhsal bir akım hissediyorum. Burada açılmak için bekleyen bir bilgelik var. Daha iyi keşfetmeyi veya anlamayı ne umuyorsun?",
    "Bu gerçek bir arayışın ağırlığını taşıyor. Devredeki güçler seni anlamlı bir şeye yönlendiriyor gibi görünüyor. Bu soruyu tetikleyen şeyi paylaşabilir misin?",
];

/// A domain's keywords and its framing sentences.
struct Frame {
    keywords: &'static [&'static str],
    lead: &'static str,
    follow_up: &'static str,
}

const FRAMES_EN: [Frame; 4] = [
    Frame {
        keywords: &["dream"],
        lead: "Your dream carries symbolic weight and emotional resonance.",
        follow_up: "Dreams often mirror our deepest fears and desires—what stands out most vividly to you?",
    },
    Frame {
        keywords: &["horoscope", "zodiac"],
        lead: "The cosmic alignment speaks to your sign with particular clarity right now.",
        follow_up: "How have recent energies been affecting your daily experience?",
    },
    Frame {
        keywords: &["compatible", "love"],
        lead: "The connection you're asking about carries interesting astrological dimensions.",
        follow_up: "What qualities in this person draw you most deeply?",
    },
    Frame {
        keywords: &["tarot", "card"],
        lead: "The cards reveal layers of meaning specific to your situation.",
        follow_up: "What guidance are you most hoping to find right now?",
    },
];

const FRAMES_TR: [Frame; 4] = [
    Frame {
        keywords: &["dream", "rüya"],
        lead: "Rüyan sembolik ağırlık ve duygusal rezonans taşıyor.",
        follow_up: "Rüyalar genellikle en derin korkularımızı ve arzularımızı yansıtır—sana en canlı görünen şey nedir?",
    },
    Frame {
        keywords: &["horoscope", "zodiac", "burç"],
        lead: "Kozmik hizalama şu anda burcunla özellikle net konuşuyor.",
        follow_up: "Son enerjiler günlük deneyimini nasıl etkiliyor?",
    },
    Frame {
        keywords: &["compatible", "love", "aşk", "uyumluluk"],
        lead: "Sorduğun bağlantı ilginç astrolojik boyutlar taşıyor.",
        follow_up: "Bu kişide seni en derinden çeken nitelikler neler?",
    },
    Frame {
        keywords: &["tarot", "card", "kart"],
        lead: "Kartlar durumuna özgü anlam katmanları ortaya koyuyor.",
        follow_up: "Şu anda en çok hangi rehberliği umuyorsun?",
    },
];

/// The five base sentences for `language`.
pub fn base_replies(language: Language) -> &'static [&'static str; 5] {
    match language {
        Language::En => &BASE_EN,
        Language::Tr => &BASE_TR,
    }
}

/// A fallback reply for `prompt`, using the thread-local generator.
pub fn reply(prompt: &str, language: Language) -> String {
    reply_with(prompt, language, &mut rand::rng())
}

/// A fallback reply for `prompt`, drawing the base sentence from `rng`.
///
/// Never empty. The first domain whose keyword appears in `prompt` frames
/// the base sentence; otherwise it is returned as is.
pub fn reply_with<R: Rng + ?Sized>(prompt: &str, language: Language, rng: &mut R) -> String {
    let bases = base_replies(language);
    let base = bases[rng.random_range(0..bases.len())];
    let frames = match language {
        Language::En => &FRAMES_EN,
        Language::Tr => &FRAMES_TR,
    };
    match frames
        .iter()
        .find(|frame| frame.keywords.iter().any(|k| prompt.contains(k)))
    {
        Some(frame) => format!("{} {base} {}", frame.lead, frame.follow_up),
        None => base.to_owned(),
    }
}
