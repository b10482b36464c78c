//! Offline fallback replies.

use kismet_router::fallback::{base_replies, reply, reply_with};
use llm::Language;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn dream_prompt_mentions_dream_and_asks() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let text = reply_with("tell me about my dream", Language::En, &mut rng);
        assert!(text.contains("Dream"), "{text}");
        assert!(text.ends_with('?'));
    }
}

#[test]
fn domain_frames_wrap_base_sentence() {
    let cases = [
        ("my zodiac this week", "The cosmic alignment"),
        ("are we compatible?", "The connection you're asking about"),
        ("pull a tarot spread", "The cards reveal"),
    ];
    for (prompt, lead) in cases {
        let text = reply(prompt, Language::En);
        assert!(text.starts_with(lead), "{prompt}: {text}");
        assert!(
            base_replies(Language::En)
                .iter()
                .any(|base| text.contains(base))
        );
    }
}

#[test]
fn turkish_replies_never_use_english_sentences() {
    for prompt in ["rüya", "burç yorumu", "aşk", "kart çek", "dream", "merhaba"] {
        let text = reply(prompt, Language::Tr);
        assert!(!text.is_empty());
        assert!(
            base_replies(Language::Tr)
                .iter()
                .any(|base| text.contains(base))
        );
        assert!(
            !base_replies(Language::En)
                .iter()
                .any(|base| text.contains(base))
        );
    }
}

#[test]
fn every_base_sentence_is_reachable() {
    let mut rng = StdRng::seed_from_u64(11);
    let seen: std::collections::HashSet<_> = (0..500)
        .map(|_| reply_with("hello", Language::En, &mut rng))
        .collect();
    assert_eq!(seen.len(), 5);
}
