// src/pipeline/reflection.rs
// Stage 4: supportive reflection, behind a crisis gate

use tracing::{debug, info, warn};

use super::state::{AnalysisRecord, WithKeywords};
use crate::llm::{GenerationRequest, LlmClient};

/// Phrases that route the entry to crisis resources instead of the model
pub const CRISIS_PHRASES: [&str; 7] = [
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "want to die",
    "self-harm",
    "hurt myself",
];

pub const CRISIS_MESSAGE: &str = "🚨 If you're having thoughts of suicide or self-harm, please reach out immediately:

**India:** AASRA 91-9820466726 (24/7) | Vandrevala 1860-2662-345 (24/7)
**USA:** 988 | **UK:** 116 123

You don't have to face this alone.";

pub const FALLBACK_REFLECTION: &str = "That sounds tough. Thanks for sharing.";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 50;

const QUOTE_CHARS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

pub fn is_crisis(user_input: &str) -> bool {
    let lower = user_input.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

pub fn build_prompt(user_input: &str) -> String {
    format!(
        r#"You are a supportive friend, not a therapist.
The user wrote: "{user_input}"

Write a warm reply that:
- Validates their feelings clearly
- Reflects the emotion they expressed using their OWN wording
- Offers one gentle, universal coping idea (e.g., take a short break, drink water, breathe, write thoughts down, stretch)
- Encourages self-kindness
- NEVER diagnose or mention disorders
- NEVER assume trauma or deep personal history
- NEVER minimize feelings or say "you'll be fine"
- Avoid commands like "you should" or "stop worrying"
- Maximum 3 short sentences, friendly and natural tone

Good examples:
- "It makes sense you'd feel overwhelmed with all that happening. Maybe a tiny break or a deep breath could help clear your head. You deserve a little kindness toward yourself today."
- "Feeling disconnected can be really tough. Doing something small you enjoy might lift you a bit. Take a moment for yourself if you can."

Your response:"#
    )
}

/// Strip whitespace and surrounding quotes; `None` if nothing is left
pub fn clean_reflection(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_matches(&QUOTE_CHARS[..]).trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

pub async fn generate_reflection(
    client: &dyn LlmClient,
    model: &str,
    state: WithKeywords,
) -> AnalysisRecord {
    if is_crisis(state.user_input()) {
        info!(stage = "reflection", "Crisis language detected, returning crisis resources");
        return state.with_reflection(CRISIS_MESSAGE);
    }

    let request = GenerationRequest::new(build_prompt(state.user_input()), model)
        .with_temperature(TEMPERATURE)
        .with_max_output_tokens(MAX_OUTPUT_TOKENS);

    let reflection = match client.generate(request).await {
        Ok(raw) => clean_reflection(&raw).unwrap_or_else(|| {
            warn!(stage = "reflection", "Reply was only quotes, using fallback");
            FALLBACK_REFLECTION.to_string()
        }),
        Err(e) => {
            warn!(stage = "reflection", error = %e, "Generation failed, using fallback");
            FALLBACK_REFLECTION.to_string()
        }
    };

    debug!(stage = "reflection", reflection_len = reflection.len(), "Stage complete");
    state.with_reflection(reflection)
}
