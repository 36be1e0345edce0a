//! Call orchestration — the caller-side layer between validated input and the
//! optimisation client. Composes the audience/tone prompt prefix, builds one
//! request, and reports the single outcome.

use tracing::{error, info};

use crate::catalog::{Audience, Tone};
use crate::client::{OptimisationRequest, TextOptimiser};
use crate::errors::OptimiseError;

/// Validated input plus the user's selections for one generation.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub language: &'static str,
    pub audience: Audience,
    pub tone: Option<Tone>,
}

impl Generation {
    /// The text actually sent for optimisation: audience prompt, then tone
    /// prompt when a tone is selected, then the user's text.
    fn composed_text(&self) -> String {
        let mut parts = vec![self.audience.prompt()];
        if let Some(tone) = self.tone {
            parts.push(tone.prompt());
        }
        parts.push(&self.text);
        parts.join(" ")
    }

    fn to_request(&self) -> OptimisationRequest {
        OptimisationRequest {
            text: self.composed_text(),
            language: self.language.to_string(),
            audience: self.audience.label().to_string(),
            tone: self.tone.map(|t| t.label().to_string()),
        }
    }
}

/// Runs one optimisation call end to end. Exactly one outcome per invocation;
/// retrying means calling again with a fresh `Generation`.
pub async fn generate(
    optimiser: &dyn TextOptimiser,
    generation: &Generation,
) -> Result<String, OptimiseError> {
    let request = generation.to_request();
    info!(
        language = generation.language,
        audience = generation.audience.label(),
        tone = generation.tone.map(|t| t.label()),
        "requesting optimisation"
    );

    match optimiser.optimise(&request).await {
        Ok(text) => {
            info!(chars = text.chars().count(), "optimisation succeeded");
            Ok(text)
        }
        Err(err) => {
            error!(error = %err, "optimisation failed");
            Err(err)
        }
    }
}
