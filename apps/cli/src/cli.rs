use clap::Parser;

use crate::catalog::{parse_language, Audience, Tone, AUDIENCES, LANGUAGES, TONES};
use crate::generation::Generation;
use crate::validation::validate_input;

#[derive(Parser, Debug)]
#[command(
    name = "llmentor",
    version,
    about = "Optimise medical text for any audience"
)]
pub struct Cli {
    /// The medical text to optimise (at most 500 characters).
    pub text: String,

    /// Output language.
    #[arg(long, default_value = "English")]
    pub language: String,

    /// Who the optimised text is written for.
    #[arg(long, default_value = "Adult patient")]
    pub audience: String,

    /// Delivery tone. Omit for no tone preference.
    #[arg(long)]
    pub tone: Option<String>,
}

impl Cli {
    /// Validates the input and resolves the selections against the catalog.
    pub fn into_generation(self) -> anyhow::Result<Generation> {
        validate_input(&self.text)?;

        let language = parse_language(&self.language).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown language '{}'; expected one of: {}",
                self.language,
                LANGUAGES.join(", ")
            )
        })?;

        let audience = Audience::parse(&self.audience).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown audience '{}'; expected one of: {}",
                self.audience,
                AUDIENCES
                    .iter()
                    .map(|a| a.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;

        let tone = match &self.tone {
            Some(label) => Some(Tone::parse(label).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown tone '{label}'; expected one of: {}",
                    TONES
                        .iter()
                        .map(|t| t.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?),
            None => None,
        };

        Ok(Generation {
            text: self.text,
            language,
            audience,
            tone,
        })
    }
}
