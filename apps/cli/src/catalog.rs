//! Fixed selection tables and prompt templates. These are caller-side
//! configuration data: the client forwards the chosen labels verbatim and
//! never interprets them.

/// Languages offered for the optimised output. Labels are sent to the
/// endpoint exactly as written here.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Español",
    "Deutsch",
    "Français",
    "Italiano",
    "中文 (Mandarin)",
    "العربية (Arabic)",
    "हिन्दी (Hindi)",
    "日本語 (Japanese)",
    "Português (Portuguese)",
    "Русский (Russian)",
];

/// Case-insensitive lookup of a language label, returning the canonical
/// spelling from [`LANGUAGES`].
pub fn parse_language(label: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(label.trim()))
        .copied()
}

/// Who the optimised text is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Child,
    Teenager,
    AdultPatient,
    Carer,
    Nurse,
    Pharmacist,
    Doctor,
    Specialist,
    Payer,
    Msl,
}

/// All audiences, in presentation order.
pub const AUDIENCES: &[Audience] = &[
    Audience::Child,
    Audience::Teenager,
    Audience::AdultPatient,
    Audience::Carer,
    Audience::Nurse,
    Audience::Pharmacist,
    Audience::Doctor,
    Audience::Specialist,
    Audience::Payer,
    Audience::Msl,
];

impl Audience {
    /// The user-facing label, also the value forwarded on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Child => "Child",
            Audience::Teenager => "Teenager",
            Audience::AdultPatient => "Adult patient",
            Audience::Carer => "Carer",
            Audience::Nurse => "Nurse",
            Audience::Pharmacist => "Pharmacist",
            Audience::Doctor => "Doctor",
            Audience::Specialist => "Specialist",
            Audience::Payer => "Payer",
            Audience::Msl => "MSL",
        }
    }

    /// Prompt template prefixed to the input text for this audience.
    pub fn prompt(&self) -> &'static str {
        match self {
            Audience::Child => {
                "Explain this medical concept as if talking to a 7-year-old child. \
                 Use very simple words, short sentences, and fun analogies. \
                 Avoid any scary or complex medical terms:"
            }
            Audience::Teenager => {
                "Explain this medical information to a teenager. Use language that's \
                 clear but not condescending, relate to their experiences when possible, \
                 and focus on how this information might be relevant to their daily life \
                 or future health:"
            }
            Audience::AdultPatient => {
                "Explain this medical information to an adult patient with no medical \
                 background. Use everyday language, provide context for any necessary \
                 medical terms, and focus on what the patient needs to know for their \
                 health:"
            }
            Audience::Carer => {
                "Adapt this medical information for a family caregiver. Focus on \
                 practical care instructions, signs to watch for, and when to seek \
                 professional help. Include tips for managing care and self-care for \
                 the caregiver:"
            }
            Audience::Nurse => {
                "Present this medical information for a registered nurse. Use \
                 professional terminology, focus on patient care aspects, treatment \
                 protocols, and potential complications to monitor:"
            }
            Audience::Pharmacist => {
                "Adjust this medical information for a pharmacist. Highlight \
                 medication-related aspects, potential drug interactions, dosing \
                 considerations, and key points for patient counseling:"
            }
            Audience::Doctor => {
                "Summarize this medical information for a general practitioner. Use \
                 medical terminology, focus on diagnosis, treatment options, and when \
                 to refer to specialists:"
            }
            Audience::Specialist => {
                "Elaborate on this medical information for a specialist in the \
                 relevant field. Include detailed physiological processes, latest \
                 treatment protocols, recent research findings, and potential areas \
                 for further investigation:"
            }
            Audience::Payer => {
                "Summarize this medical information for a healthcare payer or \
                 insurance professional. Focus on cost implications, treatment \
                 effectiveness, potential for cost savings, and impact on long-term \
                 health outcomes:"
            }
            Audience::Msl => {
                "Expand on this medical information for a Medical Science Liaison. \
                 Include recent clinical trial data, regulatory considerations, \
                 comparisons with current standards of care, and potential impacts on \
                 treatment guidelines:"
            }
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(label: &str) -> Option<Audience> {
        AUDIENCES
            .iter()
            .find(|a| a.label().eq_ignore_ascii_case(label.trim()))
            .copied()
    }
}

/// Optional delivery tone. Absence means "no tone preference".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Confident,
    Friendly,
    Scientific,
    Persuasive,
}

/// All tones, in presentation order.
pub const TONES: &[Tone] = &[
    Tone::Confident,
    Tone::Friendly,
    Tone::Scientific,
    Tone::Persuasive,
];

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Confident => "Confident",
            Tone::Friendly => "Friendly",
            Tone::Scientific => "Scientific",
            Tone::Persuasive => "Persuasive",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Tone::Confident => "Deliver the message in a confident tone.",
            Tone::Friendly => "Make the message sound friendly and approachable.",
            Tone::Scientific => "Use a scientific tone, focusing on data and precision.",
            Tone::Persuasive => {
                "Present the message in a persuasive way to convince the reader."
            }
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(label: &str) -> Option<Tone> {
        TONES
            .iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_audience_has_label_and_prompt() {
        for audience in AUDIENCES {
            assert!(!audience.label().is_empty());
            assert!(audience.prompt().ends_with(':'));
        }
    }

    #[test]
    fn test_audience_parse_round_trips_labels() {
        for audience in AUDIENCES {
            assert_eq!(Audience::parse(audience.label()), Some(*audience));
        }
    }

    #[test]
    fn test_audience_parse_is_case_insensitive() {
        assert_eq!(Audience::parse("adult patient"), Some(Audience::AdultPatient));
        assert_eq!(Audience::parse("  MSL "), Some(Audience::Msl));
        assert_eq!(Audience::parse("msl"), Some(Audience::Msl));
    }

    #[test]
    fn test_audience_parse_rejects_unknown() {
        assert_eq!(Audience::parse("Veterinarian"), None);
        assert_eq!(Audience::parse(""), None);
    }

    #[test]
    fn test_every_tone_has_label_and_prompt() {
        for tone in TONES {
            assert!(!tone.label().is_empty());
            assert!(tone.prompt().ends_with('.'));
        }
    }

    #[test]
    fn test_tone_parse_is_case_insensitive() {
        assert_eq!(Tone::parse("scientific"), Some(Tone::Scientific));
        assert_eq!(Tone::parse("FRIENDLY"), Some(Tone::Friendly));
    }

    #[test]
    fn test_tone_parse_rejects_unknown() {
        assert_eq!(Tone::parse("Sarcastic"), None);
    }

    #[test]
    fn test_parse_language_returns_canonical_spelling() {
        assert_eq!(parse_language("english"), Some("English"));
        assert_eq!(parse_language(" Deutsch "), Some("Deutsch"));
        assert_eq!(parse_language("Klingon"), None);
    }

    #[test]
    fn test_language_table_is_nonempty_and_deduplicated() {
        assert!(LANGUAGES.contains(&"English"));
        let mut seen = std::collections::HashSet::new();
        for lang in LANGUAGES {
            assert!(seen.insert(lang), "duplicate language label: {lang}");
        }
    }
}
