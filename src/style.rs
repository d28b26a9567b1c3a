use std::fmt;
use std::str::FromStr;

/// Which kind of prompt the model is asked to produce for the uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Stylized,
    Simple,
    Detailed,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 3] = [
        PromptStyle::Stylized,
        PromptStyle::Simple,
        PromptStyle::Detailed,
    ];

    /// The fixed instruction sent to the model for this style.
    pub fn instruction(self) -> &'static str {
        match self {
            PromptStyle::Stylized => {
                "You are an expert prompt engineer for text-to-image models like \
                 Midjourney or Stable Diffusion. Analyze the image and produce a \
                 single comprehensive, highly artistic prompt."
            }
            PromptStyle::Simple => {
                "You are a concise image describer. Provide a brief, straightforward \
                 and accurate description of the image subject and setting in a \
                 single sentence. Do not include artistic details like lighting or \
                 style."
            }
            PromptStyle::Detailed => {
                "You are an expert AI prompt engineer. Analyze the image and produce \
                 a single, comprehensive, highly detailed text prompt suitable for \
                 use in advanced text-to-image tools."
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PromptStyle::Stylized => "stylized",
            PromptStyle::Simple => "simple",
            PromptStyle::Detailed => "detailed",
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stylized" => Ok(PromptStyle::Stylized),
            "simple" => Ok(PromptStyle::Simple),
            "detailed" => Ok(PromptStyle::Detailed),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for style in PromptStyle::ALL {
            assert_eq!(style.as_str().parse::<PromptStyle>(), Ok(style));
        }
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!("artistic".parse::<PromptStyle>().is_err());
        assert!("".parse::<PromptStyle>().is_err());
        assert!("Simple".parse::<PromptStyle>().is_err());
    }

    #[test]
    fn instructions_are_deterministic_and_distinct() {
        for style in PromptStyle::ALL {
            assert_eq!(style.instruction(), style.instruction());
        }
        assert_ne!(
            PromptStyle::Stylized.instruction(),
            PromptStyle::Simple.instruction()
        );
        assert_ne!(
            PromptStyle::Simple.instruction(),
            PromptStyle::Detailed.instruction()
        );
        assert_ne!(
            PromptStyle::Stylized.instruction(),
            PromptStyle::Detailed.instruction()
        );
    }

    #[test]
    fn simple_instruction_forbids_artistic_qualifiers() {
        let text = PromptStyle::Simple.instruction();
        assert!(text.contains("single sentence"));
        assert!(text.contains("Do not include artistic details"));
    }
}
