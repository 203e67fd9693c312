use serde::{Deserialize, Serialize};

/// Fixed visual preset applied uniformly across a deck.
///
/// The set is closed: every style maps to exactly one color triple and one
/// prompt tone hint, defined once at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationStyle {
    Corporate,
    Creative,
    Minimal,
    Dark,
    Gradient,
    Nature,
}

/// Color triple for one style. Hex RGB without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePalette {
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

impl PresentationStyle {
    pub const ALL: [PresentationStyle; 6] = [
        PresentationStyle::Corporate,
        PresentationStyle::Creative,
        PresentationStyle::Minimal,
        PresentationStyle::Dark,
        PresentationStyle::Gradient,
        PresentationStyle::Nature,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PresentationStyle::Corporate => "corporate",
            PresentationStyle::Creative => "creative",
            PresentationStyle::Minimal => "minimal",
            PresentationStyle::Dark => "dark",
            PresentationStyle::Gradient => "gradient",
            PresentationStyle::Nature => "nature",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "corporate" => Some(PresentationStyle::Corporate),
            "creative" => Some(PresentationStyle::Creative),
            "minimal" => Some(PresentationStyle::Minimal),
            "dark" => Some(PresentationStyle::Dark),
            "gradient" => Some(PresentationStyle::Gradient),
            "nature" => Some(PresentationStyle::Nature),
            _ => None,
        }
    }

    /// Display label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            PresentationStyle::Corporate => "Корпоративный",
            PresentationStyle::Creative => "Творческий",
            PresentationStyle::Minimal => "Минимализм",
            PresentationStyle::Dark => "Тёмный",
            PresentationStyle::Gradient => "Градиент",
            PresentationStyle::Nature => "Природа",
        }
    }

    /// Tone hint embedded into the generation prompt.
    pub fn prompt_hint(self) -> &'static str {
        match self {
            PresentationStyle::Corporate => {
                "professional corporate business style, formal tone, structured content"
            }
            PresentationStyle::Creative => {
                "creative colorful energetic style, engaging storytelling, dynamic content"
            }
            PresentationStyle::Minimal => {
                "minimalist clean style, concise bullet points, whitespace focused"
            }
            PresentationStyle::Dark => {
                "sleek dark modern tech style, bold statements, impactful data"
            }
            PresentationStyle::Gradient => {
                "vibrant gradient modern style, trendy design language, bold typography"
            }
            PresentationStyle::Nature => {
                "natural organic style, eco-friendly tone, calm and balanced content"
            }
        }
    }

    pub fn palette(self) -> StylePalette {
        match self {
            PresentationStyle::Corporate => StylePalette {
                background: "1E3A5F",
                accent: "2563EB",
                text: "FFFFFF",
            },
            PresentationStyle::Creative => StylePalette {
                background: "7C3AED",
                accent: "F59E0B",
                text: "FFFFFF",
            },
            PresentationStyle::Minimal => StylePalette {
                background: "F8FAFC",
                accent: "0F172A",
                text: "0F172A",
            },
            PresentationStyle::Dark => StylePalette {
                background: "0F172A",
                accent: "A855F7",
                text: "F1F5F9",
            },
            PresentationStyle::Gradient => StylePalette {
                background: "1E1B4B",
                accent: "EC4899",
                text: "FFFFFF",
            },
            PresentationStyle::Nature => StylePalette {
                background: "14532D",
                accent: "22C55E",
                text: "FFFFFF",
            },
        }
    }
}

impl std::str::FromStr for PresentationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresentationStyle::from_id(s).ok_or_else(|| {
            let known: Vec<_> = PresentationStyle::ALL.iter().map(|s| s.id()).collect();
            format!("unknown style `{s}`, expected one of: {}", known.join(", "))
        })
    }
}

impl std::fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() so width/alignment flags apply in column output.
        f.pad(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_resolves_to_one_palette() {
        for style in PresentationStyle::ALL {
            let palette = style.palette();
            assert_eq!(palette.background.len(), 6);
            assert_eq!(palette.accent.len(), 6);
            assert_eq!(palette.text.len(), 6);
        }
    }

    #[test]
    fn style_ids_round_trip() {
        for style in PresentationStyle::ALL {
            assert_eq!(PresentationStyle::from_id(style.id()), Some(style));
        }
        assert_eq!(PresentationStyle::from_id("DARK"), Some(PresentationStyle::Dark));
        assert_eq!(PresentationStyle::from_id("vaporwave"), None);
    }

    #[test]
    fn parse_and_display_round_trip() {
        for style in PresentationStyle::ALL {
            assert_eq!(style.to_string().parse::<PresentationStyle>(), Ok(style));
        }
        let err = match "vaporwave".parse::<PresentationStyle>() {
            Ok(_) => panic!("vaporwave must not parse"),
            Err(e) => e,
        };
        assert!(err.contains("unknown style `vaporwave`"));
        assert!(err.contains("corporate"));
    }
}
