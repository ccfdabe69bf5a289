//! Evaluation criteria tracked by the widget

/// One of the five fixed evaluation criteria, in summation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Aptitude,
    CharacterTraits,
    Fitness,
    Leadership,
    Communication,
}

impl FieldName {
    /// All criteria in their declared order
    pub const ALL: [FieldName; 5] = [
        FieldName::Aptitude,
        FieldName::CharacterTraits,
        FieldName::Fitness,
        FieldName::Leadership,
        FieldName::Communication,
    ];

    /// Value of the input's name attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aptitude => "aptitude",
            Self::CharacterTraits => "character_traits",
            Self::Fitness => "fitness",
            Self::Leadership => "leadership",
            Self::Communication => "communication",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aptitude => "Aptitude",
            Self::CharacterTraits => "Character Traits",
            Self::Fitness => "Fitness",
            Self::Leadership => "Leadership",
            Self::Communication => "Communication",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let names: Vec<&str> = FieldName::ALL.iter().map(FieldName::as_str).collect();
        assert_eq!(
            names,
            vec![
                "aptitude",
                "character_traits",
                "fitness",
                "leadership",
                "communication"
            ]
        );
    }

    #[test]
    fn test_label_is_title_cased_name() {
        for field in FieldName::ALL {
            let expected: Vec<String> = field
                .as_str()
                .split('_')
                .map(|word| {
                    let mut chars = word.chars();
                    chars
                        .next()
                        .map(|first| first.to_uppercase().chain(chars).collect())
                        .unwrap_or_default()
                })
                .collect();
            assert_eq!(field.label(), expected.join(" "));
        }
    }
}
