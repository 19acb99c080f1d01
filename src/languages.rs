use std::fmt;

/// Target languages offered by the translation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Telugu,
    Marathi,
    Kannada,
    Bengali,
    Odia,
    Assamese,
    Punjabi,
    Malayalam,
    Gujarati,
    Urdu,
    Sanskrit,
    Nepali,
    Bodo,
    Maithili,
    Sindhi,
    Kashmiri,
    Konkani,
    Dogri,
    GoanKonkani,
    Santali,
}

impl Language {
    pub const ALL: [Language; 23] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Marathi,
        Language::Kannada,
        Language::Bengali,
        Language::Odia,
        Language::Assamese,
        Language::Punjabi,
        Language::Malayalam,
        Language::Gujarati,
        Language::Urdu,
        Language::Sanskrit,
        Language::Nepali,
        Language::Bodo,
        Language::Maithili,
        Language::Sindhi,
        Language::Kashmiri,
        Language::Konkani,
        Language::Dogri,
        Language::GoanKonkani,
        Language::Santali,
    ];

    /// The name sent to the backend as `translate_to`.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
            Language::Kannada => "Kannada",
            Language::Bengali => "Bengali",
            Language::Odia => "Odia",
            Language::Assamese => "Assamese",
            Language::Punjabi => "Punjabi",
            Language::Malayalam => "Malayalam",
            Language::Gujarati => "Gujarati",
            Language::Urdu => "Urdu",
            Language::Sanskrit => "Sanskrit",
            Language::Nepali => "Nepali",
            Language::Bodo => "Bodo",
            Language::Maithili => "Maithili",
            Language::Sindhi => "Sindhi",
            Language::Kashmiri => "Kashmiri",
            Language::Konkani => "Konkani",
            Language::Dogri => "Dogri",
            Language::GoanKonkani => "Goan Konkani",
            Language::Santali => "Santali",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multi,
}

/// The languages currently picked on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSelection {
    Single(Option<Language>),
    /// Kept in pick order, never holds duplicates.
    Multi(Vec<Language>),
}

impl LanguageSelection {
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => LanguageSelection::Single(None),
            SelectionMode::Multi => LanguageSelection::Multi(Vec::new()),
        }
    }

    /// Adds the language, or removes it if it is already picked.
    /// In single mode this behaves like `set`.
    pub fn toggle(&mut self, language: Language) {
        match self {
            LanguageSelection::Single(current) => *current = Some(language),
            LanguageSelection::Multi(picked) => {
                if let Some(pos) = picked.iter().position(|l| *l == language) {
                    picked.remove(pos);
                } else {
                    picked.push(language);
                }
            }
        }
    }

    /// Replaces the selection with exactly this language.
    pub fn set(&mut self, language: Language) {
        match self {
            LanguageSelection::Single(current) => *current = Some(language),
            LanguageSelection::Multi(picked) => {
                picked.clear();
                picked.push(language);
            }
        }
    }

    pub fn contains(&self, language: Language) -> bool {
        match self {
            LanguageSelection::Single(current) => *current == Some(language),
            LanguageSelection::Multi(picked) => picked.contains(&language),
        }
    }

    pub fn languages(&self) -> Vec<Language> {
        match self {
            LanguageSelection::Single(current) => current.iter().copied().collect(),
            LanguageSelection::Multi(picked) => picked.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LanguageSelection::Single(current) => current.is_none(),
            LanguageSelection::Multi(picked) => picked.is_empty(),
        }
    }

    pub fn summary(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.languages()
                .iter()
                .map(Language::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_removes() {
        let mut selection = LanguageSelection::new(SelectionMode::Multi);
        selection.toggle(Language::Hindi);
        selection.toggle(Language::Tamil);
        selection.toggle(Language::Hindi);

        assert_eq!(selection.languages(), vec![Language::Tamil]);
        assert!(!selection.contains(Language::Hindi));
    }

    #[test]
    fn test_single_select_replaces() {
        let mut selection = LanguageSelection::new(SelectionMode::Single);
        selection.set(Language::Hindi);
        selection.set(Language::Bengali);

        assert_eq!(selection.languages(), vec![Language::Bengali]);
        assert!(!selection.contains(Language::Hindi));
    }

    #[test]
    fn test_summary_keeps_pick_order() {
        let mut selection = LanguageSelection::new(SelectionMode::Multi);
        assert_eq!(selection.summary(), None);

        selection.toggle(Language::Tamil);
        selection.toggle(Language::GoanKonkani);
        assert_eq!(selection.summary().as_deref(), Some("Tamil, Goan Konkani"));
    }

    #[test]
    fn test_list_is_unique() {
        let mut names: Vec<_> = Language::ALL.iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Language::ALL.len());
    }
}
