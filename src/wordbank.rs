use crate::error::{Error, Result};
use crate::info_log;
use crate::solver::WORD_LENGTH;
use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "wordle-helper";

/// Which word list a session plays against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[value(name = "en")]
    English,
    #[value(name = "id")]
    Indonesian,
}

impl Language {
    /// Interpret the answer to the language prompt. `en` picks English, anything else Indonesian.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim().eq_ignore_ascii_case("en") {
            Self::English
        } else {
            Self::Indonesian
        }
    }

    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::English => "en-wordle-list.txt",
            Self::Indonesian => "00-indonesian-wordlist.txt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => f.write_str("English"),
            Self::Indonesian => f.write_str("Indonesian"),
        }
    }
}

/// Parse a newline-delimited list. Words are trimmed and lowercased and
/// blank lines dropped; the Indonesian list additionally keeps only
/// five-letter entries.
#[must_use]
pub fn load_wordbank_from_str(data: &str, language: Language) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .filter(|word| match language {
            Language::English => true,
            Language::Indonesian => word.chars().count() == WORD_LENGTH,
        })
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P, language: Language) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Error::WordListRead {
        path: path.to_path_buf(),
        source,
    })?;
    let words = load_wordbank_from_str(&data, language);
    info_log!(
        "Loaded {} {} words from {}",
        words.len(),
        language,
        path.display()
    );
    Ok(words)
}

/// Find the list for `language`: the default file name in the working
/// directory, then in the user data directory. Falls back to the working
/// directory path so a load error names it.
#[must_use]
pub fn default_wordlist_path(language: Language) -> PathBuf {
    let local = PathBuf::from(language.default_file_name());
    if local.is_file() {
        return local;
    }
    if let Some(data_dir) = dirs::data_dir() {
        let candidate = data_dir
            .join(DATA_DIR_NAME)
            .join(language.default_file_name());
        if candidate.is_file() {
            return candidate;
        }
    }
    local
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordListPaths {
    pub english: PathBuf,
    pub indonesian: PathBuf,
}

impl WordListPaths {
    /// Explicit paths win; missing ones are looked up with [`default_wordlist_path`].
    #[must_use]
    pub fn resolve(english: Option<&Path>, indonesian: Option<&Path>) -> Self {
        Self {
            english: english.map_or_else(
                || default_wordlist_path(Language::English),
                Path::to_path_buf,
            ),
            indonesian: indonesian.map_or_else(
                || default_wordlist_path(Language::Indonesian),
                Path::to_path_buf,
            ),
        }
    }
}

/// Both word lists, loaded once at startup and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct WordLists {
    english: Vec<String>,
    indonesian: Vec<String>,
}

impl WordLists {
    #[must_use]
    pub fn new(english: Vec<String>, indonesian: Vec<String>) -> Self {
        Self {
            english,
            indonesian,
        }
    }

    /// Load both lists. Either one missing or unreadable is an error.
    pub fn load(paths: &WordListPaths) -> Result<Self> {
        Ok(Self {
            english: load_wordbank_from_file(&paths.english, Language::English)?,
            indonesian: load_wordbank_from_file(&paths.indonesian, Language::Indonesian)?,
        })
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &[String] {
        match language {
            Language::English => &self.english,
            Language::Indonesian => &self.indonesian,
        }
    }
}
