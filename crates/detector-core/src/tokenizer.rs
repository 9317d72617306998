//! Word-index tokenizer loaded from a Keras `Tokenizer` JSON export.
//!
//! The export nests JSON inside JSON: `config.word_index` is a string holding
//! the word → index map. The whole document may also arrive double-encoded
//! (a JSON string whose contents are the export), which is what
//! `json.dump(tokenizer.to_json(), f)` produces.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

#[derive(Debug, Deserialize)]
struct Export {
    config: ExportConfig,
}

#[derive(Debug, Deserialize)]
struct ExportConfig {
    #[serde(default)]
    num_words: Option<usize>,
    #[serde(default = "default_filters")]
    filters: String,
    #[serde(default = "default_true")]
    lower: bool,
    #[serde(default = "default_split")]
    split: String,
    #[serde(default)]
    char_level: bool,
    #[serde(default)]
    oov_token: Option<String>,
    word_index: Option<Value>,
}

fn default_filters() -> String {
    DEFAULT_FILTERS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_split() -> String {
    " ".to_string()
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_index: HashMap<String, u32>,
    num_words: Option<usize>,
    filters: Vec<char>,
    lower: bool,
    split: String,
    char_level: bool,
    oov_index: Option<u32>,
}

impl Tokenizer {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading tokenizer {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("parsing tokenizer {}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(data)?;
        if let Value::String(inner) = value {
            value = serde_json::from_str(&inner).context("decoding double-encoded export")?;
        }
        let export: Export = serde_json::from_value(value)?;
        let config = export.config;

        let word_index = match config.word_index {
            Some(Value::String(s)) => serde_json::from_str::<HashMap<String, u32>>(&s)
                .context("decoding word_index")?,
            Some(v @ Value::Object(_)) => serde_json::from_value(v).context("decoding word_index")?,
            Some(other) => bail!("word_index has unexpected type: {other}"),
            None => return Err(anyhow!("tokenizer export has no word_index")),
        };

        let oov_index = config
            .oov_token
            .as_ref()
            .and_then(|tok| word_index.get(tok).copied());

        log::debug!(
            "tokenizer: {} words, num_words={:?}, oov={:?}",
            word_index.len(),
            config.num_words,
            config.oov_token
        );

        Ok(Self {
            word_index,
            // Keras treats num_words=0 like None.
            num_words: config.num_words.filter(|&n| n > 0),
            filters: config.filters.chars().collect(),
            lower: config.lower,
            split: config.split,
            char_level: config.char_level,
            oov_index,
        })
    }

    pub fn vocab_size(&self) -> usize {
        self.word_index.len()
    }

    /// Map text to word indices. Unknown words become the OOV index when the
    /// tokenizer has one and are dropped otherwise.
    pub fn texts_to_sequence(&self, text: &str) -> Vec<u32> {
        let text = if self.lower {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        if self.char_level {
            let mut buf = [0u8; 4];
            return text
                .chars()
                .filter_map(|c| self.lookup(c.encode_utf8(&mut buf)))
                .collect();
        }

        let replaced: String = text
            .chars()
            .map(|c| {
                if self.filters.contains(&c) {
                    self.split.clone()
                } else {
                    c.to_string()
                }
            })
            .collect();

        replaced
            .split(self.split.as_str())
            .filter(|w| !w.is_empty())
            .filter_map(|w| self.lookup(w))
            .collect()
    }

    fn lookup(&self, word: &str) -> Option<u32> {
        match self.word_index.get(word) {
            Some(&i) => match self.num_words {
                Some(limit) if i as usize >= limit => self.oov_index,
                _ => Some(i),
            },
            None => self.oov_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn export(num_words: Value, oov: Value) -> Value {
        let word_index = serde_json::json!({"<OOV>": 1, "i": 2, "feel": 3, "sad": 4, "today": 5});
        serde_json::json!({
            "class_name": "Tokenizer",
            "config": {
                "num_words": num_words,
                "filters": DEFAULT_FILTERS,
                "lower": true,
                "split": " ",
                "char_level": false,
                "oov_token": oov,
                "document_count": 3,
                "word_index": word_index.to_string(),
            }
        })
    }

    #[test]
    fn maps_known_words_and_oov() {
        let tok = Tokenizer::from_json(&export(Value::Null, "<OOV>".into()).to_string()).unwrap();
        assert_eq!(tok.texts_to_sequence("I feel very sad"), vec![2, 3, 1, 4]);
        assert_eq!(tok.vocab_size(), 5);
    }

    #[test]
    fn drops_unknown_words_without_oov() {
        let tok = Tokenizer::from_json(&export(Value::Null, Value::Null).to_string()).unwrap();
        assert_eq!(tok.texts_to_sequence("i feel very sad"), vec![2, 3, 4]);
    }

    #[test]
    fn num_words_caps_the_vocabulary() {
        let tok = Tokenizer::from_json(&export(4.into(), "<OOV>".into()).to_string()).unwrap();
        assert_eq!(tok.texts_to_sequence("i feel sad today"), vec![2, 3, 1, 1]);

        let tok = Tokenizer::from_json(&export(4.into(), Value::Null).to_string()).unwrap();
        assert_eq!(tok.texts_to_sequence("i feel sad today"), vec![2, 3]);
    }

    #[test]
    fn filters_split_words_and_lowercase() {
        let tok = Tokenizer::from_json(&export(Value::Null, Value::Null).to_string()).unwrap();
        assert_eq!(tok.texts_to_sequence("I,FEEL...sad\ttoday!"), vec![2, 3, 4, 5]);
        assert!(tok.texts_to_sequence("").is_empty());
    }

    #[test]
    fn accepts_double_encoded_file() {
        let inner = export(Value::Null, "<OOV>".into()).to_string();
        let outer = Value::String(inner).to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(outer.as_bytes()).unwrap();

        let tok = Tokenizer::load(file.path()).unwrap();
        assert_eq!(tok.texts_to_sequence("sad"), vec![4]);
    }

    #[test]
    fn accepts_inline_word_index_object() {
        let json = r#"{"config": {"word_index": {"hello": 1, "world": 2}}}"#;
        let tok = Tokenizer::from_json(json).unwrap();
        assert_eq!(tok.texts_to_sequence("Hello world"), vec![1, 2]);
    }

    #[test]
    fn char_level_indexes_characters() {
        let json = r#"{"config": {"char_level": true, "word_index": "{\"a\": 1, \"b\": 2}"}}"#;
        let tok = Tokenizer::from_json(json).unwrap();
        assert_eq!(tok.texts_to_sequence("AbcA"), vec![1, 2, 1]);
    }

    #[test]
    fn rejects_missing_word_index() {
        let err = Tokenizer::from_json(r#"{"config": {}}"#).unwrap_err();
        assert!(err.to_string().contains("word_index"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Tokenizer::load(Path::new("/nonexistent/tokenizer.json")).unwrap_err();
        assert!(format!("{err:#}").contains("tokenizer.json"));
    }
}
