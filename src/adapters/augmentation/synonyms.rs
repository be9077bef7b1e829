//! Synonym table used by the EDA augmenter.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::ports::StoreError;

/// Small Portuguese table for common customer-service words.
static BUILTIN: Lazy<SynonymTable> = Lazy::new(|| {
    let mut table = SynonymTable::new();
    table.insert("quero", ["desejo", "gostaria", "preciso"]);
    table.insert("preciso", ["necessito", "quero"]);
    table.insert("pagar", ["quitar", "liquidar"]);
    table.insert("multa", ["infração", "autuação"]);
    table.insert("carro", ["veículo", "automóvel"]);
    table.insert("veículo", ["carro", "automóvel"]);
    table.insert("ajuda", ["auxílio", "apoio"]);
    table.insert("consultar", ["verificar", "checar"]);
    table.insert("saber", ["conhecer", "descobrir"]);
    table.insert("problema", ["dificuldade", "questão"]);
    table.insert("obrigado", ["grato", "valeu"]);
    table.insert("sim", ["isso", "exato"]);
    table.insert("agora", ["já", "neste momento"]);
    table.insert("boleto", ["guia", "cobrança"]);
    table.insert("débito", ["dívida", "pendência"]);
    table
});

/// Word → synonyms lookup. Keys are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table used when no synonym file is configured.
    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN
    }

    /// Loads a JSON object of `word -> [synonym, ...]`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path).map_err(|e| StoreError::Io(e.to_string()))?;
        let entries: HashMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(entries.into_iter().collect())
    }

    /// Adds synonyms for `word`, skipping the word itself and duplicates.
    pub fn insert<S: Into<String>>(&mut self, word: &str, synonyms: impl IntoIterator<Item = S>) {
        let key = word.to_lowercase();
        let entry = self.entries.entry(key.clone()).or_default();
        for synonym in synonyms {
            let synonym = synonym.into();
            if synonym != key && !entry.contains(&synonym) {
                entry.push(synonym);
            }
        }
    }

    /// Synonyms of `word`; empty if unknown.
    pub fn lookup(&self, word: &str) -> &[String] {
        self.entries
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(String, Vec<S>)> for SynonymTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<S>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, synonyms) in iter {
            table.insert(&word, synonyms);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = SynonymTable::new();
        table.insert("Carro", ["veículo", "automóvel"]);
        assert_eq!(table.lookup("carro"), &["veículo".to_string(), "automóvel".to_string()]);
        assert_eq!(table.lookup("CARRO").len(), 2);
    }

    #[test]
    fn insert_skips_self_and_duplicates() {
        let mut table = SynonymTable::new();
        table.insert("quero", ["quero", "desejo", "desejo"]);
        assert_eq!(table.lookup("quero"), &["desejo".to_string()]);
    }

    #[test]
    fn builtin_table_covers_common_words() {
        let table = SynonymTable::builtin();
        assert!(!table.is_empty());
        assert!(table.lookup("pagar").contains(&"quitar".to_string()));
    }

    #[test]
    fn unknown_words_have_no_synonyms() {
        assert!(SynonymTable::new().lookup("placa").is_empty());
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pagar": ["quitar", "liquidar"]}}"#).unwrap();

        let table = SynonymTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("pagar").len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = SynonymTable::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();
        assert!(matches!(
            SynonymTable::load(file.path()),
            Err(StoreError::Malformed(_))
        ));
    }
}
