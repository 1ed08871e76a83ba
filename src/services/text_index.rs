use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use super::stop_words::is_stop_word;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"(?u)\b\w\w+\b").expect("valid token regex");
}

/// Splits a title into lowercase word tokens, dropping stop words
///
/// A token is a run of at least two word characters. No stemming is applied.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// A sparse row: (term id, weight) pairs sorted by term id
pub type SparseRow = Vec<(u32, f32)>;

/// TF-IDF weights for every document of a corpus
///
/// Rows are L2-normalized, so the dot product of two rows is their cosine
/// similarity. Documents without any token have an empty row.
#[derive(Debug, Clone, Default)]
pub struct TermMatrix {
    rows: Vec<SparseRow>,
    vocabulary: Vec<String>,
    idf: Vec<f32>,
}

impl TermMatrix {
    /// Builds the matrix from already-normalized documents
    pub fn build(documents: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Document frequency per term; BTreeMap keeps term ids in lexicographic order
        let mut document_frequency: BTreeMap<&str, u32> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let mut term_ids: HashMap<&str, u32> = HashMap::with_capacity(document_frequency.len());
        let mut vocabulary = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (id, (term, df)) in document_frequency.iter().enumerate() {
            term_ids.insert(term, id as u32);
            vocabulary.push(term.to_string());
            idf.push((((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0) as f32);
        }

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
                for token in tokens {
                    if let Some(&id) = term_ids.get(token.as_str()) {
                        *counts.entry(id).or_insert(0) += 1;
                    }
                }

                let mut row: SparseRow = counts
                    .into_iter()
                    .map(|(id, count)| (id, count as f32 * idf[id as usize]))
                    .collect();

                let norm = row.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for (_, weight) in row.iter_mut() {
                        *weight /= norm;
                    }
                }
                row
            })
            .collect();

        tracing::debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Built TF-IDF term matrix"
        );

        Self {
            rows,
            vocabulary,
            idf,
        }
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseRow> {
        self.rows.get(index)
    }

    /// Terms in id order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|id| self.idf[id])
    }
}
