use super::text_index::TermMatrix;

/// Dense, symmetric cosine-similarity matrix over a corpus
///
/// Cell `(i, j)` holds the cosine similarity of documents `i` and `j`. The
/// diagonal is 1.0 for every document, including ones without any token.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Computes all pairwise similarities from a row-normalized term matrix
    ///
    /// Only pairs sharing a term are visited, through per-term posting lists.
    pub fn from_terms(terms: &TermMatrix) -> Self {
        let n = terms.len();
        let mut data = vec![0.0f32; n * n];

        let mut postings: Vec<Vec<(usize, f32)>> = vec![Vec::new(); terms.vocabulary().len()];
        for (doc, row) in terms.rows().iter().enumerate() {
            for &(term, weight) in row {
                postings[term as usize].push((doc, weight));
            }
        }

        // Postings are in ascending document order, so j > i fills the upper triangle
        for posting in &postings {
            for (a, &(i, wi)) in posting.iter().enumerate() {
                for &(j, wj) in &posting[a + 1..] {
                    data[i * n + j] += wi * wj;
                }
            }
        }

        for i in 0..n {
            data[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let value = data[i * n + j].min(1.0);
                data[i * n + j] = value;
                data[j * n + i] = value;
            }
        }

        tracing::info!(documents = n, "Built similarity matrix");
        Self { n, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of two documents, `None` when either index is out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Similarities of one document against the whole corpus
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(titles: &[&str]) -> SimilarityMatrix {
        let docs: Vec<String> = titles.iter().map(|t| t.to_lowercase()).collect();
        SimilarityMatrix::from_terms(&TermMatrix::build(&docs))
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let sim = matrix(&["Toy Story", "Toy Story 2", "Heat", "Story of Us", "The"]);
        for i in 0..sim.len() {
            assert_eq!(sim.get(i, i), Some(1.0));
            for j in 0..sim.len() {
                assert_eq!(sim.get(i, j), sim.get(j, i));
                let value = sim.get(i, j).unwrap();
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_identical_titles_score_one() {
        let sim = matrix(&["Toy Story", "Toy Story 2"]);
        assert!((sim.get(0, 1).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_and_empty_rows_score_zero() {
        let sim = matrix(&["Toy Story", "Heat", "The"]);
        assert_eq!(sim.get(0, 1), Some(0.0));
        assert_eq!(sim.get(2, 0), Some(0.0));
        assert_eq!(sim.get(2, 2), Some(1.0));
    }

    #[test]
    fn test_out_of_range() {
        let sim = matrix(&["Heat"]);
        assert_eq!(sim.get(0, 1), None);
        assert!(sim.row(1).is_none());
        assert_eq!(sim.row(0), Some(&[1.0f32][..]));
    }

    #[test]
    fn test_empty_corpus() {
        let sim = matrix(&[]);
        assert!(sim.is_empty());
        assert!(sim.row(0).is_none());
    }
}
