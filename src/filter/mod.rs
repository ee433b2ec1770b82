/// Case-insensitive substring filter over a fixed term list. Terms are
/// lowercased once at construction; matching allocates only the lowercased
/// input.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    terms: Vec<String>,
}

impl ContentFilter {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn is_disallowed(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term))
    }
}
