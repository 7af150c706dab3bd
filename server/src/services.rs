pub(crate) mod facts {
    use std::fmt::Display;

    use facts::{PaginationInfo, Record};

    pub(crate) struct FactsPage {
        pub(crate) records: Vec<Record>,
        pub(crate) pagination: PaginationInfo,
    }

    pub(crate) trait ListFacts {
        async fn list(
            &self,
            page: u32,
            per_page: u32,
            query: Option<&str>,
        ) -> Result<FactsPage, FactsError>;
    }

    pub(crate) trait SuggestTerms {
        async fn suggest(&self, query: &str) -> Result<Vec<String>, FactsError>;
    }

    pub(crate) mod mem {
        use std::collections::BTreeSet;
        use std::sync::Arc;

        use facts::{PaginationInfo, Record};

        use super::{FactsError, FactsPage, ListFacts, SuggestTerms};

        const DATASET: &str = include_str!("../data/facts.json");

        const MAX_SUGGESTIONS: usize = 10;

        #[derive(Clone)]
        pub(crate) struct FactsStore(Arc<Vec<Record>>);

        impl FactsStore {
            pub(crate) fn embedded() -> Result<Self, FactsError> {
                Self::from_json(DATASET)
            }

            pub(crate) fn from_json(data: &str) -> Result<Self, FactsError> {
                serde_json::from_str::<Vec<Record>>(data)
                    .map(|records| Self(Arc::new(records)))
                    .map_err(FactsError::Dataset)
            }
        }

        impl ListFacts for FactsStore {
            async fn list(
                &self,
                page: u32,
                per_page: u32,
                query: Option<&str>,
            ) -> Result<FactsPage, FactsError> {
                let filtered: Vec<&Record> = match query {
                    Some(q) if !q.is_empty() => {
                        let q = q.to_lowercase();
                        self.0
                            .iter()
                            .filter(|record| record.text.to_lowercase().contains(&q))
                            .collect()
                    }
                    _ => self.0.iter().collect(),
                };

                let per_page = per_page.max(1);
                let current_page = page.max(1);
                let total_count = filtered.len() as u32;
                let total_pages = total_count.div_ceil(per_page);
                let records = filtered
                    .into_iter()
                    .skip(((current_page as u64 - 1) * per_page as u64) as usize)
                    .take(per_page as usize)
                    .cloned()
                    .collect();

                Ok(FactsPage {
                    records,
                    pagination: PaginationInfo {
                        total_count,
                        current_page,
                        per_page,
                        total_pages,
                    },
                })
            }
        }

        impl SuggestTerms for FactsStore {
            async fn suggest(&self, query: &str) -> Result<Vec<String>, FactsError> {
                let q = query.trim().to_lowercase();
                if q.is_empty() {
                    return Ok(Vec::new());
                }

                let terms: BTreeSet<String> = self
                    .0
                    .iter()
                    .flat_map(|record| record.text.split(|c: char| !c.is_ascii_alphanumeric()))
                    .filter(|word| !word.is_empty())
                    .map(|word| word.to_lowercase())
                    .filter(|word| word.starts_with(&q))
                    .collect();

                Ok(terms.into_iter().take(MAX_SUGGESTIONS).collect())
            }
        }
    }

    #[derive(Debug)]
    pub(crate) enum FactsError {
        Dataset(serde_json::Error),
    }

    impl Display for FactsError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                FactsError::Dataset(error) => {
                    write!(f, "Failed to read facts dataset due to: {}", error)
                }
            }
        }
    }

    impl std::error::Error for FactsError {}
}
