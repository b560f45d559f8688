//! Query parameters for species listing

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Optional query parameters for listing species.
///
/// Values left unset or empty are omitted from the query string entirely,
/// never sent as empty strings. `filters` carries arbitrary extra pairs and
/// is passed through to the server unmodified.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    /// Parameters for a sorted listing
    pub fn sorted_by(field: &str, order: SortOrder) -> Self {
        Self {
            sort: Some(field.to_string()),
            order: Some(order),
            filters: Vec::new(),
        }
    }

    /// Render as a query string, leading `?` included; empty when nothing
    /// is set.
    pub(crate) fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(sort) = self.sort.as_deref() {
            if !sort.is_empty() {
                pairs.push(("sort", sort));
            }
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str()));
        }
        for (key, value) in &self.filters {
            if !key.is_empty() && !value.is_empty() {
                pairs.push((key, value));
            }
        }

        let mut query = String::new();
        for (key, value) in pairs {
            query.push(if query.is_empty() { '?' } else { '&' });
            query.push_str(&urlencoding::encode(key));
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_render_nothing() {
        assert_eq!(ListParams::default().to_query_string(), "");
    }

    #[test]
    fn test_sorted_by_renders_sort_and_order() {
        let params = ListParams::sorted_by("population_estimate", SortOrder::Desc);
        assert_eq!(
            params.to_query_string(),
            "?sort=population_estimate&order=desc"
        );
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let params = ListParams {
            sort: Some(String::new()),
            order: None,
            filters: vec![
                ("region".to_string(), String::new()),
                ("family".to_string(), "Turdidae".to_string()),
            ],
        };
        assert_eq!(params.to_query_string(), "?family=Turdidae");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = ListParams {
            sort: None,
            order: None,
            filters: vec![("q".to_string(), "blue bird&co".to_string())],
        };
        assert_eq!(params.to_query_string(), "?q=blue%20bird%26co");
    }
}
