// Entry query builder
//
// Mirrors the Delivery API's search parameters. Only the subset the site
// uses is modelled; anything else goes through `param`.

/// Search parameters for `GET .../entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    content_type: Option<String>,
    limit: Option<u32>,
    order: Vec<String>,
    include: Option<u8>,
    filters: Vec<(String, String)>,
}

impl EntryQuery {
    /// Query entries of a single content type.
    pub fn content_type(id: impl Into<String>) -> Self {
        Self {
            content_type: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add an ordering key, e.g. `"fields.order"` or `"-fields.publishedAt"`.
    pub fn order(mut self, key: impl Into<String>) -> Self {
        self.order.push(key.into());
        self
    }

    /// Levels of linked entries/assets to embed in `includes` (0..=10).
    pub fn include(mut self, depth: u8) -> Self {
        self.include = Some(depth.min(10));
        self
    }

    /// Exact-match filter on an entry field: `fields.{field}={value}`.
    pub fn field_equals(self, field: &str, value: impl Into<String>) -> Self {
        self.param(format!("fields.{field}"), value)
    }

    /// Arbitrary search parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Requested include depth, if any.
    pub fn include_depth(&self) -> Option<u8> {
        self.include
    }

    /// Flatten into query-string pairs.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref ct) = self.content_type {
            params.push(("content_type".into(), ct.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".into(), limit.to_string()));
        }
        if !self.order.is_empty() {
            params.push(("order".into(), self.order.join(",")));
        }
        if let Some(include) = self.include {
            params.push(("include".into(), include.to_string()));
        }
        params.extend(self.filters.iter().cloned());
        params
    }
}
