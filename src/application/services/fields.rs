//! Field discovery service
//!
//! Searches and scopes an already-fetched field list. Finding a custom
//! field's id is the usual reason to call this.

use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{Field, FieldScope};

/// Service for filtering tracker fields.
pub struct FieldService {
    settings: Arc<Settings>,
}

impl FieldService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Parse the tracker's field list JSON.
    pub fn parse(&self, json: &str) -> ApplicationResult<Vec<Field>> {
        Ok(Field::parse_list(json)?)
    }

    /// Fields whose name or id contains `keyword`, ignoring case.
    ///
    /// At most `limit` matches (default `search_limit`), in input order.
    pub fn search<'a>(
        &self,
        fields: &'a [Field],
        keyword: &str,
        limit: Option<usize>,
    ) -> Vec<&'a Field> {
        let needle = keyword.to_lowercase();
        let limit = limit.unwrap_or(self.settings.search_limit);
        let matching: Vec<&Field> = fields
            .iter()
            .filter(|f| f.matches_lowercase(&needle))
            .take(limit)
            .collect();
        debug!("search: {:?} matched {} fields", keyword, matching.len());
        matching
    }

    /// Fields in `scope`, at most `limit` (default `list_limit`), in input order.
    pub fn list<'a>(
        &self,
        fields: &'a [Field],
        scope: FieldScope,
        limit: Option<usize>,
    ) -> Vec<&'a Field> {
        let limit = limit.unwrap_or(self.settings.list_limit);
        fields
            .iter()
            .filter(|f| scope.includes(f))
            .take(limit)
            .collect()
    }
}
