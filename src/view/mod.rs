use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;
use crate::filter::{FilterOrder, FilterSearch, SortKey, SortState};
use crate::ledger::{format_rows, scope_to_user, Column, LedgerKind, TransactionRecord};

/// Anything that can hand back the raw rows of a ledger
#[async_trait]
pub trait LedgerSource: Send {
    async fn fetch_ledger(&mut self, kind: LedgerKind) -> Result<Value, ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded {
        /// User-scoped rows as fetched
        rows: Vec<TransactionRecord>,
        /// Rows after search and sort
        displayed: Vec<TransactionRecord>,
    },
    Failed(String),
}

/// One ledger screen: fetch once, then sort and search locally.
#[derive(Debug)]
pub struct LedgerView {
    kind: LedgerKind,
    state: ViewState,
    sort: SortState,
    query: String,
}

impl LedgerView {
    pub fn new(kind: LedgerKind) -> Self {
        Self {
            kind,
            state: ViewState::Loading,
            sort: SortState::default(),
            query: String::new(),
        }
    }

    pub fn kind(&self) -> LedgerKind {
        self.kind
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn rows(&self) -> &[TransactionRecord] {
        match &self.state {
            ViewState::Loaded { rows, .. } => rows,
            _ => &[],
        }
    }

    pub fn displayed(&self) -> &[TransactionRecord] {
        match &self.state {
            ViewState::Loaded { displayed, .. } => displayed,
            _ => &[],
        }
    }

    /// Loaded, but nothing to show
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ViewState::Loaded { displayed, .. } if displayed.is_empty())
    }

    /// Fetch the ledger and move out of `Loading`.
    ///
    /// Fetch errors leave the view in `Failed` and are handed back to the caller.
    pub async fn load<S>(&mut self, source: &mut S, user_name: Option<&str>) -> Result<(), ClientError>
    where
        S: LedgerSource + ?Sized,
    {
        self.state = ViewState::Loading;
        match source.fetch_ledger(self.kind).await {
            Ok(payload) => {
                self.finish(&payload, user_name);
                Ok(())
            }
            Err(e) => {
                tracing::error!(ledger = ?self.kind, error = %e, "failed to load ledger");
                self.state = ViewState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Turn a fetched payload into the loaded state. Malformed payloads load as empty.
    pub fn finish(&mut self, payload: &Value, user_name: Option<&str>) {
        let rows = scope_to_user(format_rows(payload).into_records(), user_name);
        tracing::info!(ledger = ?self.kind, rows = rows.len(), "ledger loaded");
        self.state = ViewState::Loaded {
            displayed: rows.clone(),
            rows,
        };
        self.refresh();
    }

    /// Header click on `column`. Ignored unless loaded.
    pub fn sort(&mut self, column: Column) -> Option<SortKey> {
        if !matches!(self.state, ViewState::Loaded { .. }) {
            return None;
        }
        let key = self.sort.toggle(column);
        self.refresh();
        Some(key)
    }

    /// Sort with an explicit direction
    pub fn sort_by(&mut self, key: SortKey) {
        if matches!(self.state, ViewState::Loaded { .. }) {
            self.sort.set(key);
            self.refresh();
        }
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    // displayed = sort(search(rows))
    fn refresh(&mut self) {
        if let ViewState::Loaded { rows, displayed } = &mut self.state {
            let matched = FilterSearch::apply(rows, &self.query);
            *displayed = match self.sort.active {
                Some(key) => FilterOrder::apply(&matched, key),
                None => matched,
            };
        }
    }
}
