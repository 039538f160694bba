//! Entity list manager
//!
//! One [`EntityManager`] drives a whole admin screen for one entity kind: the
//! status tab, the server-side list parameters, the client-side filter panel,
//! the loaded collection with its statistics, the selection and the error
//! banner.
//!
//! Loads are split into `begin_*` / `apply_*` halves stamped with a
//! [`LoadTicket`], so a caller that runs requests itself can hand responses
//! back in any order and only the newest one lands. The async helpers
//! (`reload`, `submit_*`, `delete`) run a full round trip serially.
//!
//! The stats cards always cover every status. Under a status tab the list load
//! is followed by an unscoped one that feeds the summary, so switching tabs
//! never shrinks the cards to the tab's rows.
//!
//! Mutations never touch the local collection: on success the manager reloads
//! list and stats, on failure it records a mutation banner and leaves
//! everything else as it was.

use std::collections::BTreeSet;

use shared::error::{AppError, AppResult};
use shared::models::StatusCount;
use shared::request::ListFilters;

use crate::banner::{Banner, BannerKind};
use crate::bulk::{BulkAction, BulkDialog};
use crate::entity::ManagedEntity;
use crate::filter::sort_by_direction;
use crate::generation::{Generation, LoadTicket};
use crate::policy::{self, StatusChangeDialog};
use crate::selection::Selection;
use crate::service::{BookingBackend, EntityBackend, StatusOf, VenueBackend};
use crate::session::{AccessDenied, Session};
use crate::stats::StatusSummary;

/// Venue screen over a venue service
pub type VenueManager<S> = EntityManager<VenueBackend<S>>;

/// Booking screen over a booking service
pub type BookingManager<S> = EntityManager<BookingBackend<S>>;

/// Parameters of one list load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest<S> {
    pub ticket: LoadTicket,
    pub status: Option<S>,
    pub filters: ListFilters,
}

/// State of one admin list screen
pub struct EntityManager<B: EntityBackend> {
    backend: B,
    session: Session,
    /// `None` is the "all" tab
    tab: Option<StatusOf<B>>,
    query: ListFilters,
    filter: <B::Entity as ManagedEntity>::Filter,
    items: Vec<B::Entity>,
    all_items: Vec<B::Entity>,
    summary: StatusSummary<StatusOf<B>>,
    server_stats: Option<StatusSummary<StatusOf<B>>>,
    selection: Selection,
    banner: Option<Banner>,
    loading: bool,
    list_gen: Generation,
    summary_gen: Generation,
    stats_gen: Generation,
    last_request: Option<(Option<StatusOf<B>>, ListFilters)>,
}

impl<B: EntityBackend> EntityManager<B> {
    /// Open the screen; non-admin sessions get the denial view instead
    pub fn new(session: Session, backend: B) -> Result<Self, AccessDenied> {
        session.require_admin()?;
        Ok(Self {
            backend,
            session,
            tab: None,
            query: ListFilters::default(),
            filter: Default::default(),
            items: Vec::new(),
            all_items: Vec::new(),
            summary: StatusSummary::default(),
            server_stats: None,
            selection: Selection::new(),
            banner: None,
            loading: false,
            list_gen: Generation::new(),
            summary_gen: Generation::new(),
            stats_gen: Generation::new(),
            last_request: None,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========== View state ==========

    pub fn tab(&self) -> Option<StatusOf<B>> {
        self.tab
    }

    /// Switch the status tab; the caller reloads afterwards
    pub fn set_tab(&mut self, tab: Option<StatusOf<B>>) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.selection.clear();
        self.list_gen.invalidate();
        self.loading = false;
    }

    pub fn query(&self) -> &ListFilters {
        &self.query
    }

    /// Replace the server-side list parameters; the caller reloads afterwards
    pub fn set_query(&mut self, query: ListFilters) {
        if self.query == query {
            return;
        }
        self.query = query;
        self.selection.clear();
        self.list_gen.invalidate();
        self.summary_gen.invalidate();
        self.loading = false;
    }

    pub fn filter(&self) -> &<B::Entity as ManagedEntity>::Filter {
        &self.filter
    }

    /// Replace the client-side filter panel
    pub fn set_filter(&mut self, filter: <B::Entity as ManagedEntity>::Filter) {
        self.filter = filter;
        self.selection.clear();
    }

    /// The loaded collection for the current tab, unfiltered
    pub fn items(&self) -> &[B::Entity] {
        &self.items
    }

    /// Every row regardless of tab, as of the last unscoped load
    pub fn all_items(&self) -> &[B::Entity] {
        &self.all_items
    }

    /// Rows to render: loaded collection through the filter, then sorted
    pub fn displayed(&self) -> Vec<B::Entity> {
        let mut rows: Vec<B::Entity> = self
            .items
            .iter()
            .filter(|e| e.matches(&self.filter))
            .cloned()
            .collect();
        let field = self.query.sort_by;
        sort_by_direction(&mut rows, self.query.sort_order, |a, b| {
            <B::Entity as ManagedEntity>::compare(a, b, field)
        });
        rows
    }

    fn displayed_ids(&self) -> BTreeSet<i64> {
        self.items
            .iter()
            .filter(|e| e.matches(&self.filter))
            .map(|e| e.id())
            .collect()
    }

    /// Statistics reduced from every row, independent of the tab
    pub fn summary(&self) -> &StatusSummary<StatusOf<B>> {
        &self.summary
    }

    /// Per-status counts reported by the backend, once loaded
    pub fn server_stats(&self) -> Option<&StatusSummary<StatusOf<B>>> {
        self.server_stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    // ========== Loading ==========

    /// Start a list load with the current tab and query
    pub fn begin_load(&mut self) -> LoadRequest<StatusOf<B>> {
        self.loading = true;
        self.last_request = Some((self.tab, self.query.clone()));
        LoadRequest {
            ticket: self.list_gen.next(),
            status: self.tab,
            filters: self.query.clone(),
        }
    }

    /// Land a list response; returns `false` when the ticket is stale
    pub fn apply_load(&mut self, ticket: LoadTicket, result: AppResult<Vec<B::Entity>>) -> bool {
        if !self.list_gen.is_current(ticket) {
            tracing::debug!(
                kind = <B::Entity as ManagedEntity>::KIND,
                ticket = ticket.value(),
                "Discarding stale list response"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::info!(
                    kind = <B::Entity as ManagedEntity>::KIND,
                    count = items.len(),
                    "List loaded"
                );
                if self.last_request.as_ref().is_some_and(|(tab, _)| tab.is_none()) {
                    self.summary_gen.invalidate();
                    self.set_all_items(items.clone());
                }
                self.items = items;
                let visible = self.displayed_ids();
                self.selection.retain_visible(&visible);
                self.clear_load_banner();
            }
            Err(e) => {
                tracing::warn!(
                    kind = <B::Entity as ManagedEntity>::KIND,
                    error = %e,
                    "List load failed"
                );
                self.banner = Some(Banner::load(&e));
            }
        }
        true
    }

    fn set_all_items(&mut self, items: Vec<B::Entity>) {
        self.summary = StatusSummary::compute(&items);
        self.all_items = items;
    }

    /// Start the unscoped load behind the stats cards
    pub fn begin_summary(&mut self) -> LoadTicket {
        self.summary_gen.next()
    }

    /// Land an unscoped list; returns `false` when the ticket is stale
    pub fn apply_summary(
        &mut self,
        ticket: LoadTicket,
        result: AppResult<Vec<B::Entity>>,
    ) -> bool {
        if !self.summary_gen.is_current(ticket) {
            tracing::debug!(
                kind = <B::Entity as ManagedEntity>::KIND,
                ticket = ticket.value(),
                "Discarding stale summary response"
            );
            return false;
        }
        match result {
            Ok(items) => self.set_all_items(items),
            Err(e) => {
                tracing::warn!(
                    kind = <B::Entity as ManagedEntity>::KIND,
                    error = %e,
                    "Summary load failed"
                );
                self.banner = Some(Banner::load(&e));
            }
        }
        true
    }

    pub fn begin_stats(&mut self) -> LoadTicket {
        self.stats_gen.next()
    }

    /// Land a stats response; returns `false` when the ticket is stale
    pub fn apply_stats(
        &mut self,
        ticket: LoadTicket,
        result: AppResult<Vec<StatusCount<StatusOf<B>>>>,
    ) -> bool {
        if !self.stats_gen.is_current(ticket) {
            tracing::debug!(
                kind = <B::Entity as ManagedEntity>::KIND,
                ticket = ticket.value(),
                "Discarding stale stats response"
            );
            return false;
        }
        match result {
            Ok(rows) => {
                self.server_stats = Some(StatusSummary::from_counts(&rows));
            }
            Err(e) => {
                tracing::warn!(
                    kind = <B::Entity as ManagedEntity>::KIND,
                    error = %e,
                    "Stats load failed"
                );
                self.banner = Some(Banner::load(&e));
            }
        }
        true
    }

    fn clear_load_banner(&mut self) {
        if self.banner.as_ref().is_some_and(|b| b.kind == BannerKind::Load) {
            self.banner = None;
        }
    }

    /// Reload the list, then the statistics
    pub async fn reload(&mut self) -> AppResult<()> {
        let request = self.begin_load();
        let result = self.backend.list(request.status, &request.filters).await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.apply_load(request.ticket, result);
        outcome?;
        if request.status.is_some() {
            self.refresh_summary(&request.filters).await?;
        }
        self.refresh_stats().await
    }

    /// Reload the all-status rows behind the stats cards
    pub async fn refresh_summary(&mut self, filters: &ListFilters) -> AppResult<()> {
        let ticket = self.begin_summary();
        let result = self.backend.list(None, filters).await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.apply_summary(ticket, result);
        outcome
    }

    pub async fn refresh_stats(&mut self) -> AppResult<()> {
        let ticket = self.begin_stats();
        let result = self.backend.status_stats().await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.apply_stats(ticket, result);
        outcome
    }

    /// Re-issue the last load (same tab and query) after a load failure
    pub async fn retry(&mut self) -> AppResult<()> {
        self.banner = None;
        if let Some((tab, query)) = self.last_request.clone() {
            self.tab = tab;
            self.query = query;
        }
        self.reload().await
    }

    // ========== Selection ==========

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle a displayed row; hidden ids are ignored
    pub fn toggle_selection(&mut self, id: i64) -> bool {
        if !self.displayed_ids().contains(&id) {
            return false;
        }
        self.selection.toggle(id)
    }

    /// Select exactly the displayed rows
    pub fn select_all(&mut self) {
        let visible = self.displayed_ids();
        self.selection.select_all(visible);
    }

    pub fn select_none(&mut self) {
        self.selection.clear();
    }

    // ========== Status changes ==========

    /// Open the status-change dialog for a loaded row
    pub fn request_status_change(
        &self,
        id: i64,
        new_status: StatusOf<B>,
    ) -> AppResult<StatusChangeDialog<StatusOf<B>>> {
        let entity = self
            .items
            .iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| {
                AppError::not_found(format!("{} {}", <B::Entity as ManagedEntity>::KIND, id))
            })?;
        Ok(policy::request_status_change(entity, new_status))
    }

    /// Confirm the dialog and send it; nothing is sent when validation fails
    pub async fn submit_status_change(
        &mut self,
        dialog: StatusChangeDialog<StatusOf<B>>,
    ) -> AppResult<()> {
        let change = dialog.confirm()?;
        tracing::info!(
            kind = <B::Entity as ManagedEntity>::KIND,
            id = change.entity_id,
            status = %change.status,
            "Updating status"
        );
        if let Err(e) = self.backend.update_status(&change).await {
            return Err(self.mutation_failed(e));
        }
        self.reload().await
    }

    // ========== Bulk actions ==========

    /// Bulk-action menu for this entity kind
    pub fn bulk_actions(&self) -> Vec<BulkAction<StatusOf<B>>> {
        BulkAction::menu::<B::Entity>()
    }

    /// Open a bulk dialog over a snapshot of the current selection
    pub fn begin_bulk(
        &self,
        action: BulkAction<StatusOf<B>>,
    ) -> AppResult<BulkDialog<StatusOf<B>>> {
        if action == BulkAction::Delete && !<B::Entity as ManagedEntity>::DELETABLE {
            return Err(Self::delete_unsupported());
        }
        BulkDialog::new(action, self.selection.ids())
    }

    /// Confirm and send a bulk action; the selection is kept on failure
    pub async fn submit_bulk(&mut self, dialog: BulkDialog<StatusOf<B>>) -> AppResult<()> {
        let request = dialog.confirm()?;
        tracing::info!(
            kind = <B::Entity as ManagedEntity>::KIND,
            action = %request.action,
            count = request.ids.len(),
            "Applying bulk action"
        );
        if let Err(e) = self.backend.apply_bulk(&request).await {
            return Err(self.mutation_failed(e));
        }
        self.selection.clear();
        self.reload().await
    }

    // ========== Delete ==========

    /// Delete one row; kinds that cannot be deleted are refused before any call
    pub async fn delete(&mut self, id: i64) -> AppResult<()> {
        if !<B::Entity as ManagedEntity>::DELETABLE {
            return Err(Self::delete_unsupported());
        }
        tracing::info!(kind = <B::Entity as ManagedEntity>::KIND, id, "Deleting");
        if let Err(e) = self.backend.delete(id).await {
            return Err(self.mutation_failed(e));
        }
        self.reload().await
    }

    fn delete_unsupported() -> AppError {
        AppError::unsupported(format!("deleting {}s", <B::Entity as ManagedEntity>::KIND))
    }

    fn mutation_failed(&mut self, err: AppError) -> AppError {
        tracing::warn!(
            kind = <B::Entity as ManagedEntity>::KIND,
            code = err.code.code(),
            category = err.code.category().name(),
            error = %err,
            "Mutation failed"
        );
        self.banner = Some(Banner::mutation(&err));
        err
    }
}
