#![allow(dead_code)]

//! In-memory test doubles wired into the real service stack.
//!
//! Handler tests run against the production services with these repositories
//! and a scripted validator substituted at the trait seams, so no database
//! is needed.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use affiliate_shortener::application::services::{ClickService, LinkService, StatsService};
use affiliate_shortener::domain::click_validator::ClickValidator;
use affiliate_shortener::domain::entities::{Click, Link, NewClick, NewLink};
use affiliate_shortener::domain::repositories::{
    ClickTotals, LinkRepository, MonthlyEarnings, StatsRepository,
};
use affiliate_shortener::error::AppError;
use affiliate_shortener::state::AppState;
use affiliate_shortener::utils::code_generator::RandomCodeGenerator;
use affiliate_shortener::utils::url_policy::UrlPolicy;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

/// Link store backed by a vector, mirroring the Postgres repository's
/// contract including the unique constraint on short codes.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: Mutex<LinkStore>,
}

#[derive(Default)]
struct LinkStore {
    links: Vec<Link>,
    next_id: i64,
}

impl InMemoryLinkRepository {
    pub fn link_count(&self) -> usize {
        self.inner.lock().unwrap().links.len()
    }

    /// Seeds a link directly, bypassing the allocator.
    pub fn seed_link(&self, original_url: &str, short_code: &str) -> Link {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let link = Link::new(
            store.next_id,
            original_url.to_string(),
            short_code.to_string(),
            Utc::now(),
        );
        store.links.push(link.clone());
        link
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.inner.lock().unwrap();

        if store
            .links
            .iter()
            .any(|l| l.short_code == new_link.short_code)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_short_code_key" }),
            ));
        }

        store.next_id += 1;
        let link = Link::new(
            store.next_id,
            new_link.original_url,
            new_link.short_code,
            Utc::now(),
        );
        store.links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.links.iter().find(|l| l.short_code == code).cloned())
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .links
            .iter()
            .find(|l| l.original_url == original_url)
            .cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .links
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.lock().unwrap().links.len() as i64)
    }
}

/// Click store with switchable failure modes for exercising the
/// best-effort recording and partial-aggregation contracts.
#[derive(Default)]
pub struct InMemoryStatsRepository {
    inner: Mutex<ClickStore>,
}

#[derive(Default)]
struct ClickStore {
    clicks: Vec<Click>,
    next_id: i64,
    fail_recording: bool,
    fail_totals_for: HashSet<i64>,
}

impl InMemoryStatsRepository {
    pub fn click_count(&self) -> usize {
        self.inner.lock().unwrap().clicks.len()
    }

    pub fn clicks_for(&self, link_id: i64) -> Vec<Click> {
        self.inner
            .lock()
            .unwrap()
            .clicks
            .iter()
            .filter(|c| c.link_id == link_id)
            .cloned()
            .collect()
    }

    /// Makes every subsequent `record_click` fail.
    pub fn fail_recording(&self) {
        self.inner.lock().unwrap().fail_recording = true;
    }

    /// Makes aggregation queries for one link fail.
    pub fn fail_totals_for(&self, link_id: i64) {
        self.inner.lock().unwrap().fail_totals_for.insert(link_id);
    }

    /// Seeds a click with an explicit timestamp, for monthly-bucket tests.
    pub fn seed_click(&self, link_id: i64, year: i32, month: u32, day: u32, is_valid: bool) {
        let clicked_at: DateTime<Utc> = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid date");
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let earnings = if is_valid { 0.05 } else { 0.0 };
        let id = store.next_id;
        store.clicks.push(Click::new(
            id,
            link_id,
            clicked_at,
            is_valid,
            earnings,
        ));
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut store = self.inner.lock().unwrap();

        if store.fail_recording {
            return Err(AppError::internal("Database error", json!({})));
        }

        store.next_id += 1;
        let click = Click::new(
            store.next_id,
            new_click.link_id,
            Utc::now(),
            new_click.is_valid,
            new_click.earnings,
        );
        store.clicks.push(click.clone());
        Ok(click)
    }

    async fn link_totals(&self, link_id: i64) -> Result<ClickTotals, AppError> {
        let store = self.inner.lock().unwrap();

        if store.fail_totals_for.contains(&link_id) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let clicks: Vec<_> = store.clicks.iter().filter(|c| c.link_id == link_id).collect();
        Ok(ClickTotals {
            total_clicks: clicks.len() as i64,
            total_earnings: clicks.iter().map(|c| c.earnings).sum(),
        })
    }

    async fn monthly_breakdown(&self, link_id: i64) -> Result<Vec<MonthlyEarnings>, AppError> {
        use chrono::Datelike;
        use std::collections::BTreeMap;

        let store = self.inner.lock().unwrap();

        if store.fail_totals_for.contains(&link_id) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for click in store.clicks.iter().filter(|c| c.link_id == link_id) {
            *buckets
                .entry((click.clicked_at.year(), click.clicked_at.month()))
                .or_insert(0.0) += click.earnings;
        }

        Ok(buckets
            .into_iter()
            .map(|((year, month), earnings)| MonthlyEarnings {
                year,
                month,
                earnings,
            })
            .collect())
    }
}

/// Validator with a scripted verdict and no delay.
pub struct FixedClickValidator {
    verdict: bool,
}

impl FixedClickValidator {
    pub fn new(verdict: bool) -> Self {
        Self { verdict }
    }
}

#[async_trait]
impl ClickValidator for FixedClickValidator {
    async fn classify(&self) -> bool {
        self.verdict
    }
}

/// Builds an [`AppState`] over in-memory stores and a scripted verdict,
/// returning the stores for direct inspection and seeding.
pub fn create_test_state(
    verdict: bool,
) -> (
    AppState,
    Arc<InMemoryLinkRepository>,
    Arc<InMemoryStatsRepository>,
) {
    let links = Arc::new(InMemoryLinkRepository::default());
    let stats = Arc::new(InMemoryStatsRepository::default());

    let state = AppState::new(
        Arc::new(LinkService::new(
            links.clone(),
            Arc::new(RandomCodeGenerator),
            UrlPolicy::default(),
        )),
        Arc::new(ClickService::new(
            Arc::new(FixedClickValidator::new(verdict)),
            stats.clone(),
        )),
        Arc::new(StatsService::new(links.clone(), stats.clone())),
    );

    (state, links, stats)
}

/// Polls the click store until `expected` clicks exist or a second passes.
///
/// Click recording runs in a detached task; tests must wait for it without
/// coupling to scheduler timing.
pub async fn wait_for_clicks(stats: &InMemoryStatsRepository, expected: usize) {
    for _ in 0..100 {
        if stats.click_count() >= expected {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!(
        "expected {} recorded clicks, found {}",
        expected,
        stats.click_count()
    );
}
