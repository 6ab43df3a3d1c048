//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickTotals, MonthlyEarnings, StatsRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    clicked_at: DateTime<Utc>,
    is_valid: bool,
    earnings: f64,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::new(
            row.id,
            row.link_id,
            row.clicked_at,
            row.is_valid,
            row.earnings,
        )
    }
}

#[derive(sqlx::FromRow)]
struct TotalsRow {
    total_clicks: i64,
    total_earnings: f64,
}

#[derive(sqlx::FromRow)]
struct MonthRow {
    year: i32,
    month: i32,
    earnings: f64,
}

/// PostgreSQL repository for click recording and earnings aggregation.
///
/// Aggregation happens in SQL so a report is one round trip per link
/// regardless of click volume.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO link_clicks (link_id, is_valid, earnings)
            VALUES ($1, $2, $3)
            RETURNING id, link_id, clicked_at, is_valid, earnings
            "#,
        )
        .bind(new_click.link_id)
        .bind(new_click.is_valid)
        .bind(new_click.earnings)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn link_totals(&self, link_id: i64) -> Result<ClickTotals, AppError> {
        let row = sqlx::query_as::<_, TotalsRow>(
            r#"
            SELECT
                COUNT(*) AS total_clicks,
                COALESCE(SUM(earnings), 0)::float8 AS total_earnings
            FROM link_clicks
            WHERE link_id = $1
            "#,
        )
        .bind(link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ClickTotals {
            total_clicks: row.total_clicks,
            total_earnings: row.total_earnings,
        })
    }

    async fn monthly_breakdown(&self, link_id: i64) -> Result<Vec<MonthlyEarnings>, AppError> {
        let rows = sqlx::query_as::<_, MonthRow>(
            r#"
            SELECT
                date_part('year', clicked_at)::int4 AS year,
                date_part('month', clicked_at)::int4 AS month,
                COALESCE(SUM(earnings), 0)::float8 AS earnings
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MonthlyEarnings {
                year: r.year,
                month: r.month as u32,
                earnings: r.earnings,
            })
            .collect())
    }
}
