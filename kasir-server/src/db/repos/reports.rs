//! Sales report repository
//!
//! A report is two queries (totals, then best seller) over the same date
//! predicate. Both run in one read-only `REPEATABLE READ` transaction so they
//! see a single snapshot of `transactions`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{BestSellingProduct, DailyReport};

/// Read-side aggregation over transactions
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Report for a single calendar day
    async fn daily_report(&self, day: NaiveDate) -> Result<DailyReport, DbError>;

    /// Report for an inclusive date range.
    ///
    /// Dates are passed through as `YYYY-MM-DD` text and cast by the
    /// database, so a malformed date surfaces as a database error.
    async fn range_report(&self, start_date: &str, end_date: &str)
        -> Result<DailyReport, DbError>;
}

/// PostgreSQL-backed reports
#[derive(Clone)]
pub struct PgReportRepo {
    pool: PgPool,
}

impl PgReportRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn summarize(&self, start_date: &str, end_date: &str) -> Result<DailyReport, DbError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let (total_revenue, total_transaksi): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)::BIGINT, COUNT(*)
            FROM transactions
            WHERE DATE(created_at) BETWEEN $1::DATE AND $2::DATE
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&mut *tx)
        .await?;

        // No sales in the window means no row, not an error
        let best: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT p.name, SUM(td.quantity)::BIGINT AS total_qty
            FROM transaction_details td
            JOIN transactions t ON td.transaction_id = t.id
            JOIN products p ON td.product_id = p.id
            WHERE DATE(t.created_at) BETWEEN $1::DATE AND $2::DATE
            GROUP BY p.id, p.name
            ORDER BY total_qty DESC
            LIMIT 1
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DailyReport {
            total_revenue,
            total_transaksi,
            produk_terlaris: best.map(|(nama, qty_terjual)| BestSellingProduct { nama, qty_terjual }),
        })
    }
}

#[async_trait]
impl ReportRepository for PgReportRepo {
    async fn daily_report(&self, day: NaiveDate) -> Result<DailyReport, DbError> {
        let day = day.format("%Y-%m-%d").to_string();
        self.summarize(&day, &day).await
    }

    async fn range_report(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<DailyReport, DbError> {
        self.summarize(start_date, end_date).await
    }
}
