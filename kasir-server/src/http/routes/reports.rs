//! Sales report endpoints
//!
//! - `GET /api/report/hari-ini` (alias `/api/report/daily`): today's report
//! - `GET /api/report?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`: inclusive range

use axum::{
    extract::{FromRef, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::models::{DailyReport, ValidationError};
use crate::services::ReportService;

/// Query parameters for a range report
#[derive(Debug, Default, Deserialize)]
pub struct ReportRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::Empty { field })
}

/// GET /api/report/hari-ini
async fn daily_report(
    State(service): State<ReportService>,
) -> Result<Json<DailyReport>, ApiError> {
    Ok(Json(service.daily().await?))
}

/// GET /api/report?start_date=&end_date=
async fn range_report(
    State(service): State<ReportService>,
    Query(query): Query<ReportRangeQuery>,
) -> Result<Json<DailyReport>, ApiError> {
    let start_date = required(query.start_date, "start_date")?;
    let end_date = required(query.end_date, "end_date")?;

    Ok(Json(service.range(&start_date, &end_date).await?))
}

/// Report routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ReportService: FromRef<S>,
{
    Router::new()
        .route("/api/report", get(range_report))
        .route("/api/report/hari-ini", get(daily_report))
        .route("/api/report/daily", get(daily_report))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::http::{Method, StatusCode};
    use chrono::{Local, NaiveDate};
    use serde_json::json;

    use super::*;
    use crate::db::{DbError, ReportRepository};
    use crate::http::routes::test_support::send;

    /// Records the requested window and reports no sales
    #[derive(Default)]
    struct NoSales {
        days: Mutex<Vec<NaiveDate>>,
        ranges: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ReportRepository for NoSales {
        async fn daily_report(&self, day: NaiveDate) -> Result<DailyReport, DbError> {
            self.days.lock().unwrap().push(day);
            Ok(DailyReport::empty())
        }

        async fn range_report(
            &self,
            start_date: &str,
            end_date: &str,
        ) -> Result<DailyReport, DbError> {
            self.ranges
                .lock()
                .unwrap()
                .push((start_date.to_owned(), end_date.to_owned()));
            Ok(DailyReport::empty())
        }
    }

    fn app() -> (Router, Arc<NoSales>) {
        let repo = Arc::new(NoSales::default());
        let app = router().with_state(ReportService::new(repo.clone()));
        (app, repo)
    }

    #[tokio::test]
    async fn range_without_sales_is_zero_and_null() {
        let (app, repo) = app();

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/report?start_date=2024-01-01&end_date=2024-01-01",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "total_revenue": 0, "total_transaksi": 0, "produk_terlaris": null })
        );
        assert_eq!(
            repo.ranges.lock().unwrap().as_slice(),
            [("2024-01-01".to_owned(), "2024-01-01".to_owned())]
        );
    }

    #[tokio::test]
    async fn range_requires_both_dates() {
        let (app, repo) = app();

        for uri in [
            "/api/report",
            "/api/report?start_date=2024-01-01",
            "/api/report?end_date=2024-01-31",
            "/api/report?start_date=&end_date=2024-01-31",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "validation_error");
        }
        assert!(repo.ranges.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn daily_report_uses_local_today() {
        let (app, repo) = app();

        let before = Local::now().date_naive();
        let (status, _) = send(&app, Method::GET, "/api/report/hari-ini", None).await;
        let after = Local::now().date_naive();
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::GET, "/api/report/daily", None).await;
        assert_eq!(status, StatusCode::OK);

        let days = repo.days.lock().unwrap();
        assert_eq!(days.len(), 2);
        assert!(days[0] == before || days[0] == after);
    }

    #[tokio::test]
    async fn report_is_get_only() {
        let (app, _) = app();
        let (status, _) = send(&app, Method::POST, "/api/report/hari-ini", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
