use std::sync::Arc;

use chrono::Local;

use crate::db::{DbError, ReportRepository};
use crate::models::DailyReport;

#[derive(Clone)]
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }

    /// Report for today in the server's local time zone
    pub async fn daily(&self) -> Result<DailyReport, DbError> {
        let today = Local::now().date_naive();
        self.repo.daily_report(today).await
    }

    pub async fn range(&self, start_date: &str, end_date: &str) -> Result<DailyReport, DbError> {
        self.repo.range_report(start_date, end_date).await
    }
}
