use crate::{repositories::assignments, state::AppStateV2, structs::jobs::AppJob};
use async_trait::async_trait;
use chrono::Local;

#[derive(Clone)]
pub struct DailyAssignmentsJob;

#[async_trait]
impl AppJob for DailyAssignmentsJob {
    fn cron_expression(&self) -> &str {
        "0 5 0 * * *" // 每天 00:05 產生當日輪替
    }

    async fn run(&self, state: AppStateV2) {
        let today = Local::now().date_naive();

        match assignments::generate_assignments_for_date(&state, today).await {
            Ok(rows) => {
                tracing::info!("generated {} assignments for {}", rows.len(), today);
            }
            Err(err) => {
                // 沒有值班人員時這裡會失敗，留給隔天或手動補跑
                tracing::error!("daily assignment generation failed: {}", err);
            }
        }
    }
}
