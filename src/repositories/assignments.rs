use crate::{
    errors::{is_unique_violation, AppError, ScheduleError},
    services::assignments as rotation,
    state::AppStateV2,
    structs::{
        assignments::{DoctorPatientAssignment, StaffAssignment},
        staff::Staff,
    },
};
use chrono::NaiveDate;

/// 查某日期的完整分配：已落庫的列，加上尚未落庫的醫師永久綁定
pub async fn get_assignments_by_date(
    state: &AppStateV2,
    date: NaiveDate,
) -> Result<Vec<StaffAssignment>, AppError> {
    let stored: Vec<StaffAssignment> = sqlx::query_as(
        r#"
            SELECT * FROM staff_assignments
            WHERE date = $1
            ORDER BY patient_id;
        "#,
    )
    .bind(date)
    .fetch_all(state.get_pool())
    .await?;

    let doctor_assignments = get_doctor_patient_assignments(state).await?;

    Ok(rotation::merge_with_doctor_coverage(
        stored,
        &doctor_assignments,
        date,
    ))
}

pub async fn get_doctor_patient_assignments(
    state: &AppStateV2,
) -> Result<Vec<DoctorPatientAssignment>, AppError> {
    sqlx::query_as("SELECT * FROM doctor_patient_assignments ORDER BY patient_id")
        .fetch_all(state.get_pool())
        .await
        .map_err(AppError::from)
}

/// 建立醫師永久綁定。這裡不做唯一性檢查，重複呼叫會產生多筆綁定，
/// 由呼叫端自行把關。
pub async fn assign_doctor_to_patient(
    state: &AppStateV2,
    doctor_id: i32,
    patient_id: i32,
) -> Result<DoctorPatientAssignment, AppError> {
    sqlx::query_as(
        r#"
            INSERT INTO doctor_patient_assignments (doctor_id, patient_id)
            VALUES ($1, $2)
            RETURNING *;
        "#,
    )
    .bind(doctor_id)
    .bind(patient_id)
    .fetch_one(state.get_pool())
    .await
    .map_err(AppError::from)
}

/// 產生某日期的全部分配：非醫師依日相位輪替，醫師依永久綁定落列
pub async fn generate_assignments_for_date(
    state: &AppStateV2,
    date: NaiveDate,
) -> Result<Vec<StaffAssignment>, AppError> {
    // 值班人員，醫師排前面，各組內依 id 排序
    let all_staff: Vec<Staff> = sqlx::query_as(
        r#"
            SELECT * FROM staff
            WHERE is_on_duty = TRUE
            ORDER BY
              CASE
                WHEN role = 'doctor' THEN 1
                ELSE 2
              END, id;
        "#,
    )
    .fetch_all(state.get_pool())
    .await?;

    if all_staff.is_empty() {
        return Err(ScheduleError::NoStaffAvailable.into());
    }

    let other_staff_ids: Vec<i32> = all_staff
        .iter()
        .filter(|s| !s.is_doctor())
        .map(|s| s.id)
        .collect();

    let patient_ids: Vec<i32> =
        sqlx::query_scalar("SELECT id FROM patients WHERE status = 'active' ORDER BY id")
            .fetch_all(state.get_pool())
            .await?;

    if patient_ids.is_empty() {
        tracing::warn!("no active patients found for assignment");
        return Ok(Vec::new());
    }

    // 清掉該日期的非醫師列，重跑同一天才會冪等；既有醫師列保留
    sqlx::query(
        r#"
            DELETE FROM staff_assignments
            WHERE date = $1
              AND staff_id IN (SELECT id FROM staff WHERE role != 'doctor');
        "#,
    )
    .bind(date)
    .execute(state.get_pool())
    .await?;

    let mut assignments = Vec::new();

    // 輪替照護：病患同時會有輪替人員與主治醫師，兩者互補不互斥
    for (staff_id, patient_id) in rotation::plan_rotation(&patient_ids, &other_staff_ids, date) {
        match insert_assignment(state, staff_id, patient_id, date).await {
            Ok(row) => assignments.push(row),
            Err(err) if is_unique_violation(&err) => {
                tracing::warn!(
                    "skipping duplicate assignment for patient {} on {}",
                    patient_id,
                    date
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    // 醫師也落一筆當日列，衝突時取回既有那筆
    let doctor_pairs: Vec<(i32, i32)> =
        sqlx::query_as("SELECT doctor_id, patient_id FROM doctor_patient_assignments")
            .fetch_all(state.get_pool())
            .await?;

    for (doctor_id, patient_id) in doctor_pairs {
        match insert_assignment(state, doctor_id, patient_id, date).await {
            Ok(row) => assignments.push(row),
            Err(err) if is_unique_violation(&err) => {
                if let Some(existing) = find_assignment(state, doctor_id, patient_id, date).await? {
                    assignments.push(existing);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(assignments)
}

pub async fn get_assignments_by_staff_id(
    state: &AppStateV2,
    staff_id: i32,
    date: Option<NaiveDate>,
) -> Result<Vec<StaffAssignment>, AppError> {
    let rows = match date {
        Some(date) => {
            sqlx::query_as(
                r#"
                    SELECT * FROM staff_assignments
                    WHERE staff_id = $1 AND date = $2
                    ORDER BY date DESC;
                "#,
            )
            .bind(staff_id)
            .bind(date)
            .fetch_all(state.get_pool())
            .await?
        }
        None => {
            sqlx::query_as(
                r#"
                    SELECT * FROM staff_assignments
                    WHERE staff_id = $1
                    ORDER BY date DESC;
                "#,
            )
            .bind(staff_id)
            .fetch_all(state.get_pool())
            .await?
        }
    };

    Ok(rows)
}

pub async fn get_assignments_by_patient_id(
    state: &AppStateV2,
    patient_id: i32,
    date: Option<NaiveDate>,
) -> Result<Vec<StaffAssignment>, AppError> {
    let rows = match date {
        Some(date) => {
            sqlx::query_as(
                r#"
                    SELECT * FROM staff_assignments
                    WHERE patient_id = $1 AND date = $2
                    ORDER BY date DESC;
                "#,
            )
            .bind(patient_id)
            .bind(date)
            .fetch_all(state.get_pool())
            .await?
        }
        None => {
            sqlx::query_as(
                r#"
                    SELECT * FROM staff_assignments
                    WHERE patient_id = $1
                    ORDER BY date DESC;
                "#,
            )
            .bind(patient_id)
            .fetch_all(state.get_pool())
            .await?
        }
    };

    Ok(rows)
}

/// 新病患入院時找當日分配數最少的非醫師人員接手。
/// 排班人力不足不該讓掛號失敗，所以查無人選只回 None。
pub async fn auto_assign_staff_to_new_patient(
    state: &AppStateV2,
    patient_id: i32,
    today: NaiveDate,
) -> Result<Option<StaffAssignment>, AppError> {
    let candidates: Vec<Staff> = sqlx::query_as(
        r#"
            SELECT * FROM staff
            WHERE is_on_duty = TRUE AND role != 'doctor'
            ORDER BY id;
        "#,
    )
    .fetch_all(state.get_pool())
    .await?;

    if candidates.is_empty() {
        tracing::warn!("no active non-doctor staff available for auto-assignment");
        return Ok(None);
    }

    // 當日各人已有的分配數，沒有列的視為 0
    let counted: Vec<(i32, i64)> = sqlx::query_as(
        r#"
            SELECT staff_id, COUNT(*)
            FROM staff_assignments
            WHERE date = $1
            GROUP BY staff_id;
        "#,
    )
    .bind(today)
    .fetch_all(state.get_pool())
    .await?;

    let loads: Vec<(i32, i64)> = candidates
        .iter()
        .map(|s| {
            let count = counted
                .iter()
                .find(|(staff_id, _)| *staff_id == s.id)
                .map(|(_, count)| *count)
                .unwrap_or(0);
            (s.id, count)
        })
        .collect();

    let selected_id = match rotation::pick_least_loaded(&loads) {
        Some(id) => id,
        None => return Ok(None),
    };

    match insert_assignment(state, selected_id, patient_id, today).await {
        Ok(row) => {
            tracing::info!("auto-assigned staff {} to patient {}", selected_id, patient_id);
            Ok(Some(row))
        }
        Err(err) if is_unique_violation(&err) => {
            tracing::warn!(
                "patient {} already has a staff assignment for {}",
                patient_id,
                today
            );
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

async fn insert_assignment(
    state: &AppStateV2,
    staff_id: i32,
    patient_id: i32,
    date: NaiveDate,
) -> Result<StaffAssignment, sqlx::Error> {
    sqlx::query_as(
        r#"
            INSERT INTO staff_assignments (staff_id, patient_id, date)
            VALUES ($1, $2, $3)
            RETURNING *;
        "#,
    )
    .bind(staff_id)
    .bind(patient_id)
    .bind(date)
    .fetch_one(state.get_pool())
    .await
}

async fn find_assignment(
    state: &AppStateV2,
    staff_id: i32,
    patient_id: i32,
    date: NaiveDate,
) -> Result<Option<StaffAssignment>, AppError> {
    sqlx::query_as(
        r#"
            SELECT * FROM staff_assignments
            WHERE staff_id = $1 AND patient_id = $2 AND date = $3;
        "#,
    )
    .bind(staff_id)
    .bind(patient_id)
    .bind(date)
    .fetch_optional(state.get_pool())
    .await
    .map_err(AppError::from)
}
