use crate::structs::assignments::{DoctorPatientAssignment, StaffAssignment};
use chrono::{Datelike, NaiveDate};

/// 日期在該年的第幾天，1 月 1 日為第 1 天，作為輪替的相位
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// 規劃當日輪替，回傳 (staff_id, patient_id) 配對。
///
/// 病患依序以 `(i + day_of_year) % 人數` 取輪替人員，
/// 相位每天位移一格，同一位病患不會長期由同一人照護，
/// 而且不需要保存任何游標，重算同一天必得同樣結果。
pub fn plan_rotation(
    patient_ids: &[i32],
    other_staff_ids: &[i32],
    date: NaiveDate,
) -> Vec<(i32, i32)> {
    if other_staff_ids.is_empty() {
        return Vec::new();
    }

    let offset = day_of_year(date) as usize;
    patient_ids
        .iter()
        .enumerate()
        .map(|(i, &patient_id)| {
            let staff_index = (i + offset) % other_staff_ids.len();
            (other_staff_ids[staff_index], patient_id)
        })
        .collect()
}

/// 取當日分配數最少的人選，同數時以先出現者為準
pub fn pick_least_loaded(candidates: &[(i32, i64)]) -> Option<i32> {
    let mut selected: Option<(i32, i64)> = None;
    for &(staff_id, count) in candidates {
        match selected {
            Some((_, min_count)) if count >= min_count => {}
            _ => selected = Some((staff_id, count)),
        }
    }
    selected.map(|(staff_id, _)| staff_id)
}

/// 合併已落庫的分配與醫師永久綁定。
///
/// 綁定不分日期永遠有效，所以即使該日期從未跑過 generate，
/// 查詢結果也要看得到主治醫師；已經落庫的醫師列不再合成，
/// 合成列以 id 0 標記，時間欄位沿用綁定本身的時間。
pub fn merge_with_doctor_coverage(
    stored: Vec<StaffAssignment>,
    doctor_assignments: &[DoctorPatientAssignment],
    date: NaiveDate,
) -> Vec<StaffAssignment> {
    let mut merged = stored;

    let synthesized: Vec<StaffAssignment> = doctor_assignments
        .iter()
        .filter(|dpa| {
            !merged.iter().any(|row| {
                row.staff_id == dpa.doctor_id
                    && row.patient_id == dpa.patient_id
                    && row.date == date
            })
        })
        .map(|dpa| StaffAssignment {
            id: 0,
            staff_id: dpa.doctor_id,
            patient_id: dpa.patient_id,
            date,
            created_at: dpa.created_at,
            updated_at: dpa.updated_at,
        })
        .collect();

    merged.extend(synthesized);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored_row(id: i32, staff_id: i32, patient_id: i32, date: NaiveDate) -> StaffAssignment {
        let now = Utc::now();
        StaffAssignment {
            id,
            staff_id,
            patient_id,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    fn binding(id: i32, doctor_id: i32, patient_id: i32) -> DoctorPatientAssignment {
        let now = Utc::now();
        DoctorPatientAssignment {
            id,
            doctor_id,
            patient_id,
            assigned_date: date(2024, 1, 1),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn day_of_year_starts_at_one() {
        assert_eq!(day_of_year(date(2024, 1, 1)), 1);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366); // 閏年
        assert_eq!(day_of_year(date(2025, 12, 31)), 365);
    }

    #[test]
    fn rotation_applies_daily_phase_shift() {
        // 1 月 5 日 day_of_year = 5，兩位輪替人員、三位病患
        let pairs = plan_rotation(&[1, 2, 3], &[10, 20], date(2024, 1, 5));
        assert_eq!(pairs, vec![(20, 1), (10, 2), (20, 3)]);
    }

    #[test]
    fn rotation_is_deterministic() {
        let patients = [4, 8, 15, 16, 23, 42];
        let staff = [7, 11, 13];
        let first = plan_rotation(&patients, &staff, date(2024, 6, 1));
        let second = plan_rotation(&patients, &staff, date(2024, 6, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn rotation_cycles_through_all_staff() {
        // M=3 輪替人員，連續 3 天同一位病患會遇到 3 個不同的人
        let patients: Vec<i32> = (1..=10).collect();
        let staff = [101, 102, 103];

        let mut seen = Vec::new();
        for day in 10..13 {
            let pairs = plan_rotation(&patients, &staff, date(2025, 3, day));
            seen.push(pairs[0].0);
        }

        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), staff.len());
    }

    #[test]
    fn rotation_without_other_staff_yields_no_pairs() {
        assert!(plan_rotation(&[1, 2, 3], &[], date(2024, 1, 5)).is_empty());
    }

    #[test]
    fn rotation_without_patients_yields_no_pairs() {
        assert!(plan_rotation(&[], &[10, 20], date(2024, 1, 5)).is_empty());
    }

    #[test]
    fn least_loaded_picks_minimum_count() {
        // 0 筆 vs 3 筆，取 0 筆那位
        assert_eq!(pick_least_loaded(&[(1, 3), (2, 0)]), Some(2));
    }

    #[test]
    fn least_loaded_tie_takes_first_candidate() {
        assert_eq!(pick_least_loaded(&[(5, 1), (9, 1)]), Some(5));
    }

    #[test]
    fn least_loaded_with_no_candidates() {
        assert_eq!(pick_least_loaded(&[]), None);
    }

    #[test]
    fn merge_synthesizes_unmaterialized_doctor_row() {
        // 該日期從未 generate，查詢仍要看到主治醫師
        let target = date(2024, 7, 1);
        let merged = merge_with_doctor_coverage(Vec::new(), &[binding(1, 30, 2)], target);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, 0);
        assert_eq!(merged[0].staff_id, 30);
        assert_eq!(merged[0].patient_id, 2);
        assert_eq!(merged[0].date, target);
    }

    #[test]
    fn merge_does_not_duplicate_materialized_doctor_row() {
        let target = date(2024, 7, 1);
        let stored = vec![stored_row(7, 30, 2, target)];
        let merged = merge_with_doctor_coverage(stored, &[binding(1, 30, 2)], target);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, 7);
    }

    #[test]
    fn merge_keeps_rotating_rows_alongside_doctor_coverage() {
        let target = date(2024, 7, 1);
        let stored = vec![stored_row(3, 12, 2, target)];
        let merged = merge_with_doctor_coverage(stored, &[binding(1, 30, 2)], target);

        assert_eq!(merged.len(), 2);
        assert!(merged.iter().any(|row| row.staff_id == 12 && row.id == 3));
        assert!(merged.iter().any(|row| row.staff_id == 30 && row.id == 0));
    }
}
