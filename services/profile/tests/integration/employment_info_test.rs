use chrono::NaiveDate;
use uuid::Uuid;

use uniport_domain::forms::EmploymentInfoForm;
use uniport_profile::error::ProfileServiceError;
use uniport_profile::usecase::employment_info::{
    GetEmploymentInfoUseCase, SaveEmploymentInfoUseCase,
};

use crate::helpers::{MockEmploymentRepo, guard, token_for, valid_employment_entry};

// ── SaveEmploymentInfoUseCase ────────────────────────────────────────────────

#[tokio::test]
async fn should_null_end_date_for_current_position_whatever_was_submitted() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockEmploymentRepo::empty();
    let rows = repo.rows_handle();

    let mut entry = valid_employment_entry();
    entry.currently_working = Some(true);
    entry.end_date = Some("2030-01-01".into());

    let usecase = SaveEmploymentInfoUseCase {
        guard: guard(),
        employment: repo,
    };
    usecase
        .execute(
            Some(&token),
            EmploymentInfoForm {
                experience: vec![entry],
            },
        )
        .await
        .unwrap();

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].1.currently_working);
    assert_eq!(rows[0].1.end_date, None);
}

#[tokio::test]
async fn should_keep_end_date_for_completed_position() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockEmploymentRepo::empty();
    let rows = repo.rows_handle();

    let save = SaveEmploymentInfoUseCase {
        guard: guard(),
        employment: repo,
    };
    save.execute(
        Some(&token),
        EmploymentInfoForm {
            experience: vec![valid_employment_entry()],
        },
    )
    .await
    .unwrap();

    let get = GetEmploymentInfoUseCase {
        guard: guard(),
        employment: MockEmploymentRepo { rows },
    };
    let entries = get.execute(Some(&token)).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert!(!entries[0].currently_working);
    assert_eq!(
        entries[0].end_date,
        Some(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap())
    );
}

#[tokio::test]
async fn should_report_errors_for_each_invalid_entry() {
    let token = token_for(Uuid::new_v4());
    let repo = MockEmploymentRepo::empty();
    let rows = repo.rows_handle();

    let mut first = valid_employment_entry();
    first.company_name = "".into();
    let mut second = valid_employment_entry();
    second.currently_working = Some(false);
    second.end_date = Some("2020-01-01".into()); // before start

    let usecase = SaveEmploymentInfoUseCase {
        guard: guard(),
        employment: repo,
    };
    let result = usecase
        .execute(
            Some(&token),
            EmploymentInfoForm {
                experience: vec![first, second],
            },
        )
        .await;

    let Err(ProfileServiceError::ValidationFailed(fields)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert!(fields.iter().any(|f| f.field == "experience.0.company_name"));
    assert!(fields.iter().any(|f| f.field == "experience.1.end_date"));
    assert!(rows.lock().unwrap().is_empty());
}
