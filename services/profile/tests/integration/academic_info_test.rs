use uuid::Uuid;

use uniport_domain::education::StudyLevel;
use uniport_domain::forms::AcademicInfoForm;
use uniport_profile::error::ProfileServiceError;
use uniport_profile::usecase::academic_info::{GetAcademicInfoUseCase, SaveAcademicInfoUseCase};

use crate::helpers::{MockEducationRepo, guard, token_for, valid_education_entry};

// ── SaveAcademicInfoUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_the_entry_set_rather_than_union_it() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockEducationRepo::empty();
    let rows = repo.rows_handle();

    let usecase = SaveAcademicInfoUseCase {
        guard: guard(),
        education: repo,
    };

    let mut second = valid_education_entry();
    second.university_name = "Technische Universitat Berlin".into();
    second.level_of_study = "master".into();
    second.start_date = "2022-10-01".into();
    second.end_date = "2024-09-30".into();

    usecase
        .execute(
            Some(&token),
            AcademicInfoForm {
                education: vec![valid_education_entry(), second.clone()],
            },
        )
        .await
        .unwrap();
    assert_eq!(rows.lock().unwrap().len(), 2);

    // same list again: still two rows, not four
    usecase
        .execute(
            Some(&token),
            AcademicInfoForm {
                education: vec![valid_education_entry(), second.clone()],
            },
        )
        .await
        .unwrap();
    assert_eq!(rows.lock().unwrap().len(), 2);

    // shrinking the list shrinks the stored set
    usecase
        .execute(
            Some(&token),
            AcademicInfoForm {
                education: vec![second],
            },
        )
        .await
        .unwrap();
    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1.university_name, "Technische Universitat Berlin");
}

#[tokio::test]
async fn should_reject_end_date_not_after_start_date() {
    let token = token_for(Uuid::new_v4());
    let repo = MockEducationRepo::empty();
    let rows = repo.rows_handle();

    let mut entry = valid_education_entry();
    entry.start_date = "2022-02-25".into();
    entry.end_date = "2022-02-25".into();

    let usecase = SaveAcademicInfoUseCase {
        guard: guard(),
        education: repo,
    };
    let result = usecase
        .execute(
            Some(&token),
            AcademicInfoForm {
                education: vec![entry],
            },
        )
        .await;

    let Err(ProfileServiceError::ValidationFailed(fields)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert!(
        fields
            .iter()
            .any(|f| f.field == "education.0.end_date"
                && f.message == "End date must be after start date")
    );
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_normalize_study_level_on_save() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockEducationRepo::empty();
    let rows = repo.rows_handle();

    let save = SaveAcademicInfoUseCase {
        guard: guard(),
        education: repo,
    };
    save.execute(
        Some(&token),
        AcademicInfoForm {
            education: vec![valid_education_entry()],
        },
    )
    .await
    .unwrap();

    let get = GetAcademicInfoUseCase {
        guard: guard(),
        education: MockEducationRepo { rows },
    };
    let entries = get.execute(Some(&token)).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level_of_study, StudyLevel::Bachelor);
    assert_eq!(entries[0].honors.as_deref(), Some("cum laude"));
}

#[tokio::test]
async fn should_reject_anonymous_save_without_touching_store() {
    let repo = MockEducationRepo::empty();
    let rows = repo.rows_handle();

    let usecase = SaveAcademicInfoUseCase {
        guard: guard(),
        education: repo,
    };
    let result = usecase
        .execute(
            None,
            AcademicInfoForm {
                education: vec![valid_education_entry()],
            },
        )
        .await;

    assert!(matches!(result, Err(ProfileServiceError::Unauthenticated)));
    assert!(rows.lock().unwrap().is_empty());
}
