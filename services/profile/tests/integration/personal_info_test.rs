use chrono::NaiveDate;
use uuid::Uuid;

use uniport_domain::profile::Gender;
use uniport_profile::error::ProfileServiceError;
use uniport_profile::usecase::personal_info::{GetPersonalInfoUseCase, SavePersonalInfoUseCase};
use uniport_testing::session::expired_session_token;

use crate::helpers::{
    MockProfileRepo, TEST_JWT_SECRET, guard, token_for, valid_personal_form,
};

// ── SavePersonalInfoUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_store_one_row_per_user_across_repeated_saves() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockProfileRepo::empty();
    let rows = repo.rows_handle();

    let usecase = SavePersonalInfoUseCase {
        guard: guard(),
        profiles: repo,
    };

    usecase
        .execute(Some(&token), valid_personal_form())
        .await
        .unwrap();

    let mut second = valid_personal_form();
    second.first_name = "Minji".into();
    usecase.execute(Some(&token), second).await.unwrap();

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1, "identity is the upsert key");
    assert_eq!(rows[0].info.first_name, "Minji");
}

#[tokio::test]
async fn should_round_trip_saved_section_through_get() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockProfileRepo::empty();
    let rows = repo.rows_handle();

    let save = SavePersonalInfoUseCase {
        guard: guard(),
        profiles: repo,
    };
    save.execute(Some(&token), valid_personal_form())
        .await
        .unwrap();

    let get = GetPersonalInfoUseCase {
        guard: guard(),
        profiles: MockProfileRepo { rows },
    };
    let profile = get.execute(Some(&token)).await.unwrap().unwrap();

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.info.email, "mina@example.com");
    assert_eq!(profile.info.gender, Some(Gender::Female));
    assert_eq!(
        profile.info.date_of_birth,
        NaiveDate::from_ymd_opt(1999, 4, 12).unwrap()
    );
}

#[tokio::test]
async fn should_accept_future_date_of_birth() {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let repo = MockProfileRepo::empty();
    let rows = repo.rows_handle();

    let mut form = valid_personal_form();
    form.date_of_birth = "2030-01-01".into();

    let usecase = SavePersonalInfoUseCase {
        guard: guard(),
        profiles: repo,
    };
    usecase.execute(Some(&token), form).await.unwrap();

    assert_eq!(
        rows.lock().unwrap()[0].info.date_of_birth,
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    );
}

#[tokio::test]
async fn should_return_every_field_error_at_once() {
    let token = token_for(Uuid::new_v4());
    let repo = MockProfileRepo::empty();
    let rows = repo.rows_handle();

    let mut form = valid_personal_form();
    form.first_name = "".into();
    form.email = "nope".into();
    form.phone = "123".into();

    let usecase = SavePersonalInfoUseCase {
        guard: guard(),
        profiles: repo,
    };
    let result = usecase.execute(Some(&token), form).await;

    let Err(ProfileServiceError::ValidationFailed(fields)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    let named: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(named, vec!["first_name", "email", "phone"]);
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_expired_session_without_touching_store() {
    let token = expired_session_token(Uuid::new_v4(), TEST_JWT_SECRET);
    let repo = MockProfileRepo::empty();
    let rows = repo.rows_handle();

    let usecase = SavePersonalInfoUseCase {
        guard: guard(),
        profiles: repo,
    };
    let result = usecase.execute(Some(&token), valid_personal_form()).await;

    assert!(matches!(result, Err(ProfileServiceError::Unauthenticated)));
    assert!(rows.lock().unwrap().is_empty());
}
