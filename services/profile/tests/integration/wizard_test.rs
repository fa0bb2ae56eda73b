use uniport_domain::wizard::WizardStep;
use uniport_profile::handlers::wizard::get_wizard_overview;

// ── Wizard sequencing ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_describe_five_steps_whose_routes_round_trip() {
    let axum::Json(overview) = get_wizard_overview().await;

    assert_eq!(overview.steps.len(), 5);
    assert_eq!(overview.start, "/profile/create/personal-info");

    for info in &overview.steps {
        let segment = info.route.rsplit('/').next().unwrap();
        assert_eq!(WizardStep::from_segment(segment), Some(info.step));
        assert_eq!(info.step.route(), info.route);
    }
}

#[tokio::test]
async fn should_chain_save_redirects_through_to_the_profile_page() {
    let mut step = WizardStep::first();
    let mut targets = vec![];
    loop {
        targets.push(step.route_after_save());
        match step.next() {
            Some(next) => step = next,
            None => break,
        }
    }

    assert_eq!(
        targets,
        vec![
            "/profile/create/academic-info",
            "/profile/create/employment-info",
            "/profile/create/docs",
            "/profile/create/review",
            "/profile",
        ]
    );
}
