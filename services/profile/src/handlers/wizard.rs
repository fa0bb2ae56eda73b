use axum::Json;
use serde::Serialize;

use uniport_domain::wizard::WizardStep;

// ── GET /profile/create ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct WizardStepInfo {
    pub step: WizardStep,
    pub route: String,
}

#[derive(Serialize)]
pub struct WizardOverviewResponse {
    pub steps: Vec<WizardStepInfo>,
    /// Route of the step a fresh visit starts on.
    pub start: String,
}

/// Static description of the wizard. Steps carry no completion state; any
/// step may be visited directly.
pub async fn get_wizard_overview() -> Json<WizardOverviewResponse> {
    let mut steps = Vec::new();
    let mut step = Some(WizardStep::first());
    while let Some(current) = step {
        steps.push(WizardStepInfo {
            step: current,
            route: current.route(),
        });
        step = current.next();
    }

    Json(WizardOverviewResponse {
        steps,
        start: WizardStep::first().route(),
    })
}
