use crate::infra::{build_generators, parse_status, parse_submission_id};
use clap::Args;
use lumethis::config::AppConfig;
use lumethis::error::AppError;
use lumethis::identity::{Roster, UserIdentity};
use lumethis::workflows::generators::{FormState, TrainingPlan};
use lumethis::workflows::training::{
    panel_heading, InMemorySubmissionRepository, ReviewAction, ReviewSession, SubmissionId,
    SubmissionRepository, SubmissionStatus,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReviewArgs {
    /// Roster id of the user to log in as (for example u1 or u3)
    #[arg(long)]
    pub(crate) user: String,
    /// Submission to select instead of the first visible one
    #[arg(long, value_parser = parse_submission_id)]
    pub(crate) select: Option<SubmissionId>,
    /// Approve the selected submission for group rollout
    #[arg(long, conflicts_with_all = ["request_changes", "status"])]
    pub(crate) approve: bool,
    /// Send the selected submission back with changes requested
    #[arg(long, conflicts_with = "status")]
    pub(crate) request_changes: bool,
    /// Set an explicit status label on the selected submission
    #[arg(long, value_parser = parse_status)]
    pub(crate) status: Option<SubmissionStatus>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Also call the configured completion service for a sample training plan.
    #[arg(long)]
    pub(crate) generate: bool,
    /// Topic for the sample training plan.
    #[arg(long, default_value = "Project Management")]
    pub(crate) topic: String,
    /// Target audience for the sample training plan.
    #[arg(long, default_value = "Operations Managers")]
    pub(crate) audience: String,
}

pub(crate) fn run_review(args: ReviewArgs) -> Result<(), AppError> {
    let roster = Roster::standard();
    let Some(user) = roster.find(args.user.trim()).cloned() else {
        println!("Unknown user '{}'. Available logins:", args.user);
        for user in roster.users() {
            println!("  {:<3} {} ({})", user.id.0, user.name, user.scope_label());
        }
        return Ok(());
    };

    let repository = Arc::new(InMemorySubmissionRepository::seeded());
    let mut session = match ReviewSession::open(repository, user) {
        Ok(session) => session,
        Err(err) => {
            println!("Submissions unavailable: {}", err);
            return Ok(());
        }
    };

    if let Some(id) = args.select.as_ref() {
        if !session.select(id) {
            println!("Submission {} is not visible to this user; keeping current selection", id);
        }
    }

    render_session(&session);

    let target = if args.approve {
        Some(ReviewAction::Approve.target_status())
    } else if args.request_changes {
        Some(ReviewAction::RequestChanges.target_status())
    } else {
        args.status
    };

    if let Some(status) = target {
        let Some(id) = session.selected_id().cloned() else {
            println!("\nNothing selected to review");
            return Ok(());
        };
        let user = session.current_user().clone();
        match session.request_status_change(&id, status, &user) {
            Ok(updated) => println!("\n{} is now {}", updated.id, updated.status),
            Err(err) => println!("\nReview rejected: {}", err),
        }
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let roster = Roster::standard();
    println!("Lumethis review demo");

    if let Some(manager) = roster.find("u3").cloned() {
        println!("\nScenario: subsidiary manager tries to approve their own program");
        manager_scenario(manager);
    }

    if let Some(admin) = roster.find("u1").cloned() {
        println!("\nScenario: group admin approves the drone program");
        admin_scenario(admin);
    }

    if args.generate {
        println!("\nScenario: AI strategist drafts a training plan");
        generation_scenario(&args).await?;
    }

    Ok(())
}

fn manager_scenario(manager: UserIdentity) {
    let repository = Arc::new(InMemorySubmissionRepository::seeded());
    let mut session = match ReviewSession::open(repository, manager) {
        Ok(session) => session,
        Err(err) => {
            println!("  Submissions unavailable: {}", err);
            return;
        }
    };
    render_session(&session);

    match session.review_selected(ReviewAction::Approve) {
        Ok(updated) => println!("  Unexpectedly approved {}", updated.id),
        Err(err) => println!("  Approval refused: {}", err),
    }
    if let Some(selected) = session.selected() {
        println!("  {} remains {}", selected.id, selected.status);
    }
}

fn admin_scenario(admin: UserIdentity) {
    let repository = Arc::new(InMemorySubmissionRepository::seeded());
    let mut session = match ReviewSession::open(repository.clone(), admin.clone()) {
        Ok(session) => session,
        Err(err) => {
            println!("  Submissions unavailable: {}", err);
            return;
        }
    };
    render_session(&session);

    let drone = SubmissionId::new("sub-002");
    match session.request_status_change(&drone, SubmissionStatus::GroupApproved, &admin) {
        Ok(updated) => println!("  {} is now {}", updated.id, updated.status),
        Err(err) => println!("  Approval failed: {}", err),
    }

    match repository.all() {
        Ok(all) => {
            println!("  Repository after review:");
            for submission in all {
                println!(
                    "    {:<8} {:<22} {}",
                    submission.id.0,
                    submission.unit.display_name(),
                    submission.status
                );
            }
        }
        Err(err) => println!("  Repository unavailable: {}", err),
    }
}

async fn generation_scenario(args: &DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    if !config.genai.is_enabled() {
        println!("  No API key configured; the strategist will report that nothing was generated");
    }
    let generators = build_generators(&config.genai)?;

    let mut form: FormState<TrainingPlan> = FormState::default();
    let Some(ticket) = form.begin() else {
        return Ok(());
    };
    let outcome = generators
        .generate_training_strategy(&args.topic, &args.audience, "")
        .await;
    form.complete(ticket, outcome);

    match form.result() {
        Some(plan) => {
            println!("  {}", plan.title);
            println!("  {}", plan.overview);
            for module in &plan.modules {
                println!("    - {} ({})", module.name, module.duration);
            }
        }
        None => println!("  No plan generated. Try again later."),
    }
    Ok(())
}

fn render_session<R>(session: &ReviewSession<R>)
where
    R: SubmissionRepository + 'static,
{
    let user = session.current_user();
    println!("  Logged in as {} ({})", user.name, user.scope_label());
    println!("  {}", panel_heading(user.role));

    if let Some(empty) = session.empty_state() {
        println!("  {}: {}", empty.heading, empty.message);
        return;
    }

    let selected = session.selected_id();
    for submission in session.visible() {
        let marker = if Some(&submission.id) == selected { ">" } else { " " };
        println!(
            "  {} {:<8} {:<40} {:<20} {}",
            marker,
            submission.id.0,
            submission.title,
            submission.unit.display_name(),
            submission.status
        );
    }
    if session.can_review() {
        println!("  Review controls: approve, request changes");
    }
}
