//! Given steps for owner-scoped task isolation BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::auth::domain::{AuthenticatedUser, UserId};
use taskboard::task::services::CreateTaskRequest;

use super::world::{OwnershipWorld, run_async};

#[given(r#"a user "{name}""#)]
fn a_user(world: &mut OwnershipWorld, name: String) {
    let user = AuthenticatedUser::new(UserId::new(), name.clone());
    world.users.insert(name, user);
}

#[given(r#""{name}" has created a task titled "{title}" described "{description}""#)]
fn user_has_created_a_task(
    world: &mut OwnershipWorld,
    name: String,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    let created = run_async(
        world
            .commands
            .create_task(CreateTaskRequest::new(title, description), &user),
    )
    .wrap_err("create task in scenario setup")?;
    world.task = Some(created);
    Ok(())
}
