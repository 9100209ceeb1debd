//! Then steps for board flow BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use tuido::board::{
    adapters::json_file::JsonFileGateway,
    domain::{Stage, StageSet, Task, TaskId},
    services::TaskStore,
};

#[then(r#"the task "{theme}" has id {id:i64} and stage {stage:usize}"#)]
fn task_has_id_and_stage(
    world: &BoardWorld,
    theme: String,
    id: i64,
    stage: usize,
) -> Result<(), eyre::Report> {
    let task = world
        .store
        .tasks()
        .iter()
        .find(|task| task.theme() == theme)
        .ok_or_else(|| eyre::eyre!("no task with theme '{theme}' on the board"))?;

    if task.id() != TaskId::new(id) {
        return Err(eyre::eyre!(
            "expected '{theme}' to have id {id}, found {}",
            task.id()
        ));
    }
    if task.stage() != Stage::new(stage) {
        return Err(eyre::eyre!(
            "expected '{theme}' to be in stage {stage}, found {}",
            task.stage()
        ));
    }
    Ok(())
}

#[then("the move is a silent no-op")]
fn move_was_a_no_op(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_move {
        Some(None) => Ok(()),
        Some(Some(stage)) => Err(eyre::eyre!("expected a no-op move, task moved to {stage}")),
        None => Err(eyre::eyre!("no move step ran before this assertion")),
    }
}

#[then("a store reopened on the same storage sees the same collection")]
fn reopened_store_sees_same_collection(world: &BoardWorld) -> Result<(), eyre::Report> {
    let reopened = TaskStore::open(
        JsonFileGateway::at(&world.storage_path),
        StageSet::default_pipeline(),
    )
    .map_err(|err| eyre::eyre!("reopening the store failed: {err}"))?;

    if reopened.tasks() != world.store.tasks() {
        return Err(eyre::eyre!(
            "reloaded collection differs from the in-memory one"
        ));
    }
    Ok(())
}

#[then(r#"the remaining task themes in order are "{themes}""#)]
fn remaining_themes_in_order(world: &BoardWorld, themes: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = themes.split(", ").collect();
    let actual: Vec<&str> = world.store.tasks().iter().map(Task::theme).collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected themes {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}
