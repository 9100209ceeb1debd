//! When steps for board flow BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;

#[when(r#"a task "{theme}" with description "{description}" is created"#)]
fn create_task(
    world: &mut BoardWorld,
    theme: String,
    description: String,
) -> Result<(), eyre::Report> {
    let (task, outcome) = world.store.create(theme.clone(), description);
    outcome.map_err(|err| eyre::eyre!("write-through failed on create: {err}"))?;
    world.created.push((theme, task.id()));
    Ok(())
}

#[when(r#"the task "{theme}" is moved forward"#)]
fn move_task_forward(world: &mut BoardWorld, theme: String) -> Result<(), eyre::Report> {
    let id = world
        .id_of(&theme)
        .ok_or_else(|| eyre::eyre!("no created task with theme '{theme}'"))?;
    let (moved, outcome) = world.store.move_forward(id);
    outcome.map_err(|err| eyre::eyre!("write-through failed on move: {err}"))?;
    world.last_move = Some(moved);
    Ok(())
}

#[when(r#"the task "{theme}" is moved backward"#)]
fn move_task_backward(world: &mut BoardWorld, theme: String) -> Result<(), eyre::Report> {
    let id = world
        .id_of(&theme)
        .ok_or_else(|| eyre::eyre!("no created task with theme '{theme}'"))?;
    let (moved, outcome) = world.store.move_backward(id);
    outcome.map_err(|err| eyre::eyre!("write-through failed on move: {err}"))?;
    world.last_move = Some(moved);
    Ok(())
}

#[when(r#"the task "{theme}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, theme: String) -> Result<(), eyre::Report> {
    let id = world
        .id_of(&theme)
        .ok_or_else(|| eyre::eyre!("no created task with theme '{theme}'"))?;
    let (removed, outcome) = world.store.delete(id);
    outcome.map_err(|err| eyre::eyre!("write-through failed on delete: {err}"))?;
    if removed.is_none() {
        return Err(eyre::eyre!("expected deletion of '{theme}' to remove a task"));
    }
    Ok(())
}
