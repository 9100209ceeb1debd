//! Given steps for board flow BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;

#[given("an empty board backed by file storage")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if world.store.task_count() != 0 {
        return Err(eyre::eyre!(
            "expected a freshly bootstrapped board, found {} tasks",
            world.store.task_count()
        ));
    }
    Ok(())
}
