//! Then steps for column ordering BDD scenarios.

use super::world::{ColumnOrderingWorld, run_async, split_names};
use rstest_bdd_macros::then;
use taskboard::board::services::BoardServiceError;

#[then(r#"the columns read "{expected}""#)]
fn columns_read(world: &ColumnOrderingWorld, expected: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    let columns = run_async(world.columns.list(&world.owner, project))?;
    let actual: Vec<String> = columns
        .iter()
        .map(|column| column.name().to_string())
        .collect();

    let wanted = split_names(&expected);
    if actual != wanted {
        return Err(eyre::eyre!("expected columns {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the request fails as a duplicate column name")]
fn fails_as_duplicate(world: &ColumnOrderingWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardServiceError::DuplicateColumnName(_)) => Ok(()),
        other => Err(eyre::eyre!("expected DuplicateColumnName, got {other:?}")),
    }
}

#[then("the request fails as an invalid move")]
fn fails_as_invalid_move(world: &ColumnOrderingWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardServiceError::InvalidMove(_)) => Ok(()),
        other => Err(eyre::eyre!("expected InvalidMove, got {other:?}")),
    }
}
