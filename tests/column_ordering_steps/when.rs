//! When steps for column ordering BDD scenarios.

use super::world::{ColumnOrderingWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"column "{name}" is moved to the head"#)]
fn move_to_head(world: &mut ColumnOrderingWorld, name: String) -> Result<(), eyre::Report> {
    let column = world.column(&name)?;
    let result = run_async(world.columns.reposition(&world.owner, column, None));
    world.last_error = result.err();
    Ok(())
}

#[when(r#"column "{name}" is moved after "{target}""#)]
fn move_after(
    world: &mut ColumnOrderingWorld,
    name: String,
    target: String,
) -> Result<(), eyre::Report> {
    let column = world.column(&name)?;
    let after = world.column(&target)?;
    let result = run_async(world.columns.reposition(&world.owner, column, Some(after)));
    world.last_error = result.err();
    Ok(())
}

#[when(r#"a column named "{name}" is added"#)]
fn add_column(world: &mut ColumnOrderingWorld, name: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    match run_async(world.columns.create(&world.owner, project, &name)) {
        Ok(column) => {
            world.column_ids.insert(name, column.id());
            world.last_error = None;
        }
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}
