//! Given steps for column ordering BDD scenarios.

use super::world::{ColumnOrderingWorld, run_async, split_names};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a project "{name}" with columns "{columns}""#)]
fn project_with_columns(
    world: &mut ColumnOrderingWorld,
    name: String,
    columns: String,
) -> Result<(), eyre::Report> {
    let project = run_async(world.projects.create(&world.owner, &name))
        .wrap_err("create project for column ordering scenario")?;
    world.project = Some(project.id());

    for column_name in split_names(&columns) {
        let column = run_async(world.columns.create(&world.owner, project.id(), &column_name))
            .wrap_err_with(|| format!("create column {column_name}"))?;
        world.column_ids.insert(column_name, column.id());
    }
    Ok(())
}
