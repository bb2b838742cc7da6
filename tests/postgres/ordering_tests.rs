//! Chains written and read back through a `PostgreSQL` repository.

use crate::postgres::helpers::prepare_board;
use taskboard::board::{services::CreateTaskRequest, views::BoardView};

#[tokio::test(flavor = "multi_thread")]
async fn moving_the_last_column_to_the_head_persists() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    let (project, ids) = prepared
        .project_with_columns("Roadmap", &["A", "B", "C"])
        .await?;
    let c = *ids.last().ok_or_else(|| eyre::eyre!("missing column"))?;

    prepared.columns.reposition(&prepared.owner, c, None).await?;

    assert_eq!(prepared.column_names(project).await?, ["C", "A", "B"]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn board_reads_nest_tasks_in_order() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    let (project, ids) = prepared
        .project_with_columns("Roadmap", &["Todo", "Done"])
        .await?;
    let todo = *ids.first().ok_or_else(|| eyre::eyre!("missing column"))?;
    let first = prepared
        .tasks
        .create(&prepared.owner, CreateTaskRequest::new(todo, "First"))
        .await?;
    let second = prepared
        .tasks
        .create(
            &prepared.owner,
            CreateTaskRequest::new(todo, "Second").with_description("details"),
        )
        .await?;

    prepared
        .tasks
        .reposition(&prepared.owner, second.id(), None)
        .await?;
    let board = prepared.projects.board(&prepared.owner, project).await?;
    let view = BoardView::from(&board);

    let todo_view = view
        .columns
        .first()
        .ok_or_else(|| eyre::eyre!("missing column view"))?;
    let names: Vec<_> = todo_view.tasks.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["Second", "First"]);
    assert_eq!(
        todo_view.tasks.first().and_then(|task| task.successor_id),
        Some(first.id())
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_removes_everything() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    let (project, ids) = prepared
        .project_with_columns("Roadmap", &["Todo", "Done"])
        .await?;
    for column in &ids {
        prepared
            .tasks
            .create(&prepared.owner, CreateTaskRequest::new(*column, "Work"))
            .await?;
    }

    let summary = prepared.projects.delete(&prepared.owner, project).await?;
    let remaining = prepared.projects.list(&prepared.owner, None).await?;

    assert_eq!((summary.columns, summary.tasks), (2, 2));
    assert!(remaining.is_empty());
    Ok(())
}
