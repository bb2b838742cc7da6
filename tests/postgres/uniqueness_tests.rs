//! Name constraints enforced by the board schema.

use crate::postgres::helpers::prepare_board;
use taskboard::board::services::BoardServiceError;

#[tokio::test(flavor = "multi_thread")]
async fn column_names_are_unique_ignoring_case() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    let (project, _) = prepared.project_with_columns("Roadmap", &["Todo"]).await?;

    let result = prepared
        .columns
        .create(&prepared.owner, project, "TODO")
        .await;

    assert!(matches!(
        result,
        Err(BoardServiceError::DuplicateColumnName(_))
    ));
    assert_eq!(prepared.column_names(project).await?, ["Todo"]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn project_names_are_unique_per_owner() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    prepared.project_with_columns("Roadmap", &[]).await?;

    let result = prepared.projects.create(&prepared.owner, "Roadmap").await;

    assert!(matches!(
        result,
        Err(BoardServiceError::DuplicateProjectName(_))
    ));
    Ok(())
}
