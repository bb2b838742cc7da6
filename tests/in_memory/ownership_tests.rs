//! Records owned by another user behave as if they did not exist.

use crate::in_memory::helpers::{Board, board};
use rstest::rstest;
use taskboard::board::{domain::OwnerName, services::BoardErrorKind};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strangers_cannot_list_or_move_columns(board: Board) -> Result<(), eyre::Report> {
    let (project, ids) = board.project_with_columns("Roadmap", &["A", "B"]).await?;
    let b = *ids.last().ok_or_else(|| eyre::eyre!("missing column"))?;
    let stranger = OwnerName::new("mallory")?;

    let listing = board.columns.list(&stranger, project).await;
    let moving = board.columns.reposition(&stranger, b, None).await;

    assert_eq!(
        listing.map_err(|err| err.kind()).err(),
        Some(BoardErrorKind::NotFound)
    );
    assert_eq!(
        moving.map_err(|err| err.kind()).err(),
        Some(BoardErrorKind::NotFound)
    );
    assert_eq!(board.column_names(project).await?, ["A", "B"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strangers_do_not_see_projects(board: Board) -> Result<(), eyre::Report> {
    board.project_with_columns("Roadmap", &[]).await?;
    let stranger = OwnerName::new("mallory")?;

    let projects = board.projects.list(&stranger, None).await?;
    let own = board.projects.list(&board.owner, None).await?;

    assert!(projects.is_empty());
    assert_eq!(own.len(), 1);
    Ok(())
}
