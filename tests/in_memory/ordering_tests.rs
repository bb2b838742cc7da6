//! Ordering scenarios driven through the column and task services.

use crate::in_memory::helpers::{Board, board};
use rstest::rstest;
use taskboard::board::services::BoardErrorKind;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_the_last_column_to_the_head(board: Board) -> Result<(), eyre::Report> {
    let (project, ids) = board
        .project_with_columns("Roadmap", &["A", "B", "C"])
        .await?;
    let c = *ids.last().ok_or_else(|| eyre::eyre!("missing column C"))?;

    let moved = board.columns.reposition(&board.owner, c, None).await?;

    assert_eq!(board.column_names(project).await?, ["C", "A", "B"]);
    assert_eq!(moved.predecessor(), None);
    assert_eq!(moved.successor(), ids.first().copied());
    Ok(())
}

#[rstest]
#[case(0, Some(2), &["B", "C", "A", "D"])]
#[case(3, Some(0), &["A", "D", "B", "C"])]
#[case(1, Some(2), &["A", "C", "B", "D"])]
#[case(2, None, &["C", "A", "B", "D"])]
#[tokio::test(flavor = "multi_thread")]
async fn column_moves_produce_the_expected_order(
    board: Board,
    #[case] moved: usize,
    #[case] after: Option<usize>,
    #[case] expected: &[&str],
) -> Result<(), eyre::Report> {
    let (project, ids) = board
        .project_with_columns("Roadmap", &["A", "B", "C", "D"])
        .await?;
    let column = *ids.get(moved).ok_or_else(|| eyre::eyre!("bad index"))?;
    let target = match after {
        Some(index) => Some(*ids.get(index).ok_or_else(|| eyre::eyre!("bad index"))?),
        None => None,
    };

    board.columns.reposition(&board.owner, column, target).await?;

    assert_eq!(board.column_names(project).await?, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_reorder_within_their_column(board: Board) -> Result<(), eyre::Report> {
    let (_, columns) = board.project_with_columns("Roadmap", &["Todo"]).await?;
    let todo = *columns.first().ok_or_else(|| eyre::eyre!("missing column"))?;
    let tasks = board.tasks_in(todo, &["Plan", "Build", "Ship"]).await?;
    let plan = *tasks.first().ok_or_else(|| eyre::eyre!("missing task"))?;
    let ship = *tasks.last().ok_or_else(|| eyre::eyre!("missing task"))?;

    board.tasks.reposition(&board.owner, plan, Some(ship)).await?;
    board.tasks.delete(&board.owner, ship).await?;

    assert_eq!(board.task_names(todo).await?, ["Build", "Plan"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_a_column_after_itself_is_rejected(board: Board) -> Result<(), eyre::Report> {
    let (project, ids) = board.project_with_columns("Roadmap", &["A", "B"]).await?;
    let a = *ids.first().ok_or_else(|| eyre::eyre!("missing column"))?;
    let writes = board.repository.committed_writes();

    let result = board.columns.reposition(&board.owner, a, Some(a)).await;

    assert_eq!(
        result.map_err(|err| err.kind()).err(),
        Some(BoardErrorKind::InvalidArgument)
    );
    assert_eq!(board.repository.committed_writes(), writes);
    assert_eq!(board.column_names(project).await?, ["A", "B"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn columns_cannot_follow_a_column_of_another_project(
    board: Board,
) -> Result<(), eyre::Report> {
    let (_, first) = board.project_with_columns("Roadmap", &["A"]).await?;
    let (_, second) = board.project_with_columns("Website", &["B"]).await?;
    let a = *first.first().ok_or_else(|| eyre::eyre!("missing column"))?;
    let b = *second.first().ok_or_else(|| eyre::eyre!("missing column"))?;

    let result = board.columns.reposition(&board.owner, a, Some(b)).await;

    assert_eq!(
        result.map_err(|err| err.kind()).err(),
        Some(BoardErrorKind::InvalidArgument)
    );
    Ok(())
}
