//! Concurrent moves through a shared repository.

use std::sync::Arc;

use crate::in_memory::helpers::{Board, board};
use rstest::rstest;
use taskboard::board::domain::ColumnId;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_moves_keep_one_chain(board: Board) -> Result<(), eyre::Report> {
    let names = ["A", "B", "C", "D", "E", "F"];
    let (project, created) = board.project_with_columns("Roadmap", &names).await?;
    let moves: Vec<(ColumnId, ColumnId)> = created
        .iter()
        .copied()
        .zip(created.iter().copied().cycle().skip(2))
        .cycle()
        .take(24)
        .collect();

    let mut handles = Vec::new();
    for (column, after) in moves {
        let service = Arc::clone(&board.columns);
        let owner = board.owner.clone();
        handles.push(tokio::spawn(async move {
            service.reposition(&owner, column, Some(after)).await.map(|_| ())
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let columns = board.columns.list(&board.owner, project).await?;
    let mut listed: Vec<_> = columns.iter().map(|column| column.id()).collect();
    let mut expected = created;
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);
    Ok(())
}
