//! Competing serializable transactions on one chain.

use std::sync::Arc;

use crate::postgres::helpers::{prepare_board, with_retries};
use taskboard::board::domain::ColumnId;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_moves_leave_a_valid_chain() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    let (project, created) = prepared
        .project_with_columns("Roadmap", &["A", "B", "C", "D", "E"])
        .await?;
    let moves: Vec<(ColumnId, ColumnId)> = created
        .iter()
        .copied()
        .zip(created.iter().copied().cycle().skip(1))
        .cycle()
        .take(10)
        .collect();

    let mut handles = Vec::new();
    for (column, after) in moves {
        let service = Arc::clone(&prepared.columns);
        let owner = prepared.owner.clone();
        handles.push(tokio::spawn(async move {
            with_retries(|| service.reposition(&owner, column, Some(after)))
                .await
                .map(|_| ())
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let mut names = prepared.column_names(project).await?;
    names.sort();
    assert_eq!(names, ["A", "B", "C", "D", "E"]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_all_land_in_the_chain() -> Result<(), eyre::Report> {
    let Some(prepared) = prepare_board().await? else {
        return Ok(());
    };
    let (project, _) = prepared.project_with_columns("Roadmap", &[]).await?;

    let mut handles = Vec::new();
    for index in 0..8_usize {
        let service = Arc::clone(&prepared.columns);
        let owner = prepared.owner.clone();
        let name = format!("Column {index}");
        handles.push(tokio::spawn(async move {
            with_retries(|| service.create(&owner, project, &name))
                .await
                .map(|column| column.id())
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(prepared.column_names(project).await?.len(), 8);
    Ok(())
}
