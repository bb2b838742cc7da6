//! Working-copy transaction used by the in-memory repository.

use crate::board::domain::{
    Column, ColumnId, OwnerName, Project, ProjectId, Task, TaskId,
};
use crate::board::ports::BoardTransaction;
use crate::ordering::{ChainNode, ChainStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::hash::Hash;

/// Committed contents of the in-memory store.
#[derive(Debug, Clone, Default)]
pub(super) struct BoardState {
    projects: HashMap<ProjectId, Project>,
    columns: HashMap<ColumnId, Column>,
    tasks: HashMap<TaskId, Task>,
}

/// Open transaction over a private copy of the committed state.
pub(super) struct MemoryTransaction {
    state: BoardState,
    writes: usize,
    write_limit: Option<usize>,
}

impl MemoryTransaction {
    pub(super) const fn begin(state: BoardState, write_limit: Option<usize>) -> Self {
        Self {
            state,
            writes: 0,
            write_limit,
        }
    }

    pub(super) fn finish(self) -> (BoardState, usize) {
        (self.state, self.writes)
    }

    fn record_writes(&mut self, rows: usize) -> StoreResult<()> {
        let total = self.writes + rows;
        if self.write_limit.is_some_and(|limit| total > limit) {
            return Err(StoreError::persistence(std::io::Error::other(
                "injected write failure",
            )));
        }
        self.writes = total;
        Ok(())
    }
}

fn unique_violation(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_owned(),
    }
}

fn members_in<N: ChainNode>(table: &HashMap<N::Id, N>, scope: N::ScopeId) -> Vec<N> {
    table
        .values()
        .filter(|node| node.scope_id() == scope)
        .cloned()
        .collect()
}

fn replace_in<K, V>(table: &mut HashMap<K, V>, key: K, value: &V) -> StoreResult<()>
where
    K: Eq + Hash + ToString,
    V: Clone,
{
    let stored = table
        .get_mut(&key)
        .ok_or_else(|| StoreError::missing_record(key.to_string()))?;
    *stored = value.clone();
    Ok(())
}

fn remove_from<K, V>(table: &mut HashMap<K, V>, key: &K) -> StoreResult<()>
where
    K: Eq + Hash + ToString,
{
    table
        .remove(key)
        .map(|_| ())
        .ok_or_else(|| StoreError::missing_record(key.to_string()))
}

impl MemoryTransaction {
    fn check_column_name(&self, column: &Column) -> StoreResult<()> {
        let collides = self.state.columns.values().any(|other| {
            other.id() != column.id()
                && other.project_id() == column.project_id()
                && other.name().collides_with(column.name())
        });
        if collides {
            return Err(unique_violation("board_columns_project_name_key"));
        }
        Ok(())
    }

    fn check_project_name(&self, project: &Project) -> StoreResult<()> {
        let collides = self.state.projects.values().any(|other| {
            other.id() != project.id()
                && other.owner() == project.owner()
                && other.name() == project.name()
        });
        if collides {
            return Err(unique_violation("projects_owner_name_key"));
        }
        Ok(())
    }
}

impl ChainStore<Column> for MemoryTransaction {
    fn find(&mut self, id: ColumnId) -> StoreResult<Option<Column>> {
        Ok(self.state.columns.get(&id).cloned())
    }

    fn members(&mut self, scope: ProjectId) -> StoreResult<Vec<Column>> {
        Ok(members_in(&self.state.columns, scope))
    }

    fn insert(&mut self, node: &Column) -> StoreResult<()> {
        if self.state.columns.contains_key(&node.id()) {
            return Err(unique_violation("board_columns_pkey"));
        }
        if !self.state.projects.contains_key(&node.project_id()) {
            return Err(StoreError::missing_record(node.project_id()));
        }
        self.check_column_name(node)?;
        self.record_writes(1)?;
        self.state.columns.insert(node.id(), node.clone());
        Ok(())
    }

    fn update_links(&mut self, nodes: &[Column]) -> StoreResult<()> {
        self.record_writes(nodes.len())?;
        for node in nodes {
            replace_in(&mut self.state.columns, node.id(), node)?;
        }
        Ok(())
    }

    fn remove(&mut self, id: ColumnId) -> StoreResult<()> {
        self.record_writes(1)?;
        remove_from(&mut self.state.columns, &id)
    }

    fn remove_scope(&mut self, scope: ProjectId) -> StoreResult<usize> {
        let doomed = members_in(&self.state.columns, scope);
        self.record_writes(doomed.len())?;
        for column in &doomed {
            self.state.columns.remove(&column.id());
        }
        Ok(doomed.len())
    }
}

impl ChainStore<Task> for MemoryTransaction {
    fn find(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        Ok(self.state.tasks.get(&id).cloned())
    }

    fn members(&mut self, scope: ColumnId) -> StoreResult<Vec<Task>> {
        Ok(members_in(&self.state.tasks, scope))
    }

    fn insert(&mut self, node: &Task) -> StoreResult<()> {
        if self.state.tasks.contains_key(&node.id()) {
            return Err(unique_violation("board_tasks_pkey"));
        }
        if !self.state.columns.contains_key(&node.column_id()) {
            return Err(StoreError::missing_record(node.column_id()));
        }
        self.record_writes(1)?;
        self.state.tasks.insert(node.id(), node.clone());
        Ok(())
    }

    fn update_links(&mut self, nodes: &[Task]) -> StoreResult<()> {
        self.record_writes(nodes.len())?;
        for node in nodes {
            replace_in(&mut self.state.tasks, node.id(), node)?;
        }
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        self.record_writes(1)?;
        remove_from(&mut self.state.tasks, &id)
    }

    fn remove_scope(&mut self, scope: ColumnId) -> StoreResult<usize> {
        let doomed = members_in(&self.state.tasks, scope);
        self.record_writes(doomed.len())?;
        for task in &doomed {
            self.state.tasks.remove(&task.id());
        }
        Ok(doomed.len())
    }
}

impl BoardTransaction for MemoryTransaction {
    fn find_project(&mut self, id: ProjectId) -> StoreResult<Option<Project>> {
        Ok(self.state.projects.get(&id).cloned())
    }

    fn projects_of(&mut self, owner: &OwnerName) -> StoreResult<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .state
            .projects
            .values()
            .filter(|project| project.is_owned_by(owner))
            .cloned()
            .collect();
        projects.sort_by_key(|project| (project.created_at(), project.id()));
        Ok(projects)
    }

    fn insert_project(&mut self, project: &Project) -> StoreResult<()> {
        if self.state.projects.contains_key(&project.id()) {
            return Err(unique_violation("projects_pkey"));
        }
        self.check_project_name(project)?;
        self.record_writes(1)?;
        self.state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    fn update_project(&mut self, project: &Project) -> StoreResult<()> {
        self.check_project_name(project)?;
        self.record_writes(1)?;
        replace_in(&mut self.state.projects, project.id(), project)
    }

    fn remove_project(&mut self, id: ProjectId) -> StoreResult<()> {
        self.record_writes(1)?;
        remove_from(&mut self.state.projects, &id)
    }

    fn update_column(&mut self, column: &Column) -> StoreResult<()> {
        self.check_column_name(column)?;
        self.record_writes(1)?;
        replace_in(&mut self.state.columns, column.id(), column)
    }

    fn update_task(&mut self, task: &Task) -> StoreResult<()> {
        self.record_writes(1)?;
        replace_in(&mut self.state.tasks, task.id(), task)
    }
}
