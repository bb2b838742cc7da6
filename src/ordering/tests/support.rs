//! Test node type and store shared by the ordering tests.

use crate::ordering::{ChainLinks, ChainNode, ChainStore, StoreError, StoreResult};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

/// Minimal chained record: a card on one of several lanes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub lane: u32,
    pub links: ChainLinks<u32>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(id: u32, lane: u32) -> Self {
        Self {
            id,
            lane,
            links: ChainLinks::detached(),
            updated_at: epoch(),
        }
    }

    pub fn linked(id: u32, lane: u32, predecessor: Option<u32>, successor: Option<u32>) -> Self {
        Self {
            links: ChainLinks::new(predecessor, successor),
            ..Self::new(id, lane)
        }
    }
}

impl ChainNode for Card {
    type Id = u32;
    type ScopeId = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn scope_id(&self) -> u32 {
        self.lane
    }

    fn links(&self) -> ChainLinks<u32> {
        self.links
    }

    fn relink(&mut self, links: ChainLinks<u32>, at: DateTime<Utc>) {
        self.links = links;
        self.updated_at = at;
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(0, 0).single().unwrap_or_default()
}

pub fn later() -> DateTime<Utc> {
    Utc.timestamp_opt(1_000, 0).single().unwrap_or_default()
}

/// Store backed by an ordered map, recording every write it receives.
#[derive(Debug, Default)]
pub struct VecStore {
    pub cards: BTreeMap<u32, Card>,
    pub inserts: usize,
    pub link_batches: Vec<Vec<u32>>,
    pub removals: Vec<u32>,
}

impl VecStore {
    /// Builds a store holding a well-formed chain of `ids` on `lane`.
    pub fn with_chain(lane: u32, ids: &[u32]) -> Self {
        let mut store = Self::default();
        store.add_chain(lane, ids);
        store
    }

    pub fn add_chain(&mut self, lane: u32, ids: &[u32]) {
        for (index, id) in ids.iter().enumerate() {
            let predecessor = index.checked_sub(1).and_then(|i| ids.get(i)).copied();
            let successor = ids.get(index + 1).copied();
            self.cards
                .insert(*id, Card::linked(*id, lane, predecessor, successor));
        }
    }

    pub fn card(&self, id: u32) -> &Card {
        self.cards.get(&id).expect("card should exist")
    }

    pub fn order(&mut self, lane: u32) -> Vec<u32> {
        crate::ordering::list_scope::<Card, _>(self, lane)
            .expect("lane should form a chain")
            .iter()
            .map(|card| card.id)
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.inserts + self.removals.len() + self.link_batches.iter().map(Vec::len).sum::<usize>()
    }
}

impl ChainStore<Card> for VecStore {
    fn find(&mut self, id: u32) -> StoreResult<Option<Card>> {
        Ok(self.cards.get(&id).cloned())
    }

    fn members(&mut self, scope: u32) -> StoreResult<Vec<Card>> {
        Ok(self
            .cards
            .values()
            .filter(|card| card.lane == scope)
            .cloned()
            .collect())
    }

    fn insert(&mut self, node: &Card) -> StoreResult<()> {
        if self.cards.contains_key(&node.id) {
            return Err(StoreError::UniqueViolation {
                constraint: "cards_pkey".to_owned(),
            });
        }
        self.inserts += 1;
        self.cards.insert(node.id, node.clone());
        Ok(())
    }

    fn update_links(&mut self, nodes: &[Card]) -> StoreResult<()> {
        for node in nodes {
            let stored = self
                .cards
                .get_mut(&node.id)
                .ok_or_else(|| StoreError::missing_record(node.id))?;
            stored.links = node.links;
            stored.updated_at = node.updated_at;
        }
        self.link_batches
            .push(nodes.iter().map(|node| node.id).collect());
        Ok(())
    }

    fn remove(&mut self, id: u32) -> StoreResult<()> {
        self.cards
            .remove(&id)
            .ok_or_else(|| StoreError::missing_record(id))?;
        self.removals.push(id);
        Ok(())
    }

    fn remove_scope(&mut self, scope: u32) -> StoreResult<usize> {
        let before = self.cards.len();
        self.cards.retain(|_, card| card.lane != scope);
        Ok(before - self.cards.len())
    }
}
