//! In-Memory Scorecard Store
//!
//! Keeps scorecards in memory. Useful for testing and the demo binary.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RunId};
use crate::ports::{Scorecard, ScorecardWriter};

/// In-memory storage for scorecards, in insertion order
#[derive(Debug, Clone)]
pub struct InMemoryScorecardStore {
    scorecards: Arc<RwLock<Vec<Scorecard>>>,
}

impl InMemoryScorecardStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            scorecards: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the number of stored scorecards
    pub async fn count(&self) -> usize {
        self.scorecards.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.scorecards.write().await.clear();
    }
}

impl Default for InMemoryScorecardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScorecardWriter for InMemoryScorecardStore {
    async fn save(&self, scorecard: &Scorecard) -> Result<(), DomainError> {
        let mut scorecards = self.scorecards.write().await;
        match scorecards.iter_mut().find(|s| s.id == scorecard.id) {
            Some(existing) => *existing = scorecard.clone(),
            None => scorecards.push(scorecard.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &RunId) -> Result<Option<Scorecard>, DomainError> {
        let scorecards = self.scorecards.read().await;
        Ok(scorecards.iter().find(|s| &s.id == id).cloned())
    }

    async fn list_for_period(&self, period_label: &str) -> Result<Vec<Scorecard>, DomainError> {
        let scorecards = self.scorecards.read().await;
        Ok(scorecards
            .iter()
            .filter(|s| s.period_label == period_label)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{
        rank, CriteriaPolarity, CriteriaWeights, DecisionMatrix, RankingOptions,
    };

    fn scorecard(period: &str) -> Scorecard {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
        let result = rank(
            &matrix,
            &CriteriaWeights::uniform(2).unwrap(),
            &CriteriaPolarity::all_benefit(2),
            &RankingOptions::default(),
        )
        .unwrap();
        Scorecard::from_result(period, result)
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = InMemoryScorecardStore::new();
        let card = scorecard("2024");

        store.save(&card).await.unwrap();

        let found = store.find_by_id(&card.id).await.unwrap();
        assert_eq!(found, Some(card));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_save_same_id_replaces() {
        let store = InMemoryScorecardStore::new();
        let mut card = scorecard("2024");
        store.save(&card).await.unwrap();

        card.period_label = "2024-Q4".to_string();
        store.save(&card).await.unwrap();

        assert_eq!(store.count().await, 1);
        assert_eq!(store.list_for_period("2024-Q4").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_for_period_filters() {
        let store = InMemoryScorecardStore::new();
        store.save(&scorecard("2023")).await.unwrap();
        store.save(&scorecard("2024")).await.unwrap();
        store.save(&scorecard("2024")).await.unwrap();

        assert_eq!(store.list_for_period("2024").await.unwrap().len(), 2);
        assert!(store.list_for_period("2025").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = InMemoryScorecardStore::new();
        assert!(store.find_by_id(&RunId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryScorecardStore::new();
        store.save(&scorecard("2024")).await.unwrap();
        store.clear().await;
        assert_eq!(store.count().await, 0);
    }
}
