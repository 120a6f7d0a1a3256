//! GetProcessConversionsHandler - Query handler for the unit conversions of
//! a process life cycle.
//!
//! Returns the conversions an editor needs to show: the required ones
//! (placeholders included), the additional ones, or those relevant to the
//! production stage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::handlers::life_cycle_loader::load_life_cycle;
use crate::application::ApplicationError;
use crate::domain::conversion::Conversion;
use crate::domain::foundation::{ProcessLifeCycleId, Quantity, Unit};
use crate::ports::ProcessLifeCycleRepository;

/// Which conversions of a life cycle to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionFilter {
    /// Required conversions followed by the additional ones.
    #[default]
    All,
    Required,
    Additional,
    Production,
}

/// Query for the conversions of one life cycle.
#[derive(Debug, Clone)]
pub struct GetProcessConversionsQuery {
    pub life_cycle_id: ProcessLifeCycleId,
    pub filter: ConversionFilter,
}

/// Result of a conversions query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetProcessConversionsResult {
    pub life_cycle_id: ProcessLifeCycleId,
    /// Reference quantity of the process config, if it has processes.
    pub quantitative_reference: Option<Quantity>,
    pub required_units: Vec<Unit>,
    pub conversions: Vec<Conversion>,
    /// Number of required conversions that still lack a factor.
    pub unresolved: usize,
}

/// Handler for the conversions of a life cycle.
pub struct GetProcessConversionsHandler {
    repository: Arc<dyn ProcessLifeCycleRepository>,
}

impl GetProcessConversionsHandler {
    pub fn new(repository: Arc<dyn ProcessLifeCycleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetProcessConversionsQuery,
    ) -> Result<GetProcessConversionsResult, ApplicationError> {
        let life_cycle = load_life_cycle(self.repository.as_ref(), query.life_cycle_id).await?;

        let required = life_cycle.required_conversions();
        let unresolved = required.iter().filter(|c| !c.is_resolved()).count();

        let conversions = match query.filter {
            ConversionFilter::All => {
                let mut all = required;
                all.extend(life_cycle.additional_conversions());
                all
            }
            ConversionFilter::Required => required,
            ConversionFilter::Additional => life_cycle.additional_conversions(),
            ConversionFilter::Production => life_cycle.production_conversions(),
        };

        debug!(
            life_cycle_id = %query.life_cycle_id,
            filter = ?query.filter,
            count = conversions.len(),
            unresolved,
            "Conversions resolved"
        );

        Ok(GetProcessConversionsResult {
            life_cycle_id: query.life_cycle_id,
            quantitative_reference: life_cycle.quantitative_reference(),
            required_units: life_cycle.required_units(),
            conversions,
            unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProcessLifeCycleRepository;
    use crate::application::handlers::fixtures::{concrete_life_cycle, life_cycle_id};
    use crate::domain::foundation::{ProcessConfigId, ProcessDbId};
    use crate::ports::{ProcessLifeCycleRecord, RepositoryError};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct FailingRepository;

    #[async_trait]
    impl ProcessLifeCycleRepository for FailingRepository {
        async fn save(&self, _record: &ProcessLifeCycleRecord) -> Result<(), RepositoryError> {
            Err(RepositoryError::IoError("Simulated failure".to_string()))
        }

        async fn find_by_id(
            &self,
            _id: ProcessLifeCycleId,
        ) -> Result<Option<ProcessLifeCycleRecord>, RepositoryError> {
            Err(RepositoryError::IoError("Simulated failure".to_string()))
        }

        async fn list_ids(&self) -> Result<Vec<ProcessLifeCycleId>, RepositoryError> {
            Err(RepositoryError::IoError("Simulated failure".to_string()))
        }
    }

    fn handler() -> GetProcessConversionsHandler {
        let repository = InMemoryProcessLifeCycleRepository::with_records(vec![concrete_life_cycle()]);
        GetProcessConversionsHandler::new(Arc::new(repository))
    }

    async fn conversions(filter: ConversionFilter) -> Vec<(Unit, Unit)> {
        handler()
            .handle(GetProcessConversionsQuery {
                life_cycle_id: life_cycle_id(),
                filter,
            })
            .await
            .unwrap()
            .conversions
            .iter()
            .map(|c| (c.from_unit(), c.to_unit()))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn required_conversions_pair_production_units() {
        assert_eq!(
            conversions(ConversionFilter::Required).await,
            vec![(Unit::CubicMeter, Unit::Kilogram)]
        );
    }

    #[tokio::test]
    async fn additional_conversions_exclude_required_pairs() {
        assert_eq!(
            conversions(ConversionFilter::Additional).await,
            vec![
                (Unit::SquareMeter, Unit::Kilogram),
                (Unit::Meter, Unit::SquareMeter)
            ]
        );
    }

    #[tokio::test]
    async fn production_conversions_touch_required_units() {
        assert_eq!(
            conversions(ConversionFilter::Production).await,
            vec![
                (Unit::CubicMeter, Unit::Kilogram),
                (Unit::SquareMeter, Unit::Kilogram)
            ]
        );
    }

    #[tokio::test]
    async fn all_is_required_then_additional() {
        assert_eq!(conversions(ConversionFilter::All).await.len(), 3);
    }

    #[tokio::test]
    async fn reports_reference_and_unresolved_count() {
        let mut record = concrete_life_cycle();
        record.conversions.clear();
        let repository = InMemoryProcessLifeCycleRepository::with_records(vec![record]);
        let handler = GetProcessConversionsHandler::new(Arc::new(repository));

        let result = handler
            .handle(GetProcessConversionsQuery {
                life_cycle_id: life_cycle_id(),
                filter: ConversionFilter::Required,
            })
            .await
            .unwrap();

        assert_eq!(result.unresolved, 1);
        assert_eq!(result.quantitative_reference, Some(Quantity::new(1.0, Unit::CubicMeter)));
        assert_eq!(result.required_units, vec![Unit::CubicMeter, Unit::Kilogram]);
    }

    #[tokio::test]
    async fn unknown_life_cycle_is_not_found() {
        let id = ProcessLifeCycleId::new(ProcessDbId::new(1), ProcessConfigId::new(404));
        let result = handler()
            .handle(GetProcessConversionsQuery {
                life_cycle_id: id,
                filter: ConversionFilter::All,
            })
            .await;

        assert_eq!(result, Err(ApplicationError::LifeCycleNotFound(id)));
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let handler = GetProcessConversionsHandler::new(Arc::new(FailingRepository));
        let result = handler
            .handle(GetProcessConversionsQuery {
                life_cycle_id: life_cycle_id(),
                filter: ConversionFilter::All,
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::IoError(_)))
        ));
    }
}
