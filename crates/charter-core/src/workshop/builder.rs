//! Builder for creating and configuring Workshop instances.

use super::Workshop;
use crate::gateway::{AdvisoryGateway, GeminiGateway};
use crate::models::StepRegistry;

/// Builder for creating and configuring [`Workshop`] instances.
#[derive(Default)]
pub struct WorkshopBuilder {
    registry: Option<StepRegistry>,
    gateway: Option<Box<dyn AdvisoryGateway>>,
}

impl WorkshopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom step sequence.
    ///
    /// If not specified, the canonical eight-step registry is used.
    pub fn with_registry(mut self, registry: StepRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the advisory gateway implementation.
    ///
    /// If not specified, a [`GeminiGateway`] configured from the environment
    /// is used; a missing credential surfaces on first use, never here.
    pub fn with_gateway(mut self, gateway: Box<dyn AdvisoryGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Builds the configured workshop instance.
    pub fn build(self) -> Workshop {
        let registry = self.registry.unwrap_or_else(StepRegistry::standard);
        let gateway = self
            .gateway
            .unwrap_or_else(|| Box::new(GeminiGateway::from_env()));
        Workshop::new(registry, gateway)
    }
}
