use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use charter_core::{AdvisoryGateway, Plan, Result, StepId, Workshop, WorkshopBuilder};

/// Gateway that replays a scripted sequence of outcomes and counts calls
/// through a shared counter the test keeps a handle to.
pub struct ScriptedGateway {
    script: Mutex<Vec<Result<String>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<Result<String>>) -> Self {
        Self::with_counter(script, Arc::new(AtomicUsize::new(0)))
    }

    pub fn with_counter(script: Vec<Result<String>>, calls: Arc<AtomicUsize>) -> Self {
        Self {
            script: Mutex::new(script),
            calls,
        }
    }

    fn next(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().expect("script lock");
        if script.is_empty() {
            Ok("scripted advisory".to_string())
        } else {
            script.remove(0)
        }
    }
}

#[async_trait]
impl AdvisoryGateway for ScriptedGateway {
    async fn step_advisory(&self, _step: StepId, _plan: &Plan) -> Result<String> {
        self.next()
    }

    async fn final_integration(&self, _plan: &Plan) -> Result<String> {
        self.next()
    }
}

/// Helper to create a workshop with a scripted gateway.
pub fn scripted_workshop(script: Vec<Result<String>>) -> Workshop {
    WorkshopBuilder::new()
        .with_gateway(Box::new(ScriptedGateway::new(script)))
        .build()
}

/// Helper to create a workshop whose gateway calls are observable.
pub fn counted_workshop(
    script: Vec<Result<String>>,
) -> (Workshop, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let workshop = WorkshopBuilder::new()
        .with_gateway(Box::new(ScriptedGateway::with_counter(
            script,
            Arc::clone(&calls),
        )))
        .build();
    (workshop, calls)
}
