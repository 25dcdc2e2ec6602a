//! ## linkstack-telemetry::metrics
//! **Prometheus counters for stack traffic**

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

#[derive(Debug, Clone)]
pub struct StackMetrics {
    pub registry: Registry,
    pub pushes: IntCounter,
    pub pops: IntCounter,
    pub rejected_pushes: IntCounter,
}

impl StackMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let pushes = IntCounter::new("linkstack_pushes_total", "Elements pushed")?;
        let pops = IntCounter::new("linkstack_pops_total", "Elements popped")?;
        let rejected_pushes = IntCounter::new(
            "linkstack_rejected_pushes_total",
            "Pushes rejected by the stack",
        )?;

        registry.register(Box::new(pushes.clone()))?;
        registry.register(Box::new(pops.clone()))?;
        registry.register(Box::new(rejected_pushes.clone()))?;

        Ok(Self {
            registry,
            pushes,
            pops,
            rejected_pushes,
        })
    }

    pub fn inc_pushes(&self) {
        self.pushes.inc();
    }

    pub fn inc_pops(&self) {
        self.pops.inc();
    }

    pub fn inc_rejected_pushes(&self) {
        self.rejected_pushes.inc();
    }

    /// Renders every registered counter in the text exposition format.
    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
