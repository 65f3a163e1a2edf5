use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Layer;

use super::*;

type Fields = BTreeMap<&'static str, String>;

/// Records the fields of every event it sees.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<Fields>>>);

struct FieldRecorder<'a>(&'a mut Fields);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldRecorder(&mut fields));
        self.0.lock().push(fields);
    }
}

impl EventLog {
    fn built_nodes(&self) -> Vec<Fields> {
        self.0
            .lock()
            .iter()
            .filter(|fields| fields.get("message").map(String::as_str) == Some("built node"))
            .cloned()
            .collect()
    }
}

#[test]
fn test_construction_emits_trace_event() {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    let block = tracing::subscriber::with_default(subscriber, || {
        let mut ctx = AstContext::new();
        factory_for(ApiGeneration::Gen6).compound_stmt(&mut ctx, &[])
    });

    let events = log.built_nodes();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["kind"], "CompoundStmt");
    assert_eq!(event["generation"], "gen6");
    assert_eq!(event["primitive"], "compound_create");
    assert_eq!(event["id"], format!("{block:?}"));
}

#[test]
fn test_free_functions_trace_build_generation() {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    tracing::subscriber::with_default(subscriber, || {
        let mut ctx = AstContext::new();
        create_return_stmt(&mut ctx, None);
    });

    let events = log.built_nodes();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["kind"], "ReturnStmt");
    assert_eq!(events[0]["generation"], ApiGeneration::BUILD.to_string());
    assert_eq!(events[0]["primitive"], factory().primitive(NodeKind::Return));
}

#[test]
fn test_init_tracing_is_idempotent_and_keeps_scoped_subscriber() {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    tracing::subscriber::with_default(subscriber, || {
        init_tracing();
        init_tracing();
        let mut ctx = AstContext::new();
        create_compound_stmt(&mut ctx, &[]);
    });
    assert_eq!(log.built_nodes().len(), 1);
}
