#![cfg(feature = "tracing")]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;
use twin_graph::Graph;

/// One captured event: its message and every other field, rendered with `Debug`.
#[derive(Debug, Default)]
struct Recorded {
    message: String,
    fields: BTreeMap<&'static str, String>,
}

impl Recorded {
    fn fields(&self) -> Vec<(&str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }
}

impl Visit for Recorded {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.message = text;
        } else {
            self.fields.insert(field.name(), text);
        }
    }
}

#[derive(Clone, Default)]
struct Collector {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl<S: Subscriber> Layer<S> for Collector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != "twin_graph" {
            return;
        }
        let mut recorded = Recorded::default();
        event.record(&mut recorded);
        self.events.lock().unwrap().push(recorded);
    }
}

fn capture(f: impl FnOnce()) -> Vec<Recorded> {
    let collector = Collector::default();
    let subscriber = Registry::default().with(collector.clone());
    tracing::subscriber::with_default(subscriber, f);
    let mut events = collector.events.lock().unwrap();
    std::mem::take(&mut *events)
}

#[test]
fn test_each_mutation_emits_one_event() {
    let events = capture(|| {
        let mut g: Graph<&str> = Graph::new();
        g.extend(["a", "b", "c"]);
        g.add_edge(&"a", &"b", 1.0).unwrap();
        g.add_edge(&"b", &"c", 2.0).unwrap();
        let copy = g.deep_copy();
        g.remove_edge(&"a", &"b").unwrap();
        g.remove_vertex(&"b").unwrap();
        g.clear();
        assert_eq!(copy.edge_count(), 2);
    });

    let seen: Vec<_> = events
        .iter()
        .map(|e| (e.message.as_str(), e.fields()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("vertex added", vec![("vertex", "0")]),
            ("vertex added", vec![("vertex", "1")]),
            ("vertex added", vec![("vertex", "2")]),
            ("edge added", vec![("edges", "1")]),
            ("edge added", vec![("edges", "2")]),
            ("graph deep-copied", vec![("edges", "2"), ("vertices", "3")]),
            ("edge removed", vec![("edges", "1")]),
            ("vertex removed", vec![("degree", "1"), ("vertices", "2")]),
            ("graph cleared", vec![]),
        ]
    );

    // Rejected mutations leave no trace.
    let events = capture(|| {
        let mut g: Graph<u8> = Graph::new();
        g.add_vertex(1).unwrap();
        assert!(g.add_vertex(1).is_err());
        assert!(g.add_edge(&1, &1, 1.0).is_err());
        assert!(g.add_edge(&1, &2, 1.0).is_err());
        assert!(g.remove_edge(&1, &2).is_err());
        assert!(g.remove_vertex(&2).is_err());
    });
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "vertex added");
}
