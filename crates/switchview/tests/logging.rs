//! Structured log events emitted by the switch.

use std::sync::{Arc, Mutex};
use switchview::{PointerId, SwitchConfig, SwitchView};
use tracing_subscriber::layer::SubscriberExt;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn message(&self) -> Option<&str> {
        self.field("message")
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

fn find<'a>(events: &'a [CapturedEvent], message: &str) -> Option<&'a CapturedEvent> {
    events.iter().find(|e| e.message() == Some(message))
}

#[test]
fn commit_is_logged_with_outcome() {
    let events = with_capture(|| {
        let mut switch = SwitchView::new(SwitchConfig::default()).unwrap();
        switch.on_pointer_down(PointerId(0), 35.0, 0);
        switch.on_pointer_up(PointerId(0), 35.0, 40);
    });

    let commit = find(&events, "gesture committed").expect("commit event");
    assert_eq!(commit.level, tracing::Level::DEBUG);
    assert_eq!(commit.field("kind"), Some("Tap"));
    assert_eq!(commit.field("checked"), Some("false"));
    assert_eq!(commit.field("changed"), Some("true"));
}

#[test]
fn rejected_layout_is_a_warning() {
    let events = with_capture(|| {
        let mut switch = SwitchView::new(SwitchConfig::default()).unwrap();
        assert!(switch.on_size_changed(f32::NAN, 10.0).is_err());
    });

    let warning = find(&events, "rejected layout size").expect("warning event");
    assert_eq!(warning.level, tracing::Level::WARN);
    assert!(warning.field("error").is_some_and(|e| e.contains("view width")));
}

#[test]
fn animation_end_and_interruption_are_logged() {
    let events = with_capture(|| {
        let mut switch = SwitchView::new(SwitchConfig::default()).unwrap();
        switch.toggle();
        switch.tick(std::time::Duration::from_millis(16));
        switch.on_pointer_down(PointerId(0), 40.0, 100);
        switch.toggle();
        while switch.tick(std::time::Duration::from_millis(16)) {}
    });

    assert!(find(&events, "animation interrupted by drag").is_some());
    assert!(find(&events, "drag abandoned by programmatic change").is_some());
    assert!(find(&events, "animation finished").is_some());
}

#[test]
fn non_finite_coordinate_is_traced() {
    let events = with_capture(|| {
        let mut switch = SwitchView::new(SwitchConfig::default()).unwrap();
        switch.on_pointer_down(PointerId(0), 35.0, 0);
        switch.on_pointer_move(PointerId(0), f32::NAN);
    });

    let ignored = find(&events, "non-finite coordinate ignored").expect("trace event");
    assert_eq!(ignored.level, tracing::Level::TRACE);
    assert_eq!(ignored.field("pointer"), Some("#0"));
}
