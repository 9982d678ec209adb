//! Tests for the host and the adapter callbacks.

use std::time::{Duration, Instant};

use a11y_widgets::prelude::*;
use a11y_widgets::reorder;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Render(String),
    Announce(String, String, Politeness),
    Activated(String, String),
    ReleaseFocus(String),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Adapter for Recorder {
    fn render(&mut self, id: WidgetId, _state: &WidgetState) {
        self.calls.push(Call::Render(id.to_string()));
    }

    fn announce(&mut self, id: WidgetId, text: &str, politeness: Politeness) {
        self.calls
            .push(Call::Announce(id.to_string(), text.to_string(), politeness));
    }

    fn activated(&mut self, id: WidgetId, item: &Item) {
        self.calls
            .push(Call::Activated(id.to_string(), item.label().to_string()));
    }

    fn release_focus(&mut self, id: WidgetId) {
        self.calls.push(Call::ReleaseFocus(id.to_string()));
    }
}

fn host() -> Host<Recorder> {
    Host::new(Recorder::default())
}

fn key(host: &mut Host<Recorder>, id: WidgetId, key: Key) {
    host.dispatch(id, Input::Key(key), Modifiers::NONE, None)
        .unwrap();
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_build_renders_once() {
    let mut host = host();
    let id = host
        .build(SortableConfig::new(), &Source::with_labels(ElementKind::List, &["a"]))
        .unwrap();
    assert_eq!(id.to_string(), "sortable_0");
    assert_eq!(host.adapter_mut().take(), vec![Call::Render("sortable_0".into())]);
}

#[test]
fn test_ids_per_kind() {
    let mut host = host();
    let list = Source::with_labels(ElementKind::List, &["a"]);
    let a = host.build(MenuConfig::new(), &list).unwrap();
    let b = host.build(MenuConfig::new(), &list).unwrap();
    let c = host
        .build(ProgressConfig::new(), &Source::new(ElementKind::Generic))
        .unwrap();

    assert_eq!(a.to_string(), "menu0");
    assert_eq!(b.to_string(), "menu1");
    assert_eq!(c.to_string(), "pb0");
    assert_eq!(host.ids(), vec![a, b, c]);
    assert_eq!(host.registry().count(WidgetKind::Menu), 2);
}

#[test]
fn test_failed_build_releases_id() {
    let mut host = host();
    let err = host
        .build(SliderConfig::new(), &Source::new(ElementKind::List))
        .unwrap_err();
    assert!(matches!(err, WidgetError::IncompatibleElement { .. }));
    assert_eq!(host.registry().count(WidgetKind::Slider), 0);
    assert!(host.adapter_mut().take().is_empty());

    let id = host
        .build(SliderConfig::new(), &Source::new(ElementKind::TextInput))
        .unwrap();
    assert_eq!(id.to_string(), "slider0");
}

#[test]
fn test_detach() {
    let mut host = host();
    let source = Source::new(ElementKind::TextInput);
    let id = host.build(SliderConfig::new(), &source).unwrap();

    host.detach(id).unwrap();
    assert!(host.state(id).is_none());
    assert!(!host.registry().contains(id));
    assert_eq!(host.detach(id), Err(WidgetError::UnknownWidget(id)));
    assert_eq!(
        host.dispatch(id, Input::Key(Key::Right), Modifiers::NONE, None),
        Err(WidgetError::UnknownWidget(id))
    );

    // The serial is free again.
    let again = host.build(SliderConfig::new(), &source).unwrap();
    assert_eq!(again, id);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_render_then_announce() {
    let mut host = host();
    let id = host
        .build(SliderConfig::new().step(5), &Source::new(ElementKind::TextInput))
        .unwrap();
    host.adapter_mut().take();

    key(&mut host, id, Key::Right);
    assert_eq!(
        host.adapter_mut().take(),
        vec![
            Call::Render("slider0".into()),
            Call::Announce("slider0".into(), "5".into(), Politeness::Polite),
        ]
    );
}

#[test]
fn test_unchanged_state_does_not_render() {
    let mut host = host();
    let id = host
        .build(SliderConfig::new(), &Source::new(ElementKind::TextInput))
        .unwrap();
    host.adapter_mut().take();

    key(&mut host, id, Key::Left);
    key(&mut host, id, Key::Char('q'));
    assert!(host.adapter_mut().take().is_empty());
}

#[test]
fn test_menu_activation_reaches_adapter() {
    let mut host = host();
    let source = Source::new(ElementKind::List)
        .item(SourceItem::new("File").child(SourceItem::new("Save")))
        .item(SourceItem::new("Help"));
    let id = host.build(MenuConfig::new(), &source).unwrap();
    host.adapter_mut().take();

    key(&mut host, id, Key::Space);
    key(&mut host, id, Key::Enter);
    let calls = host.adapter_mut().take();
    assert_eq!(
        calls.last(),
        Some(&Call::Activated("menu0".into(), "Save".into()))
    );
}

#[test]
fn test_carousel_escape_releases_focus() {
    let mut host = host();
    let source = Source::with_labels(ElementKind::Container, &["a", "b"]);
    let id = host.build(CarouselConfig::new(), &source).unwrap();
    host.adapter_mut().take();

    key(&mut host, id, Key::Escape);
    assert_eq!(
        host.adapter_mut().take(),
        vec![Call::ReleaseFocus("carousel0".into())]
    );
}

#[test]
fn test_set_value_and_reset() {
    let mut host = host();
    let id = host
        .build(ProgressConfig::new(), &Source::new(ElementKind::Generic))
        .unwrap();
    host.adapter_mut().take();

    assert!(host.set_value(id, 100).unwrap());
    assert!(!host.set_value(id, 100).unwrap());
    assert_eq!(
        host.adapter_mut().take(),
        vec![
            Call::Render("pb0".into()),
            Call::Announce("pb0".into(), "Loading complete".into(), Politeness::Assertive),
        ]
    );

    assert!(host.reset(id).unwrap());
    assert_eq!(
        host.adapter_mut().take(),
        vec![
            Call::Render("pb0".into()),
            Call::Announce("pb0".into(), "0%".into(), Politeness::Assertive),
        ]
    );
}

#[test]
fn test_apply_runs_controller() {
    let mut host = host();
    let source = Source::with_labels(ElementKind::List, &["a", "b", "c"]);
    let id = host.build(SortableConfig::new(), &source).unwrap();
    host.adapter_mut().take();

    let moved = host.apply(id, |s| reorder::move_item_by(s, 0, 1)).unwrap();
    assert!(moved);
    assert_eq!(host.adapter_mut().take(), vec![Call::Render("sortable_0".into())]);
    let labels: Vec<&str> = host
        .state(id)
        .unwrap()
        .items()
        .iter()
        .map(|i| i.label())
        .collect();
    assert_eq!(labels, vec!["b", "a", "c"]);
}

// ============================================================================
// Timers
// ============================================================================

#[test]
fn test_tick_advances_carousels() {
    let mut host = host();
    let start = Instant::now();
    let source = Source::with_labels(ElementKind::Container, &["a", "b", "c"]);
    let fast = host
        .build_at(
            CarouselConfig::new().animation_speed(Duration::from_millis(100)),
            &source,
            start,
        )
        .unwrap();
    let slow = host.build_at(CarouselConfig::new(), &source, start).unwrap();
    host.adapter_mut().take();

    assert_eq!(host.next_deadline(), Some(start + Duration::from_millis(100)));
    assert_eq!(host.tick(start + Duration::from_millis(50)), 0);
    assert_eq!(host.tick(start + Duration::from_millis(100)), 1);
    assert_eq!(host.state(fast).unwrap().selected_index(), Some(1));
    assert_eq!(host.state(slow).unwrap().selected_index(), Some(0));
    assert_eq!(host.adapter_mut().take(), vec![Call::Render("carousel0".into())]);

    assert_eq!(host.tick(start + Duration::from_millis(5000)), 2);
}

#[test]
fn test_hovered_carousel_does_not_tick() {
    let mut host = host();
    let start = Instant::now();
    let source = Source::with_labels(ElementKind::Container, &["a", "b"]);
    let id = host.build_at(CarouselConfig::new(), &source, start).unwrap();

    host.dispatch_at(id, Input::PointerEnter, Modifiers::NONE, None, start)
        .unwrap();
    assert_eq!(host.next_deadline(), None);
    assert_eq!(host.tick(start + Duration::from_secs(60)), 0);
}
