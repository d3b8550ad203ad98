//! Scoped document-level fullscreen listeners.

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenEvent {
  Change,
  /// Safari's prefixed variant
  WebkitChange,
}

impl FullscreenEvent {
  pub const ALL: [FullscreenEvent; 2] = [Self::Change, Self::WebkitChange];

  pub fn name(&self) -> &'static str {
    match self {
      Self::Change => "fullscreenchange",
      Self::WebkitChange => "webkitfullscreenchange",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

pub trait DocumentEvents {
  fn add_listener(&self, event: FullscreenEvent) -> ListenerId;
  fn remove_listener(&self, id: ListenerId);
}

/// Holds both fullscreen-change listeners; dropping it deregisters them.
pub struct FullscreenSubscription<D: DocumentEvents> {
  document: Rc<D>,
  ids: Vec<ListenerId>,
}

impl<D: DocumentEvents> FullscreenSubscription<D> {
  pub fn subscribe(document: Rc<D>) -> Self {
    let ids = FullscreenEvent::ALL
      .iter()
      .map(|event| document.add_listener(*event))
      .collect();
    Self { document, ids }
  }

  pub fn listener_ids(&self) -> &[ListenerId] {
    &self.ids
  }
}

impl<D: DocumentEvents> Drop for FullscreenSubscription<D> {
  fn drop(&mut self) {
    for id in self.ids.drain(..) {
      self.document.remove_listener(id);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::FakeHost;

  #[test]
  fn test_subscribe_registers_both_variants() {
    let host = Rc::new(FakeHost::new());
    let sub = FullscreenSubscription::subscribe(host.clone());
    assert_eq!(sub.listener_ids().len(), 2);
    assert_eq!(host.listener_count(), 2);
    assert_eq!(
      host.listener_events(),
      vec![FullscreenEvent::Change, FullscreenEvent::WebkitChange]
    );
  }

  #[test]
  fn test_drop_deregisters() {
    let host = Rc::new(FakeHost::new());
    {
      let _sub = FullscreenSubscription::subscribe(host.clone());
      assert_eq!(host.listener_count(), 2);
    }
    assert_eq!(host.listener_count(), 0);
  }

  #[test]
  fn test_repeated_mounts_do_not_leak() {
    let host = Rc::new(FakeHost::new());
    for _ in 0..5 {
      let _sub = FullscreenSubscription::subscribe(host.clone());
    }
    assert_eq!(host.listener_count(), 0);
  }

  #[test]
  fn test_event_names() {
    assert_eq!(FullscreenEvent::Change.name(), "fullscreenchange");
    assert_eq!(FullscreenEvent::WebkitChange.name(), "webkitfullscreenchange");
  }
}
