//! Test utilities: a small fixture catalog and recording doubles for the
//! player's platform and telemetry seams.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde_json::Value;

use crate::content::Catalog;
use crate::domain::{Material, MaterialCategory};
use crate::player::{
  Attempt, DocumentEvents, FullscreenEvent, ListenerId, NativeAction, Orientation, Platform,
  SinkError, TelemetrySink, TimerId, Timers,
};

pub const JS_SUBJECT: &str = "subj-js";
pub const CSS_SUBJECT: &str = "subj-css";
pub const CLOSURES_TOPIC: &str = "topic-closures";
pub const PROMISES_TOPIC: &str = "topic-promises";
pub const CLOSURES_VIDEO: &str = "m-closures-video";
pub const CLOSURES_ARTICLE: &str = "m-closures-article";
pub const CLOSURES_PROBLEM: &str = "m-closures-problem";

/// Subject "JS" with a "Closures" topic holding a video, an article and a
/// problem, plus a "Promises" topic with a legacy video and a sourceless one.
/// Subject "CSS" has no topics.
pub const FIXTURE_JSON: &str = r#"{
  "_id": "curr-test",
  "title": "Test Curriculum",
  "slug": "test-curriculum",
  "description": "Fixture",
  "subjects": [
    {
      "_id": "subj-js",
      "title": "JS",
      "slug": "js",
      "score": 4.5,
      "topics": [
        {
          "_id": "topic-closures",
          "title": "Closures",
          "slug": "closures",
          "order": 1,
          "subtopics": [
            {
              "_id": "st-closures-1",
              "title": "Module 1: Closures",
              "materials": [
                {
                  "_id": "m-closures-video",
                  "title": "Closures Explained",
                  "slug": "closures-video",
                  "category": "video",
                  "difficulty": "medium",
                  "video": [{ "vimeoId": "76979871" }]
                },
                {
                  "_id": "m-closures-article",
                  "title": "Closures in Depth",
                  "slug": "closures-article",
                  "category": "article",
                  "difficulty": "easy",
                  "content": "A closure is a function bundled with its lexical environment.",
                  "reactions": { "fire": 3, "heart": 2, "thumbsUp": 10, "thumbsDown": 1 }
                },
                {
                  "_id": "m-closures-problem",
                  "title": "Build a Counter",
                  "slug": "closures-problem",
                  "category": "problem",
                  "difficulty": "hard",
                  "companies": ["Amazon", "Google"]
                }
              ]
            }
          ]
        },
        {
          "_id": "topic-promises",
          "title": "Promises",
          "slug": "promises",
          "order": 2,
          "subtopics": [
            {
              "_id": "st-promises-1",
              "title": "Module 1: Promises",
              "materials": [
                {
                  "_id": "m-promises-legacy",
                  "title": "Promises Walkthrough",
                  "slug": "promises-legacy",
                  "category": "video",
                  "path": "https://www.youtube.com/watch?v=PkZNo7MFNFg"
                },
                {
                  "_id": "m-promises-missing",
                  "title": "Promises Recording",
                  "slug": "promises-missing",
                  "category": "video"
                }
              ]
            }
          ]
        }
      ]
    },
    {
      "_id": "subj-css",
      "title": "CSS",
      "slug": "css",
      "topics": []
    }
  ]
}"#;

pub fn fixture_catalog() -> Catalog {
  Catalog::from_json_str(FIXTURE_JSON).expect("fixture catalog is valid")
}

/// Bare material of the given category
pub fn material(id: &str, category: MaterialCategory) -> Material {
  Material {
    id: id.to_string(),
    title: id.to_string(),
    slug: id.to_string(),
    category,
    difficulty: None,
    description: None,
    content: None,
    solution: None,
    video: Vec::new(),
    path: None,
    companies: Vec::new(),
    reactions: None,
  }
}

/// Calls observed by [`FakeHost`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
  FullscreenRequested,
  FullscreenResolved(Attempt),
  OrientationLockRequested(Orientation),
  OrientationLockResolved(Attempt),
  OrientationUnlocked,
  TimerScheduled(TimerId),
  TimerCancelled(TimerId),
  ListenerAdded(FullscreenEvent),
  ListenerRemoved(ListenerId),
}

/// Recording platform double.
///
/// Async requests yield once before settling so ordering against the
/// resolution is observable.
pub struct FakeHost {
  calls: RefCell<Vec<HostCall>>,
  fullscreen_result: Attempt,
  orientation_result: Attempt,
  unlock_result: Attempt,
  timers: RefCell<BTreeSet<TimerId>>,
  listeners: RefCell<BTreeMap<ListenerId, FullscreenEvent>>,
  next_id: Cell<u64>,
}

impl Default for FakeHost {
  fn default() -> Self {
    Self::new()
  }
}

impl FakeHost {
  pub fn new() -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      fullscreen_result: Attempt::Ok,
      orientation_result: Attempt::Ok,
      unlock_result: Attempt::Ok,
      timers: RefCell::new(BTreeSet::new()),
      listeners: RefCell::new(BTreeMap::new()),
      next_id: Cell::new(1),
    }
  }

  pub fn with_fullscreen(mut self, result: Attempt) -> Self {
    self.fullscreen_result = result;
    self
  }

  pub fn with_orientation(mut self, result: Attempt) -> Self {
    self.orientation_result = result;
    self
  }

  pub fn with_unlock(mut self, result: Attempt) -> Self {
    self.unlock_result = result;
    self
  }

  fn next(&self) -> u64 {
    let id = self.next_id.get();
    self.next_id.set(id + 1);
    id
  }

  fn record(&self, call: HostCall) {
    self.calls.borrow_mut().push(call);
  }

  pub fn calls(&self) -> Vec<HostCall> {
    self.calls.borrow().clone()
  }

  pub fn pending_timers(&self) -> Vec<TimerId> {
    self.timers.borrow().iter().copied().collect()
  }

  /// Total timers ever scheduled
  pub fn scheduled_count(&self) -> usize {
    self
      .calls
      .borrow()
      .iter()
      .filter(|c| matches!(c, HostCall::TimerScheduled(_)))
      .count()
  }

  /// Simulate a timer elapsing; the caller then delivers the id to the controller
  pub fn fire(&self, id: TimerId) {
    self.timers.borrow_mut().remove(&id);
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.borrow().len()
  }

  pub fn listener_events(&self) -> Vec<FullscreenEvent> {
    self.listeners.borrow().values().copied().collect()
  }
}

impl Platform for FakeHost {
  async fn request_fullscreen(&self) -> Attempt {
    self.record(HostCall::FullscreenRequested);
    tokio::task::yield_now().await;
    let result = self.fullscreen_result.clone();
    self.record(HostCall::FullscreenResolved(result.clone()));
    result
  }

  async fn lock_orientation(&self, orientation: Orientation) -> Attempt {
    self.record(HostCall::OrientationLockRequested(orientation));
    tokio::task::yield_now().await;
    let result = self.orientation_result.clone();
    self.record(HostCall::OrientationLockResolved(result.clone()));
    result
  }

  fn unlock_orientation(&self) -> Attempt {
    self.record(HostCall::OrientationUnlocked);
    self.unlock_result.clone()
  }
}

impl Timers for FakeHost {
  fn schedule(&self, _delay: Duration) -> TimerId {
    let id = TimerId(self.next());
    self.timers.borrow_mut().insert(id);
    self.record(HostCall::TimerScheduled(id));
    id
  }

  fn cancel(&self, id: TimerId) {
    self.timers.borrow_mut().remove(&id);
    self.record(HostCall::TimerCancelled(id));
  }
}

impl DocumentEvents for FakeHost {
  fn add_listener(&self, event: FullscreenEvent) -> ListenerId {
    let id = ListenerId(self.next());
    self.listeners.borrow_mut().insert(id, event);
    self.record(HostCall::ListenerAdded(event));
    id
  }

  fn remove_listener(&self, id: ListenerId) {
    self.listeners.borrow_mut().remove(&id);
    self.record(HostCall::ListenerRemoved(id));
  }
}

/// Telemetry sink that records `ACTION:payload` strings
#[derive(Default)]
pub struct RecordingSink {
  actions: RefCell<Vec<String>>,
  errors: RefCell<Vec<Value>>,
  fail: bool,
}

impl RecordingSink {
  /// A sink whose every call fails
  pub fn failing() -> Self {
    Self {
      fail: true,
      ..Self::default()
    }
  }

  pub fn actions(&self) -> Vec<String> {
    self.actions.borrow().clone()
  }

  pub fn errors(&self) -> Vec<Value> {
    self.errors.borrow().clone()
  }
}

impl TelemetrySink for RecordingSink {
  fn dispatch(&self, action: NativeAction, payload: &Value) -> Result<(), SinkError> {
    if self.fail {
      return Err(SinkError("bridge unavailable".to_string()));
    }
    self
      .actions
      .borrow_mut()
      .push(format!("{}:{}", action.as_str(), payload));
    Ok(())
  }

  fn error(&self, payload: &Value) -> Result<(), SinkError> {
    if self.fail {
      return Err(SinkError("bridge unavailable".to_string()));
    }
    self.errors.borrow_mut().push(payload.clone());
    Ok(())
  }
}
