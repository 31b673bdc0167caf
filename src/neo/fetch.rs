//! Background metadata fetching.
//!
//! Each lookup runs on its own worker thread and reports back over a channel
//! that is drained once per frame. Results are tagged with the id of the object
//! that requested them; a result for anything other than the current selection
//! is dropped, so a slow response can never overwrite a newer selection.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};

use bevy::prelude::*;

use super::{NeoClient, NeoError, NeoResult, ObjectDescription, UNKNOWN_DISCOVERY};
use crate::catalog::get_object;
use crate::config::OrreryConfig;
use crate::selection::{ObjectSelected, SelectedObject, SelectionCleared};

/// Something that can describe an object by its NeoWs id.
pub trait DescriptionSource: Send + Sync + 'static {
    fn describe(&self, neo_id: &str) -> NeoResult<ObjectDescription>;
}

/// Outcome of a single lookup, tagged with the requesting object.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub object_id: u32,
    pub outcome: Result<ObjectDescription, NeoError>,
}

/// Resource owning the description source and the result channel.
#[derive(Resource)]
pub struct MetadataFetcher {
    source: Arc<dyn DescriptionSource>,
    sender: Sender<FetchResult>,
    receiver: Mutex<Receiver<FetchResult>>,
}

impl MetadataFetcher {
    pub fn new(source: Arc<dyn DescriptionSource>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            source,
            sender,
            receiver: Mutex::new(receiver),
        }
    }

    /// Start a lookup of `neo_id` on behalf of `object_id`.
    pub fn spawn(&self, object_id: u32, neo_id: &str) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let neo_id = neo_id.to_string();

        let spawned = std::thread::Builder::new()
            .name(format!("neo-fetch-{object_id}"))
            .spawn(move || {
                let outcome = source.describe(&neo_id);
                // The receiver only disappears on shutdown.
                let _ = sender.send(FetchResult { object_id, outcome });
            });

        if let Err(err) = spawned {
            warn!("Could not start metadata fetch for object {}: {}", object_id, err);
        }
    }

    /// Drain every result that has arrived so far.
    pub fn drain(&self) -> Vec<FetchResult> {
        // A poisoned lock still guards a usable receiver.
        let receiver = self
            .receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut results = Vec::new();
        loop {
            match receiver.try_recv() {
                Ok(result) => results.push(result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        results
    }
}

/// Info panel contents for the selected object.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    /// Object whose lookup is in flight.
    pub pending: Option<u32>,
    /// Description currently shown, with the object it belongs to.
    pub current: Option<(u32, ObjectDescription)>,
}

impl ObjectInfo {
    /// Mark a lookup as started for `object_id`.
    pub fn begin(&mut self, object_id: u32) {
        self.pending = Some(object_id);
    }

    /// Show `description` for `object_id` immediately.
    pub fn show(&mut self, object_id: u32, description: ObjectDescription) {
        self.pending = None;
        self.current = Some((object_id, description));
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.current = None;
    }

    /// Description for `object_id`, if one is shown.
    pub fn description_for(&self, object_id: u32) -> Option<&ObjectDescription> {
        self.current
            .as_ref()
            .filter(|(id, _)| *id == object_id)
            .map(|(_, d)| d)
    }

    pub fn is_loading(&self, object_id: u32) -> bool {
        self.pending == Some(object_id)
    }

    /// Apply a fetch result. Returns `true` if the panel changed.
    ///
    /// Results for anything but `selected` are discarded. Failures leave the
    /// shown description untouched.
    pub fn accept(&mut self, result: FetchResult, selected: Option<u32>) -> bool {
        if selected != Some(result.object_id) {
            debug!("Discarding stale metadata for object {}", result.object_id);
            return false;
        }

        if self.pending == Some(result.object_id) {
            self.pending = None;
        }

        match result.outcome {
            Ok(description) => {
                self.current = Some((result.object_id, description));
                true
            }
            Err(err) => {
                warn!("Metadata fetch for object {} failed: {}", result.object_id, err);
                false
            }
        }
    }
}

/// Plugin wiring metadata requests to selection changes.
pub struct MetadataPlugin;

impl Plugin for MetadataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObjectInfo>()
            .add_systems(Startup, setup_fetcher)
            .add_systems(Update, (request_metadata, poll_metadata).chain());
    }
}

fn setup_fetcher(mut commands: Commands, config: Res<OrreryConfig>) {
    if config.uses_demo_key() {
        info!("Using the NeoWs demo key; set {} for a higher rate limit", crate::config::API_KEY_ENV);
    }
    commands.insert_resource(MetadataFetcher::new(Arc::new(NeoClient::from_config(&config))));
}

/// Start lookups for newly selected objects.
pub fn request_metadata(
    mut selections: MessageReader<ObjectSelected>,
    mut cleared: MessageReader<SelectionCleared>,
    fetcher: Option<Res<MetadataFetcher>>,
    mut info: ResMut<ObjectInfo>,
) {
    if cleared.read().last().is_some() {
        info.clear();
    }

    let Some(selected) = selections.read().last().copied() else {
        return;
    };
    let Some(object) = get_object(selected.id) else {
        return;
    };

    match (object.neo_id, fetcher) {
        (Some(neo_id), Some(fetcher)) => {
            info.begin(object.id);
            fetcher.spawn(object.id, neo_id);
            debug!("Fetching metadata for {} ({})", object.name, neo_id);
        }
        _ => info.show(
            object.id,
            ObjectDescription {
                name: object.name.to_string(),
                discovery: UNKNOWN_DISCOVERY.to_string(),
                description: object.summary.to_string(),
            },
        ),
    }
}

/// Apply finished lookups to the info panel.
pub fn poll_metadata(
    fetcher: Option<Res<MetadataFetcher>>,
    selected: Res<SelectedObject>,
    mut info: ResMut<ObjectInfo>,
) {
    let Some(fetcher) = fetcher else {
        return;
    };
    for result in fetcher.drain() {
        info.accept(result, selected.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description(name: &str) -> ObjectDescription {
        ObjectDescription {
            name: name.to_string(),
            discovery: "2000-01-01".to_string(),
            description: "test".to_string(),
        }
    }

    #[test]
    fn test_accepts_current_selection() {
        let mut info = ObjectInfo::default();
        info.begin(4);
        let changed = info.accept(
            FetchResult {
                object_id: 4,
                outcome: Ok(description("Icarus")),
            },
            Some(4),
        );
        assert!(changed);
        assert!(!info.is_loading(4));
        assert_eq!(info.description_for(4).map(|d| d.name.as_str()), Some("Icarus"));
    }

    #[test]
    fn test_discards_stale_result() {
        let mut info = ObjectInfo::default();
        info.begin(4);
        info.begin(5);

        let changed = info.accept(
            FetchResult {
                object_id: 4,
                outcome: Ok(description("Icarus")),
            },
            Some(5),
        );
        assert!(!changed);
        assert!(info.current.is_none());
        assert!(info.is_loading(5));
    }

    #[test]
    fn test_failure_keeps_previous_description() {
        let mut info = ObjectInfo::default();
        info.show(5, description("Toro"));
        info.begin(5);

        let changed = info.accept(
            FetchResult {
                object_id: 5,
                outcome: Err(NeoError::Status(429)),
            },
            Some(5),
        );
        assert!(!changed);
        assert!(!info.is_loading(5));
        assert_eq!(info.description_for(5).map(|d| d.name.as_str()), Some("Toro"));
    }

    struct Echo;

    impl DescriptionSource for Echo {
        fn describe(&self, neo_id: &str) -> NeoResult<ObjectDescription> {
            Ok(description(neo_id))
        }
    }

    #[test]
    fn test_fetcher_round_trip() {
        let fetcher = MetadataFetcher::new(Arc::new(Echo));
        fetcher.spawn(7, "abc");

        let mut results = Vec::new();
        for _ in 0..200 {
            results.extend(fetcher.drain());
            if !results.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].object_id, 7);
        assert_eq!(results[0].outcome.as_ref().map(|d| d.name.as_str()), Ok("abc"));
    }

    #[test]
    fn test_drain_survives_poisoned_lock() {
        let fetcher = MetadataFetcher::new(Arc::new(Echo));
        std::thread::scope(|s| {
            let handle = s.spawn(|| {
                let _guard = fetcher.receiver.lock();
                panic!("worker died holding the receiver");
            });
            assert!(handle.join().is_err());
        });
        assert!(fetcher.receiver.is_poisoned());

        fetcher.spawn(9, "late");
        let mut results = Vec::new();
        for _ in 0..200 {
            results.extend(fetcher.drain());
            if !results.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].object_id, 9);
    }
}
