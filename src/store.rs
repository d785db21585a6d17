//! Screen State Stores
//!
//! Each list screen creates its own store when it mounts and provides it to
//! its children; the store is dropped with the screen.

use bucket_core::{AppConfig, BucketBoard, TravelChecklist};
use leptos::prelude::*;
use reactive_stores::Store;

/// Bucket-list screen state
#[derive(Clone, Debug, Store)]
pub struct BucketScreenState {
    pub board: BucketBoard,
}

impl BucketScreenState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            board: BucketBoard::from_config(config),
        }
    }
}

/// Travel checklist screen state
#[derive(Clone, Debug, Default, Store)]
pub struct TravelScreenState {
    pub checklist: TravelChecklist,
}

pub type BucketStore = Store<BucketScreenState>;
pub type TravelStore = Store<TravelScreenState>;

/// Get the bucket-list store from context
pub fn use_bucket_store() -> BucketStore {
    expect_context::<BucketStore>()
}

/// Get the travel store from context
pub fn use_travel_store() -> TravelStore {
    expect_context::<TravelStore>()
}
