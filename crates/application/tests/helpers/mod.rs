#![allow(unused_imports)]

mod mock_stores;

pub use mock_stores::{MockBackupStore, MockInputResolver, MockZoneFileStore};
