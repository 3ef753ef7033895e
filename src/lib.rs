pub mod error;
pub mod fields;
pub mod item;
pub mod item_catalog;
pub mod layout;
pub mod pokemon;
pub mod save;
pub mod section;
pub mod sections;
pub mod security;
pub mod text;

pub use error::{Error, Result};
pub use item::{Item, ItemPocket};
pub use layout::GameVariant;
pub use pokemon::Pokemon;
pub use save::SaveFile;
pub use section::LogicalSave;
pub use security::SecurityContext;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrainerId {
    pub public_id: u16,
    pub secret_id: u16,
}

impl From<u32> for TrainerId {
    fn from(raw: u32) -> Self {
        TrainerId {
            public_id: (raw & 0xffff) as u16,
            secret_id: (raw >> 16) as u16,
        }
    }
}

impl From<TrainerId> for u32 {
    fn from(id: TrainerId) -> u32 {
        (u32::from(id.secret_id) << 16) | u32::from(id.public_id)
    }
}
