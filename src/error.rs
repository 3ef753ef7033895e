use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("save image is {len} bytes, at least {required} are required")]
    TruncatedImage { len: usize, required: usize },
    #[error("no valid copy of section {0} at the current save generation")]
    NoValidGeneration(u16),
    #[error("section {id} has more than one valid copy at generation {generation}")]
    ConflictingSections { id: u16, generation: u32 },
    #[error("PC storage is incomplete, section {missing} is unavailable")]
    IncompleteSection { missing: u16 },
    #[error("no decoder is registered for section {0}")]
    UnknownSection(u16),
    #[error("unknown item id {0}")]
    UnknownItemId(u16),
    #[error("box {0} does not exist, boxes are numbered 1 to 14")]
    InvalidBoxNumber(u8),
    #[error("invalid {kind} value: 0x{value:x}")]
    UnknownEnumValue { kind: &'static str, value: u32 },
    #[error("field at 0x{offset:x} ({len} bytes) is outside a {size} byte buffer")]
    FieldOutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
