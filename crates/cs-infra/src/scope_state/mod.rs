//! Scope state persistence: the bincode blob format and where blobs live.
//! 作用域状态的编码格式与存储位置

mod codec;
mod file_source;

pub use codec::{decode_scope_state, encode_scope_state, BincodeScopeStateDecoder, ScopeBlobError};
pub use file_source::FileScopeStateSource;
