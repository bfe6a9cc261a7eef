//! Filesystem infrastructure
//!
//! Reads user-selected files into inline attachments.

pub mod attachment;

pub use attachment::{infer_mime_type, load_attachment, strip_data_url, LoadedFile};
