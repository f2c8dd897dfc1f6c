//! Mock implementations of the relay seams
//!
//! Recording stand-ins for the chat, the link resolver and the fetcher, so
//! the relay can be driven without Telegram or a download site.

pub mod mock_chat;
pub mod mock_sources;

#[allow(unused_imports)]
pub use mock_chat::{RecordingChat, Sent};
#[allow(unused_imports)]
pub use mock_sources::{PendingResolver, StubFetcher, StubResolver};
