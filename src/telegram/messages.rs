//! User-facing reply texts

pub const WELCOME: &str = "🚀 Welcome to Video Downloader Bot!\n\
    Send me a video link and I'll download it for you!";

pub const INVALID_URL: &str = "❌ Please send a valid URL starting with http:// or https://";

pub const PROCESSING: &str = "⏳ Processing your request...";

pub const NO_LINK_FOUND: &str = "❌ Could not find a download link. Please try another URL.";

pub const DOWNLOADING: &str = "⬇️ Downloading video... Please wait.";

pub const DOWNLOAD_ERROR: &str = "❌ Error downloading video.";

pub const UPLOADING: &str = "📤 Uploading video...";

pub const UNEXPECTED_ERROR: &str = "❌ An unexpected error occurred. Please try again later.";
