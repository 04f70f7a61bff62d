#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use yidun_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::DefaultContext;

#[cfg(feature = "audio")]
pub mod audio {
    pub use yidun_audio::*;
}

#[cfg(feature = "crawler")]
pub mod crawler {
    pub use yidun_crawler::*;
}

#[cfg(feature = "file-solution")]
pub mod file_solution {
    pub use yidun_file_solution::*;
}

#[cfg(feature = "image")]
pub mod image {
    pub use yidun_image::*;
}

#[cfg(feature = "live-video-solution")]
pub mod live_video_solution {
    pub use yidun_live_video_solution::*;
}

#[cfg(feature = "media-solution")]
pub mod media_solution {
    pub use yidun_media_solution::*;
}

#[cfg(feature = "report")]
pub mod report {
    pub use yidun_report::*;
}

#[cfg(feature = "text")]
pub mod text {
    pub use yidun_text::*;
}

#[cfg(feature = "video")]
pub mod video {
    pub use yidun_video::*;
}

#[cfg(feature = "video-solution")]
pub mod video_solution {
    pub use yidun_video_solution::*;
}
