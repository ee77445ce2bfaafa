#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use cdnsign_core::*;

#[cfg(feature = "media-cdn")]
pub mod media_cdn {
    pub use cdnsign_media_cdn::*;
}

#[cfg(feature = "cloud-cdn")]
pub mod cloud_cdn {
    pub use cdnsign_cloud_cdn::*;
}
