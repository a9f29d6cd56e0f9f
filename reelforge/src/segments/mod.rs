pub(crate) mod assets;
pub(crate) mod composer;
pub(crate) mod content_counter;
pub(crate) mod cover_showcase;
pub(crate) mod cta;
pub(crate) mod folder_list;
pub(crate) mod fx;
pub(crate) mod video_counter;

pub use content_counter::ContentCounter;
pub use cover_showcase::CoverShowcase;
pub use cta::CtaSection;
pub use folder_list::FolderList;
pub use video_counter::VideoCounter;

#[cfg(test)]
#[path = "../../tests/unit/segments/support.rs"]
pub(crate) mod test_support;
