pub mod loading_indicator;
pub mod sections;
pub mod status_banner;
pub mod tag_list;

pub use loading_indicator::*;
pub use sections::*;
pub use status_banner::*;
pub use tag_list::*;
