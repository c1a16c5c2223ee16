mod static_map;
pub mod surface;

pub use static_map::static_map_url;
