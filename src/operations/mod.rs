pub mod align;
pub mod measure;
pub mod view;
