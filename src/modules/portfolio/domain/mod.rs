pub mod appearance;
pub mod cv_files;
pub mod defaults;
pub mod entities;
pub mod ids;
pub mod patch;
