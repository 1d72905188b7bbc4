pub mod count;
pub mod export;
pub mod guidance;
pub mod record;
pub mod sensors;
pub mod status;
