pub mod icons;
pub mod lookup;
pub mod modal_frame;
