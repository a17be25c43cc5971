//! UI Components
//!
//! Carousel, reminder card and the tag bar drawn beneath it.

mod picker_overlay;
mod profile_avatar;
mod profile_carousel;
mod reminder_card;
mod tag_bar;
mod tag_chip;

pub use picker_overlay::PickerOverlay;
pub use profile_avatar::ProfileAvatar;
pub use profile_carousel::ProfileCarousel;
pub use reminder_card::ReminderCard;
pub use tag_bar::TagBarView;
pub use tag_chip::TagChip;
