use crate::gui::{
    booking_modal::BookingModal,
    guide_modal::GuideModal,
    info_modal::InfoModal,
};

pub struct Modals {
    pub booking: BookingModal,
    pub guide: GuideModal,
    pub info: InfoModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            booking: BookingModal::new(),
            guide: GuideModal::new(),
            info: InfoModal::new(),
        }
    }
}
