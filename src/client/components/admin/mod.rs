pub mod faq_form;
pub mod faq_list;

pub use faq_form::FaqFormCard;
pub use faq_list::FaqListCard;
