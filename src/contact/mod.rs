pub mod lead;
pub mod messages;
pub mod whatsapp;

pub use lead::{AdvertiseForm, Destinacao, Finalidade, LeadError};
pub use messages::{ContactTopic, InterestForm};
pub use whatsapp::{redirect_to_whatsapp, PrintRedirector, Redirector, WhatsappLink};
