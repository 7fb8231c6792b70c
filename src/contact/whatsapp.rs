use crate::settings::ContactSettings;
use anyhow::Result;
use tracing::info;

/// Builds wa.me deep links for the configured contact number
#[derive(Debug, Clone)]
pub struct WhatsappLink {
    phone: String,
}

impl WhatsappLink {
    /// Only the digits of `phone` are kept
    pub fn new(phone: &str) -> Self {
        Self {
            phone: phone.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    pub fn from_settings(settings: &ContactSettings) -> Self {
        Self::new(&settings.whatsapp_phone)
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn url(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(message)
        )
    }
}

/// Opens a link in a new browsing context
pub trait Redirector {
    fn open(&self, url: &str) -> Result<()>;
}

/// Terminal stand-in for a browser: logs and prints the link
#[derive(Debug, Default)]
pub struct PrintRedirector;

impl Redirector for PrintRedirector {
    fn open(&self, url: &str) -> Result<()> {
        info!("Opening WhatsApp link");
        println!("{}", url);
        Ok(())
    }
}

/// Build the link for `message` and hand it to the redirector
pub fn redirect_to_whatsapp<R: Redirector + ?Sized>(
    link: &WhatsappLink,
    redirector: &R,
    message: &str,
) -> Result<String> {
    let url = link.url(message);
    redirector.open(&url)?;
    Ok(url)
}
