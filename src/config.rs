
#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:3001/webhook/sc"  // Local request catcher while developing
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://webhook.infra-remakingautomacoes.cloud/webhook/sc"
}

pub fn zip_lookup_url(zip: &str) -> String {
    format!("https://api.zippopotam.us/us/{}", zip)
}

pub const BUSINESS_PHONE: &str = "(843) 297-9935";
pub const BUSINESS_PHONE_HREF: &str = "tel:8432979935";
pub const BUSINESS_EMAIL: &str = "admin@starcleaning.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/star.cleaningsc/";
