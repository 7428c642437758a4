// ============================================================================
// MESSAGE CATALOG
// ============================================================================
// Every user-facing string lives here, keyed by a stable identifier, so the
// display language never leaks into page control flow.
// ============================================================================

use std::cell::Cell;

use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("tr") {
            Language::Turkish
        } else {
            Language::English
        }
    }
}

thread_local! {
    static LANGUAGE: Cell<Option<Language>> = const { Cell::new(None) };
}

fn detect() -> Language {
    window()
        .map(|w| w.navigator().language())
        .map(|tag| Language::from_tag(&tag.unwrap_or_default()))
        .unwrap_or_default()
}

/// Browser language, detected once per page load.
pub fn current_language() -> Language {
    LANGUAGE.with(|cell| match cell.get() {
        Some(lang) => lang,
        None => {
            let lang = detect();
            cell.set(Some(lang));
            lang
        }
    })
}

/// Catalog lookup in the detected language.
pub fn t(key: &'static str) -> &'static str {
    translate(current_language(), key)
}

/// Catalog lookup in an explicit language. Unknown keys fall through to the
/// English catalog and finally to the key itself.
pub fn translate(lang: Language, key: &'static str) -> &'static str {
    let text = match lang {
        Language::Turkish => turkish(key).or_else(|| english(key)),
        Language::English => english(key),
    };
    text.unwrap_or(key)
}

/// All catalog keys, for coverage tests.
pub const KEYS: &[&str] = &[
    "app_title",
    "app_tagline",
    "not_found",
    "back_to_home",
    "booking_success",
    "booking_confirmation",
    "booking_load_failed",
    "ticket_id",
    "seat_number",
    "passenger_name",
    "email",
    "flight_details",
    "flight_number",
    "price",
    "from",
    "to",
    "booking_date",
    "print_ticket",
    "book_another_flight",
    "admin_login",
    "quick_login",
    "manual_login",
    "manual_login_hint",
    "logging_in",
    "username",
    "password",
    "username_placeholder",
    "password_placeholder",
    "fields_required",
    "login_success",
    "login_failed",
    "already_logged_in",
    "default_credentials_hint",
    "admin_dashboard",
    "dashboard_welcome",
    "dashboard_not_logged_in",
    "go_to_login",
];

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "app_title" => "SkyTicket",
        "app_tagline" => "Book your next flight in minutes",
        "not_found" => "Page not found",
        "back_to_home" => "Back to Home",
        "booking_success" => "Your ticket has been booked successfully!",
        "booking_confirmation" => "Booking Confirmation",
        "booking_load_failed" => "Failed to load booking details",
        "ticket_id" => "Ticket ID",
        "seat_number" => "Seat Number",
        "passenger_name" => "Passenger Name",
        "email" => "Email",
        "flight_details" => "Flight Details",
        "flight_number" => "Flight Number",
        "price" => "Price",
        "from" => "From",
        "to" => "To",
        "booking_date" => "Booking Date",
        "print_ticket" => "Print Ticket",
        "book_another_flight" => "Book Another Flight",
        "admin_login" => "Admin Login",
        "quick_login" => "🚀 Quick Login (Admin)",
        "manual_login" => "📝 Sign In",
        "manual_login_hint" => "or sign in manually",
        "logging_in" => "⏳ Signing in...",
        "username" => "Username",
        "password" => "Password",
        "username_placeholder" => "Enter username",
        "password_placeholder" => "Enter password",
        "fields_required" => "Please fill in all fields",
        "login_success" => "✅ Login successful! Redirecting to the dashboard...",
        "login_failed" => "Login failed",
        "already_logged_in" => "You are already logged in! Redirecting to the dashboard...",
        "default_credentials_hint" => "Default: admin / admin123",
        "admin_dashboard" => "Admin Dashboard",
        "dashboard_welcome" => "Welcome back, administrator.",
        "dashboard_not_logged_in" => "You are not logged in.",
        "go_to_login" => "Go to login",
        _ => return None,
    };
    Some(text)
}

fn turkish(key: &str) -> Option<&'static str> {
    let text = match key {
        "app_title" => "SkyTicket",
        "app_tagline" => "Bir sonraki uçuşunuzu dakikalar içinde ayırtın",
        "not_found" => "Sayfa bulunamadı",
        "back_to_home" => "Ana Sayfaya Dön",
        "booking_success" => "Biletiniz başarıyla oluşturuldu!",
        "booking_confirmation" => "Rezervasyon Onayı",
        "booking_load_failed" => "Rezervasyon bilgileri yüklenemedi",
        "ticket_id" => "Bilet No",
        "seat_number" => "Koltuk No",
        "passenger_name" => "Yolcu Adı",
        "email" => "E-posta",
        "flight_details" => "Uçuş Bilgileri",
        "flight_number" => "Uçuş No",
        "price" => "Fiyat",
        "from" => "Nereden",
        "to" => "Nereye",
        "booking_date" => "Rezervasyon Tarihi",
        "print_ticket" => "Bileti Yazdır",
        "book_another_flight" => "Başka Uçuş Ayırt",
        "admin_login" => "Admin Girişi",
        "quick_login" => "🚀 Hızlı Giriş (Admin)",
        "manual_login" => "📝 Manuel Giriş",
        "manual_login_hint" => "veya manuel giriş yapın",
        "logging_in" => "⏳ Giriş yapılıyor...",
        "username" => "Kullanıcı Adı",
        "password" => "Şifre",
        "username_placeholder" => "Kullanıcı adınızı girin",
        "password_placeholder" => "Şifrenizi girin",
        "fields_required" => "Lütfen tüm alanları doldurun",
        "login_success" => "✅ Giriş başarılı! Dashboard'a yönlendiriliyorsunuz...",
        "login_failed" => "Giriş başarısız oldu",
        "already_logged_in" => "Zaten giriş yapmışsınız! Dashboard'a yönlendiriliyorsunuz...",
        "default_credentials_hint" => "Varsayılan: admin / admin123",
        "admin_dashboard" => "Admin Paneli",
        "dashboard_welcome" => "Tekrar hoş geldiniz, yönetici.",
        "dashboard_not_logged_in" => "Giriş yapmadınız.",
        "go_to_login" => "Girişe git",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_in_english() {
        for key in KEYS {
            assert_ne!(translate(Language::English, key), *key, "missing: {key}");
        }
    }

    #[test]
    fn every_key_resolves_in_turkish() {
        for key in KEYS {
            assert!(turkish(key).is_some(), "missing Turkish text: {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate(Language::Turkish, "no_such_key"), "no_such_key");
    }

    #[test]
    fn generic_fetch_failure_message_is_stable() {
        assert_eq!(
            translate(Language::English, "booking_load_failed"),
            "Failed to load booking details"
        );
    }

    #[test]
    fn language_from_tag_matches_prefix() {
        assert_eq!(Language::from_tag("tr-TR"), Language::Turkish);
        assert_eq!(Language::from_tag("TR"), Language::Turkish);
        assert_eq!(Language::from_tag("en-US"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
    }
}
