//! Session cookies: bearer token and signed-in user

use contracts::system::auth::UserInfo;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use crate::shared::config::config;

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn all_cookies() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

fn write_cookie(raw: &str) {
    if let Some(doc) = html_document() {
        if doc.set_cookie(raw).is_err() {
            log::warn!("Failed to write cookie");
        }
    }
}

/// Value of cookie `name` in a `document.cookie` string
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn set_cookie_string(name: &str, value: &str) -> String {
    format!("{}={}; path=/; SameSite=Lax", name, urlencoding::encode(value))
}

pub fn expired_cookie_string(name: &str) -> String {
    format!("{}=; path=/; max-age=0", name)
}

pub fn save_token(token: &str) {
    write_cookie(&set_cookie_string(&config().auth.token_cookie, token));
}

pub fn get_token() -> Option<String> {
    read_cookie(&all_cookies(), &config().auth.token_cookie)
}

/// Stored as a JSON string of the user's email
pub fn save_user(user: &UserInfo) {
    match serde_json::to_string(&user.email) {
        Ok(json) => write_cookie(&set_cookie_string(&config().auth.user_cookie, &json)),
        Err(e) => log::warn!("Failed to serialize user: {}", e),
    }
}

pub fn get_user() -> Option<UserInfo> {
    let raw = read_cookie(&all_cookies(), &config().auth.user_cookie)?;
    let email = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    Some(UserInfo { email })
}

pub fn clear_session() {
    write_cookie(&expired_cookie_string(&config().auth.token_cookie));
    write_cookie(&expired_cookie_string(&config().auth.user_cookie));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie() {
        let cookies = "theme=dark; authToken=abc.def; userData=%22ops%40example.com%22";
        assert_eq!(read_cookie(cookies, "authToken").as_deref(), Some("abc.def"));
        assert_eq!(
            read_cookie(cookies, "userData").as_deref(),
            Some("\"ops@example.com\"")
        );
        assert_eq!(read_cookie(cookies, "missing"), None);
        assert_eq!(read_cookie("authToken=", "authToken"), None);
    }

    #[test]
    fn test_cookie_strings() {
        assert_eq!(
            set_cookie_string("userData", "\"a@b.co\""),
            "userData=%22a%40b.co%22; path=/; SameSite=Lax"
        );
        assert_eq!(expired_cookie_string("authToken"), "authToken=; path=/; max-age=0");
    }
}
