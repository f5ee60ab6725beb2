use actix_session::Session;

const FLASH_KEY: &str = "flash";

/// Queue a one-shot message for the next rendered page.
pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

/// Remove and return the pending flash message, if any.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
