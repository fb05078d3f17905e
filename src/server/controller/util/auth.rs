use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::session::{flash::SessionFlash, SessionContext},
    view::View,
};

/// Path of the catalog page.
pub const HOME_PATH: &str = "/";
/// Path of the login page.
pub const LOGIN_PATH: &str = "/login/";

/// Redirect home when the session is already logged in.
pub fn redirect_if_authenticated(ctx: &SessionContext) -> Option<View> {
    ctx.is_authenticated().then(|| View::redirect(HOME_PATH))
}

/// Redirect to the login page with a warning when the session is anonymous.
pub async fn require_login(
    session: &Session,
    ctx: &SessionContext,
    message: &str,
) -> Result<Option<View>, Error> {
    if ctx.is_authenticated() {
        return Ok(None);
    }

    SessionFlash::warning(session, message).await?;

    Ok(Some(View::redirect(LOGIN_PATH)))
}
